// src/lib.rs

pub mod app;
pub mod config;
pub mod core;
pub mod errors;
pub mod legacy;
pub mod locator;
pub mod persistence;
pub mod progress;

pub use crate::app::{run, Outcome};
pub use crate::core::types::ChainRecord;
pub use crate::errors::{ConvertError, Result};
