pub mod converter;
pub mod normalize;
pub mod types;
