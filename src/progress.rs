// File: src/progress.rs
use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Receives one call per converted word.
pub trait Progress {
    fn word(&mut self, n: usize, total: usize) -> io::Result<()>;

    /// Called once after the last word.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Rewrites a single "Processing word N of TOTAL" line in place.
pub struct ConsoleProgress<W: Write> {
    out: W,
    started: bool,
}

impl ConsoleProgress<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out, started: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn word(&mut self, n: usize, total: usize) -> io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(format!("Processing word {} of {}", n, total))
        )?;
        self.started = true;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.started {
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

/// Used for `--quiet` runs and tests.
pub struct Silent;

impl Progress for Silent {
    fn word(&mut self, _n: usize, _total: usize) -> io::Result<()> {
        Ok(())
    }
}
