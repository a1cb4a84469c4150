//! Test-only helpers for building grids and faking the bio field.

use std::cell::{Cell, RefCell};

use anyhow::{Result, bail};

use crate::core::codec::{ParseMode, decode};
use crate::core::grid::Grid;
use crate::io::bio::BioStore;

/// Build a grid from rows of `'1'`/`'0'` characters.
pub fn grid_from_strs(rows: &[&str]) -> Grid {
    decode(&rows.join("\n"), ParseMode::Strict).expect("test grid")
}

/// In-memory bio field that records writes.
pub struct MemoryBio {
    contents: RefCell<String>,
    writes: Cell<usize>,
    fail_reads: bool,
}

impl MemoryBio {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(contents.into()),
            writes: Cell::new(0),
            fail_reads: false,
        }
    }

    /// Store whose reads always fail; writes still succeed.
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::new("")
        }
    }

    pub fn contents(&self) -> String {
        self.contents.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl BioStore for MemoryBio {
    fn read_bio(&self) -> Result<String> {
        if self.fail_reads {
            bail!("bio unavailable");
        }
        Ok(self.contents())
    }

    fn write_bio(&self, text: &str) -> Result<()> {
        *self.contents.borrow_mut() = text.to_string();
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
