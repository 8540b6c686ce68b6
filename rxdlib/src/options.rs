//! Layout options for dump output.
//!
//! This module contains the configuration that controls row layout: how
//! many octets appear per line, how they are grouped, and the hex letter
//! case.

use crate::error::RxdError;
use crate::Result;

/// Default number of octets per row, matching `xxd`.
pub const DEFAULT_COLS: usize = 16;

/// Default number of octets per group, matching `xxd`.
pub const DEFAULT_GROUP_SIZE: usize = 2;

/// Upper bound on octets per row.
pub const MAX_COLS: usize = 256;

/// Layout options for a dump.
///
/// Values above the allowed bounds are repaired by [`normalized`], the
/// same way the `xxd` CLI caps its `-c`/`-g` arguments. Zero cannot be
/// repaired and is rejected by [`validate`].
///
/// [`normalized`]: DumpOptions::normalized
/// [`validate`]: DumpOptions::validate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpOptions {
    /// Octets rendered per row
    pub cols: usize,
    /// Octets per hex group before a separating space
    pub group_size: usize,
    /// Render hex letters as A-F instead of a-f
    pub uppercase: bool,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            group_size: DEFAULT_GROUP_SIZE,
            uppercase: false,
        }
    }
}

impl DumpOptions {
    /// Create new default options (16 octets per row, groups of 2,
    /// lower-case hex).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set octets per row.
    pub fn cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Builder: set octets per group.
    pub fn group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    /// Builder: set hex letter case.
    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    /// Clamp out-of-range values: `cols` is capped at [`MAX_COLS`] and
    /// `group_size` at the (capped) column count.
    pub fn normalized(self) -> Self {
        let cols = self.cols.min(MAX_COLS);
        Self {
            cols,
            group_size: self.group_size.min(cols),
            ..self
        }
    }

    /// Check that both layout values are within bounds.
    pub fn validate(&self) -> Result<()> {
        if self.cols < 1 || self.cols > MAX_COLS {
            return Err(RxdError::InvalidColumns(self.cols));
        }
        if self.group_size < 1 || self.group_size > self.cols {
            return Err(RxdError::InvalidGroupSize {
                got: self.group_size,
                cols: self.cols,
            });
        }
        Ok(())
    }
}
