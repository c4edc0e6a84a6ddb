//! Represents a file chosen in one of the form's file inputs.
//!
//! Only the size is inspected here. Transport and content checks happen
//! elsewhere, if at all.

use anyhow::{bail, Result};

/// A file reference that is known to be non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileInput {
    // Size of the file in bytes, always greater than zero
    size: u64,
}

impl FileInput {
    /// Creates a new FileInput from the reported size.
    ///
    /// A browser submits an empty file input as a nameless, zero-size file,
    /// so a zero size is what "nothing selected" looks like.
    ///
    /// # Returns
    /// * `Ok(FileInput)` if a file was actually selected
    /// * `Err` if the file is empty
    pub fn new(size: u64) -> Result<Self> {
        if size == 0 {
            bail!("File content cannot be empty");
        }

        Ok(Self { size })
    }

    /// Returns the size in bytes
    pub fn size(&self) -> u64 {
        self.size
    }
}
