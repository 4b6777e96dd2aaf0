use std::{fs, path::PathBuf};

use tempfile::TempDir;

use crate::error::TestError;

/// Test environment owning a temporary directory.
///
/// Created by `TestBuilder::build()`. Store files live inside the directory; the
/// directory and everything in it are deleted when the context is dropped, so keep
/// the context alive for the whole test.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    pub(crate) fn new(dir: TempDir) -> Self {
        Self { dir }
    }

    /// Absolute path of a file inside the temporary directory.
    ///
    /// The file does not need to exist, which allows testing stores that start
    /// without a backing file.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Reads a file from the temporary directory.
    pub fn read(&self, name: &str) -> Result<String, TestError> {
        Ok(fs::read_to_string(self.path(name))?)
    }
}
