use std::fs;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with seeded store files.
///
/// Provides a fluent interface for preparing a temporary directory. Add files with
/// `with_file()`, then call `build()` to create the directory and write them.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_file("players.json", "{}")
///     .build()?;
/// ```
pub struct TestBuilder {
    /// File names and contents to write during `build()`.
    ///
    /// Files are written in the order they were added; a later entry with the same
    /// name overwrites an earlier one.
    files: Vec<(String, String)>,
}

impl TestBuilder {
    /// Creates a new test builder with no files configured.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a file to write into the temporary directory.
    ///
    /// # Arguments
    /// - `name` - File name relative to the temporary directory
    /// - `content` - Raw file content
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.files.push((name.to_string(), content.to_string()));
        self
    }

    /// Builds the test context.
    ///
    /// Creates a fresh temporary directory and writes every configured file into it.
    /// The directory is removed when the returned context is dropped.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the temporary directory
    /// - `Err(TestError::Io)` - Directory creation or a file write failed
    pub fn build(self) -> Result<TestContext, TestError> {
        let dir = tempfile::tempdir()?;

        for (name, content) in &self.files {
            fs::write(dir.path().join(name), content)?;
        }

        Ok(TestContext::new(dir))
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
