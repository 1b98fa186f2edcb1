use anyhow::{Result, Context};
use std::fs;
use std::path::Path;
use crate::errors::SubtitleError;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a subtitle file as UTF-8.
    ///
    /// A missing path is `NotFound`; anything else that stops the read
    /// (directories, permissions, invalid UTF-8) is `Read`.
    pub fn read_subtitle_file<P: AsRef<Path>>(path: P) -> Result<String, SubtitleError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(SubtitleError::NotFound(path.to_path_buf()));
        }

        fs::read_to_string(path).map_err(|source| SubtitleError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
