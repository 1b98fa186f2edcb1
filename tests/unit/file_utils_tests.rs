/*!
 * Tests for file utility functions
 */

use std::fs;
use anyhow::Result;
use vttclean::errors::SubtitleError;
use vttclean::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "test_file_exists.vtt", "WEBVTT")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));

    Ok(())
}

/// Test that ensure_dir creates nested directories
#[test]
fn test_ensure_dir_withNestedDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("a").join("b");

    FileManager::ensure_dir(&nested)?;

    assert!(nested.is_dir());
    Ok(())
}

/// Test that a UTF-8 subtitle file is read verbatim
#[test]
fn test_read_subtitle_file_withValidFile_shouldReturnContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_subtitle(temp_dir.path(), "talk.en.vtt")?;

    let content = FileManager::read_subtitle_file(&test_file)?;
    assert_eq!(content, common::SAMPLE_VTT);

    Ok(())
}

/// Test that a missing path is reported as not found
#[test]
fn test_read_subtitle_file_withMissingFile_shouldReturnNotFound() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("missing.vtt");

    match FileManager::read_subtitle_file(&missing) {
        Err(SubtitleError::NotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {:?}", other),
    }

    Ok(())
}

/// Test that invalid UTF-8 is a read error carrying the cause
#[test]
fn test_read_subtitle_file_withInvalidUtf8_shouldReturnReadError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = temp_dir.path().join("latin1.vtt");
    fs::write(&test_file, [b'W', b'E', 0xff, 0xfe, b'\n'])?;

    let error = FileManager::read_subtitle_file(&test_file).unwrap_err();
    assert!(matches!(error, SubtitleError::Read { .. }));
    assert!(error.to_string().contains("Unable to read file"));
    assert!(error.to_string().contains("UTF-8"));

    Ok(())
}

/// Test that a directory exists but cannot be read as a subtitle
#[test]
fn test_read_subtitle_file_withDirectory_shouldReturnReadError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let error = FileManager::read_subtitle_file(temp_dir.path()).unwrap_err();
    assert!(matches!(error, SubtitleError::Read { .. }));

    Ok(())
}

/// Test that write_to_file creates parent directories
#[test]
fn test_write_to_file_withMissingParent_shouldCreateFileWithContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = temp_dir.path().join("out").join("transcript.txt");

    FileManager::write_to_file(&test_file, "Hello world\n")?;

    assert_eq!(fs::read_to_string(&test_file)?, "Hello world\n");
    Ok(())
}
