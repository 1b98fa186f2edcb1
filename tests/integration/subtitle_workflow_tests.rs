/*!
 * Integration tests for the read, clean, write workflow
 */

use std::fs;
use anyhow::Result;
use vttclean::app_config::Config;
use vttclean::app_controller::Controller;
use vttclean::errors::{AppError, SubtitleError};
use crate::common;

/// Cleaning a file writes the transcript and a newline to the writer
#[test]
fn test_run_withSampleVtt_shouldWriteTranscript() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let subtitle_path = common::create_test_subtitle(temp_dir.path(), "talk.en.vtt")?;
    let controller = Controller::with_config(Config::default());

    let mut out = Vec::<u8>::new();
    let stats = controller.run(&subtitle_path, &mut out)?;

    assert_eq!(String::from_utf8(out)?, "welcome to the show\ntoday we talk\n");
    assert_eq!(stats.line_count, 2);
    assert_eq!(stats.char_count, 33);

    Ok(())
}

/// A missing input fails before anything is written
#[test]
fn test_run_withMissingFile_shouldWriteNothing() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let controller = Controller::with_config(Config::default());

    let mut out = Vec::<u8>::new();
    let result = controller.run(&temp_dir.path().join("missing.vtt"), &mut out);

    assert!(matches!(result, Err(AppError::Subtitle(SubtitleError::NotFound(_)))));
    assert!(out.is_empty());

    Ok(())
}

/// An output file receives the same text as stdout would
#[test]
fn test_run_to_file_withNestedOutput_shouldCreateFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let subtitle_path = common::create_test_subtitle(temp_dir.path(), "talk.en.vtt")?;
    let output_path = temp_dir.path().join("out").join("talk.txt");
    let controller = Controller::with_config(Config::default());

    let stats = controller.run_to_file(&subtitle_path, &output_path)?;

    assert_eq!(fs::read_to_string(&output_path)?, "welcome to the show\ntoday we talk\n");
    assert_eq!(stats.line_count, 2);

    // A second run overwrites rather than appends
    controller.run_to_file(&subtitle_path, &output_path)?;
    assert_eq!(fs::read_to_string(&output_path)?, "welcome to the show\ntoday we talk\n");

    Ok(())
}

/// The stats block honors show_stats
#[test]
fn test_report_stats_withShowStatsToggle_shouldRespectConfig() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let subtitle_path = common::create_test_file(temp_dir.path(), "empty.vtt", "WEBVTT\n\n")?;

    let controller = Controller::with_config(Config::default());
    let stats = controller.run(&subtitle_path, &mut Vec::<u8>::new())?;
    let mut err = Vec::<u8>::new();
    controller.report_stats(&stats, &mut err)?;
    assert_eq!(String::from_utf8(err)?, "\n--- Statistics ---\nLines: 1\nCharacters: 0\n");

    let quiet = Controller::with_config(Config { show_stats: false, ..Config::default() });
    let mut err = Vec::<u8>::new();
    quiet.report_stats(&stats, &mut err)?;
    assert!(err.is_empty());
    assert!(!quiet.config().show_stats);

    Ok(())
}
