/*!
 * # vttclean - WebVTT subtitles to plain text
 *
 * A Rust library for turning subtitle tracks into de-duplicated transcript
 * lines ready for summarization.
 *
 * ## Features
 *
 * - Drop the WebVTT header block and cue timing lines
 * - Strip inline markup such as `<c>` or `<00:00:01.000>`
 * - Collapse whitespace and remove repeated lines (rolling captions)
 * - Report line and character counts of the result
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `subtitle_processor`: The cleaning routine and transcript statistics
 * - `file_utils`: File system operations
 * - `app_config`: Configuration management
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod subtitle_processor;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use subtitle_processor::{clean_vtt, CleanedTranscript, SubtitleCleaner, TranscriptStats};
pub use errors::{AppError, SubtitleError};
