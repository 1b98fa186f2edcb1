use log::{info, debug};
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use crate::app_config::Config;
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::subtitle_processor::{CleanedTranscript, TranscriptStats};

// @module: Application controller for subtitle cleaning

/// Main application controller: read, clean, emit, report
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load and clean a subtitle file. Nothing is written yet.
    pub fn clean_file(&self, input_file: &Path) -> Result<CleanedTranscript, AppError> {
        let start_time = Instant::now();
        info!("Cleaning subtitles: {:?}", input_file);

        let content = FileManager::read_subtitle_file(input_file)?;
        debug!("Read {} bytes from {:?}", content.len(), input_file);

        let transcript = CleanedTranscript::from_vtt(&content);
        debug!("Cleaning took {:?}", start_time.elapsed());

        Ok(transcript)
    }

    /// Clean `input_file` and write the transcript plus a newline to `out`
    pub fn run<W: Write>(&self, input_file: &Path, out: &mut W) -> Result<TranscriptStats, AppError> {
        let transcript = self.clean_file(input_file)?;
        let text = transcript.text();

        writeln!(out, "{}", text)?;
        out.flush()?;

        Ok(TranscriptStats::for_text(&text))
    }

    /// Clean `input_file` into `output_file`, creating parent directories
    pub fn run_to_file(&self, input_file: &Path, output_file: &Path) -> Result<TranscriptStats, AppError> {
        let transcript = self.clean_file(input_file)?;
        let text = transcript.text();

        if FileManager::file_exists(output_file) {
            debug!("Overwriting existing file: {:?}", output_file);
        }

        FileManager::write_to_file(output_file, &format!("{}\n", text))
            .map_err(|e| AppError::File(format!("{:#}", e)))?;
        info!("Success: {:?}", output_file);

        Ok(TranscriptStats::for_text(&text))
    }

    /// Write the statistics block to `err` unless disabled in config
    pub fn report_stats<W: Write>(&self, stats: &TranscriptStats, err: &mut W) -> Result<(), AppError> {
        if self.config.show_stats {
            writeln!(err, "{}", stats)?;
        }
        Ok(())
    }
}
