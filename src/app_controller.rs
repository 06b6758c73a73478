use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::cue::CueList;
use crate::file_utils::FileManager;
use crate::formats::SubtitleFormat;

// @module: Application controller for subtitle conversion

/// What happened to a single input file
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionOutcome {
    /// Output written to the given path
    Converted { output: PathBuf, cues: usize },
    /// Output exists and overwriting is disabled
    SkippedExisting(PathBuf),
    /// Input is already in the target format
    SkippedSameFormat,
}

/// Totals for a folder run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller for subtitle conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse a file, using `source` or else the file extension to pick the format
    pub fn inspect(&self, input_file: &Path, source: Option<SubtitleFormat>) -> Result<CueList> {
        let format = match source {
            Some(format) => format,
            None => SubtitleFormat::from_path(input_file)?,
        };
        let content = FileManager::read_to_string(input_file)?;
        format
            .parse(&content)
            .with_context(|| format!("Failed to parse {:?} as {}", input_file, format.display_name()))
    }

    /// Convert one file to `target`
    pub fn convert_file(
        &self,
        input_file: &Path,
        target: SubtitleFormat,
        source: Option<SubtitleFormat>,
        output: Option<&Path>,
        force_overwrite: bool,
    ) -> Result<ConversionOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let source_format = match source {
            Some(format) => format,
            None => SubtitleFormat::from_path(input_file)?,
        };

        let output_path = match output {
            Some(path) => path.to_path_buf(),
            None => self.output_path(input_file, None, target),
        };

        if output.is_none() && source_format == target && output_path == input_file {
            debug!("{:?} is already {}", input_file, target.display_name());
            return Ok(ConversionOutcome::SkippedSameFormat);
        }

        if output_path.exists() && !(force_overwrite || self.config.overwrite) {
            warn!("Output file already exists: {:?}. Use -f to force overwrite.", output_path);
            return Ok(ConversionOutcome::SkippedExisting(output_path));
        }

        let cues = self.inspect(input_file, Some(source_format))?;
        FileManager::write_to_file(&output_path, &target.render(&cues))?;

        info!(
            "Converted {:?} ({}) -> {:?} ({}), {} cues",
            input_file,
            source_format.display_name(),
            output_path,
            target.display_name(),
            cues.len()
        );

        Ok(ConversionOutcome::Converted {
            output: output_path,
            cues: cues.len(),
        })
    }

    /// Convert every subtitle file in `input_dir`; failures are logged and counted
    pub fn convert_folder(&self, input_dir: &Path, target: SubtitleFormat, force_overwrite: bool) -> Result<FolderSummary> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let files = FileManager::find_subtitle_files(input_dir, self.config.recursive)?;
        info!("Found {} subtitle file(s) in {:?}", files.len(), input_dir);

        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut summary = FolderSummary::default();

        for file in &files {
            progress.set_message(file.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default());

            let output = self.output_path(file, Some(input_dir), target);
            let result = if SubtitleFormat::from_path(file).ok() == Some(target) && output == *file {
                Ok(ConversionOutcome::SkippedSameFormat)
            } else {
                self.convert_file(file, target, None, Some(&output), force_overwrite)
            };

            match result {
                Ok(ConversionOutcome::Converted { .. }) => summary.converted += 1,
                Ok(_) => summary.skipped += 1,
                Err(e) => {
                    error!("Error converting {:?}: {:#}", file, e);
                    summary.failed += 1;
                }
            }

            progress.inc(1);
        }

        progress.finish_and_clear();
        info!(
            "Finished: {} converted, {} skipped, {} failed",
            summary.converted, summary.skipped, summary.failed
        );

        Ok(summary)
    }

    /// Output location for `input_file`: inside the configured output
    /// directory (keeping the path relative to `root`) or next to the input
    pub fn output_path(&self, input_file: &Path, root: Option<&Path>, target: SubtitleFormat) -> PathBuf {
        let sibling = FileManager::output_path_for(input_file, target);

        match &self.config.output_dir {
            Some(dir) => {
                let relative = root
                    .and_then(|root| sibling.strip_prefix(root).ok())
                    .map(Path::to_path_buf)
                    .or_else(|| sibling.file_name().map(PathBuf::from))
                    .unwrap_or_else(|| sibling.clone());
                dir.join(relative)
            }
            None => sibling,
        }
    }
}
