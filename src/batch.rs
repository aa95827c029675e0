//! Directory conversion.
//!
//! Files are discovered either with a single-level glob inside the input
//! directory or with a recursive walk matching file names against the
//! pattern. Discovered paths are sorted, then converted one at a time. The
//! first failing file aborts the run; files after it are never attempted.

use crate::error::{Error, IoAction, Result};
use crate::options::{ConversionOptions, ProcessOptions};
use crate::pipeline::Pipeline;
use glob::Pattern;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Extension given to every output file.
const OUTPUT_EXTENSION: &str = "html";

/// One input file and where its HTML goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTask {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// Progress notifications emitted while a directory is processed.
#[derive(Debug, Clone, Copy)]
pub enum BatchEvent<'a> {
    /// Discovery finished with this many matching files.
    Discovered(usize),
    /// About to convert a file.
    Converting(&'a FileTask),
    /// A file was written successfully.
    Converted(&'a FileTask),
}

/// Summary of a successful batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Output root of the run.
    pub output_dir: PathBuf,
    /// Files converted, in processing order.
    pub converted: Vec<FileTask>,
}

impl BatchReport {
    /// Number of files converted.
    pub fn count(&self) -> usize {
        self.converted.len()
    }

    /// Returns true if no file matched.
    pub fn is_empty(&self) -> bool {
        self.converted.is_empty()
    }
}

/// Converts every matching file of a directory.
pub struct BatchProcessor {
    pipeline: Pipeline,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new(ConversionOptions::default())
    }
}

impl BatchProcessor {
    /// Creates a processor using the production pipeline.
    pub fn new(options: ConversionOptions) -> Self {
        Self::with_pipeline(Pipeline::new(options))
    }

    /// Creates a processor around a custom pipeline.
    pub fn with_pipeline(pipeline: Pipeline) -> Self {
        Self { pipeline }
    }

    /// Processes all matching files in `dir`.
    pub fn process_directory(
        &self,
        dir: impl AsRef<Path>,
        options: &ProcessOptions,
    ) -> Result<BatchReport> {
        self.process_directory_with(dir, options, |_| {})
    }

    /// Processes all matching files in `dir`, reporting progress to `on_event`.
    pub fn process_directory_with<F>(
        &self,
        dir: impl AsRef<Path>,
        options: &ProcessOptions,
        mut on_event: F,
    ) -> Result<BatchReport>
    where
        F: FnMut(BatchEvent<'_>),
    {
        let dir = dir.as_ref();
        if !dir.exists() {
            return Err(Error::DirectoryNotExist(dir.to_path_buf()));
        }

        fs::create_dir_all(&options.output_dir)
            .map_err(|e| Error::io(&options.output_dir, IoAction::CreatingDirectory, e))?;

        let files = discover(dir, options)?;
        on_event(BatchEvent::Discovered(files.len()));

        let mut report = BatchReport {
            output_dir: options.output_dir.clone(),
            converted: Vec::with_capacity(files.len()),
        };

        if files.is_empty() {
            log::info!(
                "no files matching pattern '{}' found in '{}'",
                options.pattern,
                dir.display()
            );
            return Ok(report);
        }

        for input_path in files {
            let task = FileTask {
                output_path: output_path(&input_path, dir, &options.output_dir),
                input_path,
            };
            on_event(BatchEvent::Converting(&task));

            if let Err(e) = self.pipeline.convert_file(&task.input_path, &task.output_path) {
                return Err(Error::Batch {
                    path: task.input_path,
                    converted: report.count(),
                    source: Box::new(e),
                });
            }

            on_event(BatchEvent::Converted(&task));
            report.converted.push(task);
        }

        log::info!(
            "converted {} files to '{}'",
            report.count(),
            options.output_dir.display()
        );
        Ok(report)
    }
}

/// Finds the files in `dir` matching `options.pattern`, sorted by path.
pub fn discover(dir: impl AsRef<Path>, options: &ProcessOptions) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut files = if options.recursive {
        discover_recursive(dir, &options.pattern)?
    } else {
        discover_glob(dir, &options.pattern)?
    };
    files.sort();
    log::debug!("discovered {} files in {}", files.len(), dir.display());
    Ok(files)
}

fn invalid_pattern(pattern: &str, err: glob::PatternError) -> Error {
    Error::Pattern {
        pattern: pattern.to_string(),
        message: err.msg.to_string(),
    }
}

fn discover_glob(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let escaped_dir = Pattern::escape(&dir.to_string_lossy());
    let full = Path::new(&escaped_dir).join(pattern);
    let full = full.to_string_lossy();

    let mut files = Vec::new();
    for entry in glob::glob(&full).map_err(|e| invalid_pattern(pattern, e))? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => log::warn!("skipping unreadable entry: {}", e),
        }
    }
    Ok(files)
}

fn discover_recursive(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Pattern::new(pattern).map_err(|e| invalid_pattern(pattern, e))?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        // Follows symlinks to files, matching the flat glob.
        if !entry.path().is_file() {
            continue;
        }
        if matcher.matches(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Computes the output path for `input_file`.
///
/// The path relative to `input_dir` is mirrored under `output_dir` with its
/// extension replaced by `.html`. Paths outside `input_dir` keep their
/// structure below `output_dir`.
pub fn output_path(
    input_file: impl AsRef<Path>,
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> PathBuf {
    let input_file = input_file.as_ref();
    let relative = match input_file.strip_prefix(input_dir.as_ref()) {
        Ok(relative) => relative.to_path_buf(),
        // Drop the root so the path nests under the output directory.
        Err(_) => input_file
            .components()
            .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
            .collect(),
    };
    output_dir
        .as_ref()
        .join(relative.with_extension(OUTPUT_EXTENSION))
}
