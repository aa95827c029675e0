//! Options for conversion and batch processing.

use std::path::PathBuf;

/// Typography options passed to the Markdown converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionOptions {
    /// Smart quotes, dashes and ellipses.
    pub smart_punctuation: bool,

    /// LaTeX-style dash rules (`--` en dash, `---` em dash).
    pub latex_dashes: bool,

    /// Replace `1/2`, `1/4` and `3/4` with fraction glyphs.
    pub fractions: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            smart_punctuation: true,
            latex_dashes: true,
            fractions: true,
        }
    }
}

impl ConversionOptions {
    /// Creates new options with default settings (all typography enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with every typographic substitution disabled.
    pub fn plain() -> Self {
        Self {
            smart_punctuation: false,
            latex_dashes: false,
            fractions: false,
        }
    }

    /// Sets smart punctuation.
    pub fn with_smart_punctuation(mut self, enabled: bool) -> Self {
        self.smart_punctuation = enabled;
        self
    }

    /// Sets LaTeX-style dashes.
    pub fn with_latex_dashes(mut self, enabled: bool) -> Self {
        self.latex_dashes = enabled;
        self
    }

    /// Sets fraction substitution.
    pub fn with_fractions(mut self, enabled: bool) -> Self {
        self.fractions = enabled;
        self
    }

    /// Returns true if the engine should run in typographic substitution mode.
    pub fn is_typographic(&self) -> bool {
        self.smart_punctuation || self.latex_dashes || self.fractions
    }
}

/// Options for converting a directory of documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Directory where HTML files are written.
    pub output_dir: PathBuf,

    /// Glob pattern matched against file names (e.g. `*.md`).
    pub pattern: String,

    /// Whether subdirectories are walked.
    pub recursive: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            pattern: "*.md".to_string(),
            recursive: false,
        }
    }
}

impl ProcessOptions {
    /// Creates new options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Sets the file name pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Enables recursive directory traversal.
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }
}
