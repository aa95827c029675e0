//! mdtohtml CLI - Markdown to styled HTML conversion tool
//!
//! A command-line tool for turning Markdown files into standalone HTML pages.

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use mdtohtml::{
    BatchEvent, BatchProcessor, ConversionOptions, MarkdownValidator, Pipeline, ProcessOptions,
    Validator,
};
use std::path::{Path, PathBuf};

/// Markdown to HTML conversion with GitHub styling
#[derive(Parser, Debug)]
#[command(
    name = "mdtohtml",
    version,
    about = "Convert Markdown documents to styled HTML",
    long_about = "mdtohtml - Markdown to standalone HTML converter.\n\n\
                  Produces complete HTML documents with an embedded GitHub-style stylesheet.\n\n\
                  Usage:\n  \
                  mdtohtml <input.md> <output.html>      Convert a single file\n  \
                  mdtohtml batch <dir> -o <out-dir>      Convert every Markdown file in a directory\n  \
                  mdtohtml validate <input.md>           Check a file without writing output"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input Markdown file (for default conversion)
    #[arg(requires = "output")]
    input: Option<PathBuf>,

    /// Output HTML file (for default conversion)
    output: Option<PathBuf>,

    #[command(flatten)]
    typography: TypographyArgs,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

/// Typography switches shared by every conversion command.
#[derive(Args, Debug, Clone, Copy)]
struct TypographyArgs {
    /// Use smart punctuation (curly quotes, dashes, ellipses)
    #[arg(
        long = "smartypants",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    smart_punctuation: bool,

    /// Use LaTeX-style dash rules
    #[arg(
        long = "latexdashes",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    latex_dashes: bool,

    /// Render 1/2, 1/4 and 3/4 as fraction glyphs
    #[arg(
        long = "fractions",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = true,
        default_missing_value = "true"
    )]
    fractions: bool,
}

impl From<TypographyArgs> for ConversionOptions {
    fn from(args: TypographyArgs) -> Self {
        ConversionOptions::new()
            .with_smart_punctuation(args.smart_punctuation)
            .with_latex_dashes(args.latex_dashes)
            .with_fractions(args.fractions)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a single Markdown file to HTML (default command)
    Convert {
        /// Input Markdown file
        input: PathBuf,

        /// Output HTML file
        output: PathBuf,

        #[command(flatten)]
        typography: TypographyArgs,
    },

    /// Convert all matching Markdown files in a directory
    Batch {
        /// Input directory
        input_dir: PathBuf,

        /// Output directory
        #[arg(short = 'o', long = "out-dir", default_value = ".")]
        out_dir: PathBuf,

        /// File name pattern
        #[arg(short, long, default_value = "*.md")]
        pattern: String,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,

        #[command(flatten)]
        typography: TypographyArgs,
    },

    /// Check that a Markdown file converts without writing output
    Validate {
        /// Input Markdown file
        input: PathBuf,

        #[command(flatten)]
        typography: TypographyArgs,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    log::debug!("cli: {cli:?}");

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(command) = cli.command else {
        // Default command (mdtohtml <input> <output>)
        return match (cli.input, cli.output) {
            (Some(input), Some(output)) => run_convert(&input, &output, cli.typography.into()),
            _ => {
                use clap::CommandFactory;
                Cli::command().print_help()?;
                Ok(())
            }
        };
    };

    match command {
        Commands::Convert {
            input,
            output,
            typography,
        } => run_convert(&input, &output, typography.into())?,

        Commands::Batch {
            input_dir,
            out_dir,
            pattern,
            recursive,
            typography,
        } => {
            let mut options = ProcessOptions::new()
                .with_output_dir(out_dir)
                .with_pattern(pattern);
            if recursive {
                options = options.recursive();
            }
            run_batch(&input_dir, &options, typography.into())?;
        }

        Commands::Validate { input, typography } => {
            MarkdownValidator::new(typography.into()).validate_file(&input)?;
            println!("{} {} is valid Markdown", "✓".green().bold(), input.display());
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn run_convert(
    input: &Path,
    output: &Path,
    options: ConversionOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = create_spinner(&format!("Converting {}...", input.display()));

    let result = Pipeline::new(options).convert_file(input, output);
    pb.finish_and_clear();
    result?;

    println!(
        "{} Converted {} -> {}",
        "✓".green().bold(),
        input.display(),
        output.display()
    );
    Ok(())
}

fn run_batch(
    input_dir: &Path,
    options: &ProcessOptions,
    conversion: ConversionOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = BatchProcessor::new(conversion).process_directory_with(
        input_dir,
        options,
        |event| match event {
            BatchEvent::Discovered(0) => {}
            BatchEvent::Discovered(count) => println!("Converting {} files...", count),
            BatchEvent::Converting(task) => println!(
                "Converting {} -> {}",
                task.input_path.display(),
                task.output_path.display()
            ),
            BatchEvent::Converted(_) => {}
        },
    )?;

    if report.is_empty() {
        println!(
            "{} No files matching pattern '{}' found in '{}'",
            "!".yellow().bold(),
            options.pattern,
            input_dir.display()
        );
    } else {
        println!(
            "{} Successfully converted {} files to '{}'",
            "✓".green().bold(),
            report.count(),
            report.output_dir.display()
        );
    }
    Ok(())
}

fn print_version() {
    println!("{} {}", "mdtohtml".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown to HTML converter with GitHub styling");
    println!();
    println!("Extensions: tables, footnotes, strikethrough, task lists, definition lists");
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
