// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use indicatif::{ProgressBar, ProgressStyle};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error, info, warn};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use copylint::app_config::{self, Config};
use copylint::content::ContentValidator;
use copylint::errors::AppError;
use copylint::file_utils::{FileKind, FileManager};
use copylint::markup::PrettyPrinter;
use copylint::semantic::SemanticValidator;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score prose files against the brand guidelines
    Check {
        /// Prose file or directory (.md, .markdown, .txt)
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Fail when any file scores below this value
        #[arg(long, value_name = "SCORE")]
        min_score: Option<u32>,
    },

    /// Print headings, paragraphs, terms and key phrases as JSON
    Parse {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Suggest improvements for prose files
    Suggest {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Validate semantic HTML structure
    Semantic {
        /// HTML file or directory (.html, .htm)
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Include general accessibility recommendations
        #[arg(long)]
        recommend: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pretty-print markup files
    Format {
        /// Markup file or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Rewrite files in place
        #[arg(short, long)]
        write: bool,

        /// Fail if any file is not already formatted
        #[arg(long, conflicts_with = "write")]
        check: bool,

        /// Treat every input as JSX
        #[arg(long)]
        jsx: bool,
    },

    /// Print minified markup
    Minify {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Generate shell completions for copylint
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// copylint - brand-tone content validation and markup formatting
///
/// Scores website copy against brand guidelines, validates semantic HTML
/// structure and pretty-prints markup.
#[derive(Parser, Debug)]
#[command(name = "copylint")]
#[command(version)]
#[command(about = "Brand-tone content validation and markup formatting")]
#[command(long_about = "copylint scores website copy against brand guidelines, validates semantic HTML structure and pretty-prints markup.

EXAMPLES:
    copylint check content/                     # Score every prose file in a directory
    copylint check --min-score 80 home.md       # Fail below a score of 80
    copylint parse home.md                      # Extract headings, terms and key phrases
    copylint semantic --recommend index.html    # Validate document structure
    copylint format --check site/               # Verify markup is formatted
    copylint format --write index.html          # Format in place
    copylint completions bash > copylint.bash   # Generate bash completions

CONFIGURATION:
    Policy is stored in copylint.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", value_name = "FILE", default_value = "copylint.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

/// Result for one input file
#[derive(Debug, Serialize)]
struct FileReport<T: Serialize> {
    path: String,
    #[serde(flatten)]
    result: T,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI colour for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, colour) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                colour,
                now,
                emoji,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept everything here; the effective level is applied through the max level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "copylint", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it before loading the config
    if let Some(level) = cli.log_level {
        log::set_max_level(app_config::LogLevel::from(level).into());
    }

    let mut config = Config::load_or_create(&cli.config_path).map_err(config_error)?;
    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    config
        .validate()
        .context("Configuration validation failed")
        .map_err(config_error)?;
    log::set_max_level(config.log_level.into());

    match cli.command {
        Commands::Check { path, json, min_score } => run_check(&config, &path, json, min_score),
        Commands::Parse { path } => run_parse(&config, &path),
        Commands::Suggest { path } => run_suggest(&config, &path),
        Commands::Semantic { path, recommend, json } => run_semantic(&config, &path, recommend, json),
        Commands::Format { path, write, check, jsx } => run_format(&config, &path, write, check, jsx),
        Commands::Minify { path } => run_minify(&config, &path),
        Commands::Completions { .. } => Ok(()),
    }
}

/// Flatten a configuration failure and its causes into one message
fn config_error(error: anyhow::Error) -> AppError {
    AppError::Config(format!("{:#}", error))
}

fn content_validator(config: &Config) -> ContentValidator {
    ContentValidator::with_config(config.content.guidelines.clone(), config.content.weights.clone())
}

// @returns: Progress bar in the shared style
fn progress_bar(len: usize, unit: &str) -> ProgressBar {
    let bar = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template(&format!(
            "{{spinner:.green}} [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {} ({{percent}}%) {{msg}}",
            unit
        ))
        .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style.progress_chars("█▓▒░"));
    bar
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn inputs(path: &Path, kind: FileKind) -> Result<Vec<PathBuf>> {
    let files = FileManager::collect_inputs(path, kind)?;
    if files.is_empty() {
        warn!("No matching files found in {:?}", path);
    }
    debug!("Found {} input file(s) in {:?}", files.len(), path);
    Ok(files)
}

fn print_findings(errors: &[String], warnings: &[String]) {
    for e in errors {
        println!("  error:   {}", e);
    }
    for w in warnings {
        println!("  warning: {}", w);
    }
}

fn run_check(config: &Config, path: &Path, json: bool, min_score: Option<u32>) -> Result<()> {
    let files = inputs(path, FileKind::Prose)?;
    let validator = content_validator(config);

    let progress = progress_bar(files.len(), "files");
    progress.set_message("Checking");
    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
        progress.set_message(format!("Checking: {}", display_name(file)));
        let content = FileManager::read_to_string(file)?;
        reports.push(FileReport {
            path: file.display().to_string(),
            result: validator.validate_content(&content),
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            let status = if report.result.is_valid { "ok" } else { "invalid" };
            println!("{} [{}] score {}", report.path, status, report.result.score);
            print_findings(&report.result.errors, &report.result.warnings);
        }
    }

    let invalid = reports.iter().filter(|r| !r.result.is_valid).count();
    let below = min_score.map_or(0, |min| reports.iter().filter(|r| r.result.score < min).count());
    info!("Checked {} file(s): {} invalid", reports.len(), invalid);

    if invalid > 0 {
        return Err(anyhow!("{} file(s) failed content validation", invalid));
    }
    if below > 0 {
        return Err(anyhow!(
            "{} file(s) scored below {}",
            below,
            min_score.unwrap_or_default()
        ));
    }
    Ok(())
}

fn run_parse(config: &Config, path: &Path) -> Result<()> {
    let validator = content_validator(config);
    let mut reports = Vec::new();

    for file in inputs(path, FileKind::Prose)? {
        let content = FileManager::read_to_string(&file)?;
        reports.push(FileReport {
            path: file.display().to_string(),
            result: validator.parse_content(&content),
        });
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

fn run_suggest(config: &Config, path: &Path) -> Result<()> {
    let validator = content_validator(config);

    for file in inputs(path, FileKind::Prose)? {
        let content = FileManager::read_to_string(&file)?;
        let suggestions = validator.suggest_improvements(&content);
        if suggestions.is_empty() {
            println!("{}: no suggestions", file.display());
            continue;
        }
        println!("{}:", file.display());
        for suggestion in suggestions {
            println!("  - {}", suggestion);
        }
    }
    Ok(())
}

fn run_semantic(config: &Config, path: &Path, recommend: bool, json: bool) -> Result<()> {
    let validator = SemanticValidator::with_weights(config.semantic.weights.clone());
    let mut reports = Vec::new();

    for file in inputs(path, FileKind::Markup)?.into_iter().filter(|f| !is_jsx_path(f)) {
        let html = FileManager::read_to_string(&file)?;
        let mut result = validator.validate_semantic_structure(&html);
        if recommend {
            result.recommendations.extend(validator.generate_recommendations(&html));
        }
        reports.push(FileReport {
            path: file.display().to_string(),
            result,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            let status = if report.result.is_valid { "ok" } else { "invalid" };
            println!("{} [{}] score {}", report.path, status, report.result.score);
            print_findings(&report.result.errors, &report.result.warnings);
            for r in &report.result.recommendations {
                println!("  note:    {}", r);
            }
        }
    }

    let invalid = reports.iter().filter(|r| !r.result.is_valid).count();
    if invalid > 0 {
        return Err(anyhow!("{} file(s) failed semantic validation", invalid));
    }
    Ok(())
}

/// Read and format one markup file, returning its source and formatted text
fn format_file(printer: &PrettyPrinter, path: &Path, jsx: bool) -> Result<(String, String), AppError> {
    let source = std::fs::read_to_string(path)?;
    let mut formatted = if jsx {
        printer.format_jsx(&source)?
    } else {
        printer.format_html(&source)?
    };
    formatted.push('\n');
    Ok((source, formatted))
}

fn is_jsx_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jsx") || ext.eq_ignore_ascii_case("tsx"))
}

fn run_format(config: &Config, path: &Path, write: bool, check: bool, jsx: bool) -> Result<()> {
    let printer = PrettyPrinter::with_options(config.formatting.clone());
    let files = inputs(path, FileKind::Markup)?;

    let progress = progress_bar(files.len(), "files");
    let mut failed = 0;
    let mut unformatted = 0;

    for file in &files {
        progress.set_message(format!("Formatting: {}", display_name(file)));
        match format_file(&printer, file, jsx || is_jsx_path(file)) {
            Ok((source, formatted)) => {
                if check {
                    if source != formatted {
                        progress.suspend(|| warn!("Not formatted: {}", file.display()));
                        unformatted += 1;
                    }
                } else if write {
                    if source != formatted {
                        FileManager::write_to_file(file, &formatted)?;
                        debug!("Rewrote {}", file.display());
                    }
                } else {
                    progress.suspend(|| print!("{}", formatted));
                }
            }
            Err(e) => {
                progress.suspend(|| error!("{}: {}", file.display(), e));
                failed += 1;
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    if failed > 0 {
        return Err(anyhow!("{} file(s) could not be formatted", failed));
    }
    if unformatted > 0 {
        return Err(anyhow!("{} file(s) are not formatted", unformatted));
    }
    info!("Formatted {} file(s)", files.len());
    Ok(())
}

fn run_minify(config: &Config, path: &Path) -> Result<()> {
    let printer = PrettyPrinter::with_options(config.formatting.clone());

    for file in inputs(path, FileKind::Markup)? {
        let markup = FileManager::read_to_string(&file)?;
        println!("{}", printer.minify_html(&markup));
    }
    Ok(())
}
