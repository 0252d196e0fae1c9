//! termpad - Main entry point
//! Runs the text area on the real terminal and prints what was typed

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use termpad::constants::defaults;
use termpad::syntax::Language;
use termpad::term::crossterm::CrosstermBackend;
use termpad::{TextArea, TextAreaConfig};

/// Exit status of a process ended by SIGINT, used for Ctrl+C
const EXIT_INTERRUPTED: u8 = 130;

#[derive(Debug, Parser)]
#[command(name = "termpad", version, about = "Type multi-line text in the terminal")]
struct Args {
    /// Header shown above the text
    #[arg(long, default_value = defaults::TITLE)]
    title: String,

    /// Dimmed hint shown under the title
    #[arg(long)]
    hint: Option<String>,

    /// Show line numbers in the gutter
    #[arg(short = 'n', long)]
    line_numbers: bool,

    /// Disable undo/redo
    #[arg(long)]
    no_undo: bool,

    /// Highlighting language: plain, rust or markdown
    #[arg(short, long, default_value = "plain")]
    lang: String,

    /// Draw without colors (also set by NO_COLOR)
    #[arg(long)]
    no_color: bool,

    /// Spaces inserted by Tab
    #[arg(long, default_value_t = defaults::TAB_WIDTH)]
    tab_width: usize,

    /// Write logs to this file (filter with TERMPAD_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Install file logging; the guard must live until exit so lines are flushed.
fn init_logging(path: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_env("TERMPAD_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Ok(guard)
}

fn run(args: Args) -> Result<ExitCode> {
    let _guard = args.log_file.as_deref().map(init_logging).transpose()?;

    let language: Language = args.lang.parse()?;
    let mut config = TextAreaConfig::new(args.title)
        .line_numbers(args.line_numbers)
        .undo(!args.no_undo)
        .language(language)
        .tab_width(args.tab_width)
        .color(!args.no_color && std::env::var_os("NO_COLOR").is_none());
    if let Some(hint) = args.hint {
        config = config.hint(hint);
    }

    let mut backend = CrosstermBackend::new()?;
    let mut area = TextArea::new(config);
    match area.run(&mut backend) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_interrupted() => {
            eprintln!("cancelled");
            Ok(ExitCode::from(EXIT_INTERRUPTED))
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "termpad failed");
            eprintln!("termpad: {e:#}");
            ExitCode::FAILURE
        }
    }
}
