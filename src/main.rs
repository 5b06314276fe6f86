//! # chatlytics CLI
//!
//! Command-line interface for the chatlytics library.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatlytics::cli::{Args, OutputFormat};
use chatlytics::config::{AnalyzerConfig, ParserConfig};
use chatlytics::core::{Analyzer, UserFilter};
use chatlytics::format::{self, to_format_string, write_to_format};
use chatlytics::parser::ChatParser;
use chatlytics::ChatlyticsError;

fn main() {
    let args = <Args as ClapParser>::parse();
    setup_logging(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `-v`.
fn setup_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}

fn run(args: &Args) -> Result<(), ChatlyticsError> {
    let start = Instant::now();

    let parser = ChatParser::with_config(
        ParserConfig::new().with_date_format(args.date_format.into()),
    )?;
    let analyzer = Analyzer::with_config(load_analyzer_config(args)?)?;

    let records = parser.parse_file(&args.input)?;
    debug!(
        records = records.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "parsed export"
    );

    if args.list_users {
        let mut stdout = io::stdout().lock();
        for choice in analyzer.user_choices(&records) {
            writeln!(stdout, "{choice}")?;
        }
        return Ok(());
    }

    let filter = args
        .user
        .as_deref()
        .map_or(UserFilter::All, |name| UserFilter::from(name));
    if let UserFilter::User(name) = &filter {
        if !analyzer.users(&records).iter().any(|u| u == name) {
            warn!(user = %name, "user not found in export, statistics will be empty");
        }
    }

    let report = analyzer.report(&filter, &records);

    let format: format::OutputFormat = args.format.into();
    let output = match (&args.output, args.format) {
        (Some(path), _) => Some(path.clone()),
        (None, OutputFormat::Csv) => Some(PathBuf::from(Args::DEFAULT_CSV_DIR)),
        (None, _) => None,
    };

    match output {
        Some(path) => {
            write_to_format(&report, &path, format)?;
            print_summary(&args.input, &path, args.format, start);
        }
        None => {
            let mut rendered = to_format_string(&report, format)?;
            if !rendered.ends_with('\n') {
                rendered.push('\n');
            }
            io::stdout().lock().write_all(rendered.as_bytes())?;
        }
    }

    Ok(())
}

fn load_analyzer_config(args: &Args) -> Result<AnalyzerConfig, ChatlyticsError> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::from_json_file(path)?,
        None => AnalyzerConfig::new(),
    };
    if let Some(path) = &args.stop_words {
        config = config.with_stop_words_file(path)?;
    }
    Ok(config)
}

fn print_summary(input: &Path, output: &Path, format: OutputFormat, start: Instant) {
    println!("📊 chatlytics v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", input.display());
    println!("💾 Output:  {}", output.display());
    println!("📄 Format:  {}", format);
    println!("✅ Done in {:.2}s", start.elapsed().as_secs_f64());
}
