//! streamcell CLI - inspect how raw sheet cells resolve to typed values

mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use report::{CellDescriptor, CellReport};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use streamcell_core::DateSystem;

#[derive(Parser)]
#[command(name = "streamcell")]
#[command(
    author,
    version,
    about = "Inspect how raw spreadsheet cells resolve to typed values"
)]
struct Cli {
    /// Use the 1904 date system instead of 1900
    #[arg(long, global = true)]
    date1904: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a single cell from its raw parts and show every typed view
    Inspect {
        /// Raw type tag (n, s, inlineStr, str, f, b, e)
        #[arg(short = 't', long = "type")]
        tag: Option<String>,

        /// Resolved content of the cell
        #[arg(short, long)]
        content: Option<String>,

        /// Raw value text, when it differs from the content
        #[arg(long)]
        raw: Option<String>,

        /// Formula expression; marks the cell as a formula cell
        #[arg(short, long)]
        formula: Option<String>,

        /// Number format code of the cell's style
        #[arg(long)]
        format_code: Option<String>,

        /// Number format index of the cell's style
        #[arg(long)]
        format_index: Option<u16>,

        /// Row index (0-based)
        #[arg(long, default_value = "0")]
        row: u32,

        /// Column index (0-based)
        #[arg(long, default_value = "0")]
        col: u16,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read JSON cell descriptors, one per line, and print a JSON report for each
    Batch {
        /// Input file with one descriptor per line ("-" for stdin)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let date_system = DateSystem::from_1904_flag(cli.date1904);

    match cli.command {
        Commands::Inspect {
            tag,
            content,
            raw,
            formula,
            format_code,
            format_index,
            row,
            col,
            json,
        } => {
            let descriptor = CellDescriptor {
                row,
                col,
                tag,
                content,
                raw,
                formula,
                format_code,
                format_index,
            };
            inspect(&descriptor, date_system, json)
        }
        Commands::Batch { input } => batch(&input, date_system),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn inspect(descriptor: &CellDescriptor, date_system: DateSystem, json: bool) -> Result<()> {
    let cell = descriptor.build(date_system);
    let report = CellReport::from_cell(&cell);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        report.write_text(&mut out)?;
    }
    Ok(())
}

fn batch(input: &Path, date_system: DateSystem) -> Result<()> {
    let reader: Box<dyn BufRead> = if input.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(input)
            .with_context(|| format!("Failed to open input file: {}", input.display()))?;
        Box::new(BufReader::new(file))
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut count = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let descriptor: CellDescriptor = serde_json::from_str(&line)
            .with_context(|| format!("Invalid cell descriptor on line {}", idx + 1))?;
        let cell = descriptor.build(date_system);

        serde_json::to_writer(&mut out, &CellReport::from_cell(&cell))?;
        writeln!(out)?;
        count += 1;
    }

    log::info!("reported {} cells", count);
    Ok(())
}
