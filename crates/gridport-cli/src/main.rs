//! Gridport CLI - lossless delimited grid conversion tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gridport::prelude::*;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridport")]
#[command(
    author,
    version,
    about = "Lossless CSV/TSV conversion and inspection tool"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Delimiter mode argument
#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Comma-separated fields
    Csv,
    /// Tab-separated fields
    Tab,
}

impl From<Mode> for DelimiterMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Csv => DelimiterMode::Csv,
            Mode::Tab => DelimiterMode::Tab,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a delimited document between CSV and TAB modes
    Convert {
        /// Input file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Delimiter mode of the input
        #[arg(long, value_enum, default_value = "csv")]
        from: Mode,

        /// Delimiter mode of the output
        #[arg(long, value_enum, default_value = "tab")]
        to: Mode,

        /// Terminate lines with LF instead of CRLF
        #[arg(long)]
        lf: bool,
    },

    /// Show information about a delimited document
    Info {
        /// Input file
        input: PathBuf,

        /// Delimiter mode of the input
        #[arg(long, value_enum, default_value = "csv")]
        mode: Mode,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            from,
            to,
            lf,
        } => convert(&input, output.as_deref(), from.into(), to.into(), lf),
        Commands::Info { input, mode } => show_info(&input, mode.into()),
    }
}

fn convert(
    input: &Path,
    output: Option<&Path>,
    from: DelimiterMode,
    to: DelimiterMode,
    lf: bool,
) -> Result<()> {
    let grid = DocumentReader::read_file(input, &ReadOptions::with_mode(from))
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    let options = WriteOptions {
        mode: to,
        line_terminator: if lf {
            LineTerminator::LF
        } else {
            LineTerminator::CRLF
        },
    };

    match output {
        Some(path) => DocumentWriter::write_file(&grid, path, &options)
            .with_context(|| format!("Failed to write '{}'", path.display()))?,
        None => {
            let stdout = io::stdout();
            DocumentWriter::write(&grid, stdout.lock(), &options)
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

fn show_info(input: &Path, mode: DelimiterMode) -> Result<()> {
    let grid = DocumentReader::read_file(input, &ReadOptions::with_mode(mode))
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    println!("Rows:    {}", grid.row_count());
    println!("Columns: {}", grid.column_count());

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    for row in grid.rows() {
        for cell in row {
            *counts.entry(cell.type_name()).or_default() += 1;
        }
    }

    println!("Cells by type:");
    for (name, count) in counts {
        println!("  {name:<8} {count}");
    }

    Ok(())
}
