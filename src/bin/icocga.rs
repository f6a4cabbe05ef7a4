use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use icocga::{emit, preview, IconDir, IconSize};

//===========================================================================//

#[derive(Subcommand)]
enum CliCommand {
    /// Prints an icon as a C array of CGA palette indices
    Array {
        /// Icon size to produce (16 or 32)
        #[arg(long, short, default_value = "32")]
        size: IconSize,
        /// Sets output path (default: stdout)
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Name of the array
        name: String,
        /// Input ICO file
        ico: PathBuf,
    },
    /// Writes a display name and a 16x16 icon as a binary .inf record
    Inf {
        /// Display name
        name: String,
        /// Input ICO file
        ico: PathBuf,
        /// Output .inf file
        output: PathBuf,
    },
    /// Lists images in an ICO file
    List {
        /// Input ICO file
        ico: PathBuf,
    },
    /// Renders the converted icon as a PNG
    Preview {
        /// Icon size to produce (16 or 32)
        #[arg(long, short, default_value = "32")]
        size: IconSize,
        /// Input ICO file
        ico: PathBuf,
        /// Output PNG file
        output: PathBuf,
    },
}

/// Converts 4bpp Windows icons into CGA palette index data
#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,
    #[command(subcommand)]
    command: CliCommand,
}

fn read_ico(path: &Path) -> Result<Vec<u8>> {
    fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))
}

fn decode(path: &Path, size: IconSize) -> Result<icocga::IconImage> {
    let data = read_ico(path)?;
    icocga::decode_icon(&data, size)
        .with_context(|| format!("failed to convert {}", path.display()))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn array(
    size: IconSize,
    output: Option<PathBuf>,
    name: &str,
    ico: &Path,
) -> Result<()> {
    let image = decode(ico, size)?;
    match output {
        Some(path) => {
            let mut writer = create(&path)?;
            emit::write_array_literal(&mut writer, name, &image)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            emit::write_array_literal(stdout.lock(), name, &image)?;
        }
    }
    Ok(())
}

fn inf(name: &str, ico: &Path, output: &Path) -> Result<()> {
    let image = decode(ico, IconSize::Small)?;
    // Encode fully before touching the output file.
    let mut record = Vec::new();
    emit::write_record(&mut record, name, &image)?;
    fs::write(output, &record)
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("wrote {} bytes to {}", record.len(), output.display());
    Ok(())
}

fn list(ico: &Path) -> Result<()> {
    let data = read_ico(ico)?;
    let icondir = IconDir::read(&data)
        .with_context(|| format!("failed to read {}", ico.display()))?;
    for (index, entry) in icondir.entries().iter().enumerate() {
        let kind = if entry.is_png(&data) { "PNG" } else { "BMP" };
        println!(
            "{:5}: {}x{} {}, {} bpp, {} bytes at offset {}",
            index,
            entry.width(),
            entry.height(),
            kind,
            entry.bits_per_pixel(),
            entry.data_size(),
            entry.data_offset()
        );
    }
    Ok(())
}

fn render(size: IconSize, ico: &Path, output: &Path) -> Result<()> {
    let image = decode(ico, size)?;
    let mut writer = create(output)?;
    preview::write_png(&image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.command {
        CliCommand::Array { size, output, name, ico } => {
            array(size, output, &name, &ico)
        }
        CliCommand::Inf { name, ico, output } => inf(&name, &ico, &output),
        CliCommand::List { ico } => list(&ico),
        CliCommand::Preview { size, ico, output } => {
            render(size, &ico, &output)
        }
    }
}

//===========================================================================//
