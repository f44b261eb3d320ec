use clap::Parser;
use std::path::PathBuf;

use k5crc::Error;
use k5crc::crc::{crc16_ccitt, init};
use k5crc::eeprom::{Region, window_checksum};

#[derive(Parser, Debug)]
#[command(name = "k5crc", about = "CRC-16/CCITT of radio EEPROM dumps and frames")]
struct Args {
    /// Input file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Named EEPROM region of a full dump
    #[arg(
        long,
        value_enum,
        env = "K5CRC_REGION",
        conflicts_with_all = ["offset", "length"]
    )]
    region: Option<Region>,

    /// Start of the checksummed window (decimal or 0x-prefixed hex)
    #[arg(long, value_name = "N", env = "K5CRC_OFFSET", value_parser = parse_number::<usize>)]
    offset: Option<usize>,

    /// Window length in bytes. Defaults to the rest of the file.
    #[arg(long, value_name = "N", env = "K5CRC_LENGTH", value_parser = parse_number::<u16>)]
    length: Option<u16>,
}

fn parse_number<T>(s: &str) -> Result<T, String>
where
    T: TryFrom<u64>,
{
    let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    }
    .map_err(|e| e.to_string())?;
    T::try_from(value).map_err(|_| format!("{s} is out of range"))
}

fn run(args: &Args) -> Result<u16, Error> {
    init();

    let data = std::fs::read(&args.file)?;
    tracing::debug!(path = %args.file.display(), size = data.len(), "read input");

    if let Some(region) = args.region {
        return region.checksum(&data);
    }

    let offset = args.offset.unwrap_or(0);
    match args.length {
        Some(length) => window_checksum(&data, offset, length),
        None => {
            let tail = data.get(offset..).ok_or(Error::WindowOutOfBounds {
                offset,
                length: 0,
                available: data.len(),
            })?;
            tracing::debug!(offset, length = tail.len(), "checksum to end of file");
            Ok(crc16_ccitt(tail))
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(crc) => println!("0x{crc:04X}"),
        Err(e) => {
            eprintln!("k5crc: {e}");
            std::process::exit(1);
        }
    }
}
