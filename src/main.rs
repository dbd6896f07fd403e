use clap::Parser;
use eyre::{Result, WrapErr, eyre};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use nrfcrc::{Crc16, DEFAULT_POLYNOMIAL, DEFAULT_SEED};

#[derive(Parser, Debug)]
#[command(name = "nrfcrc", about = "nRF24L01 compatible CRC-16-CCITT calculator")]
struct Args {
    /// Input bytes as hex, e.g. "de ad be ef" or 0xdeadbeef
    #[arg(value_name = "DATA", required_unless_present = "file")]
    data: Option<String>,

    /// Checksum the contents of a file instead
    #[arg(long, value_name = "PATH", conflicts_with = "data")]
    file: Option<PathBuf>,

    /// Initial register value
    #[arg(long, env = "NRFCRC_SEED", value_parser = parse_u16, default_value_t = DEFAULT_SEED)]
    seed: u16,

    /// Generator polynomial without the x^16 term
    #[arg(long, env = "NRFCRC_POLY", value_parser = parse_u16, default_value_t = DEFAULT_POLYNOMIAL)]
    poly: u16,

    /// Feed the input last byte first
    #[arg(long)]
    reverse: bool,

    /// Expected CRC; exit with status 1 if it does not match
    #[arg(long, value_name = "CRC", value_parser = parse_u16)]
    verify: Option<u16>,
}

/// Accepts `0x`-prefixed hex or plain decimal.
fn parse_u16(s: &str) -> Result<u16, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse::<u16>(),
    };
    parsed.map_err(|e| format!("invalid 16-bit value '{s}': {e}"))
}

fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let digits: String = input.split_whitespace().collect();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits.as_str());
    hex::decode(digits).wrap_err_with(|| format!("invalid hex input '{input}'"))
}

fn main() -> Result<()> {
    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let data = match (&args.file, &args.data) {
        (Some(path), _) => {
            fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))?
        }
        (None, Some(text)) => decode_hex(text)?,
        (None, None) => return Err(eyre!("no input given")),
    };

    debug!(
        len = data.len(),
        seed = args.seed,
        poly = args.poly,
        reverse = args.reverse,
        "computing crc"
    );

    let mut crc = Crc16::with_params(args.seed, args.poly);
    if args.reverse {
        crc.update_reverse(&data);
    } else {
        crc.update(&data);
    }
    let result = crc.result();

    println!("0x{result:04X}");

    if let Some(expected) = args.verify {
        if result != expected {
            eprintln!("CRC mismatch: computed 0x{result:04X}, expected 0x{expected:04X}");
            std::process::exit(1);
        }
        info!("crc matches expected value");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_decimal() {
        assert_eq!(parse_u16("0xFFFF"), Ok(0xFFFF));
        assert_eq!(parse_u16("0X1021"), Ok(0x1021));
        assert_eq!(parse_u16("4129"), Ok(0x1021));
        assert!(parse_u16("0x10000").is_err());
        assert!(parse_u16("abc").is_err());
    }

    #[test]
    fn decodes_spaced_hex() {
        assert_eq!(decode_hex("de ad be ef").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(decode_hex("0x0102").unwrap(), vec![0x01, 0x02]);
        assert!(decode_hex("abc").is_err());
    }

    #[test]
    fn args_default_to_nrf24_parameters() {
        let args = Args::try_parse_from(["nrfcrc", "00"]).unwrap();
        assert_eq!(args.seed, DEFAULT_SEED);
        assert_eq!(args.poly, DEFAULT_POLYNOMIAL);
        assert!(!args.reverse);
    }
}
