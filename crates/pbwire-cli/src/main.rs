//! pbwire - Inspect and produce Protocol Buffers wire-format primitives
//!
//! This tool exposes the pbwire-core codecs on the command line: encode
//! scalars to hex, decode hex buffers at an offset, and apply the zigzag
//! transform. Handy for debugging captured protobuf traffic by hand.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pbwire_core::{fixed, varint, zigzag, FixedKind, Scalar};
use tracing::{debug, Level};
use tracing_subscriber::EnvFilter;

/// Inspect and produce Protocol Buffers wire-format primitives
#[derive(Parser, Debug)]
#[command(name = "pbwire")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode an unsigned 64-bit value as a varint
    EncodeVarint {
        /// Value to encode
        value: u64,
    },

    /// Encode a signed 64-bit value as a varint (raw two's-complement,
    /// protobuf int32/int64 semantics)
    EncodeSint {
        /// Value to encode
        value: i64,
    },

    /// Decode the varint at an offset in a hex buffer
    DecodeVarint {
        /// Hex-encoded buffer (e.g. "ac02")
        hex: String,

        /// Byte offset to decode at
        #[arg(short, long, default_value = "0")]
        offset: usize,

        /// Reinterpret the decoded bits as signed
        #[arg(long)]
        signed: bool,
    },

    /// Apply the zigzag transform to a signed value
    Zigzag {
        /// Value to map
        value: i64,

        /// Bit width of the mapping
        #[arg(long, value_enum, default_value = "64")]
        width: ZigzagWidth,

        /// Invert the mapping (value is treated as the unsigned image)
        #[arg(long)]
        decode: bool,
    },

    /// Pack a value into its fixed-width little-endian form
    Pack {
        /// Format tag: i, I, f, q, Q, or d
        kind: char,

        /// Value to pack, parsed per the kind
        value: String,
    },

    /// Unpack a fixed-width value from an offset in a hex buffer
    Unpack {
        /// Format tag: i, I, f, q, Q, or d
        kind: char,

        /// Hex-encoded buffer
        hex: String,

        /// Byte offset to read at
        #[arg(short, long, default_value = "0")]
        offset: usize,
    },
}

/// Bit width for the zigzag transform
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ZigzagWidth {
    /// 32-bit mapping
    #[value(name = "32")]
    W32,
    /// 64-bit mapping
    #[value(name = "64")]
    W64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .init();

    match cli.command {
        Command::EncodeVarint { value } => {
            println!("{}", hex::encode(varint::encode_varint(value)));
        }
        Command::EncodeSint { value } => {
            println!("{}", hex::encode(varint::encode_signed_varint(value)));
        }
        Command::DecodeVarint {
            hex: input,
            offset,
            signed,
        } => {
            let buffer = parse_hex(&input)?;
            debug!("decoding {} bytes at offset {}", buffer.len(), offset);
            if signed {
                let (value, next) = varint::decode_signed_varint(&buffer, offset)
                    .context("failed to decode varint")?;
                println!("{value} (next offset {next})");
            } else {
                let (value, next) = varint::decode_varint(&buffer, offset)
                    .context("failed to decode varint")?;
                println!("{value} (next offset {next})");
            }
        }
        Command::Zigzag {
            value,
            width,
            decode,
        } => match (width, decode) {
            (ZigzagWidth::W32, false) => {
                let n = i32::try_from(value).context("value does not fit in i32")?;
                println!("{}", zigzag::zigzag_encode32(n));
            }
            (ZigzagWidth::W32, true) => {
                let z = u32::try_from(value).context("value is not a valid u32 image")?;
                println!("{}", zigzag::zigzag_decode32(z));
            }
            (ZigzagWidth::W64, false) => println!("{}", zigzag::zigzag_encode64(value)),
            (ZigzagWidth::W64, true) => {
                let z = u64::try_from(value).context("value is not a valid u64 image")?;
                println!("{}", zigzag::zigzag_decode64(z));
            }
        },
        Command::Pack { kind, value } => {
            let kind = parse_kind(kind)?;
            let scalar = parse_scalar(kind, &value)?;
            println!("{}", hex::encode(fixed::pack(kind, scalar)));
        }
        Command::Unpack { kind, hex: input, offset } => {
            let kind = parse_kind(kind)?;
            let buffer = parse_hex(&input)?;
            print_scalar(fixed::unpack(kind, &buffer, offset));
        }
    }

    Ok(())
}

/// Parse a single-character format tag into a [`FixedKind`]
fn parse_kind(tag: char) -> Result<FixedKind> {
    if !tag.is_ascii() {
        bail!("format tag must be ASCII, got '{tag}'");
    }
    FixedKind::try_from(tag as u8).context("unrecognized format tag")
}

/// Parse a hex string, tolerating an optional `0x` prefix and whitespace
fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let cleaned: String = input
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    hex::decode(&cleaned).with_context(|| format!("invalid hex input: {input}"))
}

/// Parse a textual value into the scalar representation of `kind`
fn parse_scalar(kind: FixedKind, value: &str) -> Result<Scalar> {
    let scalar = match kind {
        FixedKind::Int32 => Scalar::I32(value.parse().context("expected an int32")?),
        FixedKind::Uint32 => Scalar::U32(value.parse().context("expected a uint32")?),
        FixedKind::Float => Scalar::F32(value.parse().context("expected a float")?),
        FixedKind::Int64 => Scalar::I64(value.parse().context("expected an int64")?),
        FixedKind::Uint64 => Scalar::U64(value.parse().context("expected a uint64")?),
        FixedKind::Double => Scalar::F64(value.parse().context("expected a double")?),
    };
    Ok(scalar)
}

/// Print a decoded scalar in its natural textual form
fn print_scalar(scalar: Scalar) {
    match scalar {
        Scalar::I32(v) => println!("{v}"),
        Scalar::U32(v) => println!("{v}"),
        Scalar::F32(v) => println!("{v}"),
        Scalar::I64(v) => println!("{v}"),
        Scalar::U64(v) => println!("{v}"),
        Scalar::F64(v) => println!("{v}"),
    }
}
