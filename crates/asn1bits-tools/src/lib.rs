use asn1bits_core::{BitString, InvalidArgument};
use clap::Args;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{0}")]
    Bits(#[from] InvalidArgument),
    #[error("bad hex input: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("output error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no bit string given; use --bits, or --len with --hex or --value")]
    MissingInput,
}

/// Bit string input shared by every tool.
///
/// `--bits` takes a bstring literal on its own; otherwise `--len` sets the
/// bit count and `--hex` or `--value` fills it. `--len` alone gives all zeros.
#[derive(Args, Debug, Clone, Default)]
pub struct BitStringArgs {
    /// ASN.1 bstring literal, e.g. '0110'B.
    #[arg(long, conflicts_with_all = ["hex", "value", "len"])]
    pub bits: Option<String>,
    /// Packed bytes in hex, most significant first.
    #[arg(long, conflicts_with = "value", requires = "len")]
    pub hex: Option<String>,
    /// Unsigned value, masked to --len bits.
    #[arg(long, requires = "len")]
    pub value: Option<u64>,
    /// Number of significant bits.
    #[arg(long)]
    pub len: Option<u32>,
}

impl BitStringArgs {
    pub fn bit_string(&self) -> Result<BitString, ToolError> {
        let bits = match (&self.bits, self.len) {
            (Some(text), _) => text.parse::<BitString>()?,
            (None, Some(len)) => match (&self.hex, self.value) {
                (Some(raw), _) => BitString::from_bytes(decode_hex(raw)?, len)?,
                (None, Some(value)) => BitString::new(value, len),
                (None, None) => BitString::with_len(len),
            },
            (None, None) => return Err(ToolError::MissingInput),
        };
        log::debug!("input is a {}-bit string", bits.len());
        Ok(bits)
    }
}

/// Accepts an optional `0x` prefix and ignores whitespace.
pub fn decode_hex(raw: &str) -> Result<Vec<u8>, ToolError> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);
    Ok(hex::decode(digits)?)
}

/// JSON view of a bit string printed by the tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitStringReport {
    pub len: u32,
    pub hex: String,
    pub bits: String,
    pub unused_bits: u8,
    /// Present only when the value fits in 64 bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uint: Option<u64>,
    pub max_bit_one: Option<u32>,
}

impl From<&BitString> for BitStringReport {
    fn from(bits: &BitString) -> Self {
        Self {
            len: bits.len(),
            hex: hex::encode(bits.value()),
            bits: bits.to_string(),
            unused_bits: bits.unused_bits(),
            uint: (bits.len() <= 64).then(|| bits.to_uint()),
            max_bit_one: bits.max_bit_one(),
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), ToolError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
