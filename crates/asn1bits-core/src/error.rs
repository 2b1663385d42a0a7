use core::fmt;

/// The single failure kind of this crate, parameterized by its cause.
///
/// Every variant renders as `invalid argument: <cause>`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// A byte sequence does not hold `ceil(len / 8)` bytes.
    ByteCountMismatch { actual: usize, expected: usize },
    /// The operation needs at least one bit.
    ZeroLength,
    /// A bit position outside `[0, len)`.
    OutOfRange { pos: u32, len: u32 },
    /// Content octets with no leading unused-bits octet.
    EmptyContent,
    /// An unused-bits octet above 7, or non-zero with no data bytes.
    UnusedBitsOutOfRange(u8),
    /// A character other than `0`/`1` in a bstring literal.
    InvalidDigit(char),
    BufferTooSmall,
    UnexpectedEof,
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid argument: ")?;
        match self {
            Self::ByteCountMismatch { actual, expected } => {
                write!(f, "got {actual} bytes, expecting {expected}")
            }
            Self::ZeroLength => f.write_str("length should not be 0"),
            Self::OutOfRange { pos, len } => write!(f, "pos {pos} is out of range [0,{len})"),
            Self::EmptyContent => f.write_str("empty bit string content"),
            Self::UnusedBitsOutOfRange(n) => write!(f, "{n} unused bits not allowed"),
            Self::InvalidDigit(c) => write!(f, "unexpected character {c:?} in bit string"),
            Self::BufferTooSmall => f.write_str("buffer too small"),
            Self::UnexpectedEof => f.write_str("unexpected end of input"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidArgument {}

#[cfg(test)]
mod tests {
    use super::InvalidArgument;
    use alloc::string::ToString;

    #[test]
    fn display_names_the_cause() {
        let err = InvalidArgument::ByteCountMismatch {
            actual: 2,
            expected: 3,
        };
        assert_eq!(err.to_string(), "invalid argument: got 2 bytes, expecting 3");
        assert_eq!(
            InvalidArgument::OutOfRange { pos: 4, len: 4 }.to_string(),
            "invalid argument: pos 4 is out of range [0,4)"
        );
    }
}
