use crate::InvalidArgument;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// Number of bytes needed to hold `len` bits.
const fn byte_len(len: u32) -> usize {
    len.div_ceil(8) as usize
}

/// `2^len - 1`, saturating to all ones once `len` reaches the width of `u64`.
const fn low_mask(len: u32) -> u64 {
    match 1u64.checked_shl(len) {
        Some(bit) => bit - 1,
        None => u64::MAX,
    }
}

/// Packs `value`, masked to `len` bits, into `ceil(len / 8)` big-endian bytes.
///
/// The high end is zero-extended, so a `len` wider than 64 bits yields
/// leading zero bytes.
pub fn uint_to_bytes(value: u64, len: u32) -> Vec<u8> {
    let mut v = value & low_mask(len);
    let mut out = vec![0u8; byte_len(len)];
    for b in out.iter_mut().rev() {
        *b = (v & 0xFF) as u8;
        v >>= 8;
    }
    out
}

/// An ASN.1 BIT STRING of exactly `len` significant bits.
///
/// The bits are packed into `ceil(len / 8)` bytes and read as a big-endian
/// unsigned integer: `value()[0]` is the most significant byte. Bit position
/// 0 is the least significant bit of the last byte and `len - 1` the most
/// significant meaningful bit.
///
/// When `len` is not a multiple of 8 the low `unused_bits()` bits of the last
/// byte are padding. They may hold anything until [`truncate_value`] clears
/// them.
///
/// The byte count always matches `len`; every constructor and mutator checks
/// it.
///
/// [`truncate_value`]: BitString::truncate_value
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBitString"))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    len: u32,
    value: Vec<u8>,
}

impl BitString {
    /// Creates a `len`-bit string holding `value` masked to `len` bits.
    pub fn new(value: u64, len: u32) -> Self {
        Self {
            len,
            value: uint_to_bytes(value, len),
        }
    }

    /// Creates a `len`-bit string with every bit cleared.
    pub fn with_len(len: u32) -> Self {
        Self {
            len,
            value: vec![0; byte_len(len)],
        }
    }

    /// Wraps caller-supplied bytes, which must number exactly `ceil(len / 8)`.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, len: u32) -> Result<Self, InvalidArgument> {
        let value = bytes.into();
        check_byte_count(value.len(), len)?;
        Ok(Self { len, value })
    }

    /// Number of significant bits.
    pub const fn len(&self) -> u32 {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed bytes, most significant first.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.value
    }

    /// Padding bits in the last byte: `ceil(len / 8) * 8 - len`.
    pub const fn unused_bits(&self) -> u8 {
        ((8 - self.len % 8) % 8) as u8
    }

    /// Replaces the stored bytes, keeping `len`.
    ///
    /// On a byte-count mismatch the stored bytes are left untouched and stay
    /// readable through [`value`](Self::value).
    pub fn update_value(&mut self, bytes: impl Into<Vec<u8>>) -> Result<&[u8], InvalidArgument> {
        let bytes = bytes.into();
        if let Err(err) = check_byte_count(bytes.len(), self.len) {
            log::debug!("rejected bit string update: {err}");
            return Err(err);
        }
        self.value = bytes;
        Ok(&self.value)
    }

    /// Zeroes the padding bits of the last byte, keeping `len`.
    ///
    /// The cleared bits are the numerically lowest ones of the storage, which
    /// is where BER/DER place the unused bits of a BIT STRING. Applying it
    /// twice gives the same bytes as applying it once.
    pub fn truncate_value(&mut self) -> Result<&[u8], InvalidArgument> {
        if self.len == 0 {
            log::debug!("refusing to truncate a zero-length bit string");
            return Err(InvalidArgument::ZeroLength);
        }
        check_byte_count(self.value.len(), self.len)?;

        let trailing = self.unused_bits();
        if let Some(last) = self.value.last_mut() {
            *last &= !((1u8 << trailing) - 1);
        }
        log::trace!("cleared {trailing} padding bits of a {}-bit string", self.len);
        Ok(&self.value)
    }

    /// Reads the bit at `pos`, counted from the least significant end.
    pub fn get_bit(&self, pos: u32) -> Result<bool, InvalidArgument> {
        if pos >= self.len {
            return Err(InvalidArgument::OutOfRange { pos, len: self.len });
        }
        Ok(self.bit(pos))
    }

    /// Highest position holding a one, or `None` if every bit is zero.
    ///
    /// `max_bit_one() + 1` is the minimal bit width of the numeric value.
    pub fn max_bit_one(&self) -> Option<u32> {
        // Scanning only [0, len) keeps every read in range.
        (0..self.len).rev().find(|&pos| self.bit(pos))
    }

    /// Folds the bytes big-endian into an integer.
    ///
    /// Only exact for `len <= 64`; higher bytes are shifted out.
    pub fn to_uint(&self) -> u64 {
        self.value
            .iter()
            .fold(0u64, |v, &b| (v << 8) | u64::from(b))
    }

    /// Stores `value` masked to `len` bits.
    pub fn from_uint(&mut self, value: u64) {
        self.value = uint_to_bytes(value, self.len);
    }

    /// Adds `a` modulo `2^len`.
    pub fn add_uint(&mut self, a: u64) {
        self.from_uint(self.to_uint().wrapping_add(a));
    }

    /// Extracts `len` bits starting at position `start`.
    ///
    /// Source positions are read upward from `start` and packed most
    /// significant first: the bit at `start + k` lands at position
    /// `len - 1 - k` of the result, and the first result byte holds the
    /// partial group when `len` is not a multiple of 8.
    ///
    /// The range is not checked. Positions at or past the source length read
    /// as zero; use [`checked_sub_bit_string`](Self::checked_sub_bit_string)
    /// to reject them instead.
    pub fn sub_bit_string(&self, start: u32, len: u32) -> BitString {
        let mut value = vec![0u8; byte_len(len)];
        let first_width = len - (value.len().saturating_sub(1) as u32) * 8;

        let mut offsets = 0..len;
        for (i, byte) in value.iter_mut().enumerate() {
            let width = if i == 0 { first_width } else { 8 };
            for k in offsets.by_ref().take(width as usize) {
                let bit = start
                    .checked_add(k)
                    .is_some_and(|pos| pos < self.len && self.bit(pos));
                *byte = (*byte << 1) | u8::from(bit);
            }
        }
        BitString { len, value }
    }

    /// Like [`sub_bit_string`](Self::sub_bit_string), but fails when the
    /// range runs past the source length.
    pub fn checked_sub_bit_string(
        &self,
        start: u32,
        len: u32,
    ) -> Result<BitString, InvalidArgument> {
        match start.checked_add(len) {
            Some(end) if end <= self.len => Ok(self.sub_bit_string(start, len)),
            _ => Err(InvalidArgument::OutOfRange {
                pos: start.saturating_add(len.saturating_sub(1)),
                len: self.len,
            }),
        }
    }

    /// Callers guarantee `pos < len`.
    fn bit(&self, pos: u32) -> bool {
        debug_assert!(pos < self.len);
        let byte = self.value[self.value.len() - 1 - (pos / 8) as usize];
        byte & (1 << (pos % 8)) != 0
    }

    fn set_bit(&mut self, pos: u32) {
        debug_assert!(pos < self.len);
        let idx = self.value.len() - 1 - (pos / 8) as usize;
        self.value[idx] |= 1 << (pos % 8);
    }
}

fn check_byte_count(actual: usize, len: u32) -> Result<(), InvalidArgument> {
    let expected = byte_len(len);
    if actual != expected {
        return Err(InvalidArgument::ByteCountMismatch { actual, expected });
    }
    Ok(())
}

/// ASN.1 bstring notation, most significant bit first: `'0110'B`.
impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for pos in (0..self.len).rev() {
            f.write_str(if self.bit(pos) { "1" } else { "0" })?;
        }
        f.write_str("'B")
    }
}

/// Parses `'0110'B` or bare `0110`; the digit count becomes `len`.
impl FromStr for BitString {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix("'B"))
            .unwrap_or(s);
        if let Some(c) = digits.chars().find(|c| !matches!(c, '0' | '1')) {
            return Err(InvalidArgument::InvalidDigit(c));
        }
        let len = u32::try_from(digits.len()).map_err(|_| InvalidArgument::OutOfRange {
            pos: u32::MAX,
            len: u32::MAX,
        })?;

        let mut out = BitString::with_len(len);
        for (k, c) in digits.bytes().enumerate() {
            if c == b'1' {
                out.set_bit(len - 1 - k as u32);
            }
        }
        Ok(out)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBitString {
    len: u32,
    value: Vec<u8>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBitString> for BitString {
    type Error = InvalidArgument;

    fn try_from(raw: RawBitString) -> Result<Self, Self::Error> {
        BitString::from_bytes(raw.value, raw.len)
    }
}
