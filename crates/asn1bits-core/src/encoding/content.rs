use crate::encoding::{reader::Reader, writer::Writer};
use crate::{BitString, InvalidArgument};

/// Writes the BIT STRING content octets of `bits`: the unused-bits count,
/// then the stored bytes as they are.
///
/// Padding bits go out unchanged; call [`BitString::truncate_value`] first
/// for a DER encoding.
pub fn encode_content(bits: &BitString, w: &mut Writer<'_>) -> Result<(), InvalidArgument> {
    w.write_u8(bits.unused_bits())?;
    w.write_all(bits.value())
}

/// Reads BIT STRING content octets, consuming the rest of `r`.
///
/// Padding bits are kept as received.
pub fn decode_content(r: &mut Reader<'_>) -> Result<BitString, InvalidArgument> {
    let unused = r.read_u8().map_err(|_| InvalidArgument::EmptyContent)?;
    let data = r.read_rest();
    if unused > 7 || (data.is_empty() && unused != 0) {
        log::debug!("bit string content with {unused} unused bits over {} bytes", data.len());
        return Err(InvalidArgument::UnusedBitsOutOfRange(unused));
    }

    let too_long = InvalidArgument::ByteCountMismatch {
        actual: data.len(),
        expected: (u32::MAX / 8) as usize,
    };
    let full_bits = data
        .len()
        .checked_mul(8)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(too_long)?;
    BitString::from_bytes(data, full_bits - u32::from(unused))
}

#[cfg(test)]
mod tests {
    use super::{decode_content, encode_content};
    use crate::encoding::{reader::Reader, writer::Writer};
    use crate::{BitString, InvalidArgument};

    fn decode(raw: &[u8]) -> Result<BitString, InvalidArgument> {
        decode_content(&mut Reader::new(raw))
    }

    #[test]
    fn encodes_unused_count_and_raw_bytes() {
        let bits = BitString::from_bytes([0x3F, 0xFF, 0xFD], 22).unwrap();
        let mut buf = [0u8; 8];
        let mut w = Writer::new(&mut buf);
        encode_content(&bits, &mut w).unwrap();
        assert_eq!(w.as_written(), &[0x02, 0x3F, 0xFF, 0xFD]);
    }

    #[test]
    fn encoding_after_truncation_is_der_clean() {
        let mut bits = BitString::from_bytes([0x3F, 0xFF, 0xFD], 22).unwrap();
        bits.truncate_value().unwrap();
        let mut buf = [0u8; 8];
        let mut w = Writer::new(&mut buf);
        encode_content(&bits, &mut w).unwrap();
        assert_eq!(w.as_written(), &[0x02, 0x3F, 0xFF, 0xFC]);
    }

    #[test]
    fn empty_bit_string_is_a_single_zero_octet() {
        let mut buf = [0u8; 1];
        let mut w = Writer::new(&mut buf);
        encode_content(&BitString::default(), &mut w).unwrap();
        assert_eq!(w.as_written(), &[0x00]);
        assert_eq!(decode(&[0x00]).unwrap(), BitString::default());
    }

    #[test]
    fn encode_reports_short_buffer() {
        let bits = BitString::new(0xABCD, 16);
        let mut buf = [0u8; 2];
        let mut w = Writer::new(&mut buf);
        assert_eq!(
            encode_content(&bits, &mut w).unwrap_err(),
            InvalidArgument::BufferTooSmall
        );
    }

    #[test]
    fn decodes_length_from_unused_count() {
        let bits = decode(&[0x06, 0x6E, 0x5D, 0xC0]).unwrap();
        assert_eq!(bits.len(), 18);
        assert_eq!(bits.value(), &[0x6E, 0x5D, 0xC0]);
    }

    #[test]
    fn decode_rejects_malformed_content() {
        assert_eq!(decode(&[]).unwrap_err(), InvalidArgument::EmptyContent);
        assert_eq!(
            decode(&[0x08, 0xFF]).unwrap_err(),
            InvalidArgument::UnusedBitsOutOfRange(8)
        );
        assert_eq!(
            decode(&[0x03]).unwrap_err(),
            InvalidArgument::UnusedBitsOutOfRange(3)
        );
    }

    #[test]
    fn decode_consumes_the_reader() {
        let mut r = Reader::new(&[0x00, 0x01, 0x02]);
        decode_content(&mut r).unwrap();
        assert!(r.is_empty());
    }
}
