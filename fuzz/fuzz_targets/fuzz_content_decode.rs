#![no_main]

use asn1bits_core::encoding::{decode_content, encode_content, Reader, Writer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(mut bits) = decode_content(&mut Reader::new(data)) else {
        return;
    };
    assert_eq!(bits.value().len(), bits.len().div_ceil(8) as usize);

    let mut buf = vec![0u8; data.len()];
    let mut w = Writer::new(&mut buf);
    encode_content(&bits, &mut w).unwrap();
    assert_eq!(w.as_written(), data);

    if !bits.is_empty() {
        let once = bits.truncate_value().unwrap().to_vec();
        assert_eq!(bits.truncate_value().unwrap(), once.as_slice());
    }
});
