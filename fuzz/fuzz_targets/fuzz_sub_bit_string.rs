#![no_main]

use asn1bits_core::BitString;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u64, u8, u8, u8)| {
    let (value, len, start, count) = input;
    let len = u32::from(len % 65);
    let bits = BitString::new(value, len);
    let (start, count) = (u32::from(start), u32::from(count));

    let sub = bits.sub_bit_string(start, count);
    assert_eq!(sub.len(), count);
    assert_eq!(sub.value().len(), count.div_ceil(8) as usize);

    match bits.checked_sub_bit_string(start, count) {
        Ok(checked) => assert_eq!(checked, sub),
        Err(_) => assert!(start + count > len),
    }

    for k in 0..count {
        let expected = bits.get_bit(start + k).unwrap_or(false);
        assert_eq!(sub.get_bit(count - 1 - k).unwrap(), expected);
    }
});
