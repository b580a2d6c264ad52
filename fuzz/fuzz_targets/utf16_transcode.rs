#![no_main]

use libfuzzer_sys::fuzz_target;
use wirebuf::codec::{ByteOrder, is_latin, utf8_to_utf16, utf16_to_utf8, utf16_to_utf8_strict};

fuzz_target!(|data: Vec<u8>| {
    // UTF-8 side: never panics, and ASCII detection matches a plain scan
    assert_eq!(is_latin(&data), data.iter().all(u8::is_ascii));
    let _ = utf8_to_utf16(&data, ByteOrder::LittleEndian);

    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
        let lenient = utf16_to_utf8(&units, order);

        // When strict succeeds, lenient agrees and the text round-trips
        if let Ok(text) = utf16_to_utf8_strict(&units, order) {
            assert_eq!(lenient, text.as_bytes());
            let back = utf8_to_utf16(text.as_bytes(), order).unwrap();
            assert_eq!(back, units);
        }
    }
});
