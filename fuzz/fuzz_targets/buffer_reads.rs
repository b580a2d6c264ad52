#![no_main]

use libfuzzer_sys::fuzz_target;
use wirebuf::Buffer;

fuzz_target!(|data: Vec<u8>| {
    // First byte picks the read sequence, the rest is the input
    let Some((&selector, input)) = data.split_first() else {
        return;
    };

    let mut buf = Buffer::from(input);
    let mut step = selector as usize;

    // Every read either advances within bounds or fails without moving
    for _ in 0..64 {
        let before = buf.reader_index();
        let ok = match step % 10 {
            0 => buf.read_varint32().is_ok(),
            1 => buf.read_varuint64().is_ok(),
            2 => buf.read_string().is_ok(),
            3 => buf.read_bytes_and_size().is_ok(),
            4 => buf.read_int24().is_ok(),
            5 => buf.read_float64().is_ok(),
            6 => buf.read_bytes_as_int64(1 + step % 8).is_ok(),
            7 => buf.read_bool().is_ok(),
            8 => buf.skip(step % 5).is_ok(),
            _ => buf.read_int16().is_ok(),
        };
        if !ok {
            assert_eq!(buf.reader_index(), before);
        }
        assert!(buf.reader_index() <= buf.size());
        step = step.wrapping_mul(31).wrapping_add(7);
    }

    // Random-access reads at every offset
    for offset in 0..=input.len() {
        let fits = |n: usize| offset + n <= input.len();
        assert_eq!(buf.get_int64(offset).is_ok(), fits(8));
        assert_eq!(buf.get_int24(offset).is_ok(), fits(3));
        let _ = buf.get_varuint64(offset);
        let _ = buf.to_bytes(offset, 0);
    }
});
