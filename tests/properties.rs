//! Property tests for the wire primitives.
//!
//! Verifies varint and fixed-width round trips, growth invariants, bounds
//! checking on arbitrary input, and the text codecs against the standard
//! library's own UTF-16 handling.

use proptest::prelude::*;
use wirebuf::codec::{
    ByteOrder, is_latin, is_latin_utf16, utf8_to_utf16, utf16_to_utf8, utf16_to_utf8_strict,
};
use wirebuf::varint::{varuint32_len, varuint64_len};
use wirebuf::{Buffer, BufferError};

fn config() -> ProptestConfig {
    ProptestConfig::with_cases(256)
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_order() -> impl Strategy<Value = ByteOrder> {
    prop_oneof![Just(ByteOrder::LittleEndian), Just(ByteOrder::BigEndian)]
}

fn arb_finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |v| v.is_finite())
}

fn apply_order(units: &[u16], order: ByteOrder) -> Vec<u16> {
    match order {
        ByteOrder::LittleEndian => units.to_vec(),
        ByteOrder::BigEndian => units.iter().map(|u| u.swap_bytes()).collect(),
    }
}

// ============================================================================
// Varint Round-Trip
// ============================================================================

proptest! {
    #![proptest_config(config())]

    /// Unsigned values decode to themselves and use the predicted length.
    #[test]
    fn varuint_roundtrip(a in any::<u32>(), b in any::<u64>()) {
        let mut buf = Buffer::allocate(1).unwrap();
        prop_assert_eq!(buf.write_varuint32(a).unwrap(), varuint32_len(a));
        prop_assert_eq!(buf.write_varuint64(b).unwrap(), varuint64_len(b));
        prop_assert_eq!(buf.read_varuint32().unwrap(), a);
        prop_assert_eq!(buf.read_varuint64().unwrap(), b);
        prop_assert_eq!(buf.reader_index(), buf.writer_index());
    }

    /// Signed values decode to themselves through the zigzag mapping.
    #[test]
    fn varint_roundtrip(a in any::<i32>(), b in any::<i64>()) {
        let mut buf = Buffer::allocate(1).unwrap();
        let n32 = buf.write_varint32(a).unwrap();
        let n64 = buf.write_varint64(b).unwrap();
        prop_assert!(n32 <= 5);
        prop_assert!(n64 <= 10);
        prop_assert_eq!(buf.read_varint32().unwrap(), a);
        prop_assert_eq!(buf.read_varint64().unwrap(), b);
    }

    /// Small magnitudes stay in one byte regardless of sign.
    #[test]
    fn varint_small_magnitude_is_one_byte(v in -64i32..64) {
        let mut buf = Buffer::allocate(8).unwrap();
        prop_assert_eq!(buf.write_varint32(v).unwrap(), 1);
    }
}

// ============================================================================
// Fixed-Width Round-Trip
// ============================================================================

proptest! {
    #![proptest_config(config())]

    /// Mixed fixed-width writes read back in order.
    #[test]
    fn fixed_width_sequence(
        flag in any::<bool>(),
        a in any::<i16>(),
        b in 0i32..(1 << 24),
        c in any::<u32>(),
        d in any::<i64>(),
        e in arb_finite_f64(),
    ) {
        let mut buf = Buffer::allocate(1).unwrap();
        buf.write_bool(flag).unwrap();
        buf.write_int16(a).unwrap();
        buf.write_int24(b).unwrap();
        buf.write_uint32(c).unwrap();
        buf.write_int64(d).unwrap();
        buf.write_float64(e).unwrap();

        prop_assert_eq!(buf.read_bool().unwrap(), flag);
        prop_assert_eq!(buf.read_int16().unwrap(), a);
        prop_assert_eq!(buf.read_int24().unwrap(), b);
        prop_assert_eq!(buf.read_uint32().unwrap(), c);
        prop_assert_eq!(buf.read_int64().unwrap(), d);
        prop_assert_eq!(buf.read_float64().unwrap(), e);
        prop_assert_eq!(buf.reader_index(), buf.writer_index());
    }

    /// put/get at arbitrary in-range offsets is little-endian.
    #[test]
    fn put_get_at_offset(offset in 0usize..56, value in any::<u64>()) {
        let mut buf = Buffer::allocate(64).unwrap();
        buf.put_uint64(offset, value).unwrap();
        prop_assert_eq!(buf.get_uint64(offset).unwrap(), value);
        prop_assert_eq!(
            buf.get_bytes(offset, 8).unwrap(),
            &value.to_le_bytes()[..]
        );
    }
}

// ============================================================================
// Growth and Bounds
// ============================================================================

proptest! {
    #![proptest_config(config())]

    /// writer_index <= size <= capacity after every growing write.
    #[test]
    fn growth_invariant(chunks in prop::collection::vec(0usize..300, 1..40)) {
        let mut buf = Buffer::allocate(1).unwrap();
        let mut total = 0;
        for len in chunks {
            buf.write_bytes(&vec![0xA5; len]).unwrap();
            total += len;
            prop_assert_eq!(buf.writer_index(), total);
            prop_assert!(buf.writer_index() <= buf.size());
            prop_assert!(buf.size() <= buf.capacity());
        }
    }

    /// Fixed-width access succeeds exactly when the range fits.
    #[test]
    fn get_respects_bounds(data in prop::collection::vec(any::<u8>(), 0..32), offset in 0usize..40) {
        let buf = Buffer::from(data.clone());
        let fits = offset + 4 <= data.len();
        match buf.get_uint32(offset) {
            Ok(value) => {
                prop_assert!(fits);
                let mut word = [0u8; 4];
                word.copy_from_slice(&data[offset..offset + 4]);
                prop_assert_eq!(value, u32::from_le_bytes(word));
            }
            Err(err) => {
                prop_assert!(!fits);
                let is_out_of_range = matches!(err, BufferError::OutOfRange { .. });
                prop_assert!(is_out_of_range);
            }
        }
    }

    /// Reads over arbitrary bytes never panic, and a failed read leaves the
    /// cursor where it was.
    #[test]
    fn failed_reads_keep_cursor(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut buf = Buffer::from(data);
        for step in 0..32 {
            let before = buf.reader_index();
            let ok = match step % 6 {
                0 => buf.read_varint64().is_ok(),
                1 => buf.read_string().is_ok(),
                2 => buf.read_bytes_and_size().is_ok(),
                3 => buf.read_int32().is_ok(),
                4 => buf.read_varuint32().is_ok(),
                _ => buf.read_int24().is_ok(),
            };
            if ok {
                prop_assert!(buf.reader_index() > before);
            } else {
                prop_assert_eq!(buf.reader_index(), before);
            }
            prop_assert!(buf.reader_index() <= buf.size());
        }
    }
}

// ============================================================================
// Text Codecs
// ============================================================================

proptest! {
    #![proptest_config(config())]

    /// is_latin agrees with a byte-by-byte check.
    #[test]
    fn is_latin_matches_baseline(data in prop::collection::vec(any::<u8>(), 0..200)) {
        prop_assert_eq!(is_latin(&data), data.iter().all(u8::is_ascii));
    }

    /// is_latin_utf16 agrees with a unit-by-unit check.
    #[test]
    fn is_latin_utf16_matches_baseline(
        units in prop::collection::vec(prop_oneof![0u16..0x80, any::<u16>()], 0..100)
    ) {
        prop_assert_eq!(is_latin_utf16(&units), units.iter().all(|&u| u < 0x80));
    }

    /// Well-formed text survives both directions in both byte orders.
    #[test]
    fn utf16_roundtrip(text in any::<String>(), order in arb_order()) {
        let units = apply_order(&text.encode_utf16().collect::<Vec<_>>(), order);
        prop_assert_eq!(utf16_to_utf8(&units, order), text.as_bytes());
        prop_assert_eq!(utf8_to_utf16(text.as_bytes(), order).unwrap(), units.clone());
        prop_assert_eq!(utf16_to_utf8_strict(&units, order).unwrap(), text);
    }

    /// Strict transcoding accepts exactly what the standard library accepts.
    #[test]
    fn strict_agrees_with_std(units in prop::collection::vec(any::<u16>(), 0..64)) {
        match (utf16_to_utf8_strict(&units, ByteOrder::LittleEndian), String::from_utf16(&units)) {
            (Ok(ours), Ok(std)) => prop_assert_eq!(ours, std),
            (Err(err), Err(_)) => {
                let is_surrogate = matches!(err, BufferError::UnpairedSurrogate { .. });
                prop_assert!(is_surrogate);
            }
            (ours, std) => prop_assert!(false, "disagreement: {:?} vs {:?}", ours, std.is_ok()),
        }
    }

    /// Framed strings read back unchanged.
    #[test]
    fn string_frame_roundtrip(texts in prop::collection::vec(any::<String>(), 1..8)) {
        let mut buf = Buffer::allocate(1).unwrap();
        for text in &texts {
            buf.write_string(text).unwrap();
        }
        for text in &texts {
            prop_assert_eq!(&buf.read_string().unwrap(), text);
        }
    }
}
