//! Encode a small record, ship it as bytes, decode it again.
//!
//! Run with:
//!     cargo run --example basic_roundtrip

use wirebuf::codec::{ByteOrder, utf16_to_utf8};
use wirebuf::{Buffer, BufferConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Start small to show growth
    let mut out = Buffer::with_config(BufferConfig::default().with_initial_size(8))?;

    let ids: [i64; 4] = [0, -1, 300, i64::MIN];
    out.write_varuint32(ids.len() as u32)?;
    for id in ids {
        let n = out.write_varint64(id)?;
        println!("varint64 {id:>20} -> {n} byte(s)");
    }

    out.write_int24(0x12_3456)?;
    out.write_float64(2.5)?;
    out.write_string("héllo, 世界")?;

    let name: Vec<u16> = "Grüße 😀".encode_utf16().collect();
    out.write_utf16_string(&name)?;
    out.write_bytes_and_size(&[0xDE, 0xAD, 0xBE, 0xEF])?;

    println!("\nEncoded {} bytes ({} allocated)", out.writer_index(), out.size());
    println!("{}", out.slice(0, Some(out.writer_index()))?.to_hex());

    // Received bytes are readable up to their length
    let mut input = Buffer::from(out.into_bytes());
    let count = input.read_varuint32()?;
    for _ in 0..count {
        println!("id: {}", input.read_varint64()?);
    }
    println!("int24: {:#x}", input.read_int24()?);
    println!("float64: {}", input.read_float64()?);
    println!("utf-8 string: {}", input.read_string()?);
    println!("utf-16 string: {}", input.read_string()?);
    println!("blob: {:02x?}", input.read_bytes_and_size()?);

    // Reading past the written bytes is an error, not zeroes
    match input.read_uint8() {
        Ok(byte) => println!("unexpected trailing byte {byte}"),
        Err(e) => println!("\nend of input: {e}"),
    }

    let lenient = utf16_to_utf8(&[0x0041, 0xD800], ByteOrder::LittleEndian);
    println!("lone surrogate kept as legacy bytes: {lenient:02x?}");

    Ok(())
}
