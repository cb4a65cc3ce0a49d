use dyn_bitset::{Bitset, BitsetError};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=dyn_bitset=trace shows storage reallocations
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Dynamic Bitset Examples ===\n");

    // Example 1: Packing a header
    let _ = example_packet_header();

    // Example 2: Shifting a window
    let _ = example_sliding_window();

    // Example 3: Growing and shrinking
    example_resize();
}

fn example_packet_header() -> Result<(), BitsetError> {
    println!("Example 1: Packing a 4-bit version, 12-bit length and 16-bit checksum");

    let mut header = Bitset::<u8>::with_len(32);
    header.set_number(0x5DCu16, 0)?;
    header.set_number(0b0110u8, -4)?; // keeps the low 4 bits, over the length's zero nibble
    header.set_number(0xBEEFu16, 16)?;

    println!("  bits:     {}", header.to_separated_string());
    println!("  checksum: {:#06x}", header.number::<u16>(16).unwrap_or_default());
    println!("  bytes:    {:?}", header.as_bytes());
    println!();

    Ok(())
}

fn example_sliding_window() -> Result<(), BitsetError> {
    println!("Example 2: Sliding a 10-bit window");

    let mut window = Bitset::<u16>::with_len(10);
    for pos in [0, 3, 9] {
        window.set(pos)?;
    }
    println!("  start:     {}", window);

    window <<= 3;
    println!("  <<= 3:     {}", window);

    window >>= 5;
    println!("  >>= 5:     {}", window);

    window <<= 64;
    println!("  <<= 64:    {}", window);
    println!();

    Ok(())
}

fn example_resize() {
    println!("Example 3: Growing and shrinking storage");

    let mut bits = Bitset::<u32>::new();
    for len in [1, 32, 33, 100, 20, 0] {
        bits.set_len(len);
        println!(
            "  len {:>3}: {} blocks, {:>2} bytes",
            bits.len(),
            bits.block_count(),
            bits.size_in_bytes()
        );
    }
    println!();
}
