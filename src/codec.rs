use crate::constants::BITS_PER_CHAR;
use crate::error::{Error, Result};

pub fn text_to_bits(text: &str) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(text.len() * BITS_PER_CHAR);

    for (index, ch) in text.chars().enumerate() {
        let code = u32::from(ch);
        if code > 0xFF {
            return Err(Error::Encoding { ch, index });
        }

        let byte = code as u8;
        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push((byte >> shift) & 1);
        }
    }

    Ok(bits)
}

pub fn bits_to_text(bits: &[u8]) -> String {
    // 不足 8 bits 的尾部直接丢弃，不视为错误。
    bits.chunks_exact(BITS_PER_CHAR)
        .map(|group| {
            let byte = group.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1));
            char::from(byte)
        })
        .collect()
}
