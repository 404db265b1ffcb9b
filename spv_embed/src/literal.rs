//! Text formatting for byte and word literal arrays.
//!
//! Everything here is pure so the same payload always produces the same text.
use std::fmt::Write;

use crate::error::EmbedError;

/// The unit emitted for each hex literal.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EmitMode {
    /// One `0xXX` token per byte.
    Byte,
    /// One `0xXXXXXXXX` token per 4 byte little-endian word.
    WordLittleEndian,
}

/// How to handle a payload whose length is not a multiple of 4 in word mode.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum PartialWord {
    /// Fail with [EmbedError::PartialWord].
    /// SPIR-V is always a whole number of words, so a partial word usually means a truncated file.
    #[default]
    Reject,
    /// Fill the missing high bytes of the final word with zeros.
    ZeroPad,
}

/// The number of literal tokens emitted for `len` input bytes.
pub fn token_count(mode: EmitMode, len: usize) -> usize {
    match mode {
        EmitMode::Byte => len,
        EmitMode::WordLittleEndian => len.div_ceil(4),
    }
}

/// Format each byte as `0xXX` separated by `", "`.
pub fn byte_literals(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len() * 6);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            text.push_str(", ");
        }
        write!(&mut text, "0x{b:02x}").unwrap();
    }
    text
}

/// Create the byte mode header text for the shader `name`.
///
/// The result has a `// <name>.h` comment line followed by the indented byte literals
/// with no trailing newline.
pub fn byte_header(name: &str, bytes: &[u8]) -> String {
    let text = format!("// {name}.h\n    {}", byte_literals(bytes));
    text.trim().to_string()
}

/// Reinterpret `bytes` as little-endian words.
pub fn words_le(bytes: &[u8], partial_word: PartialWord) -> Result<Vec<u32>, EmbedError> {
    let chunks = bytes.chunks_exact(4);
    let remainder = chunks.remainder();

    let mut words: Vec<_> = chunks
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    if !remainder.is_empty() {
        match partial_word {
            PartialWord::Reject => return Err(EmbedError::PartialWord { len: bytes.len() }),
            PartialWord::ZeroPad => {
                let mut last = [0u8; 4];
                last[..remainder.len()].copy_from_slice(remainder);
                words.push(u32::from_le_bytes(last));
            }
        }
    }

    Ok(words)
}

/// Format `words` as a C++ `constexpr uint32_t` array declaration named `var_name`.
///
/// The name is written verbatim and must already be a valid identifier.
pub fn constexpr_array(var_name: &str, words: &[u32]) -> String {
    let mut text = format!("constexpr uint32_t {var_name}[] = {{\n");
    for word in words {
        writeln!(&mut text, "    0x{word:08x},").unwrap();
    }
    text.push_str("};\n");
    text
}

/// Create the word mode header text declaring `var_name`.
pub fn word_header(
    var_name: &str,
    bytes: &[u8],
    partial_word: PartialWord,
) -> Result<String, EmbedError> {
    let words = words_le(bytes, partial_word)?;
    Ok(constexpr_array(var_name, &words))
}
