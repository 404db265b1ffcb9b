//! # spv_embed
//! Convert compiled shader binaries like SPIR-V into hex literal arrays
//! that can be included in C or C++ source files.
//!
//! Byte mode writes one `0xXX` token per byte under a `// <name>.h` comment.
//! Word mode writes one `0xXXXXXXXX` token per little-endian word
//! wrapped in a `constexpr uint32_t` array declaration.
//!
//! ```rust no_run
//! use spv_embed::{write_header, EmitMode, PartialWord};
//!
//! write_header("vert.spv", "vert.h", "vert_spv", EmitMode::WordLittleEndian, PartialWord::Reject)?;
//! # Ok::<(), spv_embed::error::EmbedError>(())
//! ```
use std::path::Path;

use log::debug;

pub mod batch;
pub mod error;
pub mod literal;

pub use batch::{generate_shader_headers, BatchConfig};
pub use literal::{EmitMode, PartialWord};

use error::EmbedError;

/// Read the entire contents of `path`.
pub fn read_payload<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, EmbedError> {
    let path = path.as_ref();
    std::fs::read(path).map_err(|source| EmbedError::InputUnreadable {
        path: path.to_owned(),
        source,
    })
}

/// Create the header text for `bytes` using the given mode.
///
/// The `name` is the shader name for [EmitMode::Byte] and the array variable name for [EmitMode::WordLittleEndian].
/// `partial_word` only applies to word mode.
pub fn emit(
    mode: EmitMode,
    name: &str,
    bytes: &[u8],
    partial_word: PartialWord,
) -> Result<String, EmbedError> {
    match mode {
        EmitMode::Byte => Ok(literal::byte_header(name, bytes)),
        EmitMode::WordLittleEndian => literal::word_header(name, bytes, partial_word),
    }
}

/// Convert the binary file `input` and write the header text to `output`.
///
/// The output is created or truncated only after the input has been read and converted successfully.
pub fn write_header<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    name: &str,
    mode: EmitMode,
    partial_word: PartialWord,
) -> Result<(), EmbedError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let bytes = read_payload(input)?;
    debug!("Read {} bytes from {input:?}", bytes.len());

    let text = emit(mode, name, &bytes, partial_word)?;

    std::fs::write(output, text).map_err(|source| EmbedError::OutputUnwritable {
        path: output.to_owned(),
        source,
    })
}

/// Write the byte mode header for the shader `name`.
pub fn write_byte_header<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    name: &str,
) -> Result<(), EmbedError> {
    write_header(input, output, name, EmitMode::Byte, PartialWord::Reject)
}

/// Write the word mode `constexpr uint32_t` array named `var_name`.
pub fn write_word_header<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    var_name: &str,
    partial_word: PartialWord,
) -> Result<(), EmbedError> {
    write_header(
        input,
        output,
        var_name,
        EmitMode::WordLittleEndian,
        partial_word,
    )
}
