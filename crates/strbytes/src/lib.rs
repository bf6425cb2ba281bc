//! Byte projection of text strings.
//!
//! Converts a string into one byte per code point by keeping the low eight
//! bits of the code point's first UTF-16 code unit. This is the input
//! normalization step a byte-oriented compressor runs before it sees any
//! text: ASCII and Latin-1 pass through unchanged, everything else is
//! truncated.
//!
//! ```rust
//! use strbytes::string_to_byte_array;
//!
//! assert_eq!(string_to_byte_array("Aÿ"), vec![0x41, 0xFF]);
//! // U+0100 keeps only its low byte.
//! assert_eq!(string_to_byte_array("Ā"), vec![0x00]);
//! // U+1F600 is one element, projected from its high surrogate 0xD83D.
//! assert_eq!(string_to_byte_array("😀"), vec![0x3D]);
//! ```
//!
//! The projection is lossy by construction. [`ByteArrayEncoder`] runs the same
//! mapping but can refuse the lossy cases instead, see [`EncoderOptions`].

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod encoder;
mod error;
mod options;
mod projection;
mod source;

#[cfg(test)]
mod tests;

pub use encoder::{
    ByteArrayEncoder, bytes_to_byte_array, string_to_byte_array, utf16_to_byte_array,
};
pub use error::{EncodeError, Lossy};
pub use options::EncoderOptions;
pub use projection::{BYTE_MASK, Element, lead_unit, project_char, project_unit};
pub use source::TextSource;
