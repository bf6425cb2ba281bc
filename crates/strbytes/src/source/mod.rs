//! Code-point traversal over the supported storage forms.
//!
//! A [`TextSource`] turns its storage into [`Element`]s, each tagged with the
//! offset where it starts:
//! - `str`: one element per `char`, offsets in bytes;
//! - `[u16]`: one element per surrogate pair or BMP unit, and one per unpaired
//!   surrogate, offsets in code units;
//! - [`BStr`]: one element per decoded `char`, and one [`Element::Invalid`] per
//!   maximal invalid subsequence, offsets in bytes.
//!
//! Invariants
//! - Elements come out in storage order, offsets strictly increasing.
//! - A surrogate pair is never split into two elements.

use bstr::{BStr, ByteSlice};

use crate::projection::Element;

/// Storage that can be traversed by code point.
pub trait TextSource {
    /// Elements of the input in order, each with its storage offset.
    fn elements(&self) -> impl Iterator<Item = (usize, Element)>;

    /// Number of traversal elements, which is the length of the projection.
    fn element_count(&self) -> usize {
        self.elements().count()
    }
}

impl TextSource for str {
    fn elements(&self) -> impl Iterator<Item = (usize, Element)> {
        self.char_indices().map(|(offset, ch)| (offset, Element::Scalar(ch)))
    }

    fn element_count(&self) -> usize {
        self.chars().count()
    }
}

impl TextSource for [u16] {
    fn elements(&self) -> impl Iterator<Item = (usize, Element)> {
        let mut offset = 0;
        char::decode_utf16(self.iter().copied()).map(move |decoded| {
            let start = offset;
            let element = match decoded {
                Ok(ch) => {
                    offset += ch.len_utf16();
                    Element::Scalar(ch)
                }
                Err(err) => {
                    offset += 1;
                    Element::LoneSurrogate(err.unpaired_surrogate())
                }
            };
            (start, element)
        })
    }
}

impl TextSource for BStr {
    fn elements(&self) -> impl Iterator<Item = (usize, Element)> {
        let bytes: &[u8] = self;
        bytes.char_indices().map(move |(start, end, ch)| {
            // `char_indices` substitutes U+FFFD for invalid subsequences; a
            // genuine U+FFFD always spans three bytes and decodes cleanly.
            let element = if ch == char::REPLACEMENT_CHARACTER
                && &bytes[start..end] != "\u{FFFD}".as_bytes()
            {
                Element::Invalid
            } else {
                Element::Scalar(ch)
            };
            (start, element)
        })
    }
}
