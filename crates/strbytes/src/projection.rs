//! The byte projection itself: one traversal element in, one byte out.
//!
//! Every input form is reduced to a sequence of [`Element`]s first. An element
//! is whatever a UTF-16 based runtime yields when it iterates a string by code
//! point: a scalar value, or an unpaired surrogate left on its own. Its *lead
//! unit* is the first UTF-16 code unit it occupies, and its byte is the low
//! eight bits of that unit.
//!
//! For an astral scalar the lead unit is the high surrogate, so the low
//! surrogate never contributes to the output. Two astral characters that share
//! a high surrogate project to the same byte.

use crate::error::Lossy;

/// Mask applied to a lead unit to obtain its byte.
pub const BYTE_MASK: u16 = 0xFF;

/// Lead unit used for an invalid UTF-8 subsequence (U+FFFD).
const REPLACEMENT_UNIT: u16 = 0xFFFD;

/// One code-point traversal element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// A Unicode scalar value.
    Scalar(char),
    /// An unpaired surrogate code unit from UTF-16 input.
    LoneSurrogate(u16),
    /// A maximal invalid subsequence of UTF-8 input. Projects like U+FFFD.
    Invalid,
}

impl Element {
    /// First UTF-16 code unit of this element.
    #[must_use]
    pub fn lead_unit(self) -> u16 {
        match self {
            Element::Scalar(ch) => lead_unit(ch),
            Element::LoneSurrogate(unit) => unit,
            Element::Invalid => REPLACEMENT_UNIT,
        }
    }

    /// The byte this element projects to.
    #[must_use]
    pub fn byte(self) -> u8 {
        project_unit(self.lead_unit())
    }

    /// Classifies what the projection of this element loses, if anything.
    ///
    /// Returns `None` when the byte is the element's exact value (ASCII and
    /// Latin-1 scalars).
    #[must_use]
    pub fn lossiness(self) -> Option<Lossy> {
        match self {
            Element::Scalar(ch) => {
                let cp = u32::from(ch);
                if cp <= u32::from(BYTE_MASK) {
                    None
                } else if cp <= 0xFFFF {
                    Some(Lossy::Truncated(cp))
                } else {
                    Some(Lossy::Astral(cp))
                }
            }
            Element::LoneSurrogate(unit) => Some(Lossy::LoneSurrogate(unit)),
            Element::Invalid => Some(Lossy::InvalidUtf8),
        }
    }
}

impl From<char> for Element {
    fn from(ch: char) -> Self {
        Element::Scalar(ch)
    }
}

/// Reduces a 16-bit code unit to its low byte.
///
/// The high byte is discarded. This is the whole of the lossy step.
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn project_unit(unit: u16) -> u8 {
    (unit & BYTE_MASK) as u8
}

/// First UTF-16 code unit of `ch`: the code point itself inside the BMP, the
/// high surrogate above it.
#[must_use]
#[inline]
pub fn lead_unit(ch: char) -> u16 {
    let mut buf = [0u16; 2];
    ch.encode_utf16(&mut buf)[0]
}

/// Projects a single scalar value to a byte.
#[must_use]
#[inline]
pub fn project_char(ch: char) -> u8 {
    project_unit(lead_unit(ch))
}
