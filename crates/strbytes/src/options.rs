#![allow(clippy::struct_excessive_bools)]

use crate::error::Lossy;

/// Configuration options for [`ByteArrayEncoder`](crate::ByteArrayEncoder).
///
/// The options never change which byte an element projects to. They only
/// decide whether a lossy element is accepted or refused with an
/// [`EncodeError`](crate::EncodeError).
///
/// # Examples
///
/// ```rust
/// use strbytes::{ByteArrayEncoder, EncoderOptions};
///
/// let encoder = ByteArrayEncoder::new(EncoderOptions {
///     reject_astral: true,
///     ..Default::default()
/// });
/// assert_eq!(encoder.encode("Ā").unwrap(), vec![0x00]);
/// assert!(encoder.encode("😀").is_err());
/// ```
///
/// # Default
///
/// All options default to `false`, which makes the encoder total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderOptions {
    /// Whether to refuse code points between U+0100 and U+FFFF.
    ///
    /// These keep only their low byte, so distinct characters collide
    /// (U+0100 and U+0000 both project to `0x00`).
    ///
    /// # Default
    ///
    /// `false`
    pub reject_truncated: bool,

    /// Whether to refuse code points above U+FFFF.
    ///
    /// An astral code point is one traversal element, but its byte comes from
    /// the high surrogate alone. The low surrogate is never looked at, so every
    /// character in a 1024 code point block projects to the same byte.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_astral: bool,

    /// Whether to refuse ill-formed input: unpaired surrogates in UTF-16 and
    /// invalid sequences in UTF-8 bytes.
    ///
    /// When accepted, an unpaired surrogate projects from its own unit and an
    /// invalid UTF-8 sequence projects like U+FFFD.
    ///
    /// # Default
    ///
    /// `false`
    pub reject_ill_formed: bool,
}

impl EncoderOptions {
    /// Options that accept Latin-1 input only.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            reject_truncated: true,
            reject_astral: true,
            reject_ill_formed: true,
        }
    }

    /// Whether no element can be refused.
    #[must_use]
    pub fn is_lenient(&self) -> bool {
        !(self.reject_truncated || self.reject_astral || self.reject_ill_formed)
    }

    pub(crate) fn refuses(&self, lossy: Lossy) -> bool {
        match lossy {
            Lossy::Truncated(_) => self.reject_truncated,
            Lossy::Astral(_) => self.reject_astral,
            Lossy::LoneSurrogate(_) | Lossy::InvalidUtf8 => self.reject_ill_formed,
        }
    }
}
