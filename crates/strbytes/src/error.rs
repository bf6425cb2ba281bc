use thiserror::Error;

/// What a projection would lose for one element.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lossy {
    /// A BMP code point above U+00FF; its high byte is dropped.
    #[error("code point U+{0:04X} does not fit in one byte")]
    Truncated(u32),
    /// A code point above U+FFFF; only its high surrogate is projected.
    #[error("astral code point U+{0:04X} is projected from its high surrogate only")]
    Astral(u32),
    /// An unpaired surrogate in UTF-16 input.
    #[error("unpaired surrogate 0x{0:04X}")]
    LoneSurrogate(u16),
    /// An invalid UTF-8 subsequence.
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,
}

/// A projection refused by [`ByteArrayEncoder`](crate::ByteArrayEncoder).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{source} at element {index} (offset {offset})")]
pub struct EncodeError {
    pub(crate) source: Lossy,
    pub(crate) index: usize,
    pub(crate) offset: usize,
}

impl EncodeError {
    /// The refused loss.
    #[must_use]
    pub fn lossy(&self) -> Lossy {
        self.source
    }

    /// Index of the refused element, counted in traversal elements.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Storage offset of the refused element: bytes for UTF-8 input, code
    /// units for UTF-16 input.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }
}
