use alloc::vec::Vec;

use bstr::BStr;

use crate::{
    error::EncodeError,
    options::EncoderOptions,
    projection::{Element, project_char},
    source::TextSource,
};

/// Converts a string into one byte per code point.
///
/// Each `char` contributes the low byte of its first UTF-16 code unit:
/// ASCII and Latin-1 map to themselves, U+0100..=U+FFFF are truncated, and an
/// astral code point yields the low byte of its high surrogate. The output
/// length is `input.chars().count()`.
///
/// ```rust
/// use strbytes::string_to_byte_array;
///
/// assert_eq!(string_to_byte_array(""), Vec::<u8>::new());
/// assert_eq!(string_to_byte_array("A€"), vec![0x41, 0xAC]);
/// ```
#[must_use]
pub fn string_to_byte_array(input: &str) -> Vec<u8> {
    input.chars().map(project_char).collect()
}

/// [`string_to_byte_array`] over UTF-16 code units.
///
/// Surrogate pairs are one element. An unpaired surrogate is an element of its
/// own and projects from its own unit.
#[must_use]
pub fn utf16_to_byte_array(input: &[u16]) -> Vec<u8> {
    project_all(input)
}

/// [`string_to_byte_array`] over bytes that should be, but may not be, UTF-8.
///
/// Each maximal invalid subsequence is one element and projects like U+FFFD
/// (`0xFD`).
#[must_use]
pub fn bytes_to_byte_array(input: &[u8]) -> Vec<u8> {
    project_all(BStr::new(input))
}

fn project_all<S: TextSource + ?Sized>(input: &S) -> Vec<u8> {
    input
        .elements()
        .map(|(_, element)| element.byte())
        .collect()
}

/// Byte projection with control over lossy elements.
///
/// With default options this produces exactly what [`string_to_byte_array`]
/// and its siblings produce, and never fails. See [`EncoderOptions`] for the
/// elements it can be told to refuse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteArrayEncoder {
    options: EncoderOptions,
}

impl ByteArrayEncoder {
    /// Creates an encoder with the given options.
    #[must_use]
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    /// The options this encoder was built with.
    #[must_use]
    pub fn options(&self) -> EncoderOptions {
        self.options
    }

    /// Projects `input` into a new byte vector.
    ///
    /// # Errors
    ///
    /// Returns the first element the options refuse.
    pub fn encode<S: TextSource + ?Sized>(&self, input: &S) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        self.encode_into(input, &mut out)?;
        Ok(out)
    }

    /// Appends the projection of `input` to `out` and returns the number of
    /// bytes appended.
    ///
    /// # Errors
    ///
    /// Returns the first element the options refuse. `out` is truncated back
    /// to its original length.
    pub fn encode_into<S: TextSource + ?Sized>(
        &self,
        input: &S,
        out: &mut Vec<u8>,
    ) -> Result<usize, EncodeError> {
        let start = out.len();
        let mut lossy = 0usize;

        for (index, (offset, element)) in input.elements().enumerate() {
            if let Err(err) = self.check(index, offset, element, &mut lossy) {
                out.truncate(start);
                log::debug!("refused projection: {err}");
                return Err(err);
            }
            out.push(element.byte());
        }

        let written = out.len() - start;
        log::trace!("projected {written} elements ({lossy} lossy)");
        Ok(written)
    }

    fn check(
        &self,
        index: usize,
        offset: usize,
        element: Element,
        lossy: &mut usize,
    ) -> Result<(), EncodeError> {
        let Some(loss) = element.lossiness() else {
            return Ok(());
        };
        if self.options.refuses(loss) {
            return Err(EncodeError {
                source: loss,
                index,
                offset,
            });
        }
        *lossy += 1;
        Ok(())
    }
}

impl From<EncoderOptions> for ByteArrayEncoder {
    fn from(options: EncoderOptions) -> Self {
        Self::new(options)
    }
}
