// Encoding Normalizer
// Turns raw statement bytes into text for the encoding a layout declares.

use encoding_rs::{ISO_8859_8_I, UTF_16LE};

use crate::error::EncodingError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    /// Web-page exports saved by Excel ("Unicode text")
    Utf16Le,
    /// Logical-order Hebrew, as served by older card portals
    Iso8859_8I,
    Utf8,
}

impl SourceEncoding {
    pub fn name(&self) -> &str {
        match self {
            SourceEncoding::Utf16Le => "UTF-16LE",
            SourceEncoding::Iso8859_8I => "ISO-8859-8-I",
            SourceEncoding::Utf8 => "UTF-8",
        }
    }
}

/// Decode `bytes` as `encoding`.
///
/// UTF-16LE input must have an even length. A leading byte order mark is
/// dropped for both Unicode encodings; ISO-8859-8-I never fails.
pub fn normalize(bytes: &[u8], encoding: SourceEncoding) -> Result<String, EncodingError> {
    match encoding {
        SourceEncoding::Utf16Le => {
            if bytes.len() % 2 != 0 {
                return Err(EncodingError::OddByteCount(bytes.len()));
            }
            let (text, _) = UTF_16LE.decode_with_bom_removal(bytes);
            Ok(text.into_owned())
        }
        SourceEncoding::Iso8859_8I => {
            let (text, _) = ISO_8859_8_I.decode_without_bom_handling(bytes);
            Ok(text.into_owned())
        }
        SourceEncoding::Utf8 => {
            let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
            std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|_| EncodingError::InvalidUtf8)
        }
    }
}
