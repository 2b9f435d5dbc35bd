//! Charset and binary text encoding utilities
//!
//! This module turns strings into their encoded byte sequence and renders
//! those bytes as `0`/`1` text (and back). Charsets are resolved from their
//! labels (US-ASCII and ISO-8859-1 in-crate, the rest through `encoding_rs`);
//! the default charset is UTF-8.

use crate::error::{Error, Result};
use encoding_rs::{Encoder, EncoderResult, Encoding, UTF_16BE, UTF_16LE, UTF_8};

/// Number of binary digits written per byte
pub const BITS_PER_BYTE: usize = 8;

/// Substitute written for characters the target charset cannot represent
const UNMAPPABLE_REPLACEMENT: &str = "?";

/// Labels that name plain 7-bit US-ASCII
const US_ASCII_LABELS: &[&str] = &[
    "us-ascii",
    "ascii",
    "us_ascii",
    "ascii7",
    "646",
    "iso646-us",
    "iso_646.irv:1991",
    "iso-ir-6",
    "ansi_x3.4-1968",
    "ansi_x3.4-1986",
    "cp367",
    "ibm367",
    "csascii",
];

/// Labels that name ISO-8859-1 proper, one byte per code point up to U+00FF
const ISO_8859_1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso_8859_1",
    "iso88591",
    "8859_1",
    "iso_8859-1:1987",
    "iso-ir-100",
    "latin1",
    "l1",
    "cp819",
    "ibm819",
    "csisolatin1",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Codec {
    UsAscii,
    Iso8859_1,
    Whatwg(&'static Encoding),
}

/// A resolved text encoding
///
/// Labels are matched case-insensitively. US-ASCII and ISO-8859-1 are
/// handled in-crate with their strict byte ranges; every other label is
/// resolved through `encoding_rs`, so `windows-1252` is only chosen when it
/// is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charset {
    codec: Codec,
}

impl Charset {
    /// UTF-8, the default charset
    pub fn utf8() -> Self {
        Self {
            codec: Codec::Whatwg(UTF_8),
        }
    }

    /// Resolve a charset from its label, e.g. `"utf-8"` or `"shift_jis"`
    ///
    /// Fails with [`Error::UnsupportedCharset`] for unknown labels and for
    /// decode-only encodings such as `replacement`.
    pub fn for_name(name: &str) -> Result<Self> {
        let label = name.trim_matches(|c: char| c.is_ascii_whitespace()).to_ascii_lowercase();
        if US_ASCII_LABELS.contains(&label.as_str()) {
            return Ok(Self {
                codec: Codec::UsAscii,
            });
        }
        if ISO_8859_1_LABELS.contains(&label.as_str()) {
            return Ok(Self {
                codec: Codec::Iso8859_1,
            });
        }

        let encoding = match Encoding::for_label(label.as_bytes()) {
            Some(encoding) => encoding,
            None => {
                log::warn!("Unknown charset label '{}'", name);
                return Err(Error::unsupported_charset(name));
            }
        };

        if encoding.output_encoding() != encoding && !is_utf16(encoding) {
            log::warn!(
                "Charset '{}' ({}) cannot be used for encoding",
                name,
                encoding.name()
            );
            return Err(Error::unsupported_charset(name));
        }

        Ok(Self {
            codec: Codec::Whatwg(encoding),
        })
    }

    /// Resolve an optional label, falling back to UTF-8
    pub fn resolve(name: Option<&str>) -> Result<Self> {
        match name {
            Some(name) => Self::for_name(name),
            None => Ok(Self::utf8()),
        }
    }

    /// Canonical name of the charset
    pub fn name(&self) -> &'static str {
        match self.codec {
            Codec::UsAscii => "US-ASCII",
            Codec::Iso8859_1 => "ISO-8859-1",
            Codec::Whatwg(encoding) => encoding.name(),
        }
    }

    /// Encode a string into this charset
    ///
    /// Characters the charset cannot represent are written as `?`.
    /// UTF-16 output carries no byte order mark.
    pub fn encode(&self, input: &str) -> Vec<u8> {
        let (bytes, replaced) = match self.codec {
            Codec::UsAscii => encode_single_byte(input, 0x7f),
            Codec::Iso8859_1 => encode_single_byte(input, 0xff),
            Codec::Whatwg(encoding) if encoding == UTF_8 => (input.as_bytes().to_vec(), 0),
            Codec::Whatwg(encoding) if encoding == UTF_16BE => (
                input.encode_utf16().flat_map(u16::to_be_bytes).collect(),
                0,
            ),
            Codec::Whatwg(encoding) if encoding == UTF_16LE => (
                input.encode_utf16().flat_map(u16::to_le_bytes).collect(),
                0,
            ),
            Codec::Whatwg(encoding) => encode_with(encoding, input),
        };

        if replaced > 0 {
            log::trace!(
                "Replaced {} unmappable character(s) while encoding to {}",
                replaced,
                self.name()
            );
        }

        bytes
    }

    /// Decode bytes in this charset
    ///
    /// Malformed sequences are rejected rather than replaced.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self.codec {
            Codec::UsAscii => match bytes.iter().position(|byte| !byte.is_ascii()) {
                Some(position) => Err(Error::decode(format!(
                    "Byte 0x{:02x} at {} is not US-ASCII",
                    bytes[position], position
                ))),
                None => Ok(bytes.iter().map(|&byte| char::from(byte)).collect()),
            },
            Codec::Iso8859_1 => Ok(bytes.iter().map(|&byte| char::from(byte)).collect()),
            Codec::Whatwg(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned())
                .ok_or_else(|| Error::decode(format!("Malformed {} byte sequence", self.name()))),
        }
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::utf8()
    }
}

fn is_utf16(encoding: &'static Encoding) -> bool {
    encoding == UTF_16BE || encoding == UTF_16LE
}

/// Encode code points up to `max` as single bytes, anything above as `?`
fn encode_single_byte(input: &str, max: u32) -> (Vec<u8>, usize) {
    let mut replaced = 0;
    let bytes = input
        .chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(byte) if u32::from(byte) <= max => byte,
            _ => {
                replaced += 1;
                b'?'
            }
        })
        .collect();
    (bytes, replaced)
}

/// Encode through `encoding_rs`, writing `?` for unmappable characters
fn encode_with(encoding: &'static Encoding, input: &str) -> (Vec<u8>, usize) {
    let mut encoder = encoding.new_encoder();
    let capacity = encoder
        .max_buffer_length_from_utf8_without_replacement(input.len())
        .unwrap_or(input.len() * 4)
        .max(16);
    let mut bytes = vec![0u8; capacity];
    let mut total = 0;
    let mut remaining = input;
    let mut replaced = 0;

    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(remaining, &mut bytes[total..], true);
        total += written;
        remaining = &remaining[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => grow(&mut bytes),
            EncoderResult::Unmappable(_) => {
                replaced += 1;
                push_replacement(&mut encoder, &mut bytes, &mut total);
            }
        }
    }

    bytes.truncate(total);
    (bytes, replaced)
}

fn push_replacement(encoder: &mut Encoder, bytes: &mut Vec<u8>, total: &mut usize) {
    loop {
        let (result, _, written) = encoder.encode_from_utf8_without_replacement(
            UNMAPPABLE_REPLACEMENT,
            &mut bytes[*total..],
            false,
        );
        *total += written;
        match result {
            EncoderResult::OutputFull => grow(bytes),
            result => {
                debug_assert!(matches!(result, EncoderResult::InputEmpty));
                return;
            }
        }
    }
}

fn grow(bytes: &mut Vec<u8>) {
    let len = bytes.len();
    bytes.resize(len * 2 + 16, 0);
}

/// Render bytes as binary text, most significant bit first
///
/// Every byte becomes exactly eight `0`/`1` characters. A non-empty
/// separator is appended after every byte, the last one included.
///
/// # Example
/// ```rust
/// use strutil::utils::encoding::to_binary_bytes;
///
/// assert_eq!(to_binary_bytes(&[0x41, 0xff], Some(" ")), "01000001 11111111 ");
/// assert_eq!(to_binary_bytes(&[0x80], None), "10000000");
/// ```
pub fn to_binary_bytes(bytes: &[u8], separator: Option<&str>) -> String {
    let separator = separator.filter(|separator| !separator.is_empty());
    let block = BITS_PER_BYTE + separator.map_or(0, str::len);
    let mut binary = String::with_capacity(bytes.len() * block);

    for &byte in bytes {
        for bit in (0..BITS_PER_BYTE).rev() {
            binary.push(if (byte >> bit) & 1 == 1 { '1' } else { '0' });
        }

        if let Some(separator) = separator {
            binary.push_str(separator);
        }
    }

    binary
}

/// Convert a string to the binary text of its encoded bytes
///
/// The string is encoded with `charset` (UTF-8 when `None`) and each byte
/// is rendered by [`to_binary_bytes`]. Pass the charset explicitly whenever
/// the byte layout matters to the consumer.
///
/// # Arguments
/// * `input` - String to convert
/// * `charset` - Charset label, UTF-8 when `None`
/// * `separator` - Text written after each byte; `None` or `""` for none
///
/// # Example
/// ```rust
/// use strutil::utils::encoding::to_binary;
///
/// assert_eq!(to_binary("AB", Some("us-ascii"), Some(" ")).unwrap(), "01000001 01000010 ");
/// assert!(to_binary("A", Some("klingon"), None).is_err());
/// ```
pub fn to_binary(input: &str, charset: Option<&str>, separator: Option<&str>) -> Result<String> {
    let charset = Charset::resolve(charset)?;
    Ok(to_binary_bytes(&charset.encode(input), separator))
}

/// Parse binary text produced by [`to_binary_bytes`] back into bytes
///
/// The input must be a sequence of 8-digit blocks. With a non-empty
/// separator, every block must be followed by it, except that it may be
/// left off after the final block.
pub fn parse_binary(bits: &str, separator: Option<&str>) -> Result<Vec<u8>> {
    let separator = separator.filter(|separator| !separator.is_empty());
    let mut bytes = Vec::with_capacity(bits.len() / BITS_PER_BYTE);
    let mut rest = bits;

    while !rest.is_empty() {
        let block = rest.get(..BITS_PER_BYTE).ok_or_else(|| {
            Error::invalid_binary(format!("Incomplete block at byte {}", bytes.len()))
        })?;

        let mut byte = 0u8;
        for digit in block.bytes() {
            byte = match digit {
                b'0' => byte << 1,
                b'1' => (byte << 1) | 1,
                other => {
                    return Err(Error::invalid_binary(format!(
                        "Unexpected character '{}' at byte {}",
                        char::from(other),
                        bytes.len()
                    )))
                }
            };
        }
        bytes.push(byte);
        rest = &rest[BITS_PER_BYTE..];

        if let Some(separator) = separator {
            if !rest.is_empty() {
                rest = rest.strip_prefix(separator).ok_or_else(|| {
                    Error::invalid_binary(format!(
                        "Missing separator after byte {}",
                        bytes.len() - 1
                    ))
                })?;
            }
        }
    }

    Ok(bytes)
}

/// Convert binary text back into a string, the inverse of [`to_binary`]
///
/// # Example
/// ```rust
/// use strutil::utils::encoding::from_binary;
///
/// assert_eq!(from_binary("01000001 01000010 ", Some("us-ascii"), Some(" ")).unwrap(), "AB");
/// ```
pub fn from_binary(bits: &str, charset: Option<&str>, separator: Option<&str>) -> Result<String> {
    let charset = Charset::resolve(charset)?;
    let bytes = parse_binary(bits, separator)?;
    charset.decode(&bytes)
}
