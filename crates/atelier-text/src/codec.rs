//! Reversible text encodings.

use std::fmt;
use std::str::FromStr;

use atelier_core::{AtelierError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Bytes left unescaped in URL encoding besides ASCII alphanumerics.
const URL_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Standard alphabet with padding, over UTF-8 bytes.
    Base64,
    /// One 8-digit (or wider) binary group per character code point.
    Binary,
    /// Percent-encoding of UTF-8 bytes.
    Url,
    /// HTML entity escaping of `&`, `<`, `>`, `"` and `'`.
    Html,
}

impl Encoding {
    pub const ALL: [Encoding; 4] = [
        Encoding::Base64,
        Encoding::Binary,
        Encoding::Url,
        Encoding::Html,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Encoding::Base64 => "base64",
            Encoding::Binary => "binary",
            Encoding::Url => "url",
            Encoding::Html => "html",
        }
    }

    pub fn encode(self, text: &str) -> String {
        match self {
            Encoding::Base64 => STANDARD.encode(text),
            Encoding::Binary => text
                .chars()
                .map(|c| format!("{:08b}", u32::from(c)))
                .collect::<Vec<_>>()
                .join(" "),
            Encoding::Url => utf8_percent_encode(text, URL_SAFE).to_string(),
            Encoding::Html => html_escape::encode_quoted_attribute(text).into_owned(),
        }
    }

    /// Inverse of [`Encoding::encode`]. HTML decoding never fails; the
    /// others fail on malformed input or input that does not decode to UTF-8.
    pub fn decode(self, encoded: &str) -> Result<String> {
        match self {
            Encoding::Base64 => {
                let bytes = STANDARD
                    .decode(encoded.trim())
                    .map_err(|e| AtelierError::Parse(format!("invalid Base64: {e}")))?;
                String::from_utf8(bytes)
                    .map_err(|e| AtelierError::Parse(format!("Base64 payload is not UTF-8: {e}")))
            }
            Encoding::Binary => encoded.split_whitespace().map(decode_binary_group).collect(),
            Encoding::Url => percent_decode_str(encoded)
                .decode_utf8()
                .map(|text| text.into_owned())
                .map_err(|e| AtelierError::Parse(format!("URL payload is not UTF-8: {e}"))),
            Encoding::Html => Ok(html_escape::decode_html_entities(encoded).into_owned()),
        }
    }
}

fn decode_binary_group(group: &str) -> Result<char> {
    if !group.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(AtelierError::Parse(format!("invalid binary group {group:?}")));
    }
    let code = u32::from_str_radix(group, 2)
        .map_err(|e| AtelierError::Parse(format!("invalid binary group {group:?}: {e}")))?;
    char::from_u32(code)
        .ok_or_else(|| AtelierError::Parse(format!("binary group {group:?} is not a character")))
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = AtelierError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Encoding::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AtelierError::InvalidArgument(format!("unknown encoding {s:?}")))
    }
}
