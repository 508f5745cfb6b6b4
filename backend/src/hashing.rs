//! Digests of submitted answers and arbitrary text.

use common::model::response::AnswerHashes;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::Value;
use sha2::{Digest, Sha256};
use sha3::Keccak256;
use std::io::{self, Write};

pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Ethereum-style Keccak-256 (pre-standard padding, not SHA3-256).
pub fn keccak256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Keccak256::digest(bytes))
}

pub fn digests(bytes: &[u8]) -> AnswerHashes {
    AnswerHashes {
        sha256: sha256_hex(bytes),
        keccak: keccak256_hex(bytes),
    }
}

/// How non-ASCII characters are written by the canonical encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Escape {
    /// Written as-is (UTF-8).
    None,
    /// Written as lowercase `\uXXXX` escapes, surrogate pairs beyond the BMP.
    NonAscii,
}

/// `json.dumps`-style output: `", "` between items and `": "` after keys.
struct SpacedFormatter {
    escape: Escape,
}

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if self.escape == Escape::None || fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Rebuilds `value` with object keys sorted at every level.
fn sorted(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(entries.into_iter().map(|(k, v)| (k, sorted(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sorted).collect()),
        other => other,
    }
}

fn encode<T: Serialize>(value: &T, escape: Escape) -> Result<String, serde_json::Error> {
    let value = sorted(serde_json::to_value(value)?);
    let mut out = Vec::new();
    let mut ser = Serializer::with_formatter(&mut out, SpacedFormatter { escape });
    value.serialize(&mut ser)?;
    String::from_utf8(out).map_err(serde::ser::Error::custom)
}

/// Canonical text of submitted answers: keys sorted, `json.dumps` separators,
/// non-ASCII kept as UTF-8.
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    encode(value, Escape::None)
}

/// Like [`canonical_json`] but with non-ASCII escaped, as the file-mode
/// payload hash has always been computed.
pub fn canonical_json_ascii<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    encode(value, Escape::NonAscii)
}
