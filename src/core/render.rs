use crate::domain::model::Manifest;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;

const INDENT: &[u8] = b"    ";

/// Pretty printer that escapes every non-ASCII character, and DEL, as `\uXXXX`.
struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    fn new(indent: &'a [u8]) -> Self {
        Self {
            inner: PrettyFormatter::with_indent(indent),
        }
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() && !fragment.contains('\x7f') {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch == '\x7f' {
                writer.write_all(b"\\u007f")?;
            } else if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize any value with the manifest layout: 4-space indent, `,` at line
/// ends, `": "` between keys and values, ASCII-only output.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::new(INDENT));
    value.serialize(&mut ser)?;
    // The formatter only ever writes ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write the manifest followed by a single newline.
pub fn write_manifest<W: io::Write>(writer: &mut W, manifest: &Manifest) -> Result<()> {
    let text = to_pretty_json(manifest)?;
    writer.write_all(text.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Repository, Requirements};

    #[test]
    fn test_pretty_layout_matches_expected_bytes() {
        let mut reqs = Requirements::new();
        reqs.insert("a".to_string(), "1".to_string());
        let manifest = Manifest::new(
            Some(reqs),
            Some(vec![Repository {
                r#type: "vcs".to_string(),
                url: "https://h/p".to_string(),
            }]),
        );

        let expected = r#"{
    "name": "rubedo/extensions",
    "require": {
        "a": "1"
    },
    "require-dev": {},
    "repositories": [
        {
            "type": "vcs",
            "url": "https://h/p"
        }
    ],
    "minimum-stability": "dev",
    "config": {
        "process-timeout": 600,
        "vendor-dir": "extensions"
    }
}"#;
        assert_eq!(to_pretty_json(&manifest).unwrap(), expected);
    }

    #[test]
    fn test_null_fields_render_as_null() {
        let text = to_pretty_json(&Manifest::new(None, None)).unwrap();
        assert!(text.contains("\n    \"require\": null,\n"));
        assert!(text.contains("\n    \"repositories\": null,\n"));
        assert!(!text.lines().any(|line| line.ends_with(' ')));
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        let mut reqs = Requirements::new();
        reqs.insert("caf\u{e9}/pkg".to_string(), "\u{1F600}".to_string());
        let text = to_pretty_json(&reqs).unwrap();
        assert!(text.is_ascii());
        assert!(text.contains("caf\\u00e9/pkg"));
        assert!(text.contains("\\ud83d\\ude00"));

        let back: Requirements = serde_json::from_str(&text).unwrap();
        assert_eq!(back, reqs);
    }

    #[test]
    fn test_del_is_escaped() {
        assert_eq!(to_pretty_json("x\u{7f}y").unwrap(), "\"x\\u007fy\"");
        assert_eq!(to_pretty_json("caf\u{e9}\u{7f}").unwrap(), "\"caf\\u00e9\\u007f\"");
    }

    #[test]
    fn test_write_manifest_appends_newline() {
        let mut out = Vec::new();
        write_manifest(&mut out, &Manifest::new(None, None)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(!text.ends_with("\n\n"));
    }
}
