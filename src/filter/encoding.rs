use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use tracing::debug;

use crate::app::{AppcastError, Result};

const UTF8_LABEL: &[u8] = b"utf-8";

/// Re-encode a document declared in an ASCII-compatible charset as UTF-8,
/// rewriting the declaration's `encoding` to `utf-8`. UTF-8 documents and
/// documents without a declaration are returned as is.
pub(super) fn to_utf8(input: &[u8]) -> Result<Cow<'_, [u8]>> {
    let mut reader = Reader::from_reader(input);
    let label = match reader.read_event() {
        Ok(Event::Decl(decl)) => match decl.encoding() {
            Some(Ok(label)) => label.into_owned(),
            // Malformed declarations are reported by the main pass.
            _ => return Ok(Cow::Borrowed(input)),
        },
        _ => return Ok(Cow::Borrowed(input)),
    };
    let decl_end = reader.buffer_position() as usize;

    let encoding = Encoding::for_label(&label).ok_or_else(|| {
        unsupported(format!(
            "unknown encoding '{}'",
            String::from_utf8_lossy(&label)
        ))
    })?;
    if encoding == UTF_8 {
        return Ok(Cow::Borrowed(input));
    }
    if !encoding.is_ascii_compatible() {
        return Err(unsupported(format!(
            "unsupported encoding '{}'",
            String::from_utf8_lossy(&label)
        )));
    }

    let body = encoding
        .decode_without_bom_handling_and_without_replacement(&input[decl_end..])
        .ok_or_else(|| unsupported(format!("invalid {} byte sequence", encoding.name())))?;

    debug!(encoding = encoding.name(), "Transcoding appcast to UTF-8");

    let decl = &input[..decl_end];
    let mut xml = Vec::with_capacity(input.len() + body.len() / 8);
    match label_span(decl, &label) {
        Some((start, end)) => {
            xml.extend_from_slice(&decl[..start]);
            xml.extend_from_slice(UTF8_LABEL);
            xml.extend_from_slice(&decl[end..]);
        }
        None => xml.extend_from_slice(decl),
    }
    xml.extend_from_slice(body.as_bytes());
    Ok(Cow::Owned(xml))
}

fn unsupported(message: String) -> AppcastError {
    AppcastError::Parse(format!("{message}: line 1, column 1"))
}

/// Byte range of the encoding label inside the declaration.
fn label_span(decl: &[u8], label: &[u8]) -> Option<(usize, usize)> {
    let after = find(decl, b"encoding")? + b"encoding".len();
    let start = after + find(&decl[after..], label)?;
    Some((start, start + label.len()))
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
