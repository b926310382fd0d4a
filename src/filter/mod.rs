//! Streaming removal of Sparkle releases by update channel.
//!
//! The document is read with a namespace-resolving pull parser and copied
//! to the output byte-for-byte. Every `<item>` under an RSS `<channel>` is
//! buffered until its end tag, then either flushed or dropped depending on
//! the text of its first `sparkle:channel` child.

mod encoding;

use std::fmt::Display;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use tracing::{debug, info};

use crate::app::{AppcastError, Result};
use crate::domain::{Release, CHANNEL_TAG, ITEM_TAG, SPARKLE_NAMESPACE};

/// Declaration written in front of documents that don't carry one.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const TITLE_TAG: &str = "title";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered {
    pub xml: Vec<u8>,
    pub removed: usize,
    pub retained: usize,
}

#[derive(Debug, Clone)]
pub struct ChannelFilter {
    channel: String,
}

impl ChannelFilter {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
        }
    }

    /// Drop every release of this filter's channel from `input`.
    ///
    /// Fails with [`AppcastError::Parse`] when `input` is not a well-formed
    /// XML document.
    pub fn filter(&self, input: &[u8]) -> Result<Filtered> {
        let input = input.strip_prefix(UTF8_BOM).unwrap_or(input);
        let input = encoding::to_utf8(input)?;
        let filtered = Pass::new(&self.channel, &input).run()?;

        info!(
            channel = %self.channel,
            removed = filtered.removed,
            retained = filtered.retained,
            "Filtered appcast"
        );
        Ok(filtered)
    }
}

/// Namespace an element name resolved to.
enum Ns {
    Unbound,
    Sparkle,
    Other,
    UnknownPrefix(String),
}

impl Ns {
    fn of(resolved: &ResolveResult) -> Self {
        match resolved {
            ResolveResult::Unbound => Ns::Unbound,
            ResolveResult::Bound(Namespace(ns)) if *ns == SPARKLE_NAMESPACE.as_bytes() => {
                Ns::Sparkle
            }
            ResolveResult::Bound(_) => Ns::Other,
            ResolveResult::Unknown(prefix) => {
                Ns::UnknownPrefix(String::from_utf8_lossy(prefix).into_owned())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Channel,
    Title,
}

/// Leading text of an item child we care about.
struct Capture {
    field: Field,
    text: String,
    leading: bool,
}

struct OpenItem {
    release: Release,
    channel_seen: bool,
    title_seen: bool,
    buf: Vec<u8>,
}

impl OpenItem {
    fn new() -> Self {
        Self {
            release: Release::default(),
            channel_seen: false,
            title_seen: false,
            buf: Vec::new(),
        }
    }

    /// First occurrence wins.
    fn record(&mut self, field: Field, value: Option<String>) {
        match field {
            Field::Channel if !self.channel_seen => {
                self.channel_seen = true;
                self.release.channel = value;
            }
            Field::Title if !self.title_seen => {
                self.title_seen = true;
                self.release.title = value;
            }
            _ => {}
        }
    }
}

enum Frame {
    FeedChannel,
    Item(OpenItem),
    Capture(Capture),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root {
    Pending,
    Open,
    Closed,
}

struct Pass<'f, 'i> {
    target: &'f str,
    input: &'i [u8],
    reader: NsReader<&'i [u8]>,
    stack: Vec<Frame>,
    out: Vec<u8>,
    root: Root,
    has_declaration: bool,
    after_removed: bool,
    removed: usize,
    retained: usize,
}

impl<'f, 'i> Pass<'f, 'i> {
    fn new(target: &'f str, input: &'i [u8]) -> Self {
        Self {
            target,
            input,
            reader: NsReader::from_reader(input),
            stack: Vec::new(),
            out: Vec::with_capacity(input.len()),
            root: Root::Pending,
            has_declaration: false,
            after_removed: false,
            removed: 0,
            retained: 0,
        }
    }

    fn run(mut self) -> Result<Filtered> {
        let input = self.input;
        loop {
            let start = self.reader.buffer_position() as usize;
            let read = self
                .reader
                .read_resolved_event()
                .map(|(resolved, event)| (Ns::of(&resolved), event));
            let (ns, event) = match read {
                Ok(pair) => pair,
                Err(e) => {
                    let at = self.reader.error_position() as usize;
                    return Err(self.parse_error(e, at));
                }
            };
            let end = self.reader.buffer_position() as usize;
            let raw = &input[start..end];
            let after_removed = std::mem::take(&mut self.after_removed);

            match event {
                Event::Decl(_) => {
                    self.check_utf8(raw, start)?;
                    self.has_declaration = true;
                    self.sink().extend_from_slice(raw);
                }
                Event::Start(e) => {
                    self.open_element(&e, ns, start)?;
                    self.sink().extend_from_slice(raw);
                }
                Event::Empty(e) => {
                    self.empty_element(&e, ns, start)?;
                    self.sink().extend_from_slice(raw);
                }
                Event::End(_) => self.close_element(raw, start)?,
                Event::Text(t) => {
                    let text = t.unescape().map_err(|e| self.parse_error(e, start))?;
                    if self.stack.is_empty() {
                        if !text.trim().is_empty() {
                            return Err(self.parse_error("text outside the root element", start));
                        }
                    } else if after_removed && text.trim().is_empty() {
                        // Indentation that followed a removed item.
                        continue;
                    }
                    if let Some(Frame::Capture(capture)) = self.stack.last_mut() {
                        if capture.leading {
                            capture.text.push_str(&text);
                        }
                    }
                    self.sink().extend_from_slice(raw);
                }
                Event::CData(c) => {
                    if self.stack.is_empty() {
                        return Err(self.parse_error("CDATA outside the root element", start));
                    }
                    let text = std::str::from_utf8(&c).map_err(|e| self.parse_error(e, start))?;
                    if let Some(Frame::Capture(capture)) = self.stack.last_mut() {
                        if capture.leading {
                            capture.text.push_str(text);
                        }
                    }
                    self.sink().extend_from_slice(raw);
                }
                Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {
                    self.check_utf8(raw, start)?;
                    self.sink().extend_from_slice(raw);
                }
                Event::Eof => {
                    if !self.stack.is_empty() {
                        return Err(self.parse_error("unclosed element", end));
                    }
                    if self.root == Root::Pending {
                        return Err(self.parse_error("no element found", end));
                    }
                    break;
                }
            }
        }

        let xml = if self.has_declaration {
            self.out
        } else {
            let mut xml = Vec::with_capacity(XML_DECLARATION.len() + 1 + self.out.len());
            xml.extend_from_slice(XML_DECLARATION.as_bytes());
            xml.push(b'\n');
            xml.extend_from_slice(&self.out);
            xml
        };

        Ok(Filtered {
            xml,
            removed: self.removed,
            retained: self.retained,
        })
    }

    /// Output for the innermost open item, or the document itself.
    fn sink(&mut self) -> &mut Vec<u8> {
        for frame in self.stack.iter_mut().rev() {
            if let Frame::Item(item) = frame {
                return &mut item.buf;
            }
        }
        &mut self.out
    }

    /// Checks shared by start tags and self-closing tags. Returns the frame
    /// the element would open.
    fn classify(&mut self, e: &BytesStart, ns: Ns, at: usize) -> Result<Frame> {
        if let Ns::UnknownPrefix(prefix) = &ns {
            return Err(self.parse_error(format!("unbound prefix '{prefix}'"), at));
        }
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.parse_error(err, at))?;
            attr.unescape_value()
                .map_err(|err| self.parse_error(err, at))?;
        }

        match self.root {
            Root::Pending if self.stack.is_empty() => self.root = Root::Open,
            Root::Closed => {
                return Err(self.parse_error("junk after document element", at));
            }
            _ => {}
        }

        // A child element ends the parent's leading text.
        if let Some(Frame::Capture(capture)) = self.stack.last_mut() {
            capture.leading = false;
        }

        let local = e.local_name();
        let local = local.as_ref();
        let frame = match (ns, self.stack.last()) {
            (Ns::Unbound, Some(_)) if local == CHANNEL_TAG.as_bytes() => Frame::FeedChannel,
            (Ns::Unbound, Some(Frame::FeedChannel)) if local == ITEM_TAG.as_bytes() => {
                Frame::Item(OpenItem::new())
            }
            (Ns::Sparkle, Some(Frame::Item(_))) if local == CHANNEL_TAG.as_bytes() => {
                Frame::Capture(Capture {
                    field: Field::Channel,
                    text: String::new(),
                    leading: true,
                })
            }
            (Ns::Unbound, Some(Frame::Item(_))) if local == TITLE_TAG.as_bytes() => {
                Frame::Capture(Capture {
                    field: Field::Title,
                    text: String::new(),
                    leading: true,
                })
            }
            _ => Frame::Other,
        };
        Ok(frame)
    }

    fn open_element(&mut self, e: &BytesStart, ns: Ns, at: usize) -> Result<()> {
        let frame = self.classify(e, ns, at)?;
        self.stack.push(frame);
        Ok(())
    }

    fn empty_element(&mut self, e: &BytesStart, ns: Ns, at: usize) -> Result<()> {
        match self.classify(e, ns, at)? {
            Frame::Item(_) => {
                // `<item/>` has no channel and is always kept.
                self.retained += 1;
            }
            Frame::Capture(capture) => {
                if let Some(Frame::Item(item)) = self.stack.last_mut() {
                    item.record(capture.field, None);
                }
            }
            Frame::FeedChannel | Frame::Other => {}
        }
        if self.stack.is_empty() {
            self.root = Root::Closed;
        }
        Ok(())
    }

    fn close_element(&mut self, raw: &[u8], at: usize) -> Result<()> {
        let frame = self
            .stack
            .pop()
            .ok_or_else(|| self.parse_error("unmatched end tag", at))?;

        match frame {
            Frame::Item(mut item) => {
                item.buf.extend_from_slice(raw);
                if item.release.belongs_to(self.target) {
                    debug!(
                        title = item.release.display_title(),
                        channel = self.target,
                        "Removing release"
                    );
                    self.removed += 1;
                    self.after_removed = true;
                } else {
                    if let Some(channel) = &item.release.channel {
                        debug!(
                            title = item.release.display_title(),
                            channel = %channel,
                            "Keeping release"
                        );
                    }
                    self.retained += 1;
                    self.sink().extend_from_slice(&item.buf);
                }
            }
            Frame::Capture(capture) => {
                self.sink().extend_from_slice(raw);
                let value = (!capture.text.is_empty()).then_some(capture.text);
                if let Some(Frame::Item(item)) = self.stack.last_mut() {
                    item.record(capture.field, value);
                }
            }
            Frame::FeedChannel | Frame::Other => self.sink().extend_from_slice(raw),
        }

        if self.stack.is_empty() {
            self.root = Root::Closed;
        }
        Ok(())
    }

    /// Markup that is copied without being decoded still has to be UTF-8.
    fn check_utf8(&self, raw: &[u8], at: usize) -> Result<()> {
        std::str::from_utf8(raw)
            .map(|_| ())
            .map_err(|e| self.parse_error(e, at + e.valid_up_to()))
    }

    fn parse_error(&self, message: impl Display, offset: usize) -> AppcastError {
        let (line, column) = line_column(self.input, offset);
        AppcastError::Parse(format!("{message}: line {line}, column {column}"))
    }
}

/// 1-based line and column of a byte offset.
fn line_column(input: &[u8], offset: usize) -> (usize, usize) {
    let consumed = &input[..offset.min(input.len())];
    let line = consumed.iter().filter(|&&b| b == b'\n').count() + 1;
    let column = consumed.iter().rev().take_while(|&&b| b != b'\n').count() + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPCAST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0" xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle">
  <channel>
    <title>Example Changelog</title>
    <link>https://example.com/appcast.xml</link>
    <item>
      <title>Version 2.0</title>
      <sparkle:version>200</sparkle:version>
      <sparkle:channel>stable</sparkle:channel>
    </item>
    <item>
      <title>Version 2.1 beta 1</title>
      <sparkle:version>201</sparkle:version>
      <sparkle:channel>edge</sparkle:channel>
    </item>
    <item>
      <title>Version 2.1 beta 2</title>
      <sparkle:version>202</sparkle:version>
      <sparkle:channel>edge</sparkle:channel>
    </item>
    <item>
      <title>Version 1.9</title>
      <sparkle:version>190</sparkle:version>
    </item>
  </channel>
</rss>
"#;

    const EXPECTED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0" xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle">
  <channel>
    <title>Example Changelog</title>
    <link>https://example.com/appcast.xml</link>
    <item>
      <title>Version 2.0</title>
      <sparkle:version>200</sparkle:version>
      <sparkle:channel>stable</sparkle:channel>
    </item>
    <item>
      <title>Version 1.9</title>
      <sparkle:version>190</sparkle:version>
    </item>
  </channel>
</rss>
"#;

    fn run(input: &str, channel: &str) -> Filtered {
        ChannelFilter::new(channel).filter(input.as_bytes()).unwrap()
    }

    fn text(filtered: &Filtered) -> &str {
        std::str::from_utf8(&filtered.xml).unwrap()
    }

    #[test]
    fn test_removes_matching_releases() {
        let filtered = run(APPCAST, "edge");

        assert_eq!(filtered.removed, 2);
        assert_eq!(filtered.retained, 2);
        assert_eq!(text(&filtered), EXPECTED);
    }

    #[test]
    fn test_no_match_leaves_document_unchanged() {
        let filtered = run(APPCAST, "nightly");

        assert_eq!(filtered.removed, 0);
        assert_eq!(filtered.retained, 4);
        assert_eq!(text(&filtered), APPCAST);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let filtered = run(APPCAST, "Edge");

        assert_eq!(filtered.removed, 0);
        assert_eq!(text(&filtered), APPCAST);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let first = run(APPCAST, "edge");
        let second = ChannelFilter::new("edge").filter(&first.xml).unwrap();

        assert_eq!(second.removed, 0);
        assert_eq!(second.xml, first.xml);
    }

    #[test]
    fn test_empty_target_removes_nothing() {
        let input = r#"<rss xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle"><channel><item><sparkle:channel></sparkle:channel></item><item><sparkle:channel/></item></channel></rss>"#;
        let filtered = run(input, "");

        assert_eq!(filtered.removed, 0);
        assert_eq!(filtered.retained, 2);
    }

    #[test]
    fn test_counts_across_every_feed_channel() {
        let input = r#"<?xml version="1.0"?>
<rss xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle">
  <channel>
    <item><sparkle:channel>edge</sparkle:channel></item>
  </channel>
  <channel>
    <item><sparkle:channel>edge</sparkle:channel></item>
    <item><sparkle:channel>stable</sparkle:channel></item>
  </channel>
  <wrapper>
    <channel>
      <item><sparkle:channel>edge</sparkle:channel></item>
    </channel>
  </wrapper>
</rss>"#;
        let filtered = run(input, "edge");

        assert_eq!(filtered.removed, 3);
        assert_eq!(filtered.retained, 1);
        assert!(!text(&filtered).contains(">edge<"));
        assert!(text(&filtered).contains(">stable<"));
    }

    #[test]
    fn test_matches_namespace_not_prefix() {
        let input = r#"<rss xmlns:su="http://www.andymatuschak.org/xml-namespaces/sparkle" xmlns:other="urn:other">
<channel>
<item><su:channel>edge</su:channel></item>
<item><other:channel>edge</other:channel></item>
<item><channel>edge</channel></item>
</channel>
</rss>"#;
        let filtered = run(input, "edge");

        assert_eq!(filtered.removed, 1);
        assert_eq!(filtered.retained, 2);
        let output = text(&filtered);
        assert!(!output.contains("<su:channel>"));
        assert!(output.contains("<other:channel>edge</other:channel>"));
        assert!(output.contains("<item><channel>edge</channel></item>"));
    }

    #[test]
    fn test_only_direct_items_of_feed_channel() {
        let input = r#"<rss xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle">
<channel>
<group><item><sparkle:channel>edge</sparkle:channel></item></group>
</channel>
</rss>"#;
        let filtered = run(input, "edge");

        assert_eq!(filtered.removed, 0);
        assert!(text(&filtered).contains("<group><item>"));
    }

    #[test]
    fn test_root_channel_is_not_a_feed_channel() {
        let input = r#"<channel xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle"><item><sparkle:channel>edge</sparkle:channel></item></channel>"#;
        let filtered = run(input, "edge");

        assert_eq!(filtered.removed, 0);
        assert_eq!(filtered.retained, 0);
    }

    #[test]
    fn test_first_sparkle_channel_decides() {
        let input = r#"<rss xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle"><channel>
<item><sparkle:channel>stable</sparkle:channel><sparkle:channel>edge</sparkle:channel></item>
<item><sparkle:channel>edge</sparkle:channel><sparkle:channel>stable</sparkle:channel></item>
</channel></rss>"#;
        let filtered = run(input, "edge");

        assert_eq!(filtered.removed, 1);
        assert!(text(&filtered).contains("<sparkle:channel>stable</sparkle:channel><sparkle:channel>edge</sparkle:channel>"));
    }

    #[test]
    fn test_channel_value_uses_leading_text_only() {
        let input = r#"<rss xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle"><channel>
<item><sparkle:channel>ed<!-- note -->ge</sparkle:channel></item>
<item><sparkle:channel><![CDATA[edge]]></sparkle:channel></item>
<item><sparkle:channel>e&#100;ge</sparkle:channel></item>
<item><sparkle:channel>edge<b>x</b></sparkle:channel></item>
<item><sparkle:channel><b>x</b>edge</sparkle:channel></item>
<item><sparkle:channel> edge </sparkle:channel></item>
</channel></rss>"#;
        let filtered = run(input, "edge");

        assert_eq!(filtered.removed, 4);
        assert_eq!(filtered.retained, 2);
        assert!(text(&filtered).contains("<b>x</b>edge"));
        assert!(text(&filtered).contains("> edge <"));
    }

    #[test]
    fn test_adds_declaration_when_missing() {
        let input = r#"<rss><channel><title>t</title></channel></rss>"#;
        let filtered = run(input, "edge");

        assert_eq!(
            text(&filtered),
            format!("{XML_DECLARATION}\n{input}")
        );
    }

    #[test]
    fn test_keeps_comments_and_instructions() {
        let input = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<!-- generated -->
<?xml-stylesheet href="feed.xsl"?>
<rss xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle"><channel><!-- releases --><item><sparkle:channel>edge</sparkle:channel></item></channel></rss>"#;
        let filtered = run(input, "edge");

        assert_eq!(filtered.removed, 1);
        let output = text(&filtered);
        assert!(output.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(output.contains("<!-- generated -->"));
        assert!(output.contains(r#"<?xml-stylesheet href="feed.xsl"?>"#));
        assert!(output.contains("<channel><!-- releases --></channel>"));
    }

    #[test]
    fn test_strips_byte_order_mark() {
        let mut input = UTF8_BOM.to_vec();
        input.extend_from_slice(APPCAST.as_bytes());
        let filtered = ChannelFilter::new("edge").filter(&input).unwrap();

        assert_eq!(filtered.removed, 2);
        assert_eq!(text(&filtered), EXPECTED);
    }

    #[test]
    fn test_self_closing_item_is_kept() {
        let input = r#"<rss><channel><item/></channel></rss>"#;
        let filtered = run(input, "edge");

        assert_eq!(filtered.removed, 0);
        assert_eq!(filtered.retained, 1);
    }

    fn parse_error(input: &str) -> String {
        match ChannelFilter::new("edge").filter(input.as_bytes()) {
            Err(AppcastError::Parse(message)) => message,
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_mismatched_tags() {
        let message = parse_error("<rss>\n<channel></item>\n</rss>");
        assert!(message.contains("line 2"), "{message}");
    }

    #[test]
    fn test_rejects_unclosed_root() {
        parse_error("<rss><channel>");
    }

    #[test]
    fn test_rejects_empty_document() {
        let message = parse_error("   ");
        assert!(message.starts_with("no element found"), "{message}");
    }

    #[test]
    fn test_rejects_plain_text() {
        parse_error("this is not xml");
    }

    #[test]
    fn test_rejects_junk_after_root() {
        let message = parse_error("<rss/><rss/>");
        assert!(message.starts_with("junk after document element"), "{message}");
    }

    #[test]
    fn test_rejects_unbound_prefix() {
        let message = parse_error("<rss><channel><item><sparkle:channel>edge</sparkle:channel></item></channel></rss>");
        assert!(message.starts_with("unbound prefix 'sparkle'"), "{message}");
    }

    #[test]
    fn test_rejects_undefined_entity() {
        parse_error("<rss><channel><title>&bogus;</title></channel></rss>");
    }

    #[test]
    fn test_accepts_us_ascii_declaration() {
        let input = r#"<?xml version="1.0" encoding="US-ASCII"?>
<rss xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle"><channel><item><sparkle:channel>edge</sparkle:channel></item></channel></rss>"#;
        let filtered = run(input, "edge");

        assert_eq!(filtered.removed, 1);
        assert_eq!(
            text(&filtered),
            r#"<?xml version="1.0" encoding="utf-8"?>
<rss xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle"><channel></channel></rss>"#
        );
    }

    #[test]
    fn test_latin1_is_rewritten_as_utf8() {
        let mut input = br#"<?xml version="1.0" encoding="ISO-8859-1"?>
<rss xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle"><channel>
<item><title>Caf"#
            .to_vec();
        input.push(0xE9);
        input.extend_from_slice(
            br#"</title><sparkle:channel>stable</sparkle:channel></item>
<item><sparkle:channel>edge</sparkle:channel></item>
</channel></rss>"#,
        );

        let filtered = ChannelFilter::new("edge").filter(&input).unwrap();

        assert_eq!(filtered.removed, 1);
        assert_eq!(filtered.retained, 1);
        let output = text(&filtered);
        assert!(output.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(output.contains("<title>Café</title>"));
    }

    #[test]
    fn test_rejects_unknown_encoding() {
        let message = parse_error(r#"<?xml version="1.0" encoding="x-no-such-charset"?><rss/>"#);
        assert!(message.contains("x-no-such-charset"), "{message}");
    }

    #[test]
    fn test_rejects_invalid_utf8_in_comment() {
        let input = b"<rss><!-- \xff\xfe --><channel/></rss>";
        let result = ChannelFilter::new("edge").filter(input);

        assert!(matches!(result, Err(AppcastError::Parse(_))), "{result:?}");
    }

    #[test]
    fn test_rejects_invalid_utf8_in_instruction() {
        let input = b"<rss><?app \xc3?><channel/></rss>";
        let result = ChannelFilter::new("edge").filter(input);

        assert!(matches!(result, Err(AppcastError::Parse(_))), "{result:?}");
    }

    #[test]
    fn test_line_column() {
        assert_eq!(line_column(b"abc", 0), (1, 1));
        assert_eq!(line_column(b"ab\ncd", 4), (2, 2));
        assert_eq!(line_column(b"ab", 10), (1, 3));
    }
}
