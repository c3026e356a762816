//! Serialization of built nodes to HTML text.
//!
//! - Void elements with no children close themselves (`<img .../>`)
//! - Text content escapes `&`, `<` and `>`
//! - Attribute values are double-quoted and also escape `"`
//! - Raw text elements (script, style) are not escaped
//! - RCDATA elements (title, textarea) escape only `&` and `<`

use crate::{Element, Node, Render, build, debug};
use std::fmt::{self, Write};
use std::io;

/// Options for rendering.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Indent nested elements, one per line (default: false)
    pub pretty: bool,
    /// Indentation string for pretty output (default: "  ")
    pub indent: String,
    /// Whether to escape `</script` sequences in script content (default: true)
    pub escape_script_end_tags: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "  ".to_string(),
            escape_script_end_tags: true,
        }
    }
}

impl RenderOptions {
    /// Minified output.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Set the indentation string; implies pretty output.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self.pretty = true;
        self
    }

    /// Write script content verbatim, including any `</script`.
    pub fn no_escape_script_end_tags(mut self) -> Self {
        self.escape_script_end_tags = false;
        self
    }
}

/// Write each view's markup to `w`, in order, with no separator.
///
/// Errors from `w` are returned as they were raised.
pub fn render<W: io::Write + ?Sized>(w: &mut W, views: &[&dyn Render]) -> io::Result<()> {
    render_with_options(w, views, &RenderOptions::default())
}

pub fn render_with_options<W: io::Write + ?Sized>(
    w: &mut W,
    views: &[&dyn Render],
    options: &RenderOptions,
) -> io::Result<()> {
    for view in views {
        let node = build(*view);
        debug!(pretty = options.pretty, root = ?root_name(&node), "rendering view");
        write!(w, "{}", Html::new(&node, options))?;
    }
    Ok(())
}

/// Build and serialize one view with default options.
pub fn render_to_string<V: Render + ?Sized>(view: &V) -> String {
    build(view).to_html()
}

/// Serialize `node` into any [`fmt::Write`].
pub fn serialize_node<W: Write>(out: &mut W, node: &Node, options: &RenderOptions) -> fmt::Result {
    Serializer::new(out, options).write_node(node)
}

#[cfg(feature = "tracing")]
fn root_name(node: &Node) -> &str {
    match node {
        Node::Element(element) => &element.tag,
        Node::Text(_) => "#text",
    }
}

/// [`fmt::Display`] for a node under given options.
pub struct Html<'a> {
    node: &'a Node,
    options: &'a RenderOptions,
}

impl<'a> Html<'a> {
    pub fn new(node: &'a Node, options: &'a RenderOptions) -> Self {
        Self { node, options }
    }
}

impl fmt::Display for Html<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serialize_node(f, self.node, self.options)
    }
}

/// Elements that never get an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Content is written verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Only `&` and `<` are escaped.
const RCDATA_ELEMENTS: &[&str] = &["title", "textarea"];

fn is_one_of(tag: &str, set: &[&str]) -> bool {
    set.iter().any(|known| tag.eq_ignore_ascii_case(known))
}

struct Serializer<'a, W: Write> {
    out: &'a mut W,
    options: &'a RenderOptions,
    depth: usize,
}

impl<'a, W: Write> Serializer<'a, W> {
    fn new(out: &'a mut W, options: &'a RenderOptions) -> Self {
        Self {
            out,
            options,
            depth: 0,
        }
    }

    /// Minified options for markup nested inside raw text or RCDATA.
    fn inline_options(&self) -> RenderOptions {
        RenderOptions {
            pretty: false,
            indent: String::new(),
            escape_script_end_tags: self.options.escape_script_end_tags,
        }
    }

    fn write_indent(&mut self) -> fmt::Result {
        if self.options.pretty {
            for _ in 0..self.depth {
                self.out.write_str(&self.options.indent)?;
            }
        }
        Ok(())
    }

    fn write_newline(&mut self) -> fmt::Result {
        if self.options.pretty {
            self.out.write_char('\n')?;
        }
        Ok(())
    }

    fn write_escaped(
        &mut self,
        text: &str,
        escape: fn(char) -> Option<&'static str>,
    ) -> fmt::Result {
        let mut last_end = 0;
        for (i, c) in text.char_indices() {
            if let Some(entity) = escape(c) {
                self.out.write_str(&text[last_end..i])?;
                self.out.write_str(entity)?;
                last_end = i + c.len_utf8();
            }
        }
        self.out.write_str(&text[last_end..])
    }

    fn write_raw_text(&mut self, text: &str, tag: &str) -> fmt::Result {
        if !(self.options.escape_script_end_tags && tag.eq_ignore_ascii_case("script")) {
            return self.out.write_str(text);
        }

        // Byte-wise matching keeps indices aligned with `text`.
        const PATTERN: &[u8] = b"</script";
        let bytes = text.as_bytes();
        let mut last_end = 0;
        let mut i = 0;
        while i + PATTERN.len() <= bytes.len() {
            if bytes[i..i + PATTERN.len()].eq_ignore_ascii_case(PATTERN) {
                self.out.write_str(&text[last_end..i])?;
                self.out.write_str("<\\/")?;
                // keep the casing of "script" as written
                self.out.write_str(&text[i + 2..i + PATTERN.len()])?;
                last_end = i + PATTERN.len();
                i = last_end;
            } else {
                i += 1;
            }
        }
        self.out.write_str(&text[last_end..])
    }

    fn write_attr(&mut self, name: &str, value: &str) -> fmt::Result {
        write!(self.out, " {name}=\"")?;
        self.write_escaped(value, escape_attr)?;
        self.out.write_char('"')
    }

    fn write_element(&mut self, elem: &Element) -> fmt::Result {
        let tag = elem.tag.as_str();

        self.write_indent()?;
        write!(self.out, "<{tag}")?;
        for attr in &elem.attrs {
            self.write_attr(&attr.key, &attr.value)?;
        }

        if elem.children.is_empty() && is_one_of(tag, VOID_ELEMENTS) {
            self.out.write_str("/>")?;
            return self.write_newline();
        }

        self.out.write_char('>')?;

        if elem.children.is_empty() {
            write!(self.out, "</{tag}>")?;
            return self.write_newline();
        }

        let is_raw = is_one_of(tag, RAW_TEXT_ELEMENTS);
        let is_rcdata = is_one_of(tag, RCDATA_ELEMENTS);
        let all_text = elem.children.iter().all(Node::is_text);

        if is_raw || is_rcdata {
            // element children become their markup, then go through the text rules
            for child in &elem.children {
                let markup;
                let text = match child {
                    Node::Text(text) => text.as_str(),
                    Node::Element(_) => {
                        markup = child.to_html_with_options(&self.inline_options());
                        markup.as_str()
                    }
                };
                if is_raw {
                    self.write_raw_text(text, tag)?;
                } else {
                    self.write_escaped(text, escape_rcdata)?;
                }
            }
            write!(self.out, "</{tag}>")?;
            self.write_newline()
        } else if all_text {
            for child in &elem.children {
                if let Node::Text(text) = child {
                    self.write_escaped(text, escape_text)?;
                }
            }
            write!(self.out, "</{tag}>")?;
            self.write_newline()
        } else {
            self.write_newline()?;
            self.depth += 1;
            for child in &elem.children {
                self.write_node(child)?;
            }
            self.depth -= 1;
            self.write_indent()?;
            write!(self.out, "</{tag}>")?;
            self.write_newline()
        }
    }

    fn write_node(&mut self, node: &Node) -> fmt::Result {
        match node {
            Node::Element(elem) => self.write_element(elem),
            Node::Text(text) => {
                self.write_indent()?;
                self.write_escaped(text, escape_text)?;
                if !text.is_empty() {
                    self.write_newline()?;
                }
                Ok(())
            }
        }
    }
}

fn escape_text(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    }
}

fn escape_attr(c: char) -> Option<&'static str> {
    match c {
        '"' => Some("&quot;"),
        _ => escape_text(c),
    }
}

fn escape_rcdata(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        _ => None,
    }
}

impl Node {
    /// Serialize this node to an HTML string with default options.
    pub fn to_html(&self) -> String {
        self.to_html_with_options(&RenderOptions::default())
    }

    /// Serialize this node to a pretty-printed HTML string.
    pub fn to_html_pretty(&self) -> String {
        self.to_html_with_options(&RenderOptions::default().pretty())
    }

    pub fn to_html_with_options(&self, options: &RenderOptions) -> String {
        Html::new(self, options).to_string()
    }
}
