//! Minimal streaming XML writer with indentation.
//!
//! Start tags stay open after `open_element` so attributes can be appended;
//! the first child, content, or `close_element` terminates them. Elements
//! holding content keep their children and end tag on the same line.
use std::io::Write;

use super::format::AttributeValue;
use crate::error::{LoggerError, Result};

const INDENT: &str = "  ";

struct Element {
    name: &'static str,
    has_children: bool,
    has_content: bool,
}

pub struct XmlWriter<W: Write> {
    out: W,
    open: Vec<Element>,
    start_tag_open: bool,
    started: bool,
    finished: bool,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            open: Vec::new(),
            start_tag_open: false,
            started: false,
            finished: false,
        }
    }

    pub fn write_prolog(&mut self) -> Result<()> {
        write!(self.out, r#"<?xml version="1.0" encoding="utf-8"?>"#)?;
        self.started = true;
        Ok(())
    }

    pub fn open_element(&mut self, name: &'static str) -> Result<()> {
        if self.finished {
            return Err(LoggerError::NotOpen { state: "finished" });
        }

        self.end_start_tag()?;

        let inline = match self.open.last_mut() {
            Some(parent) => {
                parent.has_children = true;
                parent.has_content
            }
            None => false,
        };

        if !inline && self.started {
            self.newline()?;
        }

        write!(self.out, "<{}", name)?;
        self.open.push(Element { name, has_children: false, has_content: false });
        self.start_tag_open = true;
        self.started = true;

        Ok(())
    }

    /// Writes the attribute unless its value formats to nothing
    pub fn write_attribute<'a>(&mut self, name: &'static str, value: impl Into<AttributeValue<'a>>) -> Result<()> {
        let value: AttributeValue = value.into();
        let Some(text) = value.format() else {
            return Ok(());
        };

        if !self.start_tag_open {
            return Err(LoggerError::MisplacedAttribute { name });
        }

        write!(self.out, r#" {}="{}""#, name, escape_attribute(&text))?;
        Ok(())
    }

    /// Writes `text` as a character-data section. Ampersands are always
    /// replaced by entities, angle brackets only when asked to.
    pub fn write_content(&mut self, text: &str, escape_angle_brackets: bool) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        let mut escaped = text.replace('&', "&amp;");
        if escape_angle_brackets {
            escaped = escaped.replace('<', "&lt;").replace('>', "&gt;");
        }

        self.begin_content()?;
        write!(self.out, "<![CDATA[{}]]>", escaped.replace("]]>", "]]]]><![CDATA[>"))?;
        Ok(())
    }

    /// Writes plain escaped text
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        self.begin_content()?;
        write!(self.out, "{}", escape_text(text))?;
        Ok(())
    }

    pub fn close_element(&mut self) -> Result<()> {
        let Some(element) = self.open.pop() else {
            return Err(LoggerError::NotOpen { state: "finished" });
        };

        if self.start_tag_open {
            write!(self.out, " />")?;
            self.start_tag_open = false;
        } else {
            if element.has_children && !element.has_content {
                self.newline()?;
            }
            write!(self.out, "</{}>", element.name)?;
        }

        if self.open.is_empty() {
            self.finished = true;
        }

        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Whether attributes can still be added to the innermost element
    pub fn start_tag_open(&self) -> bool {
        self.start_tag_open
    }

    /// Whether the root element has been closed
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Closes every element still open and flushes. Returns how many had to
    /// be closed along with the underlying sink.
    pub fn finish(mut self) -> Result<(usize, W)> {
        let mut forced = 0;
        while !self.open.is_empty() {
            self.close_element()?;
            forced += 1;
        }

        if self.started {
            writeln!(self.out)?;
        }
        self.out.flush()?;

        Ok((forced, self.out))
    }

    fn begin_content(&mut self) -> Result<()> {
        self.end_start_tag()?;
        if let Some(element) = self.open.last_mut() {
            element.has_content = true;
        }
        Ok(())
    }

    fn end_start_tag(&mut self) -> Result<()> {
        if self.start_tag_open {
            write!(self.out, ">")?;
            self.start_tag_open = false;
        }
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        writeln!(self.out)?;
        for _ in &self.open {
            write!(self.out, "{}", INDENT)?;
        }
        Ok(())
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn escape_attribute(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            '\t' => escaped.push_str("&#x9;"),
            c => escaped.push(c),
        }
    }
    escaped
}
