//! Color backends for report rendering.
//!
//! The renderer only knows which [`Style`] a piece of text belongs to; the
//! backend decides how that turns into output. Swapping the backend changes
//! markup and nothing else.

use std::fmt::{self, Write};

use owo_colors::{AnsiColors, OwoColorize};

use crate::Style;

/// How styled text is written.
pub trait ColorBackend {
    /// Write unstyled text (structure, keys, separators).
    fn write_plain<W: Write>(&self, w: &mut W, text: &str) -> fmt::Result {
        w.write_str(text)
    }

    /// Write text in a style. `strong` marks the value part of an entry.
    fn write_styled<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        style: &Style,
        strong: bool,
    ) -> fmt::Result;
}

/// Plain backend: no markup at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainBackend;

impl ColorBackend for PlainBackend {
    fn write_styled<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        _style: &Style,
        _strong: bool,
    ) -> fmt::Result {
        w.write_str(text)
    }
}

/// ANSI backend: terminal escape codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiBackend;

impl ColorBackend for AnsiBackend {
    fn write_styled<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        style: &Style,
        strong: bool,
    ) -> fmt::Result {
        match (style.color, strong) {
            (Some(color), true) => write!(w, "{}", text.color(color).bold()),
            (Some(color), false) => write!(w, "{}", text.color(color)),
            (None, true) => write!(w, "{}", text.bold()),
            (None, false) => w.write_str(text),
        }
    }
}

/// HTML backend: `<span>` elements with inline colors, escaped content.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBackend;

impl HtmlBackend {
    fn css_color(color: AnsiColors) -> Option<&'static str> {
        Some(match color {
            AnsiColors::Default => return None,
            AnsiColors::Black => "black",
            AnsiColors::Red => "red",
            AnsiColors::Green => "green",
            AnsiColors::Yellow => "darkgoldenrod",
            AnsiColors::Blue => "blue",
            AnsiColors::Magenta => "magenta",
            AnsiColors::Cyan => "darkcyan",
            AnsiColors::White => "gray",
            _ => "inherit",
        })
    }
}

fn write_escaped<W: Write>(w: &mut W, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => w.write_str("&amp;")?,
            '<' => w.write_str("&lt;")?,
            '>' => w.write_str("&gt;")?,
            '"' => w.write_str("&quot;")?,
            c => w.write_char(c)?,
        }
    }
    Ok(())
}

impl ColorBackend for HtmlBackend {
    fn write_plain<W: Write>(&self, w: &mut W, text: &str) -> fmt::Result {
        write_escaped(w, text)
    }

    fn write_styled<W: Write>(
        &self,
        w: &mut W,
        text: &str,
        style: &Style,
        strong: bool,
    ) -> fmt::Result {
        match style.color.and_then(Self::css_color) {
            Some(css) => write!(w, "<span style=\"color: {css}\">")?,
            None => w.write_str("<span>")?,
        }
        if strong {
            w.write_str("<b>")?;
        }
        write_escaped(w, text)?;
        if strong {
            w.write_str("</b>")?;
        }
        w.write_str("</span>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Style = Style::new(Some(AnsiColors::Red), "-");

    #[test]
    fn plain_backend() {
        let mut out = String::new();
        PlainBackend.write_styled(&mut out, "hello", &RED, true).unwrap();
        PlainBackend.write_plain(&mut out, " <x>").unwrap();
        assert_eq!(out, "hello <x>");
    }

    #[test]
    fn ansi_backend() {
        let mut out = String::new();
        AnsiBackend.write_styled(&mut out, "deleted", &RED, false).unwrap();
        assert!(out.contains("\x1b["));
        assert!(out.contains("deleted"));
    }

    #[test]
    fn html_backend_escapes() {
        let mut out = String::new();
        HtmlBackend.write_styled(&mut out, "<a>", &RED, true).unwrap();
        assert_eq!(out, "<span style=\"color: red\"><b>&lt;a&gt;</b></span>");

        out.clear();
        HtmlBackend.write_plain(&mut out, "\"k\"").unwrap();
        assert_eq!(out, "&quot;k&quot;");
    }
}
