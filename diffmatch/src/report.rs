//! Rendering a diff tree as a report: a body that mirrors the shape of the
//! compared values, then a summary line of per-category counts.
//!
//! The renderer decides what text goes where and which [`Style`] it carries;
//! the [`ColorBackend`] turns that into plain text, ANSI escapes or HTML.

use std::fmt;
use std::ops::Range;

use diffmatch_core::{
    Category, Child, ColorBackend, Counts, DiffKind, DiffTree, Key, Options, Shape, Style,
    StyleTable, TextChunk,
};

const INDENT: &str = "  ";

/// Render `tree` with the given style table and backend.
pub fn render_tree<B: ColorBackend>(
    tree: &DiffTree,
    options: &Options,
    styles: &StyleTable,
    backend: &B,
) -> String {
    let renderer = Renderer {
        backend,
        styles,
        options,
    };
    let mut out = String::new();
    renderer
        .render(tree, &mut out)
        .expect("writing to String cannot fail");
    out
}

struct Renderer<'a, B> {
    backend: &'a B,
    styles: &'a StyleTable,
    options: &'a Options,
}

impl<B: ColorBackend> Renderer<'_, B> {
    fn render(&self, tree: &DiffTree, out: &mut String) -> fmt::Result {
        if let Some(body) = self.node(tree, true)? {
            out.push_str(&body);
        }
        self.summary(tree.counts(), out)
    }

    fn node(&self, tree: &DiffTree, root: bool) -> Result<Option<String>, fmt::Error> {
        let mut out = String::new();
        match tree.kind() {
            DiffKind::Match {
                kind,
                rendered,
                highlight,
            } => {
                let category = kind.category();
                if !root && !self.options.shows(category) {
                    return Ok(None);
                }
                self.matched(&mut out, category, rendered, highlight.as_ref())?;
            }
            DiffKind::Missing { rendered } => {
                self.entry(&mut out, Category::Missing, None, rendered)?;
            }
            DiffKind::Additional { rendered } => {
                self.entry(&mut out, Category::Additional, None, rendered)?;
            }
            DiffKind::Mismatch { expected, actual } => {
                self.entry(&mut out, Category::Missing, None, expected)?;
                self.entry(&mut out, Category::Additional, None, actual)?;
            }
            DiffKind::Text(chunks) => self.text(&mut out, chunks)?,
            DiffKind::Nested { shape, children } => return self.nested(*shape, children, root),
        }
        Ok(Some(out))
    }

    fn style(&self, category: Category) -> &Style {
        self.styles.style(category)
    }

    fn glyph(&self, out: &mut String, style: &Style) -> fmt::Result {
        self.backend
            .write_styled(out, &format!("{} ", style.glyph), style, false)
    }

    /// `<glyph> [key: ]value`
    fn entry(
        &self,
        out: &mut String,
        category: Category,
        key: Option<&Key>,
        value: &str,
    ) -> fmt::Result {
        let style = self.style(category);
        self.glyph(out, style)?;
        if let Some(key) = key {
            self.backend.write_plain(out, &format!("{key}: "))?;
        }
        self.backend.write_styled(out, value, style, true)
    }

    fn matched(
        &self,
        out: &mut String,
        category: Category,
        rendered: &str,
        highlight: Option<&Range<usize>>,
    ) -> fmt::Result {
        if category == Category::MatchValue {
            return self.backend.write_plain(out, rendered);
        }
        let style = self.style(category);
        self.glyph(out, style)?;
        if category != Category::MatchPattern {
            return self.backend.write_styled(out, rendered, style, true);
        }

        // Pattern matches keep the raw text; quote and escape it here so the
        // span stays a byte range into the original.
        self.backend.write_plain(out, "\"")?;
        match highlight.filter(|span| rendered.get((*span).clone()).is_some()) {
            Some(span) => {
                self.backend.write_plain(out, &escape(&rendered[..span.start]))?;
                self.backend.write_styled(out, "(", style, false)?;
                self.backend
                    .write_styled(out, &escape(&rendered[span.clone()]), style, true)?;
                self.backend.write_styled(out, ")", style, false)?;
                self.backend.write_plain(out, &escape(&rendered[span.end..]))?;
            }
            None => self.backend.write_styled(out, &escape(rendered), style, true)?,
        }
        self.backend.write_plain(out, "\"")
    }

    /// `"same[-gone][+new]"`
    fn text(&self, out: &mut String, chunks: &[TextChunk]) -> fmt::Result {
        self.backend.write_plain(out, "\"")?;
        for chunk in chunks {
            match chunk {
                TextChunk::Same(run) => self.backend.write_plain(out, &escape(run))?,
                TextChunk::Missing(run) => self.text_run(out, Category::Missing, run)?,
                TextChunk::Additional(run) => self.text_run(out, Category::Additional, run)?,
            }
        }
        self.backend.write_plain(out, "\"")
    }

    fn text_run(&self, out: &mut String, category: Category, run: &str) -> fmt::Result {
        let style = self.style(category);
        self.backend
            .write_styled(out, &format!("[{}", style.glyph), style, false)?;
        self.backend.write_styled(out, &escape(run), style, true)?;
        self.backend.write_styled(out, "]", style, false)
    }

    fn nested(
        &self,
        shape: Shape,
        children: &[Child],
        root: bool,
    ) -> Result<Option<String>, fmt::Error> {
        let mut items = Vec::with_capacity(children.len());
        for child in children {
            if let Some(item) = self.child(child)? {
                items.push(item);
            }
        }
        if items.is_empty() && !root {
            return Ok(None);
        }

        let (open, close) = match shape {
            Shape::Mapping => ("{", "}"),
            Shape::Sequence => ("[", "]"),
        };
        let mut out = String::new();
        self.backend.write_plain(&mut out, open)?;
        if !items.is_empty() {
            out.push('\n');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    self.backend.write_plain(&mut out, ",")?;
                    out.push('\n');
                }
                for (n, line) in item.split('\n').enumerate() {
                    if n > 0 {
                        out.push('\n');
                    }
                    out.push_str(INDENT);
                    out.push_str(line);
                }
            }
            out.push('\n');
        }
        self.backend.write_plain(&mut out, close)?;
        Ok(Some(out))
    }

    fn child(&self, child: &Child) -> Result<Option<String>, fmt::Error> {
        let Some(key) = &child.key else {
            return self.node(&child.node, false);
        };

        let mut out = String::new();
        if !child.paired {
            match child.node.kind() {
                DiffKind::Missing { rendered } => {
                    self.entry(&mut out, Category::Missing, Some(key), rendered)?;
                    return Ok(Some(out));
                }
                DiffKind::Additional { rendered } => {
                    self.entry(&mut out, Category::Additional, Some(key), rendered)?;
                    return Ok(Some(out));
                }
                _ => {}
            }
        }

        let Some(body) = self.node(&child.node, false)? else {
            return Ok(None);
        };
        self.backend.write_plain(&mut out, &format!("{key}: "))?;
        out.push_str(&body);
        Ok(Some(out))
    }

    fn summary(&self, counts: Counts, out: &mut String) -> fmt::Result {
        let shown: Vec<(Category, usize)> = counts
            .nonzero()
            .filter(|&(category, _)| self.options.shows(category))
            .collect();
        if shown.is_empty() {
            return Ok(());
        }

        out.push('\n');
        self.backend.write_plain(out, "Where, ")?;
        for (i, (category, count)) in shown.into_iter().enumerate() {
            if i > 0 {
                self.backend.write_plain(out, ", ")?;
            }
            let style = self.style(category);
            self.glyph(out, style)?;
            self.backend
                .write_styled(out, &format!("{count} {}", category.name()), style, true)?;
        }
        Ok(())
    }
}

/// Escape text the way a quoted value is displayed, without the quotes.
fn escape(text: &str) -> String {
    let quoted = format!("{text:?}");
    quoted[1..quoted.len() - 1].to_owned()
}
