//! Style tables: per-category color and prefix glyph.

use std::borrow::Cow;
use std::sync::OnceLock;

use owo_colors::AnsiColors;

use crate::{Category, DiffError};

/// How one category is presented: a color and a prefix glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    /// Color for the glyph and value, `None` for the terminal default
    pub color: Option<AnsiColors>,
    /// Prefix glyph shown before entries of this category
    pub glyph: Cow<'static, str>,
}

impl Style {
    /// A style with a color and a static glyph.
    pub const fn new(color: Option<AnsiColors>, glyph: &'static str) -> Self {
        Self {
            color,
            glyph: Cow::Borrowed(glyph),
        }
    }
}

/// A complete mapping from [`Category`] to [`Style`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    styles: [Style; Category::ALL.len()],
}

static GLOBAL_DEFAULT: OnceLock<StyleTable> = OnceLock::new();

impl Default for StyleTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl StyleTable {
    /// The `default` scheme, for dark terminals.
    pub const DEFAULT: Self = Self {
        styles: [
            Style::new(Some(AnsiColors::Red), "-"),
            Style::new(Some(AnsiColors::Yellow), "+"),
            Style::new(None, " "),
            Style::new(Some(AnsiColors::Green), "~"),
            Style::new(Some(AnsiColors::Blue), ":"),
            Style::new(Some(AnsiColors::Cyan), "{"),
            Style::new(Some(AnsiColors::Yellow), "."),
            Style::new(Some(AnsiColors::Blue), "|"),
        ],
    };

    /// The `white_background` scheme: yellow is hard to read on white, so
    /// additions are magenta.
    pub const WHITE_BACKGROUND: Self = Self {
        styles: [
            Style::new(Some(AnsiColors::Red), "-"),
            Style::new(Some(AnsiColors::Magenta), "+"),
            Style::new(None, " "),
            Style::new(Some(AnsiColors::Green), "~"),
            Style::new(Some(AnsiColors::Blue), ":"),
            Style::new(Some(AnsiColors::Cyan), "{"),
            Style::new(Some(AnsiColors::Magenta), "."),
            Style::new(Some(AnsiColors::Blue), "|"),
        ],
    };

    /// Names of the built-in schemes.
    pub const NAMES: [&'static str; 2] = ["default", "white_background"];

    /// Look up a built-in scheme by name.
    pub fn named(name: &str) -> Result<Self, DiffError> {
        match name {
            "default" => Ok(Self::DEFAULT),
            "white_background" => Ok(Self::WHITE_BACKGROUND),
            _ => Err(DiffError::UnknownColorScheme {
                name: name.to_owned(),
            }),
        }
    }

    /// The style for one category.
    pub fn style(&self, category: Category) -> &Style {
        &self.styles[category.index()]
    }

    /// Replace the style for one category.
    pub fn with_style(mut self, category: Category, style: Style) -> Self {
        self.styles[category.index()] = style;
        self
    }

    /// Install the process-wide default table.
    ///
    /// The default can be set once, before anything reads it. The first read
    /// freezes whatever is installed (the built-in table if nothing was), so
    /// later calls return the rejected table.
    pub fn set_global_default(table: StyleTable) -> Result<(), StyleTable> {
        GLOBAL_DEFAULT.set(table)
    }

    /// The process-wide default table, or [`StyleTable::DEFAULT`] if none was installed.
    pub fn global_default() -> &'static StyleTable {
        GLOBAL_DEFAULT.get_or_init(|| StyleTable::DEFAULT)
    }
}
