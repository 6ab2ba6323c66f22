//! Runtime type tags and the subtype registry used by type expectations.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::{self, Display};

/// The name of a runtime type.
///
/// Built-in values carry one of the associated constants; caller-defined
/// types attach their own tag with [`Value::tagged`](crate::Value::tagged).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    /// Tag of [`Value::Null`](crate::Value::Null)
    pub const NULL: Tag = Tag::from_static("null");
    /// Tag of [`Value::Bool`](crate::Value::Bool)
    pub const BOOL: Tag = Tag::from_static("bool");
    /// Supertype of integers and floats
    pub const NUMBER: Tag = Tag::from_static("number");
    /// Tag of [`Value::Int`](crate::Value::Int)
    pub const INTEGER: Tag = Tag::from_static("integer");
    /// Tag of [`Value::Float`](crate::Value::Float)
    pub const FLOAT: Tag = Tag::from_static("float");
    /// Tag of [`Value::Text`](crate::Value::Text)
    pub const TEXT: Tag = Tag::from_static("text");
    /// Tag of [`Value::Seq`](crate::Value::Seq)
    pub const SEQUENCE: Tag = Tag::from_static("sequence");
    /// Tag of [`Value::Map`](crate::Value::Map)
    pub const MAPPING: Tag = Tag::from_static("mapping");

    /// A tag with a static name.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// A tag with any name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The tag's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Tag {
    fn from(value: &'static str) -> Self {
        Tag::from_static(value)
    }
}

/// Records which tags are subtypes of which.
///
/// Each tag has at most one parent. The default registry knows that
/// integers and floats are numbers.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    parents: HashMap<Tag, Tag>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::empty()
            .with_subtype(Tag::INTEGER, Tag::NUMBER)
            .with_subtype(Tag::FLOAT, Tag::NUMBER)
    }
}

impl TypeRegistry {
    /// A registry without any subtype relations, not even the numeric ones.
    pub fn empty() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Declare `child` a subtype of `parent`.
    pub fn with_subtype(mut self, child: Tag, parent: Tag) -> Self {
        self.register(child, parent);
        self
    }

    /// Declare `child` a subtype of `parent`, replacing any previous parent.
    pub fn register(&mut self, child: Tag, parent: Tag) {
        self.parents.insert(child, parent);
    }

    /// The declared parent of a tag, if any.
    pub fn parent_of(&self, tag: &Tag) -> Option<&Tag> {
        self.parents.get(tag)
    }

    /// Returns true if `tag` is `expected` or one of its registered subtypes.
    pub fn is_a(&self, tag: &Tag, expected: &Tag) -> bool {
        let mut current = tag;
        // A registry with a parent loop still terminates: no chain is longer
        // than the number of edges.
        for _ in 0..=self.parents.len() {
            if current == expected {
                return true;
            }
            match self.parents.get(current) {
                Some(parent) => current = parent,
                None => return false,
            }
        }
        false
    }
}
