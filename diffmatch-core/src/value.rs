//! Dynamic values: the "actual" side of every comparison.
//!
//! A [`Value`] is a small JSON-like tree with two extras: [`Value::Tagged`]
//! attaches a caller-defined runtime type tag to a value, and
//! [`Value::Shared`] is a reference-counted handle that lets callers build
//! graphs in which one node is reachable from several places (and, by
//! accident, from itself).

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::Tag;

/// A key in a [`Value::Map`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// A boolean key
    Bool(bool),
    /// An integer key
    Int(i64),
    /// A text key
    Text(String),
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bool(b) => write!(f, "{b}"),
            Key::Int(i) => write!(f, "{i}"),
            Key::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value.into())
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

/// A dynamically typed value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence of a value
    #[default]
    Null,
    /// A boolean
    Bool(bool),
    /// A signed integer
    Int(i64),
    /// A floating-point number
    Float(f64),
    /// A piece of text
    Text(String),
    /// An ordered sequence of values
    Seq(Vec<Value>),
    /// A mapping with unique keys, kept in insertion order
    Map(IndexMap<Key, Value>),
    /// A value carrying an explicit runtime type tag
    Tagged(Tag, Box<Value>),
    /// A shared handle to another value
    Shared(SharedValue),
}

impl Value {
    /// Build a sequence from anything convertible into values.
    pub fn seq<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Build a mapping from key/value pairs. Later duplicates replace earlier ones.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Attach a runtime type tag to a value.
    pub fn tagged(tag: Tag, value: impl Into<Value>) -> Self {
        Value::Tagged(tag, Box::new(value.into()))
    }

    /// Wrap a value in a fresh shared handle.
    pub fn shared(value: impl Into<Value>) -> Self {
        Value::Shared(SharedValue::new(value.into()))
    }

    /// The runtime type tag of this value.
    ///
    /// Shared handles report the tag of the value they point to. A chain of
    /// handles that only points back at itself holds no data and reports
    /// [`Tag::NULL`].
    pub fn tag(&self) -> Tag {
        match self {
            Value::Null => Tag::NULL,
            Value::Bool(_) => Tag::BOOL,
            Value::Int(_) => Tag::INTEGER,
            Value::Float(_) => Tag::FLOAT,
            Value::Text(_) => Tag::TEXT,
            Value::Seq(_) => Tag::SEQUENCE,
            Value::Map(_) => Tag::MAPPING,
            Value::Tagged(tag, _) => tag.clone(),
            Value::Shared(shared) => shared.target_tag(),
        }
    }

    /// Returns the text if this is a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`Value::Seq`].
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries if this is a [`Value::Map`].
    pub const fn as_map(&self) -> Option<&IndexMap<Key, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns true for [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Equality of two scalars.
    ///
    /// Integers and floats are equal when numerically equal. Collections,
    /// tagged values and shared handles are never scalar-equal; the differ
    /// descends into those instead.
    pub fn scalar_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                int_float_cmp(*i, *f) == Some(Ordering::Equal)
            }
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }

    /// Ordering between two scalars of comparable kinds (numbers, text, booleans).
    pub fn scalar_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(i), Value::Float(f)) => int_float_cmp(*i, *f),
            (Value::Float(f), Value::Int(i)) => int_float_cmp(*i, *f).map(Ordering::reverse),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    fn fmt_guarded(&self, f: &mut fmt::Formatter<'_>, stack: &mut Vec<usize>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_guarded(f, stack)?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: ")?;
                    value.fmt_guarded(f, stack)?;
                }
                f.write_str("}")
            }
            Value::Tagged(tag, inner) => {
                write!(f, "{tag}(")?;
                inner.fmt_guarded(f, stack)?;
                f.write_str(")")
            }
            Value::Shared(shared) => {
                let id = shared.id();
                if stack.contains(&id) {
                    return f.write_str("<cycle>");
                }
                stack.push(id);
                let result = shared.read().fmt_guarded(f, stack);
                stack.pop();
                result
            }
        }
    }
}

fn int_float_cmp(i: i64, f: f64) -> Option<Ordering> {
    // i64 -> f64 loses precision past 2^53; compare exactly when the float is integral.
    if f.is_nan() {
        return None;
    }
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        return Some(i.cmp(&(f as i64)));
    }
    (i as f64).partial_cmp(&f)
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_guarded(f, &mut Vec::new())
    }
}

/// A reference-counted, lockable handle to a [`Value`].
///
/// Cloning the handle shares the target. Comparisons look through handles
/// transparently and fail with a cyclic-structure error when a handle is
/// re-entered along the current path.
#[derive(Clone, Default)]
pub struct SharedValue(Arc<RwLock<Value>>);

impl SharedValue {
    /// Create a handle to a new shared value.
    pub fn new(value: Value) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    /// Identity of the shared target, stable for its lifetime.
    pub fn id(&self) -> usize {
        Arc::as_ptr(&self.0).cast::<()>() as usize
    }

    /// Returns true if both handles point at the same target.
    pub fn ptr_eq(&self, other: &SharedValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Read the target. A poisoned lock still yields the last written value.
    pub fn read(&self) -> RwLockReadGuard<'_, Value> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write the target. A poisoned lock still yields the last written value.
    pub fn write(&self) -> RwLockWriteGuard<'_, Value> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn target_tag(&self) -> Tag {
        let mut seen = vec![self.id()];
        let mut current = self.clone();
        loop {
            let next = match &*current.read() {
                Value::Shared(inner) => inner.clone(),
                other => return other.tag(),
            };
            if seen.contains(&next.id()) {
                return Tag::NULL;
            }
            seen.push(next.id());
            current = next;
        }
    }
}

impl fmt::Debug for SharedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedValue({:#x})", self.id())
    }
}

impl From<SharedValue> for Value {
    fn from(value: SharedValue) -> Self {
        Value::Shared(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(value.into())
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        match value {
            Key::Bool(b) => Value::Bool(b),
            Key::Int(i) => Value::Int(i),
            Key::Text(s) => Value::Text(s),
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::seq(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}
