//! Construction macros for values and expectations.

/// Build a [`Value::Seq`](crate::Value::Seq) from anything convertible into values.
///
/// ```
/// use diffmatch_core::{Value, seq};
///
/// let v = seq![1, "two", 3.0];
/// assert_eq!(v.to_string(), r#"[1, "two", 3.0]"#);
/// ```
#[macro_export]
macro_rules! seq {
    ($($item:expr),* $(,)?) => {
        $crate::Value::Seq(::std::vec![$($crate::Value::from($item)),*])
    };
}

/// Build a [`Value::Map`](crate::Value::Map) from `key => value` pairs.
///
/// ```
/// use diffmatch_core::{Value, map, seq};
///
/// let v = map! { "a" => 1, "b" => seq![true] };
/// assert_eq!(v.to_string(), r#"{"a": 1, "b": [true]}"#);
/// ```
#[macro_export]
macro_rules! map {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::Value::map::<_, $crate::Key, $crate::Value>([
            $(($crate::Key::from($key), $crate::Value::from($value))),*
        ])
    };
}

/// Build an [`Expectation::Seq`](crate::Expectation::Seq) from anything convertible into expectations.
#[macro_export]
macro_rules! expect_seq {
    ($($item:expr),* $(,)?) => {
        $crate::Expectation::Seq(::std::vec![$($crate::Expectation::from($item)),*])
    };
}

/// Build an [`Expectation::Map`](crate::Expectation::Map) from `key => expectation` pairs.
#[macro_export]
macro_rules! expect_map {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::Expectation::map::<_, $crate::Key, $crate::Expectation>([
            $(($crate::Key::from($key), $crate::Expectation::from($value))),*
        ])
    };
}
