//! Ordered argument sets and the name → position index derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that can be interpolated into a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Int(i64),
    Float(f64),
    Str(String),
}

impl ArgValue {
    /// Numeric view of the value. Strings holding a number, surrounding
    /// whitespace aside, are parsed; any other string has none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Str(s) => s.trim().parse().ok(),
        }
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ArgValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Named arguments in insertion order.
///
/// The position of a name in this set is the positional index its
/// placeholders are rewritten to, and the order in which values are
/// handed to a positional engine. Serializes as a map in that order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgumentSet {
    entries: indexmap::IndexMap<String, ArgValue>,
}

impl ArgumentSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert an argument. Re-inserting a name replaces its value and
    /// keeps its original position; the previous value is returned.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ArgValue>,
    ) -> Option<ArgValue> {
        self.entries.insert(name.into(), value.into())
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.entries.get(name)
    }

    /// Zero-based position of a name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Values in insertion order, i.e. the positional value sequence.
    pub fn values(&self) -> impl Iterator<Item = &ArgValue> {
        self.entries.values()
    }

    /// (name, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Two sets are equal when they hold the same pairs in the same order.
impl PartialEq for ArgumentSet {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl<K, V> FromIterator<(K, V)> for ArgumentSet
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K, V> Extend<(K, V)> for ArgumentSet
where
    K: Into<String>,
    V: Into<ArgValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

/// Build an [`ArgumentSet`] from `name = value` pairs, in order.
#[macro_export]
macro_rules! args {
    () => {
        $crate::ArgumentSet::new()
    };
    ($($key:ident = $value:expr),+ $(,)?) => {{
        let mut set = $crate::ArgumentSet::new();
        $(
            set.insert(stringify!($key), $value);
        )+
        set
    }};
}

/// Name → positional index, derived from an [`ArgumentSet`].
#[derive(Debug, Clone, Copy)]
pub struct PositionIndex<'a> {
    args: &'a ArgumentSet,
}

impl<'a> PositionIndex<'a> {
    /// Map every name to its position in the set's iteration order.
    pub fn from_arguments(args: &'a ArgumentSet) -> Self {
        Self { args }
    }

    /// Position of `name`, if it is an argument.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.args.position(name)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_follows_insertion_order() {
        let args = ArgumentSet::new()
            .with("zeta", 1)
            .with("alpha", "a")
            .with("mid", 2.5);
        let index = PositionIndex::from_arguments(&args);

        assert_eq!(index.get("zeta"), Some(0));
        assert_eq!(index.get("alpha"), Some(1));
        assert_eq!(index.get("mid"), Some(2));
        assert_eq!(index.get("missing"), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut args = ArgumentSet::new().with("a", 1).with("b", 2);
        let previous = args.insert("a", "replaced");

        assert_eq!(previous, Some(ArgValue::Int(1)));
        assert_eq!(args.len(), 2);
        assert_eq!(args.position("a"), Some(0));
        assert_eq!(
            args.values().cloned().collect::<Vec<_>>(),
            vec![ArgValue::from("replaced"), ArgValue::Int(2)]
        );
    }

    #[test]
    fn test_args_macro_preserves_order() {
        let args = args!(name = "World", count = 3, ratio = 0.5);
        let pairs: Vec<_> = args.iter().map(|(n, v)| (n.to_string(), v.clone())).collect();

        assert_eq!(
            pairs,
            vec![
                ("name".to_string(), ArgValue::Str("World".to_string())),
                ("count".to_string(), ArgValue::Int(3)),
                ("ratio".to_string(), ArgValue::Float(0.5)),
            ]
        );
        assert!(args!().is_empty());
    }

    #[test]
    fn test_from_iterator_and_empty_index() {
        let args: ArgumentSet = vec![("x", 1), ("y", 2)].into_iter().collect();
        assert_eq!(args.names().collect::<Vec<_>>(), vec!["x", "y"]);

        let empty = ArgumentSet::new();
        assert!(PositionIndex::from_arguments(&empty).is_empty());
    }

    #[test]
    fn test_large_set_keeps_order_and_lookups() {
        let mut args: ArgumentSet = (0..10_000).map(|i| (format!("arg{i}"), i)).collect();
        assert_eq!(args.len(), 10_000);

        let index = PositionIndex::from_arguments(&args);
        for i in (0..10_000).step_by(97) {
            assert_eq!(index.get(&format!("arg{i}")), Some(i as usize));
        }
        assert_eq!(index.get("arg10000"), None);

        assert_eq!(args.insert("arg5000", "again"), Some(ArgValue::Int(5000)));
        assert_eq!(args.position("arg5000"), Some(5000));
        assert_eq!(args.values().nth(5000), Some(&ArgValue::from("again")));
        assert_eq!(args.names().last(), Some("arg9999"));
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let forward = args!(a = 1, b = 2);
        let backward = args!(b = 2, a = 1);
        assert_eq!(forward, args!(a = 1, b = 2));
        assert_ne!(forward, backward);
    }

    #[test]
    fn test_value_views() {
        assert_eq!(ArgValue::from(3u8).as_f64(), Some(3.0));
        assert_eq!(ArgValue::from(" 2.5 ").as_f64(), Some(2.5));
        assert_eq!(ArgValue::from("many").as_f64(), None);
        assert_eq!(ArgValue::from(-7).to_string(), "-7");
        assert_eq!(ArgValue::from(1.5f32).to_string(), "1.5");
        assert_eq!(ArgValue::from("text").type_name(), "string");
    }

    #[test]
    fn test_set_deserializes_in_document_order() {
        let args: ArgumentSet =
            serde_yaml::from_str("zeta: 1\nalpha: two\nmid: 2.5\n").unwrap();
        assert_eq!(args.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(args.get("alpha"), Some(&ArgValue::from("two")));

        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(json, r#"{"zeta":1,"alpha":"two","mid":2.5}"#);
    }

    #[test]
    fn test_value_deserializes_untagged() {
        let values: Vec<ArgValue> = serde_json::from_str(r#"[1, 2.5, "three"]"#).unwrap();
        assert_eq!(
            values,
            vec![ArgValue::Int(1), ArgValue::Float(2.5), ArgValue::Str("three".to_string())]
        );
    }
}
