use std::fmt;

use crate::error::{HeaderError, HeaderResult};

pub trait KeywordProvider {
    fn get_string(&self, key: &str) -> Option<String>;
    fn get_float(&self, key: &str) -> Option<f64>;
    fn get_int(&self, key: &str) -> Option<i64>;
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum HeaderValue {
    Integer(i64),
    Real(f64),
    String(String),
}

impl HeaderValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Integers widen to `f64`; strings never convert.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            Self::String(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// NaN and infinite reals have no FITS representation and are written
    /// with an empty value field.
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Real(v) if !v.is_finite())
    }
}

impl From<i64> for HeaderValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for HeaderValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<String> for HeaderValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for HeaderValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Real(_) if self.is_undefined() => Ok(()),
            // Debug keeps a trailing ".0" on whole numbers, which FITS needs
            // to tell a real from an integer.
            Self::Real(v) => write!(f, "{}", format!("{:?}", v).to_uppercase()),
            Self::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

/// Keyword map that remembers insertion order.
///
/// Header consumers compare keyword order byte-for-byte, so this is a plain
/// list rather than a hash map. Headers are a few dozen cards at most, which
/// keeps the linear lookups cheap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderMap {
    cards: Vec<(String, HeaderValue)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing an existing value in place so the key keeps its
    /// original position. Returns the replaced value, if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<HeaderValue>,
    ) -> Option<HeaderValue> {
        let key = key.into();
        let value = value.into();
        match self.cards.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.cards.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&HeaderValue> {
        self.cards.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.cards.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|(k, _)| k.as_str())
    }

    pub fn require(&self, key: &str) -> HeaderResult<&HeaderValue> {
        self.get(key)
            .ok_or_else(|| HeaderError::missing_keyword(key))
    }

    /// Copies the named keywords, in the order given, into a new map.
    pub fn select<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> HeaderResult<HeaderMap> {
        let mut selected = HeaderMap::new();
        for key in keys {
            selected.insert(key, self.require(key)?.clone());
        }
        Ok(selected)
    }

    /// Keywords whose value renders as undefined.
    pub fn undefined_keywords(&self) -> impl Iterator<Item = &str> {
        self.iter()
            .filter(|(_, v)| v.is_undefined())
            .map(|(k, _)| k)
    }
}

impl KeywordProvider for HeaderMap {
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(HeaderValue::as_str).map(str::to_string)
    }

    fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(HeaderValue::as_float)
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(HeaderValue::as_int)
    }
}

impl fmt::Display for HeaderMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            if value.is_undefined() {
                writeln!(f, "{:<8}=", key)?;
            } else {
                writeln!(f, "{:<8}= {}", key, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HeaderMap {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = s.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
