//! Stem - compact string type for tags, attributes, class tokens and text.

use compact_str::CompactString;
use facet::Facet;
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// Compact string used everywhere a view or node stores text.
///
/// Literals stay borrowed for the life of the program; anything computed at
/// runtime is owned (inline up to 24 bytes).
#[derive(Clone, Facet)]
#[facet(cow)]
#[repr(u8)]
pub enum Stem {
    Borrowed(&'static str),
    Owned(CompactString),
}

impl Stem {
    pub const fn new() -> Self {
        Self::Borrowed("")
    }

    /// Wrap a string literal without copying it.
    pub const fn from_static(s: &'static str) -> Self {
        Self::Borrowed(s)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Borrowed(s) => s,
            Self::Owned(s) => s.as_str(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// New stem holding `prefix` followed by `self`.
    pub fn prefixed(&self, prefix: &str) -> Stem {
        Stem::Owned(compact_str::format_compact!("{}{}", prefix, self.as_str()))
    }
}

impl Default for Stem {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Stem {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for Stem {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Stem {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq for Stem {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Stem {}

impl PartialEq<str> for Stem {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Stem {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Hash for Stem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Debug for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl From<&'static str> for Stem {
    fn from(s: &'static str) -> Self {
        Self::Borrowed(s)
    }
}

impl From<String> for Stem {
    fn from(s: String) -> Self {
        Self::Owned(CompactString::from(s))
    }
}

impl From<&String> for Stem {
    fn from(s: &String) -> Self {
        Self::Owned(CompactString::new(s))
    }
}

impl From<CompactString> for Stem {
    fn from(s: CompactString) -> Self {
        Self::Owned(s)
    }
}

impl From<Cow<'static, str>> for Stem {
    fn from(s: Cow<'static, str>) -> Self {
        match s {
            Cow::Borrowed(s) => Self::Borrowed(s),
            Cow::Owned(s) => Self::from(s),
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Stem>();
    assert_sync::<Stem>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_prefixed() {
        let stem = Stem::from("text-2xl");
        assert_eq!(stem.prefixed("md:"), "md:text-2xl");
        assert_eq!(stem, "text-2xl");
    }

    #[test]
    fn test_equality_ignores_storage() {
        let borrowed = Stem::from("nav");
        let owned = Stem::from(String::from("nav"));
        assert_eq!(borrowed, owned);
    }
}
