//! Ordered class-name lists.
//!
//! A [`ClassNames`] is the pending value of an element's `class` attribute.
//! Tokens keep their insertion order and duplicates are kept as-is; the list
//! serializes by joining tokens with a single space.

use crate::Stem;
use smallvec::SmallVec;
use std::fmt;

/// Ordered sequence of class tokens.
///
/// Most elements carry a handful of classes, so the first four tokens live
/// inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, facet::Facet)]
#[facet(transparent)]
pub struct ClassNames(SmallVec<[Stem; 4]>);

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new list with `additions` appended.
    pub fn class<I>(mut self, additions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Stem>,
    {
        self.0.extend(additions.into_iter().map(Into::into));
        self
    }

    /// Return a new list with every token of `additions` appended.
    pub fn concat(mut self, additions: &ClassNames) -> Self {
        self.0.extend(additions.0.iter().cloned());
        self
    }

    /// Append in place. Used by accumulators that are never observed by callers.
    pub(crate) fn extend_from(&mut self, additions: &ClassNames) {
        self.0.extend(additions.0.iter().cloned());
    }

    pub(crate) fn push(&mut self, token: Stem) {
        self.0.push(token);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(Stem::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The space-joined attribute value.
    pub fn to_stem(&self) -> Stem {
        match self.0.as_slice() {
            [] => Stem::new(),
            [only] => only.clone(),
            _ => Stem::from(self.to_string()),
        }
    }
}

impl fmt::Display for ClassNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl<S: Into<Stem>> FromIterator<S> for ClassNames {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<Stem>, const N: usize> From<[S; N]> for ClassNames {
    fn from(tokens: [S; N]) -> Self {
        tokens.into_iter().collect()
    }
}
