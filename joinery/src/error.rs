//! Construction errors.

use facet::Facet;

/// A view was asked to build something outside its structural domain.
///
/// These are programming errors. Checked constructors (such as
/// [`try_h`](crate::try_h)) return them; the unchecked forms panic with the
/// same message.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum ViewError {
    /// heading level {level} is outside 1..=6
    InvalidHeadingLevel { level: u8 },
}
