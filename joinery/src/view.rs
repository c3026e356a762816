//! Views: values that contribute to a node.
//!
//! Everything a caller passes as a "child" of an element is a [`View`]. The
//! set of capabilities is closed:
//!
//! - [`View::Attr`] sets one attribute on the host element and adds no child
//! - [`View::Class`] contributes class tokens to the host's pending class list
//! - [`View::Child`] is a plain view that becomes a child node
//! - [`View::Bundle`] groups views that behave as if they were written inline
//!
//! Plain views implement [`Render`]. The only way to turn a plain view into a
//! [`Node`] is [`build`].

use crate::{Attribute, ClassNames, Node, Stem};
use std::fmt;

/// A plain view: something that produces exactly one node.
pub trait Render: RenderClone + fmt::Debug {
    /// Produce this view's node, including all of its descendants.
    fn render(&self) -> Node;
}

/// Object-safe cloning for boxed [`Render`] values.
///
/// Implemented for every `Render + Clone` type; there is no need to implement
/// it by hand.
pub trait RenderClone {
    fn clone_render(&self) -> Box<dyn Render>;
}

impl<T: Render + Clone + 'static> RenderClone for T {
    fn clone_render(&self) -> Box<dyn Render> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Render> {
    fn clone(&self) -> Self {
        self.clone_render()
    }
}

/// Materialize a plain view into its node tree.
pub fn build<V: Render + ?Sized>(view: &V) -> Node {
    view.render()
}

/// A child of an element-like view.
#[derive(Clone, Debug)]
pub enum View {
    /// Sets `key="value"` on the host at this position.
    Attr(Attribute),
    /// Adds tokens to the host's `class` attribute.
    Class(ClassNames),
    /// Becomes a child node.
    Child(Box<dyn Render>),
    /// Applies each member in order, inline.
    Bundle(Vec<View>),
}

impl View {
    /// A view that contributes nothing.
    pub fn none() -> Self {
        View::Bundle(Vec::new())
    }

    /// Wrap any plain view.
    pub fn child<V: Render + Clone + 'static>(view: V) -> Self {
        View::Child(Box::new(view))
    }

    /// True for views that never add a child node.
    pub fn is_enhancer(&self) -> bool {
        match self {
            View::Attr(_) | View::Class(_) => true,
            View::Child(_) => false,
            View::Bundle(views) => views.iter().all(View::is_enhancer),
        }
    }
}

impl From<Attribute> for View {
    fn from(attr: Attribute) -> Self {
        View::Attr(attr)
    }
}

impl From<ClassNames> for View {
    fn from(class_names: ClassNames) -> Self {
        View::Class(class_names)
    }
}

impl From<Box<dyn Render>> for View {
    fn from(view: Box<dyn Render>) -> Self {
        View::Child(view)
    }
}

impl From<Vec<View>> for View {
    fn from(views: Vec<View>) -> Self {
        View::Bundle(views)
    }
}

impl From<Enhancer> for View {
    fn from(enhancer: Enhancer) -> Self {
        match enhancer {
            Enhancer::Attr(attr) => View::Attr(attr),
            Enhancer::Class(class_names) => View::Class(class_names),
            Enhancer::Bundle(enhancers) => {
                View::Bundle(enhancers.into_iter().map(View::from).collect())
            }
        }
    }
}

/// An absent child contributes nothing.
impl<T: Into<View>> From<Option<T>> for View {
    fn from(view: Option<T>) -> Self {
        view.map_or_else(View::none, Into::into)
    }
}

/// Implements `From<$ty> for View` for plain views.
macro_rules! impl_into_view {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for $crate::View {
                fn from(view: $ty) -> Self {
                    $crate::View::Child(Box::new(view))
                }
            }
        )*
    };
}

pub(crate) use impl_into_view;

/// Build a `Vec<View>` from anything convertible into a view.
///
/// ```
/// use joinery::{div, text, views, Text};
///
/// let html = joinery::render_to_string(&div(views![text("a"), None::<Text>, text("b")]));
/// assert_eq!(html, "<div>ab</div>");
/// ```
#[macro_export]
macro_rules! views {
    ($($view:expr),* $(,)?) => {
        ::std::vec![$($crate::View::from($view)),*]
    };
}

/// Group views so they can be reused as one unit.
pub fn bundle(views: impl IntoIterator<Item = View>) -> View {
    View::Bundle(views.into_iter().collect())
}

/// A view variant that only touches the host's attributes or classes.
///
/// Enhancers are what `using(...)` accepts; they convert into [`View`] for
/// use anywhere a child is expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Enhancer {
    Attr(Attribute),
    Class(ClassNames),
    Bundle(Vec<Enhancer>),
}

impl Enhancer {
    /// Keep `enhancer` when `condition` holds, otherwise contribute nothing.
    pub fn when(condition: bool, enhancer: Enhancer) -> Enhancer {
        if condition {
            enhancer
        } else {
            Enhancer::Bundle(Vec::new())
        }
    }
}

impl From<Attribute> for Enhancer {
    fn from(attr: Attribute) -> Self {
        Enhancer::Attr(attr)
    }
}

impl From<ClassNames> for Enhancer {
    fn from(class_names: ClassNames) -> Self {
        Enhancer::Class(class_names)
    }
}

/// Any attribute.
pub fn attr(key: impl Into<Stem>, value: impl Into<Stem>) -> Enhancer {
    Enhancer::Attr(Attribute::new(key, value))
}

/// An attribute such as `href` or `src`.
pub fn custom_attr(key: impl Into<Stem>, value: impl Into<Stem>) -> Enhancer {
    attr(key, value)
}

/// `aria-{key}`, e.g. `aria_attr("current", "page")`.
pub fn aria_attr(key: impl Into<Stem>, value: impl Into<Stem>) -> Enhancer {
    let key: Stem = key.into();
    attr(key.prefixed("aria-"), value)
}

pub fn aria_label(value: impl Into<Stem>) -> Enhancer {
    attr("aria-label", value)
}

/// `aria-current="page"`, for the link to the page being shown.
pub fn aria_current_page() -> Enhancer {
    attr("aria-current", "page")
}

/// `data-{key}`, e.g. `data_attr("testid", "nav")`.
pub fn data_attr(key: impl Into<Stem>, value: impl Into<Stem>) -> Enhancer {
    let key: Stem = key.into();
    attr(key.prefixed("data-"), value)
}

/// Class tokens merged into the host's `class` attribute.
pub fn class<I>(tokens: I) -> Enhancer
where
    I: IntoIterator,
    I::Item: Into<Stem>,
{
    Enhancer::Class(tokens.into_iter().collect())
}

/// Alias of [`class`].
pub fn class_name<I>(tokens: I) -> Enhancer
where
    I: IntoIterator,
    I::Item: Into<Stem>,
{
    class(tokens)
}

/// Group enhancers into a reusable unit.
pub fn enhancers(items: impl IntoIterator<Item = Enhancer>) -> Enhancer {
    Enhancer::Bundle(items.into_iter().collect())
}

/// A text leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    text: Stem,
}

/// Make a text node with the given content.
pub fn text(text: impl Into<Stem>) -> Text {
    Text { text: text.into() }
}

impl Text {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Render for Text {
    fn render(&self) -> Node {
        Node::Text(self.text.clone())
    }
}

impl_into_view!(Text);
