//! Element views and the tag factories built on them.
//!
//! Factories take their children as a `Vec<View>`; the [`views!`](crate::views)
//! macro converts mixed child types in place:
//!
//! ```
//! use joinery::{aria_label, link, list, nav, text, views};
//!
//! let menu = nav(views![
//!     aria_label("Primary"),
//!     list(views![link("/", views![text("Home")]), link("/about", views![text("About")])]),
//! ]);
//! assert_eq!(
//!     joinery::render_to_string(&menu),
//!     r#"<nav aria-label="Primary"><ul><li><a href="/">Home</a></li><li><a href="/about">About</a></li></ul></nav>"#,
//! );
//! ```

use crate::view::impl_into_view;
use crate::{
    Attribute, ClassNames, Element, ElementCore, Enhancer, Node, Render, Stem, View, ViewError,
};

/// A generic element: a tag, attributes resolved at construction, and an
/// [`ElementCore`].
#[derive(Clone, Debug)]
pub struct ElementView {
    tag: Stem,
    attrs: Vec<Attribute>,
    core: ElementCore,
}

impl ElementView {
    pub fn new(tag: impl Into<Stem>, children: Vec<View>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            core: ElementCore::new(children),
        }
    }

    /// Wrap an existing core, e.g. one with a child transform.
    pub fn with_core(tag: impl Into<Stem>, core: ElementCore) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            core,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute ahead of anything the children contribute.
    pub fn attr(mut self, key: impl Into<Stem>, value: impl Into<Stem>) -> Self {
        self.attrs.push(Attribute::new(key, value));
        self
    }

    pub fn using(mut self, enhancers: impl IntoIterator<Item = Enhancer>) -> Self {
        self.core = self.core.using(enhancers);
        self
    }

    pub fn child(mut self, view: impl Into<View>) -> Self {
        self.core = self.core.child(view);
        self
    }

    pub fn children(mut self, views: impl IntoIterator<Item = View>) -> Self {
        self.core = self.core.children(views);
        self
    }

    pub fn class<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Stem>,
    {
        self.core = self.core.class(tokens);
        self
    }

    pub fn add_classes(mut self, additions: &ClassNames) -> Self {
        self.core = self.core.add_classes(additions);
        self
    }

    pub fn change_classes(mut self, changer: impl FnOnce(ClassNames) -> ClassNames) -> Self {
        self.core = self.core.change_classes(changer);
        self
    }
}

impl Render for ElementView {
    fn render(&self) -> Node {
        let mut element = Element::new(self.tag.clone());
        element.attrs.extend(self.attrs.iter().cloned());
        self.core.apply_to(&mut element);
        Node::Element(element)
    }
}

pub fn main(children: Vec<View>) -> ElementView {
    ElementView::new("main", children)
}

pub fn header(children: Vec<View>) -> ElementView {
    ElementView::new("header", children)
}

pub fn footer(children: Vec<View>) -> ElementView {
    ElementView::new("footer", children)
}

pub fn section(children: Vec<View>) -> ElementView {
    ElementView::new("section", children)
}

pub fn article(children: Vec<View>) -> ElementView {
    ElementView::new("article", children)
}

pub fn aside(children: Vec<View>) -> ElementView {
    ElementView::new("aside", children)
}

pub fn div(children: Vec<View>) -> ElementView {
    ElementView::new("div", children)
}

/// `<div>` starting with the given classes.
pub fn div_with_classes(class_names: ClassNames, children: Vec<View>) -> ElementView {
    ElementView::with_core("div", ElementCore::new(children).add_classes(&class_names))
}

pub fn span(children: Vec<View>) -> ElementView {
    ElementView::new("span", children)
}

pub fn nav(children: Vec<View>) -> ElementView {
    ElementView::new("nav", children)
}

pub fn p(children: Vec<View>) -> ElementView {
    ElementView::new("p", children)
}

pub fn ul(children: Vec<View>) -> ElementView {
    ElementView::new("ul", children)
}

pub fn ol(children: Vec<View>) -> ElementView {
    ElementView::new("ol", children)
}

pub fn li(children: Vec<View>) -> ElementView {
    ElementView::new("li", children)
}

fn wrap_in_li(node: Node) -> Node {
    Element::new("li").with_child(node).into()
}

/// `<ul>` that wraps every plain child in its own `<li>`.
///
/// The placeholder of a false [`when`](crate::when) is a child too, so it
/// gets an `<li>` of its own. Use [`View::none`] to leave a slot out.
pub fn list(children: Vec<View>) -> ElementView {
    ElementView::with_core("ul", ElementCore::new(children).with_transform(wrap_in_li))
}

/// `<ol>` that wraps every plain child in its own `<li>`.
pub fn ordered_list(children: Vec<View>) -> ElementView {
    ElementView::with_core("ol", ElementCore::new(children).with_transform(wrap_in_li))
}

/// `<a href="{url}">`.
pub fn link(url: impl Into<Stem>, children: Vec<View>) -> ElementView {
    ElementView::new("a", children).attr("href", url)
}

/// `<img src alt>`, followed by whatever the enhancers add.
pub fn img(
    src: impl Into<Stem>,
    alt: impl Into<Stem>,
    enhancers: impl IntoIterator<Item = Enhancer>,
) -> ElementView {
    ElementView::new("img", Vec::new())
        .attr("src", src)
        .attr("alt", alt)
        .using(enhancers)
}

/// `<span>` holding `content` as its only child, decorated by `enhancers`.
pub fn text_with(
    content: impl Into<Stem>,
    enhancers: impl IntoIterator<Item = Enhancer>,
) -> ElementView {
    span(vec![crate::text(content).into()]).using(enhancers)
}

/// Heading rank, `<h1>` through `<h6>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = ViewError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            4 => Ok(HeadingLevel::H4),
            5 => Ok(HeadingLevel::H5),
            6 => Ok(HeadingLevel::H6),
            _ => Err(ViewError::InvalidHeadingLevel { level }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Heading {
    level: HeadingLevel,
    core: ElementCore,
}

/// `<h1>`..`<h6>` from a numeric level.
///
/// # Panics
///
/// Panics if `level` is not in `1..=6`. Use [`try_h`] when the level comes
/// from data rather than code.
pub fn h(level: u8, children: Vec<View>) -> Heading {
    match try_h(level, children) {
        Ok(heading) => heading,
        Err(err) => panic!("{err}"),
    }
}

pub fn try_h(level: u8, children: Vec<View>) -> Result<Heading, ViewError> {
    let level = HeadingLevel::try_from(level)?;
    Ok(heading(level, children))
}

pub fn heading(level: HeadingLevel, children: Vec<View>) -> Heading {
    Heading {
        level,
        core: ElementCore::new(children),
    }
}

impl Heading {
    pub fn level(&self) -> HeadingLevel {
        self.level
    }

    pub fn class<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Stem>,
    {
        self.core = self.core.class(tokens);
        self
    }

    pub fn using(mut self, enhancers: impl IntoIterator<Item = Enhancer>) -> Self {
        self.core = self.core.using(enhancers);
        self
    }
}

impl Render for Heading {
    fn render(&self) -> Node {
        let mut element = Element::new(self.level.tag());
        self.core.apply_to(&mut element);
        Node::Element(element)
    }
}

/// `<button type="...">`; the type is `button` unless changed.
#[derive(Clone, Debug)]
pub struct Button {
    button_type: Option<Stem>,
    core: ElementCore,
}

pub type ButtonOption = fn(Button) -> Button;

pub fn button(children: Vec<View>) -> Button {
    Button {
        button_type: None,
        core: ElementCore::new(children),
    }
}

/// Option form of [`Button::submit`].
pub fn button_submit(button: Button) -> Button {
    button.submit()
}

/// A button factory with `options` pre-applied, in order.
pub fn special_button(options: &[ButtonOption]) -> impl Fn(Vec<View>) -> Button + use<> {
    let options = options.to_vec();
    move |children| {
        options
            .iter()
            .fold(button(children), |button, option| option(button))
    }
}

impl Button {
    pub fn submit(mut self) -> Self {
        self.button_type = Some(Stem::from("submit"));
        self
    }

    pub fn button_type(mut self, button_type: impl Into<Stem>) -> Self {
        self.button_type = Some(button_type.into());
        self
    }

    pub fn class<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Stem>,
    {
        self.core = self.core.class(tokens);
        self
    }

    pub fn using(mut self, enhancers: impl IntoIterator<Item = Enhancer>) -> Self {
        self.core = self.core.using(enhancers);
        self
    }
}

impl Render for Button {
    fn render(&self) -> Node {
        let mut element = Element::new("button");
        let button_type = self.button_type.clone().unwrap_or(Stem::from("button"));
        element.push_attr("type", button_type);
        self.core.apply_to(&mut element);
        Node::Element(element)
    }
}

impl_into_view!(ElementView, Heading, Button);
