//! The composition engine shared by every element-like view.
//!
//! An [`ElementCore`] holds what an element accumulates while a caller chains
//! builder calls: a pending class list, the ordered child views, and an
//! optional per-child transform. [`ElementCore::apply_to`] merges all of it
//! into a target [`Element`]:
//!
//! 1. attribute views are appended to the element's attributes where they
//!    appear among their siblings,
//! 2. class views are collected into a working class list,
//! 3. plain views are built, passed through the transform, and appended as
//!    children,
//! 4. bundles are walked as if their members were written inline,
//!
//! and once every child view has been seen, a single `class` attribute is
//! appended last if any tokens were collected.

use crate::{ClassNames, Element, Enhancer, Node, Stem, View, build, trace};

/// A pure per-child rewrite run after a child is built and before it is
/// appended to its parent.
pub type ChildTransform = fn(Node) -> Node;

#[derive(Clone, Debug, Default)]
pub struct ElementCore {
    class_names: ClassNames,
    children: Vec<View>,
    child_transform: Option<ChildTransform>,
}

impl ElementCore {
    pub fn new(children: impl IntoIterator<Item = View>) -> Self {
        Self {
            class_names: ClassNames::new(),
            children: children.into_iter().collect(),
            child_transform: None,
        }
    }

    /// Rewrite every plain child with `transform` before it is appended.
    pub fn with_transform(mut self, transform: ChildTransform) -> Self {
        self.child_transform = Some(transform);
        self
    }

    /// Append enhancers after the existing children.
    pub fn using(mut self, enhancers: impl IntoIterator<Item = Enhancer>) -> Self {
        self.children.extend(enhancers.into_iter().map(View::from));
        self
    }

    pub fn child(mut self, view: impl Into<View>) -> Self {
        self.children.push(view.into());
        self
    }

    pub fn children(mut self, views: impl IntoIterator<Item = View>) -> Self {
        self.children.extend(views);
        self
    }

    /// Add tokens to the class list the element starts with.
    pub fn class<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Stem>,
    {
        self.class_names = self.class_names.class(tokens);
        self
    }

    pub fn add_classes(mut self, additions: &ClassNames) -> Self {
        self.class_names = self.class_names.concat(additions);
        self
    }

    /// Replace the starting class list with whatever `changer` returns.
    pub fn change_classes(mut self, changer: impl FnOnce(ClassNames) -> ClassNames) -> Self {
        self.class_names = changer(self.class_names);
        self
    }

    /// Merge classes and children into `element`.
    ///
    /// `element` must already carry its tag and any attributes the view
    /// resolved up front; those stay ahead of everything added here.
    pub fn apply_to(&self, element: &mut Element) {
        let mut pending = self.class_names.clone();

        for view in &self.children {
            self.contribute(view, element, &mut pending);
        }

        if !pending.is_empty() {
            element.push_attr("class", pending.to_stem());
        }

        trace!(
            tag = %element.tag,
            attrs = element.attrs.len(),
            children = element.children.len(),
            "composed element"
        );
    }

    fn contribute(&self, view: &View, element: &mut Element, pending: &mut ClassNames) {
        match view {
            View::Attr(attr) => element.attrs.push(attr.clone()),
            View::Class(class_names) => pending.extend_from(class_names),
            View::Child(child) => {
                let mut node = build(child.as_ref());
                if let Some(transform) = self.child_transform {
                    node = transform(node);
                }
                element.push_child(node);
            }
            View::Bundle(views) => {
                for view in views {
                    self.contribute(view, element, pending);
                }
            }
        }
    }
}
