//! Conditional views.
//!
//! A false branch with nothing to show still renders: it becomes an empty
//! `<template>` element, which browsers keep inert. Keeping a node in place
//! means toggling a condition never shifts the positions of its siblings.

use crate::view::impl_into_view;
use crate::{Element, Node, Render, build};

/// Tag of the node rendered for a branch with nothing to show.
pub const PLACEHOLDER_TAG: &str = "template";

#[derive(Clone, Debug)]
pub struct Conditional {
    chosen: Option<Box<dyn Render>>,
}

/// Render `view` when `condition` holds, a placeholder otherwise.
pub fn when<V: Render + Clone + 'static>(condition: bool, view: V) -> Conditional {
    Conditional {
        chosen: condition.then(|| Box::new(view) as Box<dyn Render>),
    }
}

/// Render `then` when `condition` holds, `otherwise` when it does not.
pub fn when_else<A, B>(condition: bool, then: A, otherwise: B) -> Conditional
where
    A: Render + Clone + 'static,
    B: Render + Clone + 'static,
{
    let chosen: Box<dyn Render> = if condition {
        Box::new(then)
    } else {
        Box::new(otherwise)
    };
    Conditional {
        chosen: Some(chosen),
    }
}

impl Conditional {
    /// True when this renders the placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.chosen.is_none()
    }
}

impl Render for Conditional {
    fn render(&self) -> Node {
        match &self.chosen {
            Some(view) => build(view.as_ref()),
            None => Node::Element(Element::new(PLACEHOLDER_TAG)),
        }
    }
}

impl_into_view!(Conditional);
