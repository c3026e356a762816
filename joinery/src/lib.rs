//! Composable HTML views.
//!
//! joinery provides:
//! - **Views**: plain values describing elements, text, attributes and classes
//! - **Composition**: one merge algorithm shared by every element, with the
//!   `class` attribute always written last
//! - **Forms**: fields whose control is an `<input>` or a `<textarea>`
//! - **Rendering**: deterministic HTML serialization to any `io::Write`
//!
//! # Example
//!
//! ```rust
//! use joinery::{aria_current_page, class, header, link, list, nav, text, views};
//!
//! let page = header(views![
//!     class(["site-header"]),
//!     nav(views![list(views![
//!         link("/", views![text("Home")]),
//!         link("/pricing", views![aria_current_page(), text("Pricing")]),
//!     ])]),
//! ]);
//!
//! let mut out = Vec::new();
//! joinery::render(&mut out, &[&page]).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     concat!(
//!         r#"<header class="site-header"><nav><ul>"#,
//!         r#"<li><a href="/">Home</a></li>"#,
//!         r#"<li><a href="/pricing" aria-current="page">Pricing</a></li>"#,
//!         r#"</ul></nav></header>"#,
//!     )
//! );
//! ```

mod tracing_macros;
pub(crate) use tracing_macros::{debug, trace};

mod class_names;
mod conditional;
mod element_core;
mod elements;
mod error;
mod form;
mod node;
pub mod render;
mod stem;
pub mod tailwind;
mod view;

pub use class_names::ClassNames;
pub use conditional::{Conditional, PLACEHOLDER_TAG, when, when_else};
pub use element_core::{ChildTransform, ElementCore};
pub use elements::{
    Button, ButtonOption, ElementView, Heading, HeadingLevel, article, aside, button,
    button_submit, div, div_with_classes, footer, h, header, heading, img, li, link, list, main,
    nav, ol, ordered_list, p, section, span, special_button, text_with, try_h, ul,
};
pub use error::ViewError;
pub use form::{
    Control, Field, FieldOption, FormOption, FormView, InputKind, InputProps, default_value,
    field_labelled, field_named, file_input, form_to, input_kind, input_named, multipart,
    number_input, rows, textbox,
};
pub use node::{Attribute, Element, Node};
pub use render::{
    Html, RenderOptions, render, render_to_string, render_with_options, serialize_node,
};
pub use stem::Stem;
pub use tailwind::*;
pub use view::{
    Enhancer, Render, RenderClone, Text, View, aria_attr, aria_current_page, aria_label, attr,
    build, bundle, class, class_name, custom_attr, data_attr, enhancers, text,
};
