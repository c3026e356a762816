//! Tailwind CSS class tokens.

use crate::{ClassNames, ElementView, Enhancer, Field, Stem};
use std::fmt;

/// One Tailwind utility class.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TailwindClass(Stem);

impl TailwindClass {
    pub const fn new(token: &'static str) -> Self {
        Self(Stem::from_static(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn prefixed(&self, variant: &str) -> Stem {
        self.0.prefixed(variant)
    }
}

impl fmt::Display for TailwindClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TailwindClass> for Stem {
    fn from(token: TailwindClass) -> Self {
        token.0
    }
}

pub const MAX_W_LG: TailwindClass = TailwindClass::new("max-w-lg");

pub const PT_1: TailwindClass = TailwindClass::new("pt-1");
pub const PT_2: TailwindClass = TailwindClass::new("pt-2");
pub const PT_4: TailwindClass = TailwindClass::new("pt-4");
pub const PT_8: TailwindClass = TailwindClass::new("pt-8");

pub const PB_1: TailwindClass = TailwindClass::new("pb-1");
pub const PB_2: TailwindClass = TailwindClass::new("pb-2");
pub const PB_4: TailwindClass = TailwindClass::new("pb-4");
pub const PB_8: TailwindClass = TailwindClass::new("pb-8");

pub const PL_1: TailwindClass = TailwindClass::new("pl-1");
pub const PL_2: TailwindClass = TailwindClass::new("pl-2");
pub const PL_3: TailwindClass = TailwindClass::new("pl-3");

pub const PR_1: TailwindClass = TailwindClass::new("pr-1");
pub const PR_2: TailwindClass = TailwindClass::new("pr-2");
pub const PR_3: TailwindClass = TailwindClass::new("pr-3");

pub const PX_3: TailwindClass = TailwindClass::new("px-3");
pub const PY_1: TailwindClass = TailwindClass::new("py-1");

pub const MX_AUTO: TailwindClass = TailwindClass::new("mx-auto");
pub const MB_8: TailwindClass = TailwindClass::new("mb-8");

pub const TEXT_XS: TailwindClass = TailwindClass::new("text-xs");
pub const TEXT_SM: TailwindClass = TailwindClass::new("text-sm");
pub const TEXT_BASE: TailwindClass = TailwindClass::new("text-base");
pub const TEXT_XL: TailwindClass = TailwindClass::new("text-xl");
pub const TEXT_2XL: TailwindClass = TailwindClass::new("text-2xl");

pub const TEXT_BLUE_300: TailwindClass = TailwindClass::new("text-blue-300");

pub const BG_BLUE_700: TailwindClass = TailwindClass::new("bg-blue-700");
pub const BG_BLUE_800: TailwindClass = TailwindClass::new("bg-blue-800");

pub const FONT_BOLD: TailwindClass = TailwindClass::new("font-bold");
pub const ITALIC: TailwindClass = TailwindClass::new("italic");
pub const NOT_ITALIC: TailwindClass = TailwindClass::new("not-italic");

pub const ROUNDED_FULL: TailwindClass = TailwindClass::new("rounded-full");

/// `hover:{token}`.
pub fn hover(token: TailwindClass) -> TailwindClass {
    TailwindClass(token.prefixed("hover:"))
}

/// A class list made of `tokens`.
pub fn tailwind_to_class(tokens: impl IntoIterator<Item = TailwindClass>) -> ClassNames {
    ClassNames::new().tailwind(tokens)
}

/// A class enhancer made of `tokens`.
pub fn tailwind(tokens: impl IntoIterator<Item = TailwindClass>) -> Enhancer {
    Enhancer::Class(tailwind_to_class(tokens))
}

impl ClassNames {
    pub fn tailwind(self, tokens: impl IntoIterator<Item = TailwindClass>) -> Self {
        self.class(tokens)
    }

    /// Append each token with the `md:` breakpoint prefix.
    pub fn md(mut self, tokens: impl IntoIterator<Item = TailwindClass>) -> Self {
        for token in tokens {
            self.push(token.prefixed("md:"));
        }
        self
    }
}

impl ElementView {
    pub fn tailwind(self, tokens: impl IntoIterator<Item = TailwindClass>) -> Self {
        self.change_classes(|class_names| class_names.tailwind(tokens))
    }

    pub fn md(self, tokens: impl IntoIterator<Item = TailwindClass>) -> Self {
        self.change_classes(|class_names| class_names.md(tokens))
    }
}

impl Field {
    /// Style the `<label>` wrapper.
    pub fn tailwind(self, tokens: impl IntoIterator<Item = TailwindClass>) -> Self {
        self.add_classes(&tailwind_to_class(tokens))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ChangeStep {
    Plain(Vec<TailwindClass>),
    Md(Vec<TailwindClass>),
}

/// A reusable sequence of class-list additions.
///
/// ```
/// use joinery::{ClassNamesChanger, div, render_to_string, FONT_BOLD, PT_1, PT_8};
///
/// let heading_style = ClassNamesChanger::new().tailwind([PT_8, FONT_BOLD]).md([PT_1]);
/// let view = div(vec![]).change_classes(|c| heading_style.apply(c));
/// assert_eq!(render_to_string(&view), r#"<div class="pt-8 font-bold md:pt-1"></div>"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassNamesChanger {
    steps: Vec<ChangeStep>,
}

impl ClassNamesChanger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tailwind(mut self, tokens: impl IntoIterator<Item = TailwindClass>) -> Self {
        self.steps.push(ChangeStep::Plain(tokens.into_iter().collect()));
        self
    }

    pub fn md(mut self, tokens: impl IntoIterator<Item = TailwindClass>) -> Self {
        self.steps.push(ChangeStep::Md(tokens.into_iter().collect()));
        self
    }

    /// Run every step, in the order they were added, over `class_names`.
    pub fn apply(&self, class_names: ClassNames) -> ClassNames {
        self.steps.iter().fold(class_names, |class_names, step| match step {
            ChangeStep::Plain(tokens) => class_names.tailwind(tokens.iter().cloned()),
            ChangeStep::Md(tokens) => class_names.md(tokens.iter().cloned()),
        })
    }
}
