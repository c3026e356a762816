//! Forms and labelled fields.
//!
//! A [`Field`] renders as
//!
//! ```text
//! <label><span>{caption}</span>{control}</label>
//! ```
//!
//! where the control is an `<input>` or, once a row count is set, a
//! `<textarea>`. Field options are applied strictly left to right and each
//! one fills a single slot, so the last option to touch a slot wins.

use crate::view::impl_into_view;
use crate::{
    ClassNames, Element, ElementCore, Enhancer, Node, Render, Stem, View, build, text, trace,
};

/// `<form method="post" action="...">`.
#[derive(Clone, Debug)]
pub struct FormView {
    method: Stem,
    action: Stem,
    enc_type: Option<Stem>,
    core: ElementCore,
}

pub type FormOption = fn(FormView) -> FormView;

/// A form posting to `action`, with `options` applied in order.
pub fn form_to(action: impl Into<Stem>, options: &[FormOption]) -> FormView {
    let form = FormView {
        method: Stem::from("post"),
        action: action.into(),
        enc_type: None,
        core: ElementCore::default(),
    };
    options.iter().fold(form, |form, option| option(form))
}

/// Option form of [`FormView::multipart`].
pub fn multipart(form: FormView) -> FormView {
    form.multipart()
}

impl FormView {
    /// Set `enctype="multipart/form-data"`.
    pub fn multipart(mut self) -> Self {
        self.enc_type = Some(Stem::from("multipart/form-data"));
        self
    }

    pub fn method(mut self, method: impl Into<Stem>) -> Self {
        self.method = method.into();
        self
    }

    /// Append `views` as children.
    pub fn with(mut self, views: Vec<View>) -> Self {
        self.core = self.core.children(views);
        self
    }

    /// Append one child.
    pub fn add(mut self, view: impl Into<View>) -> Self {
        self.core = self.core.child(view);
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
}

impl Render for FormView {
    fn render(&self) -> Node {
        let mut element = Element::new("form");
        element.push_attr("method", self.method.clone());
        element.push_attr("action", self.action.clone());
        if let Some(enc_type) = &self.enc_type {
            element.push_attr("enctype", enc_type.clone());
        }
        self.core.apply_to(&mut element);
        Node::Element(element)
    }
}

/// The `type` of a single-line input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputKind {
    #[default]
    Text,
    File,
    Number,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::File => "file",
            InputKind::Number => "number",
        }
    }
}

/// One step of field configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldOption {
    Name(Stem),
    Kind(InputKind),
    DefaultValue(Stem),
    Rows(u32),
    /// Decorates the control, never the wrapper.
    Enhance(Enhancer),
    /// Members applied in order, as if passed one by one.
    Batch(Vec<FieldOption>),
}

impl FieldOption {
    /// This option followed by `next`.
    pub fn then(self, next: FieldOption) -> FieldOption {
        match self {
            FieldOption::Batch(mut options) => {
                options.push(next);
                FieldOption::Batch(options)
            }
            single => FieldOption::Batch(vec![single, next]),
        }
    }

    pub fn default_value(self, value: impl Into<Stem>) -> FieldOption {
        self.then(default_value(value))
    }

    pub fn rows(self, rows: u32) -> FieldOption {
        self.then(FieldOption::Rows(rows))
    }

    pub fn kind(self, kind: InputKind) -> FieldOption {
        self.then(FieldOption::Kind(kind))
    }

    pub fn using(self, enhancers: impl IntoIterator<Item = Enhancer>) -> FieldOption {
        enhancers.into_iter().fold(self, |option, enhancer| {
            option.then(FieldOption::Enhance(enhancer))
        })
    }
}

impl From<Enhancer> for FieldOption {
    fn from(enhancer: Enhancer) -> Self {
        FieldOption::Enhance(enhancer)
    }
}

pub fn input_named(name: impl Into<Stem>) -> FieldOption {
    FieldOption::Name(name.into())
}

pub fn input_kind(kind: InputKind) -> FieldOption {
    FieldOption::Kind(kind)
}

pub fn default_value(value: impl Into<Stem>) -> FieldOption {
    FieldOption::DefaultValue(value.into())
}

/// Switches the control to a `<textarea>` when `rows > 0`.
pub fn rows(rows: u32) -> FieldOption {
    FieldOption::Rows(rows)
}

/// A named text input.
pub fn textbox(name: impl Into<Stem>) -> FieldOption {
    input_named(name).kind(InputKind::Text)
}

/// A named file input.
pub fn file_input(name: impl Into<Stem>) -> FieldOption {
    input_named(name).kind(InputKind::File)
}

/// A named number input.
pub fn number_input(name: impl Into<Stem>) -> FieldOption {
    input_named(name).kind(InputKind::Number)
}

/// Everything the control is built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputProps {
    pub name: Option<Stem>,
    pub kind: Option<InputKind>,
    pub default_value: Option<Stem>,
    pub rows: u32,
    pub enhancers: Vec<Enhancer>,
}

/// What the control finalizes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Input(InputKind),
    TextArea { rows: u32 },
}

impl InputProps {
    fn apply(&mut self, option: FieldOption) {
        match option {
            FieldOption::Name(name) => self.name = Some(name),
            FieldOption::Kind(kind) => self.kind = Some(kind),
            FieldOption::DefaultValue(value) => self.default_value = Some(value),
            FieldOption::Rows(rows) => self.rows = rows,
            FieldOption::Enhance(enhancer) => self.enhancers.push(enhancer),
            FieldOption::Batch(options) => {
                for option in options {
                    self.apply(option);
                }
            }
        }
    }

    /// The control these properties produce.
    pub fn control(&self) -> Control {
        if self.rows > 0 {
            Control::TextArea { rows: self.rows }
        } else {
            Control::Input(self.kind.unwrap_or_default())
        }
    }

    fn build_control(&self) -> Element {
        let mut element = match self.control() {
            Control::TextArea { rows } => {
                let mut textarea = Element::new("textarea");
                if let Some(name) = &self.name {
                    textarea.push_attr("name", name.clone());
                }
                textarea.push_attr("rows", Stem::from(rows.to_string()));
                if let Some(value) = &self.default_value {
                    textarea.push_text(value.clone());
                }
                textarea
            }
            Control::Input(kind) => {
                let mut input = Element::new("input");
                input.push_attr("type", kind.as_str());
                if let Some(name) = &self.name {
                    input.push_attr("name", name.clone());
                }
                if let Some(value) = &self.default_value {
                    input.push_attr("value", value.clone());
                }
                input
            }
        };
        ElementCore::default()
            .using(self.enhancers.iter().cloned())
            .apply_to(&mut element);
        element
    }
}

/// A captioned form control.
#[derive(Clone, Debug)]
pub struct Field {
    caption: Option<Box<dyn Render>>,
    props: InputProps,
    core: ElementCore,
}

/// A field captioned with `label`.
pub fn field_labelled(
    label: impl Into<Stem>,
    options: impl IntoIterator<Item = FieldOption>,
) -> Field {
    Field::new(Some(Box::new(text(label))), options)
}

/// A field with a name and no caption yet; see [`Field::label`].
pub fn field_named(name: impl Into<Stem>, options: impl IntoIterator<Item = FieldOption>) -> Field {
    Field::new(None, std::iter::once(input_named(name)).chain(options))
}

impl Field {
    fn new(
        caption: Option<Box<dyn Render>>,
        options: impl IntoIterator<Item = FieldOption>,
    ) -> Self {
        let mut props = InputProps::default();
        for option in options {
            props.apply(option);
        }
        Self {
            caption,
            props,
            core: ElementCore::default(),
        }
    }

    /// Replace the caption.
    pub fn label<V: Render + Clone + 'static>(mut self, caption: V) -> Self {
        self.caption = Some(Box::new(caption));
        self
    }

    /// Apply one more option after those given at construction.
    pub fn option(mut self, option: FieldOption) -> Self {
        self.props.apply(option);
        self
    }

    pub fn kind(self, kind: InputKind) -> Self {
        self.option(FieldOption::Kind(kind))
    }

    /// Add classes to the `<label>` wrapper.
    pub fn class<I>(mut self, tokens: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Stem>,
    {
        self.core = self.core.class(tokens);
        self
    }

    /// Add classes to the `<label>` wrapper.
    pub fn add_classes(mut self, additions: &ClassNames) -> Self {
        self.core = self.core.add_classes(additions);
        self
    }

    /// Enhance the `<label>` wrapper rather than the control.
    pub fn wrapper_using(mut self, enhancers: impl IntoIterator<Item = Enhancer>) -> Self {
        self.core = self.core.using(enhancers);
        self
    }

    pub fn props(&self) -> &InputProps {
        &self.props
    }
}

impl Render for Field {
    fn render(&self) -> Node {
        let mut label = Element::new("label");

        let mut caption = Element::new("span");
        if let Some(view) = &self.caption {
            caption.push_child(build(view.as_ref()));
        }
        label.push_element(caption);

        let control = self.props.build_control();
        trace!(control = %control.tag, name = ?self.props.name, "finalized field control");
        label.push_element(control);

        self.core.apply_to(&mut label);
        Node::Element(label)
    }
}

impl_into_view!(FormView, Field);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{button, class, data_attr, render_to_string, views};
    use facet_testhelpers::test;

    #[test]
    fn test_empty_form() {
        assert_eq!(
            render_to_string(&form_to("/things", &[])),
            r#"<form method="post" action="/things"></form>"#
        );
    }

    #[test]
    fn test_multipart_option_and_method_agree() {
        let expected =
            r#"<form method="post" action="/things" enctype="multipart/form-data"></form>"#;
        assert_eq!(
            render_to_string(&form_to("/things", &[multipart])),
            expected
        );
        assert_eq!(
            render_to_string(&form_to("/things", &[]).multipart()),
            expected
        );
    }

    #[test]
    fn test_text_field() {
        let html = render_to_string(&field_labelled("Write description", [textbox("description")]));
        assert_eq!(
            html,
            r#"<label><span>Write description</span><input type="text" name="description"/></label>"#
        );
    }

    #[test]
    fn test_text_field_with_value_and_class() {
        let field = field_labelled(
            "Write description",
            [textbox("description")
                .default_value("some value")
                .using([class(["some classes"])])],
        );
        assert_eq!(
            render_to_string(&field),
            r#"<label><span>Write description</span><input type="text" name="description" value="some value" class="some classes"/></label>"#
        );
    }

    #[test]
    fn test_rows_switch_to_textarea() {
        let field = field_labelled(
            "Favorite number",
            [textbox("description").rows(3).default_value("some value")],
        );
        assert_eq!(
            render_to_string(&field),
            r#"<label><span>Favorite number</span><textarea name="description" rows="3">some value</textarea></label>"#
        );
    }

    #[test]
    fn test_never_both_forms() {
        let with_rows = field_labelled("x", [textbox("a").rows(2).default_value("v")]);
        let without_rows = field_labelled("x", [textbox("a").default_value("v")]);

        let html = render_to_string(&with_rows);
        assert!(html.contains("<textarea"));
        assert!(!html.contains("<input"));
        assert!(!html.contains("value="));

        let html = render_to_string(&without_rows);
        assert!(html.contains(r#"value="v""#));
        assert!(!html.contains("<textarea"));
    }

    #[test]
    fn test_file_and_number_inputs() {
        assert_eq!(
            render_to_string(&field_labelled("Add picture", [file_input("image")])),
            r#"<label><span>Add picture</span><input type="file" name="image"/></label>"#
        );
        assert_eq!(
            render_to_string(&field_labelled("Favorite number", [number_input("fave_number")])),
            r#"<label><span>Favorite number</span><input type="number" name="fave_number"/></label>"#
        );
    }

    #[test]
    fn test_options_apply_left_to_right() {
        let field = field_labelled(
            "Later wins",
            [
                textbox("first"),
                input_named("second"),
                input_kind(InputKind::Number),
                rows(4),
                rows(0),
            ],
        );
        assert_eq!(field.props().control(), Control::Input(InputKind::Number));
        assert_eq!(field.props().name.as_deref(), Some("second"));
    }

    #[test]
    fn test_kind_defaults_to_text() {
        let field = field_named("q", []);
        assert_eq!(field.props().control(), Control::Input(InputKind::Text));
        assert_eq!(
            render_to_string(&field),
            r#"<label><span></span><input type="text" name="q"/></label>"#
        );
    }

    #[test]
    fn test_label_transition() {
        let field = field_named("q", [default_value("rust")]).label(text("Search"));
        assert_eq!(
            render_to_string(&field),
            r#"<label><span>Search</span><input type="text" name="q" value="rust"/></label>"#
        );
    }

    #[test]
    fn test_enhancers_target_control_not_wrapper() {
        let field = field_labelled(
            "Add picture",
            [
                file_input("image"),
                FieldOption::from(data_attr("role", "upload")),
            ],
        )
        .class(["block"]);
        assert_eq!(
            render_to_string(&field),
            r#"<label class="block"><span>Add picture</span><input type="file" name="image" data-role="upload"/></label>"#
        );
    }

    #[test]
    fn test_wrapper_using() {
        let field = field_labelled("Name", [textbox("name")]).wrapper_using([class(["row"])]);
        assert_eq!(
            render_to_string(&field),
            r#"<label class="row"><span>Name</span><input type="text" name="name"/></label>"#
        );
    }

    #[test]
    fn test_form_with_field_and_submit() {
        let form = form_to("/things", &[multipart]).with(views![
            class(["border"]),
            field_labelled("Add picture", [file_input("image")]).class(["block"]),
            button(views![crate::text("Upload")]).submit(),
        ]);
        assert_eq!(
            render_to_string(&form),
            concat!(
                r#"<form method="post" action="/things" enctype="multipart/form-data" class="border">"#,
                r#"<label class="block"><span>Add picture</span><input type="file" name="image"/></label>"#,
                r#"<button type="submit">Upload</button>"#,
                r#"</form>"#,
            )
        );
    }
}
