use facet_testhelpers::test;
use joinery::{
    FieldOption, InputKind, PX_3, PY_1, ROUNDED_FULL, button, class, data_attr, field_labelled,
    field_named, file_input, form_to, h, multipart, number_input, render_to_string, rows, text,
    textbox, views,
};

#[test]
fn upload_form() {
    let form = form_to("/things", &[multipart]).with(views![
        class(["border"]),
        field_labelled("Add picture", [file_input("image")]).class(["block"]),
        button(views![text("Upload")]).submit(),
    ]);

    assert_eq!(
        render_to_string(&form),
        concat!(
            r#"<form method="post" action="/things" enctype="multipart/form-data" class="border">"#,
            r#"<label class="block"><span>Add picture</span><input type="file" name="image"/></label>"#,
            r#"<button type="submit">Upload</button>"#,
            "</form>",
        )
    );
}

#[test]
fn profile_form_mixes_controls() {
    let form = form_to("/profile", &[])
        .add(h(2, views![text("Profile")]))
        .add(field_labelled("Display name", [textbox("name").default_value("Ada")]))
        .add(field_labelled("Bio", [textbox("bio"), rows(4)]))
        .add(field_labelled("Age", [number_input("age")]))
        .add(button(views![text("Save")]).submit());

    assert_eq!(
        render_to_string(&form),
        concat!(
            r#"<form method="post" action="/profile">"#,
            "<h2>Profile</h2>",
            r#"<label><span>Display name</span><input type="text" name="name" value="Ada"/></label>"#,
            r#"<label><span>Bio</span><textarea name="bio" rows="4"></textarea></label>"#,
            r#"<label><span>Age</span><input type="number" name="age"/></label>"#,
            r#"<button type="submit">Save</button>"#,
            "</form>",
        )
    );
}

#[test]
fn field_styling_splits_between_wrapper_and_control() {
    let field = field_labelled(
        "Search",
        [textbox("q").using([class(["input"]), data_attr("autofocus", "true")])],
    )
    .tailwind([PX_3, PY_1, ROUNDED_FULL]);

    assert_eq!(
        render_to_string(&field),
        concat!(
            r#"<label class="px-3 py-1 rounded-full"><span>Search</span>"#,
            r#"<input type="text" name="q" data-autofocus="true" class="input"/>"#,
            "</label>",
        )
    );
}

#[test]
fn named_field_gets_label_later() {
    let field = field_named("email", [FieldOption::Kind(InputKind::Text)])
        .option(FieldOption::DefaultValue("a@example.org".into()))
        .label(text("Email"));

    assert_eq!(
        render_to_string(&field),
        r#"<label><span>Email</span><input type="text" name="email" value="a@example.org"/></label>"#
    );
}

#[test]
fn textarea_default_value_is_escaped_as_rcdata() {
    let field = field_labelled(
        "Notes",
        [textbox("notes").rows(2).default_value("a < b > c & d")],
    );
    assert_eq!(
        render_to_string(&field),
        r#"<label><span>Notes</span><textarea name="notes" rows="2">a &lt; b > c &amp; d</textarea></label>"#
    );
}
