//! Whole-page rendering through the public API.

use facet_testhelpers::test;
use joinery::{
    Element, Node, RenderOptions, View, aria_current_page, aria_label, article, build, button,
    class, div, footer, h, header, link, list, nav, p, render, render_with_options, text,
    views, when,
};

fn site_header(current: &str) -> joinery::ElementView {
    let pages = [
        ("/", "Home"),
        ("/about", "About"),
        ("/pricing", "Pricing"),
        ("/sign-in", "Sign In"),
        ("/join", "Join"),
    ];
    let items: Vec<View> = pages
        .into_iter()
        .map(|(url, title)| {
            link(url, views![text(title)])
                .using([joinery::Enhancer::when(url == current, aria_current_page())])
                .into()
        })
        .collect();
    header(views![nav(views![aria_label("Primary"), list(items)])])
}

fn to_string(views: &[&dyn joinery::Render]) -> String {
    let mut out = Vec::new();
    render(&mut out, views).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn renders_the_readme_page() {
    let page = div(views![
        site_header("/pricing"),
        joinery::main(views![article(views![
            h(1, views![text("Welcome")]),
            div(views![text("markdown")]),
        ])]),
    ]);

    assert_eq!(
        to_string(&[&page]),
        concat!(
            r#"<div><header><nav aria-label="Primary"><ul>"#,
            r#"<li><a href="/">Home</a></li>"#,
            r#"<li><a href="/about">About</a></li>"#,
            r#"<li><a href="/pricing" aria-current="page">Pricing</a></li>"#,
            r#"<li><a href="/sign-in">Sign In</a></li>"#,
            r#"<li><a href="/join">Join</a></li>"#,
            r#"</ul></nav></header>"#,
            r#"<main><article><h1>Welcome</h1><div>markdown</div></article></main></div>"#,
        )
    );
}

#[test]
fn renders_several_views_back_to_back() {
    let html = to_string(&[
        &site_header("/"),
        &p(views![text("body")]),
        &footer(views![class(["small"]), text("fin")]),
    ]);
    assert!(html.starts_with("<header>"));
    assert!(html.contains("</header><p>body</p><footer"));
    assert!(html.ends_with(r#"<footer class="small">fin</footer>"#));
}

#[test]
fn shared_templates_stay_untouched() {
    let base = div(views![class(["card"]), text("shared")]);
    let loud = base.clone().class(["loud"]).child(button(views![text("Go")]));

    assert_eq!(to_string(&[&base]), r#"<div class="card">shared</div>"#);
    assert_eq!(
        to_string(&[&loud]),
        r#"<div class="loud card">shared<button type="button">Go</button></div>"#
    );
    assert_eq!(to_string(&[&base]), r#"<div class="card">shared</div>"#);
}

#[test]
fn conditional_children_keep_positions() {
    for signed_in in [true, false] {
        let node = build(&nav(views![
            link("/", views![text("Home")]),
            when(signed_in, link("/account", views![text("Account")])),
            link("/help", views![text("Help")]),
        ]));
        let nav = node.as_element().unwrap();
        assert_eq!(nav.children.len(), 3);
        assert_eq!(nav.children[2].text_content(), "Help");
    }
}

#[test]
fn pretty_rendering_indents_blocks() {
    let page = div(views![
        header(views![h(2, views![text("Title")])]),
        p(views![text("x")]),
    ]);
    let mut out = Vec::new();
    render_with_options(&mut out, &[&page], &RenderOptions::new().pretty()).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "<div>\n  <header>\n    <h2>Title</h2>\n  </header>\n  <p>x</p>\n</div>\n"
    );
}

#[test]
fn built_tree_matches_rendered_text() {
    let node = build(&link("/", views![text("Home")]));
    let expected: Node = {
        let mut a = Element::new("a");
        a.push_attr("href", "/");
        a.push_text("Home");
        a.into()
    };
    assert_eq!(node, expected);
    assert_eq!(node.to_html(), r#"<a href="/">Home</a>"#);
}

#[test]
fn built_tree_dumps_as_json() {
    let node = build(&link("/", views![text("Home")]));
    let json = facet_json::to_string(&node).expect("serialization should work");
    assert!(json.contains("href"));
    assert!(json.contains("Home"));
}
