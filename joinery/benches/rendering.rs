use divan::{Bencher, black_box};
use joinery::{
    BG_BLUE_800, FONT_BOLD, MB_8, PB_8, PT_8, ROUNDED_FULL, TEXT_2XL, TEXT_BLUE_300, article,
    aria_current_page, aria_label, class, div, div_with_classes, field_labelled, file_input, h,
    header, link, list, nav, render, tailwind_to_class, text, views,
};

fn main() {
    divan::main();
}

const TOKENS: [joinery::TailwindClass; 8] = [
    PT_8,
    PB_8,
    MB_8,
    TEXT_2XL,
    FONT_BOLD,
    TEXT_BLUE_300,
    BG_BLUE_800,
    ROUNDED_FULL,
];

fn page() -> joinery::ElementView {
    div(views![
        header(views![nav(views![
            aria_label("Primary"),
            list(views![
                link("/", views![text("Home")]),
                link("/about", views![text("About")]),
                link("/pricing", views![text("Pricing"), aria_current_page()]),
                link("/sign-in", views![text("Sign In")]),
                link("/join", views![text("Join")]),
            ]),
        ])]),
        joinery::main(views![article(views![
            h(1, views![text("Welcome")]),
            div(views![text("markdown")]),
        ])]),
    ])
}

#[divan::bench]
fn render_page(bencher: Bencher) {
    let view = page();
    let mut out = Vec::with_capacity(1024);
    bencher.bench_local(|| {
        out.clear();
        render(&mut out, &[black_box(&view)]).unwrap();
        black_box(&out);
    });
}

#[divan::bench]
fn build_page() -> joinery::Node {
    joinery::build(black_box(&page()))
}

#[divan::bench]
fn render_form_field(bencher: Bencher) {
    let field = field_labelled("Add picture", [file_input("image")]).class(["block"]);
    let mut out = Vec::with_capacity(256);
    bencher.bench_local(|| {
        out.clear();
        render(&mut out, &[black_box(&field)]).unwrap();
    });
}

#[divan::bench(args = [0, 2, 4, 8])]
fn render_div_tailwind(bencher: Bencher, count: usize) {
    let view = div(views![]).tailwind(TOKENS[..count].iter().cloned());
    let mut out = Vec::with_capacity(256);
    bencher.bench_local(|| {
        out.clear();
        render(&mut out, &[black_box(&view)]).unwrap();
    });
}

#[divan::bench(args = [2, 8])]
fn render_div_with_classes(bencher: Bencher, count: usize) {
    let view = div_with_classes(tailwind_to_class(TOKENS[..count].iter().cloned()), views![]);
    let mut out = Vec::with_capacity(256);
    bencher.bench_local(|| {
        out.clear();
        render(&mut out, &[black_box(&view)]).unwrap();
    });
}

#[divan::bench]
fn render_class_interleaving(bencher: Bencher) {
    let view = div(views![
        class(["first"]),
        text("a"),
        class(["second"]),
        text("b"),
        class(["third"]),
    ]);
    bencher.bench_local(|| joinery::render_to_string(black_box(&view)));
}
