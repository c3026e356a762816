use joinery::{
    FONT_BOLD, PT_8, RenderOptions, TEXT_2XL, aria_current_page, aria_label, article, div,
    field_labelled, file_input, form_to, h, header, link, list, multipart, nav, render_with_options,
    text, views,
};
use std::io::{self, Write};

fn main() -> io::Result<()> {
    let pretty = std::env::args().any(|arg| arg == "--pretty");

    let page = div(views![
        header(views![nav(views![
            aria_label("Primary"),
            list(views![
                link("/", views![text("Home")]),
                link("/pricing", views![aria_current_page(), text("Pricing")]),
            ]),
        ])]),
        joinery::main(views![article(views![
            h(1, views![text("Welcome")]).class(["title"]),
            form_to("/uploads", &[multipart]).with(views![
                field_labelled("Add picture", [file_input("image")]).tailwind([PT_8]),
            ]),
        ])]),
    ])
    .tailwind([TEXT_2XL, FONT_BOLD]);

    let options = if pretty {
        RenderOptions::new().pretty()
    } else {
        RenderOptions::new()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_with_options(&mut out, &[&page], &options)?;
    writeln!(out)?;
    Ok(())
}
