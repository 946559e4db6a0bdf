use std::fmt::Write as _;

use margin_core::guide::{GuideItem, ListStyle, MARGIN_HELP, SECTIONS, TITLE};

fn item_text(item: &GuideItem) -> String {
    match item.term {
        Some(term) => format!("{term}: {}", item.text),
        None => item.text.to_string(),
    }
}

/// The explainer: title, the one-line margin help, then every section.
pub fn render_guide() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(TITLE.chars().count()));
    let _ = writeln!(out, "{MARGIN_HELP}");

    for section in SECTIONS {
        let _ = writeln!(out);
        if let Some(heading) = section.heading {
            let _ = writeln!(out, "{heading}");
            let _ = writeln!(out, "{}", "-".repeat(heading.chars().count()));
        }
        if let Some(paragraph) = section.paragraph {
            let _ = writeln!(out, "{paragraph}");
        }
        if let Some(callout) = section.callout {
            let _ = writeln!(out, "\n    {callout}");
        }
        for (i, item) in section.items.iter().enumerate() {
            match section.list_style {
                ListStyle::Bulleted => {
                    let _ = writeln!(out, "  - {}", item_text(item));
                }
                ListStyle::Numbered => {
                    let _ = writeln!(out, "  {}. {}", i + 1, item_text(item));
                }
            }
        }
    }
    out
}
