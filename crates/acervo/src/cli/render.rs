//! # Rendering Module
//!
//! Turns `CmdResult` parts into terminal text. Every function returns a
//! `String`; printing is the caller's job, which keeps these testable.
//!
//! Layout calculations (width, truncation, padding) use display width from
//! `unicode-width`, not byte or char counts: titles are full of accented
//! Portuguese and the occasional wide character.
//!
//! Only what `RedactedItem` carries is rendered. Hidden fields are already
//! `None` there, so nothing in this module checks visibility flags.

use super::styles::STYLES;
use acervoapp::api::{CmdMessage, MessageLevel};
use acervoapp::commands::facets::FacetOptions;
use acervoapp::index::DisplayItem;
use acervoapp::visibility::RedactedItem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const META_WIDTH: usize = 48;
pub const UNTITLED: &str = "Sem título";
const META_SEPARATOR: &str = " · ";

/// One line per item: index, title, then byline and location label flush right.
pub fn render_list(items: &[DisplayItem]) -> String {
    let index_width = items
        .last()
        .map(|d| d.index.to_string().len())
        .unwrap_or(1);

    let mut out = String::new();
    for d in items {
        let index = format!("{:>width$}. ", d.index, width = index_width);
        let title = d.item.title.as_deref().unwrap_or(UNTITLED);

        let meta: Vec<&str> = [d.item.byline.as_deref(), d.item.location_label.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        let meta = truncate_to_width(&meta.join(META_SEPARATOR), META_WIDTH);
        let meta_width = meta.width();

        let gap = if meta.is_empty() { 0 } else { 2 };
        let available = LINE_WIDTH.saturating_sub(index.width() + meta_width + gap);
        let title = truncate_to_width(title, available);
        let padding = available.saturating_sub(title.width());

        let line = format!(
            "{}{}{}{}{}",
            STYLES.index.apply_to(&index),
            STYLES.title.apply_to(&title),
            " ".repeat(padding + gap),
            STYLES.muted.apply_to(&meta),
            if d.item.on_exhibition { " ★" } else { "" },
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// The three facet lists. The location section is left out when empty, which
/// is always the case while locations are hidden.
pub fn render_facets(facets: &FacetOptions) -> String {
    let years: Vec<String> = facets.years.iter().map(|y| y.to_string()).collect();

    let mut out = String::new();
    render_section(&mut out, "Tipos", &facets.types);
    if !facets.locations.is_empty() {
        render_section(&mut out, "Localizações", &facets.locations);
    }
    render_section(&mut out, "Anos", &years);
    out
}

fn render_section(out: &mut String, heading: &str, values: &[String]) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!("{}\n", STYLES.heading.apply_to(heading)));
    if values.is_empty() {
        out.push_str(&format!("  {}\n", STYLES.muted.apply_to("(nenhum)")));
    }
    for value in values {
        out.push_str(&format!("  {}\n", value));
    }
}

/// Full record for the detail view.
pub fn render_detail(item: &RedactedItem) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        STYLES.title.apply_to(item.title.as_deref().unwrap_or(UNTITLED))
    ));
    if let Some(byline) = &item.byline {
        out.push_str(&format!("{}\n", STYLES.muted.apply_to(byline)));
    }
    if let Some(label) = &item.location_label {
        out.push_str(&format!("{}\n", STYLES.muted.apply_to(label)));
    }
    if item.on_exhibition {
        out.push_str(&format!(
            "{}\n",
            STYLES
                .badge
                .apply_to(format!(" {} ", acervoapp::visibility::EXHIBITION_LABEL))
        ));
    }

    let mut rows: Vec<(&str, &str)> = [
        ("Tipo", item.kind.as_deref()),
        ("Situação", item.status.as_deref()),
        ("Localização", item.location.as_deref()),
        ("Nº de registro", item.reg_number.as_deref()),
        ("Procedência", item.provenance.as_deref()),
        ("Estado de conservação", item.condition.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect();
    rows.extend(
        item.custom_fields
            .iter()
            .map(|f| (f.label.as_str(), f.value.as_str())),
    );

    if !rows.is_empty() {
        out.push('\n');
        let label_width = rows.iter().map(|(l, _)| l.width()).max().unwrap_or(0);
        for (label, value) in rows {
            let padding = " ".repeat(label_width - label.width());
            out.push_str(&format!(
                "  {}{}  {}\n",
                STYLES.label.apply_to(label),
                padding,
                value
            ));
        }
    }

    out.push('\n');
    out.push_str(item.description_or_default());
    out.push('\n');

    if let Some(image) = &item.image {
        out.push_str(&format!("\n  {}  {}\n", STYLES.label.apply_to("Imagem"), image));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &STYLES.info,
        };
        out.push_str(&format!("{}\n", style.apply_to(&message.content)));
    }
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    if max_width > 0 {
        result.push('…');
    }
    result
}
