//! Styles for the Acervo CLI.
//!
//! Rendering code refers to styles by what they mark (an index, a title, a
//! field label), never by color. The palette lives here, built once through
//! `once_cell::sync::Lazy`. `console` drops the styling when stdout is not a
//! terminal.

use console::Style;
use once_cell::sync::Lazy;

pub struct Styles {
    pub index: Style,
    pub title: Style,
    pub muted: Style,
    pub badge: Style,
    pub label: Style,
    pub heading: Style,
    pub info: Style,
}

pub static STYLES: Lazy<Styles> = Lazy::new(|| Styles {
    index: Style::new().yellow(),
    title: Style::new().bold(),
    muted: Style::new().color256(246).italic(),
    badge: Style::new().black().on_yellow(),
    label: Style::new().cyan(),
    heading: Style::new().bold().underlined(),
    info: Style::new().dim(),
});
