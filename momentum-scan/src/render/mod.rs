//! HTML rendering: palettes, column table, page template and the inline sort script

pub mod columns;
pub mod html;
pub mod script;
pub mod theme;

pub use columns::{CellFormat, Column, Tooltip, COLUMNS};
pub use html::{html_escape, inline_css, render_html};
pub use script::{client_sort_value, inline_javascript, ClientValue};
pub use theme::{Palette, Theme};
