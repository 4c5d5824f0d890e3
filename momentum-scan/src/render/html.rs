//! Static HTML page generation
//!
//! Produces one self-contained document: inline stylesheet with the theme's
//! palette substituted in, a header, the sortable table and the inline sort
//! script. All text taken from the export or the command line is escaped.

use super::columns::{CellFormat, Column, COLUMNS};
use super::script::inline_javascript;
use super::theme::Palette;
use crate::config::RenderConfig;
use crate::format::{
    format_adr, format_bis, format_closing_range, format_contraction, format_from_open,
    format_liquidity, format_price, format_rank, format_rs_badge, format_rvol, shorten_name,
};
use crate::types::{Cell, Row};

const STYLESHEET: &str = include_str!("style.css");

/// Render `rows` (already in display order) as a complete HTML page.
pub fn render_html(rows: &[Row], config: &RenderConfig) -> String {
    log::debug!(
        "Rendering {} rows ({:?} theme, title {:?})",
        rows.len(),
        config.theme,
        config.title
    );

    let palette = config.theme.palette();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&display=swap" rel="stylesheet">
  <style>
{css}  </style>
</head>
<body>
  <div class="container">
{header}
    <div class="table-wrapper">
      <table>
        <thead>
          <tr>
{thead}          </tr>
        </thead>
        <tbody>
{tbody}        </tbody>
      </table>
    </div>

{footer}
  </div>

  <script>{js}  </script>
</body>
</html>
"#,
        title = html_escape(&config.title),
        css = inline_css(&palette),
        header = render_header(config, rows.len()),
        thead = render_table_head(),
        tbody = rows.iter().map(render_row).collect::<String>(),
        footer = render_footer(),
        js = inline_javascript(),
    )
}

/// Stylesheet with every `{{token}}` replaced by the palette color
pub fn inline_css(palette: &Palette) -> String {
    palette
        .entries()
        .iter()
        .fold(STYLESHEET.to_string(), |css, (token, color)| {
            css.replace(&format!("{{{{{}}}}}", token), color)
        })
}

fn render_header(config: &RenderConfig, count: usize) -> String {
    let subtitle = if config.subtitle.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="subtitle">{}</div>"#,
            html_escape(&config.subtitle)
        )
    };
    let prefix = if config.emoji.is_empty() {
        String::new()
    } else {
        format!("{} ", html_escape(&config.emoji))
    };

    format!(
        r#"    <div class="header">
      <div class="header-left">
        <h1>{prefix}{title}</h1>
        {subtitle}
      </div>
      <div class="header-right">
        <div class="date">{date}</div>
        <div class="count">{count} stocks</div>
      </div>
    </div>
"#,
        prefix = prefix,
        title = html_escape(&config.title),
        subtitle = subtitle,
        date = config.display_date().format("%b %d, %Y"),
        count = count,
    )
}

fn render_table_head() -> String {
    COLUMNS
        .iter()
        .enumerate()
        .map(|(index, column)| render_header_cell(index, column))
        .collect()
}

fn render_header_cell(index: usize, column: &Column) -> String {
    match column.tooltip {
        Some(tooltip) => format!(
            r#"            <th data-col="{index}" data-type="{kind}" class="has-tooltip">{label} <span class="sort-arrow">↕</span>
              <span class="tooltip"><span class="tooltip-title">{title}</span>{body}</span>
            </th>
"#,
            index = index,
            kind = column.kind,
            label = html_escape(column.label),
            title = html_escape(tooltip.title),
            body = html_escape(tooltip.body),
        ),
        None => format!(
            r#"            <th data-col="{index}" data-type="{kind}">{label} <span class="sort-arrow">↕</span></th>
"#,
            index = index,
            kind = column.kind,
            label = html_escape(column.label),
        ),
    }
}

fn render_row(row: &Row) -> String {
    let cells: String = COLUMNS
        .iter()
        .map(|column| render_cell(column, row.get(column.field)))
        .collect();
    format!("          <tr>\n{}          </tr>\n", cells)
}

fn render_cell(column: &Column, raw: Option<&str>) -> String {
    let plain = |class: &str, text: &str| {
        format!("            <td class=\"{}\">{}</td>\n", class, html_escape(text))
    };
    let tiered = |cell: Cell| plain(cell.class, &cell.text);

    match column.format {
        CellFormat::Ticker => plain("ticker", raw.unwrap_or("")),
        CellFormat::RsBadge => {
            let badge = format_rs_badge(raw);
            format!(
                "            <td><span class=\"rs-badge {}\">{}</span></td>\n",
                badge.class,
                html_escape(&badge.text)
            )
        }
        CellFormat::Name => plain("name", &shorten_name(raw.unwrap_or(""))),
        CellFormat::Price => plain("price", &format_price(raw)),
        CellFormat::Liquidity => plain("liq", &format_liquidity(raw)),
        CellFormat::Bis => tiered(format_bis(raw)),
        CellFormat::ClosingRange => tiered(format_closing_range(raw)),
        CellFormat::Adr => plain("adr", &format_adr(raw)),
        CellFormat::Contraction => tiered(format_contraction(raw)),
        CellFormat::RVol => tiered(format_rvol(raw)),
        CellFormat::FromOpen => tiered(format_from_open(raw)),
        CellFormat::Rank => plain("rank", &format_rank(raw)),
    }
}

fn render_footer() -> &'static str {
    r#"    <div class="footer">
      <span>Click column headers to sort • Not financial advice</span>
    </div>
"#
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
