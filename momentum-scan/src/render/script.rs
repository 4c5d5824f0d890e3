//! In-browser re-sorting
//!
//! The page ships a small script that re-sorts the rendered rows when a header
//! is clicked. It parses cell text back into comparable values, so it has to
//! invert the display formats in [`crate::format`]: `$`, `,`, `( )` and the
//! `B`/`M`/`K` suffixes for numbers (scaled to millions), `%`, `+` and `,` for
//! percents. [`client_sort_value`] applies the same rules on the Rust side.

use crate::types::ColumnType;

/// Inline script embedded at the end of the page
pub fn inline_javascript() -> &'static str {
    r#"
    document.addEventListener('DOMContentLoaded', function() {
      const table = document.querySelector('table');
      const headers = table.querySelectorAll('thead th');
      const tbody = table.querySelector('tbody');
      let currentSort = { col: null, asc: true };

      function parseValue(text, type) {
        text = text.trim();
        if (text === '-' || text === '') return null;

        if (type === 'number') {
          const scale = text.includes('B') ? 1000 : text.includes('M') ? 1 : text.includes('K') ? 0.001 : 1;
          const n = parseFloat(text.replace(/[$,BMK()]/g, ''));
          return isNaN(n) ? null : n * scale;
        }
        if (type === 'percent') {
          const n = parseFloat(text.replace(/[%+,]/g, ''));
          return isNaN(n) ? null : n;
        }
        return text.toLowerCase();
      }

      function sortTable(colIndex, type) {
        const rows = Array.from(tbody.querySelectorAll('tr'));
        const asc = currentSort.col === colIndex ? !currentSort.asc : false;

        rows.sort((a, b) => {
          const aVal = parseValue(a.cells[colIndex].textContent, type);
          const bVal = parseValue(b.cells[colIndex].textContent, type);

          if (aVal === null && bVal === null) return 0;
          if (aVal === null) return 1;
          if (bVal === null) return -1;

          if (typeof aVal === 'string') {
            return asc ? aVal.localeCompare(bVal) : bVal.localeCompare(aVal);
          }
          return asc ? aVal - bVal : bVal - aVal;
        });

        rows.forEach(row => tbody.appendChild(row));

        headers.forEach(h => {
          h.classList.remove('sorted');
          const arrow = h.querySelector('.sort-arrow');
          if (arrow) arrow.textContent = '↕';
        });

        headers[colIndex].classList.add('sorted');
        const arrow = headers[colIndex].querySelector('.sort-arrow');
        if (arrow) arrow.textContent = asc ? '↑' : '↓';

        currentSort = { col: colIndex, asc };
      }

      headers.forEach((header, index) => {
        header.addEventListener('click', () => {
          const type = header.dataset.type || 'string';
          sortTable(index, type);
        });
      });
    });
"#
}

/// Comparable value the page script derives from a cell
#[derive(Debug, Clone, PartialEq)]
pub enum ClientValue {
    Number(f64),
    Text(String),
}

/// Parse rendered cell text the way the page script does. `None` sorts last.
pub fn client_sort_value(text: &str, kind: ColumnType) -> Option<ClientValue> {
    let text = text.trim();
    if text.is_empty() || text == "-" {
        return None;
    }

    match kind {
        ColumnType::Number => {
            let scale = if text.contains('B') {
                1000.0
            } else if text.contains('M') {
                1.0
            } else if text.contains('K') {
                0.001
            } else {
                1.0
            };
            let cleaned: String = text
                .chars()
                .filter(|c| !matches!(c, '$' | ',' | 'B' | 'M' | 'K' | '(' | ')'))
                .collect();
            js_parse_float(&cleaned).map(|n| ClientValue::Number(n * scale))
        }
        ColumnType::Percent => {
            let cleaned: String = text
                .chars()
                .filter(|c| !matches!(c, '%' | '+' | ','))
                .collect();
            js_parse_float(&cleaned).map(ClientValue::Number)
        }
        ColumnType::String => Some(ClientValue::Text(text.to_lowercase())),
    }
}

/// `parseFloat`: longest leading decimal literal, ignoring whatever follows.
fn js_parse_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{format_closing_range, format_from_open, format_liquidity, format_price};

    fn number(text: &str, kind: ColumnType) -> f64 {
        match client_sort_value(text, kind) {
            Some(ClientValue::Number(n)) => n,
            other => panic!("expected number for {:?}, got {:?}", text, other),
        }
    }

    #[test]
    fn test_js_parse_float_prefix() {
        assert_eq!(js_parse_float("1.5"), Some(1.5));
        assert_eq!(js_parse_float("  -0.3rest"), Some(-0.3));
        assert_eq!(js_parse_float(".5"), Some(0.5));
        assert_eq!(js_parse_float("1e3x"), Some(1000.0));
        assert_eq!(js_parse_float("2e"), Some(2.0));
        assert_eq!(js_parse_float("abc"), None);
        assert_eq!(js_parse_float("-"), None);
    }

    #[test]
    fn test_client_values_for_rendered_cells() {
        assert_eq!(number("$1.2B", ColumnType::Number), 1200.0);
        assert_eq!(number("$850M", ColumnType::Number), 850.0);
        assert_eq!(number("$1,234.50", ColumnType::Number), 1234.5);
        assert_eq!(number("87%", ColumnType::Percent), 87.0);
        assert_eq!(number("-0.3%", ColumnType::Percent), -0.3);
        assert_eq!(number("+2.5%", ColumnType::Number), 2.5);
        assert_eq!(client_sort_value("-", ColumnType::Number), None);
        assert_eq!(
            client_sort_value("NVDA", ColumnType::String),
            Some(ClientValue::Text("nvda".to_string()))
        );
    }

    #[test]
    fn test_liquidity_ordering_round_trips() {
        let raw = ["950000000", "1200000000", "45000000", "3000000000"];
        let mut by_source: Vec<f64> = raw.iter().map(|r| r.parse().unwrap()).collect();
        by_source.sort_by(|a, b| a.total_cmp(b));

        let mut by_client: Vec<f64> = raw
            .iter()
            .map(|r| number(&format_liquidity(Some(r)), ColumnType::Number))
            .collect();
        by_client.sort_by(|a, b| a.total_cmp(b));

        let expected: Vec<f64> = by_source.iter().map(|n| (n / 1_000_000.0).round()).collect();
        let rounded: Vec<f64> = by_client.iter().map(|n| n.round()).collect();
        assert_eq!(rounded, expected);
    }

    #[test]
    fn test_percent_and_price_ordering_round_trips() {
        let dcr = ["12", "87.4%", "50", "99"];
        let mut pairs: Vec<(f64, f64)> = dcr
            .iter()
            .map(|r| {
                let source = crate::parse::parse_percent(r).unwrap();
                let client = number(&format_closing_range(Some(r)).text, ColumnType::Percent);
                (source, client)
            })
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        assert!(pairs.windows(2).all(|w| w[0].1 <= w[1].1));

        let open = ["-0.3", "4.25", "0", "-2"];
        let mut pairs: Vec<(f64, f64)> = open
            .iter()
            .map(|r| {
                let source = crate::parse::parse_number(r).unwrap();
                let client = number(&format_from_open(Some(r)).text, ColumnType::Number);
                (source, client)
            })
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        assert!(pairs.windows(2).all(|w| w[0].1 <= w[1].1));

        let a = number(&format_price(Some("999.5")), ColumnType::Number);
        let b = number(&format_price(Some("1500")), ColumnType::Number);
        assert!(a < b);
    }
}
