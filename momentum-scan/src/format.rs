//! Display formatters for screener fields
//!
//! Each formatter maps a raw field value to display text and, for the scored
//! metrics, a CSS class picked from a fixed threshold table. Thresholds are
//! inclusive lower bounds checked from the highest bucket down; anything below
//! every bound lands in the table's floor class. Absent values render as the
//! dash placeholder with the lowest-intensity class.

use crate::parse::{parse_number_opt, parse_percent_opt};
use crate::types::{Cell, PLACEHOLDER};

/// Ordered `(lower bound, class)` buckets plus the class used below all bounds
struct Tiers {
    buckets: &'static [(f64, &'static str)],
    floor: &'static str,
    absent: &'static str,
}

impl Tiers {
    fn classify(&self, value: f64) -> &'static str {
        self.buckets
            .iter()
            .find(|(bound, _)| value >= *bound)
            .map(|(_, class)| *class)
            .unwrap_or(self.floor)
    }
}

const RS_TIERS: Tiers = Tiers {
    buckets: &[(90.0, "rs-elite"), (80.0, "rs-high"), (60.0, "rs-mid")],
    floor: "rs-low",
    absent: "rs-low",
};

const BIS_TIERS: Tiers = Tiers {
    buckets: &[(1.0, "bis-strong"), (0.5, "bis-moderate")],
    floor: "bis-weak",
    absent: "bis-weak",
};

const RVOL_TIERS: Tiers = Tiers {
    buckets: &[(1.5, "rvol-high"), (1.1, "rvol-mid")],
    floor: "rvol-low",
    absent: "rvol-low",
};

const CONTRACTION_TIERS: Tiers = Tiers {
    buckets: &[(70.0, "contr-high"), (50.0, "contr-mid")],
    floor: "contr-low",
    absent: "contr-low",
};

const DCR_TIERS: Tiers = Tiers {
    buckets: &[(80.0, "dcr-high"), (50.0, "dcr-mid")],
    floor: "dcr-low",
    absent: "dcr-low",
};

const FROM_OPEN_TIERS: Tiers = Tiers {
    buckets: &[(3.0, "from-open-high"), (0.0, "from-open-mid")],
    floor: "from-open-neg",
    absent: "from-open-neutral",
};

fn tiered(value: Option<f64>, tiers: &Tiers, display: impl Fn(f64) -> String) -> Cell {
    match value {
        Some(n) => Cell::new(display(n), tiers.classify(n)),
        None => Cell::placeholder(tiers.absent),
    }
}

/// `$2.5B` at or above one billion, `$850M` below it.
pub fn format_liquidity(raw: Option<&str>) -> String {
    match parse_number_opt(raw) {
        Some(n) if n >= 1_000_000_000.0 => format!("${:.1}B", n / 1_000_000_000.0),
        Some(n) => format!("${:.0}M", n / 1_000_000.0),
        None => PLACEHOLDER.to_string(),
    }
}

/// `$1,234.56`
pub fn format_price(raw: Option<&str>) -> String {
    match parse_number_opt(raw) {
        Some(n) => format!("${}", group_thousands(&format!("{:.2}", n))),
        None => PLACEHOLDER.to_string(),
    }
}

/// Composite RS badge: integer percentile.
pub fn format_rs_badge(raw: Option<&str>) -> Cell {
    tiered(parse_percent_opt(raw), &RS_TIERS, |n| format!("{:.0}", n))
}

/// Breakout Intensity Score, two decimals.
pub fn format_bis(raw: Option<&str>) -> Cell {
    tiered(parse_number_opt(raw), &BIS_TIERS, |n| format!("{:.2}", n))
}

/// Relative volume, two decimals.
pub fn format_rvol(raw: Option<&str>) -> Cell {
    tiered(parse_number_opt(raw), &RVOL_TIERS, |n| format!("{:.2}", n))
}

/// Price contraction score as an integer percent.
pub fn format_contraction(raw: Option<&str>) -> Cell {
    tiered(parse_percent_opt(raw), &CONTRACTION_TIERS, |n| format!("{:.0}%", n))
}

/// Daily closing range as an integer percent.
pub fn format_closing_range(raw: Option<&str>) -> Cell {
    tiered(parse_percent_opt(raw), &DCR_TIERS, |n| format!("{:.0}%", n))
}

/// Signed move from the open, one decimal.
pub fn format_from_open(raw: Option<&str>) -> Cell {
    tiered(parse_percent_opt(raw), &FROM_OPEN_TIERS, |n| format!("{:+.1}%", n))
}

/// Average daily range, one decimal. A zero range is shown as the placeholder.
pub fn format_adr(raw: Option<&str>) -> String {
    match parse_percent_opt(raw) {
        Some(n) if n != 0.0 => format!("{:.1}%", n),
        _ => PLACEHOLDER.to_string(),
    }
}

/// RS Rank is shown as exported.
pub fn format_rank(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(rank) if !rank.is_empty() => rank.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Legal-entity suffixes removed from company names, in application order.
const NAME_SUFFIXES: &[(&str, &str)] = &[
    (" Inc.", ""),
    (" Inc", ""),
    (" Corporation", ""),
    (" Corp.", ""),
    (" Corp", ""),
    (" Ltd", ""),
    (" plc", ""),
    (" Holdings", ""),
    (" Holding", ""),
    (" Group", ""),
    (" Technology", " Tech"),
    (" Technologies", " Tech"),
];

/// Drop legal-entity suffixes and abbreviate "Technology"/"Technologies".
///
/// A suffix only matches at a word boundary, so " Inc" leaves "Incyte" alone.
pub fn shorten_name(name: &str) -> String {
    NAME_SUFFIXES
        .iter()
        .fold(name.to_string(), |acc, (from, to)| replace_word(&acc, from, to))
}

fn replace_word(haystack: &str, from: &str, to: &str) -> String {
    let mut out = String::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(idx) = rest.find(from) {
        let after = &rest[idx + from.len()..];
        let at_boundary = from.ends_with(|c: char| !c.is_alphanumeric())
            || !after.starts_with(|c: char| c.is_alphanumeric());
        out.push_str(&rest[..idx]);
        if at_boundary {
            out.push_str(to);
        } else {
            out.push_str(from);
        }
        rest = after;
    }
    out.push_str(rest);
    out
}

/// Insert `,` separators into the integer part of a formatted decimal.
fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
