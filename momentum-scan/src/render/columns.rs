//! Rendered table columns

use crate::types::ColumnType;

/// Header hover text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tooltip {
    pub title: &'static str,
    pub body: &'static str,
}

/// How a column's export value becomes a table cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Ticker,
    RsBadge,
    Name,
    Price,
    Liquidity,
    Bis,
    ClosingRange,
    Adr,
    Contraction,
    RVol,
    FromOpen,
    Rank,
}

/// One rendered column: header label, comparison type, and the export field it shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub field: &'static str,
    pub format: CellFormat,
    pub kind: ColumnType,
    pub tooltip: Option<Tooltip>,
}

/// Columns in display order
pub const COLUMNS: &[Column] = &[
    Column {
        label: "Ticker",
        field: "Ticker",
        format: CellFormat::Ticker,
        kind: ColumnType::String,
        tooltip: None,
    },
    Column {
        label: "RS",
        field: "Composite RS",
        format: CellFormat::RsBadge,
        kind: ColumnType::Percent,
        tooltip: Some(Tooltip {
            title: "Composite Relative Strength",
            body: "Combines multiple timeframes (1M, 3M, 6M, 1Y) into an aggregate score. \
                   Percentile ranking vs all stocks. 90+ = top 10% performers across timeframes.",
        }),
    },
    Column {
        label: "Name",
        field: "Name",
        format: CellFormat::Name,
        kind: ColumnType::String,
        tooltip: None,
    },
    Column {
        label: "Price",
        field: "Price",
        format: CellFormat::Price,
        kind: ColumnType::Number,
        tooltip: None,
    },
    Column {
        label: "Liq",
        field: "Daily Liquidity",
        format: CellFormat::Liquidity,
        kind: ColumnType::Number,
        tooltip: Some(Tooltip {
            title: "Daily Liquidity",
            body: "20-day average dollar volume (price × volume). Indicates how easily you can \
                   enter/exit positions. Higher = more liquid, tighter spreads, less slippage.",
        }),
    },
    Column {
        label: "BIS",
        field: "BIS",
        format: CellFormat::Bis,
        kind: ColumnType::Number,
        tooltip: Some(Tooltip {
            title: "Breakout Intensity Score",
            body: "Measures breakout strength by combining price move (% change / ADR), relative \
                   volume vs 20-day avg, and intraday efficiency (close position in day's range). \
                   Higher = stronger conviction breakout.",
        }),
    },
    Column {
        label: "DCR",
        field: "Daily Closing Range",
        format: CellFormat::ClosingRange,
        kind: ColumnType::Percent,
        tooltip: Some(Tooltip {
            title: "Daily Closing Range",
            body: "Where price closed within the day's high-low range. 100% = closed at the high, \
                   0% = closed at the low. Higher values indicate bullish closing action.",
        }),
    },
    Column {
        label: "ADR%",
        field: "ADR %",
        format: CellFormat::Adr,
        kind: ColumnType::Percent,
        tooltip: Some(Tooltip {
            title: "Average Daily Range",
            body: "Average of (High - Low) / Close over the last 20 trading days. Excludes \
                   overnight gaps. Useful for position sizing and setting stop losses.",
        }),
    },
    Column {
        label: "P.Contr",
        field: "Price Contraction",
        format: CellFormat::Contraction,
        kind: ColumnType::Percent,
        tooltip: Some(Tooltip {
            title: "Price Contraction",
            body: "Volatility contraction score over 15 sessions. Ranks current session's price \
                   range vs recent ranges. Higher = tighter consolidation (current range narrower \
                   than recent sessions). Low values indicate volatility expansion.",
        }),
    },
    Column {
        label: "RVol",
        field: "RVol",
        format: CellFormat::RVol,
        kind: ColumnType::Number,
        tooltip: Some(Tooltip {
            title: "Relative Volume",
            body: "Today's volume divided by 20-day average volume. 1.0 = normal, 1.5+ = elevated \
                   interest, 2.0+ = unusual activity worth attention.",
        }),
    },
    Column {
        label: "% Open",
        field: "% From Open",
        format: CellFormat::FromOpen,
        kind: ColumnType::Number,
        tooltip: None,
    },
    Column {
        label: "Rank",
        field: "RS Rank",
        format: CellFormat::Rank,
        kind: ColumnType::Number,
        tooltip: Some(Tooltip {
            title: "RS Rank",
            body: "Custom score combining performance across multiple timeframes (1M to 1Y) plus \
                   distance from 52-week high/low. Provides a comprehensive view of relative \
                   strength vs peers in various market conditions.",
        }),
    },
];
