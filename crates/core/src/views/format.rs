//! Display formatting shared by every table and chart.

use chrono::{DateTime, NaiveDate, Utc};

/// Placeholder for values the API left out.
pub const NOT_AVAILABLE: &str = "N/A";

/// Direction of a change, used to colour a cell green or red.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Up,
    Down,
}

impl ChangeDirection {
    /// Zero counts as up.
    pub fn of(change: f64) -> Self {
        if change >= 0.0 {
            ChangeDirection::Up
        } else {
            ChangeDirection::Down
        }
    }
}

// -0.0 would otherwise print as "-0.00".
fn normalize(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// `$` followed by the value with two decimals, no grouping: `$64123.50`.
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", normalize(value))
}

/// Two decimals and a percent sign: `-1.27%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", normalize(value))
}

/// en-US style grouping with up to three fraction digits, trailing zeros
/// dropped: `1234567.25` → `1,234,567.25`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", normalize(value).abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let digits = int_part.len();
    let mut out = String::with_capacity(digits + digits / 3 + frac_part.len() + 2);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// `$` plus grouped value, for market cap and volume columns.
pub fn format_usd_grouped(value: f64) -> String {
    format!("${}", format_grouped(value))
}

pub fn format_optional(value: Option<f64>, f: fn(f64) -> String) -> String {
    value.map(f).unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Stock table dates: `05 Mar 2024`.
pub fn format_bar_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Crypto chart labels: `3/5/2024`.
pub fn format_sample_date(time: DateTime<Utc>) -> String {
    time.format("%-m/%-d/%Y").to_string()
}
