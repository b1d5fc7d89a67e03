/// Shared formatting helpers for terminal output.
use colored::*;
use comfy_table::{Cell, Color};

use crate::color::Scale;

/// Badge backgrounds are composited over this base before rendering;
/// terminals have no alpha channel.
const TABLE_BACKGROUND: [u8; 3] = [255, 255, 255];

/// Table cell for an optional metric: absent values render empty,
/// never as zero.
pub fn metric_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format_number(value)),
        None => Cell::new(""),
    }
}

/// As [`metric_cell`], with a color badge from the field's scale.
pub fn badge_cell(value: Option<f64>, scale: &Scale) -> Cell {
    let Some(value) = value else {
        return Cell::new("");
    };
    let [r, g, b] = scale.style(value).blended_over(TABLE_BACKGROUND);
    Cell::new(format_number(value))
        .bg(Color::Rgb { r, g, b })
        .fg(Color::Black)
}

/// Locale-style number rendering: thousands-grouped integer part,
/// fractional part rounded to at most three digits with trailing
/// zeros dropped.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.3}", value.abs());
    let (int_digits, frac_digits) = match formatted.split_once('.') {
        Some((int_digits, frac_digits)) => (int_digits, frac_digits),
        None => (formatted.as_str(), ""),
    };

    let mut out = String::new();
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    for (i, digit) in int_digits.chars().enumerate() {
        if i > 0 && (int_digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    let fraction = frac_digits.trim_end_matches('0');
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Count with thousands separators.
pub fn format_count(value: u64) -> String {
    format_number(value as f64)
}

pub fn section_header(title: &str) {
    println!("\n{}", title.bold().cyan());
}
