//! Display and comparison helpers over raw offer text.
//!
//! Every function here is pure. Absent values ("", "N/A", "None") come back
//! as `None` so they can never be mistaken for a zero.

use once_cell::sync::Lazy;
use regex::Regex;

pub const NA_MARKER: &str = "N/A";

static PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$?(\d{1,3}(?:,\d{3})+|\d+)(\.\d+)?").unwrap());

static LEADING_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([-+]?(?:\d+(?:\.\d*)?|\.\d+))").unwrap());

static ACCOUNT_SIZE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d[\d,]*(?:\.\d+)?)\s*(?:([kKmM])\b)?").unwrap());

pub fn is_absent(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case(NA_MARKER)
        || trimmed.eq_ignore_ascii_case("none")
}

pub fn display_or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NA_MARKER.to_string())
}

/// Opaque text columns: the trimmed value, or `None` when absent.
pub fn text_value(raw: &str) -> Option<String> {
    if is_absent(raw) {
        None
    } else {
        Some(raw.trim().to_string())
    }
}

pub fn format_number_with_commas(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }

    let is_zero = text.chars().all(|ch| ch == '0' || ch == '.');
    if value < 0.0 && !is_zero {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn is_whole(value: f64) -> bool {
    value.fract().abs() < 1e-9
}

/// Shortest rendering with at most two decimals: `25`, `2.5`, `1.25`.
fn compact_number(value: f64) -> String {
    if is_whole(value) {
        return format!("{}", value.round() as i64);
    }
    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

fn format_money(value: f64) -> String {
    let decimals = if is_whole(value) { 0 } else { 2 };
    let digits = format_number_with_commas(value.abs(), decimals);
    if value < 0.0 {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

/// Currency-like columns (profit goal, drawdown, fees).
///
/// Text that already carries a `$` is kept as written, plain numbers are
/// re-rendered as dollars, anything else is passed through unchanged.
pub fn format_currency(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if is_absent(trimmed) {
        return None;
    }
    if trimmed.contains('$') {
        return Some(trimmed.to_string());
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|ch| !matches!(ch, ',' | '£' | '€') && !ch.is_whitespace())
        .collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(format_money(value)),
        _ => Some(trimmed.to_string()),
    }
}

/// Number at the very start of `text`, the way a lenient float parser reads it.
pub fn leading_number(text: &str) -> Option<f64> {
    LEADING_NUMBER_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// First number in free-form price text such as "$69 per month".
pub fn extract_price(raw: &str) -> Option<f64> {
    if is_absent(raw) {
        return None;
    }
    let caps = PRICE_PATTERN.captures(raw)?;
    let whole = caps.get(1)?.as_str().replace(',', "");
    let fraction = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    format!("{whole}{fraction}").parse::<f64>().ok()
}

/// Dollar magnitude of an account size ("$25K", "100000", "$100,000").
/// Contract-denominated sizes have no dollar magnitude.
pub fn account_size_value(raw: &str) -> Option<f64> {
    if is_absent(raw) || raw.to_lowercase().contains("contract") {
        return None;
    }
    let caps = ACCOUNT_SIZE_PATTERN.captures(raw)?;
    let base = caps.get(1)?.as_str().replace(',', "").parse::<f64>().ok()?;
    let multiplier = match caps.get(2).map(|m| m.as_str()) {
        Some("k") | Some("K") => 1_000.0,
        Some("m") | Some("M") => 1_000_000.0,
        _ => 1.0,
    };
    Some(base * multiplier)
}

pub fn account_size_bucket(raw: &str) -> Option<String> {
    let value = account_size_value(raw)?;
    let label = if value >= 1_000_000.0 {
        format!("${}M", compact_number(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("${}K", compact_number(value / 1_000.0))
    } else {
        format_money(value)
    };
    Some(label)
}

/// Trustpilot score in `[0, 5]`, read from the leading number so that
/// "4.5/5" and "4.7 (1,234 reviews)" still count.
pub fn parse_rating(raw: &str) -> Option<f64> {
    if is_absent(raw) {
        return None;
    }
    leading_number(raw).filter(|score| (0.0..=5.0).contains(score))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    Excellent,
    Great,
    Good,
    Fair,
    Poor,
}

impl RatingBand {
    pub fn for_score(score: f64) -> Self {
        if score >= 4.5 {
            RatingBand::Excellent
        } else if score >= 4.0 {
            RatingBand::Great
        } else if score >= 3.5 {
            RatingBand::Good
        } else if score >= 2.5 {
            RatingBand::Fair
        } else {
            RatingBand::Poor
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            RatingBand::Excellent => "#00B67A",
            RatingBand::Great => "#73CF11",
            RatingBand::Good => "#FF8C00",
            RatingBand::Fair => "#FF6D2E",
            RatingBand::Poor => "#FF3722",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RatingBand::Excellent => "rating-excellent",
            RatingBand::Great => "rating-great",
            RatingBand::Good => "rating-good",
            RatingBand::Fair => "rating-fair",
            RatingBand::Poor => "rating-poor",
        }
    }
}

pub const FULL_STAR: char = '★';
pub const HALF_STAR: char = '⯪';
pub const EMPTY_STAR: char = '☆';

#[derive(Debug, Clone, PartialEq)]
pub struct RatingBadge {
    pub score: f64,
    pub full_stars: usize,
    pub half_star: bool,
    pub empty_stars: usize,
    pub band: RatingBand,
}

impl RatingBadge {
    pub fn from_score(score: f64) -> Self {
        let score = score.clamp(0.0, 5.0);
        let full_stars = score.floor() as usize;
        let half_star = score.fract() >= 0.5;
        let empty_stars = 5 - full_stars - usize::from(half_star);
        Self {
            score,
            full_stars,
            half_star,
            empty_stars,
            band: RatingBand::for_score(score),
        }
    }

    pub fn stars(&self) -> String {
        let mut stars = String::with_capacity(5 * FULL_STAR.len_utf8());
        stars.extend(std::iter::repeat(FULL_STAR).take(self.full_stars));
        if self.half_star {
            stars.push(HALF_STAR);
        }
        stars.extend(std::iter::repeat(EMPTY_STAR).take(self.empty_stars));
        stars
    }

    pub fn label(&self) -> String {
        format!("{:.1}", self.score)
    }
}

pub fn format_rating(raw: &str) -> Option<RatingBadge> {
    parse_rating(raw).map(RatingBadge::from_score)
}
