//! Count-up parsing for hero statistics
//!
//! A display value such as `"€0.5M+"` splits into an optional currency
//! prefix, the first decimal number, and whatever follows it. The number
//! is always a whole run of digits, so the suffix never starts with one.
//! The prefix may end in whitespace (`"€ 5M"`). Values without a number,
//! or with text other than a currency glyph before the number, are shown
//! as static text and never animated.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Glyphs accepted in front of an animated number.
pub const CURRENCY_GLYPHS: &[char] = &['€', '$', '£'];

static DISPLAY_VALUE: OnceLock<Regex> = OnceLock::new();

fn display_value_pattern() -> &'static Regex {
    DISPLAY_VALUE.get_or_init(|| {
        Regex::new(
            r"^(?P<lead>.*?)(?P<integer>\d{1,3}(?:,\d{3})+|\d+)(?:\.(?P<fraction>\d+))?(?P<suffix>\D.*|)$",
        )
        .expect("display value pattern compiles")
    })
}

/// How a hero statistic is shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StatDisplay {
    /// Animated from zero to `target`.
    CountUp(CountUp),
    /// Shown verbatim.
    Static { text: String },
}

impl StatDisplay {
    pub fn is_animated(&self) -> bool {
        matches!(self, StatDisplay::CountUp(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountUp {
    pub prefix: String,
    pub target: f64,
    /// Digits after the decimal point in the source value.
    pub decimals: usize,
    /// Whether the source value used thousands separators.
    pub grouped: bool,
    pub suffix: String,
}

impl CountUp {
    /// Formats an intermediate animation frame the way the source value
    /// was written. `format(target)` reproduces the source value.
    pub fn format(&self, current: f64) -> String {
        let number = format!("{:.*}", self.decimals, current);
        let number = if self.grouped {
            group_thousands(&number)
        } else {
            number
        };
        format!("{}{}{}", self.prefix, number, self.suffix)
    }
}

/// Splits a display value into its animatable parts.
pub fn parse_display_value(value: &str) -> StatDisplay {
    let fallback = || StatDisplay::Static {
        text: value.to_string(),
    };

    let Some(caps) = display_value_pattern().captures(value) else {
        return fallback();
    };

    let lead = caps.name("lead").map_or("", |m| m.as_str());
    if !is_currency_prefix(lead) {
        return fallback();
    }

    let integer = caps.name("integer").map_or("", |m| m.as_str());
    let fraction = caps.name("fraction").map(|m| m.as_str());
    let grouped = integer.contains(',');

    let mut digits = integer.replace(',', "");
    if let Some(fraction) = fraction {
        digits.push('.');
        digits.push_str(fraction);
    }
    let Ok(target) = digits.parse::<f64>() else {
        return fallback();
    };

    StatDisplay::CountUp(CountUp {
        prefix: lead.to_string(),
        target,
        decimals: fraction.map_or(0, str::len),
        grouped,
        suffix: caps.name("suffix").map_or("", |m| m.as_str()).to_string(),
    })
}

/// Empty, or currency glyphs optionally followed by whitespace.
fn is_currency_prefix(lead: &str) -> bool {
    let glyphs = lead.trim_end();
    (lead.is_empty() || !glyphs.is_empty()) && glyphs.chars().all(|c| CURRENCY_GLYPHS.contains(&c))
}

fn group_thousands(number: &str) -> String {
    let (integer, rest) = match number.find('.') {
        Some(dot) => number.split_at(dot),
        None => (number, ""),
    };
    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push_str(rest);
    grouped
}
