//! Period labels
//!
//! `"2016"` stays `"2016"`, `"2022-03"` becomes `"Mar 2022"`, and a missing
//! end reads `"Present"`. Any other shape is shown as written.

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::schema::Period;

/// Label for an ongoing period.
pub const PRESENT: &str = "Present";

/// Separator between start and end.
pub const PERIOD_SEPARATOR: &str = " — ";

/// How month names are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthStyle {
    /// `Mar 2022`
    #[default]
    Short,
    /// `March 2022`
    Long,
}

/// Formats one end of a period.
pub fn format_point(raw: &str, style: MonthStyle) -> String {
    if is_year(raw) {
        return raw.to_string();
    }
    match year_month(raw) {
        Some((year, month)) => {
            let name = month.name();
            let name = match style {
                MonthStyle::Short => &name[..3],
                MonthStyle::Long => name,
            };
            format!("{} {}", name, year)
        }
        None => raw.to_string(),
    }
}

/// Formats a whole period as `"{start} — {end or Present}"`.
pub fn format_period(period: &Period, style: MonthStyle) -> String {
    let end = match &period.end {
        Some(end) => format_point(end, style),
        None => PRESENT.to_string(),
    };
    format!("{}{}{}", format_point(&period.start, style), PERIOD_SEPARATOR, end)
}

fn is_year(raw: &str) -> bool {
    raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit())
}

fn year_month(raw: &str) -> Option<(&str, Month)> {
    let (year, month) = raw.split_once('-')?;
    if !is_year(year) || month.len() != 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month: u8 = month.parse().ok()?;
    Month::try_from(month).ok().map(|m| (year, m))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(start: &str, end: Option<&str>) -> Period {
        Period {
            start: start.into(),
            end: end.map(Into::into),
        }
    }

    #[test]
    fn test_year_only_ongoing() {
        assert_eq!(
            format_period(&period("2016", None), MonthStyle::Short),
            "2016 — Present"
        );
    }

    #[test]
    fn test_year_month_is_localized() {
        let label = format_period(&period("2022-03", Some("2023-11")), MonthStyle::Short);
        assert_eq!(label, "Mar 2022 — Nov 2023");
        assert!(!label.contains("2022-03"));
    }

    #[test]
    fn test_long_month_names() {
        assert_eq!(format_point("2022-03", MonthStyle::Long), "March 2022");
        assert_eq!(format_point("2023-09", MonthStyle::Long), "September 2023");
    }

    #[test]
    fn test_unrecognized_shapes_pass_through() {
        assert_eq!(format_point("2022-13", MonthStyle::Short), "2022-13");
        assert_eq!(format_point("2022-3", MonthStyle::Short), "2022-3");
        assert_eq!(format_point("Spring 2020", MonthStyle::Short), "Spring 2020");
        assert_eq!(format_point("", MonthStyle::Short), "");
    }

    #[test]
    fn test_month_style_serde_names() {
        assert_eq!(serde_json::to_string(&MonthStyle::Long).unwrap(), "\"long\"");
        let style: MonthStyle = serde_json::from_str("\"short\"").unwrap();
        assert_eq!(style, MonthStyle::Short);
    }
}
