//! Daily almanac entries: everything shown for one Gregorian day.

use serde::Serialize;
use tracing::debug;

use crate::elements::{Effect, FiveElements, compute_traditional};
use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::locator::{TraditionalDate, locate, supported_span};
use crate::naming::{full_text, tibetan_month_name};
use crate::range::DateSpan;
use crate::types::Weekday;

/// Rows in the astrological table, one per digit place.
pub const TABLE_ROWS: usize = 6;

/// One row of the astrological table: digit `i` of each vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub fixed_weekday: i64,
    pub solar_lunar:   i64,
    /// The fixed day has five places; the last row leaves it empty.
    pub fixed_day:     Option<i64>,
    pub conjunction:   i64,
    /// Only the first two rows carry an effect.
    pub effect:        Option<Effect>,
}

/// The five elements laid out as a six-row table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AstrologicalTable {
    pub tibetan_date: String,
    #[serde(rename = "tableData")]
    pub rows:         [TableRow; TABLE_ROWS],
}

impl AstrologicalTable {
    pub fn new(tibetan_date: String, elements: &FiveElements) -> Self {
        let fixed_weekday = elements.fixed_weekday();
        let solar_lunar = elements.solar_lunar_asterism();
        let fixed_day = elements.fixed_day().digits();
        let conjunction = elements.conjunction();
        let effects = elements.effects();

        let rows = std::array::from_fn(|i| TableRow {
            fixed_weekday: fixed_weekday[i],
            solar_lunar:   solar_lunar[i],
            fixed_day:     fixed_day.get(i).copied(),
            conjunction:   conjunction[i],
            effect:        effects.and_then(|pair| pair.get(i).copied()),
        });

        Self { tibetan_date, rows }
    }
}

/// Everything the almanac shows for one Gregorian day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAlmanac {
    pub date:          GregorianDate,
    pub weekday:       Weekday,
    /// e.g. `2025年11月1日 周六`
    pub solar_text:    String,
    pub traditional:   TraditionalDate,
    /// e.g. `木蛇年 九月十一`
    pub tibetan_text:  String,
    pub tibetan_month: &'static str,
    pub elements:      FiveElements,
    pub table:         AstrologicalTable,
}

/// Builds the almanac entry of one day.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the day is outside the epoch table.
pub fn almanac(date: GregorianDate) -> Result<DailyAlmanac, CalendarError> {
    let traditional = locate(date)?;
    let elements = compute_traditional(&traditional);
    let tibetan_text = full_text(&traditional);

    Ok(DailyAlmanac {
        date,
        weekday: date.weekday(),
        solar_text: date.chinese(),
        traditional,
        table: AstrologicalTable::new(tibetan_text.clone(), &elements),
        tibetan_text,
        tibetan_month: tibetan_month_name(traditional.month()),
        elements,
    })
}

/// Builds one almanac entry per day of `span`.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` for the first end of the span the
/// epoch table does not cover.
pub fn almanac_span(span: &DateSpan) -> Result<Vec<DailyAlmanac>, CalendarError> {
    let supported = supported_span();
    if !span.is_within(&supported) {
        let date = if supported.contains(&span.start()) {
            span.end()
        } else {
            span.start()
        };
        return Err(CalendarError::OutOfRange {
            date,
            first: supported.start(),
            last: supported.end(),
        });
    }

    debug!(%span, days = span.len(), "building almanac");
    span.iter().map(almanac).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> GregorianDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_almanac_for_day() {
        let entry = almanac(date("2025-11-01")).unwrap();
        assert_eq!(entry.weekday, Weekday::Saturday);
        assert_eq!(entry.solar_text, "2025年11月1日 周六");
        assert_eq!(entry.tibetan_text, "木蛇年 九月十一");
        assert_eq!(entry.tibetan_month, "天降");
        assert_eq!(entry.traditional.to_string(), "2025-09-11");
        assert_eq!(entry.table.tibetan_date, entry.tibetan_text);
    }

    #[test]
    fn test_table_layout() {
        let entry = almanac(date("2025-11-01")).unwrap();
        let rows = &entry.table.rows;

        let column = |f: fn(&TableRow) -> i64| rows.iter().map(f).collect::<Vec<_>>();
        assert_eq!(column(|r| r.fixed_weekday), [0, 46, 51, 2, 29, 195]);
        assert_eq!(column(|r| r.solar_lunar), [22, 46, 6, 1, 15, 512]);
        assert_eq!(column(|r| r.conjunction), [9, 25, 3, 4, 60, 512]);

        let fixed_day: Vec<_> = rows.iter().map(|r| r.fixed_day).collect();
        assert_eq!(
            fixed_day,
            [Some(13), Some(38), Some(57), Some(3), Some(45), None]
        );

        let effects: Vec<_> = rows.iter().map(|r| r.effect).collect();
        assert_eq!(
            effects,
            [Some(Effect::Vanija), Some(Effect::Vishti), None, None, None, None]
        );
    }

    #[test]
    fn test_almanac_out_of_range() {
        let err = almanac(date("1951-01-07")).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_almanac_span() {
        let span: DateSpan = "2025-11-18/2025-11-21".parse().unwrap();
        let entries = almanac_span(&span).unwrap();
        assert_eq!(entries.len(), 4);

        let days: Vec<_> = entries
            .iter()
            .map(|e| (e.traditional.month(), e.traditional.day()))
            .collect();
        assert_eq!(days, [(9, 29), (9, 30), (9, 30), (10, 1)]);
    }

    #[test]
    fn test_almanac_span_out_of_range() {
        let tail: DateSpan = "2051-02-10/2051-02-12".parse().unwrap();
        match almanac_span(&tail) {
            Err(CalendarError::OutOfRange { date: d, .. }) => assert_eq!(d, date("2051-02-12")),
            other => panic!("expected out of range, got {other:?}"),
        }

        let head: DateSpan = "1951-01-01/1951-01-10".parse().unwrap();
        match almanac_span(&head) {
            Err(CalendarError::OutOfRange { date: d, .. }) => assert_eq!(d, date("1951-01-01")),
            other => panic!("expected out of range, got {other:?}"),
        }
    }

    #[test]
    fn test_serialized_field_names() {
        let entry = almanac(date("2025-11-01")).unwrap();
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["date"], "2025-11-01");
        assert_eq!(json["tibetanText"], "木蛇年 九月十一");
        assert_eq!(json["traditional"]["dayKind"], "regular");
        assert_eq!(json["elements"]["effect"][0], "商贾");
        assert_eq!(json["table"]["tableData"][0]["solarLunar"], 22);
        assert_eq!(json["table"]["tableData"][5]["fixedDay"], serde_json::Value::Null);
        assert_eq!(json["table"]["tableData"][2]["effect"], serde_json::Value::Null);
    }
}
