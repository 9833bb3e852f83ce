use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::PricePoint;
use crate::error::{ChartError, ChartResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Price as delivered on the wire: either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Number(f64),
    Text(String),
}

/// One raw series row before temporal normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPricePoint {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Price")]
    pub price: RawPrice,
}

/// A detected structural break, advisory and purely visual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawChangePoint {
    pub date: String,
}

/// The event currently selected in the surrounding list UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedEvent {
    pub event_id: i64,
    pub event_date: String,
    pub event_name: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub expected_impact: String,
    #[serde(default)]
    pub description: String,
}

/// Coloring bucket recognized from an event's open `expected_impact` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpectedImpact {
    Increase,
    Decrease,
    Neutral,
}

impl ExpectedImpact {
    /// Any label other than `increase`/`decrease` lands in the neutral bucket.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "increase" => Self::Increase,
            "decrease" => Self::Decrease,
            _ => Self::Neutral,
        }
    }
}

/// Parses a `YYYY-MM-DD` date string.
pub fn parse_date(value: &str) -> ChartResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ChartError::MalformedDate {
        value: value.to_owned(),
    })
}

/// Parses a wire price into a finite, non-negative `f64`.
///
/// Textual prices go through `Decimal` so values like `"63.76"` survive
/// without binary-float parsing quirks.
pub fn parse_price(value: &RawPrice) -> ChartResult<f64> {
    let malformed = || ChartError::MalformedPrice {
        value: match value {
            RawPrice::Number(number) => number.to_string(),
            RawPrice::Text(text) => text.clone(),
        },
    };

    let price = match value {
        RawPrice::Number(number) => *number,
        RawPrice::Text(text) => Decimal::from_str(text.trim())
            .ok()
            .and_then(|decimal| decimal.to_f64())
            .ok_or_else(malformed)?,
    };

    if !price.is_finite() || price < 0.0 {
        return Err(malformed());
    }
    Ok(price)
}

/// Converts a calendar date to unix seconds at midnight UTC.
#[must_use]
pub fn date_to_unix_seconds(date: NaiveDate) -> f64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp() as f64
}

/// Normalized price series with an exact-date lookup index.
///
/// Points keep the input order; the engine never re-sorts. On duplicate
/// dates the index keeps the first occurrence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedSeries {
    points: Vec<PricePoint>,
    index: IndexMap<NaiveDate, usize>,
    dropped: usize,
}

impl ParsedSeries {
    /// Normalizes raw rows into `PricePoint`s.
    ///
    /// Rows with a malformed date or price are dropped with a warning; the
    /// same policy applies to both failure kinds so hosts see one behavior.
    #[must_use]
    pub fn parse(raw: &[RawPricePoint]) -> Self {
        let mut points = Vec::with_capacity(raw.len());
        let mut index = IndexMap::with_capacity(raw.len());
        let mut dropped = 0usize;

        for row in raw {
            let date = match parse_date(&row.date) {
                Ok(date) => date,
                Err(error) => {
                    warn!(date = %row.date, %error, "dropping price point with malformed date");
                    dropped += 1;
                    continue;
                }
            };
            let price = match parse_price(&row.price) {
                Ok(price) => price,
                Err(error) => {
                    warn!(date = %row.date, %error, "dropping price point with malformed price");
                    dropped += 1;
                    continue;
                }
            };

            index.entry(date).or_insert(points.len());
            points.push(PricePoint {
                date,
                time: date_to_unix_seconds(date),
                price,
            });
        }

        Self {
            points,
            index,
            dropped,
        }
    }

    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of raw rows dropped by the uniform parse-failure policy.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Exact-date lookup; `None` when no point carries that date.
    #[must_use]
    pub fn lookup(&self, date: NaiveDate) -> Option<&PricePoint> {
        self.index.get(&date).map(|position| &self.points[*position])
    }

    /// Largest observed price, `None` for an empty series.
    #[must_use]
    pub fn max_price(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|point| point.price)
            .max_by(f64::total_cmp)
    }

    /// `(min, max)` observed time, `None` for an empty series.
    #[must_use]
    pub fn time_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter().map(|point| point.time);
        let first = iter.next()?;
        let (mut min, mut max) = (first, first);
        for time in iter {
            min = min.min(time);
            max = max.max(time);
        }
        Some((min, max))
    }
}
