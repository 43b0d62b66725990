use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::DataIntegrityError;

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Calendar date of a quotation, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuoteDate(Date);

impl QuoteDate {
    pub fn parse(input: &str) -> Result<Self, DataIntegrityError> {
        Date::parse(input, DATE_FORMAT)
            .map(Self)
            .map_err(|_| DataIntegrityError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn today() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    /// Whole calendar days from `earlier` to `self`; negative when `earlier` is later.
    pub fn days_since(self, earlier: QuoteDate) -> i64 {
        (self.0 - earlier.0).whole_days()
    }

    pub fn as_date(self) -> Date {
        self.0
    }
}

impl From<Date> for QuoteDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Display for QuoteDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let formatted = self
            .0
            .format(DATE_FORMAT)
            .expect("calendar date must be formattable");
        f.write_str(&formatted)
    }
}

impl Serialize for QuoteDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for QuoteDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// One (date, price) quotation sample for a fund.
///
/// The price invariant (positive, finite) is enforced here, at the fetch
/// boundary, so the downstream arithmetic never has to re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    date: QuoteDate,
    price: f64,
}

impl Observation {
    pub fn new(date: QuoteDate, price: f64) -> Result<Self, DataIntegrityError> {
        if !price.is_finite() {
            return Err(DataIntegrityError::NonFinitePrice {
                date: date.to_string(),
            });
        }
        if price <= 0.0 {
            return Err(DataIntegrityError::NonPositivePrice {
                date: date.to_string(),
                price,
            });
        }

        Ok(Self { date, price })
    }

    pub fn date(&self) -> QuoteDate {
        self.date
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Ordered sequence of observations for one fund and one time window.
///
/// Construction sorts ascending by date regardless of the direction the
/// provider delivered, so the engines can rely on order without assuming it.
/// Duplicate dates are kept; the sort is stable, so equal-dated points retain
/// their received relative order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationSeries(Vec<Observation>);

impl ObservationSeries {
    pub fn new(mut points: Vec<Observation>) -> Self {
        points.sort_by_key(Observation::date);
        Self(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.0.last()
    }

    pub fn as_slice(&self) -> &[Observation] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.0.iter()
    }
}
