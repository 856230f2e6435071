//! Named reporting windows and their resolution to concrete date ranges.

use core::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use salesdash_core::ValueObject;

use crate::error::{ReportError, ReportResult};

/// Relative time window selected by the dashboard user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "week")]
    Week,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[serde(rename = "year")]
    Year,
}

/// Label granularity of the sales-over-time buckets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BucketGranularity {
    /// `YYYY-MM-DD`
    Daily,
    /// `YYYY-MM`
    Monthly,
}

impl BucketGranularity {
    pub fn format(&self) -> &'static str {
        match self {
            BucketGranularity::Daily => "%Y-%m-%d",
            BucketGranularity::Monthly => "%Y-%m",
        }
    }

    pub fn bucket_key(&self, ts: DateTime<Utc>) -> String {
        ts.format(self.format()).to_string()
    }
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Week, Period::Month, Period::ThreeMonths, Period::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::ThreeMonths => "3months",
            Period::Year => "year",
        }
    }

    /// Resolve to `[start, now)`.
    ///
    /// Starts are at 00:00 UTC: Monday of the ISO week, the 1st of the month,
    /// the 1st of the month 90 days back, or January 1st.
    pub fn resolve(&self, now: DateTime<Utc>) -> DateRange {
        let today = now.date_naive();
        let start_date = match self {
            Period::Week => {
                let weekday = today.weekday().num_days_from_monday();
                today - Duration::days(weekday as i64)
            }
            Period::Month => first_of_month(today),
            Period::ThreeMonths => first_of_month((now - Duration::days(90)).date_naive()),
            Period::Year => NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
        };

        DateRange {
            start: Utc.from_utc_datetime(&start_date.and_time(NaiveTime::MIN)),
            end: now,
        }
    }

    pub fn granularity(&self) -> BucketGranularity {
        match self {
            Period::Week | Period::Month | Period::ThreeMonths => BucketGranularity::Daily,
            Period::Year => BucketGranularity::Monthly,
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

impl core::fmt::Display for Period {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "3months" => Ok(Period::ThreeMonths),
            "year" => Ok(Period::Year),
            other => Err(ReportError::InvalidPeriod(other.to_string())),
        }
    }
}

/// Half-open UTC range `[start, end)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts < self.end
    }
}

impl ValueObject for DateRange {}

/// Parse a period selector and resolve it against `now`.
pub fn resolve_range(period: &str, now: DateTime<Utc>) -> ReportResult<DateRange> {
    Ok(period.parse::<Period>()?.resolve(now))
}
