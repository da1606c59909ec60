use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};

/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` and bare dates.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(value) = DateTime::parse_from_rfc3339(raw) {
        return Some(value.with_timezone(&Utc));
    }
    if let Ok(value) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(value.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|value| value.and_utc())
}

pub fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|v| v.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Date window applied to task and leave lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    ThisWeek,
    ThisMonth,
}

impl DateFilter {
    pub const ALL: [DateFilter; 4] = [
        DateFilter::All,
        DateFilter::Today,
        DateFilter::ThisWeek,
        DateFilter::ThisMonth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DateFilter::All => "All",
            DateFilter::Today => "Today",
            DateFilter::ThisWeek => "This Week",
            DateFilter::ThisMonth => "This Month",
        }
    }

    /// Weeks start on Sunday. Missing dates only pass `All`.
    pub fn matches(&self, value: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        let today = now.date_naive();
        let Some(value) = value else {
            return *self == DateFilter::All;
        };
        match self {
            DateFilter::All => true,
            DateFilter::Today => value.date_naive() == today,
            DateFilter::ThisWeek => {
                let offset = Duration::days(i64::from(today.weekday().num_days_from_sunday()));
                let start = (today - offset).and_time(NaiveTime::MIN).and_utc();
                value >= start
            }
            DateFilter::ThisMonth => {
                value.year() == today.year() && value.month() == today.month()
            }
        }
    }
}
