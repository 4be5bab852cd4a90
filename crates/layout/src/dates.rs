use crate::labels::Locale;
use chrono::{DateTime, Datelike, Utc};

/// `17 October 2026` / `17 octobre 2026`.
pub fn long_date(date: &DateTime<Utc>, locale: Locale) -> String {
    format!(
        "{} {} {}",
        date.day(),
        locale.month_name(date.month0()),
        date.year()
    )
}
