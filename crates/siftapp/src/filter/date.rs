use chrono::{DateTime, Datelike, Days, NaiveDate};

/// Relative date windows offered by the inquiry date select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateWindow {
    /// Same calendar day as the reference date.
    Today,
    /// On or after seven days before the reference date.
    Week,
    /// Same month and year as the reference date.
    Month,
}

impl DateWindow {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "today" => Some(Self::Today),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Today => date == today,
            Self::Week => today
                .checked_sub_days(Days::new(7))
                .is_none_or(|start| date >= start),
            Self::Month => date.year() == today.year() && date.month() == today.month(),
        }
    }
}

/// Parse an item date attribute: `YYYY-MM-DD` or RFC 3339.
pub fn parse_item_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_window_names() {
        assert_eq!(DateWindow::parse("today"), Some(DateWindow::Today));
        assert_eq!(DateWindow::parse("week"), Some(DateWindow::Week));
        assert_eq!(DateWindow::parse("month"), Some(DateWindow::Month));
        assert_eq!(DateWindow::parse("Month"), None);
        assert_eq!(DateWindow::Week.as_str(), "week");
    }

    #[test]
    fn today_window() {
        let today = date(2024, 5, 20);
        assert!(DateWindow::Today.contains(date(2024, 5, 20), today));
        assert!(!DateWindow::Today.contains(date(2024, 5, 19), today));
    }

    #[test]
    fn week_window_has_no_upper_bound() {
        let today = date(2024, 5, 20);
        assert!(DateWindow::Week.contains(date(2024, 5, 13), today));
        assert!(!DateWindow::Week.contains(date(2024, 5, 12), today));
        assert!(DateWindow::Week.contains(date(2024, 5, 25), today));
    }

    #[test]
    fn month_window_checks_year() {
        let today = date(2024, 5, 20);
        assert!(DateWindow::Month.contains(date(2024, 5, 1), today));
        assert!(!DateWindow::Month.contains(date(2023, 5, 20), today));
        assert!(!DateWindow::Month.contains(date(2024, 4, 30), today));
    }

    #[test]
    fn parses_plain_and_rfc3339_dates() {
        assert_eq!(parse_item_date("2024-05-18"), Some(date(2024, 5, 18)));
        assert_eq!(
            parse_item_date("2024-05-18T09:30:00+03:00"),
            Some(date(2024, 5, 18))
        );
        assert_eq!(parse_item_date("18/05/2024"), None);
    }
}
