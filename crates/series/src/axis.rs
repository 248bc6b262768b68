use chrono::{DateTime, Duration, Local, Utc};
use plot_core::Timeline;

/// Date-label granularity for the time axis, chosen from the covered span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisFormat {
    /// Less than one whole day: `14:05`.
    HourMinute,
    /// One to 365 whole days: `Mar 04`.
    MonthDay,
    /// More than 365 whole days: `2024 Mar 04`.
    YearMonthDay,
}

impl AxisFormat {
    /// Select the tier from whole days elapsed (partial days are dropped).
    pub fn for_span(span: Duration) -> Self {
        match span.num_days() {
            d if d < 1 => Self::HourMinute,
            d if d <= 365 => Self::MonthDay,
            _ => Self::YearMonthDay,
        }
    }

    pub fn for_timeline(timeline: &Timeline) -> Self {
        Self::for_span(timeline.span())
    }

    /// `strftime` pattern for this tier.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::HourMinute => "%H:%M",
            Self::MonthDay => "%b %d",
            Self::YearMonthDay => "%Y %b %d",
        }
    }

    /// Format a timestamp as an axis label in local time.
    pub fn label(self, at: &DateTime<Utc>) -> String {
        at.with_timezone(&Local).format(self.pattern()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_by_span() {
        assert_eq!(AxisFormat::for_span(Duration::seconds(500)), AxisFormat::HourMinute);
        assert_eq!(AxisFormat::for_span(Duration::days(40)), AxisFormat::MonthDay);
        assert_eq!(AxisFormat::for_span(Duration::days(800)), AxisFormat::YearMonthDay);
    }

    #[test]
    fn tier_boundaries_use_whole_days() {
        assert_eq!(AxisFormat::for_span(Duration::seconds(86_399)), AxisFormat::HourMinute);
        assert_eq!(AxisFormat::for_span(Duration::days(1)), AxisFormat::MonthDay);
        assert_eq!(
            AxisFormat::for_span(Duration::days(365) + Duration::hours(23)),
            AxisFormat::MonthDay
        );
        assert_eq!(AxisFormat::for_span(Duration::days(366)), AxisFormat::YearMonthDay);
    }

    #[test]
    fn year_tier_label_includes_year() {
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let label = AxisFormat::YearMonthDay.label(&at);
        assert!(label.starts_with("2023"), "{label}");
    }

    #[test]
    fn empty_timeline_is_hour_minute() {
        assert_eq!(AxisFormat::for_timeline(&Timeline::default()), AxisFormat::HourMinute);
    }
}
