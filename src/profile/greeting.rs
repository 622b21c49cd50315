//! Time-of-day greeting and the live clock lines.

use chrono::{DateTime, Offset, TimeZone, Timelike};

/// Greeting for a 24-hour clock hour.
///
/// Late night (22:00-04:59) also gets "Good evening"; there is no separate
/// night greeting.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn welcome_line(hour: u32) -> String {
    format!("{}! Welcome to my profile.", greeting_for_hour(hour))
}

/// Rendered clock panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockText {
    /// "Monday, March 3, 2025"
    pub date: String,
    /// "02:05:09 PM (14:05:09)"
    pub time: String,
    /// "UTC+05:30"
    pub offset: String,
    pub greeting: String,
}

impl ClockText {
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            date: now.format("%A, %B %-d, %Y").to_string(),
            time: format!("{} ({})", now.format("%I:%M:%S %p"), now.format("%H:%M:%S")),
            offset: utc_offset(now.offset().fix().local_minus_utc()),
            greeting: welcome_line(now.hour()),
        }
    }
}

/// Format an offset in seconds east of UTC as `UTC±hh:mm`.
pub fn utc_offset(seconds_east: i32) -> String {
    let sign = if seconds_east >= 0 { '+' } else { '-' };
    let minutes = seconds_east.unsigned_abs() / 60;
    format!("UTC{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

/// "Today's Date: March 3, 2025".
pub fn today_line<Tz: TimeZone>(today: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Today's Date: {}", today.format("%B %-d, %Y"))
}

/// Footer line with the given date.
pub fn footer_line<Tz: TimeZone>(today: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "Profile Slideshow | Last updated: {}",
        today.format("%B %-d, %Y")
    )
}
