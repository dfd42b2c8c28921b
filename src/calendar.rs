use crate::error::{ScheduleError, ScheduleResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashSet;

/// Parse a short weekday name (Mon..Sun) into a chrono weekday.
pub fn parse_weekday(name: &str) -> ScheduleResult<Weekday> {
    match name {
        "Mon" => Ok(Weekday::Mon),
        "Tue" => Ok(Weekday::Tue),
        "Wed" => Ok(Weekday::Wed),
        "Thu" => Ok(Weekday::Thu),
        "Fri" => Ok(Weekday::Fri),
        "Sat" => Ok(Weekday::Sat),
        "Sun" => Ok(Weekday::Sun),
        other => Err(ScheduleError::UnknownWeekday(other.to_string())),
    }
}

/// Display label with the weekday abbreviation, e.g. "Mon 01/19".
pub fn date_label(date: NaiveDate) -> String {
    date.format("%a %m/%d").to_string()
}

/// Display label without the weekday abbreviation, e.g. "01/19".
pub fn short_label(date: NaiveDate) -> String {
    date.format("%m/%d").to_string()
}

/// The weekly class-meeting pattern for a semester.
pub struct ClassCalendar {
    class_days: HashSet<Weekday>,
    single_day: bool,
}

impl ClassCalendar {
    pub fn from_names(names: &[String]) -> ScheduleResult<Self> {
        let mut class_days = HashSet::with_capacity(names.len());
        for name in names {
            class_days.insert(parse_weekday(name)?);
        }
        let single_day = class_days.len() == 1;
        Ok(Self {
            class_days,
            single_day,
        })
    }

    /// True when the class meets on exactly one weekday per week.
    pub fn single_class_day(&self) -> bool {
        self.single_day
    }

    pub fn is_class_day(&self, date: NaiveDate) -> bool {
        self.class_days.contains(&date.weekday())
    }

    /// All class-meeting dates in [start, end], in calendar order.
    pub fn class_days_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ScheduleResult<Vec<NaiveDate>> {
        if start > end {
            return Err(ScheduleError::InvalidRange { start, end });
        }
        let mut dates = Vec::new();
        let mut current = start;
        while current <= end {
            if self.is_class_day(current) {
                dates.push(current);
            }
            current = current + Duration::days(1);
        }
        Ok(dates)
    }
}
