use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Semester {
    Fall,
    Spring,
}

impl Semester {
    /// The authored parameters for this semester of the current academic year.
    pub fn config(self) -> SemesterConfig {
        match self {
            Semester::Fall => SemesterConfig::fall_2025(),
            Semester::Spring => SemesterConfig::spring_2026(),
        }
    }
}

/// A named single-date holiday on which class does not meet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// Everything that defines one semester's meeting pattern: the class-day
/// window, the weekly meeting days, and the dates reserved for the break,
/// the exams, and additional holidays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterConfig {
    pub semester: Semester,
    pub first_class: NaiveDate,
    pub last_class: NaiveDate,
    pub class_days: Vec<String>,
    pub break_start: NaiveDate,
    pub break_end: NaiveDate,
    pub break_name: String,
    /// Zero-based offset into the full class-date sequence.
    pub midterm_session: usize,
    pub final_exam: NaiveDate,
    pub holidays: Vec<Holiday>,
}

impl SemesterConfig {
    pub fn fall_2025() -> Self {
        Self {
            semester: Semester::Fall,
            first_class: date(2025, 8, 23),
            last_class: date(2025, 12, 12),
            class_days: vec!["Mon".to_string()],
            break_start: date(2025, 11, 24),
            break_end: date(2025, 11, 30),
            break_name: "Fall Recess".to_string(),
            midterm_session: 9,
            final_exam: date(2025, 12, 15),
            holidays: vec![Holiday::new(date(2025, 9, 1), "Labor Day")],
        }
    }

    pub fn spring_2026() -> Self {
        Self {
            semester: Semester::Spring,
            first_class: date(2026, 1, 17),
            last_class: date(2026, 5, 8),
            class_days: vec!["Mon".to_string()],
            break_start: date(2026, 3, 30),
            break_end: date(2026, 4, 5),
            break_name: "Spring Recess".to_string(),
            midterm_session: 9,
            final_exam: date(2026, 5, 11),
            holidays: vec![Holiday::new(date(2026, 1, 19), "MLK Day")],
        }
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
