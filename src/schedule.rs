use crate::calendar::{ClassCalendar, date_label, short_label};
use crate::config::SemesterConfig;
use crate::content::ContentTable;
use crate::error::{ScheduleError, ScheduleResult};
use chrono::NaiveDate;
use polars::prelude::PlSmallStr;
use polars::prelude::*;
use std::collections::HashMap;

/// Why an enumerated date carries no lecture number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialKind {
    Break(String),
    Midterm,
    FinalExam,
    Holiday(String),
}

impl SpecialKind {
    /// The descriptive text shown in place of a lecture topic.
    pub fn label(&self) -> &str {
        match self {
            SpecialKind::Break(name) => name,
            SpecialKind::Midterm => "Midterm Exam",
            SpecialKind::FinalExam => "Final Exam",
            SpecialKind::Holiday(name) => name,
        }
    }
}

/// One rendered line of the schedule table. `lecture` is None exactly when
/// the date is a special date (break, exam, or holiday).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub date: String,
    pub lecture: Option<i64>,
    pub topics: String,
    pub references: String,
    pub due: String,
}

impl ScheduleRow {
    pub fn from_dataframe_row(df: &DataFrame, row_idx: usize) -> ScheduleResult<Self> {
        let date = df
            .column("Date")?
            .str()?
            .get(row_idx)
            .unwrap_or("")
            .to_string();
        let lecture = df.column("Lecture")?.i64()?.get(row_idx);
        let topics = df
            .column("Topics")?
            .str()?
            .get(row_idx)
            .unwrap_or("")
            .to_string();
        let references = df
            .column("References")?
            .str()?
            .get(row_idx)
            .unwrap_or("")
            .to_string();
        let due = df
            .column("Due")?
            .str()?
            .get(row_idx)
            .unwrap_or("")
            .to_string();
        Ok(Self {
            date,
            lecture,
            topics,
            references,
            due,
        })
    }
}

#[derive(Debug)]
pub struct Schedule {
    df: DataFrame,
}

impl Schedule {
    /// Build the full per-date schedule table for one semester: enumerate the
    /// class dates, set aside the special dates, number the remaining dates
    /// as lectures 1..N, and attach the authored lecture content.
    pub fn build(config: &SemesterConfig, content: &ContentTable) -> ScheduleResult<Self> {
        let calendar = ClassCalendar::from_names(&config.class_days)?;

        let mut dates = calendar.class_days_in_range(config.first_class, config.last_class)?;
        // The final exam sits beyond the last class day.
        dates.push(config.final_exam);

        let specials = Self::resolve_specials(config, &calendar, &dates)?;

        let strip_weekday = calendar.single_class_day();
        let height = dates.len();
        let mut date_vals: Vec<String> = Vec::with_capacity(height);
        let mut lecture_vals: Vec<Option<i64>> = Vec::with_capacity(height);
        let mut topic_vals: Vec<Option<String>> = Vec::with_capacity(height);
        let mut reference_vals: Vec<Option<String>> = Vec::with_capacity(height);
        let mut due_vals: Vec<Option<String>> = Vec::with_capacity(height);

        let mut lecture_no: i64 = 0;
        for day in &dates {
            date_vals.push(if strip_weekday {
                short_label(*day)
            } else {
                date_label(*day)
            });
            match specials.get(day) {
                Some(kind) => {
                    lecture_vals.push(None);
                    topic_vals.push(Some(kind.label().to_string()));
                    reference_vals.push(None);
                    due_vals.push(None);
                }
                None => {
                    lecture_no += 1;
                    lecture_vals.push(Some(lecture_no));
                    match content.get(lecture_no as u32) {
                        Some(entry) => {
                            topic_vals.push(Some(entry.topic.clone()));
                            reference_vals.push(Some(entry.reference.clone()));
                            due_vals.push(Some(entry.due.clone()));
                        }
                        // No authored content for this lecture yet; leave it blank.
                        None => {
                            topic_vals.push(None);
                            reference_vals.push(None);
                            due_vals.push(None);
                        }
                    }
                }
            }
        }

        let df = DataFrame::new(vec![
            Series::new(PlSmallStr::from_static("Date"), date_vals).into_column(),
            Series::new(PlSmallStr::from_static("Lecture"), lecture_vals).into_column(),
            Series::new(PlSmallStr::from_static("Topics"), topic_vals).into_column(),
            Series::new(PlSmallStr::from_static("References"), reference_vals).into_column(),
            Series::new(PlSmallStr::from_static("Due"), due_vals).into_column(),
        ])?;

        // Lecture stays nullable; the string columns render as empty cells.
        let df = df
            .lazy()
            .with_columns([
                col("Topics").fill_null(lit("")),
                col("References").fill_null(lit("")),
                col("Due").fill_null(lit("")),
            ])
            .collect()?;

        Ok(Self { df })
    }

    /// Tag every date that is excluded from lecture numbering, keyed by the
    /// date itself rather than its position in the sequence.
    fn resolve_specials(
        config: &SemesterConfig,
        calendar: &ClassCalendar,
        dates: &[NaiveDate],
    ) -> ScheduleResult<HashMap<NaiveDate, SpecialKind>> {
        let mut specials = HashMap::new();

        for day in calendar.class_days_in_range(config.break_start, config.break_end)? {
            specials.insert(day, SpecialKind::Break(config.break_name.clone()));
        }

        for holiday in &config.holidays {
            if !dates.contains(&holiday.date) {
                return Err(ScheduleError::DateNotFound {
                    label: date_label(holiday.date),
                    context: format!("holiday '{}' date", holiday.name),
                });
            }
            specials.insert(holiday.date, SpecialKind::Holiday(holiday.name.clone()));
        }

        let midterm = dates.get(config.midterm_session).copied().ok_or_else(|| {
            ScheduleError::DateNotFound {
                label: config.midterm_session.to_string(),
                context: "midterm session offset".to_string(),
            }
        })?;
        specials.insert(midterm, SpecialKind::Midterm);

        specials.insert(config.final_exam, SpecialKind::FinalExam);

        Ok(specials)
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// The schedule as plain row records, in calendar order.
    pub fn rows(&self) -> ScheduleResult<Vec<ScheduleRow>> {
        let mut rows = Vec::with_capacity(self.df.height());
        for row_idx in 0..self.df.height() {
            rows.push(ScheduleRow::from_dataframe_row(&self.df, row_idx)?);
        }
        Ok(rows)
    }

    /// Number of numbered lecture sessions.
    pub fn lecture_count(&self) -> ScheduleResult<usize> {
        let lectures = self.df.column("Lecture")?.i64()?;
        Ok(lectures.into_iter().flatten().count())
    }
}
