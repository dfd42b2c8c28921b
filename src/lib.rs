pub mod calendar;
pub mod config;
pub mod content;
pub mod error;
pub mod latex;
pub mod schedule;

pub use calendar::ClassCalendar;
pub use config::{Holiday, Semester, SemesterConfig};
pub use content::{ContentTable, LectureContent};
pub use error::{ScheduleError, ScheduleResult};
pub use schedule::{Schedule, ScheduleRow, SpecialKind};
