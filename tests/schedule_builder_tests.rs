use chrono::NaiveDate;
use syllabus_tool::{
    ContentTable, Holiday, Schedule, ScheduleError, Semester, SemesterConfig,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn content_with(entries: &[(u32, &str, &str)]) -> ContentTable {
    let mut content = ContentTable::new();
    for (lecture, topic, reference) in entries {
        content.insert(*lecture, topic, reference);
    }
    content
}

/// A short Tue/Thu term used to exercise multi-weekday behavior:
/// 8 class dates in January 2026 plus a final on Feb 3.
fn two_day_term() -> SemesterConfig {
    SemesterConfig {
        semester: Semester::Spring,
        first_class: d(2026, 1, 6),
        last_class: d(2026, 1, 29),
        class_days: vec!["Tue".to_string(), "Thu".to_string()],
        break_start: d(2026, 1, 13),
        break_end: d(2026, 1, 15),
        break_name: "Winter Break".to_string(),
        midterm_session: 4,
        final_exam: d(2026, 2, 3),
        holidays: vec![Holiday::new(d(2026, 1, 6), "New Year Holiday")],
    }
}

#[test]
fn spring_semester_has_thirteen_lectures() {
    let schedule = Schedule::build(&Semester::Spring.config(), &ContentTable::new()).unwrap();
    // 16 Mondays + appended final, minus MLK Day, midterm, recess, and final.
    assert_eq!(schedule.dataframe().height(), 17);
    assert_eq!(schedule.lecture_count().unwrap(), 13);
}

#[test]
fn fall_semester_has_thirteen_lectures() {
    let schedule = Schedule::build(&Semester::Fall.config(), &ContentTable::new()).unwrap();
    assert_eq!(schedule.dataframe().height(), 17);
    assert_eq!(schedule.lecture_count().unwrap(), 13);
}

#[test]
fn lecture_numbers_are_contiguous_and_increasing() {
    let schedule = Schedule::build(&Semester::Spring.config(), &ContentTable::new()).unwrap();
    let numbers: Vec<i64> = schedule
        .rows()
        .unwrap()
        .iter()
        .filter_map(|row| row.lecture)
        .collect();
    let expected: Vec<i64> = (1..=13).collect();
    assert_eq!(numbers, expected);
}

#[test]
fn special_dates_carry_no_lecture_number() {
    let schedule = Schedule::build(&Semester::Spring.config(), &ContentTable::new()).unwrap();
    let rows = schedule.rows().unwrap();

    // MLK Day is the first enumerated Monday.
    assert_eq!(rows[0].date, "01/19");
    assert_eq!(rows[0].lecture, None);
    assert_eq!(rows[0].topics, "MLK Day");

    // Midterm sits at session offset 9.
    assert_eq!(rows[9].date, "03/23");
    assert_eq!(rows[9].lecture, None);
    assert_eq!(rows[9].topics, "Midterm Exam");

    assert_eq!(rows[10].date, "03/30");
    assert_eq!(rows[10].topics, "Spring Recess");

    let last = rows.last().unwrap();
    assert_eq!(last.date, "05/11");
    assert_eq!(last.lecture, None);
    assert_eq!(last.topics, "Final Exam");

    // Every other row is a numbered lecture.
    for row in &rows {
        let is_special = matches!(
            row.topics.as_str(),
            "MLK Day" | "Midterm Exam" | "Spring Recess" | "Final Exam"
        );
        assert_eq!(row.lecture.is_none(), is_special, "row {}", row.date);
    }
}

#[test]
fn single_weekday_labels_drop_the_weekday_prefix() {
    let schedule = Schedule::build(&Semester::Spring.config(), &ContentTable::new()).unwrap();
    for row in schedule.rows().unwrap() {
        assert!(
            !row.date.starts_with("Mon "),
            "label '{}' kept its weekday prefix",
            row.date
        );
    }
}

#[test]
fn multi_weekday_labels_keep_the_weekday_prefix() {
    let schedule = Schedule::build(&two_day_term(), &ContentTable::new()).unwrap();
    let rows = schedule.rows().unwrap();
    assert_eq!(rows[0].date, "Tue 01/06");
    assert_eq!(rows[1].date, "Thu 01/08");
}

#[test]
fn whole_break_range_is_excluded_from_numbering() {
    let schedule = Schedule::build(&two_day_term(), &ContentTable::new()).unwrap();
    let rows = schedule.rows().unwrap();

    // 9 dates total; holiday, two break days, midterm, and final leave 4 lectures.
    assert_eq!(rows.len(), 9);
    assert_eq!(schedule.lecture_count().unwrap(), 4);

    let break_rows: Vec<_> = rows
        .iter()
        .filter(|row| row.topics == "Winter Break")
        .collect();
    assert_eq!(break_rows.len(), 2);
    assert_eq!(break_rows[0].date, "Tue 01/13");
    assert_eq!(break_rows[1].date, "Thu 01/15");
    for row in break_rows {
        assert_eq!(row.lecture, None);
    }
}

#[test]
fn lecture_content_is_attached_by_number() {
    let content = content_with(&[
        (1, "Consumer Preferences and Choice", "Ch. 3-4"),
        (2, "Demand Analysis and Consumer Welfare", "Ch. 5-6"),
    ]);
    let schedule = Schedule::build(&Semester::Spring.config(), &content).unwrap();
    let rows = schedule.rows().unwrap();

    assert_eq!(rows[1].lecture, Some(1));
    assert_eq!(rows[1].topics, "Consumer Preferences and Choice");
    assert_eq!(rows[1].references, "Ch. 3-4");
    assert_eq!(rows[2].lecture, Some(2));
    assert_eq!(rows[2].topics, "Demand Analysis and Consumer Welfare");
}

#[test]
fn lectures_without_content_render_blank() {
    let content = content_with(&[(1, "Only Lecture", "Ch. 1")]);
    let schedule = Schedule::build(&Semester::Spring.config(), &content).unwrap();
    let rows = schedule.rows().unwrap();

    // Lecture 2 has no authored entry; its fields are empty, not null.
    assert_eq!(rows[2].lecture, Some(2));
    assert_eq!(rows[2].topics, "");
    assert_eq!(rows[2].references, "");
    assert_eq!(rows[2].due, "");
}

#[test]
fn due_markers_land_on_their_lecture() {
    let mut content = content_with(&[(3, "Production", "Ch. 9-11")]);
    content.set_due(3, "PS 1");
    let schedule = Schedule::build(&Semester::Spring.config(), &content).unwrap();
    let rows = schedule.rows().unwrap();

    let lecture3 = rows.iter().find(|r| r.lecture == Some(3)).unwrap();
    assert_eq!(lecture3.due, "PS 1");
}

#[test]
fn holiday_outside_enumerated_dates_is_an_error() {
    let mut config = Semester::Spring.config();
    // 2026-01-20 is a Tuesday; class meets Mondays only.
    config.holidays = vec![Holiday::new(d(2026, 1, 20), "Phantom Day")];
    let err = Schedule::build(&config, &ContentTable::new()).unwrap_err();
    assert!(matches!(err, ScheduleError::DateNotFound { .. }));
    assert!(err.to_string().contains("Phantom Day"));
}

#[test]
fn midterm_offset_past_semester_end_is_an_error() {
    let mut config = Semester::Spring.config();
    config.midterm_session = 99;
    let err = Schedule::build(&config, &ContentTable::new()).unwrap_err();
    assert!(matches!(err, ScheduleError::DateNotFound { .. }));
}

#[test]
fn no_date_appears_twice() {
    let schedule = Schedule::build(&Semester::Fall.config(), &ContentTable::new()).unwrap();
    let rows = schedule.rows().unwrap();
    let mut labels: Vec<&str> = rows.iter().map(|row| row.date.as_str()).collect();
    let before = labels.len();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), before);
}
