use crate::error::ScheduleResult;
use crate::schedule::Schedule;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const ROW_END: &str = " \\\\";
const RULE: &str = "\\Xhline{1.75\\arrayrulewidth} ";

/// Render the schedule as LaTeX table rows, one line per date.
///
/// Lecture rows carry all five columns; special rows collapse the middle
/// columns into a single `\multicolumn` cell. Every line but the last is
/// suffixed with an `\Xhline` rule, and the last line loses its `\\`
/// terminator so the table ends without a trailing separator.
pub fn latex_lines(schedule: &Schedule) -> ScheduleResult<Vec<String>> {
    let rows = schedule.rows()?;
    let mut lines: Vec<String> = Vec::with_capacity(rows.len());

    for row in &rows {
        let line = match row.lecture {
            Some(number) => format!(
                "{} & {} & {} & {} & {}{ROW_END}",
                row.date, number, row.topics, row.references, row.due
            ),
            None => format!(
                "{} & \\multicolumn{{3}}{{c}}{{{}}} & {ROW_END}",
                row.date, row.topics
            ),
        };
        lines.push(line);
    }

    let count = lines.len();
    for line in lines.iter_mut().take(count.saturating_sub(1)) {
        line.push_str(RULE);
    }
    if let Some(last) = lines.last_mut() {
        *last = last.replace(ROW_END, "");
    }

    Ok(lines)
}

/// Render the schedule and write it to `path`. The schedule is rendered
/// before the file is created, so a failed build leaves no partial output.
pub fn write_latex<P: AsRef<Path>>(schedule: &Schedule, path: P) -> ScheduleResult<()> {
    let lines = latex_lines(schedule)?;
    let mut file = File::create(path)?;
    for line in &lines {
        writeln!(file, "{line}")?;
    }
    Ok(())
}
