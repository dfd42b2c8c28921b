use syllabus_tool::latex::write_latex;
use syllabus_tool::{ContentTable, Schedule, ScheduleResult, Semester};

const OUTPUT_PATH: &str = "schedule.tex";

/// The authored syllabus content for the semester. Edited by hand each
/// time the course material changes.
fn syllabus_content() -> ContentTable {
    let mut content = ContentTable::new();
    content.insert(1, "Consumer Preferences and Choice", "Ch. 3-4");
    content.insert(2, "Demand Analysis and Consumer Welfare", "Ch. 5-6");
    content.insert(3, "Production, Costs, and Firm Supply", "Ch. 9-11");
    content.insert(4, "Competitive Market Equilibrium", "Ch. 12");
    content.insert(5, "Welfare Analysis and Efficiency", "Ch. 13");
    content.insert(6, "Monopoly and Market Power", "Ch. 14");
    content.insert(7, "Imperfect Competition and Oligopoly", "Ch. 15");
    content.insert(8, "Labor Markets", "Ch. 16");
    content.insert(9, "Asymmetric Information", "Ch. 18");
    content.insert(10, "Externalities and Public Goods", "Ch. 19-20");
    content.insert(11, "Choice Under Uncertainty", "Ch. 7");
    content.insert(12, "Introduction to Game Theory", "Ch. 8");
    content.insert(13, "Add. Topics/Review", "");

    // Problem set due dates
    content.set_due(3, "PS 1");
    content.set_due(6, "PS 2");
    content.set_due(9, "PS 3");
    content.set_due(12, "PS 4");

    content
}

fn run() -> ScheduleResult<()> {
    let config = Semester::Spring.config();
    let schedule = Schedule::build(&config, &syllabus_content())?;
    write_latex(&schedule, OUTPUT_PATH)?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
