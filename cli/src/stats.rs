use attendly_core::{Summary, WeekTally};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct WeekRow {
    #[tabled(rename = "Week of")]
    week: String,
    #[tabled(rename = "Scheduled")]
    scheduled: u64,
    #[tabled(rename = "Attended")]
    attended: i64,
    #[tabled(rename = "Attendance")]
    percentage: String,
}

pub fn format_percentage(scheduled: u64, attended: i64) -> String {
    Summary {
        total_scheduled: scheduled,
        total_attended: attended,
    }
    .percentage()
    .map(|p| format!("{:.1}%", p))
    .unwrap_or_else(|| "-".to_string())
}

pub fn show_summary(weeks: &[(String, WeekTally)], summary: &Summary) {
    if weeks.is_empty() {
        println!("No attendance recorded yet.");
        return;
    }

    let mut rows: Vec<WeekRow> = weeks
        .iter()
        .map(|(week, tally)| WeekRow {
            week: week.clone(),
            scheduled: tally.scheduled,
            attended: tally.attended,
            percentage: format_percentage(tally.scheduled, tally.attended),
        })
        .collect();
    rows.push(WeekRow {
        week: "Total".to_string(),
        scheduled: summary.total_scheduled,
        attended: summary.total_attended,
        percentage: format_percentage(summary.total_scheduled, summary.total_attended),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN))
        .with(Modify::new(Rows::last()).with(Color::BOLD));

    println!("{}", table);
}
