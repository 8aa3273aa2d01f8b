use attendly_core::model::schedule::is_class_label;
use attendly_core::{WeekTally, WeekView};
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};

use crate::stats::format_percentage;

/// Grid cells for a week: each class label followed by its status mark.
/// Later slots of a merged class show the label only, since the class is
/// tracked under its first slot.
pub fn week_grid(view: &WeekView) -> Vec<Vec<String>> {
    let record = &view.record;
    let Some(schedule) = record.schedule.as_ref() else {
        return Vec::new();
    };

    let mut grid = vec![schedule.headers.clone()];
    for row in &schedule.rows {
        let Some((day_name, class_items)) = row.split_first() else {
            continue;
        };
        let mut cells = vec![day_name.clone()];
        for (slot, label) in class_items.iter().enumerate() {
            let continues_span = slot > 0 && class_items[slot - 1] == *label;
            if !is_class_label(label) || continues_span {
                cells.push(label.clone());
                continue;
            }
            let status = schedule
                .time_slot(slot)
                .map(|t| record.attendance.status(day_name, t))
                .unwrap_or_default();
            cells.push(format!("{} [{}]", label, status.mark()));
        }
        grid.push(cells);
    }
    grid
}

pub fn show_week(view: &WeekView, tally: WeekTally) {
    let record = &view.record;
    let origin = if view.saved { "saved" } else { "default timetable, not saved yet" };
    println!("\n\x1b[1;36mWeek of {}\x1b[0m ({})", record.week_id, origin);

    let grid = week_grid(view);
    if grid.is_empty() {
        println!("No schedule stored for this week.");
    } else {
        let mut builder = Builder::default();
        for row in grid {
            builder.push_record(row);
        }
        let mut table = builder.build();
        table
            .with(Style::modern())
            .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
        println!("{}", table);
    }

    if !record.extra_classes.is_empty() {
        let extras: Vec<String> = record
            .extra_classes
            .0
            .iter()
            .map(|(subject, count)| format!("{}: {}", subject, count.value()))
            .collect();
        println!("Extra classes: {}", extras.join(", "));
    }

    println!(
        "Scheduled: {}  Attended: {}  ({})",
        tally.scheduled,
        tally.attended,
        format_percentage(tally.scheduled, tally.attended)
    );
}
