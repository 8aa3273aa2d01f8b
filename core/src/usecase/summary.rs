use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::model::stats::{Summary, WeekTally};
use crate::model::weekly_record::WeeklyRecord;
use crate::time::{parse_week_id, week_start_of, weekday_index_of};
use crate::usecase::attendance::tally_week;

/// Sums scheduled and attended classes over every week up to and including the
/// week containing `today`.
pub fn summarize<'a, I>(records: I, today: NaiveDate) -> Summary
where
    I: IntoIterator<Item = &'a WeeklyRecord>,
{
    weekly_tallies(records, today)
        .into_iter()
        .fold(Summary::default(), |mut summary, (_, tally)| {
            summary += tally;
            summary
        })
}

/// Per-week counts behind [`summarize`], in input order.
///
/// Weeks dated after the Monday of the current week never contribute. The
/// record dated exactly that Monday is the current week, and in it only the
/// days up to `today` are due. Records whose week id cannot be
/// read as a date are skipped.
pub fn weekly_tallies<'a, I>(records: I, today: NaiveDate) -> Vec<(&'a WeeklyRecord, WeekTally)>
where
    I: IntoIterator<Item = &'a WeeklyRecord>,
{
    let current_monday = week_start_of(today);
    let today_index = weekday_index_of(today);

    let mut tallies = Vec::new();
    for record in records {
        let Some(week_date) = parse_week_id(&record.week_id) else {
            warn!(week_id = %record.week_id, "skipping record with unreadable week id");
            continue;
        };
        // Week ids are compared as stored; a non-Monday id is not normalized.
        if week_date > current_monday {
            debug!(week_id = %record.week_id, "skipping future week");
            continue;
        }

        let due_through = (week_date == current_monday).then_some(today_index);
        tallies.push((record, tally_week(record, due_through)));
    }

    tallies
}
