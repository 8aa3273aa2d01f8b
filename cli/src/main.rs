mod config;
mod server;
mod stats;
mod week;

use std::path::PathBuf;

use anyhow::Result;
use attendly_core::{
    parse_day, tally_week, week_id_of, week_start_of, weekday_index_of, AttendanceStatus,
    FileWeeklyRecordRepository, WeeklyService,
};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use config::Config;

#[derive(Parser)]
#[command(name = "attendly")]
#[command(about = "Weekly class schedule and attendance tracker", long_about = None)]
struct Cli {
    /// Directory holding the record store (defaults to $ATTENDLY_DATA_DIR, then ~/.attendly)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Port to listen on (defaults to $PORT, then 5001)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Show attendance totals per week and overall
    Summary {
        /// Count as if today were this day (today, mon, -1w, 2025-01-06, ...)
        #[arg(long)]
        today: Option<String>,
    },
    /// Show the timetable and attendance of one week
    Week {
        /// Any day in the week to show (defaults to today)
        date: Option<String>,
    },
    /// Record attendance for one class (usage: mark monday 8:45-9:40 present)
    Mark {
        /// Weekday name as it appears in the timetable
        day: String,
        /// Time-slot label from the timetable header
        slot: String,
        /// present, absent, cancelled or unset
        status: AttendanceStatus,
        /// Any day in the week to mark (defaults to this week)
        #[arg(long)]
        date: Option<String>,
    },
}

fn open_service(config: &Config) -> Result<WeeklyService<FileWeeklyRecordRepository>> {
    let repo = FileWeeklyRecordRepository::new(Some(config.data_dir.clone()))?;
    Ok(WeeklyService::new(repo))
}

fn show_summary(service: &WeeklyService<FileWeeklyRecordRepository>, as_of: NaiveDate) -> Result<()> {
    let weeks = service.weekly_breakdown(as_of)?;
    let summary = service.summary(as_of)?;
    stats::show_summary(&weeks, &summary);
    Ok(())
}

fn resolve_day(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match input {
        Some(s) => parse_day(s, today),
        None => Ok(today),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let port = match &cli.command {
        Some(Commands::Serve { port }) => *port,
        _ => None,
    };
    let config = Config::load(port, cli.data_dir.clone())?;

    match cli.command {
        Some(Commands::Serve { .. }) => {
            server::start_server(config).await?;
        }
        Some(Commands::Summary { today: as_of }) => {
            let service = open_service(&config)?;
            let as_of = resolve_day(as_of.as_deref(), today)?;
            show_summary(&service, as_of)?;
        }
        Some(Commands::Week { date }) => {
            let service = open_service(&config)?;
            let day = resolve_day(date.as_deref(), today)?;
            let view = service.get_week(Some(&week_id_of(day)))?;
            let due_through = (week_start_of(day) == week_start_of(today)).then_some(weekday_index_of(today));
            let tally = tally_week(&view.record, due_through);
            week::show_week(&view, tally);
        }
        Some(Commands::Mark { day, slot, status, date }) => {
            let service = open_service(&config)?;
            let week_id = week_id_of(resolve_day(date.as_deref(), today)?);
            service.mark(&week_id, &day, &slot, status)?;
            println!("Marked {} {} as {:?} for week of {}", day, slot, status, week_id);
        }
        None => {
            // No subcommand: show where things stand.
            let service = open_service(&config)?;
            show_summary(&service, today)?;
        }
    }
    Ok(())
}
