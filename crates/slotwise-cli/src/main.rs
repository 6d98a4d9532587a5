//! `slotwise` CLI — find common free meeting slots across calendars.
//!
//! ## Usage
//!
//! ```sh
//! # Find hour-long slots for two people over the next two weeks (events on stdin)
//! cat events.json | slotwise find --attendees alice@example.com,bob@example.com
//!
//! # Read events from a file and search one specific week
//! slotwise find -i events.json --attendees alice@example.com --from 2026-03-16 --to 2026-03-20
//!
//! # Resolve attendees from a roster group
//! slotwise find -i events.json --roster roster.json --group eng
//!
//! # 30-minute slots inside Tokyo working hours
//! slotwise find -i events.json --attendees alice@example.com --timezone Asia/Tokyo --duration 30
//!
//! # Reserve the second offered slot
//! slotwise find -i events.json --attendees alice@example.com --book 2
//!
//! # Merged busy view instead of free slots
//! slotwise busy -i events.json --attendees alice@example.com,bob@example.com
//!
//! # Machine-readable output
//! slotwise find -i events.json --attendees alice@example.com --json
//! ```

use std::collections::HashSet;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use slotwise_core::{
    find_common_free_time, group_by_day, merge_busy_intervals, EventRecord, FreeSlot, Roster,
    SchedulerOptions, TimeSlot,
};

#[derive(Parser)]
#[command(
    name = "slotwise",
    version,
    about = "Find common free meeting slots across calendars"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find free slots shared by all selected attendees
    Find {
        #[command(flatten)]
        selection: SelectionArgs,
        #[command(flatten)]
        meeting: MeetingArgs,
    },
    /// Show the merged busy blocks of the selected attendees
    Busy {
        #[command(flatten)]
        selection: SelectionArgs,
    },
}

/// Who to schedule for, over which days, from which event feed.
#[derive(Args)]
struct SelectionArgs {
    /// Events file in JSON (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Comma-separated attendee emails
    #[arg(long)]
    attendees: Option<String>,

    /// Roster file with named groups of members
    #[arg(long)]
    roster: Option<String>,

    /// Group id to pull attendees from (repeatable, requires --roster)
    #[arg(long, requires = "roster")]
    group: Vec<String>,

    /// First day of the search window, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last day of the search window, inclusive (defaults to two weeks after --from)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// IANA timezone for working hours and day boundaries
    #[arg(long, default_value = "UTC")]
    timezone: String,

    /// Treat events of four hours or more as negotiable soft holds
    #[arg(long)]
    exclude_long_events: bool,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Shape of the meeting being scheduled. Only `find` needs these.
#[derive(Args)]
struct MeetingArgs {
    /// Meeting length in minutes
    #[arg(long, default_value_t = 60)]
    duration: i64,

    /// First hour of the working day (0-23)
    #[arg(long, default_value_t = 9)]
    work_start: u32,

    /// Hour the working day ends, exclusive (must be after --work-start)
    #[arg(long, default_value_t = 18)]
    work_end: u32,

    /// Offer slots on Saturdays and Sundays too
    #[arg(long)]
    include_weekends: bool,

    /// Upper bound on the number of offered slots
    #[arg(long, default_value_t = 100)]
    max_slots: usize,

    /// Reserve the Nth offered slot (1-based) and print the booking
    #[arg(long)]
    book: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find { selection, meeting } => {
            let tz = parse_timezone(&selection.timezone)?;
            let attendees = resolve_attendees(&selection)?;
            let events = load_events(selection.input.as_deref())?;
            let (window_start, window_end) = resolve_window(&selection, tz)?;

            let options = SchedulerOptions {
                duration_minutes: meeting.duration,
                work_hour_start: meeting.work_start,
                work_hour_end: meeting.work_end,
                exclude_weekends: !meeting.include_weekends,
                exclude_long_events: selection.exclude_long_events,
                timezone: tz,
                max_slots: meeting.max_slots,
            };

            let slots = find_common_free_time(&events, &attendees, window_start, window_end, &options)
                .context("Free-time search failed")?;

            if let Some(n) = meeting.book {
                return book_slot(&slots, n, &options, selection.json);
            }

            if selection.json {
                println!("{}", serde_json::to_string_pretty(&slots)?);
            } else {
                print_slots(&slots, &attendees, tz);
            }
        }
        Commands::Busy { selection } => {
            let tz = parse_timezone(&selection.timezone)?;
            let attendees = resolve_attendees(&selection)?;
            let events = load_events(selection.input.as_deref())?;
            let (window_start, window_end) = resolve_window(&selection, tz)?;

            let options = SchedulerOptions {
                exclude_long_events: selection.exclude_long_events,
                timezone: tz,
                ..Default::default()
            };

            let blocks =
                merge_busy_intervals(&events, &attendees, window_start, window_end, &options);

            if selection.json {
                println!("{}", serde_json::to_string_pretty(&blocks)?);
            } else {
                print_busy(&blocks, tz);
            }
        }
    }

    Ok(())
}

/// Combine --attendees with roster groups, de-duplicated in first-seen order.
///
/// A roster without --group selects every member of every group, which is
/// the handy form for small teams.
fn resolve_attendees(selection: &SelectionArgs) -> Result<Vec<String>> {
    let mut attendees = Vec::new();

    if let Some(raw) = &selection.attendees {
        for part in raw.split(',') {
            let trimmed = part.trim();
            if !trimmed.is_empty() {
                attendees.push(trimmed.to_string());
            }
        }
    }

    if let Some(path) = &selection.roster {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file: {}", path))?;
        let roster = Roster::from_json(&json)
            .with_context(|| format!("Failed to parse roster file: {}", path))?;

        if selection.group.is_empty() {
            for group in &roster.groups {
                attendees.extend(group.attendee_emails());
            }
        } else {
            for id in &selection.group {
                let Some(group) = roster.group(id) else {
                    let known: Vec<&str> = roster.groups.iter().map(|g| g.id.as_str()).collect();
                    bail!(
                        "Unknown group: '{}'. Available groups: {}",
                        id,
                        known.join(", ")
                    );
                };
                attendees.extend(group.attendee_emails());
            }
        }
    }

    if attendees.is_empty() {
        bail!("No attendees selected. Pass --attendees or --roster with --group");
    }

    let mut seen = HashSet::new();
    attendees.retain(|email| seen.insert(email.clone()));

    Ok(attendees)
}

/// Turn the --from/--to dates into the half-open UTC instant window
/// [from 00:00, day-after-to 00:00) in the configured zone.
fn resolve_window(selection: &SelectionArgs, tz: Tz) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let today = Utc::now().with_timezone(&tz).date_naive();
    let from = selection.from.unwrap_or(today);
    let to = selection.to.unwrap_or(from + Duration::days(14));

    if to < from {
        bail!("--to {} is before --from {}", to, from);
    }

    let end_day = to
        .succ_opt()
        .with_context(|| format!("--to {} is out of calendar range", to))?;

    let start = wall_clock_instant(from, NaiveTime::MIN, tz)?;
    let end = wall_clock_instant(end_day, NaiveTime::MIN, tz)?;
    Ok((start, end))
}

/// Resolve a wall-clock time in `tz` to a UTC instant. A time erased by a
/// spring-forward transition resolves one hour later, matching how the
/// scheduler treats working-hour boundaries.
fn wall_clock_instant(date: NaiveDate, time: NaiveTime, tz: Tz) -> Result<DateTime<Utc>> {
    let naive = date.and_time(time);
    let local = match tz.from_local_datetime(&naive).earliest() {
        Some(resolved) => resolved,
        None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .with_context(|| format!("Cannot resolve {} in {}", naive, tz))?,
    };
    Ok(local.with_timezone(&Utc))
}

fn parse_timezone(name: &str) -> Result<Tz> {
    match name.parse() {
        Ok(tz) => Ok(tz),
        Err(_) => bail!(
            "Unknown timezone: '{}'. Use an IANA name like Europe/Berlin",
            name
        ),
    }
}

fn load_events(path: Option<&str>) -> Result<Vec<EventRecord>> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse events JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

/// Reserve slot `n` (1-based, as printed) for the configured duration.
fn book_slot(slots: &[FreeSlot], n: usize, options: &SchedulerOptions, json: bool) -> Result<()> {
    if n == 0 || n > slots.len() {
        bail!("--book {} is out of range: {} slots available", n, slots.len());
    }

    let booking = slots[n - 1].booking(options.duration_minutes);
    if json {
        println!("{}", serde_json::to_string_pretty(&booking)?);
    } else {
        let start = booking.start.with_timezone(&options.timezone);
        let end = booking.end.with_timezone(&options.timezone);
        println!(
            "Booked: {} {}-{} ({} min)",
            start.format("%Y-%m-%d"),
            start.format("%H:%M"),
            end.format("%H:%M"),
            options.duration_minutes
        );
    }
    Ok(())
}

/// Day-grouped listing with a running slot number, so --book N matches
/// what the user sees.
fn print_slots(slots: &[FreeSlot], attendees: &[String], tz: Tz) {
    println!(
        "Free slots for {} attendee{} ({}):",
        attendees.len(),
        if attendees.len() == 1 { "" } else { "s" },
        tz
    );

    let mut index = 0;
    for day in group_by_day(slots, tz) {
        println!();
        println!("{}", day.date.format("%-m/%-d (%a)"));
        for slot in &day.slots {
            index += 1;
            println!(
                "  [{}] {}-{} ({} min)",
                index,
                slot.start.with_timezone(&tz).format("%H:%M"),
                slot.end.with_timezone(&tz).format("%H:%M"),
                slot.duration_minutes
            );
        }
    }

    println!();
    println!(
        "{} slot{} found.",
        slots.len(),
        if slots.len() == 1 { "" } else { "s" }
    );
}

fn print_busy(blocks: &[TimeSlot], tz: Tz) {
    for block in blocks {
        println!(
            "{} - {} ({} min)",
            block.start.with_timezone(&tz).format("%Y-%m-%d %H:%M"),
            block.end.with_timezone(&tz).format("%Y-%m-%d %H:%M"),
            block.duration_minutes()
        );
    }
    println!(
        "{} busy block{}.",
        blocks.len(),
        if blocks.len() == 1 { "" } else { "s" }
    );
}
