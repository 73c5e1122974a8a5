//! Text rendering of simulation outcomes.
//!
//! Each outcome renders as a title banner, a Gantt line with the process
//! id of every interval followed by the start ticks, and a bordered table
//! with a footer of averages and throughput.

use std::io::{self, Write};

use crate::models::Timeline;
use crate::scheduler::{ProcessStats, ScheduleSummary, SimulationOutcome};

const GANTT_CELL_WIDTH: usize = 8;
const HEADERS: [&str; 7] = ["ID", "Priority", "Burst", "Arrival", "Wait", "Turnaround", "Exit"];

/// Writes the full report for one outcome.
pub fn write_report<W: Write>(w: &mut W, outcome: &SimulationOutcome) -> io::Result<()> {
    write_title(w, outcome.policy.title())?;
    write_gantt(w, &outcome.timeline)?;
    write_schedule(w, &outcome.stats, &outcome.summary)
}

/// Writes every outcome, one report after another.
pub fn write_reports<W: Write>(w: &mut W, outcomes: &[SimulationOutcome]) -> io::Result<()> {
    for outcome in outcomes {
        write_report(w, outcome)?;
        writeln!(w)?;
    }
    Ok(())
}

/// Title banner: a dash rule twice the title length around the title.
pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

/// Gantt chart: `|  id  |` per interval, then start ticks and the final stop.
pub fn write_gantt<W: Write>(w: &mut W, timeline: &Timeline) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for interval in timeline {
        let pid = interval.process_id.to_string();
        let padding = " ".repeat(GANTT_CELL_WIDTH.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;

    let intervals = timeline.intervals();
    for (i, interval) in intervals.iter().enumerate() {
        write!(w, "{}\t", interval.start)?;
        if i + 1 == intervals.len() {
            write!(w, "{}", interval.stop)?;
        }
    }
    write!(w, "\n\n")
}

/// Schedule table with a footer of averages and throughput.
pub fn write_schedule<W: Write>(
    w: &mut W,
    stats: &[ProcessStats],
    summary: &ScheduleSummary,
) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let rows: Vec<[String; 7]> = stats
        .iter()
        .map(|s| {
            [
                s.process.id.to_string(),
                s.process.priority.to_string(),
                s.process.burst_duration.to_string(),
                s.process.arrival_time.to_string(),
                s.waiting_time.to_string(),
                s.turnaround_time.to_string(),
                s.completion_time.to_string(),
            ]
        })
        .collect();

    let blank = String::new;
    let footer: [[String; 7]; 2] = [
        [
            blank(),
            blank(),
            blank(),
            blank(),
            "AVERAGE".to_string(),
            "AVERAGE".to_string(),
            "THROUGHPUT".to_string(),
        ],
        [
            blank(),
            blank(),
            blank(),
            blank(),
            format!("{:.2}", summary.average_waiting),
            format!("{:.2}", summary.average_turnaround),
            format!("{:.2}/t", summary.throughput),
        ],
    ];

    let headers: Vec<String> = HEADERS.iter().map(|h| h.to_uppercase()).collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows.iter().chain(footer.iter()) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    writeln!(w, "{border}")?;
    write_row(w, &headers[..], &widths, Align::Center)?;
    writeln!(w, "{border}")?;
    for row in &rows {
        write_row(w, &row[..], &widths, Align::Right)?;
    }
    writeln!(w, "{border}")?;
    for row in &footer {
        write_row(w, &row[..], &widths, Align::Left)?;
    }
    writeln!(w, "{border}")
}

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Right,
    Center,
}

fn write_row<W: Write, S: AsRef<str>>(
    w: &mut W,
    cells: &[S],
    widths: &[usize],
    align: Align,
) -> io::Result<()> {
    write!(w, "|")?;
    for (cell, &width) in cells.iter().zip(widths) {
        let cell = cell.as_ref();
        match align {
            Align::Left => write!(w, " {cell:<width$} |")?,
            Align::Right => write!(w, " {cell:>width$} |")?,
            Align::Center => write!(w, " {cell:^width$} |")?,
        }
    }
    writeln!(w)
}
