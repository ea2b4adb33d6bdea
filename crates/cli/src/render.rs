//! Terminal rendering: colored text + tables, or one JSON object per line

use anyhow::Result;
use clap::ValueEnum;
use clinic_queue_core::domain::{
    Identity, Notification, PatientQueueState, QueueEntry, QueuePhase, RosterStats,
};
use colored::Colorize;
use serde::Serialize;
use serde_json::json;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn emit_json(event: &str, data: impl Serialize) -> Result<()> {
    println!("{}", json!({ "event": event, "data": data }));
    Ok(())
}

pub fn identity(identity: &Identity, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => emit_json("login", identity),
        OutputFormat::Text => {
            println!(
                "{}",
                format!(
                    "✓ Logged in as {} ({})",
                    identity.display_name, identity.role
                )
                .green()
                .bold()
            );
            Ok(())
        }
    }
}

pub fn notification(notification: &Notification, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => emit_json("notification", notification),
        OutputFormat::Text => {
            println!(
                "  {} {}",
                format!("🔔 {}:", notification.title).yellow().bold(),
                notification.description
            );
            Ok(())
        }
    }
}

pub fn patient_state(state: &PatientQueueState, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return emit_json("queue_state", state);
    }

    match state.phase() {
        QueuePhase::NotInQueue => println!("{}", "Not in queue".dimmed()),
        QueuePhase::Waiting => println!(
            "{} {}  {} {}  {} ~{} min",
            "Queue #".bold(),
            state.queue_number.unwrap_or_default(),
            "Ahead:".bold(),
            state.patients_ahead,
            "Wait:".bold(),
            state.estimated_wait_minutes
        ),
        QueuePhase::Called => {
            println!("{}", state.status.to_string().green().bold());
            println!("  Doctor is ready to see you! Please proceed to the consultation room.");
        }
    }
    Ok(())
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    queue_number: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Joined")]
    join_time: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "")]
    marker: &'static str,
}

fn rows(entries: &[QueueEntry], next_id: Option<u32>) -> Vec<EntryRow> {
    entries
        .iter()
        .map(|e| EntryRow {
            queue_number: e.queue_number,
            name: e.name.clone(),
            join_time: e.join_time.clone(),
            status: e.status.to_string(),
            marker: if Some(e.id) == next_id { "Next Patient" } else { "" },
        })
        .collect()
}

pub fn roster(
    entries: &[QueueEntry],
    next: Option<&QueueEntry>,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        return emit_json("roster", entries);
    }

    if entries.is_empty() {
        println!("{}", "No patients in queue".dimmed());
        return Ok(());
    }
    println!("{}", Table::new(rows(entries, next.map(|e| e.id))));
    Ok(())
}

pub fn current(entry: Option<&QueueEntry>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => emit_json("current", entry),
        OutputFormat::Text => {
            match entry {
                Some(e) => println!(
                    "{} {} (Queue #{}, joined at {})",
                    "Current patient:".bold(),
                    e.name,
                    e.queue_number,
                    e.join_time
                ),
                None => println!("{}", "No current patient".dimmed()),
            }
            Ok(())
        }
    }
}

pub fn stats(stats: &RosterStats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => emit_json("stats", stats),
        OutputFormat::Text => {
            println!(
                "  {} {}  {} {}  {} {}",
                "Waiting:".bold(),
                stats.waiting,
                "Completed:".bold(),
                stats.completed,
                "Total:".bold(),
                stats.total
            );
            Ok(())
        }
    }
}

pub fn notice(message: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => emit_json("notice", message),
        OutputFormat::Text => {
            println!("  {}", message.yellow());
            Ok(())
        }
    }
}
