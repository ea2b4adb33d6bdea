//! `clinic-queue doctor`: work through the roster from arguments or stdin

use crate::actions::DoctorAction;
use crate::render::{self, OutputFormat};
use anyhow::{Context, Result};
use clinic_queue_core::application::{ClinicApp, LoginRequest, RosterBoard};
use clinic_queue_core::domain::Notification;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::warn;

pub async fn run(
    app: &mut ClinicApp,
    req: LoginRequest,
    actions: Vec<DoctorAction>,
    notifications: &mut UnboundedReceiver<Notification>,
    format: OutputFormat,
) -> Result<()> {
    let identity = app.login(req);
    render::identity(&identity, format)?;

    let board = app.doctor().context("Doctor dashboard is not open")?;
    render::stats(&board.stats(), format)?;

    if !actions.is_empty() {
        for action in actions {
            if action == DoctorAction::Quit {
                break;
            }
            apply(board, action, notifications, format)?;
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<DoctorAction>() {
            Ok(DoctorAction::Quit) => break,
            Ok(action) => apply(board, action, notifications, format)?,
            Err(e) => {
                warn!(input = %line.trim(), "Unrecognized action");
                eprintln!("{}", e.as_str().yellow());
            }
        }
    }

    Ok(())
}

fn apply(
    board: &mut RosterBoard,
    action: DoctorAction,
    notifications: &mut UnboundedReceiver<Notification>,
    format: OutputFormat,
) -> Result<()> {
    match action {
        DoctorAction::Call => {
            if board.call_next().is_some() {
                render::current(board.current(), format)?;
            } else {
                render::notice("No patients waiting", format)?;
            }
        }
        DoctorAction::Complete => {
            if board.complete_current().is_none() {
                render::notice("No current patient", format)?;
            }
        }
        DoctorAction::Stats => render::stats(&board.stats(), format)?,
        DoctorAction::List => {
            render::current(board.current(), format)?;
            render::roster(board.entries(), board.next_waiting(), format)?;
        }
        DoctorAction::Minutes(minutes) => {
            let stored = board.set_consultation_minutes(minutes);
            render::notice(
                &format!("Consultation time set to {} minutes", stored),
                format,
            )?;
        }
        DoctorAction::Quit => {}
    }

    while let Ok(n) = notifications.try_recv() {
        render::notification(&n, format)?;
    }
    Ok(())
}
