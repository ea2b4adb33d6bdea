//! Clinic Queue CLI - terminal front end for the clinic queue simulator
//!
//! Composition root: wires providers into the core and renders its output.

mod actions;
mod doctor;
mod logging;
mod patient;
mod render;

use actions::DoctorAction;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clinic_queue_core::application::constants::{
    DEFAULT_CONSULTATION_MINUTES, DEFAULT_MINUTES_PER_PATIENT,
};
use clinic_queue_core::application::{ClinicApp, ClinicDeps, LoginRequest, SimulationConfig};
use clinic_queue_core::domain::Role;
use clinic_queue_core::port::{ChannelNotifier, RandomSource, SeededRandomSource, ThreadRandomSource};
use render::OutputFormat;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "clinic-queue")]
#[command(about = "Clinic queue simulator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Queue ticker period in milliseconds
    #[arg(long, env = "CLINIC_QUEUE_TICK_MS", default_value_t = 10_000, global = true)]
    tick_ms: u64,

    /// Seed for reproducible queue draws
    #[arg(long, env = "CLINIC_QUEUE_SEED", global = true)]
    seed: Option<u64>,

    /// Minutes per patient used for the wait estimate
    #[arg(
        long,
        env = "CLINIC_QUEUE_MINUTES_PER_PATIENT",
        default_value_t = DEFAULT_MINUTES_PER_PATIENT,
        global = true
    )]
    minutes_per_patient: u32,
}

#[derive(Args)]
struct LoginArgs {
    /// Email address (not validated)
    #[arg(long, env = "CLINIC_QUEUE_EMAIL", default_value = "")]
    email: String,

    /// Display name (defaults to the part of the email before '@')
    #[arg(long)]
    name: Option<String>,

    /// Password (accepted and discarded)
    #[arg(long, default_value = "")]
    password: String,
}

impl LoginArgs {
    fn into_request(self, role: Role) -> LoginRequest {
        let req = LoginRequest::new(role, self.email).with_password(self.password);
        match self.name {
            Some(name) => req.with_name(name),
            None => req,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Log in as a patient, join the queue and wait to be called
    Patient {
        #[command(flatten)]
        login: LoginArgs,

        /// Leave the queue after this many ticks instead of waiting to be called
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        leave_after: Option<u32>,
    },

    /// Log in as a doctor and work through the roster
    Doctor {
        #[command(flatten)]
        login: LoginArgs,

        /// Consultation time setting in minutes (5-60)
        #[arg(long, env = "CLINIC_QUEUE_CONSULTATION_MINUTES", default_value_t = DEFAULT_CONSULTATION_MINUTES)]
        consultation_minutes: u32,

        /// Actions to run (call, complete, stats, list, minutes=N, quit); read from stdin when omitted
        actions: Vec<DoctorAction>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    logging::init()?;
    info!("Clinic queue simulator v{} starting...", clinic_queue_core::VERSION);

    // 2. Load configuration
    let mut config = SimulationConfig {
        tick_period: Duration::from_millis(cli.tick_ms),
        minutes_per_patient: cli.minutes_per_patient,
        ..Default::default()
    };
    if let Commands::Doctor {
        consultation_minutes,
        ..
    } = &cli.command
    {
        config.consultation_minutes = *consultation_minutes;
    }

    // 3. Setup dependencies (DI wiring)
    let (notifier, mut notifications) = ChannelNotifier::channel();
    let random: Arc<dyn RandomSource> = match cli.seed {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            Arc::new(SeededRandomSource::new(seed))
        }
        None => Arc::new(ThreadRandomSource),
    };
    let deps = ClinicDeps::production(Arc::new(notifier)).with_random(random);
    let mut app = ClinicApp::new(config, deps).context("Invalid simulation settings")?;

    // 4. Run the dashboard
    match cli.command {
        Commands::Patient { login, leave_after } => {
            patient::run(
                &mut app,
                login.into_request(Role::Patient),
                leave_after,
                &mut notifications,
                tokio::signal::ctrl_c(),
                cli.format,
            )
            .await?
        }
        Commands::Doctor { login, actions, .. } => {
            doctor::run(
                &mut app,
                login.into_request(Role::Doctor),
                actions,
                &mut notifications,
                cli.format,
            )
            .await?
        }
    }

    // 5. Logout tears down the dashboard
    app.logout();
    info!("Session ended.");

    Ok(())
}
