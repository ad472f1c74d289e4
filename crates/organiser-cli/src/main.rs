mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{calendar, completions, contacts, events, transfer, Context};
use crate::error::{exit_code_for, report_error};
use organiser_config as config;
use organiser_store::csv_file::LoadReport;
use organiser_store::{paths, Organiser, OrganiserOptions};

#[derive(Debug, Parser)]
#[command(name = "organiser", version, about = "Contacts and calendar organiser")]
struct Cli {
    /// Directory holding the contact and event files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
    #[command(name = "add-contact")]
    AddContact(contacts::AddContactArgs),
    #[command(name = "edit-contact")]
    EditContact(contacts::EditContactArgs),
    #[command(name = "show-contact")]
    ShowContact(contacts::ShowContactArgs),
    #[command(name = "list-contacts")]
    ListContacts(contacts::ListContactsArgs),
    #[command(name = "delete-contact")]
    DeleteContact(contacts::DeleteContactArgs),
    #[command(name = "add-event")]
    AddEvent(events::AddEventArgs),
    #[command(name = "edit-event")]
    EditEvent(events::EditEventArgs),
    #[command(name = "show-event")]
    ShowEvent(events::ShowEventArgs),
    #[command(name = "list-events")]
    ListEvents(events::ListEventsArgs),
    #[command(name = "delete-event")]
    DeleteEvent(events::DeleteEventArgs),
    /// Events occurring on one day
    Day(calendar::DayArgs),
    /// Events occurring over consecutive days
    Agenda(calendar::AgendaArgs),
    #[command(subcommand)]
    Import(transfer::ImportCommand),
    #[command(subcommand)]
    Export(transfer::ExportCommand),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_dir,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let command = match command {
        Command::Completions(args) => return completions::emit(args),
        command => command,
    };

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let data_dir = paths::resolve_data_dir(data_dir.or_else(|| app_config.data_dir.clone()))
        .with_context(|| "resolve data directory")?;
    debug!(path = %data_dir.display(), "data directory resolved");

    let options = OrganiserOptions {
        contacts_file: app_config.contacts_file.clone(),
        events_file: app_config.events_file.clone(),
        phone_rule: app_config.validation.phone_rule(),
    };
    let (mut organiser, report) = Organiser::open(&data_dir, &options)
        .with_context(|| format!("open data directory {}", data_dir.display()))?;
    warn_on_load(organiser.contacts_path(), &report.contacts);
    warn_on_load(organiser.events_path(), &report.events);

    let mut ctx = Context {
        organiser: &mut organiser,
        json,
        config: &app_config,
    };

    match command {
        Command::AddContact(args) => contacts::add_contact(&mut ctx, args),
        Command::EditContact(args) => contacts::edit_contact(&mut ctx, args),
        Command::ShowContact(args) => contacts::show_contact(&ctx, args),
        Command::ListContacts(args) => contacts::list_contacts(&ctx, args),
        Command::DeleteContact(args) => contacts::delete_contact(&mut ctx, args),
        Command::AddEvent(args) => events::add_event(&mut ctx, args),
        Command::EditEvent(args) => events::edit_event(&mut ctx, args),
        Command::ShowEvent(args) => events::show_event(&ctx, args),
        Command::ListEvents(args) => events::list_events(&ctx, args),
        Command::DeleteEvent(args) => events::delete_event(&mut ctx, args),
        Command::Day(args) => calendar::show_day(&ctx, args),
        Command::Agenda(args) => calendar::show_agenda(&ctx, args),
        Command::Import(cmd) => match cmd {
            transfer::ImportCommand::Contacts(args) => transfer::import_contacts(&mut ctx, args),
            transfer::ImportCommand::Events(args) => transfer::import_events(&mut ctx, args),
        },
        Command::Export(cmd) => match cmd {
            transfer::ExportCommand::Contacts(args) => transfer::export_contacts(&ctx, args),
            transfer::ExportCommand::Events(args) => transfer::export_events(&ctx, args),
        },
        Command::Completions(_) => {
            unreachable!("completions command handled before opening the data directory")
        }
    }
}

fn warn_on_load(path: &Path, report: &LoadReport) {
    if report.corrupted {
        match &report.quarantined {
            Some(copy) => eprintln!(
                "warning: {} had an unexpected header; moved aside to {} and started empty",
                path.display(),
                copy.display()
            ),
            None => eprintln!(
                "warning: {} had an unexpected header; started empty",
                path.display()
            ),
        }
        return;
    }
    if report.truncated {
        eprintln!(
            "warning: {} holds more entries than fit; the rest were ignored",
            path.display()
        );
    }
    let skipped = report.attempted.saturating_sub(report.loaded);
    if skipped > 0 {
        eprintln!(
            "warning: {} unreadable or duplicate entries in {} were skipped",
            skipped,
            path.display()
        );
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
