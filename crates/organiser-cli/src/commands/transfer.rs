use crate::commands::{print_json, Context};
use crate::util::entity_label;
use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use organiser_store::csv_file::LoadReport;
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
pub enum ImportCommand {
    /// Merge contacts from another CSV file
    Contacts(ImportArgs),
    /// Merge events from another CSV file
    Events(ImportArgs),
}

#[derive(Debug, Subcommand)]
pub enum ExportCommand {
    /// Write all contacts to a CSV file
    Contacts(ExportArgs),
    /// Write all events to a CSV file
    Events(ExportArgs),
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long)]
    pub out: PathBuf,
}

pub fn import_contacts(ctx: &mut Context<'_>, args: ImportArgs) -> Result<()> {
    let report = ctx
        .organiser
        .import_contacts(&args.path)
        .with_context(|| format!("import contacts from {}", args.path.display()))?;
    print_import(ctx, &args.path, &report, "contact")
}

pub fn import_events(ctx: &mut Context<'_>, args: ImportArgs) -> Result<()> {
    let report = ctx
        .organiser
        .import_events(&args.path)
        .with_context(|| format!("import events from {}", args.path.display()))?;
    print_import(ctx, &args.path, &report, "event")
}

pub fn export_contacts(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let path = ctx
        .organiser
        .export_contacts(&args.out)
        .with_context(|| format!("export contacts to {}", args.out.display()))?;
    print_export(ctx, &path, ctx.organiser.contacts().len(), "contact")
}

pub fn export_events(ctx: &Context<'_>, args: ExportArgs) -> Result<()> {
    let path = ctx
        .organiser
        .export_events(&args.out)
        .with_context(|| format!("export events to {}", args.out.display()))?;
    print_export(ctx, &path, ctx.organiser.events().len(), "event")
}

fn print_import(ctx: &Context<'_>, path: &Path, report: &LoadReport, singular: &str) -> Result<()> {
    if ctx.json {
        return print_json(&json!({
            "path": path.display().to_string(),
            "loaded": report.loaded,
            "attempted": report.attempted,
            "header_mismatch": report.corrupted,
            "truncated": report.truncated,
        }));
    }

    if report.corrupted {
        eprintln!(
            "warning: {} does not start with the expected header; nothing imported",
            path.display()
        );
    }
    if report.truncated {
        eprintln!("warning: capacity reached; remaining records were discarded");
    }
    let skipped = report.attempted.saturating_sub(report.loaded);
    if skipped > 0 {
        eprintln!("warning: skipped {}", entity_label(skipped, "record"));
    }
    println!(
        "imported {} from {}",
        entity_label(report.loaded, singular),
        path.display()
    );
    Ok(())
}

fn print_export(ctx: &Context<'_>, path: &Path, count: usize, singular: &str) -> Result<()> {
    if ctx.json {
        return print_json(&json!({
            "path": path.display().to_string(),
            "count": count,
        }));
    }
    println!("exported {} to {}", entity_label(count, singular), path.display());
    Ok(())
}
