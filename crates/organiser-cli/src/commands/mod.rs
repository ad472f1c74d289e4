use anyhow::Result;
use organiser_config::AppConfig;
use organiser_store::Organiser;
use serde::Serialize;
use std::io::{self, Write};

pub mod calendar;
pub mod completions;
pub mod contacts;
pub mod events;
pub mod transfer;

pub const DEFAULT_AGENDA_DAYS: u32 = 7;
pub const MAX_AGENDA_DAYS: i64 = 366;

pub struct Context<'a> {
    pub organiser: &'a mut Organiser,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
