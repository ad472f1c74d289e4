use crate::commands::events::format_event_line;
use crate::commands::{print_json, Context, DEFAULT_AGENDA_DAYS, MAX_AGENDA_DAYS};
use crate::util::parse_day;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use organiser_core::dto::{DayAgendaDto, EventListItemDto};
use organiser_store::repo::EventList;

#[derive(Debug, Args)]
pub struct DayArgs {
    /// Day to show (YYYY-MM-DD); defaults to today
    pub date: Option<String>,
}

#[derive(Debug, Args)]
pub struct AgendaArgs {
    /// First day (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub from: Option<String>,
    #[arg(
        long,
        default_value_t = DEFAULT_AGENDA_DAYS,
        value_parser = clap::value_parser!(u32).range(1..=MAX_AGENDA_DAYS)
    )]
    pub days: u32,
}

pub fn show_day(ctx: &Context<'_>, args: DayArgs) -> Result<()> {
    let day = parse_day(args.date.as_deref())?;
    let dto = day_dto(day, &ctx.organiser.events().events_for_day(day));

    if ctx.json {
        return print_json(&dto);
    }

    print_day(&dto, true);
    Ok(())
}

pub fn show_agenda(ctx: &Context<'_>, args: AgendaArgs) -> Result<()> {
    let from = parse_day(args.from.as_deref())?;
    let days: Vec<DayAgendaDto> = ctx
        .organiser
        .events()
        .agenda(from, args.days)
        .iter()
        .map(|(day, events)| day_dto(*day, events))
        .collect();

    if ctx.json {
        return print_json(&days);
    }

    let mut printed = false;
    for day in &days {
        if day.events.is_empty() {
            continue;
        }
        if printed {
            println!();
        }
        print_day(day, false);
        printed = true;
    }
    if !printed {
        println!("nothing scheduled");
    }
    Ok(())
}

fn day_dto(day: NaiveDate, events: &EventList) -> DayAgendaDto {
    DayAgendaDto {
        date: day.format("%Y-%m-%d").to_string(),
        events: events.iter().map(EventListItemDto::from).collect(),
    }
}

fn print_day(day: &DayAgendaDto, show_empty: bool) {
    println!("{}:", day.date);
    if day.events.is_empty() && show_empty {
        println!("  nothing scheduled");
    }
    for item in &day.events {
        println!("  {}", format_event_line(item));
    }
}
