use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{
    ensure_accepted, entity_label, format_datetime, parse_category, parse_entity_id,
    parse_optional_datetime, parse_repetition,
};
use anyhow::Result;
use clap::Args;
use organiser_core::domain::{Event, Record, Repetition};
use organiser_core::dto::{EventDetailDto, EventListItemDto};
use organiser_core::time::now_local;

#[derive(Debug, Default, Args)]
pub struct EventFields {
    #[arg(long)]
    pub title: Option<String>,
    /// Catalogue label, e.g. "Meeting" or "Happy hour"
    #[arg(long)]
    pub category: Option<String>,
    /// Start date/time (YYYY-MM-DD [HH:MM[:SS]]); empty clears it
    #[arg(long)]
    pub start: Option<String>,
    /// End date/time (YYYY-MM-DD [HH:MM[:SS]]); empty clears it
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// No, Daily, Weekly, Monthly or Yearly
    #[arg(long)]
    pub repeat: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub persons: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddEventArgs {
    #[command(flatten)]
    pub fields: EventFields,
}

#[derive(Debug, Args)]
pub struct EditEventArgs {
    pub id: String,
    #[command(flatten)]
    pub fields: EventFields,
}

#[derive(Debug, Args)]
pub struct ShowEventArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListEventsArgs {
    /// Only list events whose category matches this label
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteEventArgs {
    pub id: String,
}

pub fn add_event(ctx: &mut Context<'_>, args: AddEventArgs) -> Result<()> {
    let mut event = ctx.organiser.new_event();
    if apply_fields(&mut event, args.fields)? == 0 {
        return Err(invalid_input("an event needs at least one field"));
    }

    warn_on_duration(&event);
    ctx.organiser.add_event(event.clone())?;
    if ctx.json {
        print_json(&detail(&event))?;
    } else {
        println!("created {} {}", event.id(), event.title());
    }
    Ok(())
}

pub fn edit_event(ctx: &mut Context<'_>, args: EditEventArgs) -> Result<()> {
    let id = parse_entity_id(&args.id)?;
    let original = ctx
        .organiser
        .events()
        .get_by_id(&id)
        .cloned()
        .ok_or_else(|| not_found("event not found"))?;

    let mut edited = original.clone();
    if apply_fields(&mut edited, args.fields)? == 0 {
        return Err(invalid_input("no updates provided"));
    }

    if edited.equals_ignoring_id(&original) {
        if ctx.json {
            print_json(&detail(&edited))?;
        } else {
            println!("unchanged {} {}", edited.id(), edited.title());
        }
        return Ok(());
    }

    warn_on_duration(&edited);
    ctx.organiser.edit_event(&id, edited.clone())?;
    if ctx.json {
        print_json(&detail(&edited))?;
    } else {
        println!("updated {} {}", edited.id(), edited.title());
    }
    Ok(())
}

pub fn show_event(ctx: &Context<'_>, args: ShowEventArgs) -> Result<()> {
    let id = parse_entity_id(&args.id)?;
    let event = ctx
        .organiser
        .events()
        .get_by_id(&id)
        .ok_or_else(|| not_found("event not found"))?;
    let dto = detail(event);

    if ctx.json {
        return print_json(&dto);
    }

    println!("id: {}", dto.item.id);
    println!("title: {}", dto.item.title);
    println!("category: {}", dto.item.category);
    println!("start: {}", format_datetime(event.start()));
    println!("end: {}", format_datetime(event.end()));
    println!("repeat: {}", dto.item.repetition);
    if !dto.location.is_empty() {
        println!("location: {}", dto.location);
    }
    if !dto.description.is_empty() {
        println!("description: {}", dto.description);
    }
    if !dto.persons_involved.is_empty() {
        println!("persons: {}", dto.persons_involved);
    }
    if !dto.duration_acceptable {
        println!("duration: outside the usual range for {}", dto.item.category);
    }
    Ok(())
}

pub fn list_events(ctx: &Context<'_>, args: ListEventsArgs) -> Result<()> {
    let category = args.category.as_deref().map(parse_category).transpose()?;
    let items: Vec<EventListItemDto> = ctx
        .organiser
        .events()
        .iter()
        .filter(|event| category.is_none_or(|wanted| event.category() == wanted))
        .map(EventListItemDto::from)
        .collect();

    if ctx.json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("no events");
        return Ok(());
    }

    for item in &items {
        println!("{}", format_event_line(item));
    }
    println!("{}", entity_label(items.len(), "event"));
    Ok(())
}

pub fn delete_event(ctx: &mut Context<'_>, args: DeleteEventArgs) -> Result<()> {
    let id = parse_entity_id(&args.id)?;
    if ctx.organiser.events().find_index(&id).is_none() {
        return Err(not_found("event not found"));
    }
    let removed = ctx.organiser.remove_event(&id)?;
    if ctx.json {
        print_json(&serde_json::json!({ "id": removed.id() }))?;
    } else {
        println!("deleted {} {}", removed.id(), removed.title());
    }
    Ok(())
}

/// One-line rendering shared by the list and calendar views.
pub fn format_event_line(item: &EventListItemDto) -> String {
    let start = if item.start.is_empty() { "-" } else { &item.start };
    let mut line = format!("{}  {}  {}  [{}]", item.id, start, item.title, item.category);
    if item.repetition != Repetition::No {
        line.push_str(&format!("  repeats {}", item.repetition));
    }
    line
}

fn detail(event: &Event) -> EventDetailDto {
    EventDetailDto {
        item: EventListItemDto::from(event),
        location: event.location().to_string(),
        description: event.description().to_string(),
        persons_involved: event.persons_involved().to_string(),
        duration_acceptable: event.is_duration_acceptable(now_local()),
    }
}

fn warn_on_duration(event: &Event) {
    if event.start().is_some() && event.end().is_some() && !event.is_duration_acceptable(now_local())
    {
        eprintln!(
            "warning: duration of {:?} is outside the usual range for {}; saved anyway",
            event.title(),
            event.category()
        );
    }
}

fn apply_fields(event: &mut Event, fields: EventFields) -> Result<usize> {
    let mut applied = 0;

    if let Some(title) = fields.title {
        let title = title.trim();
        ensure_accepted(event.set_title(title), "title", title)?;
        applied += 1;
    }
    if let Some(category) = fields.category {
        event.set_category(parse_category(&category)?);
        applied += 1;
    }
    if let Some(start) = fields.start {
        event.set_start(parse_optional_datetime(&start)?);
        applied += 1;
    }
    if let Some(end) = fields.end {
        event.set_end(parse_optional_datetime(&end)?);
        applied += 1;
    }
    if let Some(location) = fields.location {
        let location = location.trim();
        ensure_accepted(event.set_location(location), "location", location)?;
        applied += 1;
    }
    if let Some(repeat) = fields.repeat {
        event.set_repetition(parse_repetition(&repeat)?);
        applied += 1;
    }
    if let Some(description) = fields.description {
        let description = description.trim();
        ensure_accepted(event.set_description(description), "description", description)?;
        applied += 1;
    }
    if let Some(persons) = fields.persons {
        event.set_persons_involved(persons.trim());
        applied += 1;
    }

    Ok(applied)
}
