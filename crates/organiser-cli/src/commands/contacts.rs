use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{ensure_accepted, entity_label, parse_entity_id};
use anyhow::Result;
use clap::Args;
use organiser_core::domain::{Contact, Record};
use organiser_core::dto::ContactListItemDto;

#[derive(Debug, Default, Args)]
pub struct ContactFields {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub nick_name: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub post_code: Option<String>,
    #[arg(long)]
    pub home_number: Option<String>,
    #[arg(long)]
    pub mobile_number: Option<String>,
    #[arg(long)]
    pub work_number: Option<String>,
    #[arg(long)]
    pub fax_number: Option<String>,
    #[arg(long)]
    pub personal_email: Option<String>,
    #[arg(long)]
    pub work_email: Option<String>,
    #[arg(long)]
    pub other_email: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub photo_path: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddContactArgs {
    #[command(flatten)]
    pub fields: ContactFields,
}

#[derive(Debug, Args)]
pub struct EditContactArgs {
    pub id: String,
    #[command(flatten)]
    pub fields: ContactFields,
}

#[derive(Debug, Args)]
pub struct ShowContactArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListContactsArgs {
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteContactArgs {
    pub id: String,
}

type Setter = fn(&mut Contact, &str) -> bool;

pub fn add_contact(ctx: &mut Context<'_>, args: AddContactArgs) -> Result<()> {
    let mut contact = ctx.organiser.new_contact();
    let applied = apply_fields(ctx, &mut contact, args.fields)?;
    if applied == 0 {
        return Err(invalid_input("a contact needs at least one field"));
    }

    ctx.organiser.add_contact(contact.clone())?;
    if ctx.json {
        print_json(&contact)?;
    } else {
        println!("created {} {}", contact.id(), contact.full_name());
    }
    Ok(())
}

pub fn edit_contact(ctx: &mut Context<'_>, args: EditContactArgs) -> Result<()> {
    let id = parse_entity_id(&args.id)?;
    let original = ctx
        .organiser
        .contacts()
        .get_by_id(&id)
        .cloned()
        .ok_or_else(|| not_found("contact not found"))?;

    let mut edited = original.clone();
    if apply_fields(ctx, &mut edited, args.fields)? == 0 {
        return Err(invalid_input("no updates provided"));
    }

    if edited.equals_ignoring_id(&original) {
        if ctx.json {
            print_json(&edited)?;
        } else {
            println!("unchanged {} {}", edited.id(), edited.full_name());
        }
        return Ok(());
    }

    ctx.organiser.edit_contact(&id, edited.clone())?;
    if ctx.json {
        print_json(&edited)?;
    } else {
        println!("updated {} {}", edited.id(), edited.full_name());
    }
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: ShowContactArgs) -> Result<()> {
    let id = parse_entity_id(&args.id)?;
    let contact = ctx
        .organiser
        .contacts()
        .get_by_id(&id)
        .ok_or_else(|| not_found("contact not found"))?;

    if ctx.json {
        return print_json(contact);
    }

    println!("id: {}", contact.id());
    for (label, value) in Contact::HEADER.iter().skip(1).zip(contact.to_record().iter().skip(1)) {
        if !value.is_empty() {
            println!("{}: {}", label.to_lowercase(), value);
        }
    }
    Ok(())
}

pub fn list_contacts(ctx: &Context<'_>, args: ListContactsArgs) -> Result<()> {
    let matches = ctx
        .organiser
        .contacts()
        .search(args.search.as_deref().unwrap_or_default());
    let items: Vec<ContactListItemDto> = matches.into_iter().map(ContactListItemDto::from).collect();

    if ctx.json {
        return print_json(&items);
    }

    if items.is_empty() {
        println!("no contacts");
        return Ok(());
    }

    for item in &items {
        let mut line = format!("{}  {}", item.id, display_or_dash(&item.name));
        if !item.mobile_number.is_empty() {
            line.push_str(&format!("  {}", item.mobile_number));
        }
        if !item.personal_email.is_empty() {
            line.push_str(&format!("  <{}>", item.personal_email));
        }
        println!("{line}");
    }
    println!("{}", entity_label(items.len(), "contact"));
    Ok(())
}

pub fn delete_contact(ctx: &mut Context<'_>, args: DeleteContactArgs) -> Result<()> {
    let id = parse_entity_id(&args.id)?;
    if ctx.organiser.contacts().find_index(&id).is_none() {
        return Err(not_found("contact not found"));
    }
    let removed = ctx.organiser.remove_contact(&id)?;
    if ctx.json {
        print_json(&serde_json::json!({ "id": removed.id() }))?;
    } else {
        println!("deleted {} {}", removed.id(), removed.full_name());
    }
    Ok(())
}

/// Applies every provided field, failing on the first rejected value.
/// Returns how many fields were provided.
fn apply_fields(ctx: &Context<'_>, contact: &mut Contact, fields: ContactFields) -> Result<usize> {
    let strict_phones = ctx.config.validation.strict_phone_numbers;
    let updates: [(&str, Option<String>, Setter, bool); 14] = [
        ("first name", fields.first_name, Contact::set_first_name, false),
        ("last name", fields.last_name, Contact::set_last_name, false),
        ("nick name", fields.nick_name, Contact::set_nick_name, false),
        ("address", fields.address, Contact::set_address, false),
        ("post code", fields.post_code, Contact::set_post_code, false),
        ("home number", fields.home_number, Contact::set_home_number, true),
        ("mobile number", fields.mobile_number, Contact::set_mobile_number, true),
        ("work number", fields.work_number, Contact::set_work_number, true),
        ("fax number", fields.fax_number, Contact::set_fax_number, true),
        ("personal email", fields.personal_email, Contact::set_personal_email, false),
        ("work email", fields.work_email, Contact::set_work_email, false),
        ("other email", fields.other_email, Contact::set_other_email, false),
        ("url", fields.url, Contact::set_url, false),
        ("photo path", fields.photo_path, Contact::set_photo_path, false),
    ];

    let mut applied = 0;
    for (label, value, setter, is_phone) in updates {
        let Some(value) = value else {
            continue;
        };
        let value = value.trim();
        let accepted = setter(contact, value);
        if !accepted && is_phone && strict_phones {
            return Err(invalid_input(format!(
                "invalid {label}: {value:?} (strict phone validation is enabled)"
            )));
        }
        ensure_accepted(accepted, label, value)?;
        applied += 1;
    }
    Ok(applied)
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
