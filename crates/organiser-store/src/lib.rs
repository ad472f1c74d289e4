pub mod csv_file;
pub mod error;
pub mod paths;
pub mod repo;

use crate::csv_file::{CsvFile, LoadReport};
use crate::error::{CollectionError, Result, StoreError};
use crate::repo::{AddMode, AddressBook, Collection, EventList};
use organiser_core::domain::{Contact, EntityId, Event, Record};
use organiser_core::rules::PhoneRule;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct OrganiserOptions {
    pub contacts_file: String,
    pub events_file: String,
    pub phone_rule: PhoneRule,
}

impl Default for OrganiserOptions {
    fn default() -> Self {
        Self {
            contacts_file: paths::DEFAULT_CONTACTS_FILE.to_string(),
            events_file: paths::DEFAULT_EVENTS_FILE.to_string(),
            phone_rule: PhoneRule::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenReport {
    pub contacts: LoadReport,
    pub events: LoadReport,
}

/// The address book and event list together with the files backing them.
pub struct Organiser {
    contacts: AddressBook,
    events: EventList,
    contacts_file: CsvFile<Contact>,
    events_file: CsvFile<Event>,
    phone_rule: PhoneRule,
}

impl Organiser {
    /// Opens (creating when needed) both files under `dir` and loads them.
    pub fn open(dir: &Path, options: &OrganiserOptions) -> Result<(Self, OpenReport)> {
        let mut organiser = Self {
            contacts: AddressBook::new(),
            events: EventList::new(),
            contacts_file: CsvFile::new(
                dir.join(&options.contacts_file),
                Contact::with_phone_rule(options.phone_rule),
            ),
            events_file: CsvFile::new(dir.join(&options.events_file), Event::new()),
            phone_rule: options.phone_rule,
        };

        organiser.contacts_file.ensure_exists()?;
        organiser.events_file.ensure_exists()?;
        let report = OpenReport {
            contacts: organiser.contacts_file.load(&mut organiser.contacts)?,
            events: organiser.events_file.load(&mut organiser.events)?,
        };
        debug!(
            contacts = organiser.contacts.len(),
            events = organiser.events.len(),
            "organiser opened"
        );
        Ok((organiser, report))
    }

    pub fn contacts(&self) -> &AddressBook {
        &self.contacts
    }

    pub fn contacts_mut(&mut self) -> &mut AddressBook {
        &mut self.contacts
    }

    pub fn events(&self) -> &EventList {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventList {
        &mut self.events
    }

    pub fn contacts_path(&self) -> &Path {
        self.contacts_file.path()
    }

    pub fn events_path(&self) -> &Path {
        self.events_file.path()
    }

    pub fn new_contact(&self) -> Contact {
        Contact::with_phone_rule(self.phone_rule)
    }

    pub fn new_event(&self) -> Event {
        Event::new()
    }

    /// Adds interactively and appends the single record to the file.
    pub fn add_contact(&mut self, contact: Contact) -> Result<()> {
        let file = &self.contacts_file;
        commit(
            &mut self.contacts,
            |staged| staged.add(contact.clone(), AddMode::Interactive),
            |_, _| file.append(&contact),
        )
    }

    pub fn add_event(&mut self, event: Event) -> Result<()> {
        let file = &self.events_file;
        commit(
            &mut self.events,
            |staged| staged.add(event.clone(), AddMode::Interactive),
            |_, _| file.append(&event),
        )
    }

    pub fn edit_contact(&mut self, id: &EntityId, contact: Contact) -> Result<()> {
        let file = &self.contacts_file;
        commit(
            &mut self.contacts,
            |staged| staged.edit_by_id(id, contact),
            |staged, _| file.save(staged),
        )
    }

    pub fn edit_event(&mut self, id: &EntityId, event: Event) -> Result<()> {
        let file = &self.events_file;
        commit(
            &mut self.events,
            |staged| staged.edit_by_id(id, event),
            |staged, _| file.save(staged),
        )
    }

    pub fn remove_contact(&mut self, id: &EntityId) -> Result<Contact> {
        let file = &self.contacts_file;
        commit(
            &mut self.contacts,
            |staged| staged.remove_by_id(id),
            |staged, _| file.save(staged),
        )
    }

    pub fn remove_event(&mut self, id: &EntityId) -> Result<Event> {
        let file = &self.events_file;
        commit(
            &mut self.events,
            |staged| staged.remove_by_id(id),
            |staged, _| file.save(staged),
        )
    }

    pub fn contact(&self, id: &EntityId) -> Result<&Contact> {
        self.contacts
            .get_by_id(id)
            .ok_or_else(|| CollectionError::NotFound(id.to_string()).into())
    }

    pub fn event(&self, id: &EntityId) -> Result<&Event> {
        self.events
            .get_by_id(id)
            .ok_or_else(|| CollectionError::NotFound(id.to_string()).into())
    }

    pub fn save_contacts(&self) -> Result<()> {
        self.contacts_file.save(&self.contacts)
    }

    pub fn save_events(&self) -> Result<()> {
        self.events_file.save(&self.events)
    }

    /// Merges contacts from another file, then rewrites the backing file.
    /// The source file is never modified.
    pub fn import_contacts(&mut self, path: &Path) -> Result<LoadReport> {
        let source = CsvFile::new(path, self.new_contact());
        let file = &self.contacts_file;
        commit(
            &mut self.contacts,
            |staged| source.import(staged),
            |staged, report| save_if_loaded(file, staged, report),
        )
    }

    pub fn import_events(&mut self, path: &Path) -> Result<LoadReport> {
        let source = CsvFile::new(path, self.new_event());
        let file = &self.events_file;
        commit(
            &mut self.events,
            |staged| source.import(staged),
            |staged, report| save_if_loaded(file, staged, report),
        )
    }

    pub fn export_contacts(&self, path: &Path) -> Result<PathBuf> {
        CsvFile::new(path, self.new_contact()).save(&self.contacts)?;
        Ok(path.to_path_buf())
    }

    pub fn export_events(&self, path: &Path) -> Result<PathBuf> {
        CsvFile::new(path, self.new_event()).save(&self.events)?;
        Ok(path.to_path_buf())
    }
}

/// Applies `change` to a copy of `collection`, persists the copy, and only
/// then swaps it in. Any failure leaves `collection` as it was.
fn commit<T, R, E>(
    collection: &mut Collection<T>,
    change: impl FnOnce(&mut Collection<T>) -> std::result::Result<R, E>,
    persist: impl FnOnce(&Collection<T>, &R) -> Result<()>,
) -> Result<R>
where
    T: Record,
    StoreError: From<E>,
{
    let mut staged = collection.clone();
    let outcome = change(&mut staged)?;
    persist(&staged, &outcome)?;
    *collection = staged;
    Ok(outcome)
}

fn save_if_loaded<T: Record>(
    file: &CsvFile<T>,
    staged: &Collection<T>,
    report: &LoadReport,
) -> Result<()> {
    if report.loaded > 0 {
        file.save(staged)?;
    }
    Ok(())
}
