use organiser_core::domain::{Contact, Event, EventCategory, Record, CONTACT_HEADER};
use organiser_store::csv_file::CsvFile;
use organiser_store::repo::{AddMode, AddressBook, EventList, MAX_ENTRIES};
use std::fs;
use tempfile::TempDir;

fn contact(first: &str) -> Contact {
    let mut contact = Contact::new();
    assert!(contact.set_first_name(first));
    contact
}

fn header_line() -> String {
    CONTACT_HEADER.join(",")
}

#[test]
fn ensure_exists_writes_header_only_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("nested").join("Contact.csv");
    let file = CsvFile::new(&path, Contact::new());

    file.ensure_exists().expect("ensure");
    let text = fs::read_to_string(&path).expect("read");
    assert_eq!(text, format!("{}\n", header_line()));
}

#[test]
fn ensure_exists_terminates_last_line() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("Contact.csv");
    fs::write(&path, header_line()).expect("write");

    let file = CsvFile::new(&path, Contact::new());
    file.ensure_exists().expect("ensure");
    file.ensure_exists().expect("ensure twice");
    let text = fs::read_to_string(&path).expect("read");
    assert_eq!(text, format!("{}\n", header_line()));
}

#[test]
fn save_then_load_empty_collection() {
    let temp = TempDir::new().expect("temp dir");
    let file = CsvFile::new(temp.path().join("Contact.csv"), Contact::new());

    file.save(&AddressBook::new()).expect("save");
    let mut restored = AddressBook::new();
    let report = file.load(&mut restored).expect("load");

    assert!(restored.is_empty());
    assert_eq!(report.loaded, 0);
    assert_eq!(report.attempted, 0);
    assert!(report.is_complete());
}

#[test]
fn save_then_load_preserves_order_and_fields() {
    let temp = TempDir::new().expect("temp dir");
    let file = CsvFile::new(temp.path().join("Contact.csv"), Contact::new());

    let mut book = AddressBook::new();
    let mut ada = contact("Ada");
    assert!(ada.set_address("12 St James's Square, London"));
    assert!(ada.set_personal_email("ada@example.com"));
    book.add(ada, AddMode::Interactive).expect("add");
    book.add(contact("Bob"), AddMode::Interactive).expect("add");
    file.save(&book).expect("save");

    let mut restored = AddressBook::new();
    let report = file.load(&mut restored).expect("load");
    assert_eq!(report.loaded, 2);
    assert_eq!(report.attempted, 2);
    assert_eq!(restored.len(), 2);
    for (original, loaded) in book.iter().zip(restored.iter()) {
        assert_eq!(original.id(), loaded.id());
        assert!(original.equals_ignoring_id(loaded));
    }
}

#[test]
fn append_adds_one_record_after_header() {
    let temp = TempDir::new().expect("temp dir");
    let file = CsvFile::new(temp.path().join("Contact.csv"), Contact::new());

    file.append(&contact("Ada")).expect("append");
    file.append(&contact("Bob")).expect("append");

    let text = fs::read_to_string(file.path()).expect("read");
    assert_eq!(text.lines().count(), 3);
    assert_eq!(text.lines().next(), Some(header_line().as_str()));

    let mut restored = AddressBook::new();
    let report = file.load(&mut restored).expect("load");
    assert_eq!(report.loaded, 2);
}

#[test]
fn corrupt_header_is_quarantined() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("Contact.csv");
    let original = "Contact ID,Given Name\n1,Ada\n";
    fs::write(&path, original).expect("write");

    let file = CsvFile::new(&path, Contact::new());
    let mut book = AddressBook::new();
    let report = file.load(&mut book).expect("load");

    assert!(report.corrupted);
    assert_eq!(report.loaded, 0);
    assert!(book.is_empty());

    let quarantine = temp.path().join("ErroneousContact.csv");
    assert_eq!(report.quarantined.as_deref(), Some(quarantine.as_path()));
    assert_eq!(fs::read_to_string(&quarantine).expect("read"), original);
    assert_eq!(
        fs::read_to_string(&path).expect("read"),
        format!("{}\n", header_line())
    );
}

#[test]
fn non_utf8_header_is_quarantined() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("Contact.csv");
    let original: &[u8] = b"Contact\xff ID,First Name\nabc,Bob\n";
    fs::write(&path, original).expect("write");

    let file = CsvFile::new(&path, Contact::new());
    let mut book = AddressBook::new();
    let report = file.load(&mut book).expect("load");

    assert!(report.corrupted);
    assert_eq!(report.loaded, 0);
    assert!(book.is_empty());

    let quarantine = temp.path().join("ErroneousContact.csv");
    assert_eq!(report.quarantined.as_deref(), Some(quarantine.as_path()));
    assert_eq!(fs::read(&quarantine).expect("read"), original);
    assert_eq!(
        fs::read_to_string(&path).expect("read"),
        format!("{}\n", header_line())
    );
}

#[test]
fn import_reports_non_utf8_header_without_touching_source() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("incoming.csv");
    let original: &[u8] = b"Contact\xff ID,First Name\nabc,Bob\n";
    fs::write(&path, original).expect("write");

    let file = CsvFile::new(&path, Contact::new());
    let mut book = AddressBook::new();
    let report = file.import(&mut book).expect("import");

    assert!(report.corrupted);
    assert!(report.quarantined.is_none());
    assert!(book.is_empty());
    assert_eq!(fs::read(&path).expect("read"), original);
    assert!(!temp.path().join("ErroneousContact.csv").exists());
}

#[test]
fn saved_file_with_edited_header_is_quarantined() {
    let temp = TempDir::new().expect("temp dir");
    let file = CsvFile::new(temp.path().join("Event.csv"), Event::new());
    let mut list = EventList::new();
    list.add(Event::new(), AddMode::Interactive).expect("add");
    file.save(&list).expect("save");

    let text = fs::read_to_string(file.path()).expect("read");
    let tampered = text.replacen("Event ID", "Event Id", 1);
    fs::write(file.path(), &tampered).expect("write");

    let mut restored = EventList::new();
    let report = file.load(&mut restored).expect("load");
    assert!(report.corrupted);
    assert!(restored.is_empty());
    let quarantined = fs::read_to_string(temp.path().join("ErroneousEvent.csv")).expect("read");
    assert_eq!(quarantined, tampered);
}

#[test]
fn import_reports_bad_header_without_touching_file() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("people.csv");
    fs::write(&path, "Name,Phone\nAda,123\n").expect("write");

    let file = CsvFile::new(&path, Contact::new());
    let mut book = AddressBook::new();
    let report = file.import(&mut book).expect("import");

    assert!(report.corrupted);
    assert!(report.quarantined.is_none());
    assert_eq!(fs::read_to_string(&path).expect("read"), "Name,Phone\nAda,123\n");
    assert!(!temp.path().join("ErroneousContact.csv").exists());
}

#[test]
fn wrong_arity_and_duplicates_count_as_attempted() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("Contact.csv");
    let ada = contact("Ada");
    let mut text = format!("{}\n", header_line());
    text.push_str(&ada.to_record().join(","));
    text.push('\n');
    text.push_str(&ada.to_record().join(","));
    text.push('\n');
    text.push_str("only,three,fields\n");
    fs::write(&path, text).expect("write");

    let file = CsvFile::new(&path, Contact::new());
    let mut book = AddressBook::new();
    let report = file.load(&mut book).expect("load");

    assert_eq!(report.attempted, 3);
    assert_eq!(report.loaded, 1);
    assert!(!report.corrupted);
    assert!(!report.is_complete());
    assert_eq!(book.len(), 1);
}

#[test]
fn invalid_fields_load_with_defaults() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("Event.csv");
    let mut event = Event::new();
    assert!(event.set_title("Lunch"));
    event.set_category(EventCategory::Meal);
    let mut record = event.to_record();
    record[2] = "Picnic".to_string();
    record[3] = "yesterday".to_string();

    let mut writer = csv::Writer::from_path(&path).expect("writer");
    writer.write_record(Event::HEADER).expect("header");
    writer.write_record(&record).expect("record");
    writer.flush().expect("flush");
    drop(writer);

    let file = CsvFile::new(&path, Event::new());
    let mut list = EventList::new();
    let report = file.load(&mut list).expect("load");
    assert_eq!(report.loaded, 1);
    let loaded = list.get(0).expect("event");
    assert_eq!(loaded.title(), "Lunch");
    assert_eq!(loaded.category(), EventCategory::Other);
    assert!(loaded.start().is_none());
}

#[test]
fn oversize_file_is_truncated_at_limit() {
    let temp = TempDir::new().expect("temp dir");
    let path = temp.path().join("Contact.csv");
    let mut text = format!("{}\n", header_line());
    for _ in 0..MAX_ENTRIES + 5 {
        text.push_str(&contact("Ada").to_record().join(","));
        text.push('\n');
    }
    fs::write(&path, text).expect("write");

    let file = CsvFile::new(&path, Contact::new());
    let mut book = AddressBook::new();
    let report = file.load(&mut book).expect("load");

    assert!(report.truncated);
    assert_eq!(report.loaded, MAX_ENTRIES);
    assert_eq!(report.attempted, MAX_ENTRIES + 5);
    assert_eq!(book.len(), MAX_ENTRIES);
}

#[test]
fn quoted_fields_survive_roundtrip() {
    let temp = TempDir::new().expect("temp dir");
    let file = CsvFile::new(temp.path().join("Event.csv"), Event::new());

    let mut event = Event::new();
    assert!(event.set_title("Dinner, drinks"));
    assert!(event.set_description("Say \"hello\"\nthen leave"));
    let mut list = EventList::new();
    list.add(event, AddMode::Interactive).expect("add");
    file.save(&list).expect("save");

    let mut restored = EventList::new();
    file.load(&mut restored).expect("load");
    let loaded = restored.get(0).expect("event");
    assert_eq!(loaded.title(), "Dinner, drinks");
    assert_eq!(loaded.description(), "Say \"hello\"\nthen leave");
}
