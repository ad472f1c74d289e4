use organiser_core::domain::EntityId;
use organiser_core::rules::PhoneRule;
use organiser_store::error::{StoreError, StoreErrorKind};
use organiser_store::{Organiser, OrganiserOptions};
use std::fs;
use tempfile::TempDir;

#[test]
fn open_creates_both_files() {
    let temp = TempDir::new().expect("temp dir");
    let (organiser, report) =
        Organiser::open(temp.path(), &OrganiserOptions::default()).expect("open");

    assert!(organiser.contacts().is_empty());
    assert!(organiser.events().is_empty());
    assert!(report.contacts.is_complete());
    assert!(report.events.is_complete());
    assert!(temp.path().join("Contact.csv").exists());
    assert!(temp.path().join("Event.csv").exists());
}

#[test]
fn added_entries_survive_reopen() {
    let temp = TempDir::new().expect("temp dir");
    let options = OrganiserOptions::default();
    let (mut organiser, _) = Organiser::open(temp.path(), &options).expect("open");

    let mut bob = organiser.new_contact();
    assert!(bob.set_first_name("Bob"));
    assert!(bob.set_mobile_number("07654434213"));
    let bob_id = bob.id().clone();
    organiser.add_contact(bob).expect("add contact");

    let mut event = organiser.new_event();
    assert!(event.set_title("Standup"));
    assert!(event.set_start_text("2024-01-01 09:00:00"));
    organiser.add_event(event).expect("add event");

    let (reopened, report) = Organiser::open(temp.path(), &options).expect("reopen");
    assert_eq!(report.contacts.loaded, 1);
    assert_eq!(report.events.loaded, 1);
    assert_eq!(
        reopened.contact(&bob_id).expect("bob").mobile_number(),
        "07654434213"
    );
}

#[test]
fn edit_and_remove_rewrite_file() {
    let temp = TempDir::new().expect("temp dir");
    let options = OrganiserOptions::default();
    let (mut organiser, _) = Organiser::open(temp.path(), &options).expect("open");

    let mut ada = organiser.new_contact();
    assert!(ada.set_first_name("Ada"));
    let id = ada.id().clone();
    organiser.add_contact(ada).expect("add");

    let mut edited = organiser.contact(&id).expect("ada").clone();
    assert!(edited.set_last_name("Lovelace"));
    organiser.edit_contact(&id, edited).expect("edit");

    let (reopened, _) = Organiser::open(temp.path(), &options).expect("reopen");
    assert_eq!(reopened.contact(&id).expect("ada").last_name(), "Lovelace");

    organiser.remove_contact(&id).expect("remove");
    let (reopened, _) = Organiser::open(temp.path(), &options).expect("reopen");
    assert!(reopened.contacts().is_empty());

    let err = organiser.remove_contact(&id).unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::NotFound);
}

#[test]
fn configured_phone_rule_applies_to_new_contacts() {
    let temp = TempDir::new().expect("temp dir");
    let options = OrganiserOptions {
        phone_rule: PhoneRule::Strict,
        ..OrganiserOptions::default()
    };
    let (organiser, _) = Organiser::open(temp.path(), &options).expect("open");
    let mut contact = organiser.new_contact();
    assert!(!contact.set_home_number("reception"));
    assert!(contact.set_home_number("01234 567890"));
}

#[test]
fn import_merges_and_skips_known_ids() {
    let source_dir = TempDir::new().expect("temp dir");
    let options = OrganiserOptions::default();
    let (mut source, _) = Organiser::open(source_dir.path(), &options).expect("open source");
    for name in ["Ada", "Bob"] {
        let mut contact = source.new_contact();
        assert!(contact.set_first_name(name));
        source.add_contact(contact).expect("add");
    }
    let export = source_dir.path().join("export.csv");
    source.export_contacts(&export).expect("export");

    let target_dir = TempDir::new().expect("temp dir");
    let (mut target, _) = Organiser::open(target_dir.path(), &options).expect("open target");
    let report = target.import_contacts(&export).expect("import");
    assert_eq!(report.loaded, 2);

    let again = target.import_contacts(&export).expect("import again");
    assert_eq!(again.attempted, 2);
    assert_eq!(again.loaded, 0);
    assert_eq!(target.contacts().len(), 2);

    let saved = fs::read_to_string(target.contacts_path()).expect("read");
    assert_eq!(saved.lines().count(), 3);
}

#[test]
fn corrupt_file_is_reported_on_open() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("Event.csv"), "garbage\n").expect("write");

    let (organiser, report) =
        Organiser::open(temp.path(), &OrganiserOptions::default()).expect("open");
    assert!(report.events.corrupted);
    assert!(organiser.events().is_empty());
    assert!(temp.path().join("ErroneousEvent.csv").exists());
}

#[test]
fn lookup_of_unknown_id_is_not_found() {
    let temp = TempDir::new().expect("temp dir");
    let (organiser, _) =
        Organiser::open(temp.path(), &OrganiserOptions::default()).expect("open");
    let err = organiser.event(&EntityId::generate()).unwrap_err();
    assert!(matches!(err, StoreError::Collection(_)));
}

#[test]
fn failed_writes_leave_collections_untouched() {
    let temp = TempDir::new().expect("temp dir");
    let (mut organiser, _) =
        Organiser::open(temp.path(), &OrganiserOptions::default()).expect("open");

    let mut ada = organiser.new_contact();
    assert!(ada.set_first_name("Ada"));
    let ada_id = ada.id().clone();
    organiser.add_contact(ada).expect("add ada");
    let mut standup = organiser.new_event();
    assert!(standup.set_title("Standup"));
    let standup_id = standup.id().clone();
    organiser.add_event(standup).expect("add standup");

    for path in [temp.path().join("Contact.csv"), temp.path().join("Event.csv")] {
        fs::remove_file(&path).expect("remove file");
        fs::create_dir(&path).expect("block path with a directory");
    }

    let mut bob = organiser.new_contact();
    assert!(bob.set_first_name("Bob"));
    let bob_id = bob.id().clone();
    assert!(organiser.add_contact(bob).is_err());
    assert!(organiser.contacts().get_by_id(&bob_id).is_none());
    assert_eq!(organiser.contacts().len(), 1);

    let mut edited = organiser.contact(&ada_id).expect("ada").clone();
    assert!(edited.set_last_name("Lovelace"));
    assert!(organiser.edit_contact(&ada_id, edited).is_err());
    assert_eq!(organiser.contact(&ada_id).expect("ada").last_name(), "");

    assert!(organiser.remove_contact(&ada_id).is_err());
    assert_eq!(organiser.contacts().find_index(&ada_id), Some(0));

    let lunch = organiser.new_event();
    assert!(organiser.add_event(lunch).is_err());
    assert_eq!(organiser.events().len(), 1);

    let mut renamed = organiser.event(&standup_id).expect("standup").clone();
    assert!(renamed.set_title("Retro"));
    assert!(organiser.edit_event(&standup_id, renamed).is_err());
    assert_eq!(organiser.event(&standup_id).expect("standup").title(), "Standup");

    assert!(organiser.remove_event(&standup_id).is_err());
    assert!(organiser.event(&standup_id).is_ok());
}

#[test]
fn failed_import_save_leaves_collection_untouched() {
    let source_dir = TempDir::new().expect("temp dir");
    let options = OrganiserOptions::default();
    let (mut source, _) = Organiser::open(source_dir.path(), &options).expect("open source");
    let mut ada = source.new_contact();
    assert!(ada.set_first_name("Ada"));
    source.add_contact(ada).expect("add");
    let export = source_dir.path().join("export.csv");
    source.export_contacts(&export).expect("export");

    let target_dir = TempDir::new().expect("temp dir");
    let (mut target, _) = Organiser::open(target_dir.path(), &options).expect("open target");
    let contacts_path = target.contacts_path().to_path_buf();
    fs::remove_file(&contacts_path).expect("remove file");
    fs::create_dir(&contacts_path).expect("block path with a directory");

    assert!(target.import_contacts(&export).is_err());
    assert!(target.contacts().is_empty());
}
