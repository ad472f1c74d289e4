use crate::repo::collection::Collection;
use organiser_core::domain::Contact;

pub type AddressBook = Collection<Contact>;

impl Collection<Contact> {
    /// Case-insensitive substring search over names and email addresses.
    pub fn search(&self, needle: &str) -> Vec<&Contact> {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return self.iter().collect();
        }
        self.iter()
            .filter(|contact| {
                [
                    contact.first_name(),
                    contact.last_name(),
                    contact.nick_name(),
                    contact.personal_email(),
                    contact.work_email(),
                    contact.other_email(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }
}
