use crate::domain::ids::EntityId;
use crate::domain::record::{validated_field, Record};
use crate::rules::validation::{self, PhoneRule};
use serde::Serialize;

pub const CONTACT_HEADER: [&str; 15] = [
    "Contact ID",
    "First Name",
    "Last Name",
    "Nick Name",
    "Address",
    "PostCode",
    "Home Number",
    "Mobile Number",
    "Work Number",
    "Fax Number",
    "Personal Email",
    "Work Email",
    "Other Email",
    "Url",
    "Path",
];

/// An address book entry. Every field is validated on write; a rejected
/// write leaves the previous value in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    id: EntityId,
    first_name: String,
    last_name: String,
    nick_name: String,
    address: String,
    post_code: String,
    home_number: String,
    mobile_number: String,
    work_number: String,
    fax_number: String,
    personal_email: String,
    work_email: String,
    other_email: String,
    url: String,
    photo_path: String,
    #[serde(skip)]
    phone_rule: PhoneRule,
}

impl Default for Contact {
    fn default() -> Self {
        Self::new()
    }
}

impl Contact {
    pub fn new() -> Self {
        Self::with_phone_rule(PhoneRule::default())
    }

    pub fn with_phone_rule(phone_rule: PhoneRule) -> Self {
        Self {
            id: EntityId::generate(),
            first_name: String::new(),
            last_name: String::new(),
            nick_name: String::new(),
            address: String::new(),
            post_code: String::new(),
            home_number: String::new(),
            mobile_number: String::new(),
            work_number: String::new(),
            fax_number: String::new(),
            personal_email: String::new(),
            work_email: String::new(),
            other_email: String::new(),
            url: String::new(),
            photo_path: String::new(),
            phone_rule,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn phone_rule(&self) -> PhoneRule {
        self.phone_rule
    }

    /// Display name used in listings: "First Last", falling back to the
    /// nickname.
    pub fn full_name(&self) -> String {
        let joined = [self.first_name.as_str(), self.last_name.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            self.nick_name.clone()
        } else {
            joined
        }
    }

    validated_field!(first_name, set_first_name, validation::validate_name);
    validated_field!(last_name, set_last_name, validation::validate_name);
    validated_field!(nick_name, set_nick_name, validation::validate_nick_name);
    validated_field!(address, set_address, validation::validate_address);
    validated_field!(post_code, set_post_code, validation::validate_post_code);
    validated_field!(
        personal_email,
        set_personal_email,
        validation::validate_email
    );
    validated_field!(work_email, set_work_email, validation::validate_email);
    validated_field!(other_email, set_other_email, validation::validate_email);
    validated_field!(url, set_url, validation::validate_url);
    validated_field!(photo_path, set_photo_path, validation::validate_photo_path);

    pub fn home_number(&self) -> &str {
        &self.home_number
    }

    pub fn set_home_number(&mut self, value: &str) -> bool {
        assign_phone(&mut self.home_number, value, self.phone_rule)
    }

    pub fn mobile_number(&self) -> &str {
        &self.mobile_number
    }

    pub fn set_mobile_number(&mut self, value: &str) -> bool {
        assign_phone(&mut self.mobile_number, value, self.phone_rule)
    }

    pub fn work_number(&self) -> &str {
        &self.work_number
    }

    pub fn set_work_number(&mut self, value: &str) -> bool {
        assign_phone(&mut self.work_number, value, self.phone_rule)
    }

    pub fn fax_number(&self) -> &str {
        &self.fax_number
    }

    pub fn set_fax_number(&mut self, value: &str) -> bool {
        assign_phone(&mut self.fax_number, value, self.phone_rule)
    }

    fn fields(&self) -> [&str; 14] {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.nick_name.as_str(),
            self.address.as_str(),
            self.post_code.as_str(),
            self.home_number.as_str(),
            self.mobile_number.as_str(),
            self.work_number.as_str(),
            self.fax_number.as_str(),
            self.personal_email.as_str(),
            self.work_email.as_str(),
            self.other_email.as_str(),
            self.url.as_str(),
            self.photo_path.as_str(),
        ]
    }
}

fn assign_phone(slot: &mut String, value: &str, rule: PhoneRule) -> bool {
    if !validation::validate_phone(value, rule) {
        return false;
    }
    *slot = value.to_string();
    true
}

impl Record for Contact {
    const ENTITY: &'static str = "Contact";
    const HEADER: &'static [&'static str] = &CONTACT_HEADER;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn to_record(&self) -> Vec<String> {
        std::iter::once(self.id.as_str())
            .chain(self.fields())
            .map(str::to_string)
            .collect()
    }

    fn apply_record(&mut self, fields: &[String]) -> bool {
        let setters: [fn(&mut Contact, &str) -> bool; 14] = [
            Contact::set_first_name,
            Contact::set_last_name,
            Contact::set_nick_name,
            Contact::set_address,
            Contact::set_post_code,
            Contact::set_home_number,
            Contact::set_mobile_number,
            Contact::set_work_number,
            Contact::set_fax_number,
            Contact::set_personal_email,
            Contact::set_work_email,
            Contact::set_other_email,
            Contact::set_url,
            Contact::set_photo_path,
        ];

        if let Some(id) = fields.first() {
            self.id = EntityId::from_raw(id.as_str());
        }
        for (setter, value) in setters.iter().zip(fields.iter().skip(1)) {
            setter(self, value);
        }
        true
    }

    fn equals_ignoring_id(&self, other: &Self) -> bool {
        self.fields() == other.fields()
    }
}
