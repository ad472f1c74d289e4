use crate::domain::ids::EntityId;

/// Flat, positional representation of an entity as stored in a delimited
/// text file. Field 0 is always the id.
pub trait Record: Clone {
    /// Singular entity name, used to name quarantine files.
    const ENTITY: &'static str;
    const HEADER: &'static [&'static str];

    fn id(&self) -> &EntityId;

    fn to_record(&self) -> Vec<String>;

    /// Assigns fields positionally through the validating setters.
    ///
    /// Always returns `true`: a field that fails validation keeps its prior
    /// value and the rest of the record still applies.
    fn apply_record(&mut self, fields: &[String]) -> bool;

    fn equals_ignoring_id(&self, other: &Self) -> bool;

    fn arity() -> usize {
        Self::HEADER.len()
    }
}

macro_rules! validated_field {
    ($field:ident, $setter:ident, $check:expr) => {
        pub fn $field(&self) -> &str {
            &self.$field
        }

        pub fn $setter(&mut self, value: &str) -> bool {
            let check: fn(&str) -> bool = $check;
            if !check(value) {
                return false;
            }
            self.$field = value.to_string();
            true
        }
    };
}

pub(crate) use validated_field;
