pub mod collection;
pub mod contacts;
pub mod events;

pub use collection::{AddMode, Collection, MAX_ENTRIES};
pub use contacts::AddressBook;
pub use events::EventList;
