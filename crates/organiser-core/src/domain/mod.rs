pub mod category;
pub mod contact;
pub mod event;
pub mod ids;
pub mod record;

pub use category::{EventCategory, Repetition};
pub use contact::{Contact, CONTACT_HEADER};
pub use event::{Event, EVENT_HEADER};
pub use ids::EntityId;
pub use record::Record;
