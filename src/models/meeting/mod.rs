pub mod store;
pub mod types;

pub use store::MeetingList;
pub use types::*;
