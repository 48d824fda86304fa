//! The meeting form: field rules, autocomplete lookups and the controller
//! tying them to one form session.

pub mod controller;
pub mod state;
pub mod suggest;
pub mod validate;

pub use controller::FormController;
pub use state::{FieldValues, FormMode, FormState, SuggestionLists};
pub use suggest::{LookupCompletion, LookupTicket, Resolution, SuggestionEngine};
pub use validate::{FieldErrors, validate};
