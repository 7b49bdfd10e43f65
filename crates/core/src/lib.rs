pub mod config;
pub mod display;
pub mod domain;
pub mod errors;
pub mod quote_number;

pub use domain::lead::{Lead, LeadId, LeadPatch};
pub use errors::WorkflowError;
pub use quote_number::QUOTE_PREFIX;
