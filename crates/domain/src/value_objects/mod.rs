//! Value objects

mod email_address;
mod research_query;

pub use email_address::EmailAddress;
pub use research_query::{MAX_QUERY_CHARS, ResearchQuery};
