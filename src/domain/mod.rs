//! Core types: Entry and its taxonomy, content Block, InboxResponse

mod block;
mod entry;
mod response;

pub use block::{Block, HeadingLevel, first_text_run};
pub use entry::{
    Entry, EntryBuilder, EntryType, ParseEntryError, ParseSelectError, Project, Source, Status,
};
pub use response::{HealthResponse, InboxResponse};
