//! Notion session, error classification and the inbox gateway

mod api;
mod error;
mod gateway;
mod properties;

pub use api::{DEFAULT_API_URL, HttpNotionApi, NotionApi};
pub use error::{ApiError, GatewayError, InboxError, classify};
pub use gateway::{CreatedPage, GatewayConfig, InboxGateway, NotionGateway, rollup_heading};
pub use properties::entry_properties;
