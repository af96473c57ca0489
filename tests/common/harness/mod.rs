//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, a canned-response HTTP server
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod fake_server;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::NotionwCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
#[allow(unused_imports)]
pub use fake_server::{CannedResponse, FakeServer, RecordedRequest};
