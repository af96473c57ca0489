//! Uniform result values returned by the inbox flow and the HTTP surface.

use serde::{Deserialize, Serialize};

/// Outcome of filing one entry.
///
/// `ok` decides which half is meaningful: on success `page_id` and `url` are
/// set, on failure `error` is. A partial failure (page created, rollup append
/// failed) carries both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxResponse {
    pub ok: bool,
    #[serde(default)]
    pub page_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl InboxResponse {
    pub fn success(page_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            ok: true,
            page_id: Some(page_id.into()),
            url: Some(url.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// A failure that still identifies the page that was created.
    pub fn partial_failure(
        page_id: impl Into<String>,
        url: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            ok: false,
            page_id: Some(page_id.into()),
            url: Some(url.into()),
            error: Some(error.into()),
        }
    }
}

/// Liveness probe body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}
