//! Notion REST client.

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::debug;

use super::error::ApiError;

pub const DEFAULT_API_URL: &str = "https://api.notion.com/v1";
const NOTION_VERSION: &str = "2022-06-28";

/// The Notion operations the inbox needs.
///
/// All calls block until the API answers. Implementations report failures as
/// `ApiError`; classification into typed errors happens in the gateway.
pub trait NotionApi {
    /// Creates a page under a database and returns the page object.
    fn create_page(
        &self,
        database_id: &str,
        properties: Value,
        children: Vec<Value>,
    ) -> Result<Value, ApiError>;

    /// Lists one page of the immediate children of a block or page.
    ///
    /// Pass the previous response's `next_cursor` as `start_cursor` to continue.
    fn list_block_children(
        &self,
        block_id: &str,
        start_cursor: Option<&str>,
    ) -> Result<Value, ApiError>;

    /// Appends blocks to the end of a block or page.
    fn append_block_children(
        &self,
        block_id: &str,
        children: Vec<Value>,
    ) -> Result<Value, ApiError>;
}

/// Error body returned by the Notion API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Blocking HTTP implementation of `NotionApi`.
#[derive(Debug, Clone)]
pub struct HttpNotionApi {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpNotionApi {
    /// Creates a client authenticated with `token` against `base_url`.
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("notion-inbox/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{}", self.base_url, path))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
    }

    fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let (code, message) = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(parsed) => (parsed.code, parsed.message),
                Err(_) => (
                    status.canonical_reason().unwrap_or("error").to_string(),
                    body,
                ),
            };
            return Err(ApiError::response(status.as_u16(), &code, message));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl NotionApi for HttpNotionApi {
    fn create_page(
        &self,
        database_id: &str,
        properties: Value,
        children: Vec<Value>,
    ) -> Result<Value, ApiError> {
        debug!(database_id, children = children.len(), "creating page");
        let body = json!({
            "parent": { "database_id": database_id },
            "properties": properties,
            "children": children,
        });
        self.send(self.request(Method::POST, "pages").json(&body))
    }

    fn list_block_children(
        &self,
        block_id: &str,
        start_cursor: Option<&str>,
    ) -> Result<Value, ApiError> {
        debug!(block_id, start_cursor, "listing block children");
        let mut request = self
            .request(Method::GET, &format!("blocks/{block_id}/children"))
            .query(&[("page_size", "100")]);
        if let Some(cursor) = start_cursor {
            request = request.query(&[("start_cursor", cursor)]);
        }
        self.send(request)
    }

    fn append_block_children(
        &self,
        block_id: &str,
        children: Vec<Value>,
    ) -> Result<Value, ApiError> {
        debug!(block_id, children = children.len(), "appending block children");
        let body = json!({ "children": children });
        self.send(
            self.request(Method::PATCH, &format!("blocks/{block_id}/children"))
                .json(&body),
        )
    }
}
