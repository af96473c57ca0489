//! Inbox operations on top of the Notion API.

use chrono::{Local, NaiveDate};
use serde_json::Value;
use tracing::{debug, warn};

use super::api::NotionApi;
use super::error::{ApiError, GatewayError, classify};
use super::properties::entry_properties;
use crate::blocks::{DEFAULT_MAX_CHUNK_LEN, chunk_blocks, markdown_to_blocks};
use crate::domain::{Block, Entry, HeadingLevel, first_text_run};

const DATABASE_RESOURCE: &str = "Database";
const ROLLUP_RESOURCE: &str = "Daily rollup page";

/// A page created for an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPage {
    pub id: String,
    /// Empty when the API response carried no URL.
    pub url: String,
}

/// The two inbox operations the orchestrator sequences.
pub trait InboxGateway {
    /// Creates the entry's page in the inbox database.
    fn create_entry_page(&self, entry: &Entry) -> Result<CreatedPage, GatewayError>;

    /// Links a created page under today's heading in the rollup page.
    ///
    /// Does nothing when no rollup page is configured.
    fn append_to_daily_rollup(
        &self,
        page_id: &str,
        title: &str,
        page_url: &str,
    ) -> Result<(), GatewayError>;
}

/// Where the gateway files entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayConfig {
    pub inbox_database_id: String,
    /// Empty or absent disables the rollup append.
    pub daily_rollup_page_id: Option<String>,
}

/// Returns the rollup heading for a day.
pub fn rollup_heading(date: NaiveDate) -> String {
    format!("Inbox entries - {}", date.format("%Y-%m-%d"))
}

/// `InboxGateway` backed by a `NotionApi` session.
#[derive(Debug)]
pub struct NotionGateway<A> {
    api: A,
    config: GatewayConfig,
    max_chunk_len: usize,
    today: Option<NaiveDate>,
}

impl<A: NotionApi> NotionGateway<A> {
    pub fn new(api: A, config: GatewayConfig) -> Self {
        Self {
            api,
            config,
            max_chunk_len: DEFAULT_MAX_CHUNK_LEN,
            today: None,
        }
    }

    /// Pins the date used for the rollup heading instead of the local date.
    pub fn with_today(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Scans every page of the rollup's children for a level-two heading
    /// reading exactly `text`.
    fn has_heading(&self, rollup_id: &str, text: &str) -> Result<bool, ApiError> {
        let heading_type = HeadingLevel::Two.block_type();
        let mut cursor: Option<String> = None;

        loop {
            let page = self.api.list_block_children(rollup_id, cursor.as_deref())?;
            let found = page
                .get("results")
                .and_then(Value::as_array)
                .is_some_and(|blocks| {
                    blocks
                        .iter()
                        .any(|block| first_text_run(block, heading_type) == Some(text))
                });
            if found {
                return Ok(true);
            }

            let has_more = page.get("has_more").and_then(Value::as_bool) == Some(true);
            match page.get("next_cursor").and_then(Value::as_str) {
                Some(next) if has_more => cursor = Some(next.to_string()),
                _ => return Ok(false),
            }
        }
    }

    fn rollup_page_id(&self) -> Option<&str> {
        self.config
            .daily_rollup_page_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }

    /// Translates entry content into page children.
    ///
    /// Chunks are flattened back into one list: the page is created with a
    /// single request, so chunk boundaries carry no structure.
    fn content_children(&self, entry: &Entry) -> Vec<Value> {
        let Some(content) = entry.content() else {
            return Vec::new();
        };
        chunk_blocks(markdown_to_blocks(content), self.max_chunk_len)
            .into_iter()
            .flatten()
            .map(|block| block.to_json())
            .collect()
    }
}

fn page_field<'a>(page: &'a Value, field: &str) -> Option<&'a str> {
    page.get(field).and_then(Value::as_str)
}

impl<A: NotionApi> InboxGateway for NotionGateway<A> {
    fn create_entry_page(&self, entry: &Entry) -> Result<CreatedPage, GatewayError> {
        let children = self.content_children(entry);

        let page = self
            .api
            .create_page(
                &self.config.inbox_database_id,
                entry_properties(entry),
                children,
            )
            .map_err(|err| {
                warn!(error = %err, "create page failed");
                classify(err, DATABASE_RESOURCE)
            })?;

        let id = page_field(&page, "id")
            .ok_or_else(|| ApiError::Decode("page response has no id".to_string()))
            .map_err(|err| classify(err, DATABASE_RESOURCE))?;
        let url = page_field(&page, "url").unwrap_or_default();
        debug!(page_id = id, "page created");

        Ok(CreatedPage {
            id: id.to_string(),
            url: url.to_string(),
        })
    }

    fn append_to_daily_rollup(
        &self,
        page_id: &str,
        title: &str,
        page_url: &str,
    ) -> Result<(), GatewayError> {
        let Some(rollup_id) = self.rollup_page_id() else {
            debug!(page_id, "no rollup page configured, skipping");
            return Ok(());
        };

        let heading_text = rollup_heading(self.today());
        let classify_rollup = |err: ApiError| {
            warn!(error = %err, "daily rollup call failed");
            classify(err, ROLLUP_RESOURCE)
        };

        let has_heading_today = self
            .has_heading(rollup_id, &heading_text)
            .map_err(classify_rollup)?;

        let mut blocks = Vec::with_capacity(2);
        if !has_heading_today {
            blocks.push(Block::heading(HeadingLevel::Two, heading_text));
        }
        blocks.push(Block::link(title, page_url));

        self.api
            .append_block_children(rollup_id, blocks.iter().map(Block::to_json).collect())
            .map_err(classify_rollup)?;
        debug!(page_id, rollup_id, "linked page in daily rollup");
        Ok(())
    }
}
