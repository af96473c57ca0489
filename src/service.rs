//! The create-entry flow shared by the HTTP surface and the CLI direct mode.

use tracing::{info, warn};

use crate::domain::{Entry, InboxResponse};
use crate::notion::{GatewayError, InboxGateway};

/// Prefix marking a response where the page exists but the rollup append failed.
pub const ROLLUP_FAILURE_PREFIX: &str = "Created page but failed to add to daily rollup: ";

/// Files an entry: creates its page, then optionally links it in the daily
/// rollup.
///
/// Never fails. Every error is folded into the returned `InboxResponse`, and
/// the message tells "nothing was created" apart from "page created but the
/// rollup append failed". A created page is never rolled back or retried.
pub fn create_inbox_entry<G: InboxGateway + ?Sized>(entry: &Entry, gateway: &G) -> InboxResponse {
    let page = match gateway.create_entry_page(entry) {
        Ok(page) => page,
        Err(GatewayError::Inbox(err)) => {
            warn!(error = %err, "entry not created");
            return InboxResponse::failure(err.to_string());
        }
        Err(GatewayError::Api(err)) => {
            warn!(error = %err, "entry not created, unexpected failure");
            return InboxResponse::failure(format!("Unexpected error: {err}"));
        }
    };
    info!(page_id = %page.id, "created inbox page");

    if entry.also_add_to_daily_rollup()
        && !page.id.is_empty()
        && !page.url.is_empty()
        && let Err(err) = gateway.append_to_daily_rollup(&page.id, entry.title(), &page.url)
    {
        warn!(page_id = %page.id, error = %err, "page created but rollup append failed");
        return InboxResponse::partial_failure(
            page.id,
            page.url,
            format!("{ROLLUP_FAILURE_PREFIX}{err}"),
        );
    }

    InboxResponse::success(page.id, page.url)
}
