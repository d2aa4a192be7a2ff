//! Host-adapter value types.
//!
//! Policy handlers never call back into the host. The adapter layer snapshots
//! the ambient request state into these plain values before dispatch, and
//! applies whatever the handlers return (a response, or mutations to the
//! query descriptor) afterward.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::POST_TYPE;

/// Site locations the policies redirect to.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    /// Public home URL (default redirect target).
    pub home_url: String,
    /// Admin home URL (target for suppressed admin screens).
    pub admin_url: String,
}

/// Snapshot of the incoming request, taken at response resolution.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Content type of the single item this request resolved to, if any.
    /// `None` for listings, static pages, and unresolved requests.
    pub resolved_item_type: Option<String>,
    /// Request targets the admin UI.
    pub is_admin: bool,
    /// Asynchronous background request (AJAX-style).
    pub is_async: bool,
    /// Scheduled-task request.
    pub is_cron: bool,
    /// Machine-readable API request (REST or RPC).
    pub is_api: bool,
}

impl RequestContext {
    /// Whether this request resolved to a single post.
    pub fn resolves_post(&self) -> bool {
        self.resolved_item_type.as_deref() == Some(POST_TYPE)
    }

    /// Whether end-user presentation policy applies to this request.
    ///
    /// Admin, async, cron, and API contexts bypass presentation policy.
    pub fn is_presentation(&self) -> bool {
        !self.is_admin && !self.is_async && !self.is_cron && !self.is_api
    }
}

/// Requested content-type filter on a listing query.
///
/// The host accepts either a single bare type name or a list; the listing
/// filter normalizes both into a list before narrowing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeFilter {
    /// Single bare type name.
    One(String),
    /// Explicit set of type names.
    Many(Vec<String>),
}

impl TypeFilter {
    /// Normalize into a list of type names.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            TypeFilter::One(t) => vec![t.clone()],
            TypeFilter::Many(v) => v.clone(),
        }
    }
}

/// The host's mutable descriptor for its primary per-request listing query.
///
/// Read and conditionally mutated exactly once per request by the listing
/// filter; never retained across requests.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    /// This is the host's single authoritative per-request query.
    pub main: bool,
    /// Search results page.
    pub search: bool,
    /// Date/type archive page.
    pub archive: bool,
    /// Site home listing.
    pub home: bool,
    /// Syndication feed.
    pub feed: bool,
    /// Taxonomy the query is classified by, when this is a taxonomy page.
    pub taxonomy: Option<String>,
    /// Requested content-type filter. Unset means the host default.
    pub item_types: Option<TypeFilter>,
    /// Query has been marked not-found.
    pub not_found: bool,
    /// HTTP status forced onto the eventual response, if any.
    pub status: Option<StatusCode>,
    /// Cache-prevention headers must be attached to the response.
    pub no_cache: bool,
}

impl ListingQuery {
    /// Whether this query fetches a listing the filter narrows.
    pub fn is_listing(&self) -> bool {
        self.search || self.archive || self.home || self.feed
    }
}
