//! Request outcome policy for disabled posts.
//!
//! Runs before every other handler at response resolution. For requests that
//! resolve to a single post outside admin/async/cron/API contexts it decides
//! between a not-found response (404/410) and a redirect, and emits the
//! response that terminates request processing. All malformed inputs are
//! coerced to safe values; this policy never fails.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::host::{RequestContext, SiteInfo};

/// Cache-prevention headers attached to policy not-found responses.
const NO_CACHE_HEADERS: [(&str, &str); 3] = [
    ("Cache-Control", "no-cache, no-store, must-revalidate"),
    ("Pragma", "no-cache"),
    ("Expires", "0"),
];

/// Minimal inline body used when the host has no not-found presentation.
const FALLBACK_NOT_FOUND_BODY: &str =
    "<!doctype html><html><head><title>Not Found</title></head>\
     <body><h1>Not Found</h1></body></html>";

/// The decision for one request resolving to a disabled post.
///
/// Ephemeral: computed fresh per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Answer with a not-found presentation at the given status (404 or 410).
    NotFound { status: StatusCode },
    /// Redirect to a same-site-safe location, status within [300, 399].
    Redirect { status: StatusCode, location: String },
}

/// Decide the outcome for the current request, if any.
///
/// Returns `None` when the request does not resolve to a single post or when
/// the context bypasses presentation policy (fall through to normal host
/// behavior).
pub fn decide_outcome(
    ctx: &RequestContext,
    settings: &Settings,
    site: &SiteInfo,
) -> Option<Disposition> {
    if !ctx.resolves_post() {
        return None;
    }
    if !ctx.is_presentation() {
        return None;
    }

    let disposition = match settings.status_code {
        404 => Disposition::NotFound {
            status: StatusCode::NOT_FOUND,
        },
        410 => Disposition::NotFound {
            status: StatusCode::GONE,
        },
        code => Disposition::Redirect {
            status: coerce_redirect_status(code),
            location: redirect_target(&settings.redirect_url, site),
        },
    };

    debug!(?disposition, "suppressing request for disabled post");
    Some(disposition)
}

/// Emit the response for a disposition.
///
/// `not_found_body` is the host's pre-rendered not-found presentation; when
/// absent a minimal inline body is substituted so the request still
/// terminates deterministically. The host must stop all further processing
/// once this response is returned.
pub fn emit(disposition: Disposition, not_found_body: Option<String>) -> Response {
    match disposition {
        Disposition::NotFound { status } => {
            let body = not_found_body.unwrap_or_else(|| FALLBACK_NOT_FOUND_BODY.to_string());
            let mut response = (status, Html(body)).into_response();
            for (name, value) in NO_CACHE_HEADERS {
                response
                    .headers_mut()
                    .insert(name, HeaderValue::from_static(value));
            }
            response
        }
        Disposition::Redirect { status, location } => {
            match HeaderValue::from_str(&location) {
                Ok(value) => (status, [(header::LOCATION, value)]).into_response(),
                // Unrepresentable header value; the location was already
                // sanitized, so this only covers non-visible-ASCII targets.
                Err(_) => (status, [(header::LOCATION, HeaderValue::from_static("/"))])
                    .into_response(),
            }
        }
    }
}

/// Run the full outcome policy: decide, then emit.
///
/// `Some(response)` means the request is settled and no further handler or
/// normal rendering may run.
pub fn handle(
    ctx: &RequestContext,
    settings: &Settings,
    site: &SiteInfo,
    not_found_body: Option<String>,
) -> Option<Response> {
    decide_outcome(ctx, settings, site).map(|disposition| emit(disposition, not_found_body))
}

/// Coerce a configured status code into the valid redirect range.
///
/// Anything outside [300, 399] becomes 301.
fn coerce_redirect_status(code: u16) -> StatusCode {
    if (300..=399).contains(&code) {
        StatusCode::from_u16(code).unwrap_or(StatusCode::MOVED_PERMANENTLY)
    } else {
        warn!(code, "status code outside redirect range, substituting 301");
        StatusCode::MOVED_PERMANENTLY
    }
}

/// Resolve the redirect target, falling back to the site home.
///
/// Strips CR/LF to keep the Location header uninjectable, then requires a
/// same-site-safe destination: a relative path or an absolute http(s) URL.
fn redirect_target(configured: &str, site: &SiteInfo) -> String {
    let sanitized: String = configured
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .collect();

    if sanitized.is_empty() {
        return site.home_url.clone();
    }
    if !is_safe_destination(&sanitized) {
        warn!(destination = %sanitized, "unsafe redirect target, falling back to site home");
        return site.home_url.clone();
    }
    sanitized
}

/// Whether a redirect destination is safe to emit.
///
/// Relative paths are safe unless scheme-relative (`//host`); absolute URLs
/// must use http or https.
pub fn is_safe_destination(destination: &str) -> bool {
    if destination.is_empty() {
        return false;
    }
    if destination.starts_with('/') && !destination.starts_with("//") {
        return true;
    }
    if destination.starts_with("https://") || destination.starts_with("http://") {
        return true;
    }
    false
}
