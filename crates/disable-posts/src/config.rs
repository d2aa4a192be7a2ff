//! Per-request configuration resolution.
//!
//! Policy behavior is driven by a small [`Settings`] value resolved fresh for
//! each request from built-in defaults plus any installed override filters.
//! Nothing here is cached or shared across requests.

use std::env;

use tracing::debug;

use crate::host::SiteInfo;

/// Environment flag marking a command-line/automation host context.
///
/// When set to any non-empty value, no handlers register at all: the
/// suppression is meant to affect interactive web and editor contexts only.
pub const CLI_CONTEXT_ENV: &str = "HOST_CLI";

/// Default status code for requests resolving to a disabled post.
pub const DEFAULT_STATUS_CODE: u16 = 404;

/// A value filter installed at an override point. Filters receive the
/// current value and return a replacement; they are applied in install order.
pub type ValueFilter<T> = Box<dyn Fn(T) -> T + Send + Sync>;

/// Installed override filters for the three override points.
///
/// External code customizes policy by installing filters here before the
/// host adapter resolves settings; an empty set yields pure defaults.
#[derive(Default)]
pub struct Overrides {
    enabled: Vec<ValueFilter<bool>>,
    status_code: Vec<ValueFilter<u16>>,
    redirect_url: Vec<ValueFilter<String>>,
}

impl Overrides {
    /// Create an empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a filter on the `enabled` gate.
    pub fn on_enabled<F>(mut self, filter: F) -> Self
    where
        F: Fn(bool) -> bool + Send + Sync + 'static,
    {
        self.enabled.push(Box::new(filter));
        self
    }

    /// Install a filter on the disabled-post status code.
    pub fn on_status_code<F>(mut self, filter: F) -> Self
    where
        F: Fn(u16) -> u16 + Send + Sync + 'static,
    {
        self.status_code.push(Box::new(filter));
        self
    }

    /// Install a filter on the redirect target URL.
    pub fn on_redirect_url<F>(mut self, filter: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.redirect_url.push(Box::new(filter));
        self
    }
}

/// Resolved policy configuration for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Master gate. When false, no handlers register.
    pub enabled: bool,
    /// Status code for requests resolving to a disabled post.
    pub status_code: u16,
    /// Redirect target when the status code is a redirect code.
    /// Never empty: an empty override result falls back to the site home.
    pub redirect_url: String,
}

impl Settings {
    /// Resolve settings by folding each override point's filters over its
    /// default value.
    pub fn resolve(overrides: &Overrides, site: &SiteInfo) -> Self {
        let enabled = overrides.enabled.iter().fold(true, |value, f| f(value));

        let status_code = overrides
            .status_code
            .iter()
            .fold(DEFAULT_STATUS_CODE, |value, f| f(value));

        let redirect_url = overrides
            .redirect_url
            .iter()
            .fold(site.home_url.clone(), |value, f| f(value));
        let redirect_url = if redirect_url.is_empty() {
            debug!("empty redirect-url override, falling back to site home");
            site.home_url.clone()
        } else {
            redirect_url
        };

        Self {
            enabled,
            status_code,
            redirect_url,
        }
    }
}

/// Whether the process is running under a command-line/automation host.
pub fn is_cli_context() -> bool {
    env::var(CLI_CONTEXT_ENV).is_ok_and(|v| !v.is_empty())
}
