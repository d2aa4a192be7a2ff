//! Registration table mapping host lifecycle events to policy handlers.
//!
//! The host adapter asks for [`registrations`] once, builds a
//! [`HandlerTable`], and invokes the handlers registered for each event as
//! its request lifecycle reaches them. Handlers on the same event run in
//! weight order (lower = called first); this crate only ever uses the two
//! extremes.

use std::collections::HashMap;

use tracing::debug;

use crate::config::{self, Settings};

/// Weight that sorts before every other handler on an event.
pub const WEIGHT_FIRST: i32 = i32::MIN;

/// Weight that sorts after every other handler on an event.
pub const WEIGHT_LAST: i32 = i32::MAX;

/// Host lifecycle events this crate consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The response for the current request is about to be resolved.
    ResponseResolution,
    /// The main content query is being prepared.
    QueryPreparation,
    /// Admin request initialization.
    AdminInit,
    /// The admin top bar is being assembled.
    AdminBarBuild,
    /// The admin navigation menu is being assembled.
    AdminMenuBuild,
    /// The REST route table is being assembled.
    RestRouteBuild,
    /// The legacy RPC method table is being assembled.
    RpcMethodBuild,
    /// Platform initialization (block registry is populated).
    PlatformInit,
    /// Widget subsystem initialization.
    WidgetInit,
}

/// The policy handlers this crate provides, by name.
///
/// The host adapter maps each variant to the corresponding function in
/// [`crate::policy`], [`crate::admin`], [`crate::api`], or [`crate::editor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// [`crate::policy::outcome::handle`]
    RequestOutcome,
    /// [`crate::policy::listing::filter_listing`]
    ListingFilter,
    /// [`crate::admin::admin_screen_redirect`]
    AdminScreenRedirect,
    /// [`crate::admin::remove_quick_draft_tile`]
    DashboardTileRemoval,
    /// [`crate::admin::prune_admin_bar`]
    AdminBarPrune,
    /// [`crate::admin::prune_admin_menu`]
    AdminMenuPrune,
    /// [`crate::api::prune_rest_routes`]
    RestRoutePrune,
    /// [`crate::api::prune_rpc_methods`]
    RpcMethodPrune,
    /// [`crate::editor::unregister_post_blocks`]
    BlockUnregister,
    /// [`crate::editor::unregister_post_widgets`]
    WidgetUnregister,
}

/// One (event, weight, handler) entry in the registration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub event: Event,
    pub weight: i32,
    pub handler: Handler,
}

/// Registration table indexed by event, weight-ordered within each event.
#[derive(Debug, Default)]
pub struct HandlerTable {
    handlers: HashMap<Event, Vec<Registration>>,
}

impl HandlerTable {
    /// Build a table from a flat registration list.
    pub fn from_registrations(registrations: Vec<Registration>) -> Self {
        let mut handlers: HashMap<Event, Vec<Registration>> = HashMap::new();

        for registration in registrations {
            handlers
                .entry(registration.event)
                .or_default()
                .push(registration);
        }

        for list in handlers.values_mut() {
            list.sort_by_key(|r| r.weight);
        }

        Self { handlers }
    }

    /// Handlers registered for an event, in weight order.
    pub fn handlers_for(&self, event: Event) -> &[Registration] {
        self.handlers
            .get(&event)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of registrations across all events.
    pub fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    /// Whether no handlers are registered at all.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Build the registration list for the current process.
///
/// Empty when the `enabled` gate is off or the process runs under the
/// command-line/automation host flag; suppression only targets interactive
/// web and editor contexts.
pub fn registrations(settings: &Settings) -> Vec<Registration> {
    if !settings.enabled {
        debug!("post suppression disabled, registering no handlers");
        return Vec::new();
    }
    if config::is_cli_context() {
        debug!("command-line host context, registering no handlers");
        return Vec::new();
    }

    vec![
        Registration {
            event: Event::ResponseResolution,
            weight: WEIGHT_FIRST,
            handler: Handler::RequestOutcome,
        },
        Registration {
            event: Event::QueryPreparation,
            weight: WEIGHT_LAST,
            handler: Handler::ListingFilter,
        },
        Registration {
            event: Event::AdminInit,
            weight: WEIGHT_FIRST,
            handler: Handler::AdminScreenRedirect,
        },
        Registration {
            event: Event::AdminInit,
            weight: WEIGHT_LAST,
            handler: Handler::DashboardTileRemoval,
        },
        Registration {
            event: Event::AdminBarBuild,
            weight: WEIGHT_LAST,
            handler: Handler::AdminBarPrune,
        },
        Registration {
            event: Event::AdminMenuBuild,
            weight: WEIGHT_LAST,
            handler: Handler::AdminMenuPrune,
        },
        Registration {
            event: Event::RestRouteBuild,
            weight: 0,
            handler: Handler::RestRoutePrune,
        },
        Registration {
            event: Event::RpcMethodBuild,
            weight: WEIGHT_LAST,
            handler: Handler::RpcMethodPrune,
        },
        Registration {
            event: Event::PlatformInit,
            weight: WEIGHT_LAST,
            handler: Handler::BlockUnregister,
        },
        Registration {
            event: Event::WidgetInit,
            weight: WEIGHT_LAST,
            handler: Handler::WidgetUnregister,
        },
    ]
}
