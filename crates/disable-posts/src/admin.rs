//! Admin surface and chrome suppression.
//!
//! Redirects post admin screens to the admin home and prunes post entry
//! points from the admin chrome: the quick-draft dashboard tile, the
//! admin-bar shortcut, and the navigation menu entries. Removing an
//! already-absent entry is a no-op by host contract.

use std::collections::HashMap;

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::POST_TYPE;
use crate::host::SiteInfo;

/// Identifier of the quick-draft dashboard tile. Hard-wired to the post
/// type by the host, so it is removed unconditionally.
pub const QUICK_DRAFT_TILE: &str = "quick-draft";

/// Identifier of the admin-bar "New post" shortcut node.
pub const NEW_POST_NODE: &str = "new-post";

/// Admin menu entries removed: the post list and the two taxonomy
/// management pages.
pub const ADMIN_MENU_ENTRIES: [&str; 3] = [
    "/admin/content/posts",
    "/admin/structure/categories",
    "/admin/structure/tags",
];

/// The admin screen a request resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminScreen {
    /// Editing a single existing item of the given type.
    EditItem { item_type: String },
    /// Item list screen. `None` is the generic list screen, which defaults
    /// to posts.
    ListItems { item_type: Option<String> },
    /// Create-new-item screen for the given type.
    NewItem { item_type: String },
    /// Any other admin screen, by path.
    Other(String),
}

impl AdminScreen {
    /// Whether this screen is dedicated to the post type.
    fn targets_posts(&self) -> bool {
        match self {
            AdminScreen::EditItem { item_type } | AdminScreen::NewItem { item_type } => {
                item_type == POST_TYPE
            }
            AdminScreen::ListItems { item_type } => {
                item_type.as_deref().unwrap_or(POST_TYPE) == POST_TYPE
            }
            AdminScreen::Other(_) => false,
        }
    }
}

/// Redirect post admin screens to the admin home.
///
/// Skipped for asynchronous background requests. `Some(response)` is a 301
/// to the admin home and terminates processing.
pub fn admin_screen_redirect(
    screen: &AdminScreen,
    is_async: bool,
    site: &SiteInfo,
) -> Option<Response> {
    if is_async || !screen.targets_posts() {
        return None;
    }

    debug!(?screen, "redirecting post admin screen to admin home");
    let location = HeaderValue::from_str(&site.admin_url)
        .unwrap_or_else(|_| HeaderValue::from_static("/admin"));
    Some((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}

/// A dashboard tile registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardTile {
    /// Tile identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Handler callback name.
    pub callback: String,
}

/// Remove the quick-draft tile from the dashboard tile registry.
pub fn remove_quick_draft_tile(tiles: &mut HashMap<String, DashboardTile>) {
    if tiles.remove(QUICK_DRAFT_TILE).is_some() {
        debug!(tile = QUICK_DRAFT_TILE, "removed dashboard tile");
    }
}

/// The admin top bar: a flat node tree plus its visibility flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminBar {
    /// Whether the bar is rendered for the current request.
    pub visible: bool,
    /// Nodes keyed by identifier.
    pub nodes: HashMap<String, AdminBarNode>,
}

/// One node in the admin top bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminBarNode {
    /// Node identifier.
    pub id: String,
    /// Link text.
    pub title: String,
    /// Link target.
    pub href: String,
}

/// Remove the "New post" shortcut from the admin bar, if the bar is shown.
pub fn prune_admin_bar(bar: &mut AdminBar) {
    if !bar.visible {
        return;
    }
    if bar.nodes.remove(NEW_POST_NODE).is_some() {
        debug!(node = NEW_POST_NODE, "removed admin bar shortcut");
    }
}

/// An admin navigation menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// URL path of the admin page.
    pub path: String,
    /// Human-readable title.
    pub title: String,
    /// Parent menu path for hierarchy.
    #[serde(default)]
    pub parent: Option<String>,
}

/// Remove the post list and taxonomy management entries from the admin menu.
pub fn prune_admin_menu(menu: &mut HashMap<String, MenuEntry>) {
    for path in ADMIN_MENU_ENTRIES {
        if menu.remove(path).is_some() {
            debug!(path, "removed admin menu entry");
        }
    }
}
