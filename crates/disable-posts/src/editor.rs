//! Block editor and legacy widget suppression.
//!
//! Runs at lowest priority on platform/widget initialization so the post
//! registrations happen first and are then removed. Unregistering an absent
//! identifier is a no-op by host contract.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Editor block types tied to the post type and its taxonomies.
pub const POST_BLOCK_TYPES: [&str; 8] = [
    "latest-posts",
    "post-archive",
    "post-categories",
    "post-tags",
    "tag-cloud",
    "post-calendar",
    "post-rss",
    "related-posts",
];

/// Legacy widgets tied to the post type.
pub const POST_WIDGETS: [&str; 3] = ["recent-posts", "archives", "categories"];

/// Definition of a single block type in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTypeDefinition {
    /// Machine name of the block type.
    pub type_name: String,
    /// Human-readable label.
    pub label: String,
    /// JSON Schema describing the expected data shape.
    pub schema: Value,
}

/// The host's block type registry, keyed by type name.
pub type BlockRegistry = HashMap<String, BlockTypeDefinition>;

/// Definition of a legacy widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDefinition {
    /// Widget identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
}

/// The host's legacy widget registry, keyed by widget id.
pub type WidgetRegistry = HashMap<String, WidgetDefinition>;

/// Unregister the post block types.
pub fn unregister_post_blocks(registry: &mut BlockRegistry) {
    for type_name in POST_BLOCK_TYPES {
        if registry.remove(type_name).is_some() {
            debug!(block = type_name, "unregistered post block type");
        }
    }
}

/// Unregister the post widgets.
pub fn unregister_post_widgets(registry: &mut WidgetRegistry) {
    for id in POST_WIDGETS {
        if registry.remove(id).is_some() {
            debug!(widget = id, "unregistered post widget");
        }
    }
}
