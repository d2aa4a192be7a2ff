//! Post suppression extension.
//!
//! Selectively disables the `post` content type across every surface of the
//! CMS: public rendering, search/archive/home/feed listings, admin UI, REST
//! API, legacy XML-RPC API, block editor, and widgets.
//!
//! There is no engine here. The crate is a set of independent, stateless
//! policy handlers, each bound to one host lifecycle event through the
//! registration table in [`tap`]. Handlers take plain request/query values
//! and return plain results; the host adapter owns dispatch.

pub mod admin;
pub mod api;
pub mod config;
pub mod editor;
pub mod host;
pub mod policy;
pub mod tap;

/// Machine name of the content type being suppressed.
pub const POST_TYPE: &str = "post";

/// Taxonomies belonging to the post content type. Pages classified by either
/// of these are hard-404ed by the listing filter.
pub const POST_TAXONOMIES: [&str; 2] = ["category", "tag"];
