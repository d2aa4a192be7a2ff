//! API surface suppression.
//!
//! Pure set-difference over the host's route and method tables: fixed key
//! lists are removed if present, everything else passes through untouched.
//! Both functions are input → output with no other side effects.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// REST route patterns removed: collection and single-item forms for posts
/// and the two post taxonomies.
pub const REST_ROUTES: [&str; 6] = [
    "/api/posts",
    "/api/posts/:id",
    "/api/categories",
    "/api/categories/:id",
    "/api/tags",
    "/api/tags/:id",
];

/// Legacy RPC methods removed, spanning the native namespace and the three
/// compatibility namespaces (Blogger, MetaWeblog, MovableType).
pub const RPC_METHODS: [&str; 24] = [
    "core.getPost",
    "core.getPosts",
    "core.newPost",
    "core.editPost",
    "core.deletePost",
    "core.getCategories",
    "core.getTags",
    "blogger.getPost",
    "blogger.getRecentPosts",
    "blogger.newPost",
    "blogger.editPost",
    "blogger.deletePost",
    "metaWeblog.getPost",
    "metaWeblog.getRecentPosts",
    "metaWeblog.newPost",
    "metaWeblog.editPost",
    "metaWeblog.deletePost",
    "mt.getRecentPostTitles",
    "mt.getCategoryList",
    "mt.getPostCategories",
    "mt.setPostCategories",
    "mt.getTrackbackPings",
    "mt.publishPost",
    "mt.supportedTextFilters",
];

/// Handler descriptor for one REST route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Allowed HTTP methods.
    pub methods: Vec<String>,
    /// Handler callback name.
    pub handler: String,
}

/// The host's REST route table: path pattern → handler descriptor.
pub type RouteTable = HashMap<String, RouteDescriptor>;

/// Handler descriptor for one legacy RPC method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcMethod {
    /// Handler callback name.
    pub handler: String,
}

/// The host's legacy RPC method table: method name → handler descriptor.
pub type RpcMethodTable = HashMap<String, RpcMethod>;

/// Remove the post REST routes from the route table.
pub fn prune_rest_routes(mut routes: RouteTable) -> RouteTable {
    for path in REST_ROUTES {
        if routes.remove(path).is_some() {
            debug!(path, "removed post REST route");
        }
    }
    routes
}

/// Remove the post RPC methods from the method table.
pub fn prune_rpc_methods(mut methods: RpcMethodTable) -> RpcMethodTable {
    for name in RPC_METHODS {
        if methods.remove(name).is_some() {
            debug!(method = name, "removed legacy RPC method");
        }
    }
    methods
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn route(handler: &str) -> RouteDescriptor {
        RouteDescriptor {
            methods: vec!["GET".to_string(), "POST".to_string()],
            handler: handler.to_string(),
        }
    }

    #[test]
    fn all_post_routes_are_removed_others_kept() {
        let mut routes = RouteTable::new();
        for path in REST_ROUTES {
            routes.insert(path.to_string(), route("post_handler"));
        }
        routes.insert("/api/pages".to_string(), route("page_handler"));
        routes.insert("/api/users/:id".to_string(), route("user_handler"));

        let pruned = prune_rest_routes(routes);

        for path in REST_ROUTES {
            assert!(!pruned.contains_key(path));
        }
        assert_eq!(pruned.len(), 2);
        assert_eq!(pruned["/api/pages"], route("page_handler"));
    }

    #[test]
    fn route_table_without_post_routes_is_unchanged() {
        let mut routes = RouteTable::new();
        routes.insert("/api/pages".to_string(), route("page_handler"));
        routes.insert("/api/media".to_string(), route("media_handler"));

        let before = routes.clone();
        assert_eq!(prune_rest_routes(routes), before);
    }

    #[test]
    fn empty_route_table_stays_empty() {
        assert!(prune_rest_routes(RouteTable::new()).is_empty());
    }

    #[test]
    fn all_rpc_methods_are_removed_others_kept() {
        let mut methods = RpcMethodTable::new();
        for name in RPC_METHODS {
            methods.insert(
                name.to_string(),
                RpcMethod {
                    handler: "post_rpc".to_string(),
                },
            );
        }
        methods.insert(
            "core.getPage".to_string(),
            RpcMethod {
                handler: "page_rpc".to_string(),
            },
        );
        methods.insert(
            "core.listMedia".to_string(),
            RpcMethod {
                handler: "media_rpc".to_string(),
            },
        );

        let pruned = prune_rpc_methods(methods);

        for name in RPC_METHODS {
            assert!(!pruned.contains_key(name));
        }
        assert_eq!(pruned.len(), 2);
    }

    #[test]
    fn method_table_without_post_methods_is_unchanged() {
        let mut methods = RpcMethodTable::new();
        methods.insert(
            "core.getPage".to_string(),
            RpcMethod {
                handler: "page_rpc".to_string(),
            },
        );

        let before = methods.clone();
        assert_eq!(prune_rpc_methods(methods), before);
    }

    #[test]
    fn method_list_spans_the_four_namespaces() {
        assert_eq!(RPC_METHODS.len(), 24);
        for prefix in ["core.", "blogger.", "metaWeblog.", "mt."] {
            assert!(RPC_METHODS.iter().any(|m| m.starts_with(prefix)));
        }
    }
}
