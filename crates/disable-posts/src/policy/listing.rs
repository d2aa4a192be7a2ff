//! Listing/query filter.
//!
//! Runs after every other handler at query preparation so its narrowing
//! cannot be undone. Strips posts from search/archive/home/feed listings and
//! hard-404s taxonomy pages belonging to the post taxonomies. Unlike the
//! outcome policy this never terminates the request; the host's own
//! not-found path takes over downstream.

use axum::http::StatusCode;
use tracing::debug;

use crate::host::{ListingQuery, RequestContext, TypeFilter};
use crate::{POST_TAXONOMIES, POST_TYPE};

/// Filter the host's main listing query.
///
/// Mutates the query descriptor at most once: narrows the requested
/// content-type set on listings, or marks post-taxonomy pages not-found.
pub fn filter_listing(ctx: &RequestContext, query: &mut ListingQuery) {
    if ctx.is_admin || !query.main {
        return;
    }

    if query.is_listing() {
        narrow_item_types(query);
    }

    if let Some(taxonomy) = query.taxonomy.as_deref()
        && POST_TAXONOMIES.contains(&taxonomy)
    {
        debug!(taxonomy, "post taxonomy page marked not-found");
        query.not_found = true;
        query.status = Some(StatusCode::NOT_FOUND);
        query.no_cache = true;
    }
}

/// Remove the post type from the query's requested type set.
///
/// An unset filter defaults to just the post type; a single bare value is
/// normalized into a one-element set. When narrowing would leave the set
/// empty the original filter is kept untouched: an empty type filter is
/// never written back, even though that preserves posts in the result.
fn narrow_item_types(query: &mut ListingQuery) {
    let requested = match &query.item_types {
        None => vec![POST_TYPE.to_string()],
        Some(filter) => filter.to_vec(),
    };

    let narrowed: Vec<String> = requested.into_iter().filter(|t| t != POST_TYPE).collect();

    if narrowed.is_empty() {
        debug!("narrowed type set would be empty, keeping original filter");
        return;
    }

    debug!(types = ?narrowed, "narrowed listing to non-post types");
    query.item_types = Some(TypeFilter::Many(narrowed));
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn main_listing() -> ListingQuery {
        ListingQuery {
            main: true,
            search: true,
            ..Default::default()
        }
    }

    #[test]
    fn skips_admin_requests() {
        let ctx = RequestContext {
            is_admin: true,
            ..Default::default()
        };
        let mut query = main_listing();
        query.item_types = Some(TypeFilter::Many(vec![
            "post".to_string(),
            "page".to_string(),
        ]));

        filter_listing(&ctx, &mut query);

        assert_eq!(
            query.item_types,
            Some(TypeFilter::Many(vec![
                "post".to_string(),
                "page".to_string()
            ]))
        );
    }

    #[test]
    fn skips_secondary_queries() {
        let mut query = main_listing();
        query.main = false;
        query.item_types = Some(TypeFilter::One("post".to_string()));

        filter_listing(&RequestContext::default(), &mut query);

        assert_eq!(query.item_types, Some(TypeFilter::One("post".to_string())));
    }

    #[test]
    fn narrows_mixed_type_set() {
        let mut query = main_listing();
        query.item_types = Some(TypeFilter::Many(vec![
            "post".to_string(),
            "page".to_string(),
            "event".to_string(),
        ]));

        filter_listing(&RequestContext::default(), &mut query);

        assert_eq!(
            query.item_types,
            Some(TypeFilter::Many(vec![
                "page".to_string(),
                "event".to_string()
            ]))
        );
    }

    #[test]
    fn normalizes_bare_value_before_narrowing() {
        let mut query = main_listing();
        query.item_types = Some(TypeFilter::One("page".to_string()));

        filter_listing(&RequestContext::default(), &mut query);

        assert_eq!(query.item_types, Some(TypeFilter::Many(vec![
            "page".to_string()
        ])));
    }

    #[test]
    fn post_only_set_is_left_untouched() {
        // Current behavior: never write back an empty filter, even though
        // this keeps posts in the listing for that specific input.
        let mut query = main_listing();
        query.item_types = Some(TypeFilter::Many(vec!["post".to_string()]));

        filter_listing(&RequestContext::default(), &mut query);

        assert_eq!(query.item_types, Some(TypeFilter::Many(vec![
            "post".to_string()
        ])));
    }

    #[test]
    fn unset_filter_stays_unset() {
        let mut query = main_listing();

        filter_listing(&RequestContext::default(), &mut query);

        assert_eq!(query.item_types, None);
        assert!(!query.not_found);
    }

    #[test]
    fn feed_queries_are_narrowed() {
        let mut query = ListingQuery {
            main: true,
            feed: true,
            item_types: Some(TypeFilter::Many(vec![
                "post".to_string(),
                "page".to_string(),
            ])),
            ..Default::default()
        };

        filter_listing(&RequestContext::default(), &mut query);

        assert_eq!(query.item_types, Some(TypeFilter::Many(vec![
            "page".to_string()
        ])));
    }

    #[test]
    fn post_taxonomy_pages_are_not_found() {
        for taxonomy in ["category", "tag"] {
            let mut query = ListingQuery {
                main: true,
                archive: true,
                taxonomy: Some(taxonomy.to_string()),
                ..Default::default()
            };

            filter_listing(&RequestContext::default(), &mut query);

            assert!(query.not_found);
            assert_eq!(query.status, Some(StatusCode::NOT_FOUND));
            assert!(query.no_cache);
        }
    }

    #[test]
    fn other_taxonomies_are_untouched() {
        let mut query = ListingQuery {
            main: true,
            taxonomy: Some("venue".to_string()),
            ..Default::default()
        };

        filter_listing(&RequestContext::default(), &mut query);

        assert!(!query.not_found);
        assert_eq!(query.status, None);
    }

    #[test]
    fn taxonomy_not_found_regardless_of_other_parameters() {
        let mut query = ListingQuery {
            main: true,
            search: true,
            feed: true,
            taxonomy: Some("tag".to_string()),
            item_types: Some(TypeFilter::Many(vec![
                "post".to_string(),
                "page".to_string(),
            ])),
            ..Default::default()
        };

        filter_listing(&RequestContext::default(), &mut query);

        assert!(query.not_found);
        assert_eq!(query.status, Some(StatusCode::NOT_FOUND));
    }
}
