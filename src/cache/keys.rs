//! Cache Key Builders
//!
//! Composes the key string for each cached resource class. Every class
//! carries its own prefix, so the same id never collides across classes:
//! `replies:7` and `mentions:7` are always disjoint.

use std::fmt::Display;

/// Key for the cached replies of one thread.
pub fn thread_replies(thread_id: impl Display) -> String {
    format!("replies:{thread_id}")
}

/// Key for the cached mentions of one account.
pub fn mentions(account_id: impl Display) -> String {
    format!("mentions:{account_id}")
}

/// Key for the cached insights of one thread.
pub fn insights(thread_id: impl Display) -> String {
    format!("insights:{thread_id}")
}

/// Key for the cached detail view of one thread.
pub fn thread_detail(thread_id: impl Display) -> String {
    format!("thread:{thread_id}")
}

/// Substring matching every cached facet of one thread, for
/// [`CacheStore::delete_pattern`](crate::cache::CacheStore::delete_pattern).
///
/// Substring matching is literal: `:7` also matches ids that merely end
/// in 7, such as `:17`, which over-invalidates but never leaves a stale
/// entry behind.
pub fn thread_facets(thread_id: impl Display) -> String {
    format!(":{thread_id}")
}
