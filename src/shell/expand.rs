//! Argument expansion for add/remove/reset
//!
//! Pure transformation from a raw argument string to an ordered list of
//! dimension names. No mutation happens here - all data comes from resolver
//! queries, making this easy to unit test.

use crate::resolver::ConflictResolver;
use crate::types::ConflictStatus;

/// Map a special keyword to the conflict status it selects.
fn special_keyword(raw: &str) -> Option<ConflictStatus> {
    match raw {
        "~new" => Some(ConflictStatus::New),
        "~changed" => Some(ConflictStatus::Changed),
        "~missing" => Some(ConflictStatus::Missing),
        _ => None,
    }
}

/// Expand a raw argument string into dimension names.
///
/// The whole string may be one of the special keywords (`~new`, `~changed`,
/// `~missing`), selecting every *unsolved* conflict of that status. Otherwise
/// it is whitespace-split; a token containing `*` expands to all known
/// dimension names sharing the prefix before the first `*`, and other tokens
/// pass through verbatim.
///
/// Expansion always collects into a fresh list, so several wildcard tokens in
/// one command all expand.
pub fn expand_args<R>(resolver: &R, raw: &str) -> Vec<String>
where
    R: ConflictResolver + ?Sized,
{
    if let Some(status) = special_keyword(raw) {
        return resolver
            .unsolved_with_status(status)
            .into_iter()
            .map(|c| c.dimension.name)
            .collect();
    }

    let mut names = Vec::new();
    for token in raw.split_whitespace() {
        if let Some((prefix, _)) = token.split_once('*') {
            names.extend(resolver.dimension_names_with_prefix(prefix));
        } else {
            names.push(token.to_string());
        }
    }
    names
}
