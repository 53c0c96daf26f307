//! Linear lookups over stack outputs and distributions
//!
//! Neither list carries a uniqueness guarantee, so both lookups return the
//! first match.

use crate::domain::entities::{Distribution, StackOutput};

/// Find the first output whose key equals `key` (case-sensitive)
pub fn find_output<'a>(outputs: &'a [StackOutput], key: &str) -> Option<&'a StackOutput> {
    outputs.iter().find(|output| output.key() == key)
}

/// Find the first distribution serving `domain`
pub fn find_distribution<'a>(
    distributions: &'a [Distribution],
    domain: &str,
) -> Option<&'a Distribution> {
    distributions.iter().find(|d| d.domain_name() == domain)
}
