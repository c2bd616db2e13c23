//! Cursor convention for list-shaped results.
//!
//! Lists come back newest first. A page that has older entries sets
//! `has_more`; the next page is the same query with `before=<ordinal>`,
//! where the ordinal (a block height) is read from the last entry of the
//! page already held by the caller. Nothing is remembered between calls.

use crate::client::{query, QueryParams};
use crate::error::BcyError;

/// Query parameter naming the exclusive upper bound of the next page.
pub const BEFORE_PARAM: &str = "before";

/// Parameters for the page after one whose trailing entry has `last_ordinal`.
///
/// Fails with [`BcyError::NoMorePages`] when `has_more` is false, or when the
/// page is empty and so has no trailing entry to continue from. `what`
/// names the call in the error.
pub fn next_page_params(
    what: &'static str,
    has_more: bool,
    last_ordinal: Option<i64>,
) -> Result<QueryParams, BcyError> {
    if !has_more {
        return Err(BcyError::NoMorePages(what));
    }
    let before = last_ordinal.ok_or(BcyError::NoMorePages(what))?;
    Ok(query([(BEFORE_PARAM, before.to_string())]))
}
