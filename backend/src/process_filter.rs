//! Name filtering with regular expressions.

use crate::types::{ProcError, ProcessRecord};
use regex::Regex;
use std::io::Write;
use tracing::{debug, warn};

/// A compiled process-name pattern.
///
/// Matching is a search anywhere in the name, not a whole-name match; use
/// `^...$` in the pattern to anchor it.
#[derive(Debug, Clone)]
pub struct NameFilter {
    regex: Regex,
}

impl NameFilter {
    pub fn new(pattern: &str) -> Result<Self, ProcError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    pub fn is_match(&self, record: &ProcessRecord) -> bool {
        self.regex.is_match(&record.name)
    }

    /// Keep matching records, preserving their order.
    pub fn apply(&self, records: &[ProcessRecord]) -> Vec<ProcessRecord> {
        records.iter().filter(|r| self.is_match(r)).cloned().collect()
    }
}

/// Filter `records` by `pattern`.
///
/// An invalid pattern is reported on `out` and yields no matches.
pub fn filter_processes<W: Write>(
    records: &[ProcessRecord],
    pattern: &str,
    out: &mut W,
) -> std::io::Result<Vec<ProcessRecord>> {
    let filter = match NameFilter::new(pattern) {
        Ok(filter) => filter,
        Err(e) => {
            warn!("Rejected pattern {:?}: {}", pattern, e);
            writeln!(out, "{}", e)?;
            return Ok(Vec::new());
        }
    };

    let matched = filter.apply(records);
    debug!(
        "Pattern {:?} matched {} of {} processes",
        pattern,
        matched.len(),
        records.len()
    );
    Ok(matched)
}
