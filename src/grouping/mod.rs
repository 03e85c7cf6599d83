//! Grouping of original URL strings by effective TLD.

use std::collections::BTreeMap;

use log::{debug, trace};
use psl::List;

use crate::domain::classify;
use crate::error_handling::{ProcessingStats, SkipReason};

/// Original URL strings keyed by TLD.
///
/// Keys iterate in sorted order; each group keeps input order. Groups are only
/// ever appended to, never merged or removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupingTable {
    groups: BTreeMap<String, Vec<String>>,
}

impl GroupingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `url` to the group for `tld`, creating the group if needed.
    pub fn push(&mut self, tld: &str, url: String) {
        if let Some(group) = self.groups.get_mut(tld) {
            group.push(url);
        } else {
            self.groups.insert(tld.to_string(), vec![url]);
        }
    }

    /// Classifies `candidate` and files it under its TLD.
    ///
    /// Returns true if the candidate was grouped. Candidates that fail
    /// classification, or that have no host, are counted in `stats` and dropped.
    pub fn ingest(&mut self, list: &List, candidate: String, stats: &mut ProcessingStats) -> bool {
        match classify(list, &candidate) {
            Ok(parsed) if parsed.is_hostless() => {
                debug!("Skipping URL without host: {candidate}");
                stats.increment_skip(SkipReason::NoHost);
                false
            }
            Ok(parsed) => {
                trace!("{} -> {}", candidate, parsed.tld);
                self.push(&parsed.tld, candidate);
                stats.record_grouped();
                true
            }
            Err(e) => {
                debug!("Skipping {candidate}: {e}");
                stats.increment_skip(e.skip_reason());
                false
            }
        }
    }

    /// The group for `tld`, if any line was filed under it.
    pub fn get(&self, tld: &str) -> Option<&[String]> {
        self.groups.get(tld).map(Vec::as_slice)
    }

    /// Number of distinct TLDs.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of URLs across all groups.
    pub fn total_urls(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Iterates groups in TLD order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(tld, urls)| (tld.as_str(), urls.as_slice()))
    }
}
