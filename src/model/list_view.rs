//! List view controller - filter, sort and paginate over the full record set
//!
//! Holds every record plus the view state (query, sort, page size, loaded
//! count) and derives the materialized subset the table shows. Records are
//! never mutated; the displayed subset is a list of indices into them.

use super::college::{CollegeId, CollegeRecord};
use super::sort::{SortConfig, SortKey, SortPolicy};
use crate::error::{AppError, Result};
use tracing::debug;

/// Default number of records added per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

pub struct ListView {
    records: Vec<CollegeRecord>,
    query: String,
    sort: SortConfig,
    policy: SortPolicy,
    page_size: usize,
    loaded_count: usize,
    /// Indices into `records`, in display order
    displayed: Vec<usize>,
}

impl ListView {
    /// Build a controller over `records` showing the first page of an
    /// empty query.
    pub fn new(records: Vec<CollegeRecord>, page_size: usize, policy: SortPolicy) -> Result<Self> {
        if page_size == 0 {
            return Err(AppError::ZeroPageSize);
        }
        let mut view = Self {
            records,
            query: String::new(),
            sort: SortConfig::default(),
            policy,
            page_size,
            loaded_count: 0,
            displayed: Vec::new(),
        };
        view.set_query("");
        Ok(view)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inputs
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the search query and reset to the first page
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        let matches = self.ordered_matches();
        self.loaded_count = self.page_size.min(matches.len());
        self.displayed = matches[..self.loaded_count].to_vec();
        debug!(
            query = %self.query,
            matches = matches.len(),
            loaded = self.loaded_count,
            "query changed"
        );
    }

    /// Sort by `key`, toggling direction when `key` is already the
    /// ascending sort key.
    pub fn request_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
        match self.policy {
            SortPolicy::Page => {
                let records = &self.records;
                let sort = self.sort;
                self.displayed
                    .sort_by(|a, b| sort.compare(&records[*a], &records[*b]));
            }
            SortPolicy::Global => {
                let matches = self.ordered_matches();
                self.displayed = matches[..self.loaded_count].to_vec();
            }
        }
        debug!(
            key = %key,
            direction = ?self.sort.direction,
            policy = %self.policy,
            "sort requested"
        );
    }

    /// Materialize the next page of matches.
    ///
    /// Returns how many records were appended; zero once every match is
    /// loaded, in which case nothing changes.
    pub fn load_more(&mut self) -> usize {
        let matches = self.ordered_matches();
        let start = self.loaded_count.min(matches.len());
        let end = (start + self.page_size).min(matches.len());
        if start == end {
            return 0;
        }

        match self.policy {
            SortPolicy::Page => self.displayed.extend_from_slice(&matches[start..end]),
            SortPolicy::Global => self.displayed = matches[..end].to_vec(),
        }
        self.loaded_count = end;
        debug!(appended = end - start, loaded = end, "loaded more");
        end - start
    }

    /// Switch sort policy, keeping the loaded count.
    ///
    /// The displayed rows become the first `loaded_count` matches in the new
    /// policy's order. Under `Page` that is filter order with the current
    /// sort applied to the loaded rows, so later pages continue from the
    /// filter-order position.
    pub fn set_policy(&mut self, policy: SortPolicy) {
        self.policy = policy;
        let matches = self.ordered_matches();
        self.displayed = matches[..self.loaded_count].to_vec();
        if policy == SortPolicy::Page && self.sort.key.is_some() {
            let records = &self.records;
            let sort = self.sort;
            self.displayed
                .sort_by(|a, b| sort.compare(&records[*a], &records[*b]));
        }
        debug!(policy = %policy, loaded = self.loaded_count, "sort policy changed");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived state
    // ─────────────────────────────────────────────────────────────────────────

    /// Indices of records whose name contains the query, in data set order,
    /// sorted when the policy sorts globally.
    fn ordered_matches(&self) -> Vec<usize> {
        let needle = self.query.to_lowercase();
        let mut matches: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.name_matches(&needle))
            .map(|(i, _)| i)
            .collect();

        if self.policy == SortPolicy::Global && self.sort.key.is_some() {
            let records = &self.records;
            let sort = self.sort;
            matches.sort_by(|a, b| sort.compare(&records[*a], &records[*b]));
        }
        matches
    }

    /// The materialized records in display order
    pub fn displayed(&self) -> impl Iterator<Item = &CollegeRecord> + '_ {
        self.displayed.iter().map(|&i| &self.records[i])
    }

    /// Row at which the record with `id` is displayed
    pub fn position(&self, id: &CollegeId) -> Option<usize> {
        self.displayed.iter().position(|&i| &self.records[i].id == id)
    }

    /// Displayed record at `row`
    pub fn get(&self, row: usize) -> Option<&CollegeRecord> {
        self.displayed.get(row).map(|&i| &self.records[i])
    }

    pub fn displayed_len(&self) -> usize {
        self.displayed.len()
    }

    /// Sort key and direction for header affordances
    pub fn sort_indicator(&self) -> SortConfig {
        self.sort
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn policy(&self) -> SortPolicy {
        self.policy
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded_count
    }

    pub fn total_records(&self) -> usize {
        self.records.len()
    }

    /// Number of records matching the current query
    pub fn match_count(&self) -> usize {
        let needle = self.query.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.name_matches(&needle))
            .count()
    }

    pub fn has_more(&self) -> bool {
        self.loaded_count < self.match_count()
    }
}
