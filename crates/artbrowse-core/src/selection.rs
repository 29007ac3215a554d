//! Cross-page selection set.
//!
//! Membership is by record id only, so ids stay selected while their page is
//! not loaded. A page's contribution is replaced wholesale on every
//! reconcile; ids belonging to other pages are never touched.

use std::collections::HashSet;

use crate::{Record, RecordId};

/// Outcome of [`SelectionSet::select_first_n`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BulkSelect {
    /// The count the caller asked for.
    pub requested: i64,
    /// Rows actually taken from the page.
    pub applied: usize,
    /// `requested` exceeded the page length.
    pub capped: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    selected: HashSet<RecordId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current page's share of the selection with `checked`.
    pub fn reconcile_current_page<P, C>(&mut self, current_page_ids: P, checked: C)
    where
        P: IntoIterator<Item = RecordId>,
        C: IntoIterator<Item = RecordId>,
    {
        for id in current_page_ids {
            self.selected.remove(&id);
        }
        self.selected.extend(checked);
    }

    /// Add the first `n` records of the page, in order. Never deselects.
    pub fn select_first_n(&mut self, page_records: &[Record], n: i64) -> BulkSelect {
        if n <= 0 {
            return BulkSelect {
                requested: n,
                ..BulkSelect::default()
            };
        }
        let take = usize::try_from(n).unwrap_or(usize::MAX).min(page_records.len());
        self.selected
            .extend(page_records.iter().take(take).map(|r| r.id));
        let outcome = BulkSelect {
            requested: n,
            applied: take,
            capped: take < usize::try_from(n).unwrap_or(usize::MAX),
        };
        tracing::debug!(
            requested = n,
            applied = take,
            capped = outcome.capped,
            total = self.selected.len(),
            "bulk select"
        );
        outcome
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.selected.contains(&id)
    }

    /// The records of `page_records` that are currently selected.
    pub fn selected_on_page<'a>(&self, page_records: &'a [Record]) -> Vec<&'a Record> {
        page_records
            .iter()
            .filter(|r| self.selected.contains(&r.id))
            .collect()
    }

    /// Sorted snapshot of every selected id.
    pub fn ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<RecordId> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}
