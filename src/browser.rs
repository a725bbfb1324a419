use std::collections::BTreeSet;

use log::debug;

use crate::client::MealSource;
use crate::error::SearchError;
use crate::filter::{apply_filters, extract_areas};
use crate::model::Meal;

/// Invoked when the presentation layer reports a selection.
pub type SelectionCallback = Box<dyn Fn(&Meal) + Send + Sync>;

/// Coordinates searches and quick filters on behalf of a presentation layer.
///
/// The browser keeps the last fetched list immutable and derives the visible
/// list from it on every filter change, so removing a filter restores meals
/// instead of losing them. It exposes `item_count` / `item` / `select`
/// instead of tying itself to any rendering toolkit.
pub struct MealBrowser<S: MealSource> {
    source: S,
    meals: Vec<Meal>,
    visible: Vec<Meal>,
    filters: BTreeSet<String>,
    next_seq: u64,
    applied_seq: u64,
    on_select: Option<SelectionCallback>,
}

impl<S: MealSource> MealBrowser<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            meals: Vec::new(),
            visible: Vec::new(),
            filters: BTreeSet::new(),
            next_seq: 0,
            applied_seq: 0,
            on_select: None,
        }
    }

    /// Fetch a fresh result list for `keyword` and replace the held one.
    ///
    /// On failure the held state is left untouched and the error is
    /// surfaced for the presentation layer to display.
    pub async fn search(&mut self, keyword: Option<&str>) -> Result<(), SearchError> {
        let seq = self.begin_search();
        let meals = self.source.search(keyword).await?;
        self.apply_completion(seq, meals);
        Ok(())
    }

    /// Reserve a sequence number for a fetch that is about to start.
    ///
    /// Callers driving fetches themselves (e.g. spawned tasks) pair this
    /// with [`apply_completion`](Self::apply_completion).
    pub fn begin_search(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Apply a completed fetch, unless a later one already landed.
    ///
    /// Completions are last-write-wins: a result carrying a sequence number
    /// at or below the last applied one is stale and is discarded. Returns
    /// whether the result was applied.
    pub fn apply_completion(&mut self, seq: u64, meals: Vec<Meal>) -> bool {
        if seq <= self.applied_seq {
            debug!("discarding stale search completion (seq {})", seq);
            return false;
        }
        self.applied_seq = seq;
        self.meals = meals;

        // Filters naming areas absent from the new results are dropped.
        let areas = extract_areas(&self.meals);
        self.filters.retain(|area| areas.contains(area));
        self.recompute_visible();
        true
    }

    /// Toggle the quick filter for `area`; returns whether it is now active.
    pub fn toggle_filter(&mut self, area: &str) -> bool {
        let active = if self.filters.remove(area) {
            false
        } else {
            self.filters.insert(area.to_string());
            true
        };
        self.recompute_visible();
        active
    }

    /// Distinct areas present in the current result list, for filter chips.
    pub fn available_areas(&self) -> BTreeSet<String> {
        extract_areas(&self.meals)
    }

    /// The currently active quick filters.
    pub fn active_filters(&self) -> &BTreeSet<String> {
        &self.filters
    }

    /// The full, unfiltered result list from the last applied search.
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Number of meals visible under the active filters.
    pub fn item_count(&self) -> usize {
        self.visible.len()
    }

    /// The visible meal at `index`, if in range.
    pub fn item(&self, index: usize) -> Option<&Meal> {
        self.visible.get(index)
    }

    /// Register the callback invoked when a visible meal is selected.
    pub fn set_on_select(&mut self, callback: SelectionCallback) {
        self.on_select = Some(callback);
    }

    /// Report a selection at `index`; returns the selected meal.
    pub fn select(&self, index: usize) -> Option<&Meal> {
        let meal = self.visible.get(index)?;
        if let Some(callback) = &self.on_select {
            callback(meal);
        }
        Some(meal)
    }

    fn recompute_visible(&mut self) {
        self.visible = apply_filters(&self.meals, &self.filters);
    }
}
