use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::entities::dataset::{
    Dataset, FilterOptions, FilterState, SortDirection, SortField, SortState,
};
use crate::domain::entities::offer::{Offer, OfferField};
use crate::domain::error::LoadError;
use crate::domain::normalize::{account_size_bucket, is_absent, text_value};

pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Identifies one load request. Only the most recently issued ticket may
/// replace the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { rows: usize },
    Failed(LoadError),
    /// A newer load was started after this one; the result was dropped.
    Stale,
}

/// Filter values prepared once per recomputation.
struct ActiveFilters<'f> {
    needle: Option<String>,
    business: Option<&'f str>,
    account_size: Option<String>,
    drawdown_mode: Option<&'f str>,
    max_price: Option<f64>,
    min_rating: Option<f64>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl<'f> ActiveFilters<'f> {
    fn new(filters: &'f FilterState) -> Self {
        Self {
            needle: Some(filters.search_text.to_lowercase()).filter(|text| !text.is_empty()),
            business: non_empty(&filters.business),
            account_size: non_empty(&filters.account_size)
                .map(|size| account_size_bucket(size).unwrap_or_else(|| size.to_string())),
            drawdown_mode: non_empty(&filters.drawdown_mode),
            max_price: filters.max_price.filter(|max| max.is_finite()),
            min_rating: filters.min_rating.filter(|min| min.is_finite()),
        }
    }

    fn matches(&self, offer: &Offer<'_>) -> bool {
        if let Some(needle) = &self.needle {
            if !offer.search_text().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(business) = self.business {
            if offer.business_name() != business {
                return false;
            }
        }
        if let Some(size) = &self.account_size {
            if offer.account_bucket().as_deref() != Some(size.as_str()) {
                return false;
            }
        }
        if let Some(mode) = self.drawdown_mode {
            if offer.get(OfferField::DrawdownMode) != mode {
                return false;
            }
        }
        if let (Some(max_price), Some(price)) = (self.max_price, offer.price()) {
            if price > max_price {
                return false;
            }
        }
        if let Some(min_rating) = self.min_rating {
            match offer.rating() {
                Some(rating) if rating >= min_rating => {}
                _ => return false,
            }
        }
        true
    }
}

/// Lowercase with diacritics removed, so "Élite" orders next to "elite".
fn fold(text: &str) -> String {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>()
        .to_lowercase()
}

/// Folded comparison first, then plain lowercase, raw text as the last tie breaker.
fn collate(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn numeric_key(offer: &Offer<'_>, field: SortField) -> f64 {
    let value = match field {
        SortField::Price => offer.price(),
        SortField::ProfitGoal => offer.profit_goal(),
        SortField::TrustpilotScore => offer.rating(),
        SortField::AccountSize => offer.account_size(),
        SortField::BusinessName | SortField::PlanName => None,
    };
    value.unwrap_or(0.0)
}

/// Ascending order of two offers on `field`. Missing numbers order as zero.
pub fn compare_offers(a: &Offer<'_>, b: &Offer<'_>, field: SortField) -> Ordering {
    match field {
        SortField::BusinessName => collate(a.business_name(), b.business_name()),
        SortField::PlanName => collate(a.get(OfferField::PlanName), b.get(OfferField::PlanName)),
        _ => numeric_key(a, field).total_cmp(&numeric_key(b, field)),
    }
}

/// Indices of the dataset rows passing `filters`, ordered by `sort`.
/// The sort is stable in both directions.
pub fn apply_filters(dataset: &Dataset, filters: &FilterState, sort: &SortState) -> Vec<usize> {
    let active = ActiveFilters::new(filters);
    let mut view: Vec<usize> = dataset
        .offers()
        .enumerate()
        .filter(|(_, offer)| active.matches(offer))
        .map(|(idx, _)| idx)
        .collect();

    view.sort_by(|left, right| {
        let (Some(a), Some(b)) = (dataset.offer(*left), dataset.offer(*right)) else {
            return Ordering::Equal;
        };
        let ordering = compare_offers(&a, &b, sort.field);
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    view
}

/// Window length after one more "load more" request.
pub fn advance_page(view_len: usize, window_len: usize, page_size: usize) -> usize {
    window_len.saturating_add(page_size).min(view_len)
}

/// Owns the dataset of the current load cycle and everything derived from it.
#[derive(Debug, Clone)]
pub struct TableEngine {
    dataset: Dataset,
    filters: FilterState,
    sort: SortState,
    page_size: usize,
    view: Vec<usize>,
    window_len: usize,
    latest_ticket: u64,
    loaded_at: Option<DateTime<Local>>,
}

impl Default for TableEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableEngine {
    pub fn new(page_size: usize) -> Self {
        Self {
            dataset: Dataset::default(),
            filters: FilterState::default(),
            sort: SortState::default(),
            page_size: page_size.max(1),
            view: Vec::new(),
            window_len: 0,
            latest_ticket: 0,
            loaded_at: None,
        }
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        debug!(ticket = self.latest_ticket, "load requested");
        LoadTicket(self.latest_ticket)
    }

    pub fn is_latest(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest_ticket
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Dataset, LoadError>,
    ) -> LoadOutcome {
        if !self.is_latest(ticket) {
            warn!(
                ticket = ticket.0,
                latest = self.latest_ticket,
                "discarding stale load result"
            );
            return LoadOutcome::Stale;
        }
        match result {
            Ok(dataset) => {
                let rows = dataset.len();
                self.replace_dataset(dataset);
                LoadOutcome::Applied { rows }
            }
            Err(err) => LoadOutcome::Failed(err),
        }
    }

    pub fn replace_dataset(&mut self, dataset: Dataset) {
        info!(
            rows = dataset.len(),
            skipped = dataset.skipped_lines(),
            "dataset replaced"
        );
        self.dataset = dataset;
        self.loaded_at = Some(Local::now());
        self.recompute();
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.sort = SortState::default();
        self.recompute();
    }

    /// Shows the next page of the filtered view. Returns how many rows were added.
    pub fn load_more(&mut self) -> usize {
        let next = advance_page(self.view.len(), self.window_len, self.page_size);
        let added = next - self.window_len;
        self.window_len = next;
        added
    }

    fn recompute(&mut self) {
        self.view = apply_filters(&self.dataset, &self.filters, &self.sort);
        self.window_len = advance_page(self.view.len(), 0, self.page_size);
        debug!(
            matched = self.view.len(),
            shown = self.window_len,
            "filtered view recomputed"
        );
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    pub fn window_len(&self) -> usize {
        self.window_len
    }

    pub fn has_more(&self) -> bool {
        self.window_len < self.view_len()
    }

    /// Rows the next `load_more` would add.
    pub fn next_page_len(&self) -> usize {
        (self.view_len() - self.window_len).min(self.page_size)
    }

    pub fn filtered(&self) -> Vec<Offer<'_>> {
        self.view
            .iter()
            .filter_map(|idx| self.dataset.offer(*idx))
            .collect()
    }

    /// The filtered view cut to the current window.
    pub fn visible(&self) -> Vec<Offer<'_>> {
        let mut offers = self.filtered();
        offers.truncate(self.window_len);
        offers
    }

    /// Whether Clear All would change anything.
    pub fn is_customized(&self) -> bool {
        !self.filters().is_empty() || self.sort != SortState::default()
    }

    pub fn results_summary(&self) -> String {
        format!(
            "Showing {} of {} results",
            self.window_len,
            self.view_len()
        )
    }

    pub fn filter_options(&self) -> FilterOptions {
        let mut businesses = BTreeSet::new();
        let mut drawdown_modes = BTreeSet::new();
        let mut sizes: BTreeMap<String, f64> = BTreeMap::new();

        for offer in self.dataset.offers() {
            if let Some(name) = text_value(offer.business_name()) {
                businesses.insert(name);
            }
            let mode = offer.get(OfferField::DrawdownMode);
            if !is_absent(mode) {
                drawdown_modes.insert(mode.to_string());
            }
            if let (Some(bucket), Some(value)) = (offer.account_bucket(), offer.account_size()) {
                sizes.entry(bucket).or_insert(value);
            }
        }

        let mut account_sizes: Vec<(String, f64)> = sizes.into_iter().collect();
        account_sizes.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        FilterOptions {
            businesses: businesses.into_iter().collect(),
            account_sizes: account_sizes.into_iter().map(|(label, _)| label).collect(),
            drawdown_modes: drawdown_modes.into_iter().collect(),
        }
    }
}
