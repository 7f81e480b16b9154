use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::dataset::FilterState;
use crate::usecase::services::debounce::FilterDebounce;
use crate::usecase::services::table_engine::TableEngine;

/// Raw text of the filter controls, before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterForm {
    pub search: String,
    pub business: String,
    pub account_size: String,
    pub drawdown_mode: String,
    pub max_price: String,
    pub min_rating: String,
}

fn selection(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

impl FilterForm {
    /// Unparseable numbers leave their filter inactive.
    pub fn to_filter_state(&self) -> FilterState {
        FilterState {
            search_text: self.search.clone(),
            business: selection(&self.business),
            account_size: selection(&self.account_size),
            drawdown_mode: selection(&self.drawdown_mode),
            max_price: number(&self.max_price),
            min_rating: number(&self.min_rating),
        }
    }
}

pub struct AppState {
    pub engine: Signal<TableEngine>,
    pub loading: Signal<bool>,
    pub load_error: Signal<Option<String>>,
    pub unlocked: Signal<bool>,
    pub email_input: Signal<String>,
    pub submitting: Signal<bool>,
    pub gate_error: Signal<Option<String>>,
    pub form: Signal<FilterForm>,
    pub debounce: Signal<FilterDebounce>,
}

impl AppState {
    pub fn new(page_size: usize, gate_enabled: bool) -> Self {
        Self {
            engine: use_signal(|| TableEngine::new(page_size)),
            loading: use_signal(|| false),
            load_error: use_signal(|| None::<String>),
            unlocked: use_signal(|| !gate_enabled),
            email_input: use_signal(String::new),
            submitting: use_signal(|| false),
            gate_error: use_signal(|| None::<String>),
            form: use_signal(FilterForm::default),
            debounce: use_signal(FilterDebounce::default),
        }
    }
}
