use std::sync::Arc;

use anyhow::Result;
use dioxus::prelude::*;
use tracing::info;

use crate::config::AppConfig;
use crate::infra::http::csv_source::HttpCsvSource;
use crate::infra::http::email_capture::AjaxEmailCapture;
use crate::ui::components::email_gate::EmailGate;
use crate::ui::components::filter_panel::FilterPanel;
use crate::ui::components::offer_table::{OfferRowView, OfferTable};
use crate::ui::state::app_state::AppState;
use crate::usecase::services::capture_service::CaptureService;
use crate::usecase::services::load_service::LoadService;
use crate::usecase::services::table_engine::{LoadOutcome, TableEngine};

/// Services wired once per window.
#[derive(Clone)]
pub struct AppServices {
    pub load: Arc<LoadService>,
    pub capture: Option<Arc<CaptureService>>,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        let same_capture = match (&self.capture, &other.capture) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        };
        Arc::ptr_eq(&self.load, &other.load) && same_capture
    }
}

impl AppServices {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let source = HttpCsvSource::new(config.csv_url.clone(), config.http_timeout)?;
        let capture = match &config.ajax_url {
            Some(url) => {
                let endpoint = AjaxEmailCapture::new(url.clone(), config.http_timeout)?;
                Some(Arc::new(CaptureService::new(
                    Arc::new(endpoint),
                    config.nonce.clone(),
                )))
            }
            None => None,
        };
        Ok(Self {
            load: Arc::new(LoadService::new(Arc::new(source))),
            capture,
        })
    }
}

/// One load cycle. The indicator is cleared on success and failure; a stale
/// result leaves it to the newer load that superseded it.
async fn run_load(
    load: Arc<LoadService>,
    mut engine: Signal<TableEngine>,
    mut loading: Signal<bool>,
    mut load_error: Signal<Option<String>>,
) {
    let ticket = engine.write().begin_load();
    loading.set(true);
    load_error.set(None);

    let result = load.load().await;
    match engine.write().finish_load(ticket, result) {
        LoadOutcome::Applied { rows } => info!(rows, "comparison table refreshed"),
        LoadOutcome::Failed(err) => load_error.set(Some(err.to_string())),
        LoadOutcome::Stale => return,
    }
    loading.set(false);
}

#[component]
pub fn App() -> Element {
    let setup = use_hook(|| {
        AppConfig::from_env()
            .and_then(|config| AppServices::from_config(&config).map(|services| (config, services)))
            .map_err(|err| format!("{err:#}"))
    });

    match setup {
        Ok((config, services)) => rsx! {
            ComparisonPage { config, services }
        },
        Err(err) => rsx! {
            div {
                p { "Unable to start: {err}" }
            }
        },
    }
}

#[component]
fn ComparisonPage(config: AppConfig, services: AppServices) -> Element {
    let AppState {
        mut engine,
        loading,
        load_error,
        mut unlocked,
        email_input,
        mut submitting,
        mut gate_error,
        form,
        debounce,
    } = AppState::new(config.page_size, services.capture.is_some());

    let load_service_for_init = services.load.clone();
    use_hook(move || {
        if unlocked() {
            spawn(run_load(load_service_for_init, engine, loading, load_error));
        }
    });

    let load_service_for_gate = services.load.clone();
    let load_service_for_reload = services.load.clone();
    let capture_service = services.capture.clone();

    if !unlocked() {
        return rsx! {
            EmailGate {
                email_input,
                submitting,
                gate_error,
                on_submit: move |email: String| {
                    let Some(capture) = capture_service.clone() else {
                        unlocked.set(true);
                        return;
                    };
                    let load = load_service_for_gate.clone();
                    submitting.set(true);
                    gate_error.set(None);
                    spawn(async move {
                        match capture.submit(&email).await {
                            Ok(_) => {
                                submitting.set(false);
                                unlocked.set(true);
                                run_load(load, engine, loading, load_error).await;
                            }
                            Err(err) => {
                                submitting.set(false);
                                gate_error.set(Some(err.user_message()));
                            }
                        }
                    });
                },
            }
        };
    }

    let engine_ref = engine.read();
    let rows: Vec<OfferRowView> = engine_ref
        .visible()
        .iter()
        .map(OfferRowView::from_offer)
        .collect();
    let options = engine_ref.filter_options();
    let has_more = engine_ref.has_more();
    let next_page_len = engine_ref.next_page_len();
    let has_data = !engine_ref.dataset().is_empty();
    let last_updated = engine_ref
        .loaded_at()
        .map(|at| at.format("%B %-d, %Y").to_string());
    drop(engine_ref);

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 16px;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                h2 { "Prop Firm Comparison Table" }
                button {
                    disabled: loading(),
                    style: "padding: 8px 12px; background: #115bff; color: white; border: none; border-radius: 4px; cursor: pointer;",
                    onclick: move |_| {
                        spawn(run_load(load_service_for_reload.clone(), engine, loading, load_error));
                    },
                    "Reload data"
                }
            }
            p { "Here are the latest prop firm deals and their details:" }

            if loading() {
                div { style: "text-align: center; padding: 20px;", "Loading data..." }
            }

            if let Some(message) = load_error() {
                div {
                    style: "text-align: center; padding: 20px; color: #d63638;",
                    p { "{message}" }
                }
            }

            if has_data {
                FilterPanel {
                    options,
                    form,
                    engine,
                    debounce,
                    debounce_ms: config.debounce.as_millis() as u64,
                }
                OfferTable { rows }
                if has_more {
                    div {
                        style: "text-align: center; margin: 20px 0;",
                        button {
                            style: "padding: 12px 24px; background: #115bff; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 16px;",
                            onclick: move |_| {
                                engine.write().load_more();
                            },
                            "Load More ({next_page_len} more)"
                        }
                    }
                }
                div {
                    style: "text-align: center; margin-top: 20px; font-size: 14px; color: #666;",
                    p { "* Prices and terms subject to change. Verify with providers." }
                    p { "★ = Trustpilot ratings updated regularly" }
                    if let Some(date) = last_updated {
                        p { "Last updated: {date}" }
                    }
                }
            }
        }
    }
}
