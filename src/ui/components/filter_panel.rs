use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::entities::dataset::{FilterOptions, SortDirection, SortField, SortState};
use crate::ui::state::app_state::FilterForm;
use crate::usecase::services::debounce::{DebouncedInput, FilterDebounce};
use crate::usecase::services::table_engine::TableEngine;

const RATING_CHOICES: [(&str, &str); 4] = [
    ("4.5", "4.5+ Stars"),
    ("4.0", "4.0+ Stars"),
    ("3.5", "3.5+ Stars"),
    ("3.0", "3.0+ Stars"),
];

const CONTROL_STYLE: &str = "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px;";
const LABEL_STYLE: &str = "display: block; margin-bottom: 5px; font-weight: bold; color: #555;";

/// Pushes the current form into the engine and resets the view to page one.
/// Pending typed input is dropped so it cannot reset the page again later.
pub fn apply_form(
    form: Signal<FilterForm>,
    mut engine: Signal<TableEngine>,
    mut debounce: Signal<FilterDebounce>,
) {
    debounce.write().cancel_all();
    let filters = form.peek().to_filter_state();
    engine.write().set_filters(filters);
}

fn apply_after_quiet_period(
    form: Signal<FilterForm>,
    engine: Signal<TableEngine>,
    mut debounce: Signal<FilterDebounce>,
    input: DebouncedInput,
    quiet: Duration,
) {
    let ticket = debounce.write().trigger(input);
    spawn(async move {
        tokio::time::sleep(quiet).await;
        if debounce.peek().is_current(input, ticket) {
            apply_form(form, engine, debounce);
        }
    });
}

#[component]
pub fn FilterPanel(
    options: FilterOptions,
    mut form: Signal<FilterForm>,
    mut engine: Signal<TableEngine>,
    mut debounce: Signal<FilterDebounce>,
    debounce_ms: u64,
) -> Element {
    let quiet = Duration::from_millis(debounce_ms);
    let current = form();
    let sort = engine.read().sort();
    let summary = engine.read().results_summary();
    let can_clear = engine.read().is_customized() || current != FilterForm::default();

    rsx! {
        div {
            style: "background: #f8f9fa; padding: 18px; margin-bottom: 20px; border-radius: 8px; border: 1px solid #dee2e6;",
            h3 { style: "margin-top: 0; margin-bottom: 15px; color: #333;", "Search & Filter Results" }

            div {
                style: "margin-bottom: 15px;",
                input {
                    r#type: "text",
                    placeholder: "Search businesses, plans, account types...",
                    value: "{current.search}",
                    style: "{CONTROL_STYLE} padding: 10px; font-size: 14px;",
                    oninput: move |event| {
                        form.write().search = event.value();
                        apply_after_quiet_period(form, engine, debounce, DebouncedInput::Search, quiet);
                    },
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 15px; margin-bottom: 15px;",
                div {
                    label { style: LABEL_STYLE, "Sort By:" }
                    select {
                        style: CONTROL_STYLE,
                        onchange: move |event| {
                            apply_form(form, engine, debounce);
                            let field = SortField::from_key(&event.value()).unwrap_or_default();
                            let direction = engine.peek().sort().direction;
                            engine.write().set_sort(SortState { field, direction });
                        },
                        for field in SortField::ALL {
                            option {
                                value: field.key(),
                                selected: sort.field == field,
                                "{field.label()}"
                            }
                        }
                    }
                }
                div {
                    label { style: LABEL_STYLE, "Order:" }
                    select {
                        style: CONTROL_STYLE,
                        onchange: move |event| {
                            apply_form(form, engine, debounce);
                            let direction = SortDirection::parse(&event.value());
                            let field = engine.peek().sort().field;
                            engine.write().set_sort(SortState { field, direction });
                        },
                        option { value: "asc", selected: sort.direction == SortDirection::Asc, "Low to High" }
                        option { value: "desc", selected: sort.direction == SortDirection::Desc, "High to Low" }
                    }
                }
                div {
                    label { style: LABEL_STYLE, "Max Price:" }
                    input {
                        r#type: "number",
                        placeholder: "Max Price",
                        value: "{current.max_price}",
                        style: CONTROL_STYLE,
                        oninput: move |event| {
                            form.write().max_price = event.value();
                            apply_after_quiet_period(form, engine, debounce, DebouncedInput::MaxPrice, quiet);
                        },
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(5, 1fr); gap: 15px;",
                div {
                    label { style: LABEL_STYLE, "Business:" }
                    select {
                        style: CONTROL_STYLE,
                        onchange: move |event| {
                            form.write().business = event.value();
                            apply_form(form, engine, debounce);
                        },
                        option { value: "", selected: current.business.is_empty(), "All Businesses" }
                        for business in options.businesses.iter() {
                            option {
                                value: "{business}",
                                selected: current.business == *business,
                                "{business}"
                            }
                        }
                    }
                }
                div {
                    label { style: LABEL_STYLE, "Account Size:" }
                    select {
                        style: CONTROL_STYLE,
                        onchange: move |event| {
                            form.write().account_size = event.value();
                            apply_form(form, engine, debounce);
                        },
                        option { value: "", selected: current.account_size.is_empty(), "All Sizes" }
                        for size in options.account_sizes.iter() {
                            option {
                                value: "{size}",
                                selected: current.account_size == *size,
                                "{size}"
                            }
                        }
                    }
                }
                div {
                    label { style: LABEL_STYLE, "Drawdown Mode:" }
                    select {
                        style: CONTROL_STYLE,
                        onchange: move |event| {
                            form.write().drawdown_mode = event.value();
                            apply_form(form, engine, debounce);
                        },
                        option { value: "", selected: current.drawdown_mode.is_empty(), "All Modes" }
                        for mode in options.drawdown_modes.iter() {
                            option {
                                value: "{mode}",
                                selected: current.drawdown_mode == *mode,
                                "{mode}"
                            }
                        }
                    }
                }
                div {
                    label { style: LABEL_STYLE, "Min Rating:" }
                    select {
                        style: CONTROL_STYLE,
                        onchange: move |event| {
                            form.write().min_rating = event.value();
                            apply_form(form, engine, debounce);
                        },
                        option { value: "", selected: current.min_rating.is_empty(), "All Ratings" }
                        for (value, label) in RATING_CHOICES {
                            option {
                                value: value,
                                selected: current.min_rating == value,
                                "{label}"
                            }
                        }
                    }
                }
                div {
                    style: "display: flex; flex-direction: column; justify-content: flex-end;",
                    button {
                        disabled: !can_clear,
                        style: "padding: 8px 12px; background: #6c757d; color: white; border: none; border-radius: 4px; cursor: pointer;",
                        onclick: move |_| {
                            debounce.write().cancel_all();
                            form.set(FilterForm::default());
                            engine.write().clear_filters();
                        },
                        "Clear All"
                    }
                }
            }

            div {
                style: "margin-top: 15px; text-align: center;",
                span { style: "font-weight: bold; color: #115bff;", "{summary}" }
            }
        }
    }
}
