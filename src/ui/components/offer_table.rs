use dioxus::prelude::*;

use crate::domain::entities::offer::{Offer, OfferField};
use crate::domain::normalize::{
    display_or_na, format_currency, format_rating, text_value, RatingBadge, NA_MARKER,
};

/// Display strings for one table row.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferRowView {
    pub business_name: String,
    pub plan_name: String,
    pub account_type: String,
    pub account_size: String,
    pub price: String,
    pub profit_goal: String,
    pub trailing_drawdown: String,
    pub daily_loss_limit: String,
    pub activation_fee: String,
    pub reset_fee: String,
    pub drawdown_mode: String,
    pub discount_code: Option<String>,
    pub rating: Option<RatingBadge>,
    pub rating_text: String,
    pub source_url: Option<String>,
}

impl OfferRowView {
    pub fn from_offer(offer: &Offer<'_>) -> Self {
        let text = |field| display_or_na(text_value(offer.get(field)));
        let currency = |field| display_or_na(format_currency(offer.get(field)));
        let raw_rating = offer.get(OfferField::TrustpilotScore);

        Self {
            business_name: text(OfferField::BusinessName),
            plan_name: text(OfferField::PlanName),
            account_type: text(OfferField::AccountType),
            account_size: text(OfferField::AccountSize),
            price: text(OfferField::PriceRaw),
            profit_goal: currency(OfferField::ProfitGoal),
            trailing_drawdown: currency(OfferField::TrailingDrawdown),
            daily_loss_limit: currency(OfferField::DailyLossLimit),
            activation_fee: currency(OfferField::ActivationFee),
            reset_fee: currency(OfferField::ResetFee),
            drawdown_mode: text(OfferField::DrawdownMode),
            discount_code: text_value(offer.get(OfferField::DiscountCode)),
            rating: format_rating(raw_rating),
            rating_text: display_or_na(text_value(raw_rating)),
            source_url: text_value(offer.get(OfferField::SourceUrl)),
        }
    }
}

const CELL_STYLE: &str = "padding: 12px; border: 1px solid #dee2e6; text-align: left;";
const SCROLL_BUTTON_STYLE: &str = "padding: 8px 12px; background: #115bff; color: white; border: none; border-radius: 4px; cursor: pointer;";

pub const TABLE_SCROLL_ID: &str = "table-scroll-container";
/// Pixels moved per Scroll Left / Scroll Right click.
pub const SCROLL_STEP: i32 = 200;

/// Script scrolling the table container sideways by `delta` pixels.
pub fn scroll_script(delta: i32) -> String {
    format!(
        "document.getElementById('{TABLE_SCROLL_ID}')?.scrollBy({{ left: {delta}, behavior: 'smooth' }});"
    )
}

fn scroll_table(delta: i32) {
    let _ = dioxus::document::eval(&scroll_script(delta));
}

#[component]
pub fn OfferTable(rows: Vec<OfferRowView>) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: flex-end; gap: 8px; margin-bottom: 8px;",
            button {
                style: SCROLL_BUTTON_STYLE,
                onclick: move |_| scroll_table(-SCROLL_STEP),
                "← Scroll Left"
            }
            button {
                style: SCROLL_BUTTON_STYLE,
                onclick: move |_| scroll_table(SCROLL_STEP),
                "Scroll Right →"
            }
        }
        div {
            id: TABLE_SCROLL_ID,
            style: "overflow-x: auto; border: 1px solid #dee2e6; border-radius: 4px;",
            table {
                style: "width: 100%; border-collapse: collapse; min-width: 1600px;",
                thead {
                    tr {
                        style: "background: #f8f9fa; border-bottom: 2px solid #dee2e6;",
                        for field in OfferField::ALL {
                            th { style: "{CELL_STYLE} min-width: 100px;", "{field.label()}" }
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: "14",
                                style: "text-align: center; padding: 20px; color: #666;",
                                "No results match your criteria."
                            }
                        }
                    }
                    for (idx, row) in rows.iter().enumerate() {
                        OfferRow { key: "{idx}", row: row.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn OfferRow(row: OfferRowView) -> Element {
    let discount_style = if row.discount_code.is_some() {
        "background: #e7f3ff; font-weight: bold; color: #0066cc;"
    } else {
        ""
    };
    let discount = row
        .discount_code
        .clone()
        .unwrap_or_else(|| NA_MARKER.to_string());

    rsx! {
        tr {
            td { style: CELL_STYLE, strong { "{row.business_name}" } }
            td { style: CELL_STYLE, "{row.plan_name}" }
            td { style: CELL_STYLE, "{row.account_type}" }
            td { style: CELL_STYLE, "{row.account_size}" }
            td { style: CELL_STYLE, "{row.price}" }
            td { style: CELL_STYLE, "{row.profit_goal}" }
            td { style: CELL_STYLE, "{row.trailing_drawdown}" }
            td { style: CELL_STYLE, "{row.daily_loss_limit}" }
            td { style: CELL_STYLE, "{row.activation_fee}" }
            td { style: CELL_STYLE, "{row.reset_fee}" }
            td { style: CELL_STYLE, "{row.drawdown_mode}" }
            td { style: "{CELL_STYLE} {discount_style}", "{discount}" }
            td {
                style: "{CELL_STYLE} text-align: center; font-size: 13px;",
                {match &row.rating {
                    Some(badge) => rsx! {
                        span {
                            class: badge.band.css_class(),
                            style: "color: {badge.band.color()}; font-weight: bold;",
                            "{badge.label()} {badge.stars()}"
                        }
                    },
                    None => rsx! { "{row.rating_text}" },
                }}
            }
            td {
                style: CELL_STYLE,
                {match &row.source_url {
                    Some(url) => rsx! {
                        a {
                            href: "{url}",
                            target: "_blank",
                            style: "color: #115bff; text-decoration: none;",
                            "Visit Site"
                        }
                    },
                    None => rsx! { "{NA_MARKER}" },
                }}
            }
        }
    }
}
