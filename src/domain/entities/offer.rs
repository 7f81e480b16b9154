use csv::StringRecord;

use crate::domain::normalize::{
    account_size_bucket, account_size_value, extract_price, leading_number, parse_rating,
};

const FIELD_COUNT: usize = 14;

/// Columns the comparison table knows how to interpret. Any other header
/// column is carried along untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfferField {
    BusinessName,
    PlanName,
    AccountType,
    AccountSize,
    PriceRaw,
    ProfitGoal,
    TrailingDrawdown,
    DailyLossLimit,
    ActivationFee,
    ResetFee,
    DrawdownMode,
    DiscountCode,
    TrustpilotScore,
    SourceUrl,
}

impl OfferField {
    pub const ALL: [OfferField; FIELD_COUNT] = [
        OfferField::BusinessName,
        OfferField::PlanName,
        OfferField::AccountType,
        OfferField::AccountSize,
        OfferField::PriceRaw,
        OfferField::ProfitGoal,
        OfferField::TrailingDrawdown,
        OfferField::DailyLossLimit,
        OfferField::ActivationFee,
        OfferField::ResetFee,
        OfferField::DrawdownMode,
        OfferField::DiscountCode,
        OfferField::TrustpilotScore,
        OfferField::SourceUrl,
    ];

    pub fn column_name(self) -> &'static str {
        match self {
            OfferField::BusinessName => "business_name",
            OfferField::PlanName => "plan_name",
            OfferField::AccountType => "account_type",
            OfferField::AccountSize => "account_size",
            OfferField::PriceRaw => "price_raw",
            OfferField::ProfitGoal => "profit_goal",
            OfferField::TrailingDrawdown => "trailing_drawdown",
            OfferField::DailyLossLimit => "daily_loss_limit",
            OfferField::ActivationFee => "activation_fee",
            OfferField::ResetFee => "reset_fee",
            OfferField::DrawdownMode => "drawdown_mode",
            OfferField::DiscountCode => "discount_code",
            OfferField::TrustpilotScore => "trustpilot_score",
            OfferField::SourceUrl => "source_url",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OfferField::BusinessName => "Business",
            OfferField::PlanName => "Plan Name",
            OfferField::AccountType => "Account Type",
            OfferField::AccountSize => "Account Size",
            OfferField::PriceRaw => "Price",
            OfferField::ProfitGoal => "Profit Goal",
            OfferField::TrailingDrawdown => "Trailing Drawdown",
            OfferField::DailyLossLimit => "Daily Loss Limit",
            OfferField::ActivationFee => "Activation Fee",
            OfferField::ResetFee => "Reset Fee",
            OfferField::DrawdownMode => "Drawdown Mode",
            OfferField::DiscountCode => "Discount Code",
            OfferField::TrustpilotScore => "Trustpilot Rating",
            OfferField::SourceUrl => "Visit Site",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Header position of every known column, resolved once per dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldIndex {
    positions: [Option<usize>; FIELD_COUNT],
}

impl FieldIndex {
    pub fn from_header(header: &StringRecord) -> Self {
        let mut positions = [None; FIELD_COUNT];
        for field in OfferField::ALL {
            positions[field.slot()] = header
                .iter()
                .position(|name| name.eq_ignore_ascii_case(field.column_name()));
        }
        Self { positions }
    }

    pub fn position(&self, field: OfferField) -> Option<usize> {
        self.positions[field.slot()]
    }
}

/// Borrowed view of one dataset row. Values stay as the trimmed CSV text;
/// typed readings are derived on every call.
#[derive(Debug, Clone, Copy)]
pub struct Offer<'a> {
    record: &'a StringRecord,
    fields: &'a FieldIndex,
}

impl<'a> Offer<'a> {
    pub fn new(record: &'a StringRecord, fields: &'a FieldIndex) -> Self {
        Self { record, fields }
    }

    /// Raw text of `field`, empty when the column is not in the header.
    pub fn get(&self, field: OfferField) -> &'a str {
        self.fields
            .position(field)
            .and_then(|idx| self.record.get(idx))
            .unwrap_or("")
    }

    pub fn business_name(&self) -> &'a str {
        self.get(OfferField::BusinessName)
    }

    pub fn price(&self) -> Option<f64> {
        extract_price(self.get(OfferField::PriceRaw))
    }

    pub fn rating(&self) -> Option<f64> {
        parse_rating(self.get(OfferField::TrustpilotScore))
    }

    pub fn profit_goal(&self) -> Option<f64> {
        leading_number(&self.get(OfferField::ProfitGoal).replace(['$', ','], ""))
    }

    pub fn account_size(&self) -> Option<f64> {
        account_size_value(self.get(OfferField::AccountSize))
    }

    pub fn account_bucket(&self) -> Option<String> {
        account_size_bucket(self.get(OfferField::AccountSize))
    }

    pub fn search_text(&self) -> String {
        [
            OfferField::BusinessName,
            OfferField::PlanName,
            OfferField::AccountType,
            OfferField::AccountSize,
            OfferField::DrawdownMode,
        ]
        .iter()
        .map(|field| self.get(*field))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }
}
