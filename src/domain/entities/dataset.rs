use csv::StringRecord;

use crate::domain::entities::offer::{FieldIndex, Offer};

/// Parsed rows of one load cycle. Never mutated after construction; a new
/// load builds a new value.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    header: StringRecord,
    records: Vec<StringRecord>,
    fields: FieldIndex,
    skipped_lines: usize,
}

impl Dataset {
    pub fn new(header: StringRecord, records: Vec<StringRecord>, skipped_lines: usize) -> Self {
        let fields = FieldIndex::from_header(&header);
        Self {
            header,
            records,
            fields,
            skipped_lines,
        }
    }

    pub fn header(&self) -> &StringRecord {
        &self.header
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lines dropped during parsing because their width did not match the header.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    pub fn offer(&self, idx: usize) -> Option<Offer<'_>> {
        self.records
            .get(idx)
            .map(|record| Offer::new(record, &self.fields))
    }

    pub fn offers(&self) -> impl Iterator<Item = Offer<'_>> + '_ {
        self.records
            .iter()
            .map(move |record| Offer::new(record, &self.fields))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Price,
    BusinessName,
    PlanName,
    AccountSize,
    ProfitGoal,
    TrustpilotScore,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Price,
        SortField::BusinessName,
        SortField::PlanName,
        SortField::AccountSize,
        SortField::ProfitGoal,
        SortField::TrustpilotScore,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::BusinessName => "business_name",
            SortField::PlanName => "plan_name",
            SortField::AccountSize => "account_size",
            SortField::ProfitGoal => "profit_goal",
            SortField::TrustpilotScore => "trustpilot_score",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Price => "Price",
            SortField::BusinessName => "Business Name",
            SortField::PlanName => "Plan Name",
            SortField::AccountSize => "Account Size",
            SortField::ProfitGoal => "Profit Goal",
            SortField::TrustpilotScore => "Trustpilot Score",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Active predicates. Empty strings and `None` mean "not filtering".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub search_text: String,
    pub business: Option<String>,
    pub account_size: Option<String>,
    pub drawdown_mode: Option<String>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        *self == FilterState::default()
    }
}

/// Values offered by the filter dropdowns for the current dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterOptions {
    pub businesses: Vec<String>,
    pub account_sizes: Vec<String>,
    pub drawdown_modes: Vec<String>,
}
