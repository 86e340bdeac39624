//! # Chart Catalog
//!
//! The economic indicators offered on the graphs screen, plus the filters and
//! per-card summaries the screen needs.
//!
//! ## Key Responsibilities
//!
//! - Load the built-in indicator list (embedded JSON)
//! - Filter charts by category and by value type
//! - Summarize a chart for its card: latest value label and trend direction

use anyhow::{Context, Result};
use log::info;
use shared::{CategoryKey, ChartItem, ValueType};

const BUILTIN_CHARTS: &str = include_str!("../data/charts.json");

/// Category filter chip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryKey),
}

impl CategoryFilter {
    /// Chips in display order
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(CategoryKey::ALL.iter().map(|key| CategoryFilter::Only(*key)))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Todas",
            CategoryFilter::Only(key) => key.label(),
        }
    }

    pub fn matches(&self, chart: &ChartItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(key) => chart.category == *key,
        }
    }
}

/// Value type filter chip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueTypeFilter {
    #[default]
    All,
    Only(ValueType),
}

impl ValueTypeFilter {
    pub const OPTIONS: [ValueTypeFilter; 3] = [
        ValueTypeFilter::All,
        ValueTypeFilter::Only(ValueType::Percentage),
        ValueTypeFilter::Only(ValueType::Absolute),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ValueTypeFilter::All => "Todas",
            ValueTypeFilter::Only(ValueType::Percentage) => "Percentual",
            ValueTypeFilter::Only(ValueType::Absolute) => "Absoluto",
        }
    }

    pub fn matches(&self, chart: &ChartItem) -> bool {
        match self {
            ValueTypeFilter::All => true,
            ValueTypeFilter::Only(value_type) => chart.value_type == *value_type,
        }
    }
}

/// Direction of the latest move in a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "Alta",
            Trend::Down => "Queda",
        }
    }
}

/// What a chart card shows next to its sparkline
#[derive(Debug, Clone, PartialEq)]
pub struct CardSummary {
    pub value_label: String,
    pub trend: Trend,
}

/// Latest value and trend of a chart.
///
/// An empty series reads as a single zero; a one-point series counts as a
/// rise.
pub fn card_summary(chart: &ChartItem) -> CardSummary {
    let last = chart.series.last().copied().unwrap_or(0.0);
    let previous = chart
        .series
        .len()
        .checked_sub(2)
        .and_then(|index| chart.series.get(index))
        .copied()
        .unwrap_or(last);

    CardSummary {
        value_label: chart.series_format().format_value(last),
        trend: if last >= previous { Trend::Up } else { Trend::Down },
    }
}

#[derive(Debug, Clone)]
pub struct ChartCatalog {
    charts: Vec<ChartItem>,
}

impl ChartCatalog {
    /// Catalog bundled with the app
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CHARTS).context("Failed to load built-in chart catalog")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let charts: Vec<ChartItem> = serde_json::from_str(json).context("Invalid chart catalog JSON")?;
        info!("Loaded {} charts", charts.len());
        Ok(Self { charts })
    }

    pub fn charts(&self) -> &[ChartItem] {
        &self.charts
    }

    pub fn find(&self, id: &str) -> Option<&ChartItem> {
        self.charts.iter().find(|chart| chart.id == id)
    }

    /// Charts passing both filters, catalog order
    pub fn filtered(&self, category: CategoryFilter, value_type: ValueTypeFilter) -> Vec<&ChartItem> {
        self.charts
            .iter()
            .filter(|chart| category.matches(chart) && value_type.matches(chart))
            .collect()
    }
}
