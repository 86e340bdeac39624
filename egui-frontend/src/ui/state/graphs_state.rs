//! # Graphs State Module
//!
//! Filter selection of the graphs screen and the chart opened in the detail
//! window.

use crate::backend::domain::{CategoryFilter, ValueTypeFilter};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphsState {
    pub category_filter: CategoryFilter,
    pub value_type_filter: ValueTypeFilter,
    /// Id of the chart shown in the detail window
    pub expanded_chart: Option<String>,
}

impl GraphsState {
    pub fn expand(&mut self, chart_id: &str) {
        self.expanded_chart = Some(chart_id.to_string());
    }

    pub fn close_detail(&mut self) {
        self.expanded_chart = None;
    }
}
