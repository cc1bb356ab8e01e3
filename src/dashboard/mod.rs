//! Dashboard module
//!
//! Derives the summary figures and chart data shown alongside the
//! transaction list.

mod aggregation;
mod charts;
mod summary;

pub use aggregation::{
    CategoryTotal, CategoryTotals, DEFAULT_WINDOW_MONTHS, MonthBucket, category_totals,
    monthly_series,
};
pub use charts::{
    DashboardChart, NO_EXPENSES_LABEL, dashboard_charts, expense_pie_chart, monthly_bar_chart,
    palette,
};
pub use summary::{StatusLine, Summary, summarize};
