//! Chart generation for the dashboard.
//!
//! This module creates ECharts configurations for two charts:
//! - **Expense Breakdown**: pie chart of expenses per category, honouring the
//!   active filters
//! - **Monthly Trend**: grouped bar chart of income and expenses per month over
//!   the whole history
//!
//! Charts are built with `charming` and serialized to JSON for the ECharts
//! library on the presentation side.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisType, Color, ItemStyle, Tooltip, Trigger},
    series::{Pie, bar::Bar},
};

use crate::{
    dashboard::aggregation::{CategoryTotals, MonthBucket},
    transaction::round_to_cents,
};

/// Shown as a single slice when there are no expenses to break down.
pub const NO_EXPENSES_LABEL: &str = "No expenses";

const PALETTE: [&str; 8] = [
    "#7c5cff", "#5aa3ff", "#4ade80", "#ffb86b", "#ff6b6b", "#a78bfa", "#60a5fa", "#f472b6",
];

const INCOME_COLOR: &str = "rgba(76, 217, 100, 0.9)";
const EXPENSE_COLOR: &str = "rgba(255, 99, 132, 0.9)";

/// A dashboard chart with its HTML container ID and ECharts configuration.
#[derive(Debug, Clone)]
pub struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// The first `count` palette colours, cycling when there are more than eight.
pub fn palette(count: usize) -> Vec<&'static str> {
    PALETTE.iter().copied().cycle().take(count).collect()
}

/// Pie chart of expenses per category.
///
/// Falls back to a single placeholder slice when there are no expenses so the
/// chart never renders empty.
pub fn expense_pie_chart(totals: &CategoryTotals) -> Chart {
    let data: Vec<(f64, String)> = if totals.is_empty() {
        vec![(1.0, NO_EXPENSES_LABEL.to_owned())]
    } else {
        totals
            .rounded()
            .into_iter()
            .map(|total| (total.total, total.category.to_string()))
            .collect()
    };

    let colors = palette(data.len()).into_iter().map(Color::from).collect();

    Chart::new()
        .title(Title::new().text("Expense breakdown"))
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new())
        .color(colors)
        .series(Pie::new().name("Expenses").data(data))
}

/// Bar chart comparing income and expenses for each month.
pub fn monthly_bar_chart(buckets: &[MonthBucket]) -> Chart {
    let labels: Vec<String> = buckets.iter().map(|bucket| bucket.label.clone()).collect();
    let income: Vec<f64> = buckets
        .iter()
        .map(|bucket| round_to_cents(bucket.income))
        .collect();
    let expense: Vec<f64> = buckets
        .iter()
        .map(|bucket| round_to_cents(bucket.expense))
        .collect();

    Chart::new()
        .title(Title::new().text("Monthly trend"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            Bar::new()
                .name("Income")
                .item_style(ItemStyle::new().color(INCOME_COLOR))
                .data(income),
        )
        .series(
            Bar::new()
                .name("Expense")
                .item_style(ItemStyle::new().color(EXPENSE_COLOR))
                .data(expense),
        )
}

/// Build both dashboard charts, serialized for ECharts.
pub fn dashboard_charts(totals: &CategoryTotals, buckets: &[MonthBucket]) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "expense-breakdown-chart",
            options: expense_pie_chart(totals).to_string(),
        },
        DashboardChart {
            id: "monthly-trend-chart",
            options: monthly_bar_chart(buckets).to_string(),
        },
    ]
}
