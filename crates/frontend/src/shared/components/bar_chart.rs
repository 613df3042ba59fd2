use leptos::prelude::*;

/// One horizontal bar of a [`BarChart`].
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub label: String,
    pub value: f64,
    /// Formatted value text shown at the end of the bar
    pub display: String,
    pub color_class: &'static str,
}

/// Proportional horizontal bars, scaled to the largest row.
///
/// Plain CSS widths instead of a chart engine: enough for the handful of
/// series the dashboards show.
#[component]
pub fn BarChart(rows: Vec<BarRow>) -> impl IntoView {
    let max = rows
        .iter()
        .map(|r| r.value)
        .fold(0.0_f64, f64::max)
        .max(1.0);

    view! {
        <div class="bar-chart">
            {rows.into_iter().map(|row| {
                let width = (row.value / max * 100.0).round();
                view! {
                    <div class="bar-chart__row">
                        <span class="bar-chart__label">{row.label.clone()}</span>
                        <div class="bar-chart__track">
                            <div
                                class=format!("bar-chart__bar {}", row.color_class)
                                style=format!("width: {}%", width)
                            ></div>
                        </div>
                        <span class="bar-chart__value">{row.display.clone()}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
