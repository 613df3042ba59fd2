//! Analytics dashboard: KPI tiles, stock health, category utilization and
//! the largest positions.

use crate::shared::components::bar_chart::{BarChart, BarRow};
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::data::categories;
use crate::shared::data::stats::{category_utilization, status_counts, top_movers};
use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

/// Operational KPI figures; fixed reference values, there is no history to
/// compute them from.
struct Kpi {
    label: &'static str,
    icon: &'static str,
    value: f64,
    format: ValueFormat,
    change_percent: f64,
    status: IndicatorStatus,
}

fn kpis() -> Vec<Kpi> {
    vec![
        Kpi {
            label: "Stock Turnover",
            icon: "activity",
            value: 4.2,
            format: ValueFormat::Number { decimals: 1 },
            change_percent: 12.0,
            status: IndicatorStatus::Good,
        },
        Kpi {
            label: "Avg. Restock Days",
            icon: "calendar",
            value: 3.5,
            format: ValueFormat::Number { decimals: 1 },
            change_percent: -18.0,
            status: IndicatorStatus::Good,
        },
        Kpi {
            label: "Accuracy",
            icon: "activity",
            value: 98.5,
            format: ValueFormat::Percent { decimals: 1 },
            change_percent: 2.0,
            status: IndicatorStatus::Good,
        },
        Kpi {
            label: "Fill Rate",
            icon: "activity",
            value: 94.2,
            format: ValueFormat::Percent { decimals: 1 },
            change_percent: 5.0,
            status: IndicatorStatus::Good,
        },
    ]
}

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let counts = status_counts();
    let health_rows = vec![
        BarRow {
            label: "Available".to_string(),
            value: counts.available as f64,
            display: counts.available.to_string(),
            color_class: "bar-chart__bar--success",
        },
        BarRow {
            label: "Low Stock".to_string(),
            value: counts.low_stock as f64,
            display: counts.low_stock.to_string(),
            color_class: "bar-chart__bar--warning",
        },
        BarRow {
            label: "Out of Stock".to_string(),
            value: counts.out_of_stock as f64,
            display: counts.out_of_stock.to_string(),
            color_class: "bar-chart__bar--error",
        },
    ];

    let utilization_rows: Vec<BarRow> = categories()
        .iter()
        .map(|cat| {
            let utilization = category_utilization(cat.name);
            BarRow {
                label: cat.name.to_string(),
                value: utilization as f64,
                display: format!("{}%", utilization),
                color_class: "bar-chart__bar--primary",
            }
        })
        .collect();

    let movers = top_movers(5);

    view! {
        <div id="d101_analytics--dashboard" data-page-category="dashboard" class="page">
            <PageHeader
                title="Inventory Analytics"
                subtitle="Insights and performance metrics".to_string()
            >
                <></>
            </PageHeader>

            <div class="page__content">
                <div class="indicator-set__grid indicator-set__grid--cols-4">
                    {kpis().into_iter().map(|kpi| {
                        view! {
                            <StatCard
                                label=kpi.label.to_string()
                                icon_name=kpi.icon.to_string()
                                value=Signal::derive(move || Some(kpi.value))
                                format=kpi.format.clone()
                                status=Signal::derive(move || kpi.status)
                                change_percent=Signal::derive(move || Some(kpi.change_percent))
                            />
                        }
                    }).collect_view()}
                </div>

                <div class="panel-grid">
                    <section class="panel">
                        <h2 class="panel__title">"Stock Health"</h2>
                        <p class="panel__subtitle">"Positions per stock status"</p>
                        <BarChart rows=health_rows />
                    </section>

                    <section class="panel">
                        <h2 class="panel__title">"Category Utilization"</h2>
                        <p class="panel__subtitle">"Shelf utilization per category"</p>
                        <BarChart rows=utilization_rows />
                    </section>
                </div>

                <section class="panel">
                    <h2 class="panel__title">"Top Movers"</h2>
                    <p class="panel__subtitle">"Largest positions by quantity"</p>
                    <div class="mover-list">
                        {movers.into_iter().enumerate().map(|(index, item)| {
                            let trending_up = index % 2 == 0;
                            view! {
                                <div class="mover-list__row">
                                    <span class="mover-list__rank">{index + 1}</span>
                                    <div class="mover-list__text">
                                        <span class="mover-list__name">{item.name.clone()}</span>
                                        <span class="mover-list__category">{item.category.clone()}</span>
                                    </div>
                                    <span class="mover-list__qty">{format!("{} pcs", item.quantity)}</span>
                                    <span class=if trending_up { "mover-list__trend mover-list__trend--up" } else { "mover-list__trend mover-list__trend--down" }>
                                        {icon(if trending_up { "trending-up" } else { "trending-down" })}
                                    </span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}
