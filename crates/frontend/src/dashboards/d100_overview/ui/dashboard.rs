//! Overview dashboard: headline stat cards, the monthly movement chart,
//! category distribution and the most recently updated items.

use crate::domain::a001_item::ui::table::ItemTable;
use crate::shared::components::bar_chart::{BarChart, BarRow};
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::data::stats::{
    low_stock_alert_count, recent_items, total_quantity, total_value,
};
use crate::shared::data::{categories, monthly_movement};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let total_items = total_quantity();
    let category_count = categories().len();
    let alerts = low_stock_alert_count();
    let value = total_value();

    // Category share of the total tracked quantity.
    let total_count: u32 = categories().iter().map(|c| c.count).sum();
    let distribution_rows: Vec<BarRow> = categories()
        .iter()
        .map(|cat| {
            let percent = (cat.count as f64 / total_count as f64 * 100.0).round();
            BarRow {
                label: cat.name.to_string(),
                value: cat.count as f64,
                display: format!("{}%", percent),
                color_class: "bar-chart__bar--primary",
            }
        })
        .collect();

    let movement_max = monthly_movement()
        .iter()
        .flat_map(|m| [m.incoming, m.outgoing])
        .max()
        .unwrap_or(1)
        .max(1);

    let recent = recent_items(5);

    view! {
        <div id="d100_overview--dashboard" data-page-category="dashboard" class="page">
            <PageHeader
                title="Dashboard"
                subtitle="School inventory at a glance".to_string()
            >
                <></>
            </PageHeader>

            <div class="page__content">
                <div class="indicator-set__grid indicator-set__grid--cols-4">
                    <StatCard
                        label="Total Items".to_string()
                        icon_name="package".to_string()
                        value=Signal::derive(move || Some(total_items as f64))
                        format=ValueFormat::Integer
                        status=Signal::derive(|| IndicatorStatus::Good)
                        change_percent=Signal::derive(|| Some(12.0))
                        subtitle=Signal::derive(|| Some("from last month".to_string()))
                    />
                    <StatCard
                        label="Categories".to_string()
                        icon_name="layers".to_string()
                        value=Signal::derive(move || Some(category_count as f64))
                        format=ValueFormat::Integer
                        status=Signal::derive(|| IndicatorStatus::Neutral)
                        change_percent=Signal::derive(|| None)
                        subtitle=Signal::derive(|| Some("2 new this month".to_string()))
                    />
                    <StatCard
                        label="Low Stock Alerts".to_string()
                        icon_name="alert-triangle".to_string()
                        value=Signal::derive(move || Some(alerts as f64))
                        format=ValueFormat::Integer
                        status=Signal::derive(|| IndicatorStatus::Warning)
                        change_percent=Signal::derive(|| None)
                        subtitle=Signal::derive(|| Some("Requires attention".to_string()))
                    />
                    <StatCard
                        label="Total Value".to_string()
                        icon_name="dollar-sign".to_string()
                        value=Signal::derive(move || Some(value))
                        format=ValueFormat::Money { currency: "$".to_string() }
                        status=Signal::derive(|| IndicatorStatus::Good)
                        change_percent=Signal::derive(|| Some(5.2))
                        subtitle=Signal::derive(|| Some("from last month".to_string()))
                    />
                </div>

                <div class="panel-grid">
                    <section class="panel">
                        <h2 class="panel__title">"Inventory Movement"</h2>
                        <p class="panel__subtitle">"Items in/out over the past 6 months"</p>

                        <div class="movement-chart__legend">
                            <span class="movement-chart__legend-item movement-chart__legend-item--in">"Incoming"</span>
                            <span class="movement-chart__legend-item movement-chart__legend-item--out">"Outgoing"</span>
                        </div>
                        <div class="movement-chart">
                            {monthly_movement().iter().map(|month| {
                                let in_height = month.incoming * 100 / movement_max;
                                let out_height = month.outgoing * 100 / movement_max;
                                view! {
                                    <div class="movement-chart__group">
                                        <div class="movement-chart__bars">
                                            <div
                                                class="movement-chart__bar movement-chart__bar--in"
                                                style=format!("height: {}%", in_height)
                                                title=format!("{} incoming", month.incoming)
                                            ></div>
                                            <div
                                                class="movement-chart__bar movement-chart__bar--out"
                                                style=format!("height: {}%", out_height)
                                                title=format!("{} outgoing", month.outgoing)
                                            ></div>
                                        </div>
                                        <span class="movement-chart__month">{month.month}</span>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </section>

                    <section class="panel">
                        <h2 class="panel__title">"Category Distribution"</h2>
                        <p class="panel__subtitle">"Share of tracked stock per category"</p>
                        <BarChart rows=distribution_rows />
                    </section>
                </div>

                <section class="panel">
                    <h2 class="panel__title">"Recent Updates"</h2>
                    <p class="panel__subtitle">"Latest five inventory changes"</p>
                    <ItemTable items=Signal::derive(move || recent.clone()) />
                </section>
            </div>
        </div>
    }
}
