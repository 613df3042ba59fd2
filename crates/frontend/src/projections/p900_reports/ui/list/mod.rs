//! Reports page: summary stat cards, value by category and the report
//! registry with a CSV export of the full inventory.

use crate::shared::components::bar_chart::{BarChart, BarRow};
use crate::shared::components::{PageHeader, StatCard};
use crate::shared::data::categories;
use crate::shared::data::stats::{
    low_stock_alert_count, status_counts, total_quantity, total_value,
};
use crate::shared::data::inventory_items;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

/// One generated report in the registry.
struct ReportEntry {
    name: &'static str,
    report_type: &'static str,
    date: &'static str,
    status: &'static str,
}

fn report_registry() -> Vec<ReportEntry> {
    vec![
        ReportEntry { name: "Monthly Inventory Summary", report_type: "Summary", date: "2026-01-08", status: "Ready" },
        ReportEntry { name: "Low Stock Alert Report", report_type: "Alert", date: "2026-01-07", status: "Ready" },
        ReportEntry { name: "Category Distribution", report_type: "Analysis", date: "2026-01-06", status: "Ready" },
        ReportEntry { name: "Asset Valuation Report", report_type: "Financial", date: "2026-01-05", status: "Ready" },
        ReportEntry { name: "Usage Trends Q4 2025", report_type: "Trends", date: "2025-12-31", status: "Archived" },
    ]
}

#[component]
pub fn ReportsList() -> impl IntoView {
    let total_items = total_quantity();
    let value = total_value();
    let alerts = low_stock_alert_count();
    let out_of_stock = status_counts().out_of_stock;

    let value_rows: Vec<BarRow> = categories()
        .iter()
        .map(|cat| BarRow {
            label: cat.name.to_string(),
            value: cat.value,
            display: format!("${}", cat.value),
            color_class: "bar-chart__bar--primary",
        })
        .collect();

    let handle_export_all = move |_| {
        if let Err(err) = export_to_csv(inventory_items(), "inventory-report.csv") {
            log::error!("CSV export failed: {}", err);
        }
    };

    view! {
        <div id="p900_reports--list" data-page-category="list" class="page">
            <PageHeader
                title="Generate Reports"
                subtitle="View and export inventory reports".to_string()
            >
                <button class="button button--primary" on:click=handle_export_all>
                    {icon("download")}
                    "Export All"
                </button>
            </PageHeader>

            <div class="page__content">
                <div class="indicator-set__grid indicator-set__grid--cols-4">
                    <StatCard
                        label="Total Items".to_string()
                        icon_name="package".to_string()
                        value=Signal::derive(move || Some(total_items as f64))
                        format=ValueFormat::Integer
                        status=Signal::derive(|| IndicatorStatus::Neutral)
                        change_percent=Signal::derive(|| None)
                    />
                    <StatCard
                        label="Total Value".to_string()
                        icon_name="dollar-sign".to_string()
                        value=Signal::derive(move || Some(value))
                        format=ValueFormat::Money { currency: "$".to_string() }
                        status=Signal::derive(|| IndicatorStatus::Neutral)
                        change_percent=Signal::derive(|| None)
                    />
                    <StatCard
                        label="Low Stock".to_string()
                        icon_name="alert-triangle".to_string()
                        value=Signal::derive(move || Some(alerts as f64))
                        format=ValueFormat::Integer
                        status=Signal::derive(|| IndicatorStatus::Warning)
                        change_percent=Signal::derive(|| None)
                    />
                    <StatCard
                        label="Out of Stock".to_string()
                        icon_name="alert-triangle".to_string()
                        value=Signal::derive(move || Some(out_of_stock as f64))
                        format=ValueFormat::Integer
                        status=Signal::derive(|| IndicatorStatus::Bad)
                        change_percent=Signal::derive(|| None)
                    />
                </div>

                <section class="panel">
                    <h2 class="panel__title">"Value by Category"</h2>
                    <BarChart rows=value_rows />
                </section>

                <section class="panel">
                    <h2 class="panel__title">"Available Reports"</h2>
                    <div class="table-wrap">
                        <table class="list-table">
                            <thead>
                                <tr>
                                    <th>"Report"</th>
                                    <th>"Type"</th>
                                    <th>"Date"</th>
                                    <th>"Status"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {report_registry().into_iter().map(|report| {
                                    let status_class = if report.status == "Ready" {
                                        "badge badge--success"
                                    } else {
                                        "badge badge--outline"
                                    };
                                    view! {
                                        <tr>
                                            <td class="list-table__name">
                                                {icon("file-text")}
                                                {report.name}
                                            </td>
                                            <td>{report.report_type}</td>
                                            <td>{report.date}</td>
                                            <td><span class=status_class>{report.status}</span></td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                </section>
            </div>
        </div>
    }
}
