//! Asset QR label dialog.
//!
//! Shows the deterministic label pattern for one item on a canvas, with the
//! item summary next to it, and offers a PNG download and a print view.
//! Preview, download and print all derive from the same module grid, so the
//! exported label always matches what the dialog shows.

use crate::domain::a001_item::ui::table::status_badge;
use crate::shared::components::Modal;
use crate::shared::date_utils::format_date;
use crate::shared::export::{download_data_url, open_html_document};
use crate::shared::icons::icon;
use contracts::domain::a001_item::InventoryItem;
use contracts::shared::qr_label::{
    encode_png, generate_grid, png_data_uri, print_document, render_bitmap, seed_hash,
    LabelError, LabelPayload, ModuleGrid, GRID_SIZE, MODULE_PX,
};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Payload → hash → grid for one item.
fn label_grid(item: &InventoryItem) -> Result<ModuleGrid, LabelError> {
    let encoded = LabelPayload::from_item(item).encode()?;
    generate_grid(seed_hash(&encoded), GRID_SIZE)
}

/// Download file name: `qr-dell-laptops.png`
fn download_file_name(item: &InventoryItem) -> String {
    let slug = item
        .name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("qr-{}.png", slug)
}

fn draw_preview(canvas: &HtmlCanvasElement, grid: &ModuleGrid) -> Result<(), String> {
    let module = MODULE_PX as f64;
    let size_px = grid.size() as u32 * MODULE_PX;
    canvas.set_width(size_px);
    canvas.set_height(size_px);

    let ctx = canvas
        .get_context("2d")
        .map_err(|e| format!("2d context unavailable: {:?}", e))?
        .ok_or("2d context unavailable")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|e| format!("unexpected context type: {:?}", e))?;

    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(0.0, 0.0, size_px as f64, size_px as f64);

    ctx.set_fill_style_str("#000000");
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if grid.get(row, col) {
                ctx.fill_rect(col as f64 * module, row as f64 * module, module, module);
            }
        }
    }

    let far = (grid.size().saturating_sub(7)) as f64 * module;
    draw_position_marker(&ctx, 0.0, 0.0, module);
    draw_position_marker(&ctx, far, 0.0, module);
    draw_position_marker(&ctx, 0.0, far, module);

    Ok(())
}

/// The nested-square finder marker, drawn over the fill.
fn draw_position_marker(ctx: &CanvasRenderingContext2d, x: f64, y: f64, module: f64) {
    ctx.set_fill_style_str("#000000");
    ctx.fill_rect(x, y, module * 7.0, module * 7.0);
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_rect(x + module, y + module, module * 5.0, module * 5.0);
    ctx.set_fill_style_str("#000000");
    ctx.fill_rect(x + module * 2.0, y + module * 2.0, module * 3.0, module * 3.0);
}

#[component]
pub fn LabelDialog(item: InventoryItem, on_close: Callback<()>) -> impl IntoView {
    let grid = match label_grid(&item) {
        Ok(grid) => grid,
        Err(err) => {
            // Unreachable for well-formed records; bail out rather than
            // show an empty label.
            log::error!("label generation failed for item {}: {}", item.id.as_str(), err);
            return ().into_any();
        }
    };

    let canvas_ref = NodeRef::<html::Canvas>::new();
    let grid_for_draw = StoredValue::new(grid.clone());
    let grid_for_export = StoredValue::new(grid);
    let item_stored = StoredValue::new(item.clone());

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        grid_for_draw.with_value(|grid| {
            if let Err(err) = draw_preview(&canvas, grid) {
                log::error!("label preview failed: {}", err);
            }
        });
    });

    let handle_download = move |_| {
        let result = grid_for_export
            .with_value(|grid| encode_png(&render_bitmap(grid)))
            .map_err(|e| e.to_string())
            .and_then(|png| {
                let name = item_stored.with_value(download_file_name);
                download_data_url(&png_data_uri(&png), &name)
            });
        if let Err(err) = result {
            log::error!("label download failed: {}", err);
        }
    };

    let handle_print = move |_| {
        let result = grid_for_export
            .with_value(|grid| encode_png(&render_bitmap(grid)))
            .map_err(|e| e.to_string())
            .and_then(|png| {
                let document = item_stored.with_value(|item| print_document(item, &png));
                open_html_document(&document)
            });
        if let Err(err) = result {
            log::error!("label print failed: {}", err);
        }
    };

    view! {
        <Modal title="Asset QR Code".to_string() on_close=on_close>
            <div id="a001_item--detail" data-page-category="detail" class="qr-dialog">
                <p class="qr-dialog__hint">"Scan this QR code to view all asset information"</p>

                <div class="qr-dialog__canvas-frame">
                    <canvas node_ref=canvas_ref></canvas>
                </div>

                <div class="qr-dialog__summary">
                    <div class="qr-dialog__title-row">
                        <span class="qr-dialog__name">{item.name.clone()}</span>
                        {status_badge(item.status)}
                    </div>

                    <div class="qr-dialog__facts">
                        <div class="qr-dialog__fact">
                            {icon("package")}
                            <span>"Category: "</span>
                            <span class="qr-dialog__fact-value">{item.category.clone()}</span>
                        </div>
                        <div class="qr-dialog__fact">
                            {icon("map-pin")}
                            <span>"Location: "</span>
                            <span class="qr-dialog__fact-value">{item.location.clone()}</span>
                        </div>
                        <div class="qr-dialog__fact">
                            {icon("dollar-sign")}
                            <span>"Value: "</span>
                            <span class="qr-dialog__fact-value">{format!("${}", item.value)}</span>
                        </div>
                        <div class="qr-dialog__fact">
                            {icon("calendar")}
                            <span>"Updated: "</span>
                            <span class="qr-dialog__fact-value">{format_date(item.last_updated)}</span>
                        </div>
                    </div>

                    <div class="qr-dialog__meta">
                        <p>"Asset ID: " <span class="qr-dialog__mono">{format!("#{:0>6}", item.id.as_str())}</span></p>
                        <p>"Quantity in Stock: " <strong>{item.quantity}</strong> " units"</p>
                    </div>
                </div>

                <div class="qr-dialog__actions">
                    <button class="button" on:click=handle_download>
                        {icon("download")}
                        "Download"
                    </button>
                    <button class="button button--primary" on:click=handle_print>
                        {icon("printer")}
                        "Print"
                    </button>
                </div>
            </div>
        </Modal>
    }
    .into_any()
}
