/// Browser download helpers: CSV exports and pre-rendered label images
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait for types that can be exported as CSV rows
pub trait CsvExportable {
    /// Column header row
    fn headers() -> Vec<&'static str>;

    /// One record as a row of cell values
    fn to_csv_row(&self) -> Vec<String>;
}

/// Assemble the CSV text for a record slice
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = String::new();

    csv_content.push_str(&T::headers().join(","));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(","));
        csv_content.push('\n');
    }

    csv_content
}

/// Export a record slice as a CSV file and start the download
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let blob = create_blob(&build_csv(data), "text/csv;charset=utf-8;")?;
    download_url(
        &Url::create_object_url_with_blob(&blob)
            .map_err(|e| format!("Failed to create object URL: {:?}", e))?,
        filename,
        true,
    )
}

/// Start a download of an already encoded `data:` URI (e.g. a label PNG)
pub fn download_data_url(data_url: &str, filename: &str) -> Result<(), String> {
    download_url(data_url, filename, false)
}

/// Open an HTML document (e.g. a printable label) in a new browser window
pub fn open_html_document(html: &str) -> Result<(), String> {
    let blob = create_blob(html, "text/html;charset=utf-8;")?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("Failed to open window: {:?}", e))?;

    Ok(())
}

/// Quote a CSV cell when it contains a separator, quote or newline
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Click a hidden anchor pointing at the URL to start the download
fn download_url(url: &str, filename: &str, revoke: bool) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    if revoke {
        Url::revoke_object_url(url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        name: &'static str,
        qty: u32,
    }

    impl CsvExportable for Line {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Quantity"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.qty.to_string()]
        }
    }

    #[test]
    fn test_build_csv() {
        let lines = [
            Line { name: "Projectors", qty: 12 },
            Line { name: "Paper, A4 \"reams\"", qty: 15 },
        ];
        let csv = build_csv(&lines);
        assert_eq!(
            csv,
            "Name,Quantity\nProjectors,12\n\"Paper, A4 \"\"reams\"\"\",15\n"
        );
    }

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }
}
