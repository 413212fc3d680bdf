//! CSV Export
//!
//! Client-side export of record lists to a downloadable CSV file. Column
//! order comes from the first record's keys; records missing a key produce
//! an empty cell.

use serde_json::{Map, Value};
use wasm_bindgen::{JsCast, JsValue};

/// Serialize records to CSV text. Empty input produces an empty string.
pub fn to_csv(rows: &[Map<String, Value>]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    // Writing into a Vec cannot fail at the I/O layer.
    let _ = writer.write_record(&headers);
    for row in rows {
        let record: Vec<String> = headers
            .iter()
            .map(|key| match row.get(*key) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            })
            .collect();
        let _ = writer.write_record(&record);
    }

    writer
        .into_inner()
        .map(|buf| String::from_utf8_lossy(&buf).into_owned())
        .unwrap_or_default()
}

/// Trigger a browser download of `csv` under `filename`.
pub fn download_csv(csv: &str, filename: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(csv));
    let mut options = web_sys::BlobPropertyBag::new();
    options.type_("text/csv");

    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&JsValue::from(parts), &options)
    else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Ok(element) = document.create_element("a") {
        if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
            anchor.set_href(&url);
            anchor.set_download(filename);
            if let Some(body) = document.body() {
                let _ = body.append_child(&anchor);
                anchor.click();
                let _ = body.remove_child(&anchor);
            }
        }
    }

    let _ = web_sys::Url::revoke_object_url(&url);
}

/// Export records as a CSV download. Returns `false` when there was nothing
/// to export.
pub fn export_to_csv(rows: &[Map<String, Value>], filename: &str) -> bool {
    if rows.is_empty() {
        return false;
    }
    download_csv(&to_csv(rows), filename);
    true
}
