use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pixel dimensions and byte size of the original file, from an
/// `iiprop=dimensions` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageDimensions {
    pub size: u64,
    pub width: u64,
    pub height: u64,
}

fn image_info(page: &Value) -> Option<&Value> {
    page.get("imageinfo")?.get(0)
}

pub(crate) fn dimensions(page: &Value) -> Option<ImageDimensions> {
    serde_json::from_value(image_info(page)?.clone()).ok()
}

/// Formats the whole `imageinfo[0]` object as returned by the service, or
/// the fixed fallback when it is absent.
pub(crate) fn dimensions_message(page: &Value) -> String {
    match image_info(page) {
        Some(info) => format!("Image Dimensions: {info}"),
        None => "Image dimensions unavailable.".to_owned(),
    }
}
