use raster::Point;
use serde::Serialize;
use serde_json::Value;

/// The result of clipping a primitive against a window
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ClipResponse {
    /// The primitive exactly as it was submitted
    #[serde(rename = "dados")]
    pub data: Value,

    pub pixels: Vec<Point>,

    /// Whether any part of the primitive lies inside the window
    pub visible: bool,
}

impl ClipResponse {
    pub(crate) fn new(data: Value, pixels: Vec<Point>) -> Self {
        Self {
            data,
            visible: !pixels.is_empty(),
            pixels,
        }
    }
}

/// A primitive together with its pixels
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawResponse {
    #[serde(rename = "tipo")]
    pub kind: String,

    #[serde(rename = "dados")]
    pub data: Value,

    pub pixels: Vec<Point>,
}
