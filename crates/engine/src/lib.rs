//! The entry points of the geometry engine.
//!
//! Requests arrive as JSON values with the field names of the drawing front end
//! (`tipo`, `dados`, `algoritmo`, `metodo`, `transf`, `params`, ...). Every label
//! is resolved into an enum once, after which the work is handed to [raster].
//!
//! Unknown primitive or transformation kinds are not treated as errors: rasterizing
//! them yields no pixels and transforming them returns the input unchanged.
//! Missing or malformed fields fail the whole request, as does a transformation
//! whose result leaves the `i32` coordinate range.

mod error;
mod fields;
mod kind;
mod primitive;
mod response;

pub use error::Error;
pub use kind::{PrimitiveKind, TransformKind};
pub use raster::Point;
pub use response::{ClipResponse, DrawResponse};

use fields::Fields;
use kind::{clip_algorithm, line_algorithm};
use math::Vec2D;
use raster::{Primitive, Window};
use serde_json::Value;

/// Rasterize the primitive described by `data`.
///
/// `kind` is either `"linha"` or `"circulo"` (`"line"` and `"circle"` work too).
/// Lines may select their algorithm with `"algoritmo": "dda" | "bresenham"`.
pub fn rasterize(data: &Value, kind: &str) -> Result<Vec<Point>, Error> {
    let kind = match kind.parse() {
        Ok(kind) => kind,
        Err(error) => {
            log::debug!("Not rasterizing anything: {error}");
            return Ok(vec![]);
        },
    };

    let primitive = primitive::decode(kind, Fields::of(data)?)?;
    Ok(primitive.rasterize())
}

/// Clip a primitive against a window and rasterize what remains visible.
///
/// The request is either nested, with the primitive in `dados`:
/// ```json
/// { "tipo": "linha", "dados": { "x1": -5, ... }, "xmin": 0, "ymin": 0, "xmax": 10, "ymax": 10 }
/// ```
/// or flat, with the primitive's fields next to the window. Without a `tipo`, the
/// primitive is a circle if it has a `xc` field and a line otherwise.
///
/// `metodo` selects the clipping algorithm for lines (`"cohen-sutherland"` or
/// `"liang-barsky"`), `algoritmo` the line rasterizer.
pub fn clip_and_rasterize(request: &Value) -> Result<ClipResponse, Error> {
    let fields = Fields::of(request)?;

    let data = request
        .get("dados")
        .filter(|data| data.is_object())
        .unwrap_or(request);
    let primitive_fields = Fields::of(data)?;

    let kind = match fields.optional_string("tipo")? {
        Some(name) => match name.parse() {
            Ok(kind) => kind,
            Err(error) => {
                log::debug!("Not clipping anything: {error}");
                return Ok(ClipResponse::new(data.clone(), vec![]));
            },
        },
        None if primitive_fields.contains("xc") => PrimitiveKind::Circle,
        None => PrimitiveKind::Line,
    };

    let window = Window::from_corners(
        Vec2D::new(fields.number("xmin")?, fields.number("ymin")?),
        Vec2D::new(fields.number("xmax")?, fields.number("ymax")?),
    );
    let method = clip_algorithm(fields.optional_string("metodo")?);

    let mut primitive = primitive::decode(kind, primitive_fields)?;
    if let (Primitive::Line(line), Some(algorithm)) =
        (&mut primitive, fields.optional_string("algoritmo")?)
    {
        line.algorithm = line_algorithm(Some(algorithm));
    }

    let pixels = primitive.clip(&window, method);
    Ok(ClipResponse::new(data.clone(), pixels))
}

/// Apply a transformation to the primitive described by `data`.
///
/// Returns a copy of `data` with the new coordinates, every other field is kept.
/// `transform_kind` is one of `"translacao"`, `"escala"`, `"rotacao"` or `"reflexao"`,
/// which read `dx`/`dy`, `sx`/`sy`, `angulo` (in degrees) and `eixo` from `params`.
pub fn transform(
    data: &Value,
    kind: &str,
    transform_kind: &str,
    params: &Value,
) -> Result<Value, Error> {
    let kind = match kind.parse() {
        Ok(kind) => kind,
        Err(error) => {
            log::debug!("Not transforming anything: {error}");
            return Ok(data.clone());
        },
    };

    let transform_kind: TransformKind = match transform_kind.parse() {
        Ok(transform_kind) => transform_kind,
        Err(error) => {
            log::debug!("Not transforming anything: {error}");
            return Ok(data.clone());
        },
    };

    let fields = Fields::of(data)?;
    let primitive = primitive::decode(kind, fields)?;
    let transformation = transform_kind.with_params(Fields::of(params)?)?;
    let primitive = primitive
        .transformed(transformation)
        .ok_or(Error::OutOfRange)?;

    let mut transformed = fields.to_owned_map();
    primitive::encode_into(&primitive, &mut transformed);
    Ok(Value::Object(transformed))
}

/// Rasterize a primitive submitted by the drawing front end.
///
/// The request is the primitive itself. Its kind is derived from the selected
/// algorithm: `"bresenham_circulo"` draws a circle, anything else a line.
pub fn draw(request: &Value) -> Result<DrawResponse, Error> {
    let fields = Fields::of(request)?;

    let kind = if fields.optional_string("algoritmo")? == Some("bresenham_circulo") {
        PrimitiveKind::Circle
    } else {
        PrimitiveKind::Line
    };

    let primitive = primitive::decode(kind, fields)?;
    Ok(DrawResponse {
        kind: kind.label().to_string(),
        data: request.clone(),
        pixels: primitive.rasterize(),
    })
}

/// Like [transform], with all arguments taken from a single
/// `{ "tipo", "dados", "transf", "params" }` request
pub fn transform_request(request: &Value) -> Result<Value, Error> {
    let fields = Fields::of(request)?;

    transform(
        fields.value("dados")?,
        fields.string("tipo")?,
        fields.string("transf")?,
        fields.value("params")?,
    )
}

/// Transform a primitive and rasterize the result.
///
/// Expects `{ "tipo", "dados", "transf", "params" }`, see [transform].
pub fn transform_and_draw(request: &Value) -> Result<DrawResponse, Error> {
    let kind = Fields::of(request)?.string("tipo")?;

    let transformed = transform_request(request)?;
    let pixels = rasterize(&transformed, kind)?;

    Ok(DrawResponse {
        kind: kind.to_string(),
        data: transformed,
        pixels,
    })
}
