//! Conversion between the JSON description of a primitive and [Primitive]

use raster::{Circle, Line, Primitive};
use serde_json::{Map, Value};

use crate::{fields::Fields, kind::line_algorithm, Error, PrimitiveKind};

pub(crate) fn decode(kind: PrimitiveKind, fields: Fields<'_>) -> Result<Primitive, Error> {
    let primitive = match kind {
        PrimitiveKind::Line => Primitive::Line(Line::new(
            fields.point("x1", "y1")?,
            fields.point("x2", "y2")?,
            line_algorithm(fields.optional_string("algoritmo")?),
        )),
        PrimitiveKind::Circle => Primitive::Circle(Circle::new(
            fields.point("xc", "yc")?,
            fields.coordinate("r")?,
        )),
    };

    Ok(primitive)
}

/// Overwrite the geometry fields in `data`, leaving every other field untouched
pub(crate) fn encode_into(primitive: &Primitive, data: &mut Map<String, Value>) {
    let values = match primitive {
        Primitive::Line(line) => vec![
            ("x1", line.from.x),
            ("y1", line.from.y),
            ("x2", line.to.x),
            ("y2", line.to.y),
        ],
        Primitive::Circle(circle) => vec![
            ("xc", circle.center.x),
            ("yc", circle.center.y),
            ("r", circle.radius),
        ],
    };

    for (field, value) in values {
        data.insert(field.to_string(), Value::from(value));
    }
}
