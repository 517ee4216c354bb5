//! The string labels of the request format, resolved into enums.

use std::str::FromStr;

use math::{Angle, Vec2D};
use raster::{Axis, ClipAlgorithm, LineAlgorithm, Transformation};

use crate::{fields::Fields, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Line,
    Circle,
}

impl PrimitiveKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Line => "linha",
            Self::Circle => "circulo",
        }
    }
}

impl FromStr for PrimitiveKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linha" | "line" => Ok(Self::Line),
            "circulo" | "circle" => Ok(Self::Circle),
            other => Err(Error::InvalidKind {
                kind: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformKind {
    Translation,
    Scale,
    Rotation,
    Reflection,
}

impl FromStr for TransformKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "translacao" | "translation" => Ok(Self::Translation),
            "escala" | "scale" => Ok(Self::Scale),
            "rotacao" | "rotation" => Ok(Self::Rotation),
            "reflexao" | "reflection" => Ok(Self::Reflection),
            other => Err(Error::InvalidKind {
                kind: other.to_string(),
            }),
        }
    }
}

impl TransformKind {
    /// Read the parameters this kind of transformation needs
    pub(crate) fn with_params(self, params: Fields<'_>) -> Result<Transformation, Error> {
        let transformation = match self {
            Self::Translation => Transformation::Translation {
                offset: Vec2D::new(params.number("dx")?, params.number("dy")?),
            },
            Self::Scale => Transformation::Scale {
                x: params.number("sx")?,
                y: params.number("sy")?,
            },
            Self::Rotation => {
                Transformation::Rotation(Angle::from_degrees(params.number("angulo")?))
            },
            Self::Reflection => Transformation::Reflection(axis(params.string("eixo")?)),
        };

        Ok(transformation)
    }
}

/// Unknown names fall back to [LineAlgorithm::Bresenham]
pub(crate) fn line_algorithm(name: Option<&str>) -> LineAlgorithm {
    match name {
        Some("dda") => LineAlgorithm::Dda,
        None | Some("bresenham" | "bresenham_linha") => LineAlgorithm::Bresenham,
        Some(other) => {
            log::warn!("Unknown line algorithm {other:?}, using bresenham");
            LineAlgorithm::Bresenham
        },
    }
}

/// Unknown names fall back to [ClipAlgorithm::CohenSutherland]
pub(crate) fn clip_algorithm(name: Option<&str>) -> ClipAlgorithm {
    match name {
        Some("liang-barsky") => ClipAlgorithm::LiangBarsky,
        None | Some("cohen-sutherland") => ClipAlgorithm::CohenSutherland,
        Some(other) => {
            log::warn!("Unknown clipping method {other:?}, using cohen-sutherland");
            ClipAlgorithm::CohenSutherland
        },
    }
}

/// Anything but `"x"` or `"y"` reflects across the origin
pub(crate) fn axis(name: &str) -> Axis {
    match name {
        "x" => Axis::X,
        "y" => Axis::Y,
        _ => Axis::Origin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_kinds() {
        assert_eq!("linha".parse(), Ok(PrimitiveKind::Line));
        assert_eq!("circle".parse(), Ok(PrimitiveKind::Circle));
        assert_eq!(
            "triangulo".parse::<PrimitiveKind>(),
            Err(Error::InvalidKind {
                kind: "triangulo".to_string()
            })
        );
    }

    #[test]
    fn transform_kinds() {
        assert_eq!("translacao".parse(), Ok(TransformKind::Translation));
        assert_eq!("escala".parse(), Ok(TransformKind::Scale));
        assert_eq!("rotacao".parse(), Ok(TransformKind::Rotation));
        assert_eq!("reflexao".parse(), Ok(TransformKind::Reflection));
        assert!("cisalhamento".parse::<TransformKind>().is_err());
    }

    #[test]
    fn algorithm_fallbacks() {
        assert_eq!(line_algorithm(Some("dda")), LineAlgorithm::Dda);
        assert_eq!(line_algorithm(None), LineAlgorithm::Bresenham);
        assert_eq!(line_algorithm(Some("wu")), LineAlgorithm::Bresenham);

        assert_eq!(
            clip_algorithm(Some("liang-barsky")),
            ClipAlgorithm::LiangBarsky
        );
        assert_eq!(clip_algorithm(None), ClipAlgorithm::CohenSutherland);
        assert_eq!(
            clip_algorithm(Some("sutherland-hodgman")),
            ClipAlgorithm::CohenSutherland
        );
    }

    #[test]
    fn transformation_params() {
        let params = serde_json::json!({ "dx": 3, "dy": -4.5, "eixo": "y" });
        let params = Fields::of(&params).unwrap();

        assert_eq!(
            TransformKind::Translation.with_params(params),
            Ok(Transformation::Translation {
                offset: Vec2D::new(3., -4.5)
            })
        );
        assert_eq!(
            TransformKind::Reflection.with_params(params),
            Ok(Transformation::Reflection(Axis::Y))
        );
        assert_eq!(
            TransformKind::Rotation.with_params(params),
            Err(Error::MissingField { field: "angulo" })
        );
    }

    #[test]
    fn axes() {
        assert_eq!(axis("x"), Axis::X);
        assert_eq!(axis("y"), Axis::Y);
        assert_eq!(axis("xy"), Axis::Origin);
    }
}
