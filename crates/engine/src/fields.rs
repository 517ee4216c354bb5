use raster::Point;
use serde_json::{Map, Value};

use crate::Error;

/// Typed access to the fields of a JSON object
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn of(value: &'a Value) -> Result<Self, Error> {
        value
            .as_object()
            .map(|map| Self { map })
            .ok_or(Error::NotAnObject)
    }

    pub(crate) fn contains(&self, field: &str) -> bool {
        self.map.contains_key(field)
    }

    pub(crate) fn to_owned_map(&self) -> Map<String, Value> {
        self.map.clone()
    }

    pub(crate) fn value(&self, field: &'static str) -> Result<&'a Value, Error> {
        self.map.get(field).ok_or(Error::MissingField { field })
    }

    pub(crate) fn number(&self, field: &'static str) -> Result<f64, Error> {
        self.value(field)?
            .as_f64()
            .ok_or(Error::InvalidField { field })
    }

    /// Read a pixel coordinate.
    ///
    /// Fractional values are rounded to the nearest integer, ties away from zero.
    pub(crate) fn coordinate(&self, field: &'static str) -> Result<i32, Error> {
        let value = self.value(field)?;

        if let Some(integer) = value.as_i64() {
            return i32::try_from(integer).map_err(|_| Error::InvalidField { field });
        }

        let number = value
            .as_f64()
            .ok_or(Error::InvalidField { field })?
            .round();

        if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&number) {
            return Err(Error::InvalidField { field });
        }

        Ok(number as i32)
    }

    pub(crate) fn point(&self, x: &'static str, y: &'static str) -> Result<Point, Error> {
        Ok(Point::new(self.coordinate(x)?, self.coordinate(y)?))
    }

    pub(crate) fn string(&self, field: &'static str) -> Result<&'a str, Error> {
        self.value(field)?
            .as_str()
            .ok_or(Error::InvalidField { field })
    }

    /// Like [Self::string], except that a missing field is not an error
    pub(crate) fn optional_string(&self, field: &'static str) -> Result<Option<&'a str>, Error> {
        if self.contains(field) {
            self.string(field).map(Some)
        } else {
            Ok(None)
        }
    }
}
