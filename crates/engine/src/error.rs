use error_derive::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[msg = "missing field {field:?}"]
    MissingField { field: &'static str },

    #[msg = "field {field:?} does not hold a valid value"]
    InvalidField { field: &'static str },

    #[msg = "unknown kind {kind:?}"]
    InvalidKind { kind: String },

    #[msg = "expected an object"]
    NotAnObject,

    #[msg = "the transformed primitive does not fit into the coordinate range"]
    OutOfRange,
}
