use crate::GeometryType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeometryError>;

#[derive(Error, Debug, PartialEq)]
pub enum GeometryError {
    #[error("Could not create an engine context")]
    ContextInit,

    #[error("Geometries belong to different engine contexts")]
    ContextMismatch,

    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Coordinate sequence has {dimensions} dimensions, cannot write {ordinate}")]
    MissingDimension { dimensions: u32, ordinate: char },

    #[error("{operation} is not defined for {actual}")]
    UnsupportedGeometryType {
        operation: &'static str,
        actual: GeometryType,
    },

    #[error("Invalid DE-9IM pattern {0:?}")]
    InvalidPattern(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{operation} returned no result: {message}")]
    ConstructionFailed {
        operation: &'static str,
        message: String,
    },

    #[error("No geometries left after filtering for {0}")]
    EmptyCollection(GeometryType),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{operation} failed: {message}")]
    Engine {
        operation: &'static str,
        message: String,
    },

    #[error("Unknown geometry type id {0}")]
    UnknownGeometryType(i32),
}
