mod collection;
mod context;
mod coord_seq;
mod coordinate;
mod geometry;
mod geometry_type;
mod line_string;
mod linear_ring;
mod point;
mod polygon;
mod utils;

pub mod algorithms;
pub mod codec;
pub mod errors;
pub mod from_wkt;

pub use algorithms::{
    Buffer, BufferStyle, CapStyle, IntersectionMatrix, JoinStyle, Metrics, OffsetCurveStyle,
    Predicates, Relate,
};
pub use codec::{
    ByteOrder, WkbReader, WkbWriter, WkbWriterOptions, WktReader, WktWriter, WktWriterOptions,
};
pub use collection::MultiGeometry;
pub use context::Context;
pub use coord_seq::{CoordDimensions, CoordSeq, CoordSeqRead, CoordSeqRef};
pub use coordinate::{Coordinate, CoordinateType, CoordinateZ};
pub use errors::{GeometryError, Result};
pub use geometry::{Geom, Geometry, GeometryRef};
pub use geometry_type::GeometryType;
