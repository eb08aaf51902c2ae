use crate::errors::GeometryError;
use std::convert::TryFrom;
use std::fmt;
use std::os::raw::c_int;

/// Geometry kinds, numbered as the engine numbers them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point = 0,
    LineString = 1,
    LinearRing = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryType {
    pub fn is_collection(self) -> bool {
        match self {
            GeometryType::MultiPoint
            | GeometryType::MultiLineString
            | GeometryType::MultiPolygon
            | GeometryType::GeometryCollection => true,
            _ => false,
        }
    }

    /// The only component type a homogeneous collection accepts.
    /// `None` for heterogeneous collections and non-collections.
    pub fn component_type(self) -> Option<GeometryType> {
        match self {
            GeometryType::MultiPoint => Some(GeometryType::Point),
            GeometryType::MultiLineString => Some(GeometryType::LineString),
            GeometryType::MultiPolygon => Some(GeometryType::Polygon),
            _ => None,
        }
    }

    /// Whether a geometry of kind `member` may be placed in a collection of this kind.
    pub fn accepts(self, member: GeometryType) -> bool {
        match self {
            GeometryType::GeometryCollection => true,
            _ => self.component_type() == Some(member),
        }
    }

    pub(crate) fn id(self) -> c_int {
        self as c_int
    }
}

impl TryFrom<c_int> for GeometryType {
    type Error = GeometryError;

    fn try_from(id: c_int) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(GeometryType::Point),
            1 => Ok(GeometryType::LineString),
            2 => Ok(GeometryType::LinearRing),
            3 => Ok(GeometryType::Polygon),
            4 => Ok(GeometryType::MultiPoint),
            5 => Ok(GeometryType::MultiLineString),
            6 => Ok(GeometryType::MultiPolygon),
            7 => Ok(GeometryType::GeometryCollection),
            _ => Err(GeometryError::UnknownGeometryType(id)),
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::LinearRing => "LinearRing",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        };
        f.write_str(name)
    }
}
