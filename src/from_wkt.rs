//! Build engine geometries from the `wkt` crate's parsed model, going
//! through coordinate sequences the same way the leaf constructors do.

use crate::coord_seq::{CoordDimensions, CoordSeq};
use crate::errors::{GeometryError, Result};
use crate::{Context, Coordinate, CoordinateZ, Geometry, GeometryType};
use wkt::types;
use wkt::types::Coord;

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Coordinate {
            x: coord.x,
            y: coord.y,
        }
    }
}

/// Missing z values read as NaN, as the engine does.
impl From<Coord<f64>> for CoordinateZ {
    fn from(coord: Coord<f64>) -> Self {
        CoordinateZ {
            x: coord.x,
            y: coord.y,
            z: coord.z.unwrap_or(f64::NAN),
        }
    }
}

/// Parse `wkt_str` and build one geometry per item, in order.
pub fn parse_wkt<'c>(context: &'c Context, wkt_str: &str) -> Result<Vec<Geometry<'c>>> {
    let wkt_geoms =
        wkt::Wkt::from_str(wkt_str).map_err(|e| GeometryError::Parse(e.to_owned()))?;
    wkt_geoms
        .items
        .into_iter()
        .map(|geom| from_wkt_geometry(context, geom))
        .collect()
}

pub fn from_wkt_geometry<'c>(
    context: &'c Context,
    geom: wkt::Geometry<f64>,
) -> Result<Geometry<'c>> {
    match geom {
        wkt::Geometry::Point(p) => from_wkt_point(context, p),
        wkt::Geometry::LineString(ls) => from_wkt_linestring(context, ls),
        wkt::Geometry::Polygon(p) => from_wkt_polygon(context, p),
        wkt::Geometry::MultiPoint(mp) => {
            let members = mp
                .0
                .into_iter()
                .map(|p| from_wkt_point(context, p))
                .collect::<Result<Vec<_>>>()?;
            Geometry::create_collection(context, GeometryType::MultiPoint, members)
        }
        wkt::Geometry::MultiLineString(mls) => {
            let members = mls
                .0
                .into_iter()
                .map(|ls| from_wkt_linestring(context, ls))
                .collect::<Result<Vec<_>>>()?;
            Geometry::create_collection(context, GeometryType::MultiLineString, members)
        }
        wkt::Geometry::MultiPolygon(mpoly) => {
            let members = mpoly
                .0
                .into_iter()
                .map(|p| from_wkt_polygon(context, p))
                .collect::<Result<Vec<_>>>()?;
            Geometry::create_collection(context, GeometryType::MultiPolygon, members)
        }
        wkt::Geometry::GeometryCollection(gc) => {
            let members = gc
                .0
                .into_iter()
                .map(|g| from_wkt_geometry(context, g))
                .collect::<Result<Vec<_>>>()?;
            Geometry::create_collection(context, GeometryType::GeometryCollection, members)
        }
    }
}

/// 3D as soon as one coordinate carries a z value.
fn coords_to_seq<'c>(context: &'c Context, coords: Vec<Coord<f64>>) -> Result<CoordSeq<'c>> {
    if coords.iter().any(|c| c.z.is_some()) {
        let coords: Vec<CoordinateZ> = coords.into_iter().map(CoordinateZ::from).collect();
        CoordSeq::from_coords(context, &coords)
    } else {
        let coords: Vec<Coordinate> = coords.into_iter().map(Coordinate::from).collect();
        CoordSeq::from_coords(context, &coords)
    }
}

fn from_wkt_point<'c>(context: &'c Context, pt: types::Point<f64>) -> Result<Geometry<'c>> {
    let seq = match pt.0 {
        None => CoordSeq::new(context, 0, CoordDimensions::TwoD)?,
        Some(coord) => coords_to_seq(context, vec![coord])?,
    };
    Geometry::create_point(seq)
}

fn from_wkt_linestring<'c>(
    context: &'c Context,
    ls: types::LineString<f64>,
) -> Result<Geometry<'c>> {
    Geometry::create_line_string(coords_to_seq(context, ls.0)?)
}

fn from_wkt_ring<'c>(context: &'c Context, ls: types::LineString<f64>) -> Result<Geometry<'c>> {
    Geometry::create_linear_ring(coords_to_seq(context, ls.0)?)
}

/// A polygon without rings becomes the empty polygon.
fn from_wkt_polygon<'c>(context: &'c Context, poly: types::Polygon<f64>) -> Result<Geometry<'c>> {
    let mut linestrings = poly.0.into_iter();
    let shell = match linestrings.next() {
        Some(shell) => from_wkt_ring(context, shell)?,
        None => {
            let empty = CoordSeq::new(context, 0, CoordDimensions::TwoD)?;
            Geometry::create_linear_ring(empty)?
        }
    };
    let holes = linestrings
        .map(|hole| from_wkt_ring(context, hole))
        .collect::<Result<Vec<_>>>()?;
    Geometry::create_polygon(shell, holes)
}
