use crate::coord_seq::{CoordDimensions, CoordSeq};
use crate::errors::Result;
use crate::{Context, Geometry};
use geos_sys::GEOSGeom_createPoint_r;

impl<'c> Geometry<'c> {
    /// A point from a sequence of zero (empty point) or one coordinates.
    pub fn create_point(seq: CoordSeq<'c>) -> Result<Geometry<'c>> {
        let context = seq.context();
        let raw = unsafe { GEOSGeom_createPoint_r(context.as_raw(), seq.into_raw()) };
        unsafe { Geometry::from_raw(context, raw, "point") }
    }

    pub fn point(context: &'c Context, x: f64, y: f64) -> Result<Geometry<'c>> {
        let mut seq = CoordSeq::new(context, 1, CoordDimensions::TwoD)?;
        seq.set_x(0, x)?;
        seq.set_y(0, y)?;
        Geometry::create_point(seq)
    }

    pub fn point_z(context: &'c Context, x: f64, y: f64, z: f64) -> Result<Geometry<'c>> {
        let mut seq = CoordSeq::new(context, 1, CoordDimensions::ThreeD)?;
        seq.set_x(0, x)?;
        seq.set_y(0, y)?;
        seq.set_z(0, z)?;
        Geometry::create_point(seq)
    }
}
