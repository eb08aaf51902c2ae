use crate::coord_seq::CoordSeq;
use crate::errors::Result;
use crate::{Context, CoordinateType, Geometry};
use geos_sys::GEOSGeom_createLinearRing_r;

impl<'c> Geometry<'c> {
    /// A ring from a coordinate sequence.
    ///
    /// Closure and the four coordinate minimum are not checked here; an
    /// open or short ring is reported by `is_ring`/`is_valid`, or rejected
    /// by the engine with a construction error.
    pub fn create_linear_ring(seq: CoordSeq<'c>) -> Result<Geometry<'c>> {
        let context = seq.context();
        let raw = unsafe { GEOSGeom_createLinearRing_r(context.as_raw(), seq.into_raw()) };
        unsafe { Geometry::from_raw(context, raw, "linear_ring") }
    }

    pub fn linear_ring<C: CoordinateType>(
        context: &'c Context,
        coords: &[C],
    ) -> Result<Geometry<'c>> {
        Geometry::create_linear_ring(CoordSeq::from_coords(context, coords)?)
    }
}
