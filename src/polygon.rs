use crate::errors::{GeometryError, Result};
use crate::geometry::require_type;
use crate::{Context, CoordinateType, Geometry, GeometryType};
use geos_sys::{GEOSGeom_createPolygon_r, GEOSGeometry};
use std::convert::TryFrom;
use std::os::raw::c_uint;

impl<'c> Geometry<'c> {
    /// A polygon that takes ownership of `shell` and every ring in `holes`.
    ///
    /// All rings must be linear rings from the same context; otherwise the
    /// call fails and the rings are released.
    pub fn create_polygon(shell: Geometry<'c>, holes: Vec<Geometry<'c>>) -> Result<Geometry<'c>> {
        let context = shell.context();
        require_type(&shell, "polygon shell", &[GeometryType::LinearRing])?;
        for hole in &holes {
            context.check_same(hole.context())?;
            require_type(hole, "polygon hole", &[GeometryType::LinearRing])?;
        }
        let num_holes = c_uint::try_from(holes.len()).map_err(|_| {
            GeometryError::InvalidArgument(format!("{} holes is too many", holes.len()))
        })?;
        let mut raw_holes: Vec<*mut GEOSGeometry> =
            holes.into_iter().map(Geometry::into_raw).collect();
        let raw = unsafe {
            GEOSGeom_createPolygon_r(
                context.as_raw(),
                shell.into_raw(),
                raw_holes.as_mut_ptr(),
                num_holes,
            )
        };
        unsafe { Geometry::from_raw(context, raw, "polygon") }
    }

    /// Build the shell ring, then each hole ring, then the polygon.
    pub fn polygon<C: CoordinateType>(
        context: &'c Context,
        shell: &[C],
        holes: &[&[C]],
    ) -> Result<Geometry<'c>> {
        let shell = Geometry::linear_ring(context, shell)?;
        let holes = holes
            .iter()
            .map(|hole| Geometry::linear_ring(context, hole))
            .collect::<Result<Vec<_>>>()?;
        Geometry::create_polygon(shell, holes)
    }
}
