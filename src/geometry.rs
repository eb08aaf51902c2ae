use crate::codec::{WkbWriter, WkbWriterOptions, WktWriter, WktWriterOptions};
use crate::coord_seq::{CoordSeqRead, CoordSeqRef};
use crate::errors::{GeometryError, Result};
use crate::utils::{count_result, predicate_result, take_string};
use crate::{Context, Coordinate, CoordinateZ, GeometryType};
use geos_sys::{
    GEOSGeomGetX_r, GEOSGeomGetY_r, GEOSGeomTypeId_r, GEOSGeom_clone_r, GEOSGeom_destroy_r,
    GEOSGeom_getCoordSeq_r, GEOSGeometry, GEOSGetExteriorRing_r, GEOSGetGeometryN_r,
    GEOSGetInteriorRingN_r, GEOSGetNumCoordinates_r, GEOSGetNumGeometries_r,
    GEOSGetNumInteriorRings_r, GEOSGetSRID_r, GEOSHasZ_r, GEOSNormalize_r, GEOSSetSRID_r,
    GEOSisClosed_r, GEOSisEmpty_r, GEOSisRing_r, GEOSisSimple_r, GEOSisValidReason_r,
    GEOSisValid_r,
};
use std::convert::TryFrom;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::os::raw::c_int;
use std::ptr::NonNull;

pub(crate) mod sealed {
    use super::*;

    pub trait AsRawGeom<'c> {
        fn context(&self) -> &'c Context;
        fn as_raw(&self) -> *mut GEOSGeometry;
    }
}

const LEAF_TYPES: &[GeometryType] = &[
    GeometryType::Point,
    GeometryType::LineString,
    GeometryType::LinearRing,
];

/// Fail fast when `geom` is not one of `allowed`, instead of handing the
/// engine an operation it leaves undefined for that type.
pub(crate) fn require_type<'c, G: Geom<'c> + ?Sized>(
    geom: &G,
    operation: &'static str,
    allowed: &[GeometryType],
) -> Result<GeometryType> {
    let actual = geom.geometry_type()?;
    if allowed.contains(&actual) {
        Ok(actual)
    } else {
        Err(GeometryError::UnsupportedGeometryType { operation, actual })
    }
}

/// Both geometries must have been built with the same context.
pub(crate) fn same_context<'c, A, B>(first: &A, second: &B) -> Result<&'c Context>
where
    A: Geom<'c> + ?Sized,
    B: Geom<'c> + ?Sized,
{
    let context = first.context();
    context.check_same(second.context())?;
    Ok(context)
}

/// Read-only operations shared by owned geometries and borrowed views.
pub trait Geom<'c>: sealed::AsRawGeom<'c> {
    fn geometry_type(&self) -> Result<GeometryType> {
        let id = unsafe { GEOSGeomTypeId_r(self.context().as_raw(), self.as_raw()) };
        if id < 0 {
            return Err(self.context().engine_error("geometry_type"));
        }
        GeometryType::try_from(id)
    }

    /// Spatial reference id; 0 when unspecified.
    fn srid(&self) -> i32 {
        unsafe { GEOSGetSRID_r(self.context().as_raw(), self.as_raw()) }
    }

    /// Deep copy, sharing nothing with `self`.
    fn try_clone(&self) -> Result<Geometry<'c>> {
        let raw = unsafe { GEOSGeom_clone_r(self.context().as_raw(), self.as_raw()) };
        unsafe { Geometry::from_raw(self.context(), raw, "clone") }
    }

    fn num_geometries(&self) -> Result<usize> {
        let count = unsafe { GEOSGetNumGeometries_r(self.context().as_raw(), self.as_raw()) };
        count_result(self.context(), count, "num_geometries")
    }

    fn geometry_n(&self, n: usize) -> Result<GeometryRef<'c, '_>> {
        let len = self.num_geometries()?;
        if n >= len {
            return Err(GeometryError::IndexOutOfRange { index: n, len });
        }
        let raw =
            unsafe { GEOSGetGeometryN_r(self.context().as_raw(), self.as_raw(), n as c_int) };
        unsafe { GeometryRef::from_borrowed(self.context(), raw, "geometry_n") }
    }

    fn exterior_ring(&self) -> Result<GeometryRef<'c, '_>> {
        require_type(self, "exterior_ring", &[GeometryType::Polygon])?;
        let raw = unsafe { GEOSGetExteriorRing_r(self.context().as_raw(), self.as_raw()) };
        unsafe { GeometryRef::from_borrowed(self.context(), raw, "exterior_ring") }
    }

    fn num_interior_rings(&self) -> Result<usize> {
        require_type(self, "num_interior_rings", &[GeometryType::Polygon])?;
        let count = unsafe { GEOSGetNumInteriorRings_r(self.context().as_raw(), self.as_raw()) };
        count_result(self.context(), count, "num_interior_rings")
    }

    fn interior_ring_n(&self, n: usize) -> Result<GeometryRef<'c, '_>> {
        let len = self.num_interior_rings()?;
        if n >= len {
            return Err(GeometryError::IndexOutOfRange { index: n, len });
        }
        let raw = unsafe {
            GEOSGetInteriorRingN_r(self.context().as_raw(), self.as_raw(), n as c_int)
        };
        unsafe { GeometryRef::from_borrowed(self.context(), raw, "interior_ring_n") }
    }

    fn num_coordinates(&self) -> Result<usize> {
        let count = unsafe { GEOSGetNumCoordinates_r(self.context().as_raw(), self.as_raw()) };
        count_result(self.context(), count, "num_coordinates")
    }

    fn x_y(&self) -> Result<(f64, f64)> {
        require_type(self, "x_y", &[GeometryType::Point])?;
        let handle = self.context().as_raw();
        let mut x = 0.0;
        let mut y = 0.0;
        if unsafe { GEOSGeomGetX_r(handle, self.as_raw(), &mut x) } == 0 {
            return Err(self.context().engine_error("x_y"));
        }
        if unsafe { GEOSGeomGetY_r(handle, self.as_raw(), &mut y) } == 0 {
            return Err(self.context().engine_error("x_y"));
        }
        Ok((x, y))
    }

    /// The coordinate sequence backing a point, line string or linear ring.
    fn coord_seq(&self) -> Result<CoordSeqRef<'c, '_>> {
        require_type(self, "coord_seq", LEAF_TYPES)?;
        let raw = unsafe { GEOSGeom_getCoordSeq_r(self.context().as_raw(), self.as_raw()) };
        unsafe { CoordSeqRef::from_borrowed(self.context(), raw) }
    }

    fn coords(&self) -> Result<Vec<Coordinate>> {
        Ok(self.coord_seq()?.to_coords())
    }

    fn coord_zs(&self) -> Result<Vec<CoordinateZ>> {
        Ok(self.coord_seq()?.to_coord_zs())
    }

    fn is_valid(&self) -> Result<bool> {
        let result = unsafe { GEOSisValid_r(self.context().as_raw(), self.as_raw()) };
        predicate_result(self.context(), result, "is_valid")
    }

    /// Why the geometry is invalid, or "Valid Geometry".
    fn valid_reason(&self) -> Result<String> {
        unsafe {
            let raw = GEOSisValidReason_r(self.context().as_raw(), self.as_raw());
            take_string(self.context(), raw, "valid_reason")
        }
    }

    fn is_empty(&self) -> Result<bool> {
        let result = unsafe { GEOSisEmpty_r(self.context().as_raw(), self.as_raw()) };
        predicate_result(self.context(), result, "is_empty")
    }

    fn is_simple(&self) -> Result<bool> {
        let result = unsafe { GEOSisSimple_r(self.context().as_raw(), self.as_raw()) };
        predicate_result(self.context(), result, "is_simple")
    }

    fn is_ring(&self) -> Result<bool> {
        let result = unsafe { GEOSisRing_r(self.context().as_raw(), self.as_raw()) };
        predicate_result(self.context(), result, "is_ring")
    }

    fn is_closed(&self) -> Result<bool> {
        let result = unsafe { GEOSisClosed_r(self.context().as_raw(), self.as_raw()) };
        predicate_result(self.context(), result, "is_closed")
    }

    fn has_z(&self) -> Result<bool> {
        let result = unsafe { GEOSHasZ_r(self.context().as_raw(), self.as_raw()) };
        predicate_result(self.context(), result, "has_z")
    }

    fn to_wkt(&self) -> Result<String> {
        WktWriter::new(self.context(), &WktWriterOptions::default())?.write(self)
    }

    fn to_wkb(&self) -> Result<Vec<u8>> {
        WkbWriter::new(self.context(), &WkbWriterOptions::default())?.write(self)
    }
}

/// A geometry owned by the caller, released exactly once on drop.
pub struct Geometry<'c> {
    ptr: NonNull<GEOSGeometry>,
    context: &'c Context,
}

impl<'c> Geometry<'c> {
    /// Take ownership of an engine-allocated geometry.
    pub(crate) unsafe fn from_raw(
        context: &'c Context,
        raw: *mut GEOSGeometry,
        operation: &'static str,
    ) -> Result<Self> {
        match NonNull::new(raw) {
            Some(ptr) => Ok(Geometry { ptr, context }),
            None => Err(context.construction_error(operation)),
        }
    }

    /// Hand ownership to the engine, typically to a parent geometry.
    pub(crate) fn into_raw(self) -> *mut GEOSGeometry {
        let raw = self.ptr.as_ptr();
        mem::forget(self);
        raw
    }

    pub(crate) fn context(&self) -> &'c Context {
        self.context
    }

    pub fn set_srid(&mut self, srid: i32) {
        unsafe { GEOSSetSRID_r(self.context.as_raw(), self.ptr.as_ptr(), srid) };
    }

    /// Rewrite into canonical ordering and orientation, in place.
    pub fn normalize(&mut self) -> Result<()> {
        let status = unsafe { GEOSNormalize_r(self.context.as_raw(), self.ptr.as_ptr()) };
        if status == -1 {
            Err(self.context.engine_error("normalize"))
        } else {
            Ok(())
        }
    }
}

impl<'c> sealed::AsRawGeom<'c> for Geometry<'c> {
    fn context(&self) -> &'c Context {
        self.context
    }

    fn as_raw(&self) -> *mut GEOSGeometry {
        self.ptr.as_ptr()
    }
}

impl<'c> Geom<'c> for Geometry<'c> {}

impl Drop for Geometry<'_> {
    fn drop(&mut self) {
        unsafe { GEOSGeom_destroy_r(self.context.as_raw(), self.ptr.as_ptr()) };
    }
}

/// A component of another geometry, valid only while its parent is.
pub struct GeometryRef<'c, 'a> {
    ptr: NonNull<GEOSGeometry>,
    context: &'c Context,
    _parent: PhantomData<&'a ()>,
}

impl<'c, 'a> GeometryRef<'c, 'a> {
    pub(crate) unsafe fn from_borrowed(
        context: &'c Context,
        raw: *const GEOSGeometry,
        operation: &'static str,
    ) -> Result<Self> {
        match NonNull::new(raw as *mut GEOSGeometry) {
            Some(ptr) => Ok(GeometryRef {
                ptr,
                context,
                _parent: PhantomData,
            }),
            None => Err(context.engine_error(operation)),
        }
    }
}

impl<'c> sealed::AsRawGeom<'c> for GeometryRef<'c, '_> {
    fn context(&self) -> &'c Context {
        self.context
    }

    fn as_raw(&self) -> *mut GEOSGeometry {
        self.ptr.as_ptr()
    }
}

impl<'c> Geom<'c> for GeometryRef<'c, '_> {}

fn debug_geometry<'c, G: Geom<'c>>(
    name: &str,
    geom: &G,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.debug_struct(name)
        .field("type", &geom.geometry_type().ok())
        .field("srid", &geom.srid())
        .field("wkt", &geom.to_wkt().ok())
        .finish()
}

impl fmt::Debug for Geometry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_geometry("Geometry", self, f)
    }
}

impl fmt::Debug for GeometryRef<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_geometry("GeometryRef", self, f)
    }
}
