use crate::coordinate::{Coordinate, CoordinateType, CoordinateZ};
use crate::errors::{GeometryError, Result};
use crate::Context;
use geos_sys::{
    GEOSCoordSeq_create_r, GEOSCoordSeq_destroy_r, GEOSCoordSeq_getDimensions_r,
    GEOSCoordSeq_getSize_r, GEOSCoordSeq_getX_r, GEOSCoordSeq_getY_r, GEOSCoordSeq_getZ_r,
    GEOSCoordSeq_setX_r, GEOSCoordSeq_setY_r, GEOSCoordSeq_setZ_r, GEOSCoordSequence,
};
use std::convert::TryFrom;
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::os::raw::{c_int, c_uint};
use std::ptr::NonNull;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CoordDimensions {
    TwoD,
    ThreeD,
}

impl CoordDimensions {
    pub fn count(self) -> u32 {
        match self {
            CoordDimensions::TwoD => 2,
            CoordDimensions::ThreeD => 3,
        }
    }
}

impl TryFrom<u32> for CoordDimensions {
    type Error = GeometryError;

    fn try_from(dimensions: u32) -> Result<Self> {
        match dimensions {
            2 => Ok(CoordDimensions::TwoD),
            3 => Ok(CoordDimensions::ThreeD),
            _ => Err(GeometryError::InvalidArgument(format!(
                "unsupported coordinate dimension {}",
                dimensions
            ))),
        }
    }
}

mod sealed {
    use super::*;

    pub trait AsRawSeq<'c> {
        fn context(&self) -> &'c Context;
        fn as_raw(&self) -> *mut GEOSCoordSequence;
    }
}

#[derive(Clone, Copy)]
enum Ordinate {
    X,
    Y,
    Z,
}

/// Read access shared by owned sequences and views into a geometry.
pub trait CoordSeqRead<'c>: sealed::AsRawSeq<'c> {
    fn len(&self) -> usize {
        let mut size: c_uint = 0;
        let status = unsafe {
            GEOSCoordSeq_getSize_r(self.context().as_raw(), self.as_raw(), &mut size)
        };
        if status == 0 {
            self.context().take_last_error();
            0
        } else {
            size as usize
        }
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn dimensions(&self) -> Result<CoordDimensions> {
        let mut dimensions: c_uint = 0;
        let status = unsafe {
            GEOSCoordSeq_getDimensions_r(self.context().as_raw(), self.as_raw(), &mut dimensions)
        };
        if status == 0 {
            return Err(self.context().engine_error("dimensions"));
        }
        CoordDimensions::try_from(dimensions as u32)
    }

    /// X ordinate at `index`, or 0.0 when the read fails.
    fn x(&self, index: usize) -> f64 {
        read_ordinate(self, index, Ordinate::X)
    }

    /// Y ordinate at `index`, or 0.0 when the read fails.
    fn y(&self, index: usize) -> f64 {
        read_ordinate(self, index, Ordinate::Y)
    }

    /// Z ordinate at `index`, or 0.0 when the read fails. Two dimensional
    /// sequences report NaN here.
    fn z(&self, index: usize) -> f64 {
        read_ordinate(self, index, Ordinate::Z)
    }

    fn coords<C: CoordinateType>(&self) -> Vec<C> {
        (0..self.len()).map(|index| C::read(self, index)).collect()
    }

    fn to_coords(&self) -> Vec<Coordinate> {
        self.coords()
    }

    fn to_coord_zs(&self) -> Vec<CoordinateZ> {
        self.coords()
    }
}

fn read_ordinate<'c, S>(seq: &S, index: usize, ordinate: Ordinate) -> f64
where
    S: CoordSeqRead<'c> + ?Sized,
{
    // The engine does not bounds check reads.
    if index >= seq.len() {
        return 0.0;
    }
    let handle = seq.context().as_raw();
    let raw = seq.as_raw();
    let idx = index as c_uint;
    let mut value = 0.0;
    let status: c_int = unsafe {
        match ordinate {
            Ordinate::X => GEOSCoordSeq_getX_r(handle, raw, idx, &mut value),
            Ordinate::Y => GEOSCoordSeq_getY_r(handle, raw, idx, &mut value),
            Ordinate::Z => GEOSCoordSeq_getZ_r(handle, raw, idx, &mut value),
        }
    };
    if status == 0 {
        seq.context().take_last_error();
        0.0
    } else {
        value
    }
}

/// A coordinate sequence owned by the caller.
///
/// Attaching it to a geometry consumes it; the geometry releases it.
pub struct CoordSeq<'c> {
    ptr: NonNull<GEOSCoordSequence>,
    context: &'c Context,
}

impl<'c> CoordSeq<'c> {
    /// A zero-filled sequence of `size` coordinates.
    pub fn new(context: &'c Context, size: usize, dimensions: CoordDimensions) -> Result<Self> {
        let size = c_uint::try_from(size).map_err(|_| {
            GeometryError::InvalidArgument(format!("sequence size {} is too large", size))
        })?;
        let raw =
            unsafe { GEOSCoordSeq_create_r(context.as_raw(), size, dimensions.count() as c_uint) };
        unsafe { CoordSeq::from_raw(context, raw, "coord_seq") }
    }

    pub fn from_coords<C: CoordinateType>(context: &'c Context, coords: &[C]) -> Result<Self> {
        let mut seq = CoordSeq::new(context, coords.len(), C::DIMENSIONS)?;
        for (index, coord) in coords.iter().enumerate() {
            coord.write(&mut seq, index)?;
        }
        Ok(seq)
    }

    pub fn set_x(&mut self, index: usize, value: f64) -> Result<()> {
        self.write_ordinate(index, Ordinate::X, value)
    }

    pub fn set_y(&mut self, index: usize, value: f64) -> Result<()> {
        self.write_ordinate(index, Ordinate::Y, value)
    }

    pub fn set_z(&mut self, index: usize, value: f64) -> Result<()> {
        self.write_ordinate(index, Ordinate::Z, value)
    }

    fn write_ordinate(&mut self, index: usize, ordinate: Ordinate, value: f64) -> Result<()> {
        let len = self.len();
        if index >= len {
            return Err(GeometryError::IndexOutOfRange { index, len });
        }
        if let Ordinate::Z = ordinate {
            let dimensions = self.dimensions()?;
            if dimensions != CoordDimensions::ThreeD {
                return Err(GeometryError::MissingDimension {
                    dimensions: dimensions.count(),
                    ordinate: 'z',
                });
            }
        }
        let handle = self.context.as_raw();
        let raw = self.ptr.as_ptr();
        let idx = index as c_uint;
        let status = unsafe {
            match ordinate {
                Ordinate::X => GEOSCoordSeq_setX_r(handle, raw, idx, value),
                Ordinate::Y => GEOSCoordSeq_setY_r(handle, raw, idx, value),
                Ordinate::Z => GEOSCoordSeq_setZ_r(handle, raw, idx, value),
            }
        };
        if status == 0 {
            Err(self.context.engine_error("set ordinate"))
        } else {
            Ok(())
        }
    }

    /// Take ownership of an engine-allocated sequence.
    pub(crate) unsafe fn from_raw(
        context: &'c Context,
        raw: *mut GEOSCoordSequence,
        operation: &'static str,
    ) -> Result<Self> {
        match NonNull::new(raw) {
            Some(ptr) => Ok(CoordSeq { ptr, context }),
            None => Err(context.construction_error(operation)),
        }
    }

    /// Give up ownership; the caller becomes responsible for the sequence.
    pub(crate) fn into_raw(self) -> *mut GEOSCoordSequence {
        let raw = self.ptr.as_ptr();
        mem::forget(self);
        raw
    }

    pub(crate) fn context(&self) -> &'c Context {
        self.context
    }
}

impl<'c> sealed::AsRawSeq<'c> for CoordSeq<'c> {
    fn context(&self) -> &'c Context {
        self.context
    }

    fn as_raw(&self) -> *mut GEOSCoordSequence {
        self.ptr.as_ptr()
    }
}

impl<'c> CoordSeqRead<'c> for CoordSeq<'c> {}

impl Drop for CoordSeq<'_> {
    fn drop(&mut self) {
        unsafe { GEOSCoordSeq_destroy_r(self.context.as_raw(), self.ptr.as_ptr()) };
    }
}

impl fmt::Debug for CoordSeq<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_coord_zs()).finish()
    }
}

/// A read-only view of the sequence inside a geometry.
pub struct CoordSeqRef<'c, 'a> {
    ptr: NonNull<GEOSCoordSequence>,
    context: &'c Context,
    _owner: PhantomData<&'a ()>,
}

impl<'c, 'a> CoordSeqRef<'c, 'a> {
    pub(crate) unsafe fn from_borrowed(
        context: &'c Context,
        raw: *const GEOSCoordSequence,
    ) -> Result<Self> {
        match NonNull::new(raw as *mut GEOSCoordSequence) {
            Some(ptr) => Ok(CoordSeqRef {
                ptr,
                context,
                _owner: PhantomData,
            }),
            None => Err(context.engine_error("coord_seq")),
        }
    }
}

impl<'c> sealed::AsRawSeq<'c> for CoordSeqRef<'c, '_> {
    fn context(&self) -> &'c Context {
        self.context
    }

    fn as_raw(&self) -> *mut GEOSCoordSequence {
        self.ptr.as_ptr()
    }
}

impl<'c> CoordSeqRead<'c> for CoordSeqRef<'c, '_> {}

impl fmt::Debug for CoordSeqRef<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_coord_zs()).finish()
    }
}
