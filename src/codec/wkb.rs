use crate::coord_seq::CoordDimensions;
use crate::errors::Result;
use crate::utils::take_bytes;
use crate::{Context, Geom, Geometry};
use geos_sys::{
    GEOSWKBReader, GEOSWKBReader_create_r, GEOSWKBReader_destroy_r, GEOSWKBReader_read_r,
    GEOSWKBWriter, GEOSWKBWriter_create_r, GEOSWKBWriter_destroy_r,
    GEOSWKBWriter_setByteOrder_r, GEOSWKBWriter_setIncludeSRID_r,
    GEOSWKBWriter_setOutputDimension_r, GEOSWKBWriter_write_r,
};
use std::os::raw::{c_char, c_int};
use std::ptr::NonNull;

/// Byte order flag written at the start of every WKB geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ByteOrder {
    BigEndian = 0,
    LittleEndian = 1,
}

pub struct WkbReader<'c> {
    ptr: NonNull<GEOSWKBReader>,
    context: &'c Context,
}

impl<'c> WkbReader<'c> {
    pub fn new(context: &'c Context) -> Result<Self> {
        let raw = unsafe { GEOSWKBReader_create_r(context.as_raw()) };
        match NonNull::new(raw) {
            Some(ptr) => Ok(WkbReader { ptr, context }),
            None => Err(context.construction_error("wkb reader")),
        }
    }

    pub fn read(&self, bytes: &[u8]) -> Result<Geometry<'c>> {
        let raw = unsafe {
            GEOSWKBReader_read_r(
                self.context.as_raw(),
                self.ptr.as_ptr(),
                bytes.as_ptr(),
                bytes.len(),
            )
        };
        if raw.is_null() {
            return Err(self.context.parse_error());
        }
        unsafe { Geometry::from_raw(self.context, raw, "wkb read") }
    }
}

impl Drop for WkbReader<'_> {
    fn drop(&mut self) {
        unsafe { GEOSWKBReader_destroy_r(self.context.as_raw(), self.ptr.as_ptr()) };
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WkbWriterOptions {
    pub byte_order: ByteOrder,
    pub output_dimension: CoordDimensions,
    /// Write the extended (EWKB) form carrying the SRID.
    pub include_srid: bool,
}

impl Default for WkbWriterOptions {
    fn default() -> Self {
        WkbWriterOptions {
            byte_order: ByteOrder::LittleEndian,
            output_dimension: CoordDimensions::ThreeD,
            include_srid: false,
        }
    }
}

pub struct WkbWriter<'c> {
    ptr: NonNull<GEOSWKBWriter>,
    context: &'c Context,
}

impl<'c> WkbWriter<'c> {
    pub fn new(context: &'c Context, options: &WkbWriterOptions) -> Result<Self> {
        let raw = unsafe { GEOSWKBWriter_create_r(context.as_raw()) };
        let writer = match NonNull::new(raw) {
            Some(ptr) => WkbWriter { ptr, context },
            None => return Err(context.construction_error("wkb writer")),
        };
        let handle = context.as_raw();
        unsafe {
            GEOSWKBWriter_setByteOrder_r(handle, writer.ptr.as_ptr(), options.byte_order as c_int);
            GEOSWKBWriter_setOutputDimension_r(
                handle,
                writer.ptr.as_ptr(),
                options.output_dimension.count() as c_int,
            );
            GEOSWKBWriter_setIncludeSRID_r(
                handle,
                writer.ptr.as_ptr(),
                options.include_srid as c_char,
            );
        }
        Ok(writer)
    }

    pub fn write<G: Geom<'c> + ?Sized>(&self, geom: &G) -> Result<Vec<u8>> {
        self.context.check_same(geom.context())?;
        let mut size: usize = 0;
        unsafe {
            let raw = GEOSWKBWriter_write_r(
                self.context.as_raw(),
                self.ptr.as_ptr(),
                geom.as_raw(),
                &mut size,
            );
            take_bytes(self.context, raw, size, "wkb write")
        }
    }
}

impl Drop for WkbWriter<'_> {
    fn drop(&mut self) {
        unsafe { GEOSWKBWriter_destroy_r(self.context.as_raw(), self.ptr.as_ptr()) };
    }
}

impl<'c> Geometry<'c> {
    pub fn from_wkb(context: &'c Context, bytes: &[u8]) -> Result<Geometry<'c>> {
        WkbReader::new(context)?.read(bytes)
    }
}
