use crate::coord_seq::CoordDimensions;
use crate::errors::{GeometryError, Result};
use crate::utils::take_string;
use crate::{Context, Geom, Geometry};
use geos_sys::{
    GEOSWKTReader, GEOSWKTReader_create_r, GEOSWKTReader_destroy_r, GEOSWKTReader_read_r,
    GEOSWKTWriter, GEOSWKTWriter_create_r, GEOSWKTWriter_destroy_r,
    GEOSWKTWriter_setOutputDimension_r, GEOSWKTWriter_setRoundingPrecision_r,
    GEOSWKTWriter_setTrim_r, GEOSWKTWriter_write_r,
};
use std::convert::TryFrom;
use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::ptr::NonNull;

pub struct WktReader<'c> {
    ptr: NonNull<GEOSWKTReader>,
    context: &'c Context,
}

impl<'c> WktReader<'c> {
    pub fn new(context: &'c Context) -> Result<Self> {
        let raw = unsafe { GEOSWKTReader_create_r(context.as_raw()) };
        match NonNull::new(raw) {
            Some(ptr) => Ok(WktReader { ptr, context }),
            None => Err(context.construction_error("wkt reader")),
        }
    }

    pub fn read(&self, text: &str) -> Result<Geometry<'c>> {
        let text = CString::new(text).map_err(|_| {
            GeometryError::InvalidArgument("WKT text contains a NUL byte".to_owned())
        })?;
        let raw = unsafe {
            GEOSWKTReader_read_r(self.context.as_raw(), self.ptr.as_ptr(), text.as_ptr())
        };
        if raw.is_null() {
            return Err(self.context.parse_error());
        }
        unsafe { Geometry::from_raw(self.context, raw, "wkt read") }
    }
}

impl Drop for WktReader<'_> {
    fn drop(&mut self) {
        unsafe { GEOSWKTReader_destroy_r(self.context.as_raw(), self.ptr.as_ptr()) };
    }
}

/// Options for [`WktWriter`].
///
/// With `rounding_precision: None` the engine picks the precision. GEOS
/// 3.12 and later write the shortest text that reads back to the same
/// double, so WKT round trips are exact. Older engines write at most 16
/// digits after the decimal point: values such as `0.1 + 0.2` read back
/// one ulp off and magnitudes below `1e-16` read back as 0. Use WKB when
/// an exact round trip is needed on those engines.
#[derive(Clone, Debug, PartialEq)]
pub struct WktWriterOptions {
    /// Drop trailing zeros from ordinates.
    pub trim: bool,
    /// Digits after the decimal point; engine default when `None`.
    pub rounding_precision: Option<u32>,
    pub output_dimension: CoordDimensions,
}

impl Default for WktWriterOptions {
    fn default() -> Self {
        WktWriterOptions {
            trim: true,
            rounding_precision: None,
            output_dimension: CoordDimensions::ThreeD,
        }
    }
}

pub struct WktWriter<'c> {
    ptr: NonNull<GEOSWKTWriter>,
    context: &'c Context,
}

impl<'c> WktWriter<'c> {
    pub fn new(context: &'c Context, options: &WktWriterOptions) -> Result<Self> {
        let raw = unsafe { GEOSWKTWriter_create_r(context.as_raw()) };
        let writer = match NonNull::new(raw) {
            Some(ptr) => WktWriter { ptr, context },
            None => return Err(context.construction_error("wkt writer")),
        };
        let precision = options
            .rounding_precision
            .map(|precision| {
                c_int::try_from(precision).map_err(|_| {
                    GeometryError::InvalidArgument(format!(
                        "rounding precision {} is too large",
                        precision
                    ))
                })
            })
            .transpose()?;
        let handle = context.as_raw();
        unsafe {
            GEOSWKTWriter_setTrim_r(handle, writer.ptr.as_ptr(), options.trim as c_char);
            GEOSWKTWriter_setOutputDimension_r(
                handle,
                writer.ptr.as_ptr(),
                options.output_dimension.count() as c_int,
            );
            if let Some(precision) = precision {
                GEOSWKTWriter_setRoundingPrecision_r(handle, writer.ptr.as_ptr(), precision);
            }
        }
        Ok(writer)
    }

    pub fn write<G: Geom<'c> + ?Sized>(&self, geom: &G) -> Result<String> {
        self.context.check_same(geom.context())?;
        unsafe {
            let raw =
                GEOSWKTWriter_write_r(self.context.as_raw(), self.ptr.as_ptr(), geom.as_raw());
            take_string(self.context, raw, "wkt write")
        }
    }
}

impl Drop for WktWriter<'_> {
    fn drop(&mut self) {
        unsafe { GEOSWKTWriter_destroy_r(self.context.as_raw(), self.ptr.as_ptr()) };
    }
}

impl<'c> Geometry<'c> {
    pub fn from_wkt(context: &'c Context, text: &str) -> Result<Geometry<'c>> {
        WktReader::new(context)?.read(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, GeometryType, Predicates};

    fn assert_round_trip(wkt: &str) {
        let context = Context::new().unwrap();
        let geom = Geometry::from_wkt(&context, wkt).unwrap();
        let text = geom.to_wkt().unwrap();
        let parsed = Geometry::from_wkt(&context, &text).unwrap();
        assert!(
            geom.equals_exact(&parsed, 0.).unwrap(),
            "{} did not round trip through {}",
            wkt,
            text
        );
    }

    #[test]
    fn check_point() {
        let context = Context::new().unwrap();
        let point = Geometry::from_wkt(&context, "POINT(1.0 1.0)").unwrap();
        assert_eq!(point.geometry_type(), Ok(GeometryType::Point));
        assert_eq!(point.x_y(), Ok((1., 1.)));
        assert_eq!(point.to_wkt().unwrap(), "POINT (1 1)");
    }

    #[test]
    fn check_linestring() {
        let context = Context::new().unwrap();
        let line = Geometry::from_wkt(&context, "LINESTRING(1 1,2 3,4 8, -6 3)").unwrap();
        assert_eq!(
            line.coords().unwrap(),
            vec![
                Coordinate::new(1., 1.),
                Coordinate::new(2., 3.),
                Coordinate::new(4., 8.),
                Coordinate::new(-6., 3.)
            ]
        );
    }

    #[test]
    fn check_bad_str() {
        let context = Context::new().unwrap();
        assert!(matches!(
            Geometry::from_wkt(&context, "xyz"),
            Err(GeometryError::Parse(_))
        ));
        assert!(matches!(
            Geometry::from_wkt(&context, "POINT (1"),
            Err(GeometryError::Parse(_))
        ));
        assert!(matches!(
            Geometry::from_wkt(&context, "POINT (1 2)\0"),
            Err(GeometryError::InvalidArgument(_))
        ));
    }

    #[test]
    fn check_round_trips() {
        assert_round_trip("POINT (3 4)");
        assert_round_trip("POINT Z (3 4 5)");
        assert_round_trip("LINESTRING (1 1, 2 3, 4 8, -6 3)");
        assert_round_trip("POLYGON ((-5 -5, -5 5, 5 5, 5 -5, -5 -5), (0 0, 3 0, 3 3, 0 3, 0 0))");
        assert_round_trip("MULTIPOINT ((2 3), (7 8))");
        assert_round_trip("MULTILINESTRING ((1 1, 5 5), (1 3, 3 1))");
        assert_round_trip(
            "MULTIPOLYGON (((1 1, 1 -1, -1 -1, -1 1, 1 1)), ((1 1, 3 1, 3 3, 1 3, 1 1)))",
        );
        assert_round_trip("GEOMETRYCOLLECTION (POINT (1 2), LINESTRING (0 0, 1 1))");
    }

    /// Major and minor version of the linked engine, from e.g.
    /// "3.12.1-CAPI-1.18.1".
    fn engine_version() -> (u32, u32) {
        let version = Context::engine_version();
        let mut parts = version
            .split(|c: char| !c.is_ascii_digit())
            .map(|part| part.parse::<u32>().unwrap());
        (parts.next().unwrap(), parts.next().unwrap())
    }

    #[test]
    fn check_values_without_short_decimal_form() {
        let context = Context::new().unwrap();
        let coords = vec![
            Coordinate::new(0.1 + 0.2, 1. / 3.),
            Coordinate::new(1e-20, -2. / 3.),
        ];
        let line = Geometry::line_string(&context, &coords).unwrap();
        let text = line.to_wkt().unwrap();
        let parsed = Geometry::from_wkt(&context, &text).unwrap();
        if engine_version() >= (3, 12) {
            assert!(line.equals_exact(&parsed, 0.).unwrap(), "{}", text);
            assert_eq!(parsed.coords().unwrap(), coords);
        } else {
            assert!(line.equals_exact(&parsed, 1e-15).unwrap(), "{}", text);
        }
    }

    #[test]
    fn check_rounding_precision_overflow() {
        let context = Context::new().unwrap();
        let options = WktWriterOptions {
            rounding_precision: Some(u32::MAX),
            ..WktWriterOptions::default()
        };
        assert!(matches!(
            WktWriter::new(&context, &options),
            Err(GeometryError::InvalidArgument(_))
        ));
        let options = WktWriterOptions {
            rounding_precision: Some(i32::MAX as u32),
            ..WktWriterOptions::default()
        };
        assert!(WktWriter::new(&context, &options).is_ok());
    }

    #[test]
    fn check_rounding_precision() {
        let context = Context::new().unwrap();
        let point = Geometry::point(&context, 1.23456, 2.).unwrap();
        let options = WktWriterOptions {
            rounding_precision: Some(2),
            ..WktWriterOptions::default()
        };
        let text = WktWriter::new(&context, &options)
            .unwrap()
            .write(&point)
            .unwrap();
        assert_eq!(text, "POINT (1.23 2)");
    }

    #[test]
    fn check_writer_rejects_foreign_geometry() {
        let first = Context::new().unwrap();
        let second = Context::new().unwrap();
        let point = Geometry::point(&second, 1., 2.).unwrap();
        let writer = WktWriter::new(&first, &WktWriterOptions::default()).unwrap();
        assert_eq!(writer.write(&point), Err(GeometryError::ContextMismatch));
    }
}
