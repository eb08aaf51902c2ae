use crate::errors::Result;
use crate::geometry::require_type;
use crate::{Geom, Geometry, GeometryType};
use geos_sys::{GEOSBufferWithStyle_r, GEOSOffsetCurve_r};
use std::os::raw::c_int;

/// End cap of a buffered line; values are the engine's codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CapStyle {
    Round = 1,
    Flat = 2,
    Square = 3,
}

/// Corner join of a buffer or offset curve; values are the engine's codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JoinStyle {
    Round = 1,
    Mitre = 2,
    Bevel = 3,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BufferStyle {
    /// Segments used to approximate a quarter circle.
    pub quadrant_segments: i32,
    pub cap_style: CapStyle,
    pub join_style: JoinStyle,
    /// Only used by mitre joins.
    pub mitre_limit: f64,
}

impl Default for BufferStyle {
    fn default() -> Self {
        BufferStyle {
            quadrant_segments: 8,
            cap_style: CapStyle::Round,
            join_style: JoinStyle::Round,
            mitre_limit: 5.,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffsetCurveStyle {
    pub quadrant_segments: i32,
    pub join_style: JoinStyle,
    pub mitre_limit: f64,
}

impl Default for OffsetCurveStyle {
    fn default() -> Self {
        OffsetCurveStyle {
            quadrant_segments: 8,
            join_style: JoinStyle::Round,
            mitre_limit: 5.,
        }
    }
}

/// Constructive operations. Each returns a new geometry and leaves the
/// input untouched.
pub trait Buffer<'c>: Geom<'c> {
    /// Grow (positive `width`) or shrink (negative `width`) the geometry.
    fn buffer(&self, width: f64, style: &BufferStyle) -> Result<Geometry<'c>> {
        self.buffer_with(
            width,
            style.quadrant_segments,
            style.cap_style,
            style.join_style,
            style.mitre_limit,
        )
    }

    fn buffer_with(
        &self,
        width: f64,
        quadrant_segments: i32,
        cap_style: CapStyle,
        join_style: JoinStyle,
        mitre_limit: f64,
    ) -> Result<Geometry<'c>> {
        let context = self.context();
        let raw = unsafe {
            GEOSBufferWithStyle_r(
                context.as_raw(),
                self.as_raw(),
                width,
                quadrant_segments as c_int,
                cap_style as c_int,
                join_style as c_int,
                mitre_limit,
            )
        };
        unsafe { Geometry::from_raw(context, raw, "buffer") }
    }

    /// A curve at distance `width` from a line string: on its left for a
    /// positive width, on its right for a negative one.
    fn offset_curve(&self, width: f64, style: &OffsetCurveStyle) -> Result<Geometry<'c>> {
        require_type(self, "offset_curve", &[GeometryType::LineString])?;
        let context = self.context();
        let raw = unsafe {
            GEOSOffsetCurve_r(
                context.as_raw(),
                self.as_raw(),
                width,
                style.quadrant_segments as c_int,
                style.join_style as c_int,
                style.mitre_limit,
            )
        };
        unsafe { Geometry::from_raw(context, raw, "offset_curve") }
    }
}

impl<'c, T: Geom<'c> + ?Sized> Buffer<'c> for T {}
