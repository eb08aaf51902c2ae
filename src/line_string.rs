use crate::coord_seq::CoordSeq;
use crate::errors::Result;
use crate::{Context, CoordinateType, Geometry};
use geos_sys::GEOSGeom_createLineString_r;

impl<'c> Geometry<'c> {
    pub fn create_line_string(seq: CoordSeq<'c>) -> Result<Geometry<'c>> {
        let context = seq.context();
        let raw = unsafe { GEOSGeom_createLineString_r(context.as_raw(), seq.into_raw()) };
        unsafe { Geometry::from_raw(context, raw, "line_string") }
    }

    pub fn line_string<C: CoordinateType>(
        context: &'c Context,
        coords: &[C],
    ) -> Result<Geometry<'c>> {
        Geometry::create_line_string(CoordSeq::from_coords(context, coords)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoordDimensions, Coordinate, Geom, GeometryType, Metrics};

    fn make_coords(coords: Vec<(f64, f64)>) -> Vec<Coordinate> {
        coords.into_iter().map(|c| c.into()).collect()
    }

    #[test]
    fn check_line_string() {
        let context = Context::new().unwrap();
        let coords = make_coords(vec![(0., 0.), (3., 4.), (3., 0.)]);
        let line = Geometry::line_string(&context, &coords).unwrap();
        assert_eq!(line.geometry_type(), Ok(GeometryType::LineString));
        assert_eq!(line.coords().unwrap(), coords);
        assert_eq!(line.length(), Ok(9.));
        assert!(line.is_simple().unwrap());
    }

    #[test]
    fn check_line_string_from_sequence() {
        let context = Context::new().unwrap();
        let mut seq = CoordSeq::new(&context, 2, CoordDimensions::TwoD).unwrap();
        seq.set_x(1, 10.).unwrap();
        let line = Geometry::create_line_string(seq).unwrap();
        assert_eq!(line.length(), Ok(10.));
    }

    #[test]
    fn check_empty_line_string() {
        let context = Context::new().unwrap();
        let line = Geometry::line_string::<Coordinate>(&context, &[]).unwrap();
        assert!(line.is_empty().unwrap());
        assert_eq!(line.coords().unwrap(), Vec::new());
    }
}
