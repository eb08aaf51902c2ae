use crate::coord_seq::{CoordSeq, CoordSeqRead};
use crate::errors::{GeometryError, Result};
use crate::geometry::same_context;
use crate::utils::metric_result;
use crate::{Coordinate, CoordinateType, CoordinateZ, Geom};
use geos_sys::{
    GEOSArea_r, GEOSDistance_r, GEOSHausdorffDistanceDensify_r, GEOSHausdorffDistance_r,
    GEOSLength_r, GEOSNearestPoints_r,
};

/// Bring a densify fraction into (0, 1]: values above 1 become 1, values
/// at or below 0 become the smallest positive double.
pub(crate) fn clamp_densify_fraction(fraction: f64) -> f64 {
    if fraction > 1. {
        1.
    } else if fraction <= 0. {
        f64::from_bits(1)
    } else {
        fraction
    }
}

pub trait Metrics<'c>: Geom<'c> {
    fn area(&self) -> Result<f64> {
        let mut value = 0.;
        let status = unsafe { GEOSArea_r(self.context().as_raw(), self.as_raw(), &mut value) };
        metric_result(self.context(), status, value, "area")
    }

    fn length(&self) -> Result<f64> {
        let mut value = 0.;
        let status = unsafe { GEOSLength_r(self.context().as_raw(), self.as_raw(), &mut value) };
        metric_result(self.context(), status, value, "length")
    }

    fn distance<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<f64> {
        let context = same_context(self, other)?;
        let mut value = 0.;
        let status = unsafe {
            GEOSDistance_r(context.as_raw(), self.as_raw(), other.as_raw(), &mut value)
        };
        metric_result(context, status, value, "distance")
    }

    fn hausdorff_distance<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<f64> {
        let context = same_context(self, other)?;
        let mut value = 0.;
        let status = unsafe {
            GEOSHausdorffDistance_r(context.as_raw(), self.as_raw(), other.as_raw(), &mut value)
        };
        metric_result(context, status, value, "hausdorff_distance")
    }

    /// Hausdorff distance with each segment densified into pieces of
    /// `fraction` of its length. `fraction` is clamped into (0, 1].
    fn hausdorff_distance_densify<G: Geom<'c> + ?Sized>(
        &self,
        other: &G,
        fraction: f64,
    ) -> Result<f64> {
        let context = same_context(self, other)?;
        let mut value = 0.;
        let status = unsafe {
            GEOSHausdorffDistanceDensify_r(
                context.as_raw(),
                self.as_raw(),
                other.as_raw(),
                clamp_densify_fraction(fraction),
                &mut value,
            )
        };
        metric_result(context, status, value, "hausdorff_distance_densify")
    }

    /// The closest point on `self` followed by the closest point on `other`.
    fn nearest_points<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<[Coordinate; 2]> {
        nearest_pair(self, other)
    }

    fn nearest_point_zs<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<[CoordinateZ; 2]> {
        nearest_pair(self, other)
    }
}

impl<'c, T: Geom<'c> + ?Sized> Metrics<'c> for T {}

fn nearest_pair<'c, C, A, B>(first: &A, second: &B) -> Result<[C; 2]>
where
    C: CoordinateType,
    A: Geom<'c> + ?Sized,
    B: Geom<'c> + ?Sized,
{
    let context = same_context(first, second)?;
    let raw = unsafe { GEOSNearestPoints_r(context.as_raw(), first.as_raw(), second.as_raw()) };
    let seq = unsafe { CoordSeq::from_raw(context, raw, "nearest_points")? };
    let coords: Vec<C> = seq.coords();
    match coords.as_slice() {
        [on_first, on_second] => Ok([*on_first, *on_second]),
        _ => Err(GeometryError::Engine {
            operation: "nearest_points",
            message: format!("expected 2 points, got {}", coords.len()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Context, Geometry};
    use approx::assert_relative_eq;

    fn wkt<'c>(context: &'c Context, text: &str) -> Geometry<'c> {
        Geometry::from_wkt(context, text).unwrap()
    }

    #[test]
    fn check_area_and_length() {
        let context = Context::new().unwrap();
        let polygon = wkt(
            &context,
            "POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0), (2 2, 2 4, 4 4, 4 2, 2 2))",
        );
        assert_eq!(polygon.area(), Ok(96.));
        assert_eq!(polygon.length(), Ok(48.));
        let line = wkt(&context, "LINESTRING (0 0, 3 4)");
        assert_eq!(line.area(), Ok(0.));
        assert_eq!(line.length(), Ok(5.));
    }

    #[test]
    fn check_distance() {
        let context = Context::new().unwrap();
        let origin = Geometry::point(&context, 0., 0.).unwrap();
        let far = Geometry::point(&context, 3., 4.).unwrap();
        assert_eq!(origin.distance(&far), Ok(5.));
        assert_eq!(far.distance(&origin), Ok(5.));
    }

    #[test]
    fn check_distance_across_contexts() {
        let context = Context::new().unwrap();
        let other = Context::new().unwrap();
        let first = Geometry::point(&context, 0., 0.).unwrap();
        let second = Geometry::point(&other, 3., 4.).unwrap();
        assert_eq!(first.distance(&second), Err(GeometryError::ContextMismatch));
    }

    #[test]
    fn check_hausdorff() {
        let context = Context::new().unwrap();
        let first = wkt(&context, "LINESTRING (0 0, 100 0, 10 100, 10 100)");
        let second = wkt(&context, "LINESTRING (0 100, 0 10, 80 10)");
        let plain = first.hausdorff_distance(&second).unwrap();
        assert_relative_eq!(plain, 22.360679774997898, epsilon = 1e-9);
        let densified = first.hausdorff_distance_densify(&second, 0.001).unwrap();
        assert!(densified >= plain);
    }

    #[test]
    fn check_densify_fraction_clamping() {
        assert_eq!(clamp_densify_fraction(1.5), 1.);
        assert_eq!(clamp_densify_fraction(1.), 1.);
        assert_eq!(clamp_densify_fraction(0.25), 0.25);
        assert_eq!(clamp_densify_fraction(0.), f64::from_bits(1));
        assert_eq!(clamp_densify_fraction(-1.), f64::from_bits(1));
        assert!(clamp_densify_fraction(0.) > 0.);

        let context = Context::new().unwrap();
        let first = wkt(&context, "LINESTRING (0 0, 100 0, 10 100, 10 100)");
        let second = wkt(&context, "LINESTRING (0 100, 0 10, 80 10)");
        assert_eq!(
            first.hausdorff_distance_densify(&second, 1.5),
            first.hausdorff_distance_densify(&second, 1.)
        );
    }

    #[test]
    fn check_nearest_points() {
        let context = Context::new().unwrap();
        let point = Geometry::point(&context, 0., 0.).unwrap();
        let line = wkt(&context, "LINESTRING (-5 3, 5 3)");
        assert_eq!(
            point.nearest_points(&line),
            Ok([Coordinate::new(0., 0.), Coordinate::new(0., 3.)])
        );
        assert_eq!(
            line.nearest_points(&point),
            Ok([Coordinate::new(0., 3.), Coordinate::new(0., 0.)])
        );
    }

    #[test]
    fn check_nearest_point_zs() {
        let context = Context::new().unwrap();
        let first = Geometry::point_z(&context, 0., 0., 1.).unwrap();
        let second = Geometry::point_z(&context, 3., 4., 2.).unwrap();
        let [on_first, on_second] = first.nearest_point_zs(&second).unwrap();
        assert_eq!((on_first.x, on_first.y), (0., 0.));
        assert_eq!((on_second.x, on_second.y), (3., 4.));
    }

    #[test]
    fn check_nearest_points_of_empty() {
        let context = Context::new().unwrap();
        let point = Geometry::point(&context, 0., 0.).unwrap();
        let empty = wkt(&context, "POINT EMPTY");
        assert!(point.nearest_points(&empty).is_err());
    }

    #[test]
    fn check_views_measure_like_owners() {
        let context = Context::new().unwrap();
        let multi = wkt(&context, "MULTIPOINT ((0 0), (3 4))");
        let first = multi.geometry_n(0).unwrap();
        let second = multi.geometry_n(1).unwrap();
        assert_eq!(first.distance(&second), Ok(5.));
    }
}
