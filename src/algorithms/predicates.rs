use crate::errors::Result;
use crate::geometry::same_context;
use crate::utils::predicate_result;
use crate::Geom;
use geos_sys::{
    GEOSContains_r, GEOSContextHandle_t, GEOSCoveredBy_r, GEOSCovers_r, GEOSCrosses_r,
    GEOSDisjoint_r, GEOSEqualsExact_r, GEOSEquals_r, GEOSGeometry, GEOSIntersects_r,
    GEOSOverlaps_r, GEOSTouches_r, GEOSWithin_r,
};
use std::os::raw::c_char;

/// Run a binary predicate on two geometries from the same context.
fn binary_predicate<'c, A, B, F>(
    first: &A,
    second: &B,
    operation: &'static str,
    predicate: F,
) -> Result<bool>
where
    A: Geom<'c> + ?Sized,
    B: Geom<'c> + ?Sized,
    F: FnOnce(GEOSContextHandle_t, *mut GEOSGeometry, *mut GEOSGeometry) -> c_char,
{
    let context = same_context(first, second)?;
    let result = predicate(context.as_raw(), first.as_raw(), second.as_raw());
    predicate_result(context, result, operation)
}

/// Topological predicates. An engine exception is an error, never `false`.
pub trait Predicates<'c>: Geom<'c> {
    fn disjoint<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<bool> {
        binary_predicate(self, other, "disjoint", |h, a, b| unsafe {
            GEOSDisjoint_r(h, a, b)
        })
    }

    fn touches<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<bool> {
        binary_predicate(self, other, "touches", |h, a, b| unsafe {
            GEOSTouches_r(h, a, b)
        })
    }

    fn intersects<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<bool> {
        binary_predicate(self, other, "intersects", |h, a, b| unsafe {
            GEOSIntersects_r(h, a, b)
        })
    }

    fn crosses<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<bool> {
        binary_predicate(self, other, "crosses", |h, a, b| unsafe {
            GEOSCrosses_r(h, a, b)
        })
    }

    fn within<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<bool> {
        binary_predicate(self, other, "within", |h, a, b| unsafe {
            GEOSWithin_r(h, a, b)
        })
    }

    fn contains<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<bool> {
        binary_predicate(self, other, "contains", |h, a, b| unsafe {
            GEOSContains_r(h, a, b)
        })
    }

    fn overlaps<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<bool> {
        binary_predicate(self, other, "overlaps", |h, a, b| unsafe {
            GEOSOverlaps_r(h, a, b)
        })
    }

    /// Topological equality: same point set, regardless of vertex order.
    fn equals<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<bool> {
        binary_predicate(self, other, "equals", |h, a, b| unsafe {
            GEOSEquals_r(h, a, b)
        })
    }

    /// Structural equality: same type and vertices, each pair of vertices
    /// within `tolerance`.
    fn equals_exact<G: Geom<'c> + ?Sized>(&self, other: &G, tolerance: f64) -> Result<bool> {
        binary_predicate(self, other, "equals_exact", |h, a, b| unsafe {
            GEOSEqualsExact_r(h, a, b, tolerance)
        })
    }

    fn covers<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<bool> {
        binary_predicate(self, other, "covers", |h, a, b| unsafe {
            GEOSCovers_r(h, a, b)
        })
    }

    fn covered_by<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<bool> {
        binary_predicate(self, other, "covered_by", |h, a, b| unsafe {
            GEOSCoveredBy_r(h, a, b)
        })
    }
}

impl<'c, T: Geom<'c> + ?Sized> Predicates<'c> for T {}
