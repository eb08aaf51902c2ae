use crate::errors::{GeometryError, Result};
use crate::{Context, Geom, Geometry, GeometryType};
use geos_sys::{GEOSGeom_createCollection_r, GEOSGeometry};
use std::convert::TryFrom;
use std::os::raw::c_uint;

/// Result of [`Geometry::multi_geometry`].
///
/// Geometries whose type does not fit the requested collection are not
/// consumed; they come back in `rejected`, in their original order.
#[derive(Debug)]
pub struct MultiGeometry<'c> {
    pub collection: Option<Geometry<'c>>,
    pub rejected: Vec<Geometry<'c>>,
}

impl<'c> MultiGeometry<'c> {
    /// The collection, or an error if nothing survived the filter.
    pub fn into_collection(self, kind: GeometryType) -> Result<Geometry<'c>> {
        self.collection.ok_or(GeometryError::EmptyCollection(kind))
    }
}

impl<'c> Geometry<'c> {
    /// Group `geometries` into a collection of type `kind`.
    ///
    /// MultiPoint keeps only points, MultiLineString only line strings and
    /// MultiPolygon only polygons; a GeometryCollection keeps everything.
    /// Geometries built with another context are rejected as well. If no
    /// geometry is kept, no collection is built.
    pub fn multi_geometry(
        context: &'c Context,
        geometries: Vec<Geometry<'c>>,
        kind: GeometryType,
    ) -> Result<MultiGeometry<'c>> {
        if !kind.is_collection() {
            return Err(GeometryError::UnsupportedGeometryType {
                operation: "multi_geometry",
                actual: kind,
            });
        }

        let mut kept = Vec::with_capacity(geometries.len());
        let mut rejected = Vec::new();
        for geom in geometries {
            let fits = context.check_same(geom.context()).is_ok()
                && geom
                    .geometry_type()
                    .map(|member| kind.accepts(member))
                    .unwrap_or(false);
            if fits {
                kept.push(geom);
            } else {
                rejected.push(geom);
            }
        }
        if !rejected.is_empty() {
            log::debug!(
                "{} of {} geometries do not fit in a {}",
                rejected.len(),
                kept.len() + rejected.len(),
                kind
            );
        }

        let collection = if kept.is_empty() {
            None
        } else {
            Some(Geometry::create_collection(context, kind, kept)?)
        };
        Ok(MultiGeometry {
            collection,
            rejected,
        })
    }

    /// Collection over `members` without filtering; may be empty.
    pub(crate) fn create_collection(
        context: &'c Context,
        kind: GeometryType,
        members: Vec<Geometry<'c>>,
    ) -> Result<Geometry<'c>> {
        let count = c_uint::try_from(members.len()).map_err(|_| {
            GeometryError::InvalidArgument(format!("{} members is too many", members.len()))
        })?;
        let mut raw_members: Vec<*mut GEOSGeometry> =
            members.into_iter().map(Geometry::into_raw).collect();
        let raw = unsafe {
            GEOSGeom_createCollection_r(
                context.as_raw(),
                kind.id(),
                raw_members.as_mut_ptr(),
                count,
            )
        };
        unsafe { Geometry::from_raw(context, raw, "collection") }
    }
}
