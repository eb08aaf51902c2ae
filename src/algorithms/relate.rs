use crate::errors::{GeometryError, Result};
use crate::geometry::same_context;
use crate::utils::{predicate_result, take_string};
use crate::Geom;
use geos_sys::{GEOSRelatePattern_r, GEOSRelate_r};
use std::ffi::CString;
use std::fmt;

const MATRIX_LEN: usize = 9;

/// Check a DE-9IM pattern and bring it to upper case.
///
/// A pattern is nine symbols from `T`, `F`, `*`, `0`, `1` and `2`.
fn normalize_pattern(pattern: &str) -> Result<String> {
    let upper = pattern.to_ascii_uppercase();
    let well_formed = upper.len() == MATRIX_LEN
        && upper
            .bytes()
            .all(|b| matches!(b, b'T' | b'F' | b'*' | b'0' | b'1' | b'2'));
    if well_formed {
        Ok(upper)
    } else {
        Err(GeometryError::InvalidPattern(pattern.to_owned()))
    }
}

fn symbol_matches(actual: u8, wanted: u8) -> bool {
    match wanted {
        b'*' => true,
        b'T' => matches!(actual, b'0' | b'1' | b'2'),
        _ => actual == wanted,
    }
}

/// A DE-9IM intersection matrix, row by row: interior, boundary, exterior
/// of the first geometry against the same of the second.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntersectionMatrix {
    cells: String,
}

impl IntersectionMatrix {
    fn new(cells: String) -> Result<IntersectionMatrix> {
        let well_formed = cells.len() == MATRIX_LEN
            && cells
                .bytes()
                .all(|b| matches!(b, b'F' | b'0' | b'1' | b'2'));
        if well_formed {
            Ok(IntersectionMatrix { cells })
        } else {
            Err(GeometryError::Engine {
                operation: "relate",
                message: format!("malformed intersection matrix {:?}", cells),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.cells
    }

    /// Whether this matrix satisfies `pattern`. Agrees with
    /// [`Relate::relate_pattern`] on the same pair of geometries.
    pub fn matches(&self, pattern: &str) -> Result<bool> {
        let pattern = normalize_pattern(pattern)?;
        Ok(self
            .cells
            .bytes()
            .zip(pattern.bytes())
            .all(|(actual, wanted)| symbol_matches(actual, wanted)))
    }
}

impl fmt::Display for IntersectionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cells)
    }
}

pub trait Relate<'c>: Geom<'c> {
    fn relate<G: Geom<'c> + ?Sized>(&self, other: &G) -> Result<IntersectionMatrix> {
        let context = same_context(self, other)?;
        let cells = unsafe {
            let raw = GEOSRelate_r(context.as_raw(), self.as_raw(), other.as_raw());
            take_string(context, raw, "relate")?
        };
        IntersectionMatrix::new(cells)
    }

    /// Evaluate a DE-9IM pattern such as `"T*F**F***"` against the pair.
    fn relate_pattern<G: Geom<'c> + ?Sized>(&self, other: &G, pattern: &str) -> Result<bool> {
        let context = same_context(self, other)?;
        let pattern = normalize_pattern(pattern)?;
        let pattern =
            CString::new(pattern).map_err(|e| GeometryError::InvalidPattern(e.to_string()))?;
        let result = unsafe {
            GEOSRelatePattern_r(
                context.as_raw(),
                self.as_raw(),
                other.as_raw(),
                pattern.as_ptr(),
            )
        };
        predicate_result(context, result, "relate_pattern")
    }
}

impl<'c, T: Geom<'c> + ?Sized> Relate<'c> for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Context, Geometry};

    fn square(context: &Context) -> Geometry<'_> {
        Geometry::from_wkt(context, "POLYGON ((0 0, 0 10, 10 10, 10 0, 0 0))").unwrap()
    }

    #[test]
    fn check_pattern_validation() {
        assert_eq!(normalize_pattern("t*f**f***"), Ok("T*F**F***".to_owned()));
        assert_eq!(normalize_pattern("012TF*012"), Ok("012TF*012".to_owned()));
        for bad in &["", "T*F**F**", "T*F**F****", "T*F**F**X", "T*F**F**\u{e9}"] {
            assert_eq!(
                normalize_pattern(bad),
                Err(GeometryError::InvalidPattern(bad.to_string()))
            );
        }
    }

    #[test]
    fn check_relate_polygon_and_point() {
        let context = Context::new().unwrap();
        let polygon = square(&context);
        let point = Geometry::point(&context, 5., 5.).unwrap();
        let matrix = polygon.relate(&point).unwrap();
        assert_eq!(matrix.as_str(), "0F2FF1FF2");
        assert_eq!(matrix.to_string(), "0F2FF1FF2");
        assert_eq!(point.relate(&polygon).unwrap().as_str(), "0FFFFF212");
    }

    #[test]
    fn check_relate_pattern() {
        let context = Context::new().unwrap();
        let polygon = square(&context);
        let point = Geometry::point(&context, 5., 5.).unwrap();
        assert_eq!(polygon.relate_pattern(&point, "T*****FF*"), Ok(true));
        assert_eq!(polygon.relate_pattern(&point, "t*****ff*"), Ok(true));
        assert_eq!(polygon.relate_pattern(&point, "T*F**F***"), Ok(false));
        assert!(matches!(
            polygon.relate_pattern(&point, "nonsense"),
            Err(GeometryError::InvalidPattern(_))
        ));
    }

    #[test]
    fn check_matrix_agrees_with_engine() {
        let context = Context::new().unwrap();
        let polygon = square(&context);
        let others = [
            "POINT (5 5)",
            "POINT (0 5)",
            "POINT (50 5)",
            "LINESTRING (-5 5, 15 5)",
            "POLYGON ((5 5, 5 15, 15 15, 15 5, 5 5))",
        ];
        let patterns = [
            "T*****FF*",
            "T*F**F***",
            "FF*FF****",
            "F***T****",
            "T*T***T**",
            "0********",
            "1*T***T**",
            "212101212",
        ];
        for text in &others {
            let other = Geometry::from_wkt(&context, text).unwrap();
            let matrix = polygon.relate(&other).unwrap();
            for pattern in &patterns {
                assert_eq!(
                    matrix.matches(pattern),
                    polygon.relate_pattern(&other, pattern),
                    "{} against {}",
                    pattern,
                    text
                );
            }
        }
    }

    #[test]
    fn check_relate_across_contexts() {
        let context = Context::new().unwrap();
        let other = Context::new().unwrap();
        let first = square(&context);
        let second = square(&other);
        assert_eq!(first.relate(&second), Err(GeometryError::ContextMismatch));
    }
}
