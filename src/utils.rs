use crate::errors::Result;
use crate::Context;
use geos_sys::GEOSFree_r;
use std::ffi::{c_void, CStr};
use std::os::raw::{c_char, c_int, c_uchar};
use std::slice;

/// Map the engine's tri-state answer onto a boolean or an error.
pub(crate) fn predicate_result(
    context: &Context,
    result: c_char,
    operation: &'static str,
) -> Result<bool> {
    match result {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(context.engine_error(operation)),
    }
}

/// Metric calls report 0 on exception.
pub(crate) fn metric_result(
    context: &Context,
    status: c_int,
    value: f64,
    operation: &'static str,
) -> Result<f64> {
    if status == 0 {
        Err(context.engine_error(operation))
    } else {
        Ok(value)
    }
}

/// Count queries report -1 on exception.
pub(crate) fn count_result(
    context: &Context,
    count: c_int,
    operation: &'static str,
) -> Result<usize> {
    if count < 0 {
        Err(context.engine_error(operation))
    } else {
        Ok(count as usize)
    }
}

/// Copy an engine-allocated string and release it.
pub(crate) unsafe fn take_string(
    context: &Context,
    raw: *mut c_char,
    operation: &'static str,
) -> Result<String> {
    if raw.is_null() {
        return Err(context.engine_error(operation));
    }
    let text = CStr::from_ptr(raw).to_string_lossy().into_owned();
    GEOSFree_r(context.as_raw(), raw as *mut c_void);
    Ok(text)
}

/// Copy an engine-allocated buffer and release it.
pub(crate) unsafe fn take_bytes(
    context: &Context,
    raw: *mut c_uchar,
    size: usize,
    operation: &'static str,
) -> Result<Vec<u8>> {
    if raw.is_null() {
        return Err(context.engine_error(operation));
    }
    let bytes = slice::from_raw_parts(raw, size).to_vec();
    GEOSFree_r(context.as_raw(), raw as *mut c_void);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeometryError;

    #[test]
    fn check_predicate_result() {
        let context = Context::new().unwrap();
        assert_eq!(predicate_result(&context, 0, "test"), Ok(false));
        assert_eq!(predicate_result(&context, 1, "test"), Ok(true));
        assert!(matches!(
            predicate_result(&context, 2, "test"),
            Err(GeometryError::Engine {
                operation: "test",
                ..
            })
        ));
    }

    #[test]
    fn check_metric_and_count_results() {
        let context = Context::new().unwrap();
        assert_eq!(metric_result(&context, 1, 2.5, "test"), Ok(2.5));
        assert!(metric_result(&context, 0, 2.5, "test").is_err());
        assert_eq!(count_result(&context, 3, "test"), Ok(3));
        assert!(count_result(&context, -1, "test").is_err());
    }
}
