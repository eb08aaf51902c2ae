use crate::errors::{GeometryError, Result};
use geos_sys::{
    GEOS_finish_r, GEOSContextHandle_t, GEOSContext_setErrorMessageHandler_r,
    GEOSContext_setNoticeMessageHandler_r, GEOS_init_r, GEOSversion,
};
use std::cell::Cell;
use std::ffi::{c_void, CStr};
use std::fmt;
use std::os::raw::c_char;
use std::ptr;

/// Messages reported by the engine through the context callbacks.
///
/// Boxed so its address stays fixed for the lifetime of the handle.
#[derive(Default)]
struct Messages {
    last_error: Cell<Option<String>>,
}

/// Execution context for every engine call.
///
/// Geometries and coordinate sequences borrow the context they were built
/// with, so it always outlives them. A context may be moved to another
/// thread but never shared between threads; use one context per thread.
pub struct Context {
    handle: GEOSContextHandle_t,
    messages: Box<Messages>,
}

// The handle is only ever touched through `&Context`, which is not `Sync`,
// so calls against one handle are always serialized on a single thread.
unsafe impl Send for Context {}

unsafe fn message_text(message: *const c_char) -> String {
    if message.is_null() {
        String::new()
    } else {
        CStr::from_ptr(message).to_string_lossy().into_owned()
    }
}

unsafe extern "C" fn on_error(message: *const c_char, userdata: *mut c_void) {
    let text = message_text(message);
    log::warn!("geometry engine error: {}", text);
    if let Some(messages) = (userdata as *const Messages).as_ref() {
        messages.last_error.set(Some(text));
    }
}

unsafe extern "C" fn on_notice(message: *const c_char, _userdata: *mut c_void) {
    log::debug!("geometry engine notice: {}", message_text(message));
}

impl Context {
    pub fn new() -> Result<Context> {
        let handle = unsafe { GEOS_init_r() };
        if handle.is_null() {
            return Err(GeometryError::ContextInit);
        }
        let messages = Box::new(Messages::default());
        let userdata = &*messages as *const Messages as *mut c_void;
        unsafe {
            GEOSContext_setErrorMessageHandler_r(handle, Some(on_error), userdata);
            GEOSContext_setNoticeMessageHandler_r(handle, Some(on_notice), userdata);
        }
        log::trace!("created engine context {:p}", handle);
        Ok(Context { handle, messages })
    }

    /// Version string of the linked engine.
    pub fn engine_version() -> String {
        unsafe { message_text(GEOSversion()) }
    }

    pub(crate) fn as_raw(&self) -> GEOSContextHandle_t {
        self.handle
    }

    pub(crate) fn take_last_error(&self) -> Option<String> {
        self.messages.last_error.take()
    }

    pub(crate) fn engine_error(&self, operation: &'static str) -> GeometryError {
        GeometryError::Engine {
            operation,
            message: self.last_error_or_default(),
        }
    }

    pub(crate) fn construction_error(&self, operation: &'static str) -> GeometryError {
        GeometryError::ConstructionFailed {
            operation,
            message: self.last_error_or_default(),
        }
    }

    pub(crate) fn parse_error(&self) -> GeometryError {
        GeometryError::Parse(self.last_error_or_default())
    }

    /// Fails unless `other` is this very context.
    pub(crate) fn check_same(&self, other: &Context) -> Result<()> {
        if ptr::eq(self, other) {
            Ok(())
        } else {
            Err(GeometryError::ContextMismatch)
        }
    }

    fn last_error_or_default(&self) -> String {
        self.take_last_error()
            .unwrap_or_else(|| "no message from engine".to_owned())
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        unsafe { GEOS_finish_r(self.handle) };
        log::trace!("destroyed engine context {:p}", self.handle);
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("handle", &self.handle)
            .finish()
    }
}
