//! Ownership of one libmpg123 decoder handle.
//!
//! The library itself needs a process-wide init/exit pair. It is reference counted
//! here: the first live handle initializes the library and the last one to drop
//! shuts it down again.
use std::sync::{Mutex, PoisonError};

use mpgdec_sys::ffi as sys;

use crate::{params::Param, Binding, EngineCode, EngineStatus, Error, Result};

static LIBRARY_USERS: Mutex<usize> = Mutex::new(0);

fn acquire_library() -> Result<()> {
    let mut users = LIBRARY_USERS.lock().unwrap_or_else(PoisonError::into_inner);
    if *users == 0 {
        handle_ffi::mpg123_init().map_err(Error::InitializationFailed)?;
        tracing::debug!("initialized libmpg123");
    }
    *users += 1;
    Ok(())
}

fn release_library() {
    let mut users = LIBRARY_USERS.lock().unwrap_or_else(PoisonError::into_inner);
    *users = users.saturating_sub(1);
    if *users == 0 {
        handle_ffi::mpg123_exit();
        tracing::debug!("released libmpg123");
    }
}

/// Exclusive owner of a `mpg123_handle`.
///
/// Deleted exactly once, on drop.
pub(crate) struct EngineHandle {
    inner: *mut sys::mpg123_handle,
}

// The handle is not shared; it can move between threads but needs `&mut` to mutate.
unsafe impl Send for EngineHandle {}

impl Binding for EngineHandle {
    type Raw = *mut sys::mpg123_handle;

    fn from_ptr(raw: Self::Raw) -> Self {
        Self { inner: raw }
    }

    fn to_raw(&self) -> Self::Raw {
        self.inner
    }
}

impl EngineHandle {
    pub(crate) fn new() -> Result<Self> {
        acquire_library()?;
        match handle_ffi::mpg123_new() {
            Ok(raw) => Ok(Self::from_ptr(raw)),
            Err(code) => {
                release_library();
                Err(Error::InitializationFailed(code))
            }
        }
    }

    /// The detailed code behind the last `MPG123_ERR` this handle returned.
    pub(crate) fn last_error(&self) -> EngineCode {
        handle_ffi::mpg123_errcode(self)
    }

    /// Like [`EngineStatus::check`], but resolves the generic `MPG123_ERR` into the
    /// handle's specific error code.
    pub(crate) fn check(&self, res: i32) -> std::result::Result<(), EngineCode> {
        EngineStatus::check(res).map_err(|code| self.refine(code))
    }

    pub(crate) fn refine(&self, code: EngineCode) -> EngineCode {
        if code != EngineCode::ERR {
            return code;
        }
        match self.last_error() {
            EngineCode::OK => EngineCode::ERR,
            specific => specific,
        }
    }

    pub(crate) fn set_param(
        &mut self,
        param: Param,
        value: i64,
        fvalue: f64,
    ) -> std::result::Result<(), EngineCode> {
        let res = handle_ffi::mpg123_param2(self, param, value, fvalue);
        self.check(res)
    }

    pub(crate) fn param(&self, param: Param) -> std::result::Result<(i64, f64), EngineCode> {
        let (res, value, fvalue) = handle_ffi::mpg123_getparam2(self, param);
        self.check(res)?;
        Ok((value, fvalue))
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        handle_ffi::mpg123_delete(self);
        release_library();
    }
}

pub(crate) mod handle_ffi {
    use mpgdec_sys::ffi as sys;

    use crate::{
        params::Param, session::handle::EngineHandle, Binding, EngineCode, EngineStatus,
    };

    #[inline]
    pub fn mpg123_init() -> Result<(), EngineCode> {
        let res = unsafe { sys::mpg123_init() };
        EngineStatus::check(res)
    }

    #[inline]
    pub fn mpg123_exit() {
        unsafe { sys::mpg123_exit() }
    }

    #[inline]
    pub fn mpg123_new() -> Result<*mut sys::mpg123_handle, EngineCode> {
        let mut err: core::ffi::c_int = 0;
        // A null decoder name selects the engine's default decoder.
        let raw = unsafe { sys::mpg123_new(core::ptr::null(), &mut err) };
        if raw.is_null() {
            EngineStatus::check(err)?;
            return Err(EngineCode::OUT_OF_MEM);
        }
        Ok(raw)
    }

    #[inline]
    pub fn mpg123_delete(handle: &mut EngineHandle) {
        unsafe { sys::mpg123_delete(handle.to_raw()) }
    }

    #[inline]
    pub fn mpg123_errcode(handle: &EngineHandle) -> EngineCode {
        EngineCode(unsafe { sys::mpg123_errcode(handle.to_raw()) })
    }

    #[inline]
    pub fn mpg123_param2(handle: &mut EngineHandle, param: Param, value: i64, fvalue: f64) -> i32 {
        let key = sys::mpg123_parms::from(param) as core::ffi::c_int;
        unsafe { sys::mpg123_param2(handle.to_raw(), key, value as core::ffi::c_long, fvalue) }
    }

    #[inline]
    pub fn mpg123_getparam2(handle: &EngineHandle, param: Param) -> (i32, i64, f64) {
        let key = sys::mpg123_parms::from(param) as core::ffi::c_int;
        let mut value: core::ffi::c_long = 0;
        let mut fvalue: f64 = 0.0;
        let res = unsafe { sys::mpg123_getparam2(handle.to_raw(), key, &mut value, &mut fvalue) };
        (res, value as i64, fvalue)
    }
}
