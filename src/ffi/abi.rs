// ============================================================================
// C ABI
// Opaque-pointer shell over the owned handles
// ============================================================================
//
// Every entry point accepts null and answers with null (or does nothing).
// Pointers handed out by `create_*` and `*_multiplication` must be released
// exactly once with the matching `delete_*`; text pointers borrow from their
// handle and die with it.

#![deny(unsafe_op_in_unsafe_fn)]

use super::handle::{DecimalHandle, Handle, HandleValue, IntegerHandle};
use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr;

// ============================================================================
// Integers
// ============================================================================

/// Parse a NUL-terminated integer numeral. Returns null if `text` is null,
/// not UTF-8, or not a valid integer.
///
/// # Safety
/// `text` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn create_biginteger(text: *const c_char) -> *mut IntegerHandle {
    unsafe { create(text) }
}

/// Multiply two integers into a new handle; null if either is null or the
/// product cannot be represented.
///
/// # Safety
/// Both arguments must be null or live handles from this library.
#[no_mangle]
pub unsafe extern "C" fn integer_multiplication(
    lhs: *const IntegerHandle,
    rhs: *const IntegerHandle,
) -> *mut IntegerHandle {
    unsafe { multiply(lhs, rhs) }
}

/// Canonical text of an integer, valid until the handle is deleted.
///
/// # Safety
/// `handle` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn integer_string(handle: *const IntegerHandle) -> *const c_char {
    unsafe { text(handle) }
}

/// Release an integer handle. Null is a no-op.
///
/// # Safety
/// `handle` must be null or a live handle from this library that has not
/// been deleted yet.
#[no_mangle]
pub unsafe extern "C" fn delete_integer(handle: *mut IntegerHandle) {
    unsafe { release(handle) }
}

// ============================================================================
// Decimals
// ============================================================================

/// Parse a NUL-terminated decimal numeral. Returns null if `text` is null,
/// not UTF-8, or not a valid decimal.
///
/// # Safety
/// `text` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn create_bigdecimal(text: *const c_char) -> *mut DecimalHandle {
    unsafe { create(text) }
}

/// Multiply two decimals into a new handle; null if either is null or the
/// product cannot be represented.
///
/// # Safety
/// Both arguments must be null or live handles from this library.
#[no_mangle]
pub unsafe extern "C" fn decimal_multiplication(
    lhs: *const DecimalHandle,
    rhs: *const DecimalHandle,
) -> *mut DecimalHandle {
    unsafe { multiply(lhs, rhs) }
}

/// Canonical text of a decimal, valid until the handle is deleted.
///
/// # Safety
/// `handle` must be null or a live handle from this library.
#[no_mangle]
pub unsafe extern "C" fn decimal_string(handle: *const DecimalHandle) -> *const c_char {
    unsafe { text(handle) }
}

/// Release a decimal handle. Null is a no-op.
///
/// # Safety
/// `handle` must be null or a live handle from this library that has not
/// been deleted yet.
#[no_mangle]
pub unsafe extern "C" fn delete_decimal(handle: *mut DecimalHandle) {
    unsafe { release(handle) }
}

// ============================================================================
// Shared Plumbing
// ============================================================================

unsafe fn create<T: HandleValue>(text: *const c_char) -> *mut Handle<T> {
    if text.is_null() {
        return ptr::null_mut();
    }
    // SAFETY: caller guarantees a NUL-terminated string.
    let text = unsafe { CStr::from_ptr(text) };
    let Ok(text) = text.to_str() else {
        tracing::debug!(kind = T::KIND, "rejected non-UTF-8 numeral");
        return ptr::null_mut();
    };
    Handle::parse(text).map_or(ptr::null_mut(), |handle| Box::into_raw(Box::new(handle)))
}

unsafe fn multiply<T: HandleValue>(lhs: *const Handle<T>, rhs: *const Handle<T>) -> *mut Handle<T> {
    // SAFETY: caller guarantees each pointer is null or a live handle.
    let (Some(lhs), Some(rhs)) = (unsafe { lhs.as_ref() }, unsafe { rhs.as_ref() }) else {
        return ptr::null_mut();
    };
    lhs.multiply(rhs)
        .map_or(ptr::null_mut(), |handle| Box::into_raw(Box::new(handle)))
}

unsafe fn text<T: HandleValue>(handle: *const Handle<T>) -> *const c_char {
    // SAFETY: caller guarantees the pointer is null or a live handle.
    match unsafe { handle.as_ref() } {
        Some(handle) => handle.as_c_str().as_ptr(),
        None => ptr::null(),
    }
}

unsafe fn release<T: HandleValue>(handle: *mut Handle<T>) {
    if !handle.is_null() {
        // SAFETY: the pointer came from Box::into_raw and is released once.
        drop(unsafe { Box::from_raw(handle) });
    }
}
