//! Predicate helpers that raise a check failure when they do not hold.
//!
//! Every check returns `true` and leaves the record untouched when the
//! predicate holds. Otherwise it calls
//! [`ErrorRecord::raise_check_failure`] with the caller's file and line
//! (and the check's name as the function) and returns `false`.
//!
//! ```
//! use dc_error::{check, ErrorRecord};
//!
//! let mut err = ErrorRecord::silent();
//! let config: Option<&str> = None;
//! if !check::not_null(&mut err, &config) {
//!     assert_eq!(err.message(), Some("failed check"));
//! }
//! ```

use crate::{ErrorRecord, Origin};

/// Values that can be absent.
pub trait Nullable {
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<N: Nullable + ?Sized> Nullable for &N {
    #[inline]
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
}

#[track_caller]
#[inline]
fn verify(err: &mut ErrorRecord, holds: bool, check: &'static str) -> bool {
    if !holds {
        err.raise_check_failure(Origin::caller_in(check));
    }
    holds
}

#[track_caller]
pub fn not_null<N: Nullable + ?Sized>(err: &mut ErrorRecord, value: &N) -> bool {
    verify(err, !value.is_null(), "not_null")
}

#[track_caller]
pub fn null<N: Nullable + ?Sized>(err: &mut ErrorRecord, value: &N) -> bool {
    verify(err, value.is_null(), "null")
}

/// `a > b`. Unordered values (NaN) fail.
#[track_caller]
pub fn greater_than<T: PartialOrd>(err: &mut ErrorRecord, a: T, b: T) -> bool {
    verify(err, a > b, "greater_than")
}

/// `a < b`. Unordered values (NaN) fail.
#[track_caller]
pub fn less_than<T: PartialOrd>(err: &mut ErrorRecord, a: T, b: T) -> bool {
    verify(err, a < b, "less_than")
}

#[track_caller]
pub fn equals<T: PartialEq>(err: &mut ErrorRecord, a: T, b: T) -> bool {
    verify(err, a == b, "equals")
}

#[track_caller]
pub fn not_equals<T: PartialEq>(err: &mut ErrorRecord, a: T, b: T) -> bool {
    verify(err, a != b, "not_equals")
}

#[track_caller]
pub fn equals_str(err: &mut ErrorRecord, a: &str, b: &str) -> bool {
    verify(err, a == b, "equals_str")
}

#[track_caller]
pub fn not_equals_str(err: &mut ErrorRecord, a: &str, b: &str) -> bool {
    verify(err, a != b, "not_equals_str")
}
