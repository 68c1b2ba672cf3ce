//! Where a raise happened.
//!
//! An `Origin` is three borrowed-static parts:
//!
//! ```text
//! ┌──────────────┬──────────────────┬────────┐
//! │ file         │ function         │ line   │
//! │ file!()      │ enclosing fn     │ line!()│
//! └──────────────┴──────────────────┴────────┘
//! ```
//!
//! Use [`origin!`](crate::origin) to capture all three at a call site, or
//! [`Origin::caller`] inside `#[track_caller]` helpers, where the function
//! name is not recoverable.

use core::fmt;
use core::panic::Location;

/// Function name recorded when only a `Location` is available.
pub const UNKNOWN_FUNCTION: &str = "<unknown>";

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    file: &'static str,
    function: &'static str,
    line: u32,
}

impl Origin {
    /// Origin of a record that has never been raised.
    pub const UNKNOWN: Origin = Origin::new("", "", 0);

    #[inline]
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self { file, function, line }
    }

    /// The location of the outermost `#[track_caller]` caller.
    ///
    /// ```
    /// use dc_error::Origin;
    /// let here = Origin::caller();
    /// assert_eq!(here.function(), dc_error::origin::UNKNOWN_FUNCTION);
    /// assert!(here.line() > 0);
    /// ```
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::caller_in(UNKNOWN_FUNCTION)
    }

    /// Like [`caller`](Self::caller), naming `function` explicitly.
    #[track_caller]
    #[inline]
    pub fn caller_in(function: &'static str) -> Self {
        let loc = Location::caller();
        Self::new(loc.file(), function, loc.line())
    }

    #[inline]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub const fn is_unknown(&self) -> bool {
        self.file.is_empty() && self.function.is_empty() && self.line == 0
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            f.write_str("<no origin>")
        } else {
            write!(f, "{}:{}:{}", self.file, self.function, self.line)
        }
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Origin")
            .field("file", &self.file)
            .field("function", &self.function)
            .field("line", &self.line)
            .finish()
    }
}

#[doc(hidden)]
pub fn _function_path(raw: &'static str) -> &'static str {
    // `raw` is the type name of a marker fn nested in the caller.
    let mut path = raw.strip_suffix("::__dc_error_marker").unwrap_or(raw);
    // Closures add `::{{closure}}` segments that say nothing about the caller.
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path
}
