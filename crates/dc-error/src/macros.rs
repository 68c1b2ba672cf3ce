/// Capture the [`Origin`](crate::Origin) of the current call site:
/// `file!()`, `line!()` and the path of the enclosing function.
///
/// ```
/// use dc_error::origin;
///
/// fn open_config() -> dc_error::Origin {
///     origin!()
/// }
///
/// assert!(open_config().function().ends_with("open_config"));
/// ```
#[macro_export]
macro_rules! origin {
    () => {{
        fn __dc_error_marker() {}
        fn __dc_error_type_name<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::Origin::new(
            file!(),
            $crate::origin::_function_path(__dc_error_type_name(__dc_error_marker)),
            line!(),
        )
    }};
}

/// Raise a check failure on `err` at the current call site.
///
/// ```ignore
/// if len == 0 {
///     raise_check!(err);
///     return None;
/// }
/// ```
#[macro_export]
macro_rules! raise_check {
    ($err:expr) => {
        ($err).raise_check_failure($crate::origin!())
    };
}

/// Raise an errno-derived error on `err` at the current call site.
///
/// ```ignore
/// raise_errno!(err, libc::ENOENT);
/// ```
#[macro_export]
macro_rules! raise_errno {
    ($err:expr, $code:expr) => {
        ($err).raise_errno($crate::origin!(), $code)
    };
}

/// Raise a system error with an explicit message and code.
#[macro_export]
macro_rules! raise_system {
    ($err:expr, $msg:expr, $code:expr) => {
        ($err).raise_system_error($crate::origin!(), $msg, $code)
    };
}

/// Raise an application-defined error with an explicit message and code.
///
/// ```ignore
/// raise_user!(err, "disk full", 28);
/// ```
#[macro_export]
macro_rules! raise_user {
    ($err:expr, $msg:expr, $code:expr) => {
        ($err).raise_user_error($crate::origin!(), $msg, $code)
    };
}
