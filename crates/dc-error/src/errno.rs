//! Platform descriptions for OS error numbers.
//!
//! [`describe`] asks the platform for the text of an errno. When the
//! platform cannot produce one, the failure's own error number picks a
//! static fallback through [`fallback_message`].

use std::borrow::Cow;

/// Fallback when the platform rejects the error number itself.
pub const INVALID_ERRNO: &str = "invalid error number";
/// Fallback when a description exists but could not be retrieved.
pub const DESCRIPTION_UNAVAILABLE: &str = "error description unavailable";
/// Fallback for any other lookup failure.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Size of the stack buffer handed to the platform lookup.
pub const DESCRIPTION_LEN: usize = 256;

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        use std::ffi::CStr;

        /// Look up the platform description of `errnum`.
        ///
        /// On failure returns the lookup's own error number (`EINVAL` for an
        /// unknown errnum, `ERANGE` when the buffer was too small).
        pub fn describe(errnum: i32, buf: &mut [u8; DESCRIPTION_LEN]) -> Result<Cow<'_, str>, i32> {
            // libc binds the XSI variant (`__xpg_strerror_r` on glibc), which
            // returns 0, an error number, or -1 with errno set.
            let rc = unsafe {
                libc::strerror_r(errnum, buf.as_mut_ptr().cast::<libc::c_char>(), buf.len())
            };
            if rc != 0 {
                return Err(if rc == -1 { last_os_errno() } else { rc });
            }

            let text = CStr::from_bytes_until_nul(&buf[..]).map_err(|_| libc::ERANGE)?;
            Ok(String::from_utf8_lossy(text.to_bytes()))
        }
    } else {
        /// Look up the platform description of `errnum`.
        ///
        /// Non-unix targets have no reentrant `strerror`; the text comes from
        /// `std::io::Error`, which never fails.
        pub fn describe(errnum: i32, _buf: &mut [u8; DESCRIPTION_LEN]) -> Result<Cow<'_, str>, i32> {
            Ok(Cow::Owned(std::io::Error::from_raw_os_error(errnum).to_string()))
        }
    }
}

/// Static text for a failed lookup, chosen by the lookup's error number.
pub fn fallback_message(failure: i32) -> &'static str {
    match failure {
        libc::EINVAL => INVALID_ERRNO,
        libc::ERANGE => DESCRIPTION_UNAVAILABLE,
        _ => UNKNOWN_ERROR,
    }
}

/// The calling thread's current OS error number, 0 if none is set.
pub fn last_os_errno() -> i32 {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_distinguishes_failures() {
        assert_eq!(fallback_message(libc::EINVAL), INVALID_ERRNO);
        assert_eq!(fallback_message(libc::ERANGE), DESCRIPTION_UNAVAILABLE);
        assert_eq!(fallback_message(libc::ENOMEM), UNKNOWN_ERROR);
        assert_eq!(fallback_message(0), UNKNOWN_ERROR);
    }

    #[test]
    fn describe_known_errno() {
        let mut buf = [0u8; DESCRIPTION_LEN];
        let text = describe(libc::ENOENT, &mut buf).expect("ENOENT has a description");
        assert!(!text.is_empty());
    }

    #[test]
    fn describe_distinct_errnos_differ() {
        let mut a = [0u8; DESCRIPTION_LEN];
        let mut b = [0u8; DESCRIPTION_LEN];
        let enoent = describe(libc::ENOENT, &mut a).unwrap();
        let eacces = describe(libc::EACCES, &mut b).unwrap();
        assert_ne!(enoent, eacces);
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn describe_rejects_out_of_range_errno() {
        let mut buf = [0u8; DESCRIPTION_LEN];
        assert_eq!(describe(99_999, &mut buf), Err(libc::EINVAL));
    }
}
