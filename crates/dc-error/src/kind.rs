use core::fmt;

/// Why an [`ErrorRecord`](crate::ErrorRecord) is in an error state.
///
/// Discriminants are stable and match the numeric values other tooling
/// expects (`None = 0`, then declaration order).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorKind {
    /// No error. Initial and cleared state.
    #[default]
    None = 0,
    /// A check predicate failed.
    CheckFailure = 1,
    /// An OS error number was reported.
    ErrnoDerived = 2,
    /// A library call failed without an errno convention.
    SystemCode = 3,
    /// An application-defined failure.
    UserCode = 4,
}

impl ErrorKind {
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(ErrorKind::None),
            1 => Some(ErrorKind::CheckFailure),
            2 => Some(ErrorKind::ErrnoDerived),
            3 => Some(ErrorKind::SystemCode),
            4 => Some(ErrorKind::UserCode),
            _ => None,
        }
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self as i32
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::None => "none",
            ErrorKind::CheckFailure => "check",
            ErrorKind::ErrnoDerived => "errno",
            ErrorKind::SystemCode => "system",
            ErrorKind::UserCode => "user",
        }
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, ErrorKind::None)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
