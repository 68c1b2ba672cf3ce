use std::collections::TryReserveError;
use std::fmt;

use crate::config::RecordConfig;
use crate::errno::{self, DESCRIPTION_LEN};
use crate::reporter::{default_reporter, Diagnostic, Reporter};
use crate::{ddebug, dtrace, dwarn};
use crate::{ErrorKind, Message, Origin};

/// Message installed by [`ErrorRecord::raise_check_failure`].
pub const CHECK_FAILED: &str = "failed check";
/// Code installed by [`ErrorRecord::raise_check_failure`]. Not an errno.
pub const CHECK_FAILED_CODE: i32 = -1;
/// Message installed when copying a message could not allocate.
pub const OUT_OF_MEMORY: &str = "out of memory";

/// A single error slot, threaded by reference through fallible calls.
///
/// The record holds at most one outstanding error. Raising overwrites kind,
/// code, origin and message together, so nothing from an earlier raise
/// survives. `reset` returns to the initial state while keeping the
/// reporter configuration.
///
/// ```
/// use dc_error::{ErrorKind, ErrorRecord, Origin};
///
/// let mut err = ErrorRecord::new(false);
/// err.raise_user_error(Origin::new("store.rs", "save", 12), "disk full", 28);
/// assert!(err.is_error());
/// assert_eq!(err.kind(), ErrorKind::UserCode);
/// assert_eq!(err.message(), Some("disk full"));
///
/// err.reset();
/// assert!(err.is_ok());
/// ```
pub struct ErrorRecord {
    kind: ErrorKind,
    message: Message,
    /// errno when `kind == ErrnoDerived`, otherwise the raiser's code.
    code: i32,
    origin: Origin,
    reporter: Option<Box<dyn Reporter>>,
    reporting: bool,
}

// ── Construction ──────────────────────────────────────────────────

impl ErrorRecord {
    /// A cleared record. With `reporting` the stderr reporter is attached.
    pub fn new(reporting: bool) -> Self {
        Self {
            kind: ErrorKind::None,
            message: Message::Absent,
            code: 0,
            origin: Origin::UNKNOWN,
            reporter: if reporting { Some(default_reporter()) } else { None },
            reporting,
        }
    }

    /// A cleared record that never reports until `set_reporting(true)`.
    pub fn silent() -> Self {
        Self::new(false)
    }

    /// A cleared record reporting through `reporter`.
    pub fn with_reporter<R>(reporter: R) -> Self
    where
        R: Reporter + 'static,
    {
        let mut record = Self::silent();
        record.reporter = Some(Box::new(reporter));
        record.reporting = true;
        record
    }

    pub fn from_config(config: &RecordConfig) -> Self {
        Self::new(config.reporting)
    }

    /// Build from `DC_ERROR_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_config(&RecordConfig::from_env())
    }

    /// Reinitialize in place, replacing any reporter.
    pub fn init(&mut self, reporting: bool) {
        *self = Self::new(reporting);
    }

    /// Reinitialize in place with an explicit reporter.
    pub fn init_with_reporter<R>(&mut self, reporter: R)
    where
        R: Reporter + 'static,
    {
        *self = Self::with_reporter(reporter);
    }

    /// Drop any held message and clear the error. The reporter and the
    /// reporting flag are kept.
    pub fn reset(&mut self) {
        self.message = Message::Absent;
        self.kind = ErrorKind::None;
        self.code = 0;
        self.origin = Origin::UNKNOWN;
    }
}

impl Default for ErrorRecord {
    fn default() -> Self {
        Self::silent()
    }
}

// ── Raising ───────────────────────────────────────────────────────

impl ErrorRecord {
    pub fn raise_check_failure(&mut self, origin: Origin) {
        self.message = Message::Absent;
        self.install(
            ErrorKind::CheckFailure,
            origin,
            Ok(Message::Borrowed(CHECK_FAILED)),
            CHECK_FAILED_CODE,
        );
    }

    /// Raise with the platform description of `errnum`.
    ///
    /// When the platform has no text for `errnum`, a static fallback chosen
    /// by the lookup's own failure is installed instead.
    pub fn raise_errno(&mut self, origin: Origin, errnum: i32) {
        self.message = Message::Absent;

        let mut buf = [0u8; DESCRIPTION_LEN];
        let message = match errno::describe(errnum, &mut buf) {
            Ok(text) => Message::try_copy(&text),
            Err(failure) => {
                let fallback = errno::fallback_message(failure);
                ddebug!("no description for errno {} ({}): using {:?}", errnum, failure, fallback);
                Ok(Message::Borrowed(fallback))
            }
        };

        self.install(ErrorKind::ErrnoDerived, origin, message, errnum);
    }

    /// [`raise_errno`](Self::raise_errno) with the thread's current OS error.
    pub fn raise_last_os_error(&mut self, origin: Origin) {
        self.raise_errno(origin, errno::last_os_errno());
    }

    /// A library call failed without setting errno.
    pub fn raise_system_error(&mut self, origin: Origin, message: &str, code: i32) {
        self.message = Message::Absent;
        self.install(ErrorKind::SystemCode, origin, Message::try_copy(message), code);
    }

    /// An application-defined failure.
    pub fn raise_user_error(&mut self, origin: Origin, message: &str, code: i32) {
        self.message = Message::Absent;
        self.install(ErrorKind::UserCode, origin, Message::try_copy(message), code);
    }

    /// Overwrite every field, then report. An allocation failure still
    /// lands in `kind`, with static text.
    fn install(
        &mut self,
        kind: ErrorKind,
        origin: Origin,
        message: Result<Message, TryReserveError>,
        code: i32,
    ) {
        self.message = message.unwrap_or_else(|e| {
            dwarn!("{} error at {}: message copy failed ({}), using static text", kind, origin, e);
            Message::Borrowed(OUT_OF_MEMORY)
        });
        self.kind = kind;
        self.code = code;
        self.origin = origin;

        dtrace!("raise {} code={} at {}", kind, code, origin);
        self.notify();
    }

    fn notify(&mut self) {
        if !self.reporting {
            return;
        }
        if let Some(reporter) = self.reporter.as_mut() {
            let diagnostic =
                Diagnostic::new(&self.origin, self.kind, self.code, self.message.as_str());
            reporter.report(&diagnostic);
        }
    }
}

// ── Inspection ────────────────────────────────────────────────────

impl ErrorRecord {
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.kind.is_none()
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        debug_assert!(
            !self.kind.is_none() || self.message.is_absent(),
            "cleared record still holds a message"
        );
        self.kind.is_none()
    }

    /// True only for an errno-derived error carrying exactly `errnum`.
    #[inline]
    pub fn matches_errno(&self, errnum: i32) -> bool {
        self.kind == ErrorKind::ErrnoDerived && self.code == errnum
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn code(&self) -> i32 {
        self.code
    }

    #[inline]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_str()
    }

    /// Whether the current message is heap text owned by this record.
    #[inline]
    pub fn message_is_owned(&self) -> bool {
        self.message.is_owned()
    }

    /// A view of the current state, as a reporter would see it.
    pub fn diagnostic(&self) -> Diagnostic<'_> {
        Diagnostic::new(&self.origin, self.kind, self.code, self.message.as_str())
    }
}

// ── Reporting toggle ──────────────────────────────────────────────

impl ErrorRecord {
    /// Turn reporting on or off for future raises.
    ///
    /// Turning it on without a configured reporter attaches the stderr
    /// reporter. Turning it off keeps the reporter for a later `true`.
    pub fn set_reporting(&mut self, on: bool) {
        if on && self.reporter.is_none() {
            self.reporter = Some(default_reporter());
        }
        self.reporting = on;
    }

    #[inline]
    pub fn is_reporting(&self) -> bool {
        self.reporting
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return f.write_str("no error");
        }
        write!(
            f,
            "{} error: {} (code {})",
            self.kind,
            self.message().unwrap_or(""),
            self.code
        )?;
        if !self.origin.is_unknown() {
            write!(f, " at {}", self.origin)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorRecord")
            .field("kind", &self.kind)
            .field("code", &self.code)
            .field("message", &self.message)
            .field("origin", &self.origin)
            .field("reporting", &self.reporting)
            .field("has_reporter", &self.reporter.is_some())
            .finish()
    }
}
