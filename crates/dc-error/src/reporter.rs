//! Synchronous reporting at raise time.
//!
//! A [`Reporter`] receives a read-only [`Diagnostic`] each time a record
//! with reporting enabled is raised. Closures implement the trait directly:
//!
//! ```
//! use dc_error::{Diagnostic, ErrorRecord, Origin};
//!
//! let mut err = ErrorRecord::with_reporter(|d: &Diagnostic<'_>| {
//!     assert_eq!(d.code(), 28);
//! });
//! err.raise_user_error(Origin::new("app.rs", "save", 10), "disk full", 28);
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::{ErrorKind, Origin};

/// Read-only view of a record at the moment it was raised.
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    origin: &'a Origin,
    kind: ErrorKind,
    code: i32,
    message: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    pub fn new(origin: &'a Origin, kind: ErrorKind, code: i32, message: Option<&'a str>) -> Self {
        Self { origin, kind, code, message }
    }

    pub fn origin(&self) -> &'a Origin {
        self.origin
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> Option<&'a str> {
        self.message
    }
}

/// `ERROR: <file> : <function> : @ <line> : <code> : <message>`
impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERROR: {} : {} : @ {} : {} : {}",
            self.origin.file(),
            self.origin.function(),
            self.origin.line(),
            self.code,
            self.message.unwrap_or(""),
        )
    }
}

/// Callback invoked synchronously on every raise while reporting is on.
pub trait Reporter {
    fn report(&mut self, diagnostic: &Diagnostic<'_>);
}

impl<F> Reporter for F
where
    F: FnMut(&Diagnostic<'_>),
{
    #[inline]
    fn report(&mut self, diagnostic: &Diagnostic<'_>) {
        self(diagnostic)
    }
}

/// Writes one formatted line per diagnostic to `W`.
///
/// The default reporter is `StreamReporter::stderr()`. Write errors are
/// logged and otherwise ignored: reporting never fails the raise.
pub struct StreamReporter<W: Write> {
    out: W,
}

impl StreamReporter<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> StreamReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for StreamReporter<W> {
    fn report(&mut self, diagnostic: &Diagnostic<'_>) {
        // A single write_fmt keeps the line under one stderr lock.
        let written = writeln!(self.out, "{}", diagnostic).and_then(|()| self.out.flush());
        if let Err(e) = written {
            crate::dwarn!("failed to write diagnostic for {}: {}", diagnostic.origin(), e);
        }
    }
}

impl<W: Write> fmt::Debug for StreamReporter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamReporter").finish_non_exhaustive()
    }
}

/// The reporter wired in when a record is created with reporting on.
pub fn default_reporter() -> Box<dyn Reporter> {
    Box::new(StreamReporter::stderr())
}
