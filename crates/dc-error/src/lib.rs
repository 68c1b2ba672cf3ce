//! # dc-error — explicit error records
//!
//! A single mutable [`ErrorRecord`] is passed by reference into fallible
//! calls. A failing callee raises it, and the caller inspects and resets it.
//! Nothing unwinds and nothing is propagated implicitly: callers check
//! [`ErrorRecord::is_error`] after each call.
//!
//! ## Lifecycle
//!
//! ```text
//! new/init ──► None ──raise_*──► CheckFailure | ErrnoDerived | SystemCode | UserCode
//!                ▲                              │
//!                └────────────── reset ─────────┘
//! ```
//!
//! Each raise overwrites kind, code, origin and message together and, when
//! reporting is on, calls the [`Reporter`] before returning. The default
//! reporter writes one line per raise to stderr:
//!
//! ```text
//! ERROR: <file> : <function> : @ <line> : <code> : <message>
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use dc_error::{check, raise_user, ErrorKind, ErrorRecord};
//!
//! fn reserve(err: &mut ErrorRecord, free: u64, wanted: u64) -> bool {
//!     if !check::greater_than(err, free, 0) {
//!         return false;
//!     }
//!     if wanted > free {
//!         raise_user!(err, "disk full", 28);
//!         return false;
//!     }
//!     true
//! }
//!
//! let mut err = ErrorRecord::new(false);
//! assert!(!reserve(&mut err, 10, 20));
//! assert_eq!(err.kind(), ErrorKind::UserCode);
//! assert_eq!(err.message(), Some("disk full"));
//! err.reset();
//! assert!(err.is_ok());
//! ```
//!
//! ## Environment
//!
//! | Variable                | Effect |
//! |-------------------------|--------|
//! | `DC_ERROR_REPORTING`    | `ErrorRecord::from_env()` reports to stderr |
//! | `DC_ERROR_LOG_LEVEL`    | Internal log level (off..trace, default warn) |
//! | `DC_ERROR_FLUSH_EPRINT` | Flush stderr after every internal log line |

pub mod log;
pub mod env;
pub mod config;
pub mod origin;
mod kind;
mod message;
pub mod errno;
mod reporter;
mod record;
#[macro_use]
mod macros;
pub mod check;

// ── Public API ────────────────────────────────────────────────────

pub use kind::ErrorKind;
pub use origin::Origin;
pub use message::Message;
pub use reporter::{default_reporter, Diagnostic, Reporter, StreamReporter};
pub use record::{ErrorRecord, CHECK_FAILED, CHECK_FAILED_CODE, OUT_OF_MEMORY};
pub use config::RecordConfig;
pub use log::{set_log_level, LogLevel};
