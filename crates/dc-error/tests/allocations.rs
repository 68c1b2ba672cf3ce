//! Message buffer accounting under a counting allocator.
//!
//! Only allocations made on the test's own thread while tracking is on are
//! counted, so harness threads do not disturb the totals.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::sync::atomic::{AtomicIsize, AtomicUsize, Ordering};

use dc_error::{ErrorRecord, LogLevel, Origin};

struct Counting;

static LIVE: AtomicIsize = AtomicIsize::new(0);
static TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static TRACKING: Cell<bool> = const { Cell::new(false) };
}

fn tracking() -> bool {
    TRACKING.try_with(Cell::get).unwrap_or(false)
}

unsafe impl GlobalAlloc for Counting {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() && tracking() {
            LIVE.fetch_add(1, Ordering::SeqCst);
            TOTAL.fetch_add(1, Ordering::SeqCst);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        if tracking() {
            LIVE.fetch_sub(1, Ordering::SeqCst);
        }
        System.dealloc(ptr, layout)
    }
}

#[global_allocator]
static ALLOC: Counting = Counting;

const ORIGIN: Origin = Origin::new("allocations.rs", "tests", 1);
const MESSAGES: [&str; 4] = ["disk full", "quota exceeded", "short write", "bad sector"];

/// Run `f` with tracking on and return (live, total) deltas.
fn counted<F: FnOnce()>(f: F) -> (isize, usize) {
    let live = LIVE.load(Ordering::SeqCst);
    let total = TOTAL.load(Ordering::SeqCst);
    TRACKING.with(|t| t.set(true));
    f();
    TRACKING.with(|t| t.set(false));
    (
        LIVE.load(Ordering::SeqCst) - live,
        TOTAL.load(Ordering::SeqCst) - total,
    )
}

#[test]
fn message_buffers_are_freed_exactly_once() {
    // Logger setup reads the environment; keep that out of the counts.
    dc_error::set_log_level(LogLevel::Off);

    const RAISES: usize = 25;
    let mut err = ErrorRecord::silent();
    let mut live_after_raises = Vec::with_capacity(RAISES);
    let mut err_slot = Some(ErrorRecord::silent());

    // Repeated raises on one record: one buffer live at any time.
    let (live, total) = counted(|| {
        for i in 0..RAISES {
            err.raise_user_error(ORIGIN, MESSAGES[i % MESSAGES.len()], i as i32);
            live_after_raises.push(LIVE.load(Ordering::SeqCst));
        }
    });
    assert_eq!(total, RAISES, "one allocation per owned raise");
    assert_eq!(live, 1, "only the last message stays allocated");
    assert!(live_after_raises.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(err.message(), Some(MESSAGES[(RAISES - 1) % MESSAGES.len()]));

    // Reset releases it.
    let (live, total) = counted(|| err.reset());
    assert_eq!((live, total), (-1, 0));

    // A borrowed message replacing an owned one allocates nothing and frees it.
    err.raise_system_error(ORIGIN, "inflate failed", -3);
    let (live, total) = counted(|| err.raise_check_failure(ORIGIN));
    assert_eq!((live, total), (-1, 0));

    // Dropping a raised record frees its single buffer.
    let (live, _) = counted(|| {
        if let Some(rec) = err_slot.as_mut() {
            for msg in MESSAGES {
                rec.raise_user_error(ORIGIN, msg, 1);
            }
        }
    });
    assert_eq!(live, 1);
    let (live, total) = counted(|| drop(err_slot.take()));
    assert_eq!((live, total), (-1, 0));
}
