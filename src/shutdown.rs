use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lightweight handle shared by the event loop and the input thread.
///
/// Tracks two independent flags: an OS interrupt (SIGINT/SIGTERM) that the
/// input thread turns into a quit event, and the loop's own shutdown that
/// tells the input thread to stop.
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    interrupted: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes SIGINT and SIGTERM into the interrupt flag.
    pub fn register_signals(&self) -> io::Result<()> {
        for signal in [libc::SIGINT, libc::SIGTERM] {
            signal_hook::flag::register(signal, Arc::clone(&self.interrupted))?;
        }
        Ok(())
    }

    /// Returns and clears the pending interrupt, if any.
    pub fn take_interrupt(&self) -> bool {
        self.interrupted.swap(false, Ordering::SeqCst)
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::debug!("Event loop shutdown initiated");
        }
    }
}
