//! Output sinks for capability operations.

use core::fmt;
use std::io::{self, Write as _};

/// `fmt::Write` adapter over a locked standard output.
///
/// The lock is held for as long as the sink lives.
pub struct Stdout {
    inner: io::StdoutLock<'static>,
}

impl Stdout {
    /// Lock standard output.
    pub fn lock() -> Self {
        Self { inner: io::stdout().lock() }
    }
}

impl fmt::Write for Stdout {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|_| fmt::Error)
    }
}

impl fmt::Debug for Stdout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stdout").finish_non_exhaustive()
    }
}
