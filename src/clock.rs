//! Time source for rendered output.

use chrono::{Datelike, Local};

/// Supplies the calendar year printed in page footers.
pub trait Clock {
    /// Current calendar year.
    fn year(&self) -> i32;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year.
///
/// Used for reproducible builds (`--year`) and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn year(&self) -> i32 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn year(&self) -> i32 {
        (**self).year()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn year(&self) -> i32 {
        (**self).year()
    }
}
