//! Logical clock seam for timed nodes.
//!
//! Timed leaves and decorators never own time. They read it through a plain
//! function pointer `fn(&C) -> Tick` bound when the node is declared. For
//! contexts implementing [`Clock`] that pointer is simply `C::now`.

/// One unit of the host's logical clock.
pub type Tick = u64;

/// Reads the current time from a host-owned clock.
pub type ClockFn<C> = fn(&C) -> Tick;

/// A monotonically non-decreasing tick source.
pub trait Clock {
    /// Returns the current logical tick.
    fn now(&self) -> Tick;
}

/// A clock the host advances by hand.
///
/// Useful as the time source embedded in a context, and in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManualClock {
    tick: Tick,
}

impl ManualClock {
    /// Creates a clock positioned at `tick`.
    pub const fn at(tick: Tick) -> Self {
        Self { tick }
    }

    /// Moves the clock forward by `ticks`.
    pub fn advance(&mut self, ticks: Tick) {
        self.tick = self.tick.saturating_add(ticks);
    }

    /// Moves the clock to `tick`, ignoring attempts to go backwards.
    pub fn set(&mut self, tick: Tick) {
        self.tick = self.tick.max(tick);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Tick {
        self.tick
    }
}

/// Ticks elapsed since `start`, saturating at zero.
#[inline]
pub(crate) fn elapsed(start: Tick, now: Tick) -> Tick {
    now.saturating_sub(start)
}
