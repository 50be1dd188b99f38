//! Status returned by behavior nodes.

/// The result of executing a behavior node for one tick.
///
/// # Tick Semantics
///
/// Controllers are ticked at a fixed sample rate, so an action may span
/// many ticks:
/// - `Running` means "call me again next tick, do not re-enter me"
/// - `Success` and `Failure` are terminal for the current activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior completed successfully.
    Success,

    /// The behavior failed.
    ///
    /// For robot actions this is a domain outcome (e.g. a collision),
    /// not an error.
    Failure,

    /// The behavior has not concluded yet and must be resumed next tick.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if the activation has concluded (`Success` or `Failure`).
    #[inline]
    pub fn is_terminal(self) -> bool {
        !self.is_running()
    }
}
