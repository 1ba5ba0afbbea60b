//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one step.
///
/// # Pending States
///
/// `Running` and `Sleeping` both mean "not resolved yet, step again". They are
/// kept apart so a host can drive them differently:
/// - `Running` is busy work that may resolve on the very next step
/// - `Sleeping` is a deliberate timed wait; [`BehaviorTree::run`] yields to
///   the host instead of looping through it
///
/// [`BehaviorTree::run`]: crate::BehaviorTree::run
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Status {
    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action achieved its goal.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not achieve its goal.
    Failure,

    /// The behavior is still working and needs another step.
    Running,

    /// The behavior is waiting on the logical clock.
    Sleeping,
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

    /// Returns `true` if this status is `Sleeping`.
    #[inline]
    pub fn is_sleeping(self) -> bool {
        matches!(self, Status::Sleeping)
    }

    /// Returns `true` for `Success` and `Failure`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Success | Status::Failure)
    }

    /// Returns `true` for `Running` and `Sleeping`.
    #[inline]
    pub fn is_pending(self) -> bool {
        !self.is_terminal()
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    ///
    /// Pending statuses pass through unchanged.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            pending => pending,
        }
    }
}

impl From<bool> for Status {
    /// Maps `true` to `Success` and `false` to `Failure`.
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Status::Success
        } else {
            Status::Failure
        }
    }
}
