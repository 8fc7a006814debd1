//! Status returned by behavior nodes.

/// The result of evaluating a node. Every tick resolves immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Condition met, or the action did what it set out to do.
    Success,
    /// Condition not met, or the action could not apply.
    Failure,
}

impl Status {
    #[inline]
    pub fn from_bool(ok: bool) -> Self {
        if ok { Status::Success } else { Status::Failure }
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }
}
