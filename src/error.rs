use core::fmt::{Display, Formatter};

/// `TraverseError` is the failure of a bulk traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraverseError {
    /// The callback signaled [`Flow::Abort`]; remaining entries were not
    /// visited and the list is left as the callback last saw it.
    ///
    /// [`Flow::Abort`]: crate::Flow::Abort
    Aborted,
    /// The callback mutated the list beyond removing the entry being
    /// visited, so the traversal's notion of the next entry can no longer be
    /// trusted. The traversal stops before touching any link it captured.
    InconsistentMutation,
}

impl Display for TraverseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            TraverseError::Aborted => write!(f, "traversal aborted by callback"),
            TraverseError::InconsistentMutation => {
                write!(f, "list mutated inconsistently during traversal")
            }
        }
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "std")] {
        impl std::error::Error for TraverseError {}
    }
}
