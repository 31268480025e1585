use std::fmt::{self, Display};

/// Status of an infrastructure stack.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum StackStatus {
    /// `CREATE_COMPLETE`
    CreateComplete,

    /// `CREATE_IN_PROGRESS`
    CreateInProgress,

    /// `CREATE_FAILED`
    CreateFailed,

    /// `DELETE_COMPLETE`
    DeleteComplete,

    /// `ROLLBACK_COMPLETE`
    RollbackComplete,

    /// `UPDATE_COMPLETE`
    UpdateComplete,

    /// Any other status, kept verbatim.
    Other(String),
}

impl StackStatus {
    /// The literal status string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::CreateComplete => "CREATE_COMPLETE",
            Self::CreateInProgress => "CREATE_IN_PROGRESS",
            Self::CreateFailed => "CREATE_FAILED",
            Self::DeleteComplete => "DELETE_COMPLETE",
            Self::RollbackComplete => "ROLLBACK_COMPLETE",
            Self::UpdateComplete => "UPDATE_COMPLETE",
            Self::Other(status) => status,
        }
    }
}

impl From<&str> for StackStatus {
    fn from(status: &str) -> Self {
        match status {
            "CREATE_COMPLETE" => Self::CreateComplete,
            "CREATE_IN_PROGRESS" => Self::CreateInProgress,
            "CREATE_FAILED" => Self::CreateFailed,
            "DELETE_COMPLETE" => Self::DeleteComplete,
            "ROLLBACK_COMPLETE" => Self::RollbackComplete,
            "UPDATE_COMPLETE" => Self::UpdateComplete,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Display for StackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of one infrastructure stack as returned by a listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StackSummary {
    /// The unique stack identifier (an ARN on AWS).
    pub stack_id: Option<String>,

    /// The stack name.
    pub stack_name: String,

    /// The status reported at query time.
    pub status: StackStatus,

    /// The description of the template the stack was created from.
    pub template_description: Option<String>,
}

impl StackSummary {
    /// Creates a summary with only a name and status set.
    pub fn new(stack_name: impl Into<String>, status: impl Into<StackStatus>) -> Self {
        Self {
            stack_id: None,
            stack_name: stack_name.into(),
            status: status.into(),
            template_description: None,
        }
    }

    /// Sets the stack identifier.
    #[must_use]
    pub fn with_stack_id(mut self, stack_id: impl Into<String>) -> Self {
        self.stack_id = Some(stack_id.into());
        self
    }

    /// The stack identifier, falling back to the name when the backend did not
    /// report one.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.stack_id.as_deref().unwrap_or(&self.stack_name)
    }
}

/// One page of a stack listing.
pub type StackPage = Vec<StackSummary>;
