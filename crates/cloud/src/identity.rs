/// The identity the current session authenticates as.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallerIdentity {
    /// The account ID.
    pub account: String,

    /// The ARN of the calling principal.
    pub arn: String,

    /// The unique identifier of the calling principal.
    pub user_id: String,
}
