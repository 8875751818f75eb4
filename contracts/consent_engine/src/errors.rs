use common::CommonError;

/// Classes a [`ConsentError`] belongs to, as reported to the service layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Initialisation state does not allow the call.
    Lifecycle = 1,
    /// The authenticated caller lacks the role the call requires.
    Authorization = 2,
    /// Caller input failed a precondition; correct it and resubmit.
    InvalidArgument = 3,
    /// The engine is not accepting writes right now.
    SubstrateUnavailable = 4,
    /// A competing write for the same key was committed first.
    OrderingConflict = 5,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ConsentError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 10,
    EmptySubjectId = 30,
    InvalidRequester = 31,
    InvalidDuration = 32,
    SubstrateUnavailable = 40,
    OrderingConflict = 41,
    SequenceExhausted = 42,
    IndexFull = 43,
}

impl ConsentError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConsentError::NotInitialized | ConsentError::AlreadyInitialized => {
                ErrorCategory::Lifecycle
            }
            ConsentError::Unauthorized => ErrorCategory::Authorization,
            ConsentError::EmptySubjectId
            | ConsentError::InvalidRequester
            | ConsentError::InvalidDuration => ErrorCategory::InvalidArgument,
            ConsentError::SubstrateUnavailable | ConsentError::IndexFull => {
                ErrorCategory::SubstrateUnavailable
            }
            ConsentError::OrderingConflict | ConsentError::SequenceExhausted => {
                ErrorCategory::OrderingConflict
            }
        }
    }

    /// Returns whether resubmitting the same call later may succeed.
    ///
    /// Grant and revoke are both safe to resubmit, so the engine leaves
    /// retrying to the caller.
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            ConsentError::SubstrateUnavailable | ConsentError::OrderingConflict
        )
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ConsentError::NotInitialized => "Contract has not been initialized",
            ConsentError::AlreadyInitialized => "Contract is already initialized",
            ConsentError::Unauthorized => "Caller is not authorized for this operation",
            ConsentError::EmptySubjectId => "Subject id must not be empty",
            ConsentError::InvalidRequester => "Requester identity is null or not allowed",
            ConsentError::InvalidDuration => "Duration must be a positive number of days",
            ConsentError::SubstrateUnavailable => "Consent writes are currently not accepted",
            ConsentError::OrderingConflict => {
                "A newer write for this consent was committed first, retry"
            }
            ConsentError::SequenceExhausted => "Consent sequence counter is exhausted",
            ConsentError::IndexFull => "Subject requester index is full",
        }
    }
}

impl From<CommonError> for ConsentError {
    fn from(err: CommonError) -> Self {
        match err {
            CommonError::NotInitialized => ConsentError::NotInitialized,
            CommonError::AlreadyInitialized => ConsentError::AlreadyInitialized,
            CommonError::AccessDenied => ConsentError::Unauthorized,
            CommonError::EmptyIdentifier => ConsentError::EmptySubjectId,
            CommonError::InvalidIdentity => ConsentError::InvalidRequester,
            CommonError::InvalidDuration => ConsentError::InvalidDuration,
        }
    }
}
