use infra::StoreError;

/// Resolver-level error wrapper.
///
/// async-graphql has a blanket `impl<T: Display + Send + Sync + 'static>
/// From<T> for Error`, so this type auto-converts via `?`.
///
/// Malformed-row errors keep their detail: a bad log row is a hard, visible
/// failure of the affected view, never a silent skip. Plain I/O failures are
/// logged server-side and shown sanitized.
#[derive(Debug)]
pub enum GqlError {
    Store(StoreError),
    Custom(String),
}

impl GqlError {
    pub fn new(msg: impl Into<String>) -> Self {
        GqlError::Custom(msg.into())
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Store(e @ StoreError::MalformedRow { .. }) => write!(f, "{e}"),
            GqlError::Store(e) => {
                tracing::error!("storage error: {e}");
                write!(f, "Internal storage error")
            }
            GqlError::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<StoreError> for GqlError {
    fn from(e: StoreError) -> Self {
        GqlError::Store(e)
    }
}
