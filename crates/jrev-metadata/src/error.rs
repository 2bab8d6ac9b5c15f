use thiserror::Error;

pub type Result<T> = std::result::Result<T, MetadataError>;

#[derive(Debug, Error)]
pub enum MetadataError {
    /// An identifier does not name any type known to the store. For input
    /// produced by the classfile loader this indicates upstream data loss,
    /// not a user error; callers abort rather than guess a name.
    #[error("unresolved type: `{name}`")]
    UnresolvedType { name: String },

    /// `invoke` was called on a constructor with no bound instantiator.
    #[error("no instantiator bound for constructor of `{declaring}`")]
    UnboundConstructor { declaring: String },

    /// The bound instantiator ran and failed. All native failure categories
    /// are collapsed into this one variant; the original cause is kept as
    /// the source.
    #[error("constructor invocation failed")]
    Invocation {
        #[from]
        source: InstantiationError,
    },
}

/// Failure categories reported by an [`Instantiator`](crate::Instantiator)
/// implementation. Callers of `invoke` see these only through
/// [`MetadataError::Invocation`].
#[derive(Debug, Error)]
pub enum InstantiationError {
    #[error("target constructor failed: {0}")]
    Target(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("incompatible arguments: {0}")]
    IncompatibleArguments(String),

    #[error("access denied: {0}")]
    AccessDenied(String),
}
