mod adhoc;
mod invalid_configuration;
mod invalid_statement;
mod missing_primary_key;

use adhoc::AdhocError;
use invalid_configuration::InvalidConfiguration;
use invalid_statement::InvalidStatement;
use missing_primary_key::MissingPrimaryKey;
use std::sync::Arc;

/// Returns early with an ad-hoc [`Error`] built from format arguments.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc [`Error`] from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error raised while building statement descriptors.
///
/// Every error here points at a broken invariant in the resolved input handed
/// over by the upstream analysis step. Fragment generation itself never fails
/// once a statement has been built.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    InvalidConfiguration(InvalidConfiguration),
    InvalidStatement(InvalidStatement),
    MissingPrimaryKey(MissingPrimaryKey),
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, ending with the root cause.
    pub fn context(self, consequent: Error) -> Error {
        Error {
            inner: Arc::new(ErrorInner {
                kind: match Arc::try_unwrap(consequent.inner) {
                    Ok(inner) => inner.kind,
                    Err(shared) => ErrorKind::Adhoc(AdhocError::new(shared.kind.to_string())),
                },
                cause: Some(self),
            }),
        }
    }

    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args.to_string())))
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            InvalidConfiguration(err) => core::fmt::Display::fmt(err, f),
            InvalidStatement(err) => core::fmt::Display::fmt(err, f),
            MissingPrimaryKey(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        assert_eq!(
            core::mem::size_of::<usize>(),
            core::mem::size_of::<Error>()
        );
    }

    #[test]
    fn error_from_args() {
        let err = err!("unknown command {:?}", ":many_rows");
        assert_eq!(err.to_string(), "unknown command \":many_rows\"");
    }

    #[test]
    fn error_chain_display() {
        let err = Error::missing_primary_key("author")
            .context(err!("result of ListPostsWithAuthors"))
            .context(err!("query.sql"));

        assert_eq!(
            err.to_string(),
            "query.sql: result of ListPostsWithAuthors: nullable embed `author` has no primary key; \
             a presence check cannot be generated"
        );
        assert!(!err.is_missing_primary_key());
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("plugin request truncated").into();
        assert_eq!(err.to_string(), "plugin request truncated");
    }

    #[test]
    fn kind_predicates() {
        assert!(Error::invalid_statement("no fields").is_invalid_statement());
        assert!(Error::invalid_configuration("bad driver").is_invalid_configuration());
        assert!(Error::missing_primary_key("author").is_missing_primary_key());
        assert!(!Error::missing_primary_key("author").is_invalid_statement());
    }
}
