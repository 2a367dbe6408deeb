use super::Error;

/// Error when an embed coming from an outer join carries no primary key.
///
/// The presence of a nullable embed is decided by testing its primary key
/// columns after the scan. Without them there is nothing to test, so the
/// statement is rejected instead of emitting a guard that is always true or
/// always false.
#[derive(Debug)]
pub(super) struct MissingPrimaryKey {
    embed: Box<str>,
}

impl std::error::Error for MissingPrimaryKey {}

impl core::fmt::Display for MissingPrimaryKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "nullable embed `{}` has no primary key; a presence check cannot be generated",
            self.embed
        )
    }
}

impl Error {
    /// Creates a missing primary key error for the named embed.
    pub fn missing_primary_key(embed: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingPrimaryKey(MissingPrimaryKey {
            embed: embed.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing primary key error.
    pub fn is_missing_primary_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingPrimaryKey(_))
    }
}
