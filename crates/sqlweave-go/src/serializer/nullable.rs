use super::{Formatter, ToGo};

use sqlweave_core::schema::{Embed, Scalar, Type};

/// Scratch variable receiving one column of a nullable embed:
/// `{value}Embed{field}{embedded}`.
#[derive(Clone, Copy)]
pub(crate) struct TempVar<'a> {
    pub(crate) value: &'a str,
    pub(crate) field: &'a str,
    pub(crate) embedded: &'a str,
}

/// Reads the payload of a temp var back as the embedded field's own type.
pub(crate) struct Extract<'a> {
    pub(crate) var: TempVar<'a>,

    /// Declared type of the embedded field
    pub(crate) ty: &'a Type,
}

/// How the presence of an outer-joined embed is decided from its primary key
/// columns after a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresenceRule {
    /// Present when any key column is non-NULL.
    ///
    /// A composite key with some NULL components still counts as present.
    /// This matches the output of earlier releases and is the default.
    #[default]
    AnyKey,

    /// Present only when every key column is non-NULL.
    AllKeys,
}

/// The condition testing a nullable embed's key columns:
/// `iEmbedAuthorID.Valid || ...`.
pub(crate) struct PresenceGuard<'a> {
    pub(crate) value: &'a str,
    pub(crate) field: &'a str,
    pub(crate) embed: &'a Embed,
    pub(crate) rule: PresenceRule,
}

impl ToGo for PresenceGuard<'_> {
    fn to_go(self, f: &mut Formatter<'_>) {
        let op = match self.rule {
            PresenceRule::AnyKey => " || ",
            PresenceRule::AllKeys => " && ",
        };

        let mut s = "";
        for key in self.embed.primary_keys() {
            let var = TempVar {
                value: self.value,
                field: self.field,
                embedded: &key.name,
            };
            fmt!(f, s var ".Valid");
            s = op;
        }
    }
}

impl ToGo for TempVar<'_> {
    fn to_go(self, f: &mut Formatter<'_>) {
        fmt!(f, self.value "Embed" self.field self.embedded);
    }
}

impl ToGo for Extract<'_> {
    fn to_go(self, f: &mut Formatter<'_>) {
        let scalar = match self.ty {
            Type::Scalar(scalar) => *scalar,
            // Already able to hold NULL; the temp var has the same type
            Type::Bytes
            | Type::List(_)
            | Type::Nullable(_)
            | Type::Record(_)
            | Type::Named(_) => return fmt!(f, self.var),
        };

        let payload = scalar.to_nullable().payload();

        // Convert back when the declared width differs from the wrapper's
        let convert = match scalar {
            Scalar::Int
            | Scalar::Int8
            | Scalar::Int32
            | Scalar::Uint8
            | Scalar::Uint16
            | Scalar::Uint32
            | Scalar::Uint64
            | Scalar::Float32 => Some(scalar.as_go()),
            Scalar::String
            | Scalar::Int16
            | Scalar::Int64
            | Scalar::Float64
            | Scalar::Bool
            | Scalar::Time => None,
        };

        match convert {
            Some(ty) => fmt!(f, ty "(" self.var "." payload ")"),
            None => fmt!(f, self.var "." payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(ty: &str) -> String {
        let ty = Type::parse(ty);
        Formatter::render(Extract {
            var: TempVar {
                value: "i",
                field: "Author",
                embedded: "ID",
            },
            ty: &ty,
        })
    }

    #[test]
    fn extract_payloads() {
        assert_eq!(extract("string"), "iEmbedAuthorID.String");
        assert_eq!(extract("int64"), "iEmbedAuthorID.Int64");
        assert_eq!(extract("int16"), "iEmbedAuthorID.Int16");
        assert_eq!(extract("float64"), "iEmbedAuthorID.Float64");
        assert_eq!(extract("bool"), "iEmbedAuthorID.Bool");
        assert_eq!(extract("time.Time"), "iEmbedAuthorID.Time");
    }

    #[test]
    fn extract_converts_width() {
        assert_eq!(extract("int32"), "int32(iEmbedAuthorID.Int32)");
        assert_eq!(extract("int"), "int(iEmbedAuthorID.Int32)");
        assert_eq!(extract("float32"), "float32(iEmbedAuthorID.Float64)");
        assert_eq!(extract("int8"), "int8(iEmbedAuthorID.Int16)");
        assert_eq!(extract("uint8"), "uint8(iEmbedAuthorID.Byte)");
        assert_eq!(extract("uint16"), "uint16(iEmbedAuthorID.Int32)");
        assert_eq!(extract("uint32"), "uint32(iEmbedAuthorID.Int64)");
        assert_eq!(extract("uint64"), "uint64(iEmbedAuthorID.Int64)");
    }

    #[test]
    fn extract_passthrough() {
        assert_eq!(extract("[]byte"), "iEmbedAuthorID");
        assert_eq!(extract("sql.NullString"), "iEmbedAuthorID");
        assert_eq!(extract("uuid.UUID"), "iEmbedAuthorID");
    }
}
