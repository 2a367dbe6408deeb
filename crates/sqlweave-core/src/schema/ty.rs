use std::fmt;

/// A Go type, classified once when a statement is built.
///
/// Every binding and scanning decision downstream is a match on this enum.
/// [`Type::parse`] is total: types it does not recognize become
/// [`Type::Named`] and are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A builtin scalar
    Scalar(Scalar),

    /// `[]byte`. Slice-shaped in Go but bound as a single value.
    Bytes,

    /// `[]T` for any `T` other than `byte`
    List(Box<Type>),

    /// A type that can represent SQL `NULL`
    Nullable(Nullable),

    /// A generated struct, e.g. an embedded table
    Record(String),

    /// Any other type, rendered verbatim (`uuid.UUID`, `*string`, `pgtype.Text`)
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    String,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Bool,
    Time,
}

/// The `database/sql` null wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nullable {
    String,
    Byte,
    Int16,
    Int32,
    Int64,
    Float64,
    Bool,
    Time,

    /// `sql.Null[T]`
    Generic(Box<Type>),
}

impl Type {
    pub fn parse(src: &str) -> Type {
        if src == "[]byte" {
            return Type::Bytes;
        }

        if let Some(item) = src.strip_prefix("[]") {
            return Type::list(Type::parse(item));
        }

        if let Some(scalar) = Scalar::from_go(src) {
            return Type::Scalar(scalar);
        }

        if let Some(nullable) = Nullable::from_go(src) {
            return Type::Nullable(nullable);
        }

        Type::Named(src.to_string())
    }

    pub fn list(item: impl Into<Type>) -> Type {
        Type::List(Box::new(item.into()))
    }

    pub fn record(name: impl Into<String>) -> Type {
        Type::Record(name.into())
    }

    /// `sql.Null[T]`
    pub fn null_of(ty: impl Into<Type>) -> Type {
        Type::Nullable(Nullable::Generic(Box::new(ty.into())))
    }

    /// Reinterprets a named type as a generated struct. Used for embed fields,
    /// whose type is known to be a struct, possibly wrapped in `sql.Null[T]`.
    pub fn into_record(self) -> Type {
        match self {
            Type::Named(name) => Type::Record(name),
            Type::Nullable(Nullable::Generic(inner)) => Type::null_of(inner.into_record()),
            ty => ty,
        }
    }

    /// True for slices that the driver has to encode as arrays. `[]byte` is
    /// not list-shaped.
    pub fn is_list(&self) -> bool {
        matches!(self, Type::List(_))
    }

    pub fn is_bytes(&self) -> bool {
        matches!(self, Type::Bytes)
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Type::Nullable(_))
    }

    /// The type with any `sql.Null[T]` wrapper removed.
    pub fn strip_null(&self) -> &Type {
        match self {
            Type::Nullable(Nullable::Generic(inner)) => inner,
            ty => ty,
        }
    }

    /// The counterpart of this type that can hold SQL `NULL`.
    ///
    /// Types without a `database/sql` wrapper are returned unchanged; they are
    /// either nullable already (`[]byte`, pointers, `sql.Null*`) or custom
    /// types expected to implement `sql.Scanner` themselves.
    pub fn to_nullable(&self) -> Type {
        match self {
            Type::Scalar(scalar) => Type::Nullable(scalar.to_nullable()),
            Type::Bytes
            | Type::List(_)
            | Type::Nullable(_)
            | Type::Record(_)
            | Type::Named(_) => self.clone(),
        }
    }
}

impl Scalar {
    fn from_go(src: &str) -> Option<Scalar> {
        Some(match src {
            "string" => Scalar::String,
            "int" => Scalar::Int,
            "int8" => Scalar::Int8,
            "int16" => Scalar::Int16,
            "int32" => Scalar::Int32,
            "int64" => Scalar::Int64,
            "uint8" => Scalar::Uint8,
            "uint16" => Scalar::Uint16,
            "uint32" => Scalar::Uint32,
            "uint64" => Scalar::Uint64,
            "float32" => Scalar::Float32,
            "float64" => Scalar::Float64,
            "bool" => Scalar::Bool,
            "time.Time" => Scalar::Time,
            _ => return None,
        })
    }

    pub fn as_go(self) -> &'static str {
        match self {
            Scalar::String => "string",
            Scalar::Int => "int",
            Scalar::Int8 => "int8",
            Scalar::Int16 => "int16",
            Scalar::Int32 => "int32",
            Scalar::Int64 => "int64",
            Scalar::Uint8 => "uint8",
            Scalar::Uint16 => "uint16",
            Scalar::Uint32 => "uint32",
            Scalar::Uint64 => "uint64",
            Scalar::Float32 => "float32",
            Scalar::Float64 => "float64",
            Scalar::Bool => "bool",
            Scalar::Time => "time.Time",
        }
    }

    /// Widths without a wrapper of their own use the narrowest wider one:
    /// `int` shares `sql.NullInt32`, unsigned widths move up one signed
    /// width, and both float widths share `sql.NullFloat64`.
    pub fn to_nullable(self) -> Nullable {
        match self {
            Scalar::String => Nullable::String,
            Scalar::Uint8 => Nullable::Byte,
            Scalar::Int8 | Scalar::Int16 => Nullable::Int16,
            Scalar::Int | Scalar::Int32 | Scalar::Uint16 => Nullable::Int32,
            Scalar::Int64 | Scalar::Uint32 | Scalar::Uint64 => Nullable::Int64,
            Scalar::Float32 | Scalar::Float64 => Nullable::Float64,
            Scalar::Bool => Nullable::Bool,
            Scalar::Time => Nullable::Time,
        }
    }
}

impl Nullable {
    fn from_go(src: &str) -> Option<Nullable> {
        let name = src.strip_prefix("sql.Null")?;

        if let Some(inner) = name.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return Some(Nullable::Generic(Box::new(Type::parse(inner))));
        }

        Some(match name {
            "String" => Nullable::String,
            "Byte" => Nullable::Byte,
            "Int16" => Nullable::Int16,
            "Int32" => Nullable::Int32,
            "Int64" => Nullable::Int64,
            "Float64" => Nullable::Float64,
            "Bool" => Nullable::Bool,
            "Time" => Nullable::Time,
            _ => return None,
        })
    }

    /// Name of the payload field on the wrapper (`sql.NullInt64.Int64`).
    pub fn payload(&self) -> &'static str {
        match self {
            Nullable::String => "String",
            Nullable::Byte => "Byte",
            Nullable::Int16 => "Int16",
            Nullable::Int32 => "Int32",
            Nullable::Int64 => "Int64",
            Nullable::Float64 => "Float64",
            Nullable::Bool => "Bool",
            Nullable::Time => "Time",
            Nullable::Generic(_) => "V",
        }
    }
}

impl From<Scalar> for Type {
    fn from(value: Scalar) -> Self {
        Type::Scalar(value)
    }
}

impl From<Nullable> for Type {
    fn from(value: Nullable) -> Self {
        Type::Nullable(value)
    }
}

impl From<&str> for Type {
    fn from(value: &str) -> Self {
        Type::parse(value)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Scalar(scalar) => f.write_str(scalar.as_go()),
            Type::Bytes => f.write_str("[]byte"),
            Type::List(item) => write!(f, "[]{item}"),
            Type::Nullable(nullable) => nullable.fmt(f),
            Type::Record(name) | Type::Named(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for Nullable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nullable::Generic(inner) => write!(f, "sql.Null[{inner}]"),
            other => write!(f, "sql.Null{}", other.payload()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_go())
    }
}
