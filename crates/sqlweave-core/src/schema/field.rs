use super::{Column, Type};
use crate::{Error, Result};

/// A single slot of a record: either a plain column or a flattened embed of
/// another table's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Go field name
    pub name: String,

    /// Name of the column in the database
    pub db_name: String,

    /// Go type of the field. For embeds this is the embedded struct, wrapped
    /// in `sql.Null[T]` when the embed is nullable.
    pub ty: Type,

    /// Originating column
    pub column: Column,

    /// Set when the field is an embedded table
    pub embed: Option<Embed>,
}

/// The columns of a joined table flattened into a parent record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    fields: Vec<Field>,

    /// Indices into `fields`. Non-empty iff the embed is nullable.
    primary_keys: Vec<usize>,
}

impl Field {
    pub fn new(name: impl Into<String>, db_name: impl Into<String>, ty: impl Into<Type>) -> Field {
        Field {
            name: name.into(),
            db_name: db_name.into(),
            ty: ty.into(),
            column: Column::default(),
            embed: None,
        }
    }

    pub fn with_column(mut self, column: Column) -> Field {
        self.column = column;
        self
    }

    /// An embed of a table that is always present in the row (inner join).
    pub fn embed(name: impl Into<String>, ty: impl Into<Type>, fields: Vec<Field>) -> Result<Field> {
        let name = name.into();
        let fields = check_embed_fields(&name, fields)?;

        Ok(Field {
            db_name: String::new(),
            ty: ty.into().into_record(),
            column: Column::default(),
            embed: Some(Embed {
                fields,
                primary_keys: vec![],
            }),
            name,
        })
    }

    /// An embed of an outer-joined table whose columns may all be `NULL`.
    ///
    /// `primary_keys` names the embedded fields tested to decide whether the
    /// joined row exists. At least one is required.
    pub fn nullable_embed<S: AsRef<str>>(
        name: impl Into<String>,
        ty: impl Into<Type>,
        fields: Vec<Field>,
        primary_keys: &[S],
    ) -> Result<Field> {
        let name = name.into();
        let fields = check_embed_fields(&name, fields)?;

        if primary_keys.is_empty() {
            return Err(Error::missing_primary_key(name));
        }

        let primary_keys = primary_keys
            .iter()
            .map(|key| {
                let key = key.as_ref();
                fields.iter().position(|f| f.name == key).ok_or_else(|| {
                    Error::invalid_statement(format!(
                        "primary key `{key}` is not a field of embed `{name}`"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!(embed = %name, keys = primary_keys.len(), "nullable embed");

        Ok(Field {
            db_name: String::new(),
            ty: ty.into().into_record(),
            column: Column::default(),
            embed: Some(Embed {
                fields,
                primary_keys,
            }),
            name,
        })
    }

    pub fn is_embed(&self) -> bool {
        self.embed.is_some()
    }

    /// The embed, if this field is an embed of an outer-joined table.
    pub fn nullable_embed_ref(&self) -> Option<&Embed> {
        self.embed.as_ref().filter(|embed| embed.is_nullable())
    }

    pub fn is_spread(&self) -> bool {
        self.column.is_spread()
    }

    /// Column name used when listing the columns of a statement.
    pub fn column_name(&self) -> &str {
        match &self.column.original_name {
            Some(name) if !name.is_empty() => name,
            _ => &self.db_name,
        }
    }
}

impl Embed {
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_nullable(&self) -> bool {
        !self.primary_keys.is_empty()
    }

    /// Fields making up the embedded table's primary key, in declaration
    /// order of the key.
    pub fn primary_keys(&self) -> impl Iterator<Item = &Field> + '_ {
        self.primary_keys.iter().map(|&i| &self.fields[i])
    }
}

fn check_embed_fields(name: &str, fields: Vec<Field>) -> Result<Vec<Field>> {
    if fields.is_empty() {
        return Err(Error::invalid_statement(format!("embed `{name}` has no fields")));
    }

    if let Some(nested) = fields.iter().find(|f| f.is_embed()) {
        return Err(Error::invalid_statement(format!(
            "embed `{name}` contains nested embed `{}`",
            nested.name
        )));
    }

    Ok(fields)
}
