//! The resolved statement description handed over by the SQL analysis step.
//!
//! These types mirror the plugin request one to one and are deserialized
//! from JSON. They are validated and converted into [`schema`](crate::schema)
//! types before any code is generated.

use crate::{
    schema::{self, Column, ColumnShape, Identifier, Type},
    Error, Options, Result,
};

use serde::Deserialize;
use std_util::str;

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub options: Options,

    #[serde(default)]
    pub queries: Vec<Query>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Query {
    /// Query name, as written in the `-- name:` annotation
    pub name: String,

    /// Command tag, e.g. `:one`
    pub cmd: String,

    /// SQL text
    pub text: String,

    /// File the query was read from
    #[serde(default)]
    pub filename: String,

    #[serde(default)]
    pub comments: Vec<String>,

    #[serde(default)]
    pub params: Vec<Field>,

    #[serde(default)]
    pub columns: Vec<Field>,

    /// Target table of a `:copyfrom` query
    #[serde(default)]
    pub insert_into_table: Option<Identifier>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    /// Go name. Derived from `db_name` when absent.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub db_name: String,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub original_name: Option<String>,

    #[serde(default)]
    pub is_sqlc_slice: bool,

    #[serde(default)]
    pub embed: Option<Embed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Embed {
    pub fields: Vec<Field>,

    /// True when the embedded table comes from an outer join
    #[serde(default)]
    pub nullable: bool,

    /// Go names of the embedded fields forming the table's primary key
    #[serde(default)]
    pub primary_keys: Vec<String>,
}

impl Request {
    pub fn from_json(src: &str) -> Result<Request> {
        Ok(serde_json::from_str(src).map_err(anyhow::Error::from)?)
    }
}

impl Field {
    pub fn go_name(&self) -> Result<String> {
        match &self.name {
            Some(name) if !name.is_empty() => Ok(name.clone()),
            _ if !self.db_name.is_empty() => Ok(str::upper_camel_case(&self.db_name)),
            _ => Err(Error::invalid_statement(format!(
                "field of type `{}` has neither a name nor a column name",
                self.ty
            ))),
        }
    }

    pub fn build(&self) -> Result<schema::Field> {
        let name = self.go_name()?;

        let Some(embed) = &self.embed else {
            let shape = if self.is_sqlc_slice {
                ColumnShape::Spread
            } else {
                ColumnShape::Scalar
            };

            let column = Column {
                original_name: self.original_name.clone(),
                shape,
            };

            return Ok(schema::Field::new(name, &self.db_name, Type::parse(&self.ty))
                .with_column(column));
        };

        let fields = embed
            .fields
            .iter()
            .map(Field::build)
            .collect::<Result<Vec<_>>>()?;

        if embed.nullable {
            schema::Field::nullable_embed(name, Type::parse(&self.ty), fields, &embed.primary_keys)
        } else {
            schema::Field::embed(name, Type::parse(&self.ty), fields)
        }
    }
}
