use super::{Command, Value};
use crate::serializer::Flavor;

use sqlweave_core::schema::Identifier;

/// Everything the templates need to emit one query method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub cmd: Command,

    /// Comment lines above the query, without the comment marker
    pub comments: Vec<String>,

    /// Name of the generated method, e.g. `GetAuthor`
    pub method_name: String,

    /// Name of the prepared statement field, e.g. `getAuthorStmt`
    pub field_name: String,

    /// Name of the SQL text constant, e.g. `getAuthor`
    pub constant_name: String,

    pub sql: String,

    /// File the query was read from
    pub source_name: String,

    /// Method parameters
    pub params: Value,

    /// Scanned result
    pub result: Value,

    /// Target table of a `:copyfrom` query
    pub table: Option<Identifier>,
}

impl Statement {
    /// True when the method returns scanned rows.
    pub fn has_ret_type(&self) -> bool {
        self.cmd.is_scanned() && !self.result.is_empty()
    }

    /// The copy-from target table as spelled for `flavor`.
    pub fn table_identifier(&self, flavor: Flavor) -> Option<String> {
        self.table
            .as_ref()
            .map(|table| flavor.table_identifier(table))
    }

    /// `[]string{"schema", "table"}`
    pub fn table_identifier_as_go_slice(&self) -> Option<String> {
        self.table_identifier(Flavor::Postgresql)
    }

    /// `` `schema`.`table` ``
    pub fn table_identifier_for_mysql(&self) -> Option<String> {
        self.table_identifier(Flavor::Mysql)
    }
}
