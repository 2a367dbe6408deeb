use crate::{
    serializer::Flavor,
    stmt::{Argument, Command},
    Statement,
};

use serde::Serialize;
use sqlweave_core::{def, Error, Options, Result};

/// Builds statements and renders their fragments for one generation run.
#[derive(Debug)]
pub struct Generator {
    options: Options,
    flavor: Flavor,
}

/// The rendered fragments of one statement, in the shape the templates
/// consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragments {
    pub method_name: String,
    pub constant_name: String,
    pub cmd: &'static str,
    pub arguments: Vec<Argument>,
    pub params: String,
    pub has_ret_type: bool,
    pub return_type: Option<String>,
    pub return_name: String,
    pub scan: String,
    pub nullable_embed_temp_vars: Vec<String>,
    pub nullable_embed_assignments: Vec<String>,
    pub has_sqlc_slices: bool,

    /// Fields of the emitted parameter struct, if any
    pub params_struct: Vec<Argument>,

    /// Fields of the scanned row struct, if any
    pub row_struct: Vec<Argument>,

    pub column_names: Option<String>,
    pub table: Option<String>,
}

impl Generator {
    pub fn new(options: Options) -> Result<Generator> {
        let driver = options.driver()?;

        Ok(Generator {
            flavor: Flavor::for_driver(driver),
            options,
        })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Builds every query, in order. The first invalid query aborts the run.
    pub fn build(&self, queries: &[def::Query]) -> Result<Vec<Statement>> {
        queries
            .iter()
            .map(|query| {
                Statement::from_def(query, &self.options).map_err(|err| {
                    let source = if query.filename.is_empty() {
                        "<unknown>"
                    } else {
                        &query.filename
                    };
                    err.context(sqlweave_core::err!("{source}"))
                })
            })
            .collect()
    }

    /// Renders the fragments of every statement, in order.
    pub fn generate(&self, statements: &[Statement]) -> Vec<Fragments> {
        statements.iter().map(|stmt| self.fragments(stmt)).collect()
    }

    pub fn fragments(&self, stmt: &Statement) -> Fragments {
        let emit_nullable_embed = self.options.emit_embed_nullable_left_join;
        let has_nullable_embed = stmt.result.has_nullable_embed(emit_nullable_embed);

        tracing::trace!(query = %stmt.method_name, has_nullable_embed, "rendering fragments");

        Fragments {
            method_name: stmt.method_name.clone(),
            constant_name: stmt.constant_name.clone(),
            cmd: stmt.cmd.as_str(),
            arguments: stmt.params.argument_pairs(),
            params: stmt.params.params(),
            has_ret_type: stmt.has_ret_type(),
            return_type: stmt
                .has_ret_type()
                .then(|| stmt.result.defined_type()),
            return_name: stmt.result.return_name(),
            scan: stmt.result.scan(emit_nullable_embed),
            nullable_embed_temp_vars: if has_nullable_embed {
                stmt.result.nullable_embed_temp_vars()
            } else {
                vec![]
            },
            nullable_embed_assignments: if has_nullable_embed {
                stmt.result.nullable_embed_assignments()
            } else {
                vec![]
            },
            has_sqlc_slices: stmt.params.has_sqlc_slices(),
            params_struct: if stmt.params.emit_record() {
                stmt.params.struct_fields(false)
            } else {
                vec![]
            },
            row_struct: stmt.result.struct_fields(emit_nullable_embed),
            column_names: (stmt.cmd == Command::CopyFrom)
                .then(|| stmt.params.column_names_as_go_slice()),
            table: stmt.table_identifier(self.flavor),
        }
    }

    /// Parses a JSON request, then builds and renders every query in it.
    pub fn run_json(src: &str) -> Result<Vec<Fragments>> {
        let request = def::Request::from_json(src)?;
        let generator = Generator::new(request.options)?;
        let statements = generator.build(&request.queries)?;
        Ok(generator.generate(&statements))
    }
}

impl Fragments {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| Error::from(anyhow::Error::from(err)))
    }
}
