use super::{Command, Statement, Value};

use sqlweave_core::{
    def,
    schema::{Field, Record},
    Capability, Error, Options, Result,
};
use std::sync::Arc;
use std_util::str;

/// Variable name of a parameter struct
const PARAMS_NAME: &str = "arg";

/// Variable name of a scanned row struct
const ROW_NAME: &str = "i";

impl Statement {
    /// Builds the statement descriptor for one resolved query.
    ///
    /// All invariants of the input are checked here. A statement that builds
    /// successfully generates without failure.
    pub fn from_def(query: &def::Query, options: &Options) -> Result<Statement> {
        let capability = options.capability()?;
        let cmd = Command::parse(&query.cmd)?;

        if query.name.is_empty() {
            return Err(Error::invalid_statement("query has no name"));
        }

        let table = match (cmd, &query.insert_into_table) {
            (Command::CopyFrom, None) => {
                return Err(Error::invalid_statement(format!(
                    "{} is a {cmd} query without a target table",
                    query.name
                )))
            }
            (Command::CopyFrom, Some(table)) => Some(table.clone()),
            _ => None,
        };

        let params = build_params(query, options, capability)
            .map_err(|err| err.context(sqlweave_core::err!("parameters of {}", query.name)))?;
        let result = build_result(query, options, capability)
            .map_err(|err| err.context(sqlweave_core::err!("result of {}", query.name)))?;

        let constant_name = str::lower_first(&query.name);

        tracing::debug!(
            query = %query.name,
            %cmd,
            params = params.argument_pairs().len(),
            record_result = result.is_record(),
            "built statement"
        );

        Ok(Statement {
            cmd,
            comments: query.comments.clone(),
            method_name: query.name.clone(),
            field_name: format!("{constant_name}Stmt"),
            constant_name,
            sql: query.text.clone(),
            source_name: query.filename.clone(),
            params,
            result,
            table,
        })
    }
}

fn build_params(query: &def::Query, options: &Options, capability: Capability) -> Result<Value> {
    let fields = query
        .params
        .iter()
        .map(def::Field::build)
        .collect::<Result<Vec<_>>>()?;

    let limit = options.query_parameter_limit;

    match fields.len() {
        0 => Ok(Value::empty(capability)),
        1 if limit != Some(0) => Ok(Value::scalar(scalar_var(fields)?, capability)),
        len => {
            let record = Record::new(format!("{}Params", query.name), fields);
            let emit = limit.is_some_and(|limit| len > limit);

            Ok(Value::record(PARAMS_NAME, Arc::new(record), capability)
                .with_emit(emit)
                .with_emit_pointer(options.emit_params_struct_pointers))
        }
    }
}

fn build_result(query: &def::Query, options: &Options, capability: Capability) -> Result<Value> {
    let fields = query
        .columns
        .iter()
        .map(def::Field::build)
        .collect::<Result<Vec<_>>>()?;

    match fields.len() {
        0 => Ok(Value::empty(capability)),
        1 if !fields[0].is_embed() => Ok(Value::scalar(scalar_var(fields)?, capability)),
        _ => {
            let record = Record::new(format!("{}Row", query.name), fields);

            Ok(Value::record(ROW_NAME, Arc::new(record), capability)
                .with_emit_pointer(options.emit_result_struct_pointers))
        }
    }
}

/// Turns the only field of a parameter or result list into a variable.
fn scalar_var(fields: Vec<Field>) -> Result<Field> {
    let mut field = fields
        .into_iter()
        .next()
        .ok_or_else(|| Error::invalid_statement("expected exactly one field"))?;

    field.name = str::lower_first(&field.name);
    Ok(field)
}
