use pretty_assertions::assert_eq;
use sqlweave_core::{
    config::{SqlDriver, SqlPackage},
    def::Request,
    schema::{ColumnShape, Identifier, Type},
};
use std_util::{assert_err, assert_ok};

const REQUEST: &str = r#"{
    "options": {
        "sql_package": "pgx/v5",
        "emit_embed_nullable_left_join": true
    },
    "queries": [
        {
            "name": "ListPostsWithAuthors",
            "cmd": ":many",
            "text": "SELECT ...",
            "filename": "query.sql",
            "columns": [
                { "name": "ID", "db_name": "id", "type": "int64" },
                { "db_name": "author_id", "type": "int64" },
                {
                    "name": "Author",
                    "type": "Author",
                    "embed": {
                        "nullable": true,
                        "primary_keys": ["ID"],
                        "fields": [
                            { "name": "ID", "db_name": "id", "type": "int64" },
                            { "name": "Name", "db_name": "name", "type": "string" }
                        ]
                    }
                }
            ]
        },
        {
            "name": "CopyAuthors",
            "cmd": ":copyfrom",
            "text": "INSERT INTO ...",
            "params": [
                { "name": "Tags", "db_name": "tags", "type": "[]string", "is_array": true },
                { "name": "Ids", "db_name": "ids", "type": "[]int64", "is_sqlc_slice": true }
            ],
            "insert_into_table": { "schema": "public", "name": "authors" }
        }
    ]
}"#;

#[test]
fn parse_request() {
    let request = assert_ok!(Request::from_json(REQUEST));

    assert_eq!(request.options.sql_package, SqlPackage::PgxV5);
    assert_eq!(assert_ok!(request.options.driver()), SqlDriver::PgxV5);
    assert!(request.options.emit_embed_nullable_left_join);
    assert_eq!(request.options.query_parameter_limit, Some(1));
    assert_eq!(request.queries.len(), 2);

    assert_eq!(
        request.queries[1].insert_into_table,
        Some(Identifier::table("authors").with_schema("public"))
    );
}

#[test]
fn build_fields() {
    let request = assert_ok!(Request::from_json(REQUEST));
    let columns = &request.queries[0].columns;

    let id = assert_ok!(columns[0].build());
    assert_eq!(id.name, "ID");
    assert_eq!(id.ty, Type::parse("int64"));

    // Go name derived from the column name
    let author_id = assert_ok!(columns[1].build());
    assert_eq!(author_id.name, "AuthorId");

    let author = assert_ok!(columns[2].build());
    assert_eq!(author.ty, Type::record("Author"));
    let embed = author.nullable_embed_ref().unwrap();
    assert_eq!(embed.fields().len(), 2);
    assert_eq!(embed.primary_keys().next().unwrap().name, "ID");

    let params = &request.queries[1].params;
    // Array binding follows the Go type alone
    let tags = assert_ok!(params[0].build());
    assert_eq!(tags.column.shape, ColumnShape::Scalar);
    assert!(tags.ty.is_list());
    assert_eq!(assert_ok!(params[1].build()).column.shape, ColumnShape::Spread);
}

#[test]
fn nullable_embed_without_keys_fails_to_build() {
    let src = REQUEST.replace(r#""primary_keys": ["ID"],"#, "");
    let request = assert_ok!(Request::from_json(&src));

    let err = assert_err!(request.queries[0].columns[2].build());
    assert!(err.is_missing_primary_key());
}

#[test]
fn unnamed_field_is_rejected() {
    let src = r#"{ "queries": [{ "name": "Q", "cmd": ":one", "text": "",
        "columns": [{ "type": "int64" }] }] }"#;
    let request = assert_ok!(Request::from_json(src));

    let err = assert_err!(request.queries[0].columns[0].build());
    assert!(err.is_invalid_statement());
}

#[test]
fn malformed_json_is_an_error() {
    assert_err!(Request::from_json("{ \"queries\": 1 }"));
}
