use pretty_assertions::assert_eq;
use sqlweave_core::{
    schema::{Column, Field, Record},
    Capability,
};
use sqlweave_go::{Argument, Value};
use std::sync::Arc;

fn arg(name: &str, ty: &str) -> Argument {
    Argument {
        name: name.to_string(),
        ty: ty.to_string(),
    }
}

fn params_record() -> Arc<Record> {
    Arc::new(Record::new(
        "ListAuthorsParams",
        vec![
            Field::new("AuthorID", "author_id", "int64"),
            Field::new("Name", "name", "string"),
            Field::new("Bio", "bio", "sql.NullString"),
            Field::new("Tags", "tags", "[]string"),
        ],
    ))
}

fn row(fields: Vec<Field>, capability: Capability) -> Value {
    Value::record("i", Arc::new(Record::new("ListAuthorsRow", fields)), capability)
}

#[test]
fn emitted_record_is_one_argument() {
    let value = Value::record("arg", params_record(), Capability::LIB_PQ);

    assert_eq!(value.argument_pairs(), [arg("arg", "ListAuthorsParams")]);
    assert_eq!(value.pair(), "arg ListAuthorsParams");

    let value = value.with_emit_pointer(true);
    assert_eq!(value.argument_pairs(), [arg("arg", "*ListAuthorsParams")]);
}

#[test]
fn flattened_record_is_one_argument_per_field() {
    let value = Value::record("arg", params_record(), Capability::LIB_PQ).with_emit(false);

    assert_eq!(
        value.argument_pairs(),
        [
            arg("authorID", "int64"),
            arg("name", "string"),
            arg("bio", "sql.NullString"),
            arg("tags", "[]string"),
        ]
    );
    assert_eq!(
        value.pair(),
        "authorID int64,name string,bio sql.NullString,tags []string"
    );

    // Pointers only apply to emitted structs
    let value = value.with_emit_pointer(true);
    assert_eq!(value.argument_pairs()[0], arg("authorID", "int64"));
}

#[test]
fn flattened_arguments_escape_keywords() {
    let record = Record::new(
        "Params",
        vec![
            Field::new("Type", "type", "string"),
            Field::new("Range", "range", "int32"),
        ],
    );
    let value = Value::record("arg", Arc::new(record), Capability::PGX).with_emit(false);

    assert_eq!(value.pair(), "type_ string,range_ int32");
    assert_eq!(value.params(), "type_,range_");
}

#[test]
fn params_of_emitted_record() {
    let value = Value::record("arg", params_record(), Capability::LIB_PQ);

    assert_eq!(
        value.params(),
        "\narg.AuthorID,\narg.Name,\narg.Bio,\npq.Array(arg.Tags),\n"
    );
}

#[test]
fn params_of_flattened_record() {
    let value = Value::record("arg", params_record(), Capability::PGX).with_emit(false);

    assert_eq!(value.params(), "\nauthorID,\nname,\nbio,\ntags,\n");
}

#[test]
fn three_entries_stay_inline() {
    let value = row(
        vec![
            Field::new("A", "a", "int64"),
            Field::new("B", "b", "string"),
            Field::new("C", "c", "bool"),
        ],
        Capability::LIB_PQ,
    );

    assert_eq!(value.scan(false), "&i.A,&i.B,&i.C");

    let value = row(
        vec![
            Field::new("A", "a", "int64"),
            Field::new("B", "b", "string"),
            Field::new("C", "c", "bool"),
            Field::new("D", "d", "float64"),
        ],
        Capability::LIB_PQ,
    );

    assert_eq!(value.scan(false), "\n&i.A,\n&i.B,\n&i.C,\n&i.D,\n");
}

#[test]
fn lists_wrapped_the_same_way_in_params_and_scan() {
    let fields = vec![
        Field::new("ID", "id", "int64"),
        Field::new("Tags", "tags", "[]string"),
        Field::new("Avatar", "avatar", "[]byte"),
    ];

    let lib_pq = row(fields.clone(), Capability::LIB_PQ);
    assert_eq!(lib_pq.params(), "i.ID,pq.Array(i.Tags),i.Avatar");
    assert_eq!(lib_pq.scan(false), "&i.ID,pq.Array(&i.Tags),&i.Avatar");

    let pgx = row(fields, Capability::PGX);
    assert_eq!(pgx.params(), "i.ID,i.Tags,i.Avatar");
    assert_eq!(pgx.scan(false), "&i.ID,&i.Tags,&i.Avatar");
}

#[test]
fn spread_params_are_not_wrapped() {
    let record = Record::new(
        "Params",
        vec![
            Field::new("Ids", "ids", "[]int64").with_column(Column::spread()),
            Field::new("Tags", "tags", "[]string"),
        ],
    );
    let value = Value::record("arg", Arc::new(record), Capability::LIB_PQ);

    assert!(value.has_sqlc_slices());
    assert_eq!(value.params(), "arg.Ids,pq.Array(arg.Tags)");
}

#[test]
fn scalar_value() {
    let value = Value::scalar(Field::new("tags", "tags", "[]string"), Capability::LIB_PQ);

    assert_eq!(value.argument_pairs(), [arg("tags", "[]string")]);
    assert_eq!(value.params(), "pq.Array(tags)");
    assert_eq!(value.scan(false), "pq.Array(&tags)");
    assert_eq!(value.resolved_type(), "[]string");
    assert_eq!(value.return_name(), "tags");
    assert!(!value.has_sqlc_slices());

    let value = Value::scalar(Field::new("id", "id", "int64"), Capability::LIB_PQ);
    assert_eq!(value.params(), "id");
    assert_eq!(value.scan(false), "&id");

    // Scalars are never passed by pointer
    let value = value.with_emit_pointer(true);
    assert_eq!(value.defined_type(), "int64");
    assert_eq!(value.return_name(), "id");
}

#[test]
fn empty_value() {
    let value = Value::empty(Capability::LIB_PQ);

    assert!(value.is_empty());
    assert!(value.argument_pairs().is_empty());
    assert_eq!(value.pair(), "");
    assert_eq!(value.slice_pair(), "");
    assert_eq!(value.params(), "");
    assert_eq!(value.scan(true), "");
    assert!(value.unique_fields().is_empty());
    assert!(value.column_names().is_empty());
    assert!(!value.has_sqlc_slices());
    assert!(!value.has_nullable_embed(true));
}

#[test]
#[should_panic(expected = "no type for empty value")]
fn empty_value_has_no_type() {
    Value::empty(Capability::LIB_PQ).resolved_type();
}

#[test]
fn defined_type_and_return_name() {
    let value = row(vec![Field::new("ID", "id", "int64")], Capability::PGX);
    assert_eq!(value.defined_type(), "ListAuthorsRow");
    assert_eq!(value.return_name(), "i");

    let value = value.with_emit_pointer(true);
    assert_eq!(value.defined_type(), "*ListAuthorsRow");
    assert_eq!(value.return_name(), "&i");
    assert_eq!(value.slice_pair(), "i []*ListAuthorsRow");
}

#[test]
fn variable_for_field() {
    let field = Field::new("AuthorID", "author_id", "int64");

    let value = Value::record("arg", params_record(), Capability::LIB_PQ);
    assert_eq!(value.variable_for_field(&field), "arg.AuthorID");

    let value = value.with_emit(false);
    assert_eq!(value.variable_for_field(&field), "authorID");
}

#[test]
fn unique_fields_drop_repeated_names() {
    let value = row(
        vec![
            Field::new("A", "a", "int64"),
            Field::new("B", "b", "string"),
            Field::new("A", "a", "int64"),
            Field::new("C", "c", "bool"),
        ],
        Capability::LIB_PQ,
    );

    let names: Vec<_> = value.unique_fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);

    // Every column is still scanned
    assert_eq!(value.scan(false), "\n&i.A,\n&i.B,\n&i.A,\n&i.C,\n");
}

#[test]
fn column_names() {
    let record = Record::new(
        "CopyParams",
        vec![
            Field::new("Order", "\"order\"", "int32").with_column(Column {
                original_name: Some("order".to_string()),
                ..Column::default()
            }),
            Field::new("Name", "name", "string"),
        ],
    );
    let value = Value::record("arg", Arc::new(record), Capability::PGX);

    assert_eq!(value.column_names(), ["\"order\"", "name"]);
    assert_eq!(value.column_names_as_go_slice(), r#"[]string{"order", "name"}"#);
    assert_eq!(value.copy_from_mysql_fields().len(), 2);

    let value = Value::scalar(Field::new("name", "name", "string"), Capability::PGX);
    assert_eq!(value.column_names_as_go_slice(), r#"[]string{"name"}"#);
    assert_eq!(value.copy_from_mysql_fields()[0].db_name, "name");
}

#[test]
fn fragments_are_deterministic() {
    let value = Value::record("arg", params_record(), Capability::LIB_PQ).with_emit(false);

    assert_eq!(value.params(), value.clone().params());
    assert_eq!(value.pair(), value.pair());
    assert_eq!(value.scan(true), value.scan(true));
}

#[test]
fn flattened_plural_initialism() {
    let record = Record::new(
        "Params",
        vec![
            Field::new("IDs", "ids", "[]int64"),
            Field::new("Name", "name", "string"),
        ],
    );
    let value = Value::record("arg", Arc::new(record), Capability::LIB_PQ).with_emit(false);

    assert_eq!(value.pair(), "ids []int64,name string");
    assert_eq!(value.params(), "pq.Array(ids),name");
}
