use super::Argument;
use crate::serializer::{
    arg_list, escape, Addr, ArgList, Bind, Comma, Concat, Extract, Formatter, Period, PresenceGuard,
    PresenceRule, Quoted, TempVar, ToGo,
};

use sqlweave_core::{
    schema::{Field, Record, Type},
    Capability,
};
use std::sync::Arc;
use std_util::str;

/// One logical parameter or result of a query, with the policy deciding how
/// it is emitted.
///
/// A value is either empty (the query takes no parameters, or returns
/// nothing), a single scalar, or a record. All text fragments are computed
/// from the value on demand; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    pub kind: ValueKind,

    /// When false, a record is flattened into one argument per field instead
    /// of being passed as a single struct.
    pub emit: bool,

    /// Pass or return the record by pointer. Ignored for scalars.
    pub emit_pointer: bool,

    pub capability: Capability,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    Empty,

    /// The field's name is the Go variable name of the value.
    Scalar(Field),

    Record {
        /// Go variable name of the value
        name: String,

        /// Shared between queries returning the same shape
        record: Arc<Record>,
    },
}

impl Value {
    pub fn empty(capability: Capability) -> Value {
        Value {
            kind: ValueKind::Empty,
            emit: false,
            emit_pointer: false,
            capability,
        }
    }

    pub fn scalar(field: Field, capability: Capability) -> Value {
        Value {
            kind: ValueKind::Scalar(field),
            emit: false,
            emit_pointer: false,
            capability,
        }
    }

    /// A record value, emitted as a struct by default.
    pub fn record(name: impl Into<String>, record: Arc<Record>, capability: Capability) -> Value {
        Value {
            kind: ValueKind::Record {
                name: name.into(),
                record,
            },
            emit: true,
            emit_pointer: false,
            capability,
        }
    }

    pub fn with_emit(mut self, emit: bool) -> Value {
        self.emit = emit;
        self
    }

    pub fn with_emit_pointer(mut self, emit_pointer: bool) -> Value {
        self.emit_pointer = emit_pointer;
        self
    }

    /// Go variable name; empty for an empty value.
    pub fn name(&self) -> &str {
        match &self.kind {
            ValueKind::Empty => "",
            ValueKind::Scalar(field) => &field.name,
            ValueKind::Record { name, .. } => name,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.kind, ValueKind::Empty)
    }

    pub fn is_record(&self) -> bool {
        matches!(self.kind, ValueKind::Record { .. })
    }

    /// True when the record is passed as a dedicated struct.
    pub fn emit_record(&self) -> bool {
        self.emit
    }

    /// Only records are ever passed by pointer.
    pub fn is_pointer(&self) -> bool {
        self.emit_pointer && self.is_record()
    }

    pub fn as_record(&self) -> Option<&Record> {
        match &self.kind {
            ValueKind::Record { record, .. } => Some(record),
            _ => None,
        }
    }

    /// The Go type of the value: the scalar's type or the record's struct
    /// name.
    ///
    /// # Panics
    ///
    /// Panics on an empty value. Callers check [`Value::is_empty`] first.
    #[track_caller]
    pub fn resolved_type(&self) -> String {
        match &self.kind {
            ValueKind::Scalar(field) => field.ty.to_string(),
            ValueKind::Record { record, .. } => record.name.clone(),
            ValueKind::Empty => panic!("no type for empty value"),
        }
    }

    /// [`Value::resolved_type`], prefixed with `*` when passed by pointer.
    #[track_caller]
    pub fn defined_type(&self) -> String {
        let ty = self.resolved_type();
        if self.is_pointer() {
            format!("*{ty}")
        } else {
            ty
        }
    }

    /// Method arguments for this value.
    pub fn argument_pairs(&self) -> Vec<Argument> {
        match &self.kind {
            ValueKind::Empty => vec![],
            ValueKind::Record { record, .. } if !self.emit => record
                .fields
                .iter()
                .map(|f| Argument::new(escape(&str::lower_first(&f.name)), f.ty.to_string()))
                .collect(),
            _ => vec![Argument::new(escape(self.name()), self.defined_type())],
        }
    }

    /// `name type` pairs joined by commas, for method signatures.
    pub fn pair(&self) -> String {
        self.argument_pairs()
            .iter()
            .map(|arg| format!("{} {}", arg.name, arg.ty))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// The value as a slice argument, `name []Type`, for batch methods.
    pub fn slice_pair(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("{} []{}", self.name(), self.defined_type())
    }

    /// Expression returning the value from a method.
    pub fn return_name(&self) -> String {
        let name = escape(self.name());
        if self.is_pointer() {
            format!("&{name}")
        } else {
            name.into_owned()
        }
    }

    /// The Go expression reading `field` from this value.
    pub fn variable_for_field(&self, field: &Field) -> String {
        match &self.kind {
            ValueKind::Record { name, .. } if self.emit => format!("{name}.{}", field.name),
            ValueKind::Record { .. } => str::lower_first(&field.name),
            ValueKind::Empty | ValueKind::Scalar(_) => self.name().to_string(),
        }
    }

    /// Record fields deduplicated by name, in first-occurrence order. Empty
    /// for non-record values.
    pub fn unique_fields(&self) -> Vec<&Field> {
        self.as_record()
            .map(Record::unique_fields)
            .unwrap_or_default()
    }

    /// Go type of `field`'s slot in the generated struct.
    ///
    /// The slot of an outer-joined embed is `sql.Null[T]` exactly when
    /// nullable embeds are emitted, so it always agrees with [`Value::scan`]
    /// and [`Value::nullable_embed_assignments`] for the same flag.
    pub fn field_type(&self, field: &Field, emit_nullable_embed: bool) -> Type {
        match field.nullable_embed_ref() {
            Some(_) if emit_nullable_embed => Type::null_of(field.ty.strip_null().clone()),
            Some(_) => field.ty.strip_null().clone(),
            None => field.ty.clone(),
        }
    }

    /// Fields of the generated struct, one per unique name. Empty for
    /// non-record values.
    pub fn struct_fields(&self, emit_nullable_embed: bool) -> Vec<Argument> {
        self.unique_fields()
            .into_iter()
            .map(|f| Argument::new(&f.name, self.field_type(f, emit_nullable_embed).to_string()))
            .collect()
    }

    /// Arguments passed to the driver when executing the query.
    ///
    /// Spread parameters are passed bare; the caller expands them into the
    /// query text and argument list.
    pub fn params(&self) -> String {
        match &self.kind {
            ValueKind::Empty => String::new(),
            ValueKind::Scalar(field) => {
                let name = escape(&field.name);
                arg_list(
                    self.capability,
                    [Bind {
                        ty: &field.ty,
                        spread: field.is_spread(),
                        expr: &*name,
                    }],
                )
            }
            ValueKind::Record { record, .. } => {
                let vars: Vec<String> = record
                    .fields
                    .iter()
                    .map(|f| escape(&self.variable_for_field(f)).into_owned())
                    .collect();

                arg_list(
                    self.capability,
                    record.fields.iter().zip(&vars).map(|(f, var)| Bind {
                        ty: &f.ty,
                        spread: f.is_spread(),
                        expr: var,
                    }),
                )
            }
        }
    }

    /// Destinations passed to `Scan`, one per selected column.
    ///
    /// With `emit_nullable_embed`, the columns of outer-joined embeds are
    /// scanned into temp vars (see [`Value::nullable_embed_temp_vars`])
    /// instead of the embedded struct.
    pub fn scan(&self, emit_nullable_embed: bool) -> String {
        let capability = self.capability;

        let (name, record) = match &self.kind {
            ValueKind::Empty => return String::new(),
            ValueKind::Scalar(field) => {
                return arg_list(
                    capability,
                    [Bind {
                        ty: &field.ty,
                        spread: false,
                        expr: Addr(field.name.as_str()),
                    }],
                )
            }
            ValueKind::Record { name, record } => (name.as_str(), record),
        };

        let mut out = vec![];

        for field in &record.fields {
            match &field.embed {
                Some(embed) if embed.is_nullable() && emit_nullable_embed => {
                    for embedded in embed.fields() {
                        let var = TempVar {
                            value: name,
                            field: &field.name,
                            embedded: &embedded.name,
                        };
                        out.push(scan_dest(capability, embedded, var));
                    }
                }
                Some(embed) => {
                    for embedded in embed.fields() {
                        let path = Period([name, field.name.as_str(), embedded.name.as_str()]);
                        out.push(scan_dest(capability, embedded, path));
                    }
                }
                None => {
                    let path = Period([name, field.name.as_str()]);
                    out.push(scan_dest(capability, field, path));
                }
            }
        }

        Formatter::render(ArgList(&out))
    }

    /// True when any record field is a spread parameter, in which case the
    /// query text and driver arguments are built at execution time.
    pub fn has_sqlc_slices(&self) -> bool {
        match &self.kind {
            ValueKind::Empty => false,
            ValueKind::Scalar(field) => field.is_spread(),
            ValueKind::Record { record, .. } => record.has_spread(),
        }
    }

    pub fn has_nullable_embed(&self, emit_nullable_embed: bool) -> bool {
        emit_nullable_embed
            && self
                .as_record()
                .is_some_and(|record| record.nullable_embeds().next().is_some())
    }

    /// Declarations of the temp vars nullable embeds are scanned into:
    /// `var iEmbedAuthorID sql.NullInt64`.
    pub fn nullable_embed_temp_vars(&self) -> Vec<String> {
        let Some(record) = self.as_record() else {
            return vec![];
        };

        let mut vars = vec![];

        for (field, embed) in record.nullable_embeds() {
            for embedded in embed.fields() {
                let var = TempVar {
                    value: self.name(),
                    field: &field.name,
                    embedded: &embedded.name,
                };
                let ty = embedded.ty.to_nullable();
                vars.push(Formatter::render(Concat(("var ", var, " ", &ty))));
            }
        }

        vars
    }

    /// Statements moving scanned temp vars into the nullable embed slots,
    /// using [`PresenceRule::AnyKey`].
    pub fn nullable_embed_assignments(&self) -> Vec<String> {
        self.nullable_embed_assignments_with(PresenceRule::AnyKey)
    }

    pub fn nullable_embed_assignments_with(&self, rule: PresenceRule) -> Vec<String> {
        let Some(record) = self.as_record() else {
            return vec![];
        };

        let name = self.name();
        let mut lines = vec![];

        for (field, embed) in record.nullable_embeds() {
            let guard = PresenceGuard {
                value: name,
                field: &field.name,
                embed,
                rule,
            };
            let slot = Period([name, field.name.as_str()]);

            lines.push(Formatter::render(Concat(("if ", guard, " {"))));
            lines.push(Formatter::render(Concat(("    ", slot, ".Valid = true"))));

            let slot = Period([name, field.name.as_str()]);
            let ty = field.ty.strip_null();
            lines.push(Formatter::render(Concat(("    ", slot, ".V = ", ty, "{"))));

            for embedded in embed.fields() {
                let value = Extract {
                    var: TempVar {
                        value: name,
                        field: &field.name,
                        embedded: &embedded.name,
                    },
                    ty: &embedded.ty,
                };
                lines.push(Formatter::render(Concat((
                    "        ",
                    embedded.name.as_str(),
                    ": ",
                    value,
                    ",",
                ))));
            }

            lines.push("    }".to_string());
            lines.push("}".to_string());
        }

        lines
    }

    /// Database column names backing the value.
    pub fn column_names(&self) -> Vec<&str> {
        match &self.kind {
            ValueKind::Empty => vec![],
            ValueKind::Scalar(field) => vec![field.db_name.as_str()],
            ValueKind::Record { record, .. } => {
                record.fields.iter().map(|f| f.db_name.as_str()).collect()
            }
        }
    }

    /// Column names as a Go string slice literal, preferring the unescaped
    /// original column names.
    pub fn column_names_as_go_slice(&self) -> String {
        let names: Vec<&str> = match &self.kind {
            ValueKind::Empty => vec![],
            ValueKind::Scalar(field) => vec![field.db_name.as_str()],
            ValueKind::Record { record, .. } => record.fields.iter().map(Field::column_name).collect(),
        };

        Formatter::render(Concat(("[]string{", Comma(names.into_iter().map(Quoted)), "}")))
    }

    /// Fields written by a MySQL copy-from, ignoring the emit policy. A scalar
    /// value is its own single field.
    pub fn copy_from_mysql_fields(&self) -> &[Field] {
        match &self.kind {
            ValueKind::Empty => &[],
            ValueKind::Scalar(field) => std::slice::from_ref(field),
            ValueKind::Record { record, .. } => &record.fields,
        }
    }
}

fn scan_dest(capability: Capability, field: &Field, path: impl ToGo) -> String {
    Formatter::render_for(
        capability,
        Bind {
            ty: &field.ty,
            spread: false,
            expr: Addr(path),
        },
    )
}
