use super::{Embed, Field};

use indexmap::IndexMap;

/// A generated Go struct: a name and its ordered fields.
///
/// Records built from joins may repeat a field name. The repeats are kept so
/// that scans still line up with the selected columns; [`Record::unique_fields`]
/// is what struct definitions are emitted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Record {
        Record {
            name: name.into(),
            fields,
        }
    }

    /// Fields deduplicated by name, keeping the first occurrence in order.
    pub fn unique_fields(&self) -> Vec<&Field> {
        let mut seen = IndexMap::with_capacity(self.fields.len());

        for field in &self.fields {
            seen.entry(field.name.as_str()).or_insert(field);
        }

        seen.into_values().collect()
    }

    pub fn has_spread(&self) -> bool {
        self.fields.iter().any(Field::is_spread)
    }

    /// Fields that embed an outer-joined table.
    pub fn nullable_embeds(&self) -> impl Iterator<Item = (&Field, &Embed)> + '_ {
        self.fields
            .iter()
            .filter_map(|field| field.nullable_embed_ref().map(|embed| (field, embed)))
    }
}
