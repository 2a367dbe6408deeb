/// Column metadata carried by a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    /// The column name as written in the table definition, before any
    /// escaping. Preferred over the field's `db_name` when listing columns.
    pub original_name: Option<String>,

    pub shape: ColumnShape,
}

/// How many database values a column binds to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnShape {
    /// One value, possibly of a database array type
    #[default]
    Scalar,

    /// A variable number of values, expanded into the SQL text at execution
    /// time (`WHERE id IN (sqlc.slice('ids'))`). The driver binding for these
    /// is produced outside of the value fragments.
    Spread,
}

impl Column {
    pub fn spread() -> Column {
        Column {
            shape: ColumnShape::Spread,
            ..Column::default()
        }
    }

    pub fn is_spread(&self) -> bool {
        self.shape == ColumnShape::Spread
    }
}
