use serde::Deserialize;

/// A possibly-qualified table name, `catalog.schema.name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Identifier {
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub name: Option<String>,
}

impl Identifier {
    pub fn table(name: impl Into<String>) -> Identifier {
        Identifier {
            name: Some(name.into()),
            ..Identifier::default()
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Identifier {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_catalog(mut self, catalog: impl Into<String>) -> Identifier {
        self.catalog = Some(catalog.into());
        self
    }

    /// The non-empty components, outermost first.
    pub fn parts(&self) -> impl Iterator<Item = &str> + '_ {
        [&self.catalog, &self.schema, &self.name]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
    }
}
