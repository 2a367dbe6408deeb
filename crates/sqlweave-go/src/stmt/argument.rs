use serde::Serialize;

/// One parameter of a generated query method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,
}

impl Argument {
    pub(crate) fn new(name: impl Into<String>, ty: impl Into<String>) -> Argument {
        Argument {
            name: name.into(),
            ty: ty.into(),
        }
    }
}
