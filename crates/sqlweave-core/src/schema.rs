mod column;
pub use column::{Column, ColumnShape};

mod field;
pub use field::{Embed, Field};

mod identifier;
pub use identifier::Identifier;

mod record;
pub use record::Record;

mod ty;
pub use ty::{Nullable, Scalar, Type};
