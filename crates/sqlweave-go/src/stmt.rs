mod argument;
pub use argument::Argument;

mod builder;

mod command;
pub use command::Command;

mod statement;
pub use statement::Statement;

mod value;
pub use value::{Value, ValueKind};
