//! Go value and binding fragments for generated query methods.
//!
//! A [`Statement`] is built once per query from the resolved description
//! produced by SQL analysis. Its parameter and result [`Value`]s then render
//! the argument lists, driver arguments, scan destinations and nullable-embed
//! materialization code the templates stitch together.

#[macro_use]
pub mod serializer;
pub use serializer::{Flavor, PresenceRule};

mod generate;
pub use generate::{Fragments, Generator};

pub mod stmt;
pub use stmt::{Argument, Command, Statement, Value, ValueKind};
