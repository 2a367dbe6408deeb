pub mod config;
pub use config::Options;

pub mod def;

pub mod driver;
pub use driver::Capability;

mod error;
pub use error::Error;

pub mod schema;

/// A Result type alias that uses sqlweave's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
