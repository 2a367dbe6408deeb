use crate::{driver::Capability, Error, Result};

use serde::Deserialize;

/// Generation options for one run.
///
/// Deserialized from the plugin request (JSON); every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Package the generated code imports to talk to the database.
    pub sql_package: SqlPackage,

    /// Driver used underneath `sql_package`. Derived from the package when
    /// unset.
    pub sql_driver: Option<SqlDriver>,

    /// Scan outer-joined embeds into `sql.Null[T]` slots instead of the bare
    /// struct.
    pub emit_embed_nullable_left_join: bool,

    /// Pass parameter structs by pointer.
    pub emit_params_struct_pointers: bool,

    /// Return result structs by pointer.
    pub emit_result_struct_pointers: bool,

    /// Up to this many parameters are passed as individual arguments; above it
    /// a dedicated parameter struct is emitted. `None` always flattens.
    pub query_parameter_limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum SqlPackage {
    #[default]
    #[serde(rename = "database/sql")]
    DatabaseSql,

    #[serde(rename = "pgx/v4")]
    PgxV4,

    #[serde(rename = "pgx/v5")]
    PgxV5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SqlDriver {
    #[serde(rename = "github.com/lib/pq")]
    LibPq,

    #[serde(rename = "github.com/jackc/pgx/v4")]
    PgxV4,

    #[serde(rename = "github.com/jackc/pgx/v5")]
    PgxV5,

    #[serde(rename = "github.com/go-sql-driver/mysql")]
    GoSqlDriverMysql,
}

impl Options {
    /// Resolves the effective driver, checking it against the package.
    pub fn driver(&self) -> Result<SqlDriver> {
        let derived = match self.sql_package {
            SqlPackage::DatabaseSql => SqlDriver::LibPq,
            SqlPackage::PgxV4 => SqlDriver::PgxV4,
            SqlPackage::PgxV5 => SqlDriver::PgxV5,
        };

        let Some(driver) = self.sql_driver else {
            return Ok(derived);
        };

        // pgx packages only work with their own driver
        if derived.is_pgx() && driver != derived {
            return Err(Error::invalid_configuration(format!(
                "sql_driver {driver:?} cannot be used with sql_package {:?}",
                self.sql_package
            )));
        }

        Ok(driver)
    }

    /// Capability of the effective driver.
    pub fn capability(&self) -> Result<Capability> {
        Ok(self.driver()?.capability())
    }

    pub fn validate(&self) -> Result<()> {
        self.driver().map(|_| ())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sql_package: SqlPackage::DatabaseSql,
            sql_driver: None,
            emit_embed_nullable_left_join: false,
            emit_params_struct_pointers: false,
            emit_result_struct_pointers: false,
            query_parameter_limit: Some(1),
        }
    }
}

impl SqlDriver {
    pub fn is_pgx(self) -> bool {
        matches!(self, SqlDriver::PgxV4 | SqlDriver::PgxV5)
    }

    pub fn capability(self) -> Capability {
        match self {
            SqlDriver::LibPq => Capability::LIB_PQ,
            SqlDriver::PgxV4 | SqlDriver::PgxV5 => Capability::PGX,
            SqlDriver::GoSqlDriverMysql => Capability::MYSQL,
        }
    }
}
