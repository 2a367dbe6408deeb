use super::{BackQuoted, Comma, Formatter, Period, Quoted, ToGo};

use sqlweave_core::{config::SqlDriver, schema::Identifier};

/// How a copy-from target table is spelled for the driver's bulk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// `pgx.Identifier{"schema", "table"}` takes a list of components
    Postgresql,

    /// `LOAD DATA` takes a dotted, backtick-quoted name
    Mysql,
}

impl Flavor {
    pub fn for_driver(driver: SqlDriver) -> Flavor {
        match driver {
            SqlDriver::GoSqlDriverMysql => Flavor::Mysql,
            SqlDriver::LibPq | SqlDriver::PgxV4 | SqlDriver::PgxV5 => Flavor::Postgresql,
        }
    }

    /// Renders the table identifier, skipping empty components.
    pub fn table_identifier(self, table: &Identifier) -> String {
        match self {
            Flavor::Postgresql => Formatter::render(TableList(table)),
            Flavor::Mysql => Formatter::render(Period(table.parts().map(BackQuoted))),
        }
    }
}

struct TableList<'a>(&'a Identifier);

impl ToGo for TableList<'_> {
    fn to_go(self, f: &mut Formatter<'_>) {
        fmt!(f, "[]string{" Comma(self.0.parts().map(Quoted)) "}");
    }
}
