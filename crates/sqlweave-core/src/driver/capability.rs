/// What the target database driver can do natively when binding parameters
/// and scanning rows.
///
/// Copied onto every value built for a statement; fragment
/// generation never consults global state to decide how to bind a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    /// When true, the driver encodes Go slices as database arrays on its own.
    /// Otherwise list-shaped values are passed through `array_adapter`.
    pub native_arrays: bool,

    /// Function wrapping a list-shaped value (or scan address) for drivers
    /// without native array support.
    pub array_adapter: &'static str,
}

impl Capability {
    /// `github.com/lib/pq` capabilities.
    pub const LIB_PQ: Self = Self {
        native_arrays: false,
        array_adapter: "pq.Array",
    };

    /// `github.com/jackc/pgx` (v4 and v5) capabilities.
    pub const PGX: Self = Self {
        native_arrays: true,
        ..Self::LIB_PQ
    };

    /// `github.com/go-sql-driver/mysql` capabilities.
    ///
    /// MySQL has no array type; list-shaped values only reach the driver as
    /// spread parameters, which are bound elsewhere.
    pub const MYSQL: Self = Self {
        native_arrays: false,
        ..Self::LIB_PQ
    };

    /// Returns `true` when a list-shaped value must go through the adapter.
    pub fn needs_array_adapter(&self) -> bool {
        !self.native_arrays
    }
}

impl Default for Capability {
    fn default() -> Self {
        Self::LIB_PQ
    }
}
