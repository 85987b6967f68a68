//! CSV output for extracted grants.
//!
//! Files have a `recipient,amount` header and one row per grant. Amounts are
//! written as plain decimals that read back to the same value (`500.0`,
//! `-1234.56`, `100000000000000000000.0`), never in exponent notation.

mod csv_export;

pub use csv_export::{read_csv, read_csv_path, write_csv, write_csv_path};

/// Header row of every file written by [`write_csv`].
pub const CSV_HEADER: [&str; 2] = ["recipient", "amount"];
