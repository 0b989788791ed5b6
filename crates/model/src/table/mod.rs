//! Plain data describing one table: what a `CREATE TABLE` statement is built from.

pub mod column;
pub mod definition;
pub mod foreign_key;
pub mod options;
