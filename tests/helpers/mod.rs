#![allow(unused_imports, dead_code)]
pub mod role_helpers;
pub mod test_db;

pub use role_helpers::*;
pub use test_db::*;
