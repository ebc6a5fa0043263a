#[macro_use]
mod macros;

mod db_test;
pub use db_test::DbTest;

mod logging;

pub mod models;

mod setup;
pub use setup::{Setup, SetupFile, SetupMemory};

pub use std_util::*;
