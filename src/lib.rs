pub mod conf;
pub mod core;
pub mod format;
pub mod interface;
pub mod query;
pub mod reference;
pub mod render;

#[cfg(feature = "testutil")]
pub mod testutil;
