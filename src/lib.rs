pub mod common;
pub mod frontend;

#[cfg(feature = "ssr")]
pub mod backend;
