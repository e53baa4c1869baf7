//! Library wrapper around the `lodestone` CLI implementation.
//!
//! The CLI is primarily exercised via its binary (`src/main.rs`) and integration tests.
//! Compiling the binary crate root as a module here lets `cargo test -p lodestone-cli --lib`
//! typecheck the CLI code without building the binary test suite.
//!
//! Note: `fn main()` inside `main.rs` is just another function when compiled as a module.

#[allow(dead_code)]
#[path = "main.rs"]
mod main_bin;
