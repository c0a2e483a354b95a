pub mod config;
pub mod engine;
pub mod form;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
