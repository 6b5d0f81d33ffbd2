// The binary in main.rs drives `app::App`; the library target exposes the
// same module tree to integration tests and benchmarks.

pub mod app;
pub mod config;
pub mod list;
pub mod session;
pub mod store;
pub mod ui;
