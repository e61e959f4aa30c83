#![deny(unsafe_code)]

pub mod routes;

pub use routes::{AppState, router, serve};
