//! JS-facing API

pub mod wasm;
