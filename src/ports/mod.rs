// src/ports/mod.rs

pub use console::Console;

pub mod console;
