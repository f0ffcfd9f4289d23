//! braillify library crate.
//!
//! Converts raster images into Unicode braille art, optionally colorized
//! with ANSI or IRC escapes. The binary in `main.rs` is a thin CLI over
//! [`render::render`]; this module exposes the internal components for
//! integration testing.

pub mod cli;
pub mod config;
pub mod output;
pub mod render;
pub mod source;
