//! Testing infrastructure for zakboek integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative test setup
//! - `assertions`: Custom assertions for zakboek-specific validation
//! - `fixtures`: CHR statement and workbook fixture generation

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::TestWorld;
