//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move tree counts against published reference values
//! - `player.rs` - Legality, check, checkmate and stalemate
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests
