//! Unit tests for composition objects.

mod composition_tests;
mod text_tests;
