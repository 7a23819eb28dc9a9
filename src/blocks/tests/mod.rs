//! Unit tests for layout blocks.

mod interactive_tests;
mod section_tests;
