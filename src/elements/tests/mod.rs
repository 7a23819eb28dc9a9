//! Unit tests for interactive elements.

mod button_tests;
mod select_tests;
mod wire_shape_tests;
