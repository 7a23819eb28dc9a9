//! Unit tests for messages, attachments and views.

mod attachment_tests;
mod message_tests;
