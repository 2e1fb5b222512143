//! Document integration tests, organized by concern.

mod document_tests;
