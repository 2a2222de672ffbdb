//! Unit tests for report export.
