//! Unit tests for the C++ target emission core.

mod encoding_tests;
