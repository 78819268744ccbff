//! Library tests and fixtures

#[cfg(test)]
mod schema_tests;
