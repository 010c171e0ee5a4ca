//! Library surface of the Nestory CLI: logging setup shared between the
//! binary and tests.

pub mod logging;
