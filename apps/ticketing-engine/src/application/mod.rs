//! Application Layer
//!
//! Use cases and port definitions. This layer wires domain services to the
//! external collaborators without knowing their implementations.

pub mod ports;
pub mod use_cases;
