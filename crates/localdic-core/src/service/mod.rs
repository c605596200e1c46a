//! Business logic services (use cases).
//!
//! Services orchestrate store calls, set operations, and the spell service
//! restart. They depend on traits (ports) -- never on concrete
//! infrastructure implementations.

pub mod dictionary;
pub mod restart;
