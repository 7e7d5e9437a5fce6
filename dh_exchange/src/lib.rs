//! Two-party Diffie-Hellman key change over 64-bit integers.
//!
//! Educational demo only: no prime generation, no constant-time arithmetic,
//! no authentication of the exchanged public values.

pub mod crypto;
pub mod error;
pub mod exchange;
pub mod number_theory;
pub mod party;
pub mod primality;
pub mod session;

pub use crypto::diffie_hellman_algorithm::{DhParameters, DiffieHellman};
pub use crypto::key_exchange_traits::KeyExchangeAlgorithm;
pub use error::{DhError, ValidationError};
pub use exchange::{ExchangeOutcome, run_exchange};
pub use party::{Party, ValidationPolicy};
pub use session::{Session, SessionConfig};
