use std::io::Write;

use crate::crypto::{DiffieHellman, KeyExchangeAlgorithm};
use crate::error::DhError;
use crate::party::Party;

/// Both public values and both sides' view of the shared secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExchangeOutcome {
    pub public_a: i64,
    pub public_b: i64,
    pub secret_a: i64,
    pub secret_b: i64,
}

impl ExchangeOutcome {
    /// `true` only when both parties derived the same number.
    pub fn agreed(&self) -> bool {
        self.secret_a == self.secret_b
    }

    /// Writes `<name> Result: <secret>` for each side.
    pub fn report<W: Write>(&self, party_a: &Party, party_b: &Party, out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{} Result: {}", party_a.name(), self.secret_a)?;
        writeln!(out, "{} Result: {}", party_b.name(), self.secret_b)?;
        Ok(())
    }
}

/// Runs the protocol once: each side publishes `g^x mod p`, then raises the
/// other side's public value to its own secret.
///
/// Parties with different primes or generators are not rejected. Their
/// secrets will usually differ and [`ExchangeOutcome::agreed`] says so.
pub fn run_exchange(party_a: &Party, party_b: &Party) -> Result<ExchangeOutcome, DhError> {
    let dh_a = DiffieHellman::new(party_a.parameters())?;
    let dh_b = DiffieHellman::new(party_b.parameters())?;

    if dh_a.params() != dh_b.params() {
        log::warn!(
            "{} and {} use different parameters ({:?} vs {:?}); shared secrets will not match in general",
            party_a.name(),
            party_b.name(),
            dh_a.params(),
            dh_b.params()
        );
    }

    let public_a = dh_a.public_value(party_a.private_exponent());
    let public_b = dh_b.public_value(party_b.private_exponent());
    log::debug!("{} sends {}, {} sends {}", party_a.name(), public_a, party_b.name(), public_b);

    let secret_a = dh_a.compute_shared_secret(party_a.private_exponent(), public_b);
    let secret_b = dh_b.compute_shared_secret(party_b.private_exponent(), public_a);

    let outcome = ExchangeOutcome {
        public_a,
        public_b,
        secret_a,
        secret_b,
    };
    if outcome.agreed() {
        log::info!("Key change complete, both parties hold the same secret");
    } else {
        log::warn!("Derived secrets differ: {} vs {}", secret_a, secret_b);
    }
    Ok(outcome)
}
