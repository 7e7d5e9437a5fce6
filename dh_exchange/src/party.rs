use std::fmt;
use std::io::Write;

use crate::crypto::DhParameters;
use crate::error::ValidationError;
use crate::primality::{MillerRabinTest, PrimalityTest};

/// How much checking a party's numbers get before the exchange.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationPolicy {
    /// Accept any value.
    #[default]
    Permissive,
    /// Require a prime modulus, `g` in `[2, p-1]` and the secret in `[2, p-2]`.
    Strict,
}

impl ValidationPolicy {
    pub fn check(&self, party: &Party) -> Result<(), ValidationError> {
        if *self == ValidationPolicy::Permissive {
            return Ok(());
        }

        let p = party.prime;
        if !MillerRabinTest.is_prime(p) {
            return Err(ValidationError::NotPrime(p));
        }
        if !(2..=p - 1).contains(&party.generator) {
            return Err(ValidationError::GeneratorOutOfRange {
                generator: party.generator,
                prime: p,
            });
        }
        if !(2..=p - 2).contains(&party.private_exponent) {
            return Err(ValidationError::PrivateExponentOutOfRange {
                name: party.name.clone(),
                value: party.private_exponent,
                prime: p,
            });
        }
        Ok(())
    }
}

/// One participant: the shared public pair plus its own secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Party {
    name: String,
    prime: i64,
    generator: i64,
    private_exponent: i64,
}

impl Party {
    pub fn new(name: impl Into<String>, prime: i64, generator: i64, private_exponent: i64) -> Self {
        Self {
            name: name.into(),
            prime,
            generator,
            private_exponent,
        }
    }

    /// Builds the party and prints its description to `out` right away.
    pub fn announce<W: Write>(
        name: impl Into<String>,
        prime: i64,
        generator: i64,
        private_exponent: i64,
        out: &mut W,
    ) -> std::io::Result<Self> {
        let party = Self::new(name, prime, generator, private_exponent);
        party.print_to(out)?;
        Ok(party)
    }

    /// Writes a blank line and then the description.
    pub fn print_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{self}")
    }

    /// Builds the party and runs it through `policy`.
    pub fn validated(
        name: impl Into<String>,
        prime: i64,
        generator: i64,
        private_exponent: i64,
        policy: ValidationPolicy,
    ) -> Result<Self, ValidationError> {
        let party = Self::new(name, prime, generator, private_exponent);
        policy.check(&party)?;
        Ok(party)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prime(&self) -> i64 {
        self.prime
    }

    pub fn generator(&self) -> i64 {
        self.generator
    }

    pub fn private_exponent(&self) -> i64 {
        self.private_exponent
    }

    pub fn parameters(&self) -> DhParameters {
        DhParameters {
            prime: self.prime,
            generator: self.generator,
        }
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Public Gen-Key: {}  |  Public Prime-Number: {}  |  Secret Key: {}",
            self.name, self.generator, self.prime, self.private_exponent
        )
    }
}
