use crate::crypto::key_exchange_traits::KeyExchangeAlgorithm;
use crate::error::DhError;
use crate::number_theory::{check_modulus, mod_pow};
use rand::{Rng, RngCore};

/// The public pair both parties agree on before the exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DhParameters {
    pub prime: i64,
    pub generator: i64,
}

pub struct DiffieHellman {
    params: DhParameters,
}

impl DiffieHellman {
    pub fn params(&self) -> &DhParameters {
        &self.params
    }
}

impl KeyExchangeAlgorithm for DiffieHellman {
    type Parameters = DhParameters;
    type PublicValue = i64;
    type SharedSecret = i64;

    /// Only the modulus is checked here; range and primality checks belong to
    /// the strict validation policy.
    fn new(params: Self::Parameters) -> Result<Self, DhError> {
        check_modulus(params.prime)?;
        Ok(Self { params })
    }

    fn public_value(&self, private_exponent: i64) -> i64 {
        mod_pow(self.params.generator, private_exponent, self.params.prime)
    }

    fn compute_shared_secret(&self, own_private_exponent: i64, other_public: i64) -> i64 {
        mod_pow(other_public, own_private_exponent, self.params.prime)
    }

    fn generate_private_key(&self, rng: &mut impl RngCore) -> Result<i64, DhError> {
        let p = self.params.prime;
        if p < 4 {
            return Err(DhError::KeySpaceTooSmall(p));
        }
        Ok(rng.gen_range(2..=p - 2))
    }
}
