use rand::RngCore;

use crate::error::DhError;

pub trait KeyExchangeAlgorithm: Sized {
    type Parameters;
    type PublicValue;
    type SharedSecret;

    fn new(params: Self::Parameters) -> Result<Self, DhError>;

    /// The value a party sends in the clear: `g^private mod p`.
    fn public_value(&self, private_exponent: i64) -> Self::PublicValue;

    fn compute_shared_secret(
        &self,
        own_private_exponent: i64,
        other_public: Self::PublicValue,
    ) -> Self::SharedSecret;

    /// Draws a private exponent uniformly from `[2, p - 2]`.
    fn generate_private_key(&self, rng: &mut impl RngCore) -> Result<i64, DhError>;
}
