use crate::error::DhError;

/// Rejects a zero or negative modulus before any modular arithmetic runs.
pub fn check_modulus(modulus: i64) -> Result<i64, DhError> {
    if modulus <= 0 {
        return Err(DhError::InvalidModulus(modulus));
    }
    Ok(modulus)
}

/// `a * b mod modulus`, with the product widened to 128 bits.
///
/// Both factors must already lie in `[0, modulus - 1]`.
pub fn mul_mod(a: i64, b: i64, modulus: i64) -> i64 {
    ((a as i128 * b as i128) % modulus as i128) as i64
}

/// Square-and-multiply: `base^exponent mod modulus`.
///
/// Products are computed in `i128`, so every positive `i64` modulus gives an
/// exact result in `[0, modulus - 1]`. A negative base is reduced with the
/// Euclidean remainder. An exponent `<= 0` never enters the loop and yields
/// `1 mod modulus`.
///
/// # Panics
///
/// Panics if `modulus <= 0`. Use [`checked_mod_pow`] for unchecked inputs.
pub fn mod_pow(base: i64, exponent: i64, modulus: i64) -> i64 {
    assert!(modulus > 0, "modulus must be positive, got {modulus}");

    let mut base = base.rem_euclid(modulus);
    let mut exp = exponent;
    let mut result = 1 % modulus;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    result
}

/// [`mod_pow`] behind a modulus check.
pub fn checked_mod_pow(base: i64, exponent: i64, modulus: i64) -> Result<i64, DhError> {
    let modulus = check_modulus(modulus)?;
    Ok(mod_pow(base, exponent, modulus))
}
