pub(crate) mod miller_rabin;
pub use miller_rabin::MillerRabinTest;

/// Primality test over the 64-bit values the exchange works with.
pub trait PrimalityTest {
    /// `true` if `n` is prime. Values below 2 are never prime.
    fn is_prime(&self, n: i64) -> bool {
        if n < 2 {
            return false;
        }
        self.run_test(n)
    }

    /// The test itself, called only with `n >= 2`.
    fn run_test(&self, n: i64) -> bool;
}
