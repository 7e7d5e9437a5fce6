use crate::number_theory::{mod_pow, mul_mod};
use crate::primality::PrimalityTest;

/// These witnesses make Miller-Rabin exact for every n < 3.3 * 10^24.
const WITNESSES: [i64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Deterministic Miller-Rabin for `i64`.
pub struct MillerRabinTest;

impl PrimalityTest for MillerRabinTest {
    fn run_test(&self, n: i64) -> bool {
        for &p in &WITNESSES {
            if n == p {
                return true;
            }
            if n % p == 0 {
                return false;
            }
        }

        let upper = n - 1;
        let mut d = upper;
        let mut s = 0u32;
        while d % 2 == 0 {
            d /= 2;
            s += 1;
        }

        'witness: for &a in &WITNESSES {
            let mut x = mod_pow(a, d, n);
            if x == 1 || x == upper {
                continue;
            }
            for _ in 1..s {
                x = mul_mod(x, x, n);
                if x == upper {
                    continue 'witness;
                }
            }
            return false;
        }
        true
    }
}
