use dh_exchange::{DhError, DhParameters, DiffieHellman, KeyExchangeAlgorithm, Party, run_exchange};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), DhError> {
    println!("=== Diffie-Hellman Key Change Demo ===");

    let params = DhParameters {
        prime: 9_223_372_036_854_775_783, // largest prime below 2^63
        generator: 5,
    };
    println!("Using p = {}, g = {}", params.prime, params.generator);

    // Seeded so the demo prints the same numbers every run.
    let dh_context = DiffieHellman::new(params)?;
    let mut rng_alice = StdRng::seed_from_u64(0xAF1CE5EED);
    let mut rng_bob = StdRng::seed_from_u64(0xB0B5EED);
    let a = dh_context.generate_private_key(&mut rng_alice)?;
    let b = dh_context.generate_private_key(&mut rng_bob)?;

    let mut stdout = std::io::stdout();
    let alice = Party::announce("Alice", params.prime, params.generator, a, &mut stdout)?;
    let bob = Party::announce("Bob", params.prime, params.generator, b, &mut stdout)?;

    let outcome = run_exchange(&alice, &bob)?;
    println!("\nAlice sends {}", outcome.public_a);
    println!("Bob sends   {}", outcome.public_b);
    outcome.report(&alice, &bob, &mut stdout)?;

    if outcome.agreed() {
        println!("\nSUCCESS: Shared secrets match!");
    } else {
        println!("\nERROR: Shared secrets DO NOT match!");
    }
    Ok(())
}
