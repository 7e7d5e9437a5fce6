//! Console side of the demo: banner, prompts, party lines and results.
//!
//! The session reads from any `BufRead` and writes to any `Write`, so the
//! whole run can be driven from memory in tests.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::crypto::{DhParameters, DiffieHellman, KeyExchangeAlgorithm};
use crate::error::DhError;
use crate::exchange::{ExchangeOutcome, run_exchange};
use crate::number_theory::check_modulus;
use crate::party::{Party, ValidationPolicy};

pub const ALICE: &str = "Alice";
pub const BOB: &str = "Bob";

const BANNER: &str = "Diffie-Hellman-Key-Change
enables secure key sharing between the two parties,

Prime(p) : A prime number with a relatively large public.
Generator(g) : [2, p - 1] a number is selected in the range.
Private(a ve b) : [2, p - 2] randomly selected numbers in the interval.";

struct Field {
    prompt: &'static str,
    name: &'static str,
}

const PRIME: Field = Field {
    prompt: "PUBLIC PRIME: ",
    name: "public prime",
};
const GENERATOR: Field = Field {
    prompt: "PUBLIC GENERATOR: ",
    name: "public generator",
};
const PRIVATE_ALICE: Field = Field {
    prompt: "PRIVATE ALICE: ",
    name: "Alice's private key",
};
const PRIVATE_BOB: Field = Field {
    prompt: "PRIVATE BOB: ",
    name: "Bob's private key",
};

/// Values given up front skip their prompt; the rest are read from input.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    pub policy: ValidationPolicy,
    pub prime: Option<i64>,
    pub generator: Option<i64>,
    pub alice: Option<i64>,
    pub bob: Option<i64>,
    /// Draw missing private keys from `[2, p-2]` instead of reading them.
    pub random_secrets: bool,
    pub seed: Option<u64>,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            config,
            pending: VecDeque::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// One full run: banner, four values, both parties, both results.
    pub fn run(&mut self) -> Result<ExchangeOutcome, DhError> {
        writeln!(self.output, "{BANNER}")?;
        writeln!(self.output)?;

        let prime = self.obtain(&PRIME, self.config.prime)?;
        let generator = self.obtain(&GENERATOR, self.config.generator)?;
        let (alice_secret, bob_secret) = if self.config.random_secrets {
            self.random_secrets(DhParameters { prime, generator })?
        } else {
            (
                self.obtain(&PRIVATE_ALICE, self.config.alice)?,
                self.obtain(&PRIVATE_BOB, self.config.bob)?,
            )
        };
        writeln!(self.output)?;

        check_modulus(prime)?;
        let alice = self.introduce(ALICE, prime, generator, alice_secret)?;
        let bob = self.introduce(BOB, prime, generator, bob_secret)?;

        let outcome = run_exchange(&alice, &bob)?;
        outcome.report(&alice, &bob, &mut self.output)?;
        self.output.flush()?;
        Ok(outcome)
    }

    fn introduce(&mut self, name: &str, prime: i64, generator: i64, secret: i64) -> Result<Party, DhError> {
        // A rejected party never gets its line printed.
        let party = Party::validated(name, prime, generator, secret, self.config.policy)?;
        party.print_to(&mut self.output)?;
        log::info!("{} joined the key change", party.name());
        Ok(party)
    }

    fn random_secrets(&mut self, params: DhParameters) -> Result<(i64, i64), DhError> {
        let dh_context = DiffieHellman::new(params)?;
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let alice = match self.config.alice {
            Some(value) => value,
            None => dh_context.generate_private_key(&mut rng)?,
        };
        let bob = match self.config.bob {
            Some(value) => value,
            None => dh_context.generate_private_key(&mut rng)?,
        };
        self.echo(&PRIVATE_ALICE, alice)?;
        self.echo(&PRIVATE_BOB, bob)?;
        log::debug!("Drew private keys from [2, {}]", params.prime - 2);
        Ok((alice, bob))
    }

    fn obtain(&mut self, field: &Field, preset: Option<i64>) -> Result<i64, DhError> {
        if let Some(value) = preset {
            self.echo(field, value)?;
            return Ok(value);
        }

        write!(self.output, "{}", field.prompt)?;
        self.output.flush()?;

        let token = self
            .next_token()?
            .ok_or(DhError::UnexpectedEof { field: field.name })?;
        token.parse::<i64>().map_err(|_| DhError::InputParse {
            field: field.name,
            input: token,
        })
    }

    fn echo(&mut self, field: &Field, value: i64) -> Result<(), DhError> {
        writeln!(self.output, "{}{}", field.prompt, value)?;
        Ok(())
    }

    /// Whitespace separated, so several values may share one line.
    fn next_token(&mut self) -> std::io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(input: &str, config: SessionConfig) -> (Result<ExchangeOutcome, DhError>, String) {
        let mut session = Session::new(input.as_bytes(), Vec::new(), config);
        let result = session.run();
        (result, String::from_utf8(session.into_output()).unwrap())
    }

    #[test]
    fn test_tokens_may_share_a_line() {
        let (result, _) = run_with("23 5\n6 15\n", SessionConfig::default());
        assert_eq!(result.unwrap().secret_a, 2);
    }

    #[test]
    fn test_presets_skip_prompts() {
        let config = SessionConfig {
            prime: Some(23),
            generator: Some(5),
            alice: Some(6),
            bob: Some(15),
            ..Default::default()
        };
        let (result, output) = run_with("", config);

        assert!(result.unwrap().agreed());
        assert!(output.contains("PUBLIC PRIME: 23\nPUBLIC GENERATOR: 5\nPRIVATE ALICE: 6\nPRIVATE BOB: 15\n"));
    }

    #[test]
    fn test_parse_error_names_field() {
        let (result, _) = run_with("23\nfive\n", SessionConfig::default());
        match result {
            Err(DhError::InputParse { field, input }) => {
                assert_eq!(field, "public generator");
                assert_eq!(input, "five");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
