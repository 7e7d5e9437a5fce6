use dh_exchange::{DhError, Session, SessionConfig, ValidationError, ValidationPolicy};

const BANNER: &str = "Diffie-Hellman-Key-Change
enables secure key sharing between the two parties,

Prime(p) : A prime number with a relatively large public.
Generator(g) : [2, p - 1] a number is selected in the range.
Private(a ve b) : [2, p - 2] randomly selected numbers in the interval.
";

fn run(input: &str, config: SessionConfig) -> (Result<dh_exchange::ExchangeOutcome, DhError>, String) {
    let mut session = Session::new(input.as_bytes(), Vec::new(), config);
    let result = session.run();
    (result, String::from_utf8(session.into_output()).unwrap())
}

#[test]
fn test_full_transcript() {
    let (result, output) = run("23\n5\n6\n15\n", SessionConfig::default());

    let expected = format!(
        "{BANNER}\nPUBLIC PRIME: PUBLIC GENERATOR: PRIVATE ALICE: PRIVATE BOB: \n\
         \nAlice - Public Gen-Key: 5  |  Public Prime-Number: 23  |  Secret Key: 6\n\
         \nBob - Public Gen-Key: 5  |  Public Prime-Number: 23  |  Secret Key: 15\n\
         \nAlice Result: 2\nBob Result: 2\n"
    );
    assert_eq!(output, expected);
    assert!(result.unwrap().agreed());
}

#[test]
fn test_non_numeric_input() {
    let (result, output) = run("23\n5\nsix\n15\n", SessionConfig::default());

    assert!(matches!(
        result,
        Err(DhError::InputParse { field: "Alice's private key", .. })
    ));
    assert!(!output.contains("Result"));
}

#[test]
fn test_out_of_range_integer_is_a_parse_error() {
    let (result, _) = run("99999999999999999999 5 6 15", SessionConfig::default());
    assert!(matches!(result, Err(DhError::InputParse { field: "public prime", .. })));
}

#[test]
fn test_input_ends_early() {
    let (result, _) = run("23\n5\n", SessionConfig::default());
    assert!(matches!(
        result,
        Err(DhError::UnexpectedEof { field: "Alice's private key" })
    ));
}

#[test]
fn test_zero_prime_rejected_before_parties() {
    let (result, output) = run("0\n5\n6\n15\n", SessionConfig::default());

    assert!(matches!(result, Err(DhError::InvalidModulus(0))));
    assert!(!output.contains("Public Gen-Key"));
}

#[test]
fn test_permissive_accepts_out_of_range_values() {
    let (result, output) = run("24\n30\n-3\n1\n", SessionConfig::default());

    assert!(result.is_ok());
    assert!(output.contains("Alice - Public Gen-Key: 30  |  Public Prime-Number: 24  |  Secret Key: -3"));
}

#[test]
fn test_strict_rejects_composite_prime() {
    let config = SessionConfig {
        policy: ValidationPolicy::Strict,
        ..Default::default()
    };
    let (result, output) = run("24\n5\n6\n15\n", config);

    match result {
        Err(DhError::Validation(e)) => assert_eq!(e, ValidationError::NotPrime(24)),
        other => panic!("expected a validation error, got {other:?}"),
    }
    assert!(!output.contains("Public Gen-Key"));
    assert!(!output.contains("Result"));
}

#[test]
fn test_strict_rejects_generator_before_printing() {
    let config = SessionConfig {
        policy: ValidationPolicy::Strict,
        ..Default::default()
    };
    let (result, output) = run("23 23 6 15", config);

    assert!(matches!(
        result,
        Err(DhError::Validation(ValidationError::GeneratorOutOfRange {
            generator: 23,
            prime: 23
        }))
    ));
    assert!(!output.contains("Public Gen-Key"));
}

#[test]
fn test_strict_rejects_bobs_secret() {
    let config = SessionConfig {
        policy: ValidationPolicy::Strict,
        ..Default::default()
    };
    let (result, output) = run("23 5 6 22", config);

    assert!(matches!(
        result,
        Err(DhError::Validation(ValidationError::PrivateExponentOutOfRange { value: 22, .. }))
    ));
    assert!(output.contains("Alice - Public Gen-Key: 5"));
    assert!(!output.contains("Bob - Public Gen-Key"));
}

#[test]
fn test_random_secrets_are_seeded_and_in_range() {
    let config = SessionConfig {
        random_secrets: true,
        seed: Some(0xAF1CE5EED),
        policy: ValidationPolicy::Strict,
        ..Default::default()
    };

    let (first, first_output) = run("97\n5\n", config.clone());
    let (second, second_output) = run("97\n5\n", config);

    let first = first.unwrap();
    assert!(first.agreed());
    assert_eq!(first, second.unwrap());
    assert_eq!(first_output, second_output);
    assert!(first_output.contains("PRIVATE ALICE: "));
}

#[test]
fn test_random_secrets_need_room() {
    let config = SessionConfig {
        random_secrets: true,
        seed: Some(1),
        ..Default::default()
    };
    let (result, _) = run("3\n2\n", config);
    assert!(matches!(result, Err(DhError::KeySpaceTooSmall(3))));
}
