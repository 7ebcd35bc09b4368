use anyhow::Result;
use passgen_core::Config;
use passgen_generator::{
    PasswordGen, DIGITS, LETTERS_LOWER, LETTERS_UPPER, SYMBOLS,
};
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn generate_valid_configs() -> Result<()> {
    let configs = [
        Config {
            length: Some(6),
            digits: true,
            letters: false,
            symbols: false,
        },
        Config {
            length: Some(12),
            digits: false,
            letters: true,
            symbols: false,
        },
        Config {
            length: Some(24),
            digits: true,
            letters: true,
            symbols: true,
        },
    ];
    for config in &configs {
        let generator: PasswordGen = config.into();
        let charset = generator.charset();
        let password = generator.one(&mut passgen_core::rng());
        assert_eq!(config.length.unwrap() as usize, password.len());
        assert!(password.chars().all(|c| charset.contains(c)));
    }
    Ok(())
}

#[test]
fn generate_symbols_only() -> Result<()> {
    let generator = PasswordGen::new(16).symbols();
    let password = generator.one(&mut passgen_core::rng());
    assert_eq!(16, password.len());
    assert!(password.chars().all(|c| SYMBOLS.contains(c)));
    Ok(())
}

#[test]
fn generate_charset_composition_order() {
    let generator = PasswordGen::new(8).digits().letters().symbols();
    assert_eq!(
        [DIGITS, LETTERS_LOWER, LETTERS_UPPER, SYMBOLS].concat(),
        generator.charset()
    );
}

#[test]
fn generate_same_seed_same_output() {
    let generator = PasswordGen::new(20).digits().letters().symbols();
    let first = generator.one(&mut SmallRng::seed_from_u64(7));
    let second = generator.one(&mut SmallRng::seed_from_u64(7));
    assert_eq!(first, second);
}

#[test]
fn generate_is_nondeterministic() {
    // Statistical: with a large charset and 32 positions two
    // independent draws collide with negligible probability.
    let generator = PasswordGen::new(32).digits().letters().symbols();
    let first = generator.one(&mut passgen_core::rng());
    let second = generator.one(&mut passgen_core::rng());
    assert_ne!(first, second);
}

#[test]
fn generate_empty_charset_degenerates() {
    let generator = PasswordGen::new(12);
    assert_eq!("", generator.one(&mut passgen_core::rng()));
}
