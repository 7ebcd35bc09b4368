//! Utility for generating random passwords.
use passgen_core::Config;
use rand::Rng;

/// Numeric digits.
pub const DIGITS: &str = "0123456789";
/// Lowercase roman letters.
pub const LETTERS_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase roman letters.
pub const LETTERS_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Punctuation symbols.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Options for password generation.
///
/// The character set is composed in a fixed order: digits, then
/// letters (lowercase before uppercase), then symbols. Each output
/// position is drawn independently and uniformly from the composed
/// set; there is no guarantee that every enabled class appears.
///
/// Callers are responsible for validation. With no classes enabled
/// the output degenerates to an empty string.
#[derive(Debug, Clone)]
pub struct PasswordGen {
    length: usize,
    characters: Vec<&'static str>,
}

impl PasswordGen {
    /// Create a new password generator.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            characters: vec![],
        }
    }

    /// Length of the generated password.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if this generator is zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Use numeric digits.
    pub fn digits(mut self) -> Self {
        self.characters.push(DIGITS);
        self
    }

    /// Use lowercase and uppercase roman letters.
    pub fn letters(mut self) -> Self {
        self.characters.push(LETTERS_LOWER);
        self.characters.push(LETTERS_UPPER);
        self
    }

    /// Use punctuation symbols.
    pub fn symbols(mut self) -> Self {
        self.characters.push(SYMBOLS);
        self
    }

    /// The composed character set.
    pub fn charset(&self) -> String {
        self.characters.concat()
    }

    /// Generate a random password using the given source
    /// of randomness.
    pub fn one<R: Rng>(&self, rng: &mut R) -> String {
        let len = self.characters.iter().fold(0, |acc, s| acc + s.len());
        if len == 0 {
            return String::new();
        }
        let mut characters = Vec::with_capacity(len);
        for chars in &self.characters {
            let mut list = chars.chars().collect();
            characters.append(&mut list);
        }
        let mut password = String::with_capacity(self.length);
        for _ in 0..self.length {
            password.push(characters[rng.gen_range(0..len)]);
        }
        password
    }
}

impl From<&Config> for PasswordGen {
    fn from(config: &Config) -> Self {
        let mut generator =
            Self::new(config.length.unwrap_or_default() as usize);
        if config.digits {
            generator = generator.digits();
        }
        if config.letters {
            generator = generator.letters();
        }
        if config.symbols {
            generator = generator.symbols();
        }
        generator
    }
}
