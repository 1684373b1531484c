//! A lexer for generating tokens from a command line.

use core::fmt;
use core::str::Chars;

/// Variant of `Flag` token. Only store the identifier, not the hyphens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Flag<'a> {
    /// A short flag (e.g. -v).
    Short(char),

    /// A long flag (e.g. --verbose).
    Long(&'a str),
}

impl fmt::Display for Flag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Short(c) => write!(f, "-{c}"),
            Flag::Long(name) => write!(f, "--{name}"),
        }
    }
}

/// Defines a `Token` that has been read from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Token<'a> {
    /// Flag reference, with the value given inline after `=` if any.
    Flag(Flag<'a>, Option<&'a str>),

    /// Several letters after a single hyphen that do not form a bundle of boolean flags
    /// (e.g. `-x3`). Kept whole, hyphen included.
    Cluster(&'a str),

    /// Value (i.e. everything that is not a flag reference).
    Value(&'a str),

    /// The `--` separator. Everything after it is a value.
    Terminator,
}

impl Token<'_> {
    /// Evaluate if the token string is a flag reference, a cluster or the terminator.
    #[inline(always)]
    pub fn is_flag(input: &str) -> bool {
        input.len() > 1 && input.starts_with('-') && !Self::is_number(input)
    }

    /// Evaluate if the token string represents a number, optionally negative.
    pub fn is_number(input: &str) -> bool {
        let mut position_of_e = None;
        let mut have_seen_dot = false;
        let mut have_seen_digit = false;

        // Remove the front sign if any.
        let input = input.strip_prefix('-').unwrap_or(input);
        let bytes = input.as_bytes();

        for (i, c) in bytes.iter().enumerate() {
            match c {
                // Digits, OK.
                b'0'..=b'9' => have_seen_digit = true,

                // Exponential, OK if unique and after the first digit.
                b'e' | b'E' if position_of_e.is_none() && have_seen_digit => {
                    position_of_e = Some(i);
                }

                // Sign of the exponent.
                b'+' | b'-' if position_of_e.is_some_and(|pos| pos + 1 == i) => {}

                // Dot is valid if unique and before any exponential.
                b'.' if !have_seen_dot && position_of_e.is_none() => {
                    have_seen_dot = true;
                }

                _ => return false,
            }
        }

        if let Some(pos) = position_of_e {
            bytes[pos + 1..].iter().any(u8::is_ascii_digit)
        } else {
            have_seen_digit
        }
    }
}

/// Defines a lexer that streams tokens from the command line input.
///
/// A lexer acts like a forward iterator. The `bundles` predicate tells which short letters
/// may be grouped behind a single hyphen (e.g. `-ab` for `-a -b`).
#[derive(Clone, Debug)]
pub struct Tokens<'a, S, F> {
    argv: &'a [S],
    cursor: usize,
    literal: bool,
    pending: Option<Chars<'a>>,
    bundles: F,
}

impl<'a, S, F> Tokens<'a, S, F>
where
    S: AsRef<str>,
    F: Fn(char) -> bool,
{
    /// Create a new lexer from the command line input.
    pub fn new(argv: &'a [S], bundles: F) -> Self {
        Tokens {
            argv,
            cursor: 0,
            literal: false,
            pending: None,
            bundles,
        }
    }

    /// Take the next argument as the value of the previous flag, if it is a value.
    ///
    /// Flag references and the terminator are left in the stream. A hyphen followed by a digit
    /// always starts a value, even when the rest is not a number (e.g. `-5x`).
    pub fn next_value(&mut self) -> Option<&'a str> {
        if self.pending.is_some() {
            return None;
        }

        let argv: &'a [S] = self.argv;
        let arg = argv.get(self.cursor)?.as_ref();

        let dash_digit = arg
            .strip_prefix('-')
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c.is_ascii_digit());

        if self.literal || dash_digit || !Token::is_flag(arg) {
            self.cursor += 1;
            Some(arg)
        } else {
            None
        }
    }

    fn classify(&mut self, arg: &'a str) -> Token<'a> {
        if self.literal || !Token::is_flag(arg) {
            return Token::Value(arg);
        }

        if arg == "--" {
            self.literal = true;
            return Token::Terminator;
        }

        // Long flag, with or without an inline value.
        if let Some(name) = arg.strip_prefix("--") {
            return match name.split_once('=') {
                Some((name, value)) => Token::Flag(Flag::Long(name), Some(value)),
                None => Token::Flag(Flag::Long(name), None),
            };
        }

        let body = &arg[1..];
        let mut chars = body.chars();
        let first = chars.next().unwrap_or_default();
        let rest = chars.as_str();

        // Short flag, alone or with an inline value.
        if rest.is_empty() {
            return Token::Flag(Flag::Short(first), None);
        }

        if let Some(value) = rest.strip_prefix('=') {
            return Token::Flag(Flag::Short(first), Some(value));
        }

        // Bundle of boolean flags.
        if body.chars().all(&self.bundles) {
            self.pending = Some(chars);
            return Token::Flag(Flag::Short(first), None);
        }

        Token::Cluster(arg)
    }
}

impl<'a, S, F> Iterator for Tokens<'a, S, F>
where
    S: AsRef<str>,
    F: Fn(char) -> bool,
{
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(chars) = self.pending.as_mut() {
            if let Some(c) = chars.next() {
                if chars.as_str().is_empty() {
                    self.pending = None;
                }
                return Some(Token::Flag(Flag::Short(c), None));
            }
            self.pending = None;
        }

        let argv: &'a [S] = self.argv;
        let arg = argv.get(self.cursor)?.as_ref();
        self.cursor += 1;

        Some(self.classify(arg))
    }
}
