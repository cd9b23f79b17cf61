//! Formatter configuration.

use std::fmt;
use std::str::FromStr;

/// Where grouping parentheses are emitted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Parenthesization {
    /// Only where precedence or associativity requires them.
    #[default]
    Minimal,
    /// Around every compound operand.
    Explicit,
    /// Never. The output may parse differently; for display only.
    None,
}

/// Whitespace around operators and delimiters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Spacing {
    /// `a + b`, `f(a, b)`, `{a: 1}`
    #[default]
    Normal,
    /// `a+b`, `f(a,b)`, `{a:1}`; keyword operators keep their spaces
    Compact,
    /// `a + b`, `f( a, b )`, `{ a: 1 }`
    Verbose,
}

/// Formatter configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatConfig {
    pub parens: Parenthesization,
    pub spacing: Spacing,
}

impl FormatConfig {
    #[must_use]
    pub fn with_parens(mut self, parens: Parenthesization) -> Self {
        self.parens = parens;
        self
    }

    #[must_use]
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }
}

/// Unrecognized option value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownOption(pub String);

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option '{}'", self.0)
    }
}

impl std::error::Error for UnknownOption {}

impl FromStr for Parenthesization {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimal" => Ok(Parenthesization::Minimal),
            "explicit" => Ok(Parenthesization::Explicit),
            "none" => Ok(Parenthesization::None),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}

impl FromStr for Spacing {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Spacing::Normal),
            "compact" => Ok(Spacing::Compact),
            "verbose" => Ok(Spacing::Verbose),
            other => Err(UnknownOption(other.to_string())),
        }
    }
}
