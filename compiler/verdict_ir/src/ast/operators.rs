//! Operator and unit enums shared by the AST and the instruction set.

use std::fmt;

/// Comparison operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
}

impl CompareOp {
    /// Canonical source spelling.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::StrictEq => "===",
            Self::StrictNotEq => "!==",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
        }
    }

    /// Operand name in the instruction wire format.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Eq => "EQ",
            Self::NotEq => "NE",
            Self::StrictEq => "STRICT_EQ",
            Self::StrictNotEq => "STRICT_NE",
            Self::Gt => "GT",
            Self::GtEq => "GE",
            Self::Lt => "LT",
            Self::LtEq => "LE",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Some(match name {
            "EQ" => Self::Eq,
            "NE" => Self::NotEq,
            "STRICT_EQ" => Self::StrictEq,
            "STRICT_NE" => Self::StrictNotEq,
            "GT" => Self::Gt,
            "GE" => Self::GtEq,
            "LT" => Self::Lt,
            "LE" => Self::LtEq,
            _ => return None,
        })
    }
}

/// Arithmetic operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

impl ArithOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        }
    }

    /// Operator name used in evaluation errors and the wire format.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "subtract",
            Self::Mul => "multiply",
            Self::Div => "divide",
            Self::Mod => "modulo",
        }
    }

    /// Higher number = binds less tightly. See [`crate::Expr::precedence`].
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 3,
            Self::Add | Self::Sub => 4,
        }
    }
}

/// Prefix operators other than `NOT`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-x`
    Minus,
    /// `!x`
    Bang,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Minus => "-",
            Self::Bang => "!",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MembershipOp {
    /// `item IN collection`
    In,
    /// `collection CONTAINS item`
    Contains,
}

impl MembershipOp {
    pub const fn as_keyword(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Contains => "CONTAINS",
        }
    }
}

/// Direction of a relative date.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    /// `3 days ago`
    Ago,
    /// `3 days from now`
    FromNow,
}

impl Direction {
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Ago => "ago",
            Self::FromNow => "from_now",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "ago" => Some(Self::Ago),
            "from_now" => Some(Self::FromNow),
            _ => None,
        }
    }

    pub const fn as_source(self) -> &'static str {
        match self {
            Self::Ago => "ago",
            Self::FromNow => "from now",
        }
    }
}

/// Units accepted in duration literals, largest first.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum DurationUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 8] = [
        Self::Years,
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Milliseconds,
    ];

    /// Unit named by a source word, singular or plural, any case.
    pub fn from_word(word: &str) -> Option<Self> {
        let lower = word.to_ascii_lowercase();
        let stem = lower.strip_suffix('s').unwrap_or(&lower);
        Some(match stem {
            "year" => Self::Years,
            "month" => Self::Months,
            "week" => Self::Weeks,
            "day" => Self::Days,
            "hour" => Self::Hours,
            "minute" => Self::Minutes,
            "second" => Self::Seconds,
            "millisecond" => Self::Milliseconds,
            _ => return None,
        })
    }

    /// Plural lowercase name, used on the wire and as the `Duration` field name.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Years => "years",
            Self::Months => "months",
            Self::Weeks => "weeks",
            Self::Days => "days",
            Self::Hours => "hours",
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
            Self::Milliseconds => "milliseconds",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.wire_name() == name)
    }

    /// Source word for `amount` of this unit: `1 day`, `2 days`.
    pub fn word_for(self, amount: i64) -> &'static str {
        let plural = self.wire_name();
        if amount.abs() == 1 {
            &plural[..plural.len() - 1]
        } else {
            plural
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
