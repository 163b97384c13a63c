use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{format_cents, parse_cents, Cents, ParseCentsError};

/// Comment stored when the user submits an entry without one.
pub const EMPTY_COMMENT_PLACEHOLDER: &str = "no comment";

/// Direction of an entry: credits increase the balance, debits decrease it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Credit,
    Debit,
}

impl Sign {
    /// The character that leads a serialized ledger line.
    pub fn as_char(self) -> char {
        match self {
            Sign::Credit => '+',
            Sign::Debit => '-',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Sign::Credit),
            '-' => Some(Sign::Debit),
            _ => None,
        }
    }

    /// Display label used in history output.
    pub fn label(self) -> &'static str {
        match self {
            Sign::Credit => "Income",
            Sign::Debit => "Expense",
        }
    }
}

/// One recorded transaction. Entries have no identity beyond their position
/// in the ledger sequence: no id, no timestamp.
///
/// Serialized line form: `<sign-char><amount>|<comment>`, e.g. `+100.00|salary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub sign: Sign,
    /// Amount in cents, always non-negative
    pub amount_cents: Cents,
    pub comment: String,
}

impl Entry {
    /// Create a new entry. A blank comment is replaced by the placeholder.
    pub fn new(sign: Sign, amount_cents: Cents, comment: impl Into<String>) -> Self {
        assert!(amount_cents >= 0, "Entry amount must be non-negative");
        let comment = comment.into();
        let comment = if comment.trim().is_empty() {
            EMPTY_COMMENT_PLACEHOLDER.to_string()
        } else {
            comment
        };
        Self {
            sign,
            amount_cents,
            comment,
        }
    }

    pub fn credit(amount_cents: Cents, comment: impl Into<String>) -> Self {
        Self::new(Sign::Credit, amount_cents, comment)
    }

    pub fn debit(amount_cents: Cents, comment: impl Into<String>) -> Self {
        Self::new(Sign::Debit, amount_cents, comment)
    }

    /// Serialize to the ledger line form (without the trailing newline).
    pub fn to_line(&self) -> String {
        format!(
            "{}{}|{}",
            self.sign.as_char(),
            format_cents(self.amount_cents),
            self.comment
        )
    }

    /// Parse a ledger line: split at the first `|`, read the sign character,
    /// then the decimal amount.
    pub fn parse(line: &str) -> Result<Self, ParseEntryError> {
        let (head, comment) = line
            .split_once('|')
            .ok_or(ParseEntryError::MissingSeparator)?;

        let mut chars = head.chars();
        let sign = chars
            .next()
            .and_then(Sign::from_char)
            .ok_or(ParseEntryError::InvalidSign)?;

        let amount_cents = parse_cents(chars.as_str())?;

        Ok(Self::new(sign, amount_cents, comment))
    }

    /// Human-readable label for history display, e.g.
    /// `Income: +100.00 (salary)` or `Expense: -40.00 (rent)`.
    pub fn describe(&self) -> String {
        format!(
            "{}: {}{} ({})",
            self.sign.label(),
            self.sign.as_char(),
            format_cents(self.amount_cents),
            self.comment
        )
    }

    /// Signed contribution of this entry to the balance.
    pub fn signed_cents(&self) -> Cents {
        match self.sign {
            Sign::Credit => self.amount_cents,
            Sign::Debit => -self.amount_cents,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseEntryError {
    #[error("line has no '|' separator")]
    MissingSeparator,

    #[error("line does not start with '+' or '-'")]
    InvalidSign,

    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] ParseCentsError),
}
