//! Contains the admission rule and the message printed for each outcome.

use crate::age::Age;

/// Minimum age, in whole years, required to enter.
pub const ADMISSION_AGE: i64 = 18;

/// Outcome of checking a guest against the admission rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Admitted,
    Refused,
}

impl Decision {
    /// Applies the admission rule to a parsed age.
    pub fn for_age(age: Age) -> Decision {
        if age.years() < ADMISSION_AGE {
            Decision::Refused
        } else {
            Decision::Admitted
        }
    }

    pub fn is_admitted(self) -> bool {
        matches!(self, Decision::Admitted)
    }

    /// Renders the message printed for this outcome. A refusal does not name
    /// the guest.
    pub fn message(self, name: &str) -> String {
        match self {
            Decision::Admitted => format!("Welocme: {name}"),
            Decision::Refused => "You must be over 18 to enter. Sorry :(".to_string(),
        }
    }
}
