//! `agegate-lib` exposes the admission-check primitives that power the
//! `agegate` CLI.
//!
//! The library converts a raw age token into a numeric age, applies the
//! admission threshold, and renders the exact message the door prints for
//! each outcome. You can use it directly to embed the same decision logic
//! without shelling out to the CLI.
//!
//! # Example
//!
//! ```rust
//! use agegate_lib::{evaluate, Decision};
//!
//! let verdict = evaluate("Carol", "99");
//! assert_eq!(verdict.decision, Decision::Admitted);
//! assert_eq!(verdict.message, "Welocme: Carol");
//! ```

pub mod admission;
pub mod age;
pub mod error;

pub use admission::{Decision, ADMISSION_AGE};
pub use age::Age;
pub use error::GateError;

/// A decision paired with the message the program prints for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub decision: Decision,
    pub message: String,
}

/// Checks a guest against the admission rule.
///
/// The age token is converted with [`Age::lossy`], matching the permissive
/// behavior of the command-line program: a non-numeric token degrades to 0
/// and is refused rather than reported as an error. Callers that want a
/// fail-fast conversion can parse an [`Age`] strictly via [`std::str::FromStr`]
/// and apply [`Decision::for_age`] themselves.
pub fn evaluate(name: &str, age_token: &str) -> Verdict {
    let age = Age::lossy(age_token);
    let decision = Decision::for_age(age);

    Verdict {
        decision,
        message: decision.message(name),
    }
}
