//! Rule-based password strength scoring
//!
//! This library runs a password through a fixed set of independent
//! criteria (length, character complexity, repetition, common words) and
//! returns a score out of 100 with a verdict per criterion.
//!
//! # Features
//!
//! - `async` (default): Enables debounced evaluation over a channel
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize` for reports
//! - `cli`: Builds the `pwd-criteria` terminal front end
//!
//! # Example
//!
//! ```rust
//! use pwd_criteria::{Evaluator, Strength};
//! use secrecy::SecretString;
//!
//! let evaluator = Evaluator::new();
//! let password = SecretString::new("Password1!".to_string().into());
//!
//! let report = evaluator.evaluate(&password);
//! assert_eq!(report.score(), 90);
//! assert_eq!(report.strength(), Strength::VeryStrong);
//!
//! for finding in report.findings() {
//!     println!("{}: {}", finding.name, finding.verdict.message);
//! }
//! ```

pub mod criteria;
mod evaluator;
mod report;

// Public API
pub use criteria::{Check, Criterion, Descriptor, Verdict};
pub use evaluator::Evaluator;
pub use report::{Finding, MAX_TOTAL_SCORE, Report, Strength};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, evaluate_tx};
