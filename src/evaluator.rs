//! Password strength evaluator - runs every criterion and aggregates the score.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::criteria::{
    Check, ComplexityCriterion, Criterion, DictionaryCriterion, LengthCriterion,
    RepetitionCriterion,
};
use crate::report::{Finding, Report};

/// Delay before [`evaluate_tx`] evaluates, giving newer input a chance to
/// supersede the request.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Ordered collection of criteria.
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluator {
    criteria: Vec<Criterion>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Length, complexity, repetition, dictionary, in that order.
    pub fn new() -> Self {
        Self::from_criteria([
            Criterion::from(LengthCriterion),
            Criterion::from(ComplexityCriterion),
            Criterion::from(RepetitionCriterion),
            Criterion::from(DictionaryCriterion),
        ])
    }

    /// Builds an evaluator running `criteria` in the given order.
    ///
    /// The total is still clamped to 100 when the weights add up to more.
    pub fn from_criteria<I>(criteria: I) -> Self
    where
        I: IntoIterator<Item = Criterion>,
    {
        Self {
            criteria: criteria.into_iter().collect(),
        }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Evaluates password strength and returns a detailed report.
    ///
    /// An empty password short-circuits to a zero score with no findings.
    pub fn evaluate(&self, password: &SecretString) -> Report {
        if password.expose_secret().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("empty password, skipping criteria");
            return Report::empty();
        }

        let findings: Vec<Finding> = self
            .criteria
            .iter()
            .map(|criterion| {
                let verdict = criterion.check(password);

                #[cfg(feature = "tracing")]
                tracing::debug!(
                    criterion = criterion.name(),
                    met = verdict.met,
                    score = verdict.score,
                    "criterion checked"
                );

                Finding {
                    name: criterion.name(),
                    max_score: criterion.max_score(),
                    verdict,
                }
            })
            .collect();

        let report = Report::from_findings(findings);

        #[cfg(feature = "tracing")]
        tracing::debug!(score = report.score(), "password evaluated");

        report
    }
}

/// Async version that sends the report via channel.
///
/// Waits [`DEBOUNCE`] first. If `token` is cancelled before then, the
/// request was superseded: it returns at once and nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    evaluator: &Evaluator,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Report>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded, dropping request");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let report = evaluator.evaluate(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_sends_report() {
        let evaluator = Evaluator::new();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_tx(&evaluator, &secret("Password1!"), token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert_eq!(report.score(), 90);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_superseded() {
        let evaluator = Evaluator::new();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let start = tokio::time::Instant::now();
        evaluate_tx(&evaluator, &secret("Passw0rd!"), token, tx).await;

        assert!(start.elapsed() < DEBOUNCE);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_cancelled_during_debounce() {
        let evaluator = Evaluator::new();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(DEBOUNCE / 3).await;
            canceller.cancel();
        });

        let start = tokio::time::Instant::now();
        evaluate_tx(&evaluator, &secret("Password1!"), token, tx).await;

        assert!(start.elapsed() < DEBOUNCE);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_waits_for_debounce() {
        let evaluator = Evaluator::new();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let start = tokio::time::Instant::now();

        evaluate_tx(&evaluator, &secret("abc"), token, tx).await;

        assert!(start.elapsed() >= DEBOUNCE);
        assert!(rx.recv().await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_closed_receiver() {
        let evaluator = Evaluator::new();
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must not panic
        evaluate_tx(&evaluator, &secret("abc"), CancellationToken::new(), tx).await;
    }
}
