//! Test helpers for generation-dependent code
//!
//! Enabled for this crate's tests and for dependents through the
//! `test-helpers` feature.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use brandcraft_core::prelude::*;
use brandcraft_core::{BrandBrief, BrandIdentity, Swatch};
use serde_json::{json, Value};

use crate::client::IdentityGenerator;

/// The "Nestly" smart-home identity used across tests
pub fn sample_identity() -> BrandIdentity {
    BrandIdentity {
        name: "Nestly".to_string(),
        tagline: "Home, Guarded.".to_string(),
        colors: vec![
            Swatch::new("#1A1A2E", "Midnight"),
            Swatch::new("#0F3460", "Deep Blue"),
            Swatch::new("#E94560", "Alert Red"),
            Swatch::new("#F1F1F1", "Cloud"),
        ],
        description: "Nestly keeps your home smart without watching you. Every signal stays inside your walls."
            .to_string(),
        voice: "Calm, confident and plain-spoken.".to_string(),
        keywords: ["private", "secure", "smart", "simple", "trusted"]
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

/// [`sample_identity`] serialized the way the service returns it
pub fn sample_identity_json() -> String {
    serde_json::to_string(&sample_identity()).unwrap_or_default()
}

/// A `generateContent` success body whose only text part is `text`
pub fn success_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

/// Generator that replays queued results in order.
///
/// Once the queue is empty every call fails with [`Error::EmptyResponse`].
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    results: Mutex<VecDeque<Result<BrandIdentity>>>,
    briefs: Mutex<Vec<BrandBrief>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator that succeeds once with [`sample_identity`]
    pub fn succeeding() -> Self {
        Self::new().then_ok(sample_identity())
    }

    /// A generator that fails once with `error`
    pub fn failing(error: Error) -> Self {
        Self::new().then_err(error)
    }

    pub fn then_ok(self, identity: BrandIdentity) -> Self {
        self.push(Ok(identity));
        self
    }

    pub fn then_err(self, error: Error) -> Self {
        self.push(Err(error));
        self
    }

    /// Sleep before answering, so tests can observe the pending state
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Briefs received so far, in call order
    pub fn briefs(&self) -> Vec<BrandBrief> {
        self.briefs.lock().map(|b| b.clone()).unwrap_or_default()
    }

    fn push(&self, result: Result<BrandIdentity>) {
        if let Ok(mut results) = self.results.lock() {
            results.push_back(result);
        }
    }

    fn next_result(&self) -> Result<BrandIdentity> {
        self.results
            .lock()
            .ok()
            .and_then(|mut results| results.pop_front())
            .unwrap_or(Err(Error::EmptyResponse))
    }
}

impl IdentityGenerator for ScriptedGenerator {
    async fn generate(&self, brief: &BrandBrief) -> Result<BrandIdentity> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut briefs) = self.briefs.lock() {
            briefs.push(brief.clone());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.next_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandcraft_core::Vibe;

    #[test]
    fn test_sample_identity_is_well_formed() {
        assert!(sample_identity().audit().is_empty());
    }

    #[tokio::test]
    async fn test_scripted_generator_replays_in_order() {
        let generator = ScriptedGenerator::new()
            .then_err(Error::api(500, "boom"))
            .then_ok(sample_identity());
        let brief = BrandBrief::new("hub", "IoT", Vibe::default());

        assert!(generator.generate(&brief).await.is_err());
        assert_eq!(generator.generate(&brief).await.unwrap().name, "Nestly");
        assert!(matches!(
            generator.generate(&brief).await,
            Err(Error::EmptyResponse)
        ));
        assert_eq!(generator.call_count(), 3);
        assert_eq!(generator.briefs().len(), 3);
    }
}
