//! Scriptable in-memory adapters for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::adapter::{MetaAdapter, TemplateSearch};
use crate::models::{ConnectionStatus, MetaResult};

#[derive(Clone)]
pub(crate) enum Outcome {
    Results(usize),
    Fail(String),
    Panic(String),
}

#[derive(Clone)]
pub(crate) enum Health {
    Up,
    Down(String),
    Panic(String),
}

pub(crate) struct FakeAdapter {
    name: String,
    outcome: Outcome,
    health: Health,
    template: bool,
    pub(crate) calls: Arc<AtomicUsize>,
}

impl FakeAdapter {
    pub(crate) fn new(name: &str, outcome: Outcome) -> Self {
        Self {
            name: name.to_string(),
            outcome,
            health: Health::Up,
            template: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn returning(name: &str, count: usize) -> Self {
        Self::new(name, Outcome::Results(count))
    }

    pub(crate) fn failing(name: &str, message: &str) -> Self {
        Self::new(name, Outcome::Fail(message.to_string()))
    }

    pub(crate) fn with_health(mut self, health: Health) -> Self {
        self.health = health;
        self
    }

    pub(crate) fn with_template(mut self) -> Self {
        self.template = true;
        self
    }

    pub(crate) fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }

    fn results(&self, prefix: &str, count: usize) -> Vec<MetaResult> {
        (0..count)
            .map(|i| {
                MetaResult::new(
                    self.name.clone(),
                    format!("{}-{}", prefix, i),
                    format!("{}_{}", prefix.to_uppercase(), i),
                    "TABLE",
                )
            })
            .collect()
    }
}

#[async_trait]
impl MetaAdapter for FakeAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &str {
        "fake"
    }

    async fn search(&self, _query: &str) -> Result<Vec<MetaResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Outcome::Results(n) => Ok(self.results(&self.name, *n)),
            Outcome::Fail(msg) => Err(anyhow!("{}", msg)),
            Outcome::Panic(msg) => panic!("{}", msg),
        }
    }

    async fn test_connection(&self) -> ConnectionStatus {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.health {
            Health::Up => ConnectionStatus::ok(),
            Health::Down(msg) => ConnectionStatus::failed(msg.clone()),
            Health::Panic(msg) => panic!("{}", msg),
        }
    }

    fn as_template(&self) -> Option<&dyn TemplateSearch> {
        if self.template {
            Some(self)
        } else {
            None
        }
    }
}

#[async_trait]
impl TemplateSearch for FakeAdapter {
    async fn search_by_template(
        &self,
        template_id: &str,
        params: &Map<String, Value>,
    ) -> Result<Vec<MetaResult>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Outcome::Fail(msg) = &self.outcome {
            return Err(anyhow!("{}", msg));
        }
        let count = params.get("count").and_then(Value::as_u64).unwrap_or(1) as usize;
        Ok(self.results(template_id, count))
    }
}
