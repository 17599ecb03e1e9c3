use pc_builder::prelude::*;
use std::sync::{Arc, Mutex};

/// One call recorded by [`MockProgressReporter`]
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    Step(String),
    Warning(String),
    Completion(String),
}

/// ProgressReporter that records every call in order
///
/// Clones share the same log, so a test keeps one handle while the use
/// case owns another.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn steps(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Step(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Warning(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(ProgressEvent::Step(message.to_string()));
    }

    fn report_error(&self, message: &str) {
        self.record(ProgressEvent::Warning(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.record(ProgressEvent::Completion(message.to_string()));
    }
}
