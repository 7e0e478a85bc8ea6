//! Shared fixtures for scenario tests.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use mvflow::{Component, DeliveryError, ModelKind, Subscriber, UiChannels};

/// Event a controller publishes to its views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountChanged {
    pub count: i64,
}

/// Cross-widget coordination event on the UI-to-UI bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRequested {
    pub widget: &'static str,
}

/// Channel pair used across the scenario tests.
pub type Channels = UiChannels<CountChanged, FocusRequested>;

/// Model owned by [`CounterController`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterModel {
    pub count: i64,
}

/// A stateful controller over a counter, publishing to the
/// controller-to-UI bus on every mutation.
#[derive(Default)]
pub struct CounterController {
    pub model: Option<CounterModel>,
    pub restored_calls: usize,
}

impl CounterController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutates the model and notifies registered views.
    pub fn increment(&mut self, channels: &Channels) {
        let model = self.model.as_mut().expect("model constructed");
        model.count += 1;
        let count = model.count;
        channels.controller_to_ui.publish(&CountChanged { count });
    }
}

impl Component for CounterController {
    type Model = CounterModel;

    fn model_kind(&self) -> ModelKind<CounterModel> {
        ModelKind::stateful()
    }

    fn model_cell(&self) -> &Option<CounterModel> {
        &self.model
    }

    fn model_cell_mut(&mut self) -> &mut Option<CounterModel> {
        &mut self.model
    }

    fn on_restored(&mut self) {
        self.restored_calls += 1;
    }
}

/// A view double recording everything it receives on both buses.
pub struct RecordingView {
    pub controller_events: Mutex<Vec<CountChanged>>,
    pub ui_events: Mutex<Vec<FocusRequested>>,
}

impl RecordingView {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            controller_events: Mutex::new(Vec::new()),
            ui_events: Mutex::new(Vec::new()),
        })
    }

    pub fn controller_event_count(&self) -> usize {
        self.controller_events.lock().len()
    }

    pub fn ui_event_count(&self) -> usize {
        self.ui_events.lock().len()
    }
}

impl Subscriber<CountChanged> for RecordingView {
    fn on_event(&self, event: &CountChanged) -> Result<(), DeliveryError> {
        self.controller_events.lock().push(event.clone());
        Ok(())
    }
}

impl Subscriber<FocusRequested> for RecordingView {
    fn on_event(&self, event: &FocusRequested) -> Result<(), DeliveryError> {
        self.ui_events.lock().push(event.clone());
        Ok(())
    }
}

/// Erases a view for direct registration on the controller-to-UI bus.
pub fn as_count_subscriber(view: &Arc<RecordingView>) -> Arc<dyn Subscriber<CountChanged>> {
    Arc::clone(view) as Arc<dyn Subscriber<CountChanged>>
}

/// Erases a view for direct registration on the UI-to-UI bus.
pub fn as_focus_subscriber(view: &Arc<RecordingView>) -> Arc<dyn Subscriber<FocusRequested>> {
    Arc::clone(view) as Arc<dyn Subscriber<FocusRequested>>
}
