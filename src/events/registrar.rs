//! Lifecycle-scoped registration of a UI instance on the paired buses.

use std::sync::Arc;

use super::channel::{EventChannel, Subscriber};

/// The two independent event buses a UI instance participates in: one for
/// controller-originated events (`C`) and one for view-to-view coordination
/// (`U`). Events never cross between them.
///
/// Created once by the composition root and passed explicitly wherever a
/// registrar or publisher needs them; cloning is cheap and shares the
/// underlying channels.
pub struct UiChannels<C: 'static, U: 'static> {
    /// Controller-to-UI bus: controllers publish, UI instances subscribe.
    pub controller_to_ui: EventChannel<C>,
    /// UI-to-UI bus: any UI instance may publish or subscribe.
    pub ui_to_ui: EventChannel<U>,
}

impl<C: 'static, U: 'static> UiChannels<C, U> {
    /// Creates a fresh pair of empty channels.
    pub fn new() -> Self {
        Self {
            controller_to_ui: EventChannel::new(),
            ui_to_ui: EventChannel::new(),
        }
    }
}

impl<C: 'static, U: 'static> Clone for UiChannels<C, U> {
    fn clone(&self) -> Self {
        Self {
            controller_to_ui: self.controller_to_ui.clone(),
            ui_to_ui: self.ui_to_ui.clone(),
        }
    }
}

impl<C: 'static, U: 'static> Default for UiChannels<C, U> {
    fn default() -> Self {
        Self::new()
    }
}

/// Guards one UI instance's subscription to both buses.
///
/// Created alongside its owning UI instance. The external lifecycle driver
/// calls [`EventRegistrar::register_event_channels`] on the view's
/// creation callback and [`EventRegistrar::unregister_event_channels`] on
/// its destruction callback. Both operations are safe to call more than
/// once: duplicate calls are logged no-ops, never a double-subscribe —
/// duplicate registration would mean duplicate event delivery, which is the
/// one thing this guard exists to rule out.
pub struct EventRegistrar<C: 'static, U: 'static> {
    controller_to_ui: EventChannel<C>,
    ui_to_ui: EventChannel<U>,
    on_controller_event: Arc<dyn Subscriber<C>>,
    on_ui_event: Arc<dyn Subscriber<U>>,
    view: &'static str,
    registered: bool,
}

impl<C: 'static, U: 'static> EventRegistrar<C, U> {
    /// Creates a registrar binding `view` to the shared channel pair.
    ///
    /// The same allocation backs the subscription on both buses, so each
    /// channel sees a single identity for this UI instance.
    pub fn new<V>(channels: &UiChannels<C, U>, view: Arc<V>) -> Self
    where
        V: Subscriber<C> + Subscriber<U> + 'static,
    {
        let on_controller_event: Arc<dyn Subscriber<C>> = view.clone();
        let on_ui_event: Arc<dyn Subscriber<U>> = view;
        Self {
            controller_to_ui: channels.controller_to_ui.clone(),
            ui_to_ui: channels.ui_to_ui.clone(),
            on_controller_event,
            on_ui_event,
            view: std::any::type_name::<V>(),
            registered: false,
        }
    }

    /// Registers the owning UI instance on both buses. Call on the view's
    /// creation lifecycle callback.
    pub fn register_event_channels(&mut self) {
        if self.registered {
            tracing::trace!(view = self.view, "event channels already registered");
            return;
        }
        self.controller_to_ui.register(&self.on_controller_event);
        self.ui_to_ui.register(&self.on_ui_event);
        self.registered = true;
        tracing::debug!(view = self.view, "event channels registered");
    }

    /// Unregisters the owning UI instance from both buses. Call on the
    /// view's destruction lifecycle callback.
    pub fn unregister_event_channels(&mut self) {
        if !self.registered {
            tracing::trace!(view = self.view, "event channels already unregistered");
            return;
        }
        self.controller_to_ui.unregister(&self.on_controller_event);
        self.ui_to_ui.unregister(&self.on_ui_event);
        self.registered = false;
        tracing::debug!(view = self.view, "event channels unregistered");
    }

    /// Whether the owning UI instance currently holds a live registration.
    pub fn is_registered(&self) -> bool {
        self.registered
    }
}

impl<C: 'static, U: 'static> Drop for EventRegistrar<C, U> {
    // A registrar dropped while registered must not strand its view's
    // subscriptions in the process-lifetime channels.
    fn drop(&mut self) {
        if self.registered {
            self.unregister_event_channels();
        }
    }
}
