//! Event routing between the controller layer and UI instances.
//!
//! Two independent buses exist for the lifetime of the process: controllers
//! publish to UI instances on one, UI instances coordinate among themselves
//! on the other. An [`EventRegistrar`] ties one UI instance's membership on
//! both buses to its creation/destruction lifecycle callbacks.

mod channel;
mod registrar;

pub use channel::{DeliveryError, DeliveryFailure, EventChannel, PublishOutcome, Subscriber};
pub use registrar::{EventRegistrar, UiChannels};
