//! Lifecycle-scoped presentation core: restorable component state and
//! paired view event buses.
//!
//! Decouples controllers/presenters from UI components in hosts where the
//! UI layer can be destroyed and recreated underneath them (low-memory
//! process restarts and similar forced teardowns):
//!
//! - [`Component`]: a controller-side unit that optionally owns a typed
//!   model, with a construct/bind/restore lifecycle and a restored hook.
//! - [`StateStore`] / [`MemoryStore`]: the opaque persistence boundary the
//!   lifecycle driver saves to before teardown and restores from after
//!   recreation.
//! - [`EventChannel`] / [`UiChannels`]: two independent pub/sub buses,
//!   controller-to-UI and UI-to-UI, that never cross-deliver.
//! - [`EventRegistrar`]: per-UI-instance guard keeping channel registration
//!   exactly-once across repeated lifecycle callbacks.
//!
//! Widget rendering, navigation, dependency injection wiring, and the
//! host's lifecycle callback dispatch are external collaborators; this
//! crate only defines the programmatic seams they drive.

pub mod component;
pub mod events;
pub mod store;

pub use component::{Component, ComponentError, InitError, ModelKind};
pub use events::{
    DeliveryError, DeliveryFailure, EventChannel, EventRegistrar, PublishOutcome, Subscriber,
    UiChannels,
};
pub use store::{
    restore_component, save_component, MemoryStore, StateError, StateStore, StateStoreExt,
};
