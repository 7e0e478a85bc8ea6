//! Model declarations for components.

use std::error::Error;

/// Error type returned by model initializers.
pub type InitError = Box<dyn Error + Send + Sync + 'static>;

/// Declares whether a component owns a persistable model, and how the
/// default model is allocated when it does.
///
/// The declaration must be stable for a given component instance: callers
/// invoke [`crate::Component::model_kind`] repeatedly and branch on it.
pub enum ModelKind<M> {
    /// The component never owns a model.
    Stateless,
    /// The component owns a model; `init` allocates the default instance
    /// during [`crate::Component::on_construct`].
    Stateful {
        /// Allocates the default model.
        init: fn() -> Result<M, InitError>,
    },
}

impl<M> ModelKind<M> {
    /// Stateful declaration for models with a `Default` implementation.
    pub fn stateful() -> Self
    where
        M: Default,
    {
        Self::Stateful {
            init: default_init::<M>,
        }
    }

    /// Stateful declaration with a custom, possibly failing initializer.
    pub fn stateful_with(init: fn() -> Result<M, InitError>) -> Self {
        Self::Stateful { init }
    }

    /// Whether this declaration carries a model.
    pub fn is_stateful(&self) -> bool {
        matches!(self, Self::Stateful { .. })
    }
}

// Manual impls: the variants hold at most a fn pointer, so no `M: Clone`
// bound is needed.
impl<M> Clone for ModelKind<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for ModelKind<M> {}

fn default_init<M: Default>() -> Result<M, InitError> {
    Ok(M::default())
}
