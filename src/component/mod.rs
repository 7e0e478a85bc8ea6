//! Stateful presentation components.
//!
//! A component (a controller or presenter) optionally owns a typed model,
//! the state that must survive the UI layer being torn down and recreated
//! underneath it. [`Component`] carries the whole model lifecycle as
//! provided methods so every implementor gets identical semantics:
//!
//! - [`Component::on_construct`] allocates the declared default model.
//! - [`Component::bind_model`] replaces the model deliberately; no
//!   notification fires.
//! - [`Component::restore_model`] replays previously saved state after a
//!   forced teardown and fires [`Component::on_restored`].
//!
//! The bind/restore split lets implementors distinguish "I am setting this
//! deliberately" from "the framework is replaying prior state": the
//! restored hook is where derived listeners are re-subscribed and cached
//! invariants re-checked, work that is only needed after an external
//! reconstruction.

mod error;
mod kind;

pub use error::ComponentError;
pub use kind::{InitError, ModelKind};

/// A presentation component with an optional, restorable typed model.
///
/// Implementors back the model with a single `Option<Self::Model>` field
/// exposed through [`Component::model_cell`] and
/// [`Component::model_cell_mut`]; the lifecycle logic lives in the provided
/// methods and cannot drift per component.
///
/// The owning controller layer has exclusive ownership of the model's
/// identity. The UI layer observes it through events or [`Component::model`]
/// and never mutates it directly.
pub trait Component {
    /// The model type this component owns. Stateless components still name
    /// a type; `()` is the conventional choice.
    type Model;

    /// Declares whether this component is stateful. Called repeatedly and
    /// must be stable for a given instance.
    fn model_kind(&self) -> ModelKind<Self::Model>;

    /// Read access to the model storage.
    fn model_cell(&self) -> &Option<Self::Model>;

    /// Mutable access to the model storage.
    fn model_cell_mut(&mut self) -> &mut Option<Self::Model>;

    /// Hook fired by [`Component::restore_model`] after restoration set the
    /// model on a stateful component. The default body is empty.
    fn on_restored(&mut self) {}

    /// The current model, if one is bound.
    fn model(&self) -> Option<&Self::Model> {
        self.model_cell().as_ref()
    }

    /// Allocates the default model declared by [`Component::model_kind`].
    ///
    /// Stateless components allocate nothing. A failing initializer is
    /// fatal: the failure is returned with the original cause attached as
    /// `source`, the component is left without a usable model, and the
    /// caller must not proceed to use it.
    fn on_construct(&mut self) -> Result<(), ComponentError> {
        match self.model_kind() {
            ModelKind::Stateless => Ok(()),
            ModelKind::Stateful { init } => match init() {
                Ok(model) => {
                    *self.model_cell_mut() = Some(model);
                    Ok(())
                }
                Err(source) => Err(ComponentError::Construction {
                    component: component_name::<Self>(),
                    source,
                }),
            },
        }
    }

    /// Replaces the model deliberately. No notification fires.
    ///
    /// Fails with [`ComponentError::NotStateful`] on a stateless component
    /// and with [`ComponentError::AbsentModel`] when `value` is absent; in
    /// both cases the prior model is left untouched.
    fn bind_model(&mut self, value: Option<Self::Model>) -> Result<(), ComponentError> {
        if !self.model_kind().is_stateful() {
            return Err(ComponentError::NotStateful {
                component: component_name::<Self>(),
            });
        }
        match value {
            None => Err(ComponentError::AbsentModel {
                component: component_name::<Self>(),
            }),
            Some(model) => {
                *self.model_cell_mut() = Some(model);
                Ok(())
            }
        }
    }

    /// Replays previously saved state after a forced teardown.
    ///
    /// On a stateless component this is a silent no-op regardless of
    /// `value`. On a stateful component the model is set to `value`, absent
    /// if nothing was saved, and [`Component::on_restored`] fires exactly
    /// once per call.
    fn restore_model(&mut self, value: Option<Self::Model>) {
        if !self.model_kind().is_stateful() {
            return;
        }
        *self.model_cell_mut() = value;
        tracing::trace!(component = component_name::<Self>(), "model restored");
        self.on_restored();
    }
}

fn component_name<C: ?Sized>() -> &'static str {
    std::any::type_name::<C>()
}
