//! Error types for the component model lifecycle.

use thiserror::Error;

use super::kind::InitError;

/// Errors surfaced by the model lifecycle of a [`crate::Component`].
///
/// All of these indicate a programming mistake or a failed resource
/// allocation; none are retried, and none are recovered silently.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// `bind_model` was called on a component declared stateless.
    #[error("component '{component}' is stateless and has no model to bind")]
    NotStateful {
        /// Type name of the offending component.
        component: &'static str,
    },

    /// An absent value was bound to a stateful component. The prior model,
    /// if any, is left untouched.
    #[error("cannot bind an absent model to stateful component '{component}'")]
    AbsentModel {
        /// Type name of the offending component.
        component: &'static str,
    },

    /// Default model allocation failed during `on_construct`. The component
    /// is left without a usable model and must not be used.
    #[error("failed to construct default model for component '{component}'")]
    Construction {
        /// Type name of the component whose initializer failed.
        component: &'static str,
        /// The original initializer failure.
        #[source]
        source: InitError,
    },
}
