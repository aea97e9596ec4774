//! Desktop window manager for the DreamLog 98 shell.
//!
//! The crate keeps window state in a pure reducer ([`reduce_desktop`]) over a
//! [`WindowRegistry`] of per-window [`WindowGeometry`] state machines, and renders it through the
//! Leptos components in [`components`]. Side effects the reducer asks for (pointer tracking for a
//! live drag or resize) run in [`effect_executor`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod apps;
pub mod components;
pub mod effect_executor;
pub mod host;
pub mod model;
pub mod pointer;
pub mod reducer;
pub mod registry;
pub mod runtime_context;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, DesktopState, ReducerError, RuntimeEffect};
pub use registry::{OpenWindow, WindowRegistry};
pub use window_manager::{Gesture, WindowGeometry};
