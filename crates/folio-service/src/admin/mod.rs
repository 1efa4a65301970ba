//! Admin management: server-side actions and the panel's client state.

pub mod actions;
pub mod panel;

pub use actions::{ActionResult, BulkDeleteReport, PhotoActions, PhotoInput};
pub use panel::{AdminPanel, PanelMode, Toast, ToastKind, TransitionError};
