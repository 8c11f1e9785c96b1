//! Modal surfaces: the controller state machine and the variants built on it.
//!
//! [`ModalController`] owns the full show/hide lifecycle of one overlay
//! layer. The variants are thin presets over it: [`Dialog`] (centered,
//! title + action row), [`Popup`] (bottom sheet) and [`Popover`] (anchored
//! menu that manages its own visibility).

mod controller;
mod dialog;
mod popover;
mod popup;

pub use controller::{AlignContent, ModalCallbacks, ModalConfig, ModalController, ModalState};
pub use dialog::{Dialog, DialogButton};
pub use popover::{AnchorOffsets, Popover, PopoverItem, PopoverPosition, anchor_offsets};
pub use popup::{Popup, PopupHeader};
