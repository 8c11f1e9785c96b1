//! Overlay and modal surfaces for view-tree UIs.
//!
//! `scrim` manages content painted above an application: an ordered
//! [`OverlayRegistry`] of layers with commit-resolved mutation futures, a
//! clock-driven [`AnimationDriver`] for show/hide transitions, a
//! [`ModalController`] state machine, and the modal variants built on it.
//! Rendering stays with the host: the crate produces [`Node`] trees and the
//! host paints them, feeding measured geometry back in.
//!
//! [`OverlayRegistry`]: registry::OverlayRegistry
//! [`AnimationDriver`]: driver::AnimationDriver
//! [`ModalController`]: modal::ModalController
//! [`Node`]: node::Node

pub mod color;
pub mod driver;
pub mod effects;
pub mod geometry;
pub mod modal;
pub mod node;
pub mod registry;
pub mod stage;
pub mod style;
pub mod transitions;
pub mod wakeup;

pub use registry::OverlayRegistry;
pub use stage::Stage;

pub mod prelude {
    pub use crate::color::{Color, Rgb};
    pub use crate::driver::{AnimationDriver, ChannelValues, Channels, DriverEvent, DriverPhase};
    pub use crate::effects::{FadeTransition, OpacityTransition, SlideTransition};
    pub use crate::geometry::{MeasuredGeometry, SlideDirection, WindowMetrics};
    pub use crate::modal::{
        AlignContent, Dialog, DialogButton, ModalCallbacks, ModalConfig, ModalController,
        ModalState, Popover, PopoverItem, PopoverPosition, Popup, PopupHeader,
    };
    pub use crate::node::{Align, Justify, Layout, Node};
    pub use crate::registry::{Append, CommitAck, LayerId, OverlayRegistry};
    pub use crate::stage::{Stage, StageError};
    pub use crate::style::{Inset, Style};
    pub use crate::transitions::{Easing, TransitionConfig};
    pub use crate::wakeup::{WakeupReceiver, WakeupSender};
}
