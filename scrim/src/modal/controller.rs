//! Per-modal state machine tying the visibility intent to the animation
//! driver and the overlay registry.
//!
//! States run `Hidden -> Appearing -> Shown -> Disappearing -> Hidden`.
//! The `visible` intent is the only trigger: setting the same value again is
//! a no-op, and a flip while a transition is in flight is coalesced rather
//! than queued — the driver drops the overlapping request, and the
//! controller re-checks the intent whenever a transition completes, so the
//! settled state always matches the last requested value.

use std::time::Instant;

use crate::color::Color;
use crate::driver::{AnimationDriver, Channels, DriverEvent};
use crate::geometry::{MeasuredGeometry, SlideDirection, WindowMetrics, hidden_offset};
use crate::node::{Align, Justify, Layout, Node};
use crate::registry::{CommitAck, LayerId, OverlayRegistry};
use crate::style::Style;
use crate::transitions::TransitionConfig;

/// Lifecycle states of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Appearing,
    Shown,
    Disappearing,
}

/// Vertical placement of the content container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignContent {
    /// Pinned to the top edge; slides in from above.
    FlexStart,
    /// Centered; scales in place.
    #[default]
    Center,
    /// Pinned to the bottom edge; slides in from below.
    FlexEnd,
}

/// Static configuration for a modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalConfig {
    /// Render the mask fully transparent instead of dimmed.
    pub transparent: bool,
    /// Disable transitions; show/hide settle on the next frame.
    pub animate: bool,
    pub align: AlignContent,
    pub show: TransitionConfig,
    pub hide: TransitionConfig,
    /// Extra offset subtracted from the slide travel distance.
    pub keep_offset: f32,
    /// The platform has a hardware back action; `on_request_close` is
    /// required and its absence is reported at construction.
    pub hardware_back: bool,
    /// Style pass-through merged onto the content container.
    pub content_style: Style,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            transparent: false,
            animate: true,
            align: AlignContent::Center,
            show: TransitionConfig::show_default(),
            hide: TransitionConfig::hide_default(),
            keep_offset: 0.0,
            hardware_back: false,
            content_style: Style::default(),
        }
    }
}

type Callback = Box<dyn FnMut()>;

/// Completion and dismissal callbacks.
///
/// `on_show` and `on_dismiss` fire exactly once per full transition.
/// `on_close` fires when the dismiss affordance (mask tap) is activated and
/// does not itself change visibility; `on_request_close` receives hardware
/// back requests verbatim. Both leave flipping the `visible` intent to the
/// caller.
#[derive(Default)]
pub struct ModalCallbacks {
    pub(crate) on_show: Option<Callback>,
    pub(crate) on_dismiss: Option<Callback>,
    pub(crate) on_close: Option<Callback>,
    pub(crate) on_request_close: Option<Callback>,
}

impl ModalCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_show(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_show = Some(Box::new(callback));
        self
    }

    pub fn on_dismiss(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_dismiss = Some(Box::new(callback));
        self
    }

    pub fn on_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn on_request_close(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_request_close = Some(Box::new(callback));
        self
    }
}

/// Drives one modal's overlay layer through its show/hide lifecycle.
pub struct ModalController {
    registry: OverlayRegistry,
    config: ModalConfig,
    callbacks: ModalCallbacks,
    driver: AnimationDriver,
    state: ModalState,
    visible: bool,
    layer: Option<LayerId>,
    removal: Option<CommitAck>,
    window: WindowMetrics,
    measured: Option<MeasuredGeometry>,
    content: Node,
    dirty: bool,
}

impl ModalController {
    pub fn new(
        registry: OverlayRegistry,
        window: WindowMetrics,
        config: ModalConfig,
        callbacks: ModalCallbacks,
    ) -> Self {
        if config.hardware_back && callbacks.on_request_close.is_none() {
            log::warn!("modal: hardware_back platform without an on_request_close handler");
        }

        let (show, hide) = if config.animate {
            (config.show, config.hide)
        } else {
            (config.show.instant(), config.hide.instant())
        };
        let driver = AnimationDriver::new(0.0, 0.0)
            .with_show(show)
            .with_hide(hide);

        Self {
            registry,
            config,
            callbacks,
            driver,
            state: ModalState::Hidden,
            visible: false,
            layer: None,
            removal: None,
            window,
            measured: None,
            content: Node::Empty,
            dirty: false,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn layer_id(&self) -> Option<LayerId> {
        self.layer
    }

    /// Record the visibility intent. The same value again is a no-op; the
    /// transition itself starts on the next [`tick`].
    ///
    /// [`tick`]: ModalController::tick
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;
    }

    /// Replace the content slot. Pushed to the registry on the next tick
    /// while the modal is mounted.
    pub fn set_content(&mut self, content: Node) {
        self.content = content;
        self.dirty = true;
    }

    /// Record the content's measured geometry from the host's layout pass.
    /// Slide offsets stay 0 until the first measurement arrives, so a modal
    /// shown before layout settles appears without sliding.
    pub fn set_measured(&mut self, measured: MeasuredGeometry) {
        self.measured = Some(measured);
        self.dirty = true;
    }

    /// The dismiss affordance (mask tap) was activated. Fires `on_close`;
    /// visibility is unchanged until the caller flips the intent.
    pub fn mask_pressed(&mut self) {
        if let Some(callback) = &mut self.callbacks.on_close {
            callback();
        }
    }

    /// A hardware back request arrived; forwarded verbatim.
    pub fn request_close(&mut self) {
        if let Some(callback) = &mut self.callbacks.on_request_close {
            callback();
        }
    }

    /// Advance the state machine one frame.
    pub fn tick(&mut self, now: Instant) {
        self.poll_removal();

        match self.state {
            ModalState::Hidden => {
                if self.visible && self.removal.is_none() {
                    self.begin_show(now);
                }
            }
            ModalState::Shown => {
                if !self.visible {
                    self.begin_hide(now);
                }
            }
            // Mid-transition intent flips are handled on completion.
            ModalState::Appearing | ModalState::Disappearing => {}
        }

        if let Some(event) = self.driver.tick(now) {
            match event {
                DriverEvent::ShowComplete => {
                    self.state = ModalState::Shown;
                    // Push the settled value even though the driver went idle.
                    self.dirty = true;
                    if let Some(callback) = &mut self.callbacks.on_show {
                        callback();
                    }
                    if !self.visible {
                        self.begin_hide(now);
                    }
                }
                DriverEvent::HideComplete => {
                    if let Some(id) = self.layer {
                        self.removal = Some(self.registry.queue_remove(id));
                    }
                }
            }
        }

        self.push_update();
    }

    /// Tear down synchronously: stop any in-flight transition without
    /// firing completions, then queue the layer's removal. No registry
    /// entry outlives the controller.
    pub fn unmount(&mut self) {
        self.driver.stop();
        self.removal = None;
        if let Some(id) = self.layer.take() {
            let _ = self.registry.queue_remove(id);
        }
        self.state = ModalState::Hidden;
    }

    fn poll_removal(&mut self) {
        if let Some(ack) = &mut self.removal
            && ack.try_ready()
        {
            self.removal = None;
            self.layer = None;
            self.state = ModalState::Hidden;
            if let Some(callback) = &mut self.callbacks.on_dismiss {
                callback();
            }
        }
    }

    fn begin_show(&mut self, now: Instant) {
        if self.layer.is_none() {
            let (id, _ack) = self.registry.queue_append(self.compose());
            self.layer = Some(id);
        }
        if self.driver.show(now) {
            self.state = ModalState::Appearing;
        }
    }

    fn begin_hide(&mut self, now: Instant) {
        if self.driver.hide(now) {
            self.state = ModalState::Disappearing;
        }
    }

    fn push_update(&mut self) {
        if self.removal.is_some() {
            return;
        }
        let Some(id) = self.layer else {
            return;
        };
        if self.dirty || self.driver.is_animating() {
            let node = self.compose();
            let _ = self.registry.queue_update(id, node);
            self.dirty = false;
        }
    }

    fn channels(&self) -> Channels {
        match self.config.align {
            AlignContent::Center => Channels::opacity(0.0).with_scale(0.0),
            AlignContent::FlexStart => Channels::opacity(0.0).with_translate(hidden_offset(
                SlideDirection::Top,
                self.window,
                self.measured.as_ref(),
                self.config.keep_offset,
            )),
            AlignContent::FlexEnd => Channels::opacity(0.0).with_translate(hidden_offset(
                SlideDirection::Bottom,
                self.window,
                self.measured.as_ref(),
                self.config.keep_offset,
            )),
        }
    }

    /// Build the full overlay node for the current frame: mask below,
    /// aligned content container above.
    fn compose(&self) -> Node {
        let value = self.driver.value();
        let values = self.channels().sample(value);

        let mask_opacity = if self.config.transparent {
            0.0
        } else {
            0.5 * value
        };
        let mask = Node::stack(vec![]).styled(
            Style::new()
                .background(Color::BLACK)
                .opacity(mask_opacity),
        );

        let mut content_style = self.config.content_style.clone();
        content_style.opacity = values.opacity;
        content_style.scale = values.scale;
        content_style.translate_y = values.translate;
        let content = self.content.clone().styled(content_style);

        let container_align = match self.config.align {
            AlignContent::FlexStart => Justify::Start,
            AlignContent::Center => Justify::Center,
            AlignContent::FlexEnd => Justify::End,
        };
        let container = Node::column(vec![content]).with_layout(
            Layout::new()
                .justify(container_align)
                .align(Align::Center),
        );

        Node::stack(vec![mask, container])
    }
}
