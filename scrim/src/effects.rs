//! Standalone transition wrappers for non-modal content.
//!
//! Each wrapper owns one [`AnimationDriver`] and fans its value out into
//! style channels for a wrapped node. They keep the driver's drop policy
//! as-is: a visibility flip while a transition is in flight is lost, with
//! no re-check on completion. Content that needs last-request-wins
//! semantics goes through [`crate::modal::ModalController`] instead.

use std::time::{Duration, Instant};

use crate::driver::{AnimationDriver, Channels, DriverEvent};
use crate::geometry::{MeasuredGeometry, SlideDirection, WindowMetrics, hidden_offset};
use crate::node::Node;
use crate::transitions::{Easing, TransitionConfig};

const OPACITY_DURATION: Duration = Duration::from_millis(180);
const FADE_DURATION: Duration = Duration::from_millis(300);
const SLIDE_DURATION: Duration = Duration::from_millis(300);

const FADE_HIDDEN_SCALE: f32 = 0.8;

/// Fades a node between a minimum opacity and fully opaque.
pub struct OpacityTransition {
    driver: AnimationDriver,
    visible: bool,
    animate_on_mount: bool,
}

impl OpacityTransition {
    pub fn new(min_opacity: f32) -> Self {
        let config = TransitionConfig::new(OPACITY_DURATION, Easing::Linear);
        Self {
            driver: AnimationDriver::new(min_opacity, min_opacity)
                .with_show(config)
                .with_hide(config),
            visible: false,
            animate_on_mount: true,
        }
    }

    /// Skip the entrance transition; mount directly at the resting value.
    pub fn animate_on_mount(mut self, animate: bool) -> Self {
        self.animate_on_mount = animate;
        self
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn opacity(&self) -> f32 {
        self.driver.value()
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// Mount with `visible` as the initial state.
    pub fn mount(&mut self, visible: bool, now: Instant) {
        self.visible = visible;
        if visible && self.animate_on_mount {
            self.driver.set_value(self.driver.min());
            self.driver.show(now);
        } else {
            let resting = if visible { 1.0 } else { self.driver.min() };
            self.driver.set_value(resting);
        }
    }

    /// Flip visibility. Dropped outright while a transition is in flight.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if visible == self.visible || self.driver.is_animating() {
            return;
        }
        // Each run restarts from the extreme it is leaving.
        if visible {
            self.driver.set_value(self.driver.min());
            self.driver.show(now);
        } else {
            self.driver.set_value(1.0);
            self.driver.hide(now);
        }
        self.visible = visible;
    }

    pub fn tick(&mut self, now: Instant) -> Option<DriverEvent> {
        self.driver.tick(now)
    }

    pub fn wrap(&self, node: Node) -> Node {
        let style = node.style().cloned().unwrap_or_default();
        node.styled(style.opacity(self.opacity()))
    }
}

/// Fades and scales a node in together.
pub struct FadeTransition {
    driver: AnimationDriver,
    channels: Channels,
    visible: bool,
}

impl FadeTransition {
    pub fn new() -> Self {
        let config = TransitionConfig::new(FADE_DURATION, Easing::EaseOut);
        Self {
            driver: AnimationDriver::new(0.0, 0.0)
                .with_show(config)
                .with_hide(config),
            channels: Channels::opacity(0.0).with_scale(FADE_HIDDEN_SCALE),
            visible: false,
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if visible == self.visible || self.driver.is_animating() {
            return;
        }
        if visible {
            self.driver.show(now);
        } else {
            self.driver.hide(now);
        }
        self.visible = visible;
    }

    pub fn tick(&mut self, now: Instant) -> Option<DriverEvent> {
        self.driver.tick(now)
    }

    pub fn wrap(&self, node: Node) -> Node {
        let values = self.channels.sample(self.driver.value());
        let style = node.style().cloned().unwrap_or_default();
        node.styled(style.opacity(values.opacity).scale(values.scale))
    }
}

impl Default for FadeTransition {
    fn default() -> Self {
        Self::new()
    }
}

/// Slides a node in from off-screen while fading it in.
///
/// The travel distance depends on the node's measured geometry; until the
/// first measurement arrives the offset is zero and the wrapper degrades to
/// a plain fade.
pub struct SlideTransition {
    driver: AnimationDriver,
    channels: Channels,
    direction: SlideDirection,
    window: WindowMetrics,
    keep_offset: f32,
    visible: bool,
}

impl SlideTransition {
    pub fn new(window: WindowMetrics, direction: SlideDirection) -> Self {
        let config = TransitionConfig::new(SLIDE_DURATION, Easing::EaseOut);
        Self {
            driver: AnimationDriver::new(0.0, 0.0)
                .with_show(config)
                .with_hide(config),
            channels: Channels::opacity(0.0).with_translate(0.0),
            direction,
            window,
            keep_offset: 0.0,
            visible: false,
        }
    }

    /// Leave this much of the node peeking on-screen when hidden.
    pub fn keep_offset(mut self, offset: f32) -> Self {
        self.keep_offset = offset;
        self
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// Record the node's measured geometry and snap the resting offset to
    /// match the current visibility.
    pub fn set_measured(&mut self, measured: MeasuredGeometry) {
        let hidden = hidden_offset(
            self.direction,
            self.window,
            Some(&measured),
            self.keep_offset,
        );
        self.channels.set_hidden_translate(hidden);
        if !self.driver.is_animating() {
            let resting = if self.visible { 1.0 } else { 0.0 };
            self.driver.set_value(resting);
        }
    }

    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if visible == self.visible || self.driver.is_animating() {
            return;
        }
        if visible {
            self.driver.show(now);
        } else {
            self.driver.hide(now);
        }
        self.visible = visible;
    }

    pub fn tick(&mut self, now: Instant) -> Option<DriverEvent> {
        self.driver.tick(now)
    }

    pub fn wrap(&self, node: Node) -> Node {
        let values = self.channels.sample(self.driver.value());
        let style = node.style().cloned().unwrap_or_default();
        let styled = match self.direction {
            SlideDirection::Left | SlideDirection::Right => style
                .opacity(values.opacity)
                .translate_x(values.translate),
            SlideDirection::Top | SlideDirection::Bottom => style
                .opacity(values.opacity)
                .translate_y(values.translate),
        };
        node.styled(styled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_mount_animates_by_default() {
        let mut fx = OpacityTransition::new(0.3);
        let t0 = Instant::now();

        fx.mount(true, t0);
        assert!(fx.is_animating());
        assert_eq!(fx.opacity(), 0.3);

        fx.tick(t0 + OPACITY_DURATION);
        assert_eq!(fx.opacity(), 1.0);
    }

    #[test]
    fn opacity_mount_can_skip_the_entrance() {
        let mut fx = OpacityTransition::new(0.3).animate_on_mount(false);
        fx.mount(true, Instant::now());
        assert!(!fx.is_animating());
        assert_eq!(fx.opacity(), 1.0);
    }

    #[test]
    fn midflight_flip_is_lost() {
        let mut fx = FadeTransition::new();
        let t0 = Instant::now();

        fx.set_visible(true, t0);
        fx.set_visible(false, t0 + Duration::from_millis(50));
        // No re-check on completion; the wrapper settles shown.
        fx.tick(t0 + FADE_DURATION);
        assert!(fx.visible());
        assert!(!fx.is_animating());
    }

    #[test]
    fn slide_without_measurement_is_a_plain_fade() {
        let fx = SlideTransition::new(WindowMetrics::new(400.0, 800.0), SlideDirection::Bottom);
        let node = fx.wrap(Node::text("sheet"));
        let style = node.style().cloned().unwrap_or_default();
        assert_eq!(style.translate_y, 0.0);
        assert_eq!(style.opacity, 0.0);
    }

    #[test]
    fn slide_snaps_offset_after_measurement() {
        let window = WindowMetrics::new(400.0, 800.0);
        let mut fx = SlideTransition::new(window, SlideDirection::Bottom);
        fx.set_measured(MeasuredGeometry {
            width: 400.0,
            height: 200.0,
            page_x: 0.0,
            page_y: 600.0,
        });

        // Hidden: pushed fully below its on-screen position.
        let node = fx.wrap(Node::text("sheet"));
        let style = node.style().cloned().unwrap_or_default();
        assert_eq!(style.translate_y, 200.0);

        let t0 = Instant::now();
        fx.set_visible(true, t0);
        fx.tick(t0 + SLIDE_DURATION);
        let node = fx.wrap(Node::text("sheet"));
        let style = node.style().cloned().unwrap_or_default();
        assert_eq!(style.translate_y, 0.0);
        assert_eq!(style.opacity, 1.0);
    }
}
