//! The animation driver: one interpolated value and its show/hide lifecycle.
//!
//! A driver owns a single value between a configured minimum and 1.0.
//! `show()` runs it toward 1.0, `hide()` back toward the minimum. A request
//! arriving while a transition is in flight is dropped, in either direction —
//! there is no queueing and no mid-flight reversal. Callers that need
//! "settle on the last requested state" semantics re-check their intent when
//! a completion event arrives (see [`crate::modal::ModalController`]).
//!
//! Progress is clock-driven: the owner passes `Instant`s into [`tick`], which
//! keeps every transition deterministic under test.
//!
//! [`tick`]: AnimationDriver::tick

use std::fmt;
use std::time::Instant;

use crate::transitions::TransitionConfig;

/// What the driver is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverPhase {
    #[default]
    Idle,
    Showing,
    Hiding,
}

/// Emitted once from [`AnimationDriver::tick`] when a transition finishes
/// naturally. `stop()` never produces an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverEvent {
    ShowComplete,
    HideComplete,
}

type Callback = Box<dyn FnMut()>;

/// Drives one interpolated value through show/hide transitions.
pub struct AnimationDriver {
    value: f32,
    min: f32,
    from: f32,
    phase: DriverPhase,
    started: Option<Instant>,
    show_config: TransitionConfig,
    hide_config: TransitionConfig,
    on_show: Option<Callback>,
    on_hide: Option<Callback>,
}

impl fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("value", &self.value)
            .field("min", &self.min)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl AnimationDriver {
    /// Create a driver resting at `initial`, hiding toward `min`.
    pub fn new(initial: f32, min: f32) -> Self {
        Self {
            value: initial,
            min,
            from: initial,
            phase: DriverPhase::Idle,
            started: None,
            show_config: TransitionConfig::show_default(),
            hide_config: TransitionConfig::hide_default(),
            on_show: None,
            on_hide: None,
        }
    }

    pub fn with_show(mut self, config: TransitionConfig) -> Self {
        self.show_config = config;
        self
    }

    pub fn with_hide(mut self, config: TransitionConfig) -> Self {
        self.hide_config = config;
        self
    }

    pub fn on_show(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_show = Some(Box::new(callback));
        self
    }

    pub fn on_hide(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_hide = Some(Box::new(callback));
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn phase(&self) -> DriverPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase != DriverPhase::Idle
    }

    /// Snap the value without animating. Intended for resetting to an
    /// extreme before a transition or after a layout measurement.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    /// Start animating toward 1.0 from the current value.
    ///
    /// Returns `false` when the request was dropped because a transition is
    /// already in flight.
    pub fn show(&mut self, now: Instant) -> bool {
        if self.is_animating() {
            log::debug!("driver: show() dropped, {:?} in flight", self.phase);
            return false;
        }
        self.from = self.value;
        self.phase = DriverPhase::Showing;
        self.started = Some(now);
        true
    }

    /// Start animating toward the configured minimum from the current value.
    ///
    /// Returns `false` when the request was dropped because a transition is
    /// already in flight.
    pub fn hide(&mut self, now: Instant) -> bool {
        if self.is_animating() {
            log::debug!("driver: hide() dropped, {:?} in flight", self.phase);
            return false;
        }
        self.from = self.value;
        self.phase = DriverPhase::Hiding;
        self.started = Some(now);
        true
    }

    /// Halt any in-flight transition immediately. No completion event is
    /// produced and no callback fires; teardown only.
    pub fn stop(&mut self) {
        self.phase = DriverPhase::Idle;
        self.started = None;
    }

    /// Advance the value for the current frame.
    ///
    /// Returns the completion event exactly once, on the tick where the
    /// transition reaches its target; the matching callback fires on the
    /// same tick.
    pub fn tick(&mut self, now: Instant) -> Option<DriverEvent> {
        let (config, target, event) = match self.phase {
            DriverPhase::Idle => return None,
            DriverPhase::Showing => (self.show_config, 1.0, DriverEvent::ShowComplete),
            DriverPhase::Hiding => (self.hide_config, self.min, DriverEvent::HideComplete),
        };
        let started = self.started?;

        let t = if config.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(started).as_secs_f32();
            (elapsed / config.duration.as_secs_f32()).min(1.0)
        };

        if t >= 1.0 {
            self.value = target;
            self.phase = DriverPhase::Idle;
            self.started = None;

            let callback = match event {
                DriverEvent::ShowComplete => self.on_show.as_mut(),
                DriverEvent::HideComplete => self.on_hide.as_mut(),
            };
            if let Some(callback) = callback {
                callback();
            }
            return Some(event);
        }

        let eased = config.easing.apply(t);
        self.value = self.from + (target - self.from) * eased;
        None
    }
}

/// Linear interpolation.
pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Sub-channels fanned out from a single driver value.
///
/// Opacity is always present; scale and translate are optional. Because all
/// channels derive from the same value they run as one synchronized group,
/// and the driver's single completion event covers them all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channels {
    min_opacity: f32,
    min_scale: Option<f32>,
    hidden_translate: Option<f32>,
}

/// Interpolated channel values for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelValues {
    pub opacity: f32,
    pub scale: f32,
    pub translate: f32,
}

impl Channels {
    /// Opacity only.
    pub fn opacity(min_opacity: f32) -> Self {
        Self {
            min_opacity,
            min_scale: None,
            hidden_translate: None,
        }
    }

    /// Add a scale channel resting at `min_scale` when hidden.
    pub fn with_scale(mut self, min_scale: f32) -> Self {
        self.min_scale = Some(min_scale);
        self
    }

    /// Add a translate channel resting at `hidden` when hidden.
    pub fn with_translate(mut self, hidden: f32) -> Self {
        self.hidden_translate = Some(hidden);
        self
    }

    /// Replace the translate resting offset (after a layout measurement).
    pub fn set_hidden_translate(&mut self, hidden: f32) {
        self.hidden_translate = Some(hidden);
    }

    /// Interpolate all channels at `progress` (0 hidden, 1 shown).
    pub fn sample(&self, progress: f32) -> ChannelValues {
        ChannelValues {
            opacity: lerp(self.min_opacity, 1.0, progress),
            scale: self.min_scale.map_or(1.0, |min| lerp(min, 1.0, progress)),
            translate: self
                .hidden_translate
                .map_or(0.0, |hidden| lerp(hidden, 0.0, progress)),
        }
    }
}
