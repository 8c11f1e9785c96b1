//! Anchored popover menu.
//!
//! Unlike [`Dialog`] and [`Popup`], a popover owns its visibility: pressing
//! the trigger opens it, pressing an item or the mask closes it. The anchor
//! geometry is captured at press time, so the menu stays where the trigger
//! was even if layout shifts while it is open.
//!
//! [`Dialog`]: super::Dialog
//! [`Popup`]: super::Popup

use std::time::Instant;

use crate::color::Color;
use crate::geometry::{MeasuredGeometry, WindowMetrics};
use crate::node::{Layout, Node};
use crate::registry::OverlayRegistry;
use crate::style::{Inset, Style};

use super::{AlignContent, ModalCallbacks, ModalConfig, ModalController, ModalState};

const ANCHOR_GAP: f32 = 15.0;

/// Which side of the trigger the menu opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopoverPosition {
    Above,
    #[default]
    Below,
    Left,
    Right,
}

/// Edge offsets anchoring the menu next to its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorOffsets {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
}

impl AnchorOffsets {
    fn into_inset(self) -> Inset {
        let mut inset = Inset::new();
        if let Some(left) = self.left {
            inset = inset.left(left);
        }
        if let Some(top) = self.top {
            inset = inset.top(top);
        }
        if let Some(right) = self.right {
            inset = inset.right(right);
        }
        if let Some(bottom) = self.bottom {
            inset = inset.bottom(bottom);
        }
        inset
    }
}

/// Compute the menu's edge offsets from the trigger's measured geometry,
/// leaving `gap` between them. Offsets are clamped to the window so the
/// menu never anchors off-screen.
pub fn anchor_offsets(
    window: WindowMetrics,
    trigger: &MeasuredGeometry,
    position: PopoverPosition,
    gap: f32,
) -> AnchorOffsets {
    let clamp_x = |v: f32| v.clamp(0.0, window.width);
    let clamp_y = |v: f32| v.clamp(0.0, window.height);

    match position {
        PopoverPosition::Below => AnchorOffsets {
            left: Some(clamp_x(trigger.page_x)),
            top: Some(clamp_y(trigger.page_y + trigger.height + gap)),
            ..AnchorOffsets::default()
        },
        PopoverPosition::Above => AnchorOffsets {
            left: Some(clamp_x(trigger.page_x)),
            bottom: Some(clamp_y(window.height - trigger.page_y + gap)),
            ..AnchorOffsets::default()
        },
        PopoverPosition::Right => AnchorOffsets {
            left: Some(clamp_x(trigger.page_x + trigger.width + gap)),
            top: Some(clamp_y(trigger.page_y)),
            ..AnchorOffsets::default()
        },
        PopoverPosition::Left => AnchorOffsets {
            right: Some(clamp_x(window.width - trigger.page_x + gap)),
            top: Some(clamp_y(trigger.page_y)),
            ..AnchorOffsets::default()
        },
    }
}

/// One selectable menu entry carrying its payload.
pub struct PopoverItem<T> {
    label: String,
    value: T,
}

impl<T> PopoverItem<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

/// Anchored menu of items; selecting one closes the menu and reports the
/// item's payload.
pub struct Popover<T> {
    controller: ModalController,
    window: WindowMetrics,
    items: Vec<PopoverItem<T>>,
    on_press: Box<dyn FnMut(&T, usize)>,
    position: PopoverPosition,
    anchor: Option<AnchorOffsets>,
    open: bool,
}

impl<T> Popover<T> {
    pub fn new(
        registry: OverlayRegistry,
        window: WindowMetrics,
        items: Vec<PopoverItem<T>>,
        on_press: impl FnMut(&T, usize) + 'static,
    ) -> Self {
        let config = ModalConfig {
            // Menus sit over live content; no dim.
            transparent: true,
            align: AlignContent::Center,
            ..ModalConfig::default()
        };
        let controller = ModalController::new(registry, window, config, ModalCallbacks::new());
        Self {
            controller,
            window,
            items,
            on_press: Box::new(on_press),
            position: PopoverPosition::default(),
            anchor: None,
            open: false,
        }
    }

    pub fn position(mut self, position: PopoverPosition) -> Self {
        self.position = position;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn state(&self) -> ModalState {
        self.controller.state()
    }

    /// The trigger was pressed: capture its geometry and open the menu.
    pub fn trigger_pressed(&mut self, trigger: MeasuredGeometry) {
        self.anchor = Some(anchor_offsets(
            self.window,
            &trigger,
            self.position,
            ANCHOR_GAP,
        ));
        self.refresh_content();
        self.open = true;
        self.controller.set_visible(true);
    }

    /// An item was selected: close first, then report the payload and its
    /// position in the item list.
    pub fn press_item(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.close();
        (self.on_press)(&self.items[index].value, index);
    }

    /// The mask was pressed: just close.
    pub fn mask_pressed(&mut self) {
        self.close();
    }

    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    pub fn unmount(&mut self) {
        self.open = false;
        self.controller.unmount();
    }

    fn close(&mut self) {
        self.open = false;
        self.controller.set_visible(false);
    }

    /// Glyph pointing back at the trigger from the menu's facing edge.
    fn arrow(&self) -> Node {
        let glyph = match self.position {
            PopoverPosition::Below => "▲",
            PopoverPosition::Above => "▼",
            PopoverPosition::Right => "◀",
            PopoverPosition::Left => "▶",
        };
        Node::text(glyph).styled(Style::new().foreground(Color::WHITE))
    }

    fn refresh_content(&mut self) {
        let entries = self
            .items
            .iter()
            .map(|item| Node::text(item.label.clone()))
            .collect();
        let menu = Node::column(entries)
            .styled(Style::new().background(Color::WHITE))
            .with_layout(Layout::new().padding(1.0));

        // The arrow sits on whichever edge faces the trigger.
        let assembled = match self.position {
            PopoverPosition::Below => Node::column(vec![self.arrow(), menu]),
            PopoverPosition::Above => Node::column(vec![menu, self.arrow()]),
            PopoverPosition::Right => Node::row(vec![self.arrow(), menu]),
            PopoverPosition::Left => Node::row(vec![menu, self.arrow()]),
        };

        let mut style = Style::new();
        if let Some(anchor) = self.anchor {
            style = style.inset(anchor.into_inset());
        }
        self.controller.set_content(assembled.styled(style));
    }
}
