//! Centered confirmation dialog.

use std::time::Instant;

use crate::color::Color;
use crate::geometry::{MeasuredGeometry, WindowMetrics};
use crate::node::{Justify, Layout, Node};
use crate::registry::OverlayRegistry;
use crate::style::Style;

use super::{AlignContent, ModalCallbacks, ModalConfig, ModalController, ModalState};

type Handler = Box<dyn FnMut()>;

/// One dialog action: a label and the handler it fires when pressed.
///
/// Pressing a button does not dismiss the dialog by itself; the handler
/// flips the visibility intent if it wants to.
pub struct DialogButton {
    label: String,
    handler: Handler,
}

impl DialogButton {
    pub fn new(label: impl Into<String>, handler: impl FnMut() + 'static) -> Self {
        Self {
            label: label.into(),
            handler: Box::new(handler),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Centered modal with a title, a body slot and a cancel/confirm action row.
///
/// Title and both actions are required at construction; a dialog without
/// them has no way to be answered.
pub struct Dialog {
    controller: ModalController,
    title: String,
    body: Node,
    cancel: DialogButton,
    confirm: DialogButton,
}

impl Dialog {
    const CONFIRM_ACCENT: Color = Color::oklch(0.62, 0.16, 250.0);

    pub fn new(
        registry: OverlayRegistry,
        window: WindowMetrics,
        title: impl Into<String>,
        cancel: DialogButton,
        confirm: DialogButton,
    ) -> Self {
        Self::with_callbacks(registry, window, title, cancel, confirm, ModalCallbacks::new())
    }

    pub fn with_callbacks(
        registry: OverlayRegistry,
        window: WindowMetrics,
        title: impl Into<String>,
        cancel: DialogButton,
        confirm: DialogButton,
        callbacks: ModalCallbacks,
    ) -> Self {
        let config = ModalConfig {
            align: AlignContent::Center,
            ..ModalConfig::default()
        };
        let controller = ModalController::new(registry, window, config, callbacks);
        let mut dialog = Self {
            controller,
            title: title.into(),
            body: Node::Empty,
            cancel,
            confirm,
        };
        dialog.refresh_content();
        dialog
    }

    pub fn set_body(&mut self, body: Node) {
        self.body = body;
        self.refresh_content();
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.controller.set_visible(visible);
    }

    pub fn set_measured(&mut self, measured: MeasuredGeometry) {
        self.controller.set_measured(measured);
    }

    pub fn state(&self) -> ModalState {
        self.controller.state()
    }

    pub fn tick(&mut self, now: Instant) {
        self.controller.tick(now);
    }

    pub fn unmount(&mut self) {
        self.controller.unmount();
    }

    pub fn press_cancel(&mut self) {
        (self.cancel.handler)();
    }

    pub fn press_confirm(&mut self) {
        (self.confirm.handler)();
    }

    fn refresh_content(&mut self) {
        let title = Node::text(self.title.clone()).styled(Style::new().bold());
        let actions = Node::row(vec![
            Node::text(self.cancel.label.clone()),
            Node::text(self.confirm.label.clone())
                .styled(Style::new().foreground(Self::CONFIRM_ACCENT).bold()),
        ])
        .with_layout(Layout::new().justify(Justify::SpaceBetween).gap(2.0));

        let content = Node::column(vec![title, self.body.clone(), actions])
            .styled(Style::new().background(Color::WHITE))
            .with_layout(Layout::new().padding(2.0).gap(1.0));
        self.controller.set_content(content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn buttons_fire_their_handlers() {
        let cancelled = Rc::new(Cell::new(false));
        let confirmed = Rc::new(Cell::new(false));
        let c1 = Rc::clone(&cancelled);
        let c2 = Rc::clone(&confirmed);

        let mut dialog = Dialog::new(
            OverlayRegistry::new(),
            WindowMetrics::new(400.0, 800.0),
            "Discard changes?",
            DialogButton::new("Cancel", move || c1.set(true)),
            DialogButton::new("Discard", move || c2.set(true)),
        );

        dialog.press_cancel();
        assert!(cancelled.get());
        assert!(!confirmed.get());

        dialog.press_confirm();
        assert!(confirmed.get());
    }

    #[test]
    fn pressing_a_button_does_not_dismiss() {
        let registry = OverlayRegistry::new();
        let mut dialog = Dialog::new(
            registry.clone(),
            WindowMetrics::new(400.0, 800.0),
            "Sure?",
            DialogButton::new("No", || {}),
            DialogButton::new("Yes", || {}),
        );

        dialog.set_visible(true);
        dialog.tick(Instant::now());
        registry.commit();
        assert_eq!(registry.len(), 1);

        dialog.press_confirm();
        dialog.tick(Instant::now());
        registry.commit();
        // Still mounted; the handler decides whether to hide.
        assert_eq!(registry.len(), 1);
    }
}
