//! Bottom-sheet popup.

use std::time::Instant;

use crate::color::Color;
use crate::geometry::{MeasuredGeometry, WindowMetrics};
use crate::node::{Justify, Layout, Node};
use crate::registry::OverlayRegistry;
use crate::style::Style;

use super::{AlignContent, ModalCallbacks, ModalConfig, ModalController, ModalState};

type Handler = Box<dyn FnMut()>;

/// Optional header row across the top of the sheet: a title flanked by
/// optional left/right action buttons.
#[derive(Default)]
pub struct PopupHeader {
    title: Option<String>,
    left: Option<(String, Handler)>,
    right: Option<(String, Handler)>,
}

impl PopupHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn left(mut self, label: impl Into<String>, handler: impl FnMut() + 'static) -> Self {
        self.left = Some((label.into(), Box::new(handler)));
        self
    }

    pub fn right(mut self, label: impl Into<String>, handler: impl FnMut() + 'static) -> Self {
        self.right = Some((label.into(), Box::new(handler)));
        self
    }

    fn is_empty(&self) -> bool {
        self.title.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// Sheet pinned to the bottom edge, sliding in from below.
pub struct Popup {
    controller: ModalController,
    header: PopupHeader,
    body: Node,
}

impl Popup {
    pub fn new(registry: OverlayRegistry, window: WindowMetrics) -> Self {
        Self::with_callbacks(registry, window, PopupHeader::new(), ModalCallbacks::new())
    }

    pub fn with_callbacks(
        registry: OverlayRegistry,
        window: WindowMetrics,
        header: PopupHeader,
        callbacks: ModalCallbacks,
    ) -> Self {
        let config = ModalConfig {
            align: AlignContent::FlexEnd,
            ..ModalConfig::default()
        };
        let controller = ModalController::new(registry, window, config, callbacks);
        let mut popup = Self {
            controller,
            header,
            body: Node::Empty,
        };
        popup.refresh_content();
        popup
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

    pub fn mask_pressed(&mut self) {
        self.controller.mask_pressed();
    }

    pub fn press_left(&mut self) {
        if let Some((_, handler)) = &mut self.header.left {
            handler();
        }
    }

    pub fn press_right(&mut self) {
        if let Some((_, handler)) = &mut self.header.right {
            handler();
        }
    }

    fn refresh_content(&mut self) {
        let mut children = Vec::new();
        if !self.header.is_empty() {
            let slot = |label: Option<&String>| match label {
                Some(label) => Node::text(label.clone()),
                None => Node::Empty,
            };
            let title = match &self.header.title {
                Some(title) => Node::text(title.clone()).styled(Style::new().bold()),
                None => Node::Empty,
            };
            children.push(
                Node::row(vec![
                    slot(self.header.left.as_ref().map(|(l, _)| l)),
                    title,
                    slot(self.header.right.as_ref().map(|(l, _)| l)),
                ])
                .with_layout(Layout::new().justify(Justify::SpaceBetween)),
            );
        }
        children.push(self.body.clone());

        let content = Node::column(children)
            .styled(Style::new().background(Color::WHITE))
            .with_layout(Layout::new().padding(1.0).gap(1.0));
        self.controller.set_content(content);
    }
}
