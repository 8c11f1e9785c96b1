//! The stage: composition root tying the app tree and the overlay registry
//! to one paintable output.
//!
//! A host constructs exactly one `Stage`, mounts its app tree, hands the
//! registry handle to whatever components open overlays, and then loops:
//! wait for a wakeup, commit, repaint from [`composite`].
//!
//! [`composite`]: Stage::composite

use thiserror::Error;

use crate::node::Node;
use crate::registry::OverlayRegistry;
use crate::wakeup::{self, WakeupReceiver};

#[derive(Debug, Error)]
pub enum StageError {
    #[error("an app tree is already mounted")]
    AlreadyMounted,
}

/// Owns the app tree and the overlay registry.
pub struct Stage {
    registry: OverlayRegistry,
    wakeup: WakeupReceiver,
    app: Option<Node>,
}

impl Stage {
    pub fn new() -> Self {
        let registry = OverlayRegistry::new();
        let (tx, rx) = wakeup::channel();
        registry.set_wakeup(tx);
        Self {
            registry,
            wakeup: rx,
            app: None,
        }
    }

    /// Handle to the overlay registry; clone it into components that open
    /// overlays.
    pub fn registry(&self) -> &OverlayRegistry {
        &self.registry
    }

    /// Mount the app tree. There is exactly one mount per stage.
    pub fn mount(&mut self, app: Node) -> Result<(), StageError> {
        if self.app.is_some() {
            return Err(StageError::AlreadyMounted);
        }
        self.app = Some(app);
        Ok(())
    }

    /// Replace the mounted app tree.
    pub fn update(&mut self, app: Node) {
        self.app = Some(app);
    }

    /// Block until a registry mutation requests a frame.
    pub async fn wait(&mut self) {
        self.wakeup.recv().await;
    }

    /// Apply queued overlay mutations. Returns the number applied.
    pub fn commit(&self) -> usize {
        self.registry.commit()
    }

    /// The full paintable tree: the app at the bottom, overlay layers above
    /// it in insertion order.
    pub fn composite(&self) -> Node {
        let mut children = Vec::with_capacity(1 + self.registry.len());
        children.push(self.app.clone().unwrap_or_default());
        children.extend(self.registry.layers().into_iter().map(|(_, node)| node));
        Node::stack(children)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}
