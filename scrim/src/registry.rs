//! The overlay registry: an ordered set of layers painted above the app.
//!
//! All mutation goes through three operations — append, update, remove —
//! queued on the registry and applied in call order by [`commit`], which the
//! host runs once per frame. Each operation's future resolves only after the
//! commit that applied it, so callers can sequence "hide, then do X"
//! reliably.
//!
//! None of the operations fail: updating or removing an id that is not
//! present commits as a no-op and resolves normally. Removal is tombstone-
//! based (the slot stays for the rest of the commit, the index entry goes),
//! so a second removal of the same id cannot race the first into corrupting
//! paint order; the arena compacts once the commit finishes.
//!
//! The registry is an explicitly constructed value, cloned by handle into
//! whatever components need overlay access. There is no global instance.
//!
//! [`commit`]: OverlayRegistry::commit

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::node::Node;
use crate::wakeup::WakeupSender;

/// Identifier for an overlay layer. Monotonic and 1-based; never reused
/// within a registry's lifetime, even after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

impl LayerId {
    /// Get the raw id value.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Resolves once the mutation it belongs to has been committed.
///
/// Also resolves if the registry is dropped first — operations never fail.
#[derive(Debug)]
pub struct CommitAck {
    rx: oneshot::Receiver<()>,
}

impl CommitAck {
    /// Non-blocking check, for callers polling from a frame tick.
    pub fn try_ready(&mut self) -> bool {
        match self.rx.try_recv() {
            Ok(()) => true,
            Err(oneshot::error::TryRecvError::Empty) => false,
            // Registry gone; treat as settled.
            Err(oneshot::error::TryRecvError::Closed) => true,
        }
    }
}

impl Future for CommitAck {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(_) => Poll::Ready(()),
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Future returned by [`OverlayRegistry::append`]. The mutation is queued
/// eagerly when `append` is called; awaiting only waits for the commit.
#[derive(Debug)]
pub struct Append {
    id: LayerId,
    ack: CommitAck,
}

impl Append {
    /// The id assigned to the new layer, available before the commit.
    pub fn id(&self) -> LayerId {
        self.id
    }
}

impl Future for Append {
    type Output = LayerId;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<LayerId> {
        let id = self.id;
        match Pin::new(&mut self.ack).poll(cx) {
            Poll::Ready(()) => Poll::Ready(id),
            Poll::Pending => Poll::Pending,
        }
    }
}

enum Mutation {
    Append { id: LayerId, node: Node },
    Update { id: LayerId, node: Node },
    Remove { id: LayerId },
}

struct QueuedMutation {
    mutation: Mutation,
    ack: oneshot::Sender<()>,
}

/// Arena slot. A removed layer leaves its slot behind as a tombstone so
/// later indices stay valid within the commit that removed it; the arena
/// is compacted once the commit finishes applying.
struct Slot {
    id: LayerId,
    node: Option<Node>,
}

#[derive(Default)]
struct RegistryInner {
    slots: Vec<Slot>,
    index: HashMap<LayerId, usize>,
    queue: VecDeque<QueuedMutation>,
    next_id: u64,
    wakeup: Option<WakeupSender>,
}

/// Handle to the overlay layer registry. Cloning shares the same registry.
#[derive(Clone, Default)]
pub struct OverlayRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the wakeup sender nudged on every queued mutation.
    pub fn set_wakeup(&self, sender: WakeupSender) {
        self.lock().wakeup = Some(sender);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn enqueue(&self, mutation: Mutation) -> CommitAck {
        let (tx, rx) = oneshot::channel();
        let mut inner = self.lock();
        inner.queue.push_back(QueuedMutation { mutation, ack: tx });
        if let Some(wakeup) = &inner.wakeup {
            wakeup.send();
        }
        CommitAck { rx }
    }

    /// Queue an append. The new layer's id is assigned immediately; the
    /// returned ack resolves after the commit that inserts it.
    pub fn queue_append(&self, node: Node) -> (LayerId, CommitAck) {
        let id = {
            let mut inner = self.lock();
            inner.next_id += 1;
            LayerId(inner.next_id)
        };
        let ack = self.enqueue(Mutation::Append { id, node });
        (id, ack)
    }

    /// Queue an in-place content replacement for `id`.
    pub fn queue_update(&self, id: LayerId, node: Node) -> CommitAck {
        self.enqueue(Mutation::Update { id, node })
    }

    /// Queue a removal of `id`.
    pub fn queue_remove(&self, id: LayerId) -> CommitAck {
        self.enqueue(Mutation::Remove { id })
    }

    /// Append a layer above all current ones. Resolves with the new id
    /// after the commit.
    pub fn append(&self, node: Node) -> Append {
        let (id, ack) = self.queue_append(node);
        Append { id, ack }
    }

    /// Replace the content of `id`, preserving its paint position. Resolves
    /// silently if `id` is not present.
    pub fn update(&self, id: LayerId, node: Node) -> CommitAck {
        self.queue_update(id, node)
    }

    /// Remove `id`. Resolves silently if `id` is not present.
    pub fn remove(&self, id: LayerId) -> CommitAck {
        self.queue_remove(id)
    }

    /// Apply all queued mutations in call order, then resolve their acks.
    ///
    /// The host calls this once per frame, after which it repaints from
    /// [`layers`]. Returns the number of mutations applied.
    ///
    /// [`layers`]: OverlayRegistry::layers
    pub fn commit(&self) -> usize {
        let mut inner = self.lock();
        if inner.queue.is_empty() {
            return 0;
        }

        let queued: Vec<QueuedMutation> = inner.queue.drain(..).collect();
        let applied = queued.len();

        for item in &queued {
            match &item.mutation {
                Mutation::Append { id, node } => {
                    let slot_index = inner.slots.len();
                    inner.slots.push(Slot {
                        id: *id,
                        node: Some(node.clone()),
                    });
                    inner.index.insert(*id, slot_index);
                }
                Mutation::Update { id, node } => {
                    if let Some(&slot_index) = inner.index.get(id) {
                        inner.slots[slot_index].node = Some(node.clone());
                    }
                }
                Mutation::Remove { id } => {
                    if let Some(slot_index) = inner.index.remove(id) {
                        inner.slots[slot_index].node = None;
                    }
                }
            }
        }

        // Tombstones only need to survive the commit that wrote them;
        // compact so long-lived layers don't pin dead slots forever.
        if inner.slots.len() > inner.index.len() {
            inner.slots.retain(|slot| slot.node.is_some());
            inner.index = inner
                .slots
                .iter()
                .enumerate()
                .map(|(slot_index, slot)| (slot.id, slot_index))
                .collect();
        }

        log::debug!("registry: committed {applied} mutation(s)");

        for item in queued {
            let _ = item.ack.send(());
        }
        applied
    }

    /// Snapshot of live layers in insertion order (paint order: later
    /// entries paint above earlier ones).
    pub fn layers(&self) -> Vec<(LayerId, Node)> {
        self.lock()
            .slots
            .iter()
            .filter_map(|slot| slot.node.as_ref().map(|node| (slot.id, node.clone())))
            .collect()
    }

    /// Number of live layers.
    pub fn len(&self) -> usize {
        self.lock().index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().index.is_empty()
    }

    pub fn contains(&self, id: LayerId) -> bool {
        self.lock().index.contains_key(&id)
    }

    /// Whether uncommitted mutations are queued.
    pub fn has_pending(&self) -> bool {
        !self.lock().queue.is_empty()
    }
}
