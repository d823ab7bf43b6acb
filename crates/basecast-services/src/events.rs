//! Event bus between the ingest loops and their consumers.
//!
//! Correction chunks go to every registered sink and the publisher waits for
//! all of them, so a slow caster slows the correction reader instead of
//! queueing without bound. Status lines go to at most one subscriber (the
//! relay's upstream writer) and are dropped when nobody is listening.

use std::sync::{Arc, Mutex, RwLock};

use bytes::Bytes;
use futures::future::BoxFuture;
use tokio::sync::mpsc;

/// Consumer of correction chunks.
pub trait ChunkSink: Send + Sync {
    fn deliver(&self, chunk: Bytes) -> BoxFuture<'_, ()>;
}

/// Queue depth for the status line subscriber.
const LINE_QUEUE: usize = 16;

#[derive(Clone, Default)]
pub struct EventBus {
    sinks: Arc<RwLock<Vec<Arc<dyn ChunkSink>>>>,
    line_slot: Arc<Mutex<Option<mpsc::Sender<String>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_chunk_sink(&self, sink: Arc<dyn ChunkSink>) {
        if let Ok(mut sinks) = self.sinks.write() {
            sinks.push(sink);
        }
    }

    /// Deliver `chunk` to every sink, returning once all have finished.
    pub async fn publish_chunk(&self, chunk: Bytes) {
        // Snapshot so no lock is held across the await.
        let sinks: Vec<Arc<dyn ChunkSink>> = match self.sinks.read() {
            Ok(sinks) => sinks.clone(),
            Err(_) => return,
        };
        for sink in sinks {
            sink.deliver(chunk.clone()).await;
        }
    }

    /// Become the status line subscriber, replacing any previous one.
    pub fn subscribe_lines(&self) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(LINE_QUEUE);
        if let Ok(mut slot) = self.line_slot.lock() {
            *slot = Some(tx);
        }
        rx
    }

    pub fn unsubscribe_lines(&self) {
        if let Ok(mut slot) = self.line_slot.lock() {
            *slot = None;
        }
    }

    /// Offer a status line to the subscriber. Returns false if there is none
    /// or its queue is full.
    pub fn publish_line(&self, line: String) -> bool {
        let tx = match self.line_slot.lock() {
            Ok(slot) => slot.clone(),
            Err(_) => None,
        };
        match tx {
            Some(tx) => tx.try_send(line).is_ok(),
            None => false,
        }
    }

    pub fn has_line_subscriber(&self) -> bool {
        self.line_slot
            .lock()
            .map(|slot| slot.as_ref().is_some_and(|tx| !tx.is_closed()))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct Counting {
        bytes: AtomicUsize,
        delay: Duration,
    }

    impl ChunkSink for Counting {
        fn deliver(&self, chunk: Bytes) -> BoxFuture<'_, ()> {
            Box::pin(async move {
                tokio::time::sleep(self.delay).await;
                self.bytes.fetch_add(chunk.len(), Ordering::SeqCst);
            })
        }
    }

    #[tokio::test]
    async fn publish_chunk_waits_for_every_sink() {
        let bus = EventBus::new();
        let a = Arc::new(Counting { bytes: AtomicUsize::new(0), delay: Duration::from_millis(20) });
        let b = Arc::new(Counting { bytes: AtomicUsize::new(0), delay: Duration::ZERO });
        bus.add_chunk_sink(a.clone());
        bus.add_chunk_sink(b.clone());

        bus.publish_chunk(Bytes::from_static(&[1, 2, 3])).await;

        assert_eq!(a.bytes.load(Ordering::SeqCst), 3);
        assert_eq!(b.bytes.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn lines_reach_only_the_current_subscriber() {
        let bus = EventBus::new();
        assert!(!bus.publish_line("$GPGGA,1".into()));

        let mut old = bus.subscribe_lines();
        let mut current = bus.subscribe_lines();
        assert!(bus.has_line_subscriber());
        assert!(bus.publish_line("$GPGGA,2".into()));

        assert_eq!(current.recv().await.as_deref(), Some("$GPGGA,2"));
        // Replaced subscriber's sender was dropped.
        assert_eq!(old.recv().await, None);

        bus.unsubscribe_lines();
        assert!(!bus.has_line_subscriber());
        assert!(!bus.publish_line("$GPGGA,3".into()));
    }
}
