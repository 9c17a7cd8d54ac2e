//! Shared horizontal scroll offset
//!
//! One writer (the carousel's scroll handling) and any number of readers
//! (carousel transforms, backdrop reveal). Backed by `tokio::sync::watch`,
//! which needs no runtime for the synchronous calls used here.

use tokio::sync::watch;

/// Create a linked writer/reader pair starting at offset 0
pub fn scroll_offset() -> (ScrollOffsetWriter, ScrollOffsetReader) {
    let (tx, rx) = watch::channel(0.0);
    (ScrollOffsetWriter { tx }, ScrollOffsetReader { rx })
}

/// The only handle allowed to move the offset; not `Clone`
#[derive(Debug)]
pub struct ScrollOffsetWriter {
    tx: watch::Sender<f64>,
}

impl ScrollOffsetWriter {
    /// Publish a new offset; returns whether the value changed
    pub fn publish(&self, offset: f64) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == offset {
                false
            } else {
                *current = offset;
                true
            }
        })
    }

    /// Last published offset
    pub fn current(&self) -> f64 {
        *self.tx.borrow()
    }

    /// Hand out another reader
    pub fn reader(&self) -> ScrollOffsetReader {
        ScrollOffsetReader {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read-only view of the offset
#[derive(Debug, Clone)]
pub struct ScrollOffsetReader {
    rx: watch::Receiver<f64>,
}

impl ScrollOffsetReader {
    /// Current offset
    pub fn get(&self) -> f64 {
        *self.rx.borrow()
    }

    /// Whether a new value was published since the last `mark_seen`
    ///
    /// A dropped writer counts as no change.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Read the offset and mark it as seen
    pub fn mark_seen(&mut self) -> f64 {
        *self.rx.borrow_and_update()
    }

    /// Wait for the next published offset; `None` once the writer is gone
    pub async fn changed(&mut self) -> Option<f64> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let (writer, reader) = scroll_offset();
        assert_eq!(writer.current(), 0.0);
        assert_eq!(reader.get(), 0.0);
        assert!(!reader.has_changed());
    }

    #[test]
    fn test_all_readers_see_publish() {
        let (writer, mut carousel) = scroll_offset();
        let mut backdrop = writer.reader();

        assert!(writer.publish(42.5));
        assert!(carousel.has_changed());
        assert!(backdrop.has_changed());
        assert_eq!(carousel.mark_seen(), 42.5);
        assert_eq!(backdrop.mark_seen(), 42.5);
        assert!(!carousel.has_changed());
    }

    #[test]
    fn test_equal_value_is_not_a_change() {
        let (writer, mut reader) = scroll_offset();
        writer.publish(10.0);
        reader.mark_seen();

        assert!(!writer.publish(10.0));
        assert!(!reader.has_changed());
    }

    #[test]
    fn test_cloned_reader_tracks_independently() {
        let (writer, mut first) = scroll_offset();
        writer.publish(1.0);
        let second = first.clone();
        first.mark_seen();
        assert!(!first.has_changed());
        assert!(second.has_changed());
    }

    #[tokio::test]
    async fn test_changed_ends_when_writer_dropped() {
        let (writer, mut reader) = scroll_offset();
        writer.publish(3.0);
        assert_eq!(reader.changed().await, Some(3.0));
        drop(writer);
        assert_eq!(reader.changed().await, None);
    }
}
