//! Blocking Ring Buffer Monitor

use listing_intake::Listing;
use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex};

/// Producer half of the monitor state
struct IntakeSide {
    /// Write cursor
    tail: usize,
    /// Free slot count
    free: usize,
}

/// Consumer half of the monitor state
struct DrainSide {
    /// Read cursor
    head: usize,
    /// Occupied slot count
    occupied: usize,
}

/// Bounded blocking ring buffer for listings
///
/// The monitor state is split into two independently locked halves so the
/// producer and the consumers only contend on their own side: the intake
/// side holds the write cursor and free count with a "space became free"
/// condition, the drain side holds the read cursor and occupied count with
/// a "work became available" condition. Invariant between operations:
/// `occupied + free == capacity`.
pub struct ListingBuffer {
    /// Pre-allocated storage
    slots: Box<[UnsafeCell<Listing>]>,
    /// Capacity of the buffer
    capacity: usize,
    /// Intake side state
    intake: Mutex<IntakeSide>,
    /// Producer waits here while the buffer is full
    space: Condvar,
    /// Drain side state
    drain: Mutex<DrainSide>,
    /// Consumers wait here while the buffer is empty
    work: Condvar,
    /// Non-sentinel listings enqueued (for statistics)
    produced: AtomicUsize,
    /// Non-sentinel listings dequeued (for statistics)
    consumed: AtomicUsize,
}

impl ListingBuffer {
    /// Create a new buffer with given capacity
    ///
    /// Panics on zero capacity; callers size the buffer from the known
    /// input count before any worker starts.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be at least 1");
        let slots: Vec<UnsafeCell<Listing>> = (0..capacity)
            .map(|_| UnsafeCell::new(Listing::default()))
            .collect();
        Self {
            slots: slots.into_boxed_slice(),
            capacity,
            intake: Mutex::new(IntakeSide {
                tail: 0,
                free: capacity,
            }),
            space: Condvar::new(),
            drain: Mutex::new(DrainSide {
                head: 0,
                occupied: 0,
            }),
            work: Condvar::new(),
            produced: AtomicUsize::new(0),
            consumed: AtomicUsize::new(0),
        }
    }

    /// Enqueue a listing, blocking while the buffer is full
    pub fn put(&self, listing: Listing) {
        let sentinel = listing.is_end_of_stream();

        let mut intake = self.intake.lock().expect("intake lock poisoned");
        while intake.free == 0 {
            intake = self.space.wait(intake).expect("intake lock poisoned");
        }
        // SAFETY: the slot at `tail` is counted free, so no consumer reads
        // it, and the intake lock serializes writers. The occupied-count
        // hand-off below publishes the write before a reader can reach it.
        unsafe {
            *self.slots[intake.tail].get() = listing;
        }
        intake.tail = (intake.tail + 1) % self.capacity;
        intake.free -= 1;
        drop(intake);

        let mut drain = self.drain.lock().expect("drain lock poisoned");
        drain.occupied += 1;
        drop(drain);
        self.work.notify_one();

        if !sentinel {
            self.produced.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Dequeue a listing, blocking while the buffer is empty
    ///
    /// The end-of-stream sentinel is returned but left in the ring, and one
    /// further waiter is woken, so every consumer observes it exactly once
    /// without the producer knowing the consumer count.
    pub fn take(&self) -> Listing {
        let mut drain = self.drain.lock().expect("drain lock poisoned");
        while drain.occupied == 0 {
            drain = self.work.wait(drain).expect("drain lock poisoned");
        }

        // SAFETY: the slot at `head` is counted occupied and the drain lock
        // is held, so the producer cannot be writing it.
        let slot = unsafe { &mut *self.slots[drain.head].get() };
        if slot.is_end_of_stream() {
            let sentinel = slot.clone();
            drop(drain);
            self.work.notify_one();
            return sentinel;
        }

        let listing = std::mem::take(slot);
        drain.head = (drain.head + 1) % self.capacity;
        drain.occupied -= 1;
        drop(drain);

        let mut intake = self.intake.lock().expect("intake lock poisoned");
        intake.free += 1;
        drop(intake);
        self.space.notify_one();

        self.consumed.fetch_add(1, Ordering::Relaxed);
        listing
    }

    /// Enqueue the end-of-stream sentinel
    pub fn close(&self) {
        self.put(Listing::end_of_stream());
    }

    /// Get the buffer capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of occupied slots
    pub fn len(&self) -> usize {
        self.drain.lock().expect("drain lock poisoned").occupied
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Non-sentinel listings enqueued so far (for statistics)
    pub fn produced(&self) -> usize {
        self.produced.load(Ordering::Relaxed)
    }

    /// Non-sentinel listings dequeued so far (for statistics)
    pub fn consumed(&self) -> usize {
        self.consumed.load(Ordering::Relaxed)
    }
}

// SAFETY: slot access is ordered by the free/occupied counter hand-off
// through the two mutexes; a slot is never readable and writable at the
// same time.
unsafe impl Send for ListingBuffer {}
unsafe impl Sync for ListingBuffer {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::thread;

    fn listing(n: usize) -> Listing {
        Listing::new(format!("maker-{}", n), 2000 + n as i32, n as f64 * 100.0)
    }

    #[test]
    fn test_fifo_order_single_consumer() {
        let buffer = Arc::new(ListingBuffer::new(4));
        let producer = {
            let buffer = Arc::clone(&buffer);
            thread::spawn(move || {
                for i in 0..16 {
                    buffer.put(listing(i));
                }
                buffer.close();
            })
        };

        let mut seen = Vec::new();
        loop {
            let item = buffer.take();
            if item.is_end_of_stream() {
                break;
            }
            seen.push(item);
        }
        producer.join().unwrap();

        assert_eq!(seen.len(), 16);
        for (i, item) in seen.iter().enumerate() {
            assert_eq!(item.manufacturer, format!("maker-{}", i));
        }
        assert_eq!(buffer.produced(), buffer.consumed());
    }

    #[test]
    fn test_capacity_one_still_delivers() {
        let buffer = Arc::new(ListingBuffer::new(1));
        let consumer = {
            let buffer = Arc::clone(&buffer);
            thread::spawn(move || {
                let mut count = 0;
                while !buffer.take().is_end_of_stream() {
                    count += 1;
                }
                count
            })
        };

        for i in 0..8 {
            buffer.put(listing(i));
        }
        buffer.close();
        assert_eq!(consumer.join().unwrap(), 8);
    }

    #[test]
    fn test_sentinel_reaches_every_consumer() {
        let buffer = Arc::new(ListingBuffer::new(4));
        let consumers: Vec<_> = (0..6)
            .map(|_| {
                let buffer = Arc::clone(&buffer);
                thread::spawn(move || {
                    let mut items = 0;
                    loop {
                        let item = buffer.take();
                        if item.is_end_of_stream() {
                            return items;
                        }
                        items += 1;
                    }
                })
            })
            .collect();

        for i in 0..10 {
            buffer.put(listing(i));
        }
        buffer.close();

        let mut total = 0;
        for consumer in consumers {
            total += consumer.join().unwrap();
        }
        assert_eq!(total, 10);
        assert_eq!(buffer.consumed(), 10);
    }

    #[test]
    fn test_empty_stream_terminates() {
        let buffer = Arc::new(ListingBuffer::new(1));
        let consumer = {
            let buffer = Arc::clone(&buffer);
            thread::spawn(move || buffer.take())
        };
        buffer.close();
        assert!(consumer.join().unwrap().is_end_of_stream());
        assert_eq!(buffer.produced(), 0);
        // The sentinel is never removed from the ring.
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.len(), 1);
        assert!(!buffer.is_empty());
    }

    #[test]
    #[should_panic(expected = "capacity")]
    fn test_zero_capacity_panics() {
        let _ = ListingBuffer::new(0);
    }

    proptest! {
        #[test]
        fn prop_every_listing_delivered_in_order(count in 0usize..48, capacity in 1usize..8) {
            let buffer = Arc::new(ListingBuffer::new(capacity));
            let consumer = {
                let buffer = Arc::clone(&buffer);
                thread::spawn(move || {
                    let mut seen = Vec::new();
                    loop {
                        let item = buffer.take();
                        if item.is_end_of_stream() {
                            return seen;
                        }
                        seen.push(item.year);
                    }
                })
            };

            for i in 0..count {
                buffer.put(listing(i));
            }
            buffer.close();

            let seen = consumer.join().unwrap();
            let expected: Vec<i32> = (0..count).map(|i| 2000 + i as i32).collect();
            prop_assert_eq!(seen, expected);
            prop_assert_eq!(buffer.produced(), count);
            prop_assert_eq!(buffer.consumed(), count);
        }
    }
}
