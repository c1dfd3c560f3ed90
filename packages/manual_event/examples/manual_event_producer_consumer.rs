//! A producer thread publishes work items one at a time and a consumer thread processes them,
//! with a pair of events handing control back and forth between the two.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use manual_event::Event;

const ITEM_COUNT: u64 = 10;

#[derive(Debug, Default)]
struct Mailbox {
    // Signaled when `item` holds something for the consumer.
    item_ready: Event,

    // Signaled when the consumer is done with `item` and the producer may overwrite it.
    item_taken: Event,

    item: Mutex<Option<u64>>,
}

fn main() {
    let mailbox = Arc::new(Mailbox::default());
    let total = Arc::new(AtomicU64::new(0));

    let consumer = thread::spawn({
        let mailbox = Arc::clone(&mailbox);
        let total = Arc::clone(&total);

        move || {
            for _ in 0..ITEM_COUNT {
                mailbox.item_ready.wait();

                let item = mailbox
                    .item
                    .lock()
                    .unwrap()
                    .take()
                    .expect("producer signals only after storing an item");

                println!("consumed item {item}");
                total.fetch_add(item, Ordering::Relaxed);

                mailbox.item_taken.set();
            }
        }
    });

    for item in 1..=ITEM_COUNT {
        *mailbox.item.lock().unwrap() = Some(item);
        mailbox.item_ready.set();

        mailbox.item_taken.wait();
    }

    consumer.join().unwrap();

    println!("sum of all items: {}", total.load(Ordering::Relaxed));
}
