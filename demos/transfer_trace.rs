use stackqueue::{QueueError, TwoStackQueue};
use tracing_subscriber::EnvFilter;

// RUST_LOG=stackqueue=trace cargo run --example transfer_trace -- 6
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let capacity = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 10,
    };
    let mut q = TwoStackQueue::new(capacity);

    let mut next = 0u64;
    loop {
        match q.enqueue(next) {
            Ok(()) => next += 1,
            Err(QueueError::Full { .. }) => break,
            Err(e) => return Err(e.into()),
        }
    }
    println!("Enqueued {} items: {:?}", q.len(), q);

    // Dequeue half, then refill so the items are split between both stacks.
    for _ in 0..capacity / 2 {
        println!("Dequeued {}", q.dequeue()?);
    }
    while !q.is_full() {
        q.enqueue(next)?;
        next += 1;
    }
    println!("Refilled: {:?}", q);

    let t = std::time::Instant::now();
    let drained: Vec<_> = q.drain().collect();
    let d = t.elapsed().as_micros();

    println!("Drained {:?} in {}us", drained, d);
    q.clear();
    Ok(())
}
