// In demos/pooled.rs
//
// Payload buffers come from a preallocated pool, travel through the channel
// and go back to the pool when the consumer is done with them.
use dmxp_mpsc::channel;
use dmxp_mpsc::Core::{logger, Pool};
use std::io;
use std::thread;

const FRAME: usize = 1024;

fn main() -> io::Result<()> {
    logger::init().map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let pool = Pool::new(32)?;
    let (tx, mut rx) = channel(16);

    let producer = {
        let pool = pool.clone();
        thread::spawn(move || {
            let mut sent = 0u32;
            let mut starved = 0u64;
            while sent < 10_000 {
                let Some(mut frame) = pool.get([0u8; FRAME]) else {
                    starved += 1;
                    thread::yield_now();
                    continue;
                };
                frame[..4].copy_from_slice(&sent.to_le_bytes());
                if !tx.send_one(frame) {
                    break;
                }
                sent += 1;
            }
            (sent, starved)
        })
    };

    let mut received = 0u32;
    while let Some(frame) = rx.receive() {
        let seq = u32::from_le_bytes([frame[0], frame[1], frame[2], frame[3]]);
        assert_eq!(seq, received, "frames arrive in send order");
        received += 1;
    }

    let (sent, starved) = producer
        .join()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "producer thread panicked"))?;

    log::info!(
        "Pooled: sent {}, received {}, producer waited for a free frame {} times",
        sent,
        received,
        starved
    );
    log::info!("Pool after run: {:?}", pool);
    Ok(())
}
