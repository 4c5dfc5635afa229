// In demos/pipeline.rs
//
// Several producers hash "message_<n>" strings and stream them through one
// bounded channel; a single consumer re-hashes every message and checks it.
//
//   cargo run --example pipeline -- --producers 4 --messages 10000 --capacity 256
use dmxp_mpsc::Core::{args::Args, logger};
use dmxp_mpsc::ChannelBuilder;
use log::LevelFilter;
use sha2::{Digest, Sha256};
use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

const BATCH: usize = 64;

fn hash_hex(i: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("message_{}", i).as_bytes());
    format!("{:x}", hasher.finalize())
}

fn positive(args: &Args, flag: &str) -> io::Result<usize> {
    match args.get_integer(flag) {
        Some(v) if v > 0 => Ok(v as usize),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{flag} must be a positive integer"),
        )),
    }
}

fn main() -> io::Result<()> {
    let mut args = Args::new();
    args.flag("--verbose")
        .integer("--producers", 4)
        .integer("--messages", 10_000)
        .integer("--capacity", 256);
    args.parse(std::env::args().skip(1))?;

    let producers = positive(&args, "--producers")?;
    let messages = positive(&args, "--messages")?;
    let capacity = positive(&args, "--capacity")?;

    logger::init().map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    if args.get_flag("--verbose") {
        logger::set_level(LevelFilter::Debug);
    }

    let keep_alive = Arc::new(AtomicBool::new(true));
    let keep_alive_for_handler = Arc::clone(&keep_alive);

    // Handle Ctrl+C: producers stop, the consumer drains and exits
    ctrlc::set_handler(move || {
        keep_alive_for_handler.store(false, Ordering::SeqCst);
    })
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let (tx, mut rx) = ChannelBuilder::new()
        .with_capacity(capacity)
        .build::<(usize, String)>()?;

    log::info!(
        "Pipeline: {} producers, {} messages, channel {} with capacity {}",
        producers,
        messages,
        tx.channel_id(),
        capacity
    );

    let start = Instant::now();
    let handles: Vec<_> = (0..producers)
        .map(|p_id| {
            let tx = tx.clone();
            let keep_alive = Arc::clone(&keep_alive);
            thread::spawn(move || {
                // Producer p sends messages p, p + producers, p + 2 * producers, ...
                let mut batch = VecDeque::with_capacity(BATCH);
                let mut sent = 0;
                let mut ids = (p_id..messages).step_by(producers).peekable();

                while keep_alive.load(Ordering::SeqCst) && ids.peek().is_some() {
                    batch.extend(ids.by_ref().take(BATCH).map(|i| (i, hash_hex(i))));
                    let want = batch.len();
                    let got = tx.send_all(&mut batch);
                    sent += got;
                    if got < want {
                        log::warn!("Producer {}: receiver gone after {} messages", p_id, sent);
                        break;
                    }
                }

                log::debug!("Producer {}: sent {} messages", p_id, sent);
                sent
            })
        })
        .collect();
    drop(tx);

    let mut received = 0;
    let mut corrupted = 0;
    for (i, hash) in rx.iter() {
        if hash != hash_hex(i) {
            log::error!("Message {} has a bad hash: {}", i, hash);
            corrupted += 1;
        }
        received += 1;
        if received % 1000 == 0 {
            log::debug!("--- Received {} messages ---", received);
        }
    }

    let mut sent = 0;
    for h in handles {
        sent += h
            .join()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "producer thread panicked"))?;
    }

    let elapsed = start.elapsed();
    log::info!("Pipeline: sent {}, received {} in {:.2?}", sent, received, elapsed);
    log::info!(
        "Pipeline: Throughput: {:.2} messages/sec",
        received as f64 / elapsed.as_secs_f64()
    );

    if corrupted == 0 && received == messages {
        log::info!("All messages received successfully");
    } else if !keep_alive.load(Ordering::SeqCst) {
        log::warn!("Interrupted: {} of {} messages delivered", received, messages);
    }

    Ok(())
}
