use dmxp_mpsc::channel;
use dmxp_mpsc::Core::pool::{Pool, PoolPtr};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

struct DropCounter(Arc<AtomicUsize>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_pool_creation() -> io::Result<()> {
    let pool: Pool<[u8; 64]> = Pool::new(8)?;
    println!("Pool Struct: {:#?}", pool);

    assert_eq!(pool.capacity(), 8);
    assert_eq!(pool.slots_taken(), 0);
    assert_eq!(pool.slots_free(), 8);

    let err = Pool::<u32>::new(0).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    Ok(())
}

#[test]
fn test_pool_exhaustion_and_reuse() -> io::Result<()> {
    let pool = Pool::new(2)?;

    let a = pool.get(String::from("a")).expect("first slot");
    let b = pool.get(String::from("b")).expect("second slot");
    assert_eq!(pool.slots_taken(), 2);
    assert!(pool.get(String::from("c")).is_none(), "pool should be exhausted");

    assert_eq!(*a, "a");
    assert_eq!(b.len(), 1);

    drop(a);
    assert_eq!(pool.slots_free(), 1);

    let c = pool.get(String::from("c")).expect("slot returned by drop");
    assert_eq!(*c, "c");
    assert_eq!(pool.slots_taken(), 2);
    Ok(())
}

#[test]
fn test_pool_ptr_mutation_and_into_inner() -> io::Result<()> {
    let pool = Pool::new(1)?;

    let mut v = pool.get(vec![1, 2, 3]).unwrap();
    v.push(4);
    println!("PoolPtr: {:?}", v);

    let inner: Vec<i32> = PoolPtr::into_inner(v);
    assert_eq!(inner, vec![1, 2, 3, 4]);
    assert_eq!(pool.slots_free(), 1);
    assert!(pool.get(Vec::new()).is_some());
    Ok(())
}

#[test]
fn test_pool_drops_values_once() -> io::Result<()> {
    let drops = Arc::new(AtomicUsize::new(0));
    let pool = Pool::new(3)?;

    let a = pool.get(DropCounter(drops.clone())).unwrap();
    let b = pool.get(DropCounter(drops.clone())).unwrap();
    drop(a);
    assert_eq!(drops.load(Ordering::SeqCst), 1);

    let moved_out = PoolPtr::into_inner(b);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
    drop(moved_out);
    assert_eq!(drops.load(Ordering::SeqCst), 2);

    // Refused value is dropped by `get`.
    let _x = pool.get(DropCounter(drops.clone())).unwrap();
    let _y = pool.get(DropCounter(drops.clone())).unwrap();
    let _z = pool.get(DropCounter(drops.clone())).unwrap();
    assert!(pool.get(DropCounter(drops.clone())).is_none());
    assert_eq!(drops.load(Ordering::SeqCst), 3);
    Ok(())
}

#[test]
fn test_pool_outlives_handles() -> io::Result<()> {
    let pool = Pool::new(1)?;
    let ptr = pool.get(42u64).unwrap();
    drop(pool);
    assert_eq!(*ptr, 42);
    Ok(())
}

#[test]
fn test_pool_concurrent_get_put() -> io::Result<()> {
    let pool = Pool::new(16)?;
    let mut handles = vec![];

    for t in 0..8usize {
        let pool = pool.clone();
        handles.push(thread::spawn(move || {
            let mut got = 0;
            for i in 0..1_000 {
                if let Some(mut slot) = pool.get([0usize; 8]) {
                    slot[0] = t;
                    slot[7] = i;
                    assert_eq!(slot[0], t);
                    got += 1;
                    if fastrand::bool() {
                        thread::yield_now();
                    }
                }
                assert!(pool.slots_taken() <= pool.capacity());
            }
            got
        }));
    }

    let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert!(total > 0);
    assert_eq!(pool.slots_taken(), 0);
    assert_eq!(pool.slots_free(), 16);
    Ok(())
}

#[test]
fn test_pooled_payloads_through_channel() -> io::Result<()> {
    let pool = Pool::new(4)?;
    let (tx, mut rx) = channel(4);

    let producer = {
        let pool = pool.clone();
        thread::spawn(move || {
            let mut sent = 0;
            while sent < 100 {
                // Spin until the consumer has recycled a payload.
                let Some(mut payload) = pool.get([0u8; 32]) else {
                    thread::yield_now();
                    continue;
                };
                payload[0] = sent as u8;
                assert!(tx.send_one(payload));
                sent += 1;
            }
        })
    };

    let mut expected = 0u8;
    while let Some(payload) = rx.receive() {
        assert_eq!(payload[0], expected);
        expected = expected.wrapping_add(1);
    }

    producer.join().unwrap();
    assert_eq!(expected, 100);
    assert_eq!(pool.slots_taken(), 0);
    Ok(())
}
