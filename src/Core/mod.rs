pub mod args;
pub mod logger;
pub mod pool;

pub use pool::{Pool, PoolPtr};
