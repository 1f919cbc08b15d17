use crate::server::{cache::ListingCache, error::AppError};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};


const TTL: Duration = Duration::from_secs(30);

fn bytes(value: &str) -> Arc<[u8]> {
    Arc::from(value.as_bytes())
}
