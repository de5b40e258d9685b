//! Exercises [`RedisStore`] against a live server when `REDIS_URL` is set,
//! e.g. `REDIS_URL=redis://127.0.0.1:6379/15`. The `visits` and `locations`
//! keys of that database are overwritten.

use visit_tracker::store::{self, MARKER_CAP};
use visit_tracker::{RedisStore, VisitStore};

fn redis_store() -> Option<RedisStore> {
    let url = std::env::var("REDIS_URL").ok()?;
    Some(RedisStore::open(&url).expect("valid REDIS_URL"))
}

#[tokio::test]
async fn redis_store_round_trip() {
    let Some(store) = redis_store() else {
        eprintln!("REDIS_URL not set; skipping");
        return;
    };

    store.delete_counter().await.unwrap();
    store.delete_markers().await.unwrap();
    assert_eq!(store::visit_count(&store).await, 0);

    assert_eq!(store.increment_counter().await.unwrap(), 1);
    assert_eq!(store.increment_counter().await.unwrap(), 2);
    assert_eq!(store::visit_count(&store).await, 2);

    for i in 0..(MARKER_CAP + 3) {
        store.push_marker(&format!("m{i}")).await.unwrap();
        store.trim_markers(0, MARKER_CAP - 1).await.unwrap();
    }
    let markers = store.list_markers(0, MARKER_CAP - 1).await.unwrap();
    assert_eq!(markers.len(), MARKER_CAP as usize);
    assert_eq!(markers[0], format!("m{}", MARKER_CAP + 2));

    store.delete_counter().await.unwrap();
    store.delete_markers().await.unwrap();
    assert_eq!(store.get_counter().await.unwrap(), None);
    assert!(store.list_markers(0, -1).await.unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_redis_reads_as_zero() {
    // Port 1 on localhost is reserved and never runs Redis.
    let store = RedisStore::open("redis://127.0.0.1:1/").unwrap();
    assert_eq!(store::visit_count(&store).await, 0);
    assert!(store.increment_counter().await.is_err());
}
