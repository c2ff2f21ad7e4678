use opal_storage::MemoryPersistence;
use opal_store::{ErrorSink, Store, SubscriptionId};
use opal_types::StoreKey;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

async fn open_store() -> Store {
    Store::open(Arc::new(MemoryPersistence::new())).await.unwrap()
}

/// Records every delivered value for later assertions.
fn recorder() -> (Arc<Mutex<Vec<Option<Value>>>>, impl Fn(Option<&Value>) + Send + Sync + 'static)
{
    let seen: Arc<Mutex<Vec<Option<Value>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let callback = move |value: Option<&Value>| {
        sink.lock().unwrap().push(value.cloned());
    };
    (seen, callback)
}

// ── Delivery order ───────────────────────────────────────────────

#[tokio::test]
async fn subscriber_observes_writes_in_call_order() {
    let store = open_store().await;
    let (seen, callback) = recorder();
    let _sub = store.subscribe("k", callback);

    store.set("k", json!({"v": 1})).await.unwrap();
    store.set("k", json!({"v": 2})).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            None, // initial delivery: key absent
            Some(json!({"v": 1})),
            Some(json!({"v": 2})),
        ]
    );
}

#[tokio::test]
async fn late_subscriber_gets_current_value_immediately() {
    let store = open_store().await;
    store.set("k", 5).await.unwrap();

    let (seen, callback) = recorder();
    let _sub = store.subscribe("k", callback);
    // No further mutation needed.
    assert_eq!(*seen.lock().unwrap(), vec![Some(json!(5))]);
}

#[tokio::test]
async fn subscriber_observes_clear_as_null() {
    let store = open_store().await;
    store.set("k", json!({"a": 1})).await.unwrap();

    let (seen, callback) = recorder();
    let _sub = store.subscribe("k", callback);
    store.clear("k").await.unwrap();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![Some(json!({"a": 1})), Some(Value::Null)]
    );
}

#[tokio::test]
async fn writes_to_other_keys_do_not_notify() {
    let store = open_store().await;
    let (seen, callback) = recorder();
    let _sub = store.subscribe("watched", callback);

    store.set("other", 1).await.unwrap();
    store.merge("unrelated", json!({"a": 1})).await.unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![None]);
}

#[tokio::test]
async fn multiple_subscribers_all_notified() {
    let store = open_store().await;
    let (seen_a, callback_a) = recorder();
    let (seen_b, callback_b) = recorder();
    let _sub_a = store.subscribe("k", callback_a);
    let _sub_b = store.subscribe("k", callback_b);

    store.set("k", 7).await.unwrap();

    assert_eq!(*seen_a.lock().unwrap(), vec![None, Some(json!(7))]);
    assert_eq!(*seen_b.lock().unwrap(), vec![None, Some(json!(7))]);
}

// ── Deregistration ───────────────────────────────────────────────

#[tokio::test]
async fn dropped_subscription_stops_delivery() {
    let store = open_store().await;
    let (seen, callback) = recorder();
    let sub = store.subscribe("k", callback);

    store.set("k", 1).await.unwrap();
    drop(sub);
    store.set("k", 2).await.unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![None, Some(json!(1))]);
}

#[tokio::test]
async fn cancel_stops_delivery() {
    let store = open_store().await;
    let (seen, callback) = recorder();
    let sub = store.subscribe("k", callback);
    sub.cancel();

    store.set("k", 1).await.unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![None]);
}

// ── Panic isolation ──────────────────────────────────────────────

#[derive(Default)]
struct RecordingSink {
    reports: Mutex<Vec<(StoreKey, SubscriptionId, String)>>,
}

impl ErrorSink for RecordingSink {
    fn subscriber_panicked(&self, key: &StoreKey, subscription: SubscriptionId, message: &str) {
        self.reports
            .lock()
            .unwrap()
            .push((key.clone(), subscription, message.to_string()));
    }
}

#[tokio::test]
async fn panicking_subscriber_does_not_block_others() {
    let sink = Arc::new(RecordingSink::default());
    let store = Store::open_with_sink(Arc::new(MemoryPersistence::new()), sink.clone())
        .await
        .unwrap();

    let panicking = store.subscribe("k", |value| {
        if value.is_some() {
            panic!("boom");
        }
    });
    let (seen, callback) = recorder();
    let _sub = store.subscribe("k", callback);

    store.set("k", 1).await.unwrap();

    // The healthy subscriber still saw the write.
    assert_eq!(*seen.lock().unwrap(), vec![None, Some(json!(1))]);

    // The panic was reported, attributed to the right subscription.
    let reports = sink.reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].0, StoreKey::new("k"));
    assert_eq!(reports[0].1, panicking.id());
    assert_eq!(reports[0].2, "boom");
}

#[tokio::test]
async fn formatted_panic_message_reaches_the_sink() {
    let sink = Arc::new(RecordingSink::default());
    let store = Store::open_with_sink(Arc::new(MemoryPersistence::new()), sink.clone())
        .await
        .unwrap();

    // A formatted panic carries a String payload rather than a &str.
    let _sub = store.subscribe("k", |value| {
        if let Some(value) = value {
            panic!("unexpected value: {value}");
        }
    });

    store.set("k", 7).await.unwrap();

    let reports = sink.reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].2, "unexpected value: 7");
}

#[tokio::test]
async fn write_succeeds_even_when_subscriber_panics() {
    let sink = Arc::new(RecordingSink::default());
    let store = Store::open_with_sink(Arc::new(MemoryPersistence::new()), sink)
        .await
        .unwrap();
    let _sub = store.subscribe("k", |value| {
        if value.is_some() {
            panic!("boom");
        }
    });

    store.set("k", 1).await.unwrap();
    assert_eq!(store.get("k"), Some(json!(1)));
}
