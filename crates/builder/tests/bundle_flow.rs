//! End-to-end flow: host registers product cards from markup, the shopper
//! clicks through the widget, and a cart consumer on another thread receives
//! the committed bundle.

use std::sync::Arc;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use bundle_builder::{
    BundleConfig, BundleController, BundleEvent, Interaction, Outcome, ProductSnapshot,
    RecordingRenderer, Toggle,
};
use bundle_core::{DomainError, ProductId};
use bundle_events::{EventBus, EventEnvelope, InMemoryEventBus};

type Bus = Arc<InMemoryEventBus<EventEnvelope<BundleEvent>>>;

const CATALOG: &[(&str, &str, &str, &str)] = &[
    ("tee", "Organic Tee", "10.00", "/img/tee.jpg"),
    ("cap", "Field Cap", "$20", "/img/cap.jpg"),
    ("sock", "Wool Socks", "15.00", "/img/sock.jpg"),
    ("tote", "Canvas Tote", "24.50", "/img/tote.jpg"),
];

fn id(raw: &str) -> ProductId {
    ProductId::new(raw).unwrap()
}

fn wired_controller(config: BundleConfig, bus: Bus) -> BundleController<RecordingRenderer, Bus> {
    let mut controller = BundleController::new(config, RecordingRenderer::new(), bus);
    for (raw_id, name, price, image) in CATALOG {
        let snapshot = ProductSnapshot::from_markup(name, price, image).unwrap();
        controller.register_product(id(raw_id), snapshot).unwrap();
    }
    controller
}

#[test]
fn shopper_builds_and_commits_a_bundle() {
    bundle_observability::init();
    let bus: Bus = Arc::new(InMemoryEventBus::new());

    // Cart consumer subscribes before any interaction happens.
    let (ready_tx, ready_rx) = mpsc::channel::<()>();
    let (cart_tx, cart_rx) = mpsc::channel();
    let consumer_bus = bus.clone();
    let consumer = thread::spawn(move || {
        let sub = consumer_bus.subscribe();
        let _ = ready_tx.send(());
        while let Ok(envelope) = sub.recv_timeout(Duration::from_secs(5)) {
            if let BundleEvent::BundleCommitted(committed) = envelope.into_payload() {
                let _ = cart_tx.send(committed.summary);
                break;
            }
        }
    });
    ready_rx.recv().unwrap();

    let mut controller = wired_controller(BundleConfig::default(), bus);

    for raw in ["tee", "cap"] {
        assert_eq!(
            controller.dispatch(Interaction::Toggle(id(raw))).unwrap(),
            Outcome::Toggled(Toggle::Selected)
        );
    }
    let view = controller.renderer().last_view().unwrap();
    assert_eq!(view.cart_button.label, "Add 1 more item to unlock");
    assert_eq!(
        controller.dispatch(Interaction::AddToCart).unwrap(),
        Outcome::Committed(None)
    );

    controller.dispatch(Interaction::Toggle(id("sock"))).unwrap();
    let view = controller.renderer().last_view().unwrap();
    assert_eq!(view.progress.label, "3/3 added");
    assert_eq!(view.pricing.subtotal_label, "$45.00");
    assert_eq!(view.pricing.discount_label, "-$13.50");
    assert_eq!(view.pricing.total_label, "$31.50");
    assert!(view.cart_button.enabled);

    let summary = match controller.dispatch(Interaction::AddToCart).unwrap() {
        Outcome::Committed(Some(summary)) => summary,
        other => panic!("Expected a committed bundle, got {other:?}"),
    };

    let received = cart_rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(received, summary);
    let names: Vec<&str> = received.products.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Organic Tee", "Field Cap", "Wool Socks"]);

    consumer.join().unwrap();

    // Bundle stays editable after commit.
    assert_eq!(
        controller.dispatch(Interaction::Remove(id("cap"))).unwrap(),
        Outcome::Removed(true)
    );
    let view = controller.renderer().last_view().unwrap();
    assert_eq!(view.progress.label, "2/3 added");
    assert_eq!(view.pricing.total_label, "$25.00");
    assert!(!view.pricing.discount_visible);
}

#[test]
fn custom_config_changes_threshold_and_rate() {
    let config = BundleConfig::from_json(r#"{"requiredItemCount": 2, "discountPercentage": 10}"#)
        .unwrap();
    let bus: Bus = Arc::new(InMemoryEventBus::new());
    let mut controller = wired_controller(config, bus);

    controller.dispatch(Interaction::Toggle(id("tee"))).unwrap();
    assert_eq!(controller.cart_button().label, "Add 1 more item to unlock");

    controller.dispatch(Interaction::Toggle(id("tote"))).unwrap();
    let pricing = controller.pricing();
    assert_eq!(pricing.subtotal.to_string(), "$34.50");
    // 10% of 34.50 = 3.45
    assert_eq!(pricing.discount.to_string(), "$3.45");
    assert_eq!(pricing.total.to_string(), "$31.05");
}

#[test]
fn unknown_controls_are_reported_not_selected() {
    let bus: Bus = Arc::new(InMemoryEventBus::new());
    let mut controller = wired_controller(BundleConfig::default(), bus);

    let err = controller.dispatch(Interaction::Toggle(id("mystery"))).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
    assert_eq!(controller.selected_count(), 0);
}

#[test]
fn config_file_is_loaded_and_validated() {
    let dir = std::env::temp_dir();
    let good = dir.join(format!("bundle-config-good-{}.json", std::process::id()));
    let bad = dir.join(format!("bundle-config-bad-{}.json", std::process::id()));
    std::fs::write(&good, r#"{"requiredItemCount": 5, "discountPercentage": 25}"#).unwrap();
    std::fs::write(&bad, r#"{"requiredItemCount": 0}"#).unwrap();

    let config = BundleConfig::from_json_file(&good).unwrap();
    assert_eq!(config.required_item_count(), 5);
    assert_eq!(config.discount_percentage(), 25);

    let err = BundleConfig::from_json_file(&bad).unwrap_err();
    assert!(format!("{err:#}").contains("required item count must be positive"));

    let _ = std::fs::remove_file(good);
    let _ = std::fs::remove_file(bad);
}
