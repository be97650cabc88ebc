#![allow(clippy::unwrap_used)]

use bova_env::{config, logger, TelemetryGuard};

fn logger() -> &'static TelemetryGuard {
    use once_cell::sync::OnceCell;

    static INSTANCE: OnceCell<TelemetryGuard> = OnceCell::new();
    INSTANCE.get_or_init(|| {
        let conf = config::Log::default();

        bova_env::setup(&conf, "bova_env_test", vec![env!("CARGO_CRATE_NAME")]).unwrap()
    })
}

#[logger::instrument(fields(flow = "test"))]
async fn instrumented(value: u32) -> u32 {
    logger::info!(value, "inside instrumented function");
    value + 1
}

#[tokio::test]
async fn setup_installs_subscriber_once() {
    logger();

    assert_eq!(instrumented(13).await, 14);

    // a second global subscriber is refused
    let again = bova_env::setup(&config::Log::default(), "bova_env_test", Vec::<&str>::new());
    assert!(again.is_err());
}
