//! Rendering a mounted counter end to end.

use visitor_counter::render::{drive, TerminalRenderer};
use visitor_counter::storage::store_cached_count;
use visitor_counter::{CycleOutcome, LocalStore, VisitorCounter};

mod common;

#[tokio::test]
async fn test_static_render_prints_final_card() {
    let backend = common::start_mock_backend(200, r#"{ "value": 42000 }"#).await;
    let config = common::test_config(&backend.url());

    let mount = VisitorCounter::new(common::test_client(&config), LocalStore::new(None), &config).mount();
    let mut renderer = TerminalRenderer::new(Vec::new(), false);

    let outcome = drive(mount, &mut renderer, &config.animation).await.unwrap();
    assert!(matches!(outcome, CycleOutcome::Ready(42000)));

    let out = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(
        out,
        "[LIVE] Real-time counter powered by CountAPI\n\
         👀 42,000 visitors and counting\n\
         Updated just now.\n"
    );
}

#[tokio::test]
async fn test_live_render_animates_to_exact_value() {
    let backend = common::start_mock_backend(200, r#"{ "value": 42000 }"#).await;
    let config = common::test_config(&backend.url());
    let store = LocalStore::new(None);
    store_cached_count(&store, &config.storage.key, 41000).unwrap();

    let mount = VisitorCounter::new(common::test_client(&config), store, &config).mount();
    let mut renderer = TerminalRenderer::new(Vec::new(), true);

    let outcome = drive(mount, &mut renderer, &config.animation).await.unwrap();
    assert!(matches!(outcome, CycleOutcome::Ready(42000)));

    let out = String::from_utf8(renderer.into_inner()).unwrap();
    let frames: Vec<&str> = out.split("\r\x1b[2K").filter(|f| !f.is_empty()).collect();
    assert!(frames.len() > 2);
    assert!(frames[0].contains("41,000"));
    assert!(frames.iter().any(|f| !f.contains("41,000") && !f.contains("42,000")));
    assert!(out.ends_with("👀 42,000 visitors and counting\nUpdated just now.\n"));
}

#[tokio::test]
async fn test_offline_render_keeps_cached_total() {
    let backend = common::start_mock_backend(500, "boom").await;
    let config = common::test_config(&backend.url());
    let store = LocalStore::new(None);
    store_cached_count(&store, &config.storage.key, 41999).unwrap();

    let mount = VisitorCounter::new(common::test_client(&config), store, &config).mount();
    let mut renderer = TerminalRenderer::new(Vec::new(), false);

    let outcome = drive(mount, &mut renderer, &config.animation).await.unwrap();
    assert!(matches!(outcome, CycleOutcome::Failed { .. }));

    let out = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(out.starts_with("[OFFLINE] "));
    assert!(out.contains("👀 41,999 visitors and counting"));
    assert!(out.contains("Showing last known total."));
}

#[tokio::test]
async fn test_live_render_settles_on_huge_counts() {
    let backend = common::start_mock_backend(200, r#"{ "value": 9007199254740993 }"#).await;
    let config = common::test_config(&backend.url());

    let mount = VisitorCounter::new(common::test_client(&config), LocalStore::new(None), &config).mount();
    let mut renderer = TerminalRenderer::new(Vec::new(), true);

    let outcome = tokio::time::timeout(
        std::time::Duration::from_secs(20),
        drive(mount, &mut renderer, &config.animation),
    )
    .await
    .expect("animation never settled")
    .unwrap();
    assert!(matches!(outcome, CycleOutcome::Ready(9007199254740993)));

    let out = String::from_utf8(renderer.into_inner()).unwrap();
    let frames: Vec<&str> = out.split("\r\x1b[2K").filter(|f| !f.is_empty()).collect();
    let last_frame = frames.last().unwrap();
    assert!(last_frame.contains("9,007,199,254,740,993"), "{last_frame}");
}
