//! End-to-end generation over the shipped demo catalog and brand files.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use autopost_catalog::FileCatalog;
use autopost_core::{format_price, load_brand_profile, Tone};
use autopost_engine::{EngineState, PostEngine, Session};
use chrono::{TimeDelta, TimeZone};
use chrono_tz::America::Santiago;

fn workspace_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../config")
        .join(name)
}

#[tokio::test(start_paused = true)]
async fn top_four_by_stock_from_catalog_file() {
    let brand = load_brand_profile(&workspace_file("brand.yaml")).unwrap();
    assert_eq!(brand.tone, Tone::Bold);

    let engine = PostEngine::new(
        Arc::new(FileCatalog::new(workspace_file("catalog.yaml"))),
        Duration::from_millis(2_000),
    );
    let mut session = Session::new(engine, Santiago);
    session.set_brand(brand);

    let reference = Santiago.with_ymd_and_hms(2026, 3, 10, 9, 30, 0).unwrap();
    let batch = session
        .engine()
        .generate(session.request_at(reference))
        .await
        .unwrap();

    let picked: Vec<(&str, u32)> = batch
        .posts
        .iter()
        .map(|p| (p.product.name.as_str(), p.product.stock))
        .collect();
    assert_eq!(
        picked,
        vec![
            ("Calcetines Pack x3", 450),
            ("Gorra Snapback Logo", 320),
            ("Jogger Slim Fit", 210),
            ("Short Deportivo", 178),
        ]
    );

    let slots: Vec<&str> = batch.posts.iter().map(|p| p.time_slot.label()).collect();
    assert_eq!(slots, vec!["10:00", "13:00", "18:00", "20:00"]);

    for (i, post) in batch.posts.iter().enumerate() {
        let offset = TimeDelta::days(2 * i64::try_from(i).unwrap() + 1);
        assert_eq!(post.scheduled_date, (reference + offset).date_naive());
        assert!(post.caption.contains(&format_price(post.product.price)));
        assert!(post.caption.contains(&format!("{} unidades", post.product.stock)));
        assert!(post.caption.contains("#NOVA"));
    }

    let dates: Vec<String> = batch.posts.iter().map(|p| p.display_date()).collect();
    assert_eq!(dates, vec!["11-03-2026", "13-03-2026", "15-03-2026", "17-03-2026"]);
    assert_eq!(session.engine().state().await, EngineState::Ready);
}
