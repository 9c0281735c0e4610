#![expect(clippy::unwrap_used)]

use log::LevelFilter;
use smart_kisan::backend::{config::KisanConfig, error::BackendResult, start};
use std::sync::{
    Once,
    atomic::{AtomicI32, Ordering},
};
use tokio::sync::oneshot;

/// Spawns the server on its own port so that tests can run in parallel,
/// and returns the base url once it accepts connections.
async fn start_server() -> String {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        env_logger::builder()
            .filter_level(LevelFilter::Warn)
            .init();
    });

    static COUNTER: AtomicI32 = AtomicI32::new(0);
    let port = 8200 + COUNTER.fetch_add(1, Ordering::Relaxed);

    let config = KisanConfig::default();
    let (tx, rx) = oneshot::channel::<()>();
    tokio::task::spawn(async move {
        let bind = format!("127.0.0.1:{port}");
        start(config, Some(bind.parse().unwrap()), Some(tx))
            .await
            .unwrap();
    });
    // wait for the backend to start
    rx.await.unwrap();
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn test_about_page() -> BackendResult<()> {
    let url = start_server().await;

    for path in ["/", "/about"] {
        let body = reqwest::get(format!("{url}{path}")).await?.text().await?;
        assert!(body.contains("About Smart Kisan"));
        assert!(body.contains("Project Overview"));
        assert!(body.contains("Real-Time Crop Monitoring"));
        assert!(body.contains("Rahul Sharma"));
        assert!(body.contains("Amit Kumar"));

        // all nine stack entries render, in the declared order
        let entries = [
            "React.js",
            "Bootstrap",
            "Chart.js",
            "React Icons",
            "Java",
            "Spring Boot",
            "RESTful APIs",
            "JWT Authentication",
            "MySQL",
        ];
        let mut pos = 0;
        for entry in entries {
            let offset = body[pos..]
                .find(entry)
                .unwrap_or_else(|| panic!("{entry} missing or out of order"));
            pos += offset + entry.len();
        }
    }
    Ok(())
}

#[tokio::test]
async fn test_info_hub_initial_tab() -> BackendResult<()> {
    let url = start_server().await;

    let body = reqwest::get(format!("{url}/resources")).await?.text().await?;

    // all five tab labels are rendered
    assert!(body.contains("Farming Tips"));
    assert!(body.contains("Government Schemes"));
    assert!(body.contains("Agricultural News"));
    assert!(body.contains("Expert Consultation"));
    assert!(body.contains("Upcoming Events"));

    // the tips tab is open initially
    assert!(body.contains("Soil Testing"));
    assert!(body.contains("Crop Rotation"));
    assert!(body.contains("Water Conservation"));
    assert!(body.contains("Integrated Pest Management"));

    // other sections are not rendered until their tab is selected
    assert!(!body.contains("PM-KISAN"));
    assert!(!body.contains("Dr. Rajesh Kumar"));
    assert!(!body.contains("National Agricultural Fair"));
    assert!(!body.contains("Schedule Consultation"));

    // the feedback strip is always visible
    assert!(body.contains("Have a question or suggestion?"));
    assert!(body.contains("Contact Us"));
    Ok(())
}

#[tokio::test]
async fn test_hindi_from_cookie() -> BackendResult<()> {
    let url = start_server().await;

    let client = reqwest::Client::new();
    let body = client
        .get(format!("{url}/resources"))
        .header("Cookie", "lang=hi")
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains("कृषि संसाधन"));
    assert!(body.contains("खेती के सुझाव"));
    // card content comes from the fixed collections and is not translated
    assert!(body.contains("Soil Testing"));
    Ok(())
}
