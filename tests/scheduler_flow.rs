use anyhow::Result;
use dayboard::config::Config;
use dayboard::core::models::OwnerId;
use dayboard::core::types::{DateKey, MonthNav};
use dayboard::logging::Logger;
use dayboard::scheduler::SchedulerController;
use dayboard::store::{MemoryTaskStore, TaskStore};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_config() -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    let path = std::env::temp_dir().join(format!("dayboard-flow-{nanos}.json"));
    fs::write(
        &path,
        r#"{ "default_owner": { "value": "alice", "description": "Owner whose tasks the dashboard loads." } }"#,
    )
    .unwrap();
    path
}

fn quiet_logger() -> Logger {
    let logger = Logger::new();
    logger.set_file_logging_enabled(false);
    logger
}

#[tokio::test(flavor = "current_thread")]
async fn full_scheduling_round_trip() -> Result<()> {
    let config_path = temp_config();
    let config = Config::load_from(&config_path)?;
    assert!(config.file_logging_enabled());
    let logger = quiet_logger();

    let store = Arc::new(MemoryTaskStore::new());
    let selected = DateKey::try_from_str("2024-03-05")?;
    let mut ctrl = SchedulerController::with_selected_date(
        store.clone(),
        config.default_owner().clone(),
        logger,
        selected,
    );

    ctrl.attach();
    assert!(ctrl.next_change().await); // initial empty snapshot
    assert!(ctrl.state().tasks.is_empty());
    assert!(!ctrl.state().modal_visible);

    // Create a task on the selected day through the draft flow.
    ctrl.set_draft_title("dentist");
    ctrl.set_draft_time("10:30");
    ctrl.set_draft_description("annual checkup");
    ctrl.submit_draft().await?;
    assert!(ctrl.next_change().await);

    assert_eq!(ctrl.state().tasks.len(), 1);
    assert!(ctrl.state().modal_visible);
    let id = ctrl.state().tasks[0].id.clone();

    // Edit it in place.
    ctrl.begin_edit(&id)?;
    ctrl.set_draft_time("11:00");
    ctrl.submit_draft().await?;
    assert!(ctrl.next_change().await);
    assert_eq!(ctrl.state().tasks[0].time.to_string(), "11:00");
    assert_eq!(ctrl.state().tasks[0].title, "dentist");

    // Month navigation leaves the data alone.
    ctrl.navigate_month(MonthNav::Next);
    ctrl.navigate_month(MonthNav::Prev);
    let detail = ctrl.day_detail();
    assert!(detail.visible);
    assert_eq!(detail.items.len(), 1);

    // A second owner sees none of it.
    let mut other = SchedulerController::with_selected_date(
        store.clone(),
        OwnerId::new("bob"),
        quiet_logger(),
        selected,
    );
    other.attach();
    assert!(other.next_change().await);
    assert!(other.state().tasks.is_empty());

    // Delete and confirm through the feed.
    ctrl.delete_task(&id).await?;
    assert!(ctrl.next_change().await);
    assert!(ctrl.state().tasks.is_empty());
    assert!(!ctrl.state().modal_visible);

    ctrl.dispose();
    other.dispose();
    store.create(test_draft(&config)).await?;
    assert_eq!(store.live_watchers(), 0);

    let _ = fs::remove_file(config_path);
    Ok(())
}

fn test_draft(config: &Config) -> dayboard::core::models::TaskDraft {
    dayboard::core::models::TaskDraft {
        title: "after dispose".into(),
        date: DateKey::try_from_str("2024-03-06").unwrap(),
        time: dayboard::core::types::ClockTime::try_from_str("09:00").unwrap(),
        description: String::new(),
        owner: config.default_owner().clone(),
    }
}
