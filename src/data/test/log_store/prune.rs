use super::*;

/// Tests the 30-day retention sweep on a failure file.
///
/// Seeds one record from 40 days ago and one from 5 days ago.
///
/// Expected: Ok(1) with only the 5-day-old record left
#[tokio::test]
async fn removes_records_older_than_retention() -> Result<(), AppError> {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let test = TestBuilder::new()
        .with_records(
            LogCategory::Failure.file_name(),
            vec![
                VerificationLogFactory::failure()
                    .code("old")
                    .at(now - Duration::days(40))
                    .build(),
                VerificationLogFactory::failure()
                    .code("recent")
                    .at(now - Duration::days(5))
                    .build(),
            ],
        )
        .build()
        .unwrap();
    let store = LogStore::new(test.log_dir());

    let removed = store.prune(LogCategory::Failure, 30, now).await?;

    assert_eq!(removed, 1);
    let remaining = store.read_all(LogCategory::Failure).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].code, "recent");

    Ok(())
}

/// Tests that a record exactly at the cutoff is kept.
///
/// Expected: Ok(0)
#[tokio::test]
async fn keeps_record_at_cutoff() -> Result<(), AppError> {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let test = TestBuilder::new()
        .with_records(
            LogCategory::Success.file_name(),
            vec![VerificationLogFactory::success()
                .at(now - Duration::days(30))
                .build()],
        )
        .build()
        .unwrap();
    let store = LogStore::new(test.log_dir());

    assert_eq!(store.prune(LogCategory::Success, 30, now).await?, 0);
    assert_eq!(store.read_all(LogCategory::Success).await.len(), 1);

    Ok(())
}

/// Tests pruning a category with no file.
///
/// Expected: Ok(0) and no file created
#[tokio::test]
async fn missing_file_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().build().unwrap();
    let store = LogStore::new(test.log_dir());

    assert_eq!(store.prune(LogCategory::Error, 30, Utc::now()).await?, 0);
    assert!(!test.exists(LogCategory::Error.file_name()));

    Ok(())
}

/// Tests that an unparsable file is left untouched by the sweep.
///
/// Expected: Ok(0) with the original contents preserved
#[tokio::test]
async fn leaves_corrupt_file_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_raw_file(LogCategory::Failure.file_name(), "{ broken")
        .build()
        .unwrap();
    let store = LogStore::new(test.log_dir());

    assert_eq!(store.prune(LogCategory::Failure, 30, Utc::now()).await?, 0);
    let contents = std::fs::read_to_string(test.path(LogCategory::Failure.file_name())).unwrap();
    assert_eq!(contents, "{ broken");

    Ok(())
}

/// Tests that the sweep only drops records by their timestamp.
///
/// A fresh record missing `guild` stays, an old one is removed, and a record
/// without a timestamp is never considered stale.
///
/// Expected: Ok(1) with the two undated or fresh untyped records kept
#[tokio::test]
async fn keeps_untyped_records_on_prune() -> Result<(), AppError> {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let fresh = serde_json::json!({
        "timestamp": (now - Duration::days(2)).to_rfc3339(),
        "type": "FAILED_VERIFICATION",
        "code": "fresh"
    });
    let undated = serde_json::json!({ "code": "undated" });
    let test = TestBuilder::new()
        .with_records(
            LogCategory::Failure.file_name(),
            vec![
                VerificationLogFactory::failure()
                    .code("old")
                    .at(now - Duration::days(40))
                    .build(),
                fresh.clone(),
                undated.clone(),
            ],
        )
        .build()
        .unwrap();
    let store = LogStore::new(test.log_dir());

    assert_eq!(store.prune(LogCategory::Failure, 30, now).await?, 1);

    let on_disk = test.read_json(LogCategory::Failure.file_name()).unwrap();
    assert_eq!(on_disk, Value::Array(vec![fresh, undated]));

    Ok(())
}

/// Tests sweeping every category at once.
///
/// Success has one stale record, failure has two stale and one fresh, and the
/// error file does not exist.
///
/// Expected: per-category counts 1, 2, 0 and a total of 3
#[tokio::test]
async fn prune_all_reports_each_category() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let test = TestBuilder::new()
        .with_records(
            LogCategory::Success.file_name(),
            vec![VerificationLogFactory::success()
                .at(now - Duration::days(45))
                .build()],
        )
        .with_records(
            LogCategory::Failure.file_name(),
            vec![
                VerificationLogFactory::failure()
                    .at(now - Duration::days(31))
                    .build(),
                VerificationLogFactory::failure()
                    .at(now - Duration::days(60))
                    .build(),
                VerificationLogFactory::failure()
                    .at(now - Duration::days(1))
                    .build(),
            ],
        )
        .build()
        .unwrap();
    let store = LogStore::new(test.log_dir());

    let sweep = store.prune_all_at(30, now).await;

    assert_eq!(sweep.retention_days, 30);
    assert_eq!(
        sweep.removed,
        vec![
            (LogCategory::Success, 1),
            (LogCategory::Failure, 2),
            (LogCategory::Error, 0),
        ]
    );
    assert_eq!(sweep.total_removed(), 3);
    assert_eq!(store.read_all(LogCategory::Failure).await.len(), 1);
}
