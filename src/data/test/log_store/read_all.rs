use super::*;

/// Tests reading a category with no file.
///
/// Expected: empty vector
#[tokio::test]
async fn missing_file_is_empty() {
    let test = TestBuilder::new().build().unwrap();
    let store = LogStore::new(test.log_dir());

    assert!(store.read_all(LogCategory::Success).await.is_empty());
}

/// Tests reading a corrupt category file.
///
/// Expected: empty vector rather than an error
#[tokio::test]
async fn corrupt_file_is_empty() {
    let test = TestBuilder::new()
        .with_raw_file(LogCategory::Success.file_name(), "definitely not json")
        .build()
        .unwrap();
    let store = LogStore::new(test.log_dir());

    assert!(store.read_all(LogCategory::Success).await.is_empty());
}

/// Tests reading seeded records.
///
/// Verifies that records keep file order and all persisted fields.
///
/// Expected: records match the seeded values
#[tokio::test]
async fn reads_seeded_records() {
    let at = Utc.with_ymd_and_hms(2024, 3, 10, 8, 30, 0).unwrap();
    let test = TestBuilder::new()
        .with_records(
            LogCategory::Success.file_name(),
            vec![
                VerificationLogFactory::success()
                    .user_id("111")
                    .username("alice")
                    .code("Admin123")
                    .role("222", "Member")
                    .at(at)
                    .build(),
                VerificationLogFactory::success().code("second").build(),
            ],
        )
        .build()
        .unwrap();
    let store = LogStore::new(test.log_dir());

    let logs = store.read_all(LogCategory::Success).await;

    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].timestamp, at);
    assert_eq!(logs[0].user.id, "111");
    assert_eq!(logs[0].user.username, "alice");
    assert_eq!(logs[0].code, "Admin123");
    assert_eq!(logs[0].role.as_ref().map(|r| r.name.as_str()), Some("Member"));
    assert_eq!(logs[1].code, "second");
}
