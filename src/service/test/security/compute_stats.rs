use super::*;

/// Tests statistics over an empty logs directory.
///
/// Expected: all counts zero and a 0% success rate
#[tokio::test]
async fn empty_logs_have_zero_rate() {
    let test = TestBuilder::new().build().unwrap();
    let store = LogStore::new(test.log_dir());
    let service = SecurityService::new(&store);

    let stats = service.compute_stats_at(7, now()).await;

    assert_eq!(stats.period_days, 7);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.success_rate, 0.0);
    assert_eq!(stats.success_rate_display(), "0%");
    assert_eq!(stats.suspicious_activity, Default::default());
}

/// Tests counting and the window cutoff.
///
/// Two successes and one failure inside the window, one of each outside it.
///
/// Expected: 2 successful, 1 failed, 66.67%
#[tokio::test]
async fn counts_records_inside_window() {
    let at = now();
    let test = TestBuilder::new()
        .with_records(
            LogCategory::Success.file_name(),
            vec![
                create_success("111", "Admin123", at - Duration::days(1)),
                create_success("222", "Admin123", at - Duration::days(6)),
                create_success("333", "Admin123", at - Duration::days(8)),
            ],
        )
        .with_records(
            LogCategory::Failure.file_name(),
            vec![
                create_failure("444", "nope", at - Duration::hours(3)),
                create_failure("555", "nope", at - Duration::days(10)),
            ],
        )
        .build()
        .unwrap();
    let store = LogStore::new(test.log_dir());
    let service = SecurityService::new(&store);

    let stats = service.compute_stats_at(7, at).await;

    assert_eq!(stats.successful, 2);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.total, 3);
    assert!((stats.success_rate - 66.666).abs() < 0.01);
    assert_eq!(stats.success_rate_display(), "66.67%");
}

/// Tests that only failures inside the window are analysed.
///
/// Expected: old failures do not count towards repeated failures
#[tokio::test]
async fn analyses_failures_inside_window_only() {
    let at = now();
    let test = TestBuilder::new()
        .with_records(
            LogCategory::Failure.file_name(),
            vec![
                create_failure("111", "admin", at - Duration::days(20)),
                create_failure("111", "admin", at - Duration::days(2)),
                create_failure("111", "guess", at - Duration::days(1)),
            ],
        )
        .build()
        .unwrap();
    let store = LogStore::new(test.log_dir());
    let service = SecurityService::new(&store);

    let week = service.compute_stats_at(7, at).await;
    let month = service.compute_stats_at(30, at).await;

    assert!(week.suspicious_activity.repeated_failures.is_empty());
    assert_eq!(week.suspicious_activity.suspicious_codes.len(), 1);
    assert_eq!(month.suspicious_activity.repeated_failures["111"].count, 3);
    assert_eq!(month.success_rate, 0.0);
    assert_eq!(month.success_rate_display(), "0.00%");
}

/// Tests that error records do not count towards the totals.
///
/// Expected: total only covers success and failure files
#[tokio::test]
async fn ignores_error_records() {
    let test = TestBuilder::new()
        .with_records(
            LogCategory::Error.file_name(),
            vec![VerificationLogFactory::error().at(now()).build()],
        )
        .build()
        .unwrap();
    let store = LogStore::new(test.log_dir());

    let stats = SecurityService::new(&store).compute_stats_at(7, now()).await;

    assert_eq!(stats.total, 0);
}
