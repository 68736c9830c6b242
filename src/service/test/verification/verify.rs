use super::*;

/// Tests a successful verification followed by a repeat attempt.
///
/// The first `Admin123` attempt grants the role and writes a success record. The
/// second attempt by the same user is rejected as already verified and writes
/// nothing.
///
/// Expected: Ok then Err(AlreadyVerified), one success record
#[tokio::test]
async fn grants_role_then_rejects_repeat() {
    let test = TestBuilder::new().build().unwrap();
    let store = LogStore::new(test.log_dir());
    let limiter = RateLimiter::new(test.log_dir());
    let codes = codes();
    let service = VerificationService::new(&store, &limiter, &codes, VERIFY_CHANNEL, "!");
    let gateway = FakeGateway::with_member_role();
    let req = request("111", VERIFY_CHANNEL, Some("Admin123"));

    let granted = service.verify(&gateway, &req, now()).await.unwrap();

    assert_eq!(granted.role.role_id, MEMBER_ROLE);
    assert_eq!(granted.code, "Admin123");
    assert_eq!(gateway.grants(), vec![MEMBER_ROLE]);

    let successes = store.read_all(LogCategory::Success).await;
    assert_eq!(successes.len(), 1);
    assert_eq!(successes[0].code, "Admin123");
    assert_eq!(successes[0].user.id, "111");
    assert_eq!(
        successes[0].role.as_ref().map(|r| r.id.clone()),
        Some(MEMBER_ROLE.to_string())
    );

    let repeat = service
        .verify(&gateway, &req, now() + Duration::seconds(10))
        .await;

    assert_eq!(
        repeat,
        Err(VerificationError::AlreadyVerified {
            role_name: "Member".to_string()
        })
    );
    assert_eq!(store.read_all(LogCategory::Success).await.len(), 1);
    assert!(store.read_all(LogCategory::Failure).await.is_empty());
    assert_eq!(gateway.grants().len(), 1);
}

/// Tests the five `admin` attempts scenario end to end.
///
/// Five invalid `admin` attempts are let through by the rate limiter and logged as
/// failures; the sixth inside the window is denied. The abuse detector then sees
/// five suspicious codes and five repeated failures for the user.
///
/// Expected: 5 x InvalidCode, then RateLimited, then matching statistics
#[tokio::test]
async fn repeated_admin_guesses_are_limited_and_flagged() {
    let test = TestBuilder::new().build().unwrap();
    let store = LogStore::new(test.log_dir());
    let limiter = RateLimiter::new(test.log_dir());
    let codes = codes();
    let service = VerificationService::new(&store, &limiter, &codes, VERIFY_CHANNEL, "!");
    let gateway = FakeGateway::with_member_role();
    let req = request("111", VERIFY_CHANNEL, Some("admin"));
    let start = now();

    for i in 0..5 {
        let result = service
            .verify(&gateway, &req, start + Duration::seconds(60 * i))
            .await;
        assert_eq!(
            result,
            Err(VerificationError::InvalidCode {
                code: "admin".to_string()
            })
        );
    }

    let sixth = service
        .verify(&gateway, &req, start + Duration::seconds(270))
        .await;
    assert_eq!(
        sixth,
        Err(VerificationError::RateLimited {
            seconds_remaining: 30
        })
    );
    assert!(gateway.grants().is_empty());

    let failures = store.read_all(LogCategory::Failure).await;
    assert_eq!(failures.len(), 5);

    let stats = SecurityService::new(&store)
        .compute_stats_at(7, start + Duration::minutes(10))
        .await;
    let activity = &stats.suspicious_activity;
    assert_eq!(activity.suspicious_codes.len(), 5);
    assert!(activity.suspicious_codes.iter().all(|s| s.user.id == "111"));
    assert_eq!(activity.repeated_failures["111"].count, 5);
}

/// Tests the channel gate.
///
/// Expected: Err(WrongChannel), no rate limit entry, no logs
#[tokio::test]
async fn rejects_wrong_channel() {
    let test = TestBuilder::new().build().unwrap();
    let store = LogStore::new(test.log_dir());
    let limiter = RateLimiter::new(test.log_dir());
    let codes = codes();
    let service = VerificationService::new(&store, &limiter, &codes, VERIFY_CHANNEL, "!");
    let gateway = FakeGateway::with_member_role();

    let result = service
        .verify(&gateway, &request("111", OTHER_CHANNEL, Some("Admin123")), now())
        .await;

    assert_eq!(result, Err(VerificationError::WrongChannel));
    assert!(limiter.entry("111").await.is_none());
    assert!(store.read_all(LogCategory::Success).await.is_empty());
}

/// Tests the input gate.
///
/// Expected: Err(MissingCode) carrying the prefix, nothing counted
#[tokio::test]
async fn rejects_missing_code() {
    let test = TestBuilder::new().build().unwrap();
    let store = LogStore::new(test.log_dir());
    let limiter = RateLimiter::new(test.log_dir());
    let codes = codes();
    let service = VerificationService::new(&store, &limiter, &codes, VERIFY_CHANNEL, "?");
    let gateway = FakeGateway::with_member_role();

    let result = service
        .verify(&gateway, &request("111", VERIFY_CHANNEL, None), now())
        .await;

    assert_eq!(
        result,
        Err(VerificationError::MissingCode {
            prefix: "?".to_string()
        })
    );
    assert!(result.unwrap_err().to_string().contains("?verify"));
    assert!(limiter.entry("111").await.is_none());
}

/// Tests an invalid code.
///
/// Expected: Err(InvalidCode) and one failure record with the typed code
#[tokio::test]
async fn logs_invalid_code() {
    let test = TestBuilder::new().build().unwrap();
    let store = LogStore::new(test.log_dir());
    let limiter = RateLimiter::new(test.log_dir());
    let codes = codes();
    let service = VerificationService::new(&store, &limiter, &codes, VERIFY_CHANNEL, "!");
    let gateway = FakeGateway::with_member_role();

    let result = service
        .verify(&gateway, &request("111", VERIFY_CHANNEL, Some("admin123")), now())
        .await;

    assert_eq!(
        result.as_ref().map_err(VerificationError::kind),
        Err(VerificationErrorKind::UserInput)
    );
    let failures = store.read_all(LogCategory::Failure).await;
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].code, "admin123");
    assert_eq!(failures[0].timestamp, now());
    assert_eq!(limiter.entry("111").await.map(|e| e.attempts), Some(1));
}

/// Tests a code mapped to a role missing from the guild.
///
/// Expected: Err(RoleNotFound) with no log record
#[tokio::test]
async fn rejects_missing_role() {
    let test = TestBuilder::new().build().unwrap();
    let store = LogStore::new(test.log_dir());
    let limiter = RateLimiter::new(test.log_dir());
    let codes = codes();
    let service = VerificationService::new(&store, &limiter, &codes, VERIFY_CHANNEL, "!");
    let gateway = FakeGateway::without_roles();

    let result = service
        .verify(&gateway, &request("111", VERIFY_CHANNEL, Some("Admin123")), now())
        .await;

    assert_eq!(
        result,
        Err(VerificationError::RoleNotFound {
            role_id: MEMBER_ROLE
        })
    );
    for category in LogCategory::ALL {
        assert!(store.read_all(category).await.is_empty());
    }
}

/// Tests a role the bot cannot assign.
///
/// Expected: Err(RoleNotAssignable), no grant attempted, no log record
#[tokio::test]
async fn rejects_unassignable_role() {
    let test = TestBuilder::new().build().unwrap();
    let store = LogStore::new(test.log_dir());
    let limiter = RateLimiter::new(test.log_dir());
    let codes = codes();
    let service = VerificationService::new(&store, &limiter, &codes, VERIFY_CHANNEL, "!");
    let gateway = FakeGateway::with_member_role().unassignable();

    let result = service
        .verify(&gateway, &request("111", VERIFY_CHANNEL, Some("Admin123")), now())
        .await;

    assert_eq!(
        result,
        Err(VerificationError::RoleNotAssignable {
            role_name: "Member".to_string()
        })
    );
    assert!(gateway.grants().is_empty());
    assert!(store.read_all(LogCategory::Error).await.is_empty());
}

/// Tests a grant rejected by Discord.
///
/// Expected: Err(GrantFailed) and an error record carrying the API detail
#[tokio::test]
async fn logs_failed_grant() {
    let test = TestBuilder::new().build().unwrap();
    let store = LogStore::new(test.log_dir());
    let limiter = RateLimiter::new(test.log_dir());
    let codes = codes();
    let service = VerificationService::new(&store, &limiter, &codes, VERIFY_CHANNEL, "!");
    let gateway = FakeGateway::with_member_role().failing_grant("Missing Permissions");

    let result = service
        .verify(&gateway, &request("111", VERIFY_CHANNEL, Some("Admin123")), now())
        .await;

    assert_eq!(
        result,
        Err(VerificationError::GrantFailed {
            role_name: "Member".to_string(),
            detail: "Missing Permissions".to_string(),
        })
    );
    let errors = store.read_all(LogCategory::Error).await;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error.as_deref(), Some("Missing Permissions"));
    assert_eq!(errors[0].code, "Admin123");
    assert!(store.read_all(LogCategory::Success).await.is_empty());
}

/// Tests that a log write failure does not fail the verification.
///
/// The logs directory is a regular file, so every append fails.
///
/// Expected: Ok with the role granted
#[tokio::test]
async fn log_write_failure_is_swallowed() {
    let test = TestBuilder::new()
        .with_raw_file("not-a-dir", "")
        .build()
        .unwrap();
    let store = LogStore::new(test.path("not-a-dir"));
    let limiter = RateLimiter::new(test.log_dir());
    let codes = codes();
    let service = VerificationService::new(&store, &limiter, &codes, VERIFY_CHANNEL, "!");
    let gateway = FakeGateway::with_member_role();

    let result = service
        .verify(&gateway, &request("111", VERIFY_CHANNEL, Some("Admin123")), now())
        .await;

    assert!(result.is_ok());
    assert_eq!(gateway.grants(), vec![MEMBER_ROLE]);
}
