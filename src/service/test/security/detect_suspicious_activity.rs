use super::*;

fn failure(user_id: &str, code: &str, at: DateTime<Utc>) -> VerificationLog {
    record(create_failure(user_id, code, at))
}

/// Tests the repeated failure threshold.
///
/// A user with three failures is reported, a user with two is not.
///
/// Expected: only the three-failure user, with codes in log order
#[test]
fn reports_users_with_three_failures() {
    let base = now();
    let failures = vec![
        failure("111", "one", base),
        failure("222", "a", base + Duration::minutes(5)),
        failure("111", "two", base + Duration::minutes(10)),
        failure("222", "b", base + Duration::minutes(15)),
        failure("111", "three", base + Duration::minutes(20)),
    ];

    let activity = detect_suspicious_activity(&failures);

    assert_eq!(activity.repeated_failures.len(), 1);
    let entry = &activity.repeated_failures["111"];
    assert_eq!(entry.count, 3);
    assert_eq!(entry.codes, vec!["one", "two", "three"]);
    assert_eq!(entry.user.id, "111");
    assert!(!activity.repeated_failures.contains_key("222"));
}

/// Tests that suspicious codes are reported once per occurrence.
///
/// Expected: every matching failure listed, including repeats by the same user
#[test]
fn reports_each_suspicious_code() {
    let base = now();
    let failures = vec![
        failure("111", "Admin", base),
        failure("111", "admin", base + Duration::minutes(2)),
        failure("222", "hello", base + Duration::minutes(4)),
        failure("333", "my-PASSWORD", base + Duration::minutes(6)),
        failure("333", "x123456x", base + Duration::minutes(8)),
    ];

    let activity = detect_suspicious_activity(&failures);

    let codes: Vec<&str> = activity
        .suspicious_codes
        .iter()
        .map(|s| s.code.as_str())
        .collect();
    assert_eq!(codes, vec!["Admin", "admin", "my-PASSWORD", "x123456x"]);
    assert_eq!(activity.suspicious_codes[0].timestamp, base);
}

/// Tests the rapid attempt gap boundary.
///
/// A 59 second pair is reported, a 61 second pair is not.
///
/// Expected: exactly one rapid pair with a 59 second gap
#[test]
fn rapid_attempt_gap_boundary() {
    let base = now();
    let failures = vec![
        failure("111", "a", base),
        failure("111", "b", base + Duration::seconds(59)),
        failure("222", "c", base + Duration::minutes(10)),
        failure("222", "d", base + Duration::minutes(10) + Duration::seconds(61)),
    ];

    let activity = detect_suspicious_activity(&failures);

    assert_eq!(activity.rapid_attempts.len(), 1);
    let pair = &activity.rapid_attempts[0];
    assert_eq!(pair.user.id, "111");
    assert_eq!(pair.gap, Duration::seconds(59));
    assert_eq!(pair.attempts[0].code, "a");
    assert_eq!(pair.attempts[1].code, "b");
}

/// Tests that a run of rapid attempts is reported as adjacent pairs.
///
/// Three attempts 30 seconds apart give two pairs, not one triple.
///
/// Expected: two pairs
#[test]
fn three_rapid_attempts_give_two_pairs() {
    let base = now();
    let failures = vec![
        failure("111", "a", base),
        failure("111", "b", base + Duration::seconds(30)),
        failure("111", "c", base + Duration::seconds(60)),
    ];

    let activity = detect_suspicious_activity(&failures);

    assert_eq!(activity.rapid_attempts.len(), 2);
    assert_eq!(activity.rapid_attempts[0].attempts[1].code, "b");
    assert_eq!(activity.rapid_attempts[1].attempts[0].code, "b");
}

/// Tests that rapid detection sorts by time first.
///
/// Records out of log order are still paired chronologically, and another user's
/// attempt in between breaks the pair.
///
/// Expected: one pair for user 111 only
#[test]
fn rapid_attempts_use_chronological_order() {
    let base = now();
    let failures = vec![
        failure("111", "late", base + Duration::seconds(20)),
        failure("111", "early", base),
        failure("222", "x", base + Duration::seconds(100)),
        failure("333", "y", base + Duration::seconds(110)),
        failure("222", "z", base + Duration::seconds(120)),
    ];

    let activity = detect_suspicious_activity(&failures);

    assert_eq!(activity.rapid_attempts.len(), 1);
    assert_eq!(activity.rapid_attempts[0].attempts[0].code, "early");
    assert_eq!(activity.rapid_attempts[0].attempts[1].code, "late");
}

/// Tests which identity a rapid pair is reported under.
///
/// The user renamed between the two attempts.
///
/// Expected: the pair carries the identity from the earlier attempt
#[test]
fn rapid_attempt_reports_earlier_identity() {
    let base = now();
    let failures = vec![
        record(
            VerificationLogFactory::failure()
                .user_id("111")
                .username("before")
                .code("a")
                .at(base)
                .build(),
        ),
        record(
            VerificationLogFactory::failure()
                .user_id("111")
                .username("after")
                .code("b")
                .at(base + Duration::seconds(10))
                .build(),
        ),
    ];

    let activity = detect_suspicious_activity(&failures);

    assert_eq!(activity.rapid_attempts.len(), 1);
    assert_eq!(activity.rapid_attempts[0].user.username, "before");
}
