use super::*;

/// Tests the input gates on their own.
///
/// These run before any guild data is read, so they must not touch the limiter
/// or the log files.
///
/// Expected: WrongChannel, then MissingCode for a blank code, then the code
#[tokio::test]
async fn rejects_before_guild_access() {
    let test = TestBuilder::new().build().unwrap();
    let store = LogStore::new(test.log_dir());
    let limiter = RateLimiter::new(test.log_dir());
    let codes = codes();
    let service = VerificationService::new(&store, &limiter, &codes, VERIFY_CHANNEL, "?");

    let wrong_channel = request("111", OTHER_CHANNEL, Some("Admin123"));
    let blank_code = request("111", VERIFY_CHANNEL, Some(""));
    let valid = request("111", VERIFY_CHANNEL, Some("Admin123"));

    assert_eq!(
        service.check_input(&wrong_channel),
        Err(VerificationError::WrongChannel)
    );
    assert_eq!(
        service.check_input(&blank_code),
        Err(VerificationError::MissingCode {
            prefix: "?".to_string()
        })
    );
    assert_eq!(service.check_input(&valid), Ok("Admin123"));
    assert!(limiter.entry("111").await.is_none());
    assert!(!test.exists(LogCategory::Failure.file_name()));
}
