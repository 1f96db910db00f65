use std::io;

use juiceworks_discord_bot::shutdown_outcome;

fn gateway_error() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::ConnectionReset, "gateway closed"))
}

#[test]
fn test_clean_shutdown() {
    assert!(shutdown_outcome(Ok::<(), io::Error>(()), Ok(())).is_ok());
}

#[test]
fn test_cleanup_failure_is_reported() {
    let err = shutdown_outcome(Ok::<(), io::Error>(()), Err(eyre::eyre!("Cannot delete 'add-member' command")))
        .unwrap_err();

    assert!(err.to_string().contains("add-member"));
}

#[test_log::test]
fn test_gateway_error_wins_over_cleanup_failure() {
    let err = shutdown_outcome(gateway_error(), Err(eyre::eyre!("Cannot delete 'make-channel' command")))
        .unwrap_err();

    assert_eq!(err.to_string(), "gateway closed");
}

#[test]
fn test_gateway_error_after_clean_cleanup() {
    let err = shutdown_outcome(gateway_error(), Ok(())).unwrap_err();

    assert_eq!(err.to_string(), "gateway closed");
}
