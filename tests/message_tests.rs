use std::fs;
use tempfile::tempdir;
use QueueBlaster::error::PublisherError;
use QueueBlaster::message::load_message;

#[test]
fn test_load_message_returns_raw_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("message.json");
    let payload: &[u8] = &[0x7b, 0x00, 0xff, 0x0a, b'}'];
    fs::write(&path, payload).unwrap();

    let message = load_message(&path).expect("message should load");
    assert_eq!(message.as_bytes(), payload);
}

#[test]
fn test_load_message_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("message.json");
    match load_message(&path) {
        Err(PublisherError::MessageNotFound(p)) => assert_eq!(p, path),
        other => panic!("Expected MessageNotFound, got {:?}", other),
    }
}

#[test]
fn test_load_empty_message() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("message.json");
    fs::write(&path, b"").unwrap();

    let err = load_message(&path).unwrap_err();
    assert!(matches!(err, PublisherError::MessageEmpty(_)));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_whitespace_only_message_is_kept() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("message.json");
    fs::write(&path, b"\n").unwrap();

    let message = load_message(&path).unwrap();
    assert_eq!(message.as_bytes(), b"\n");
}
