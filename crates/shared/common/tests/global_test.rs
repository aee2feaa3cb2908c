//! Process-wide holder tests.
//!
//! The holder is a process static, so the whole lifecycle runs in one test.

use std::thread;

use common::{environment, install, AppError};
use domain::EnvironmentConfig;

#[test]
fn test_install_once_and_read_everywhere() {
    assert!(matches!(environment(), Err(AppError::NotInitialized)));

    // An invalid record cannot be decoded, so it never reaches the holder
    let invalid = r#"{"production":false,"apiServerUrl":"","auth0":{"url":"","audience":"","clientId":"","callbackURL":"nope"}}"#;
    assert!(serde_json::from_str::<EnvironmentConfig>(invalid).is_err());
    assert!(matches!(environment(), Err(AppError::NotInitialized)));

    let installed = install(EnvironmentConfig::development()).unwrap();
    let first = environment().unwrap();
    assert!(std::ptr::eq(installed, first));

    // Equal value is accepted and yields the same reference
    let again = install(EnvironmentConfig::development()).unwrap();
    assert!(std::ptr::eq(again, first));

    // Different value is rejected and the holder is unchanged
    let err = install(EnvironmentConfig::production()).unwrap_err();
    assert_eq!(err.code(), "ALREADY_INITIALIZED");
    assert!(!environment().unwrap().is_production());

    let readers: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| environment().unwrap() as *const EnvironmentConfig as usize))
        .collect();
    for reader in readers {
        assert_eq!(reader.join().unwrap(), first as *const EnvironmentConfig as usize);
    }
}
