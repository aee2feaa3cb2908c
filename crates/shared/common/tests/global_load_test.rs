//! Lazy load-and-install test. Separate binary from `global_test` so the
//! process static starts empty.

use common::{environment, environment_or_load, ConfigLoader, MapSource};

#[test]
fn test_load_happens_once() {
    let first_loader = ConfigLoader::new(MapSource::new().with("AUTH0_AUDIENCE", "mocha"));
    let first = environment_or_load(&first_loader).unwrap();
    assert_eq!(first.auth0().audience(), "mocha");

    // A later loader is never consulted
    let second_loader = ConfigLoader::new(MapSource::new().with("AUTH0_AUDIENCE", "cortado"));
    let second = environment_or_load(&second_loader).unwrap();

    assert!(std::ptr::eq(first, second));
    assert_eq!(environment().unwrap().auth0().audience(), "mocha");
}
