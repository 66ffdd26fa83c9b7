//! Concurrent initialization in a dedicated process
//!
//! Racing `init` calls must elect exactly one winner, and a losing racer
//! must leave the winner's error-tracking client untouched.

use std::sync::{Arc, Barrier};
use std::thread;

use kino::{InitOptions, KinoError, SentryOptions};

#[test]
fn test_racing_inits_elect_one_winner_and_keep_client_enabled() {
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                let options = InitOptions {
                    sentry: Some(SentryOptions {
                        dsn: Some("https://public@example.ingest.local/1".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                };
                barrier.wait();
                kino::init(options).map(|_| ())
            })
        })
        .collect();

    let results: Vec<Result<(), KinoError>> = handles
        .into_iter()
        .map(|handle| handle.join().expect("no panic"))
        .collect();

    let winners = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(winners, 1);
    for result in results.iter().filter(|result| result.is_err()) {
        assert_eq!(*result, Err(KinoError::AlreadyInitialized));
    }

    // The winner's client must still be bound and enabled; no losing
    // racer may have rebound or closed it.
    let kino = kino::handle().expect("initialized");
    assert!(kino.client().map_or(false, |client| client.is_enabled()));
}
