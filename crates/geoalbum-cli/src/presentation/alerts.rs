//! User-facing alerts driven by the event broadcaster.

use geoalbum_core::AppEvent;
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::TryRecvError;

/// Shown once per failed photo search.
pub const FETCH_FAILED_MESSAGE: &str = "Could not fetch photos for location!";

/// Drain pending events and print an alert for every fetch failure.
///
/// Returns the number of failures reported.
pub fn report_fetch_failures(events: &mut Receiver<AppEvent>) -> usize {
    let mut failures = 0;
    loop {
        match events.try_recv() {
            Ok(AppEvent::PhotosFetchFailed) => {
                failures += 1;
                eprintln!("{FETCH_FAILED_MESSAGE}");
            }
            Ok(_) | Err(TryRecvError::Lagged(_)) => {}
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    failures
}
