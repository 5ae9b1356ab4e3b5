use super::*;

#[test]
fn request_starts_idle() {
    let request = Request::<u32>::new();
    assert_eq!(request.state(), &RequestState::Idle);
    assert!(request.value().is_none());
}

#[test]
fn start_then_finish_ok_is_ready() {
    let mut request = Request::new();
    let ticket = request.start();
    assert!(request.state().is_loading());

    assert!(request.finish::<String>(ticket, Ok(5)));
    assert_eq!(request.value(), Some(&5));
}

#[test]
fn finish_err_records_message() {
    let mut request = Request::<u32>::new();
    let ticket = request.start();
    assert!(request.finish(ticket, Err("network down")));
    assert_eq!(request.state().error(), Some("network down"));
}

#[test]
fn stale_ticket_is_discarded() {
    let mut request = Request::new();
    let first = request.start();
    let second = request.start();

    assert!(request.finish::<String>(second, Ok("asset 2")));
    assert!(!request.finish::<String>(first, Ok("asset 1")));
    assert_eq!(request.value(), Some(&"asset 2"));
}

#[test]
fn late_response_after_newer_start_is_discarded() {
    let mut request = Request::new();
    let first = request.start();
    let _second = request.start();

    assert!(!request.finish::<String>(first, Ok(1)));
    assert!(request.state().is_loading());
}

#[test]
fn refresh_keeps_existing_value_visible() {
    let mut request = Request::new();
    let ticket = request.start();
    request.finish::<String>(ticket, Ok(1));

    let ticket = request.refresh();
    assert_eq!(request.value(), Some(&1));
    request.finish::<String>(ticket, Ok(2));
    assert_eq!(request.value(), Some(&2));
}

#[test]
fn failed_refresh_keeps_last_value() {
    let mut request = Request::new();
    let ticket = request.start();
    request.finish::<String>(ticket, Ok(1));

    let ticket = request.refresh();
    assert!(request.finish(ticket, Err("offline")));
    assert_eq!(request.state(), &RequestState::Ready(1));
}

#[test]
fn reset_discards_in_flight_response() {
    let mut request = Request::new();
    let ticket = request.start();
    request.reset();
    assert!(!request.finish::<String>(ticket, Ok(1)));
    assert_eq!(request.state(), &RequestState::Idle);
}

#[test]
fn tracker_tickets_are_monotonic() {
    let mut tracker = RequestTracker::default();
    let a = tracker.begin();
    let b = tracker.begin();
    assert!(a < b);
    assert!(tracker.is_current(b));
    assert!(!tracker.is_current(a));
    tracker.invalidate();
    assert!(!tracker.is_current(b));
}
