use std::sync::Arc;
use std::thread;

use ntaglock::retry::RecordingPacer;
use ntaglock::session::SessionBuilder;
use ntaglock::transport::MockTransport;
use ntaglock::trigger::{SessionDriver, TagTrigger};
use ntaglock::types::Outcome;

use crate::common;

fn driver() -> SessionDriver<RecordingPacer, ntaglock::collab::NoHaptic> {
    SessionDriver::new(SessionBuilder::new().pacer(RecordingPacer::new()).build().unwrap())
}

#[test]
fn newest_presence_wins() {
    let trigger = TagTrigger::new();
    let mut stale = MockTransport::new(&[0x04, 0x01]);
    stale.set_fail_connect(true);
    assert!(trigger.offer(stale).is_none());

    let fresh = common::mock_session_tag(0, common::user_pages());
    let superseded = trigger.offer(fresh).unwrap();
    assert_eq!(superseded.uid, vec![0x04, 0x01]);

    let mut d = driver();
    let report = d.poll(&trigger, &common::store_with_key()).unwrap();
    assert_eq!(report.outcome, Outcome::Authorized);
    assert!(d.poll(&trigger, &common::store_with_key()).is_none());
}

#[test]
fn discovery_thread_feeds_runner() {
    let trigger = Arc::new(TagTrigger::new());
    let producer = {
        let trigger = Arc::clone(&trigger);
        thread::spawn(move || {
            trigger.offer(common::mock_session_tag(1, common::user_pages()));
        })
    };
    producer.join().unwrap();

    assert!(trigger.is_pending());
    let mut d = driver();
    let report = d.poll(&trigger, &common::store_with_key()).unwrap();
    assert_eq!(report.outcome, Outcome::Authorized);
    assert_eq!(report.read_attempts, 2);
    assert!(!trigger.is_pending());
}
