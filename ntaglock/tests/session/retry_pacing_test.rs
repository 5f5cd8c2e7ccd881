use std::time::Duration;

use ntaglock::retry::{attempt, RecordingPacer, RetryPolicy};
use ntaglock::session::{SessionBuilder, SessionConfig};
use ntaglock::transport::MockTransport;
use ntaglock::types::Outcome;
use ntaglock::utils::ms;
use ntaglock::Error;

use crate::common;

#[test]
fn settle_pauses_surround_connect_and_first_read() {
    let mut tag = common::mock_session_tag(0, common::user_pages());
    let mut s = SessionBuilder::new().pacer(RecordingPacer::new()).build().unwrap();
    s.run(&mut tag, &common::store_with_key());

    assert_eq!(s.pacer().pauses, vec![ms(30), ms(30), ms(30)]);
}

#[test]
fn each_failed_read_adds_one_backoff() {
    for failures in 0..5usize {
        let mut tag = common::mock_session_tag(failures, common::user_pages());
        let mut s = SessionBuilder::new().pacer(RecordingPacer::new()).build().unwrap();
        let report = s.run(&mut tag, &common::store_with_key());

        assert_eq!(report.outcome, Outcome::Authorized);
        assert_eq!(report.read_attempts as usize, failures + 1);
        assert_eq!(s.pacer().count(ms(50)), failures);
        assert_eq!(s.pacer().count(ms(30)), 3);
    }
}

#[test]
fn exhaustion_pauses_between_attempts_only() {
    let mut tag = MockTransport::new(&common::TEST_UID);
    tag.push_response(common::PWD_ACK.to_vec());
    // no further responses: every read times out

    let mut s = SessionBuilder::new().pacer(RecordingPacer::new()).build().unwrap();
    let report = s.run(&mut tag, &common::store_with_key());

    assert_eq!(report.outcome, Outcome::TransportError);
    assert_eq!(report.read_attempts, 5);
    assert_eq!(s.pacer().count(ms(50)), 4);
    assert_eq!(s.pacer().total(), ms(30 * 3 + 50 * 4));
}

#[test]
fn custom_policy_is_honoured() {
    let policy = RetryPolicy::new(2, ms(10), Duration::ZERO).unwrap();
    let config = SessionConfig {
        retry: policy,
        ..SessionConfig::default()
    };
    let mut tag = common::mock_session_tag(3, common::user_pages());
    let mut s = common::recording_session(config);
    let report = s.run(&mut tag, &common::store_with_key());

    assert_eq!(report.outcome, Outcome::TransportError);
    assert_eq!(report.read_attempts, 2);
    assert_eq!(s.pacer().pauses, vec![ms(10)]);
}

#[test]
fn attempt_reports_last_error() {
    let mut pacer = RecordingPacer::new();
    let res: ntaglock::Result<()> = attempt(&RetryPolicy::default(), &mut pacer, |n| {
        Err(Error::Transport(format!("failure {}", n)))
    });
    match res {
        Err(Error::RetriesExhausted { attempts, last }) => {
            assert_eq!(attempts, 5);
            assert_eq!(last.to_string(), Error::Transport("failure 5".into()).to_string());
        }
        other => panic!("unexpected {:?}", other),
    }
}
