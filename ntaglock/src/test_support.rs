//! Test support helpers intended for use by unit and integration tests.
//!
//! These centralize common MockTransport setup so tests across the crate
//! and the tests/ directory script tag exchanges the same way.
#![allow(dead_code)]

use crate::collab::{MemorySecretStore, RecordingHaptic};
use crate::retry::RecordingPacer;
use crate::session::{AuthorizationSession, SessionConfig};
use crate::transport::mock::MockTransport;
use crate::types::Secret;

/// UID used by the scripted tags.
#[doc(hidden)]
pub const TEST_UID: [u8; 7] = [0x04, 0xA1, 0xB2, 0xC3, 0xD4, 0xE5, 0x80];

/// PWD_AUTH acknowledgement as returned by a tag (PACK + CRC is not
/// inspected, any bytes will do).
#[doc(hidden)]
pub const PWD_ACK: [u8; 4] = [0x80, 0x80, 0x00, 0x00];

/// MockTransport seeded with the given responses, in order.
#[doc(hidden)]
pub fn mock_with_responses(responses: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new(&TEST_UID);
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}

/// Script a session run: auth ack, `failed_reads` transport failures,
/// then a successful 16-byte read of `data`.
#[doc(hidden)]
pub fn mock_session_tag(failed_reads: usize, data: [u8; 16]) -> MockTransport {
    let mut mock = mock_with_responses(vec![PWD_ACK.to_vec()]);
    for _ in 0..failed_reads {
        mock.push_failure("tag moved out of field");
    }
    mock.push_response(data.to_vec());
    mock
}

/// Session that records pauses and pulses instead of sleeping and
/// vibrating.
#[doc(hidden)]
pub fn recording_session(
    config: SessionConfig,
) -> AuthorizationSession<RecordingPacer, RecordingHaptic> {
    AuthorizationSession::with_parts(
        config,
        RecordingPacer::new(),
        RecordingHaptic::default(),
        None,
    )
}

#[doc(hidden)]
pub fn store_with_text(text: &str) -> MemorySecretStore {
    MemorySecretStore::with_secret(Secret::from_text(text))
}
