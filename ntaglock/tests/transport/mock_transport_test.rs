use ntaglock::transport::{MockTransport, TagTransport};
use ntaglock::Error;

use crate::common;

#[test]
fn transceive_requires_connection() {
    let mut m = MockTransport::new(&common::TEST_UID);
    m.push_response(vec![0x01]);
    assert!(matches!(m.transceive(&[0x30, 0x03]), Err(Error::NotConnected)));
    assert!(m.sent.is_empty());

    m.connect().unwrap();
    assert_eq!(m.transceive(&[0x30, 0x03]).unwrap(), vec![0x01]);
}

#[test]
fn scripted_failures_and_timeouts() {
    let mut m = common::mock_with_responses(vec![]);
    m.push_failure("Tag was lost.");
    m.connect().unwrap();

    let err = m.transceive(&[0x3A, 0x04, 0x07]).unwrap_err();
    assert!(err.is_transient());
    assert_eq!(err.to_string(), "transport error: Tag was lost.");
    assert!(matches!(m.transceive(&[0x3A, 0x04, 0x07]), Err(Error::Timeout)));
    assert_eq!(m.sent.len(), 2);
}

#[test]
fn boxed_transport_is_usable_as_trait_object() {
    let mut boxed: Box<dyn TagTransport> = Box::new(common::mock_with_responses(vec![vec![0xAA]]));
    boxed.connect().unwrap();
    assert!(boxed.is_connected());
    assert_eq!(boxed.transceive(&[0x1B, 1, 2, 3, 4]).unwrap(), vec![0xAA]);
    assert_eq!(boxed.max_transceive_length().unwrap(), 253);
    boxed.close().unwrap();
    assert!(!boxed.is_connected());
    assert_eq!(boxed.uid().as_bytes(), &common::TEST_UID);
}
