use ntaglock::diagnostics::{apply_queued_writes, WriteQueue};
use ntaglock::tag::TagHandle;
use ntaglock::transport::{MockTransport, TagTransport};
use ntaglock::types::PendingWrite;
use ntaglock::Error;

use crate::common;

#[test]
fn second_write_fails_others_land() {
    common::init_logging();
    let mut tag = MockTransport::new(&common::TEST_UID);
    tag.push_response(common::ack()); // sector select
    tag.push_response(common::ack());
    tag.push_failure("NAK");
    tag.push_response(common::ack());

    let mut queue = WriteQueue::new();
    queue.push(common::sram_write(0xF0, 0x01));
    queue.push(common::sram_write(0xF1, 0x02));
    queue.push(common::sram_write(0xF2, 0x03));

    let mut handle = TagHandle::open(&mut tag).unwrap();
    let outcomes = apply_queued_writes(&mut handle, &mut queue).unwrap();
    drop(handle);

    assert!(queue.is_empty());
    let lines: Vec<String> = outcomes.iter().map(|o| o.to_string()).collect();
    assert_eq!(lines, vec!["Good SRAM Write", "Bad SRAM Write", "Good SRAM Write"]);
    assert_eq!(outcomes[1].error.as_deref(), Some("transport error: NAK"));

    let writes = tag.sent_with_opcode(0xA2);
    assert_eq!(writes.len(), 3);
    assert_eq!(writes[0], &vec![0xA2, 0xF0, 0x01, 0x01, 0x01, 0x01]);
    assert_eq!(writes[2], &vec![0xA2, 0xF2, 0x03, 0x03, 0x03, 0x03]);
    assert_eq!(tag.sent[0], vec![0x1B, 0xFF, 0xFF, 0xFF, 0xFF]);
    assert!(!tag.is_connected());
}

#[test]
fn writes_keep_insertion_order() {
    let mut queue = WriteQueue::new();
    for page in [0xF5u8, 0xF1, 0xFA] {
        queue.push(common::sram_write(page, page));
    }
    let pages: Vec<u8> = queue.iter().map(|w| w.page.as_u8()).collect();
    assert_eq!(pages, vec![0xF5, 0xF1, 0xFA]);
    assert_eq!(queue.len(), 3);
}

#[test]
fn operator_input_parses_into_queue() {
    let mut queue = WriteQueue::new();
    queue.push(PendingWrite::parse("F2", "aa bb cc dd").unwrap());
    queue.push(PendingWrite::parse("0xff", "01 zz 02 03 04 05").unwrap());

    let shown: Vec<String> = queue.iter().map(|w| w.to_string()).collect();
    assert_eq!(shown, vec!["Page 0xF2: AA BB CC DD", "Page 0xFF: 01 02 03 04"]);

    assert!(matches!(PendingWrite::parse("04", "00 00 00 00"), Err(Error::Precondition(_))));
    assert!(matches!(PendingWrite::parse("F0", "00 00"), Err(Error::Precondition(_))));
    assert!(matches!(PendingWrite::parse("G1", "00 00 00 00"), Err(Error::Precondition(_))));
}

#[test]
fn disconnected_tag_drains_queue_without_writes() {
    let mut tag = MockTransport::new(&common::TEST_UID);
    let mut queue = WriteQueue::new();
    queue.push(common::sram_write(0xF4, 0x44));

    let mut handle = TagHandle::open(&mut tag).unwrap();
    let res = apply_queued_writes(&mut handle, &mut queue);
    drop(handle);

    // the sector select timed out, so nothing was written
    assert!(matches!(res, Err(Error::Timeout)));
    assert!(queue.is_empty());
    assert!(tag.sent_with_opcode(0xA2).is_empty());
}
