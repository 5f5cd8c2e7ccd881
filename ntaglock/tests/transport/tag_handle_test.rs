use ntaglock::constants::SRAM_SECTOR;
use ntaglock::protocol::Command;
use ntaglock::tag::TagHandle;
use ntaglock::transport::{MockTransport, TagTransport};
use ntaglock::types::{PageAddress, PageData, Password};
use ntaglock::Error;

use crate::common;

#[test]
fn drop_closes_on_early_return() {
    fn failing_routine(tag: &mut MockTransport) -> ntaglock::Result<()> {
        let mut handle = TagHandle::open(tag)?;
        handle.authenticate(Password::default())?;
        Ok(())
    }

    let mut tag = MockTransport::new(&common::TEST_UID);
    tag.push_failure("NAK");
    assert!(failing_routine(&mut tag).is_err());
    assert_eq!(tag.close_calls, 1);
    assert!(!tag.is_connected());
}

#[test]
fn open_failure_is_connection_error_and_closes() {
    let mut tag = MockTransport::new(&common::TEST_UID);
    tag.set_fail_connect(true);
    assert!(matches!(TagHandle::open(&mut tag), Err(Error::Connection(_))));
    assert_eq!(tag.close_calls, 1);
}

#[test]
fn explicit_close_closes_once() {
    let mut tag = MockTransport::new(&common::TEST_UID);
    let handle = TagHandle::open(&mut tag).unwrap();
    handle.close().unwrap();
    assert_eq!(tag.close_calls, 1);
}

#[test]
fn handle_runs_full_exchange() -> anyhow::Result<()> {
    let mut tag = common::mock_with_responses(vec![
        common::PWD_ACK.to_vec(),
        common::user_pages().to_vec(),
        common::ack(),
        common::ack(),
    ]);
    {
        let mut handle = TagHandle::open(&mut tag)?;
        handle.authenticate(Password::default())?;
        let pages = handle.read_pages(PageAddress::new(0x04), PageAddress::new(0x07))?;
        assert_eq!(pages.len(), 4);
        handle.ensure_sector(SRAM_SECTOR)?;
        handle.ensure_sector(SRAM_SECTOR)?;
        handle.write_page(PageAddress::new(0xF0), PageData::from_bytes([1, 2, 3, 4]))?;
    }
    assert_eq!(
        tag.sent,
        vec![
            vec![0x1B, 0x01, 0x02, 0x03, 0x04],
            vec![0x3A, 0x04, 0x07],
            vec![0x1B, 0xFF, 0xFF, 0xFF, 0xFF],
            vec![0xA2, 0xF0, 0x01, 0x02, 0x03, 0x04],
        ]
    );
    assert_eq!(tag.close_calls, 1);
    Ok(())
}

#[test]
fn precondition_errors_never_reach_the_wire() {
    let mut tag = MockTransport::new(&common::TEST_UID);
    let mut handle = TagHandle::open(&mut tag).unwrap();
    let res = handle.execute(&Command::FastRead {
        start: PageAddress::new(0x10),
        end: PageAddress::new(0x08),
    });
    drop(handle);
    assert!(matches!(res, Err(Error::Precondition(_))));
    assert!(tag.sent.is_empty());
}
