use ntaglock::protocol::{
    encode_authenticate, encode_fast_read, encode_fast_write, encode_read, encode_sector_select,
    fast_read_page_count, Command,
};
use ntaglock::types::{PageAddress, PageData, Password};
use ntaglock::Error;
use proptest::prelude::*;

#[test]
fn authenticate_default_password() {
    let frame = encode_authenticate(Password::default());
    assert_eq!(frame.as_bytes(), &[0x1B, 0x01, 0x02, 0x03, 0x04]);
    assert_eq!(frame.opcode(), 0x1B);
    assert_eq!(frame.operands(), &[0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn fast_read_user_window() {
    let frame = encode_fast_read(PageAddress::new(0x04), PageAddress::new(0x07)).unwrap();
    assert_eq!(frame.as_bytes(), &[0x3A, 0x04, 0x07]);
    assert_eq!(frame.to_string(), "3a 04 07");
}

#[test]
fn fast_read_whole_sram_bank() {
    let (start, end) = (PageAddress::new(0xF0), PageAddress::new(0xFF));
    assert_eq!(encode_fast_read(start, end).unwrap().as_bytes(), &[0x3A, 0xF0, 0xFF]);
    assert_eq!(fast_read_page_count(start, end), 16);
}

#[test]
fn fast_read_inverted_range_is_precondition() {
    let res = encode_fast_read(PageAddress::new(0x07), PageAddress::new(0x04));
    assert!(matches!(res, Err(Error::Precondition(_))));
}

#[test]
fn fast_write_frames() {
    let frame = encode_fast_write(PageAddress::new(0xF2), &[0xAA, 0xBB, 0xCC, 0xDD]).unwrap();
    assert_eq!(frame.as_bytes(), &[0xA2, 0xF2, 0xAA, 0xBB, 0xCC, 0xDD]);

    for bad in [&[][..], &[1, 2, 3][..], &[1, 2, 3, 4, 5][..]] {
        assert!(matches!(
            encode_fast_write(PageAddress::new(0xF2), bad),
            Err(Error::Precondition(_))
        ));
    }
}

#[test]
fn sector_select_puts_sector_in_second_operand() {
    assert_eq!(encode_sector_select(0xFF).as_bytes(), &[0x1B, 0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(encode_sector_select(0x00).as_bytes(), &[0x1B, 0xFF, 0x00, 0xFF, 0xFF]);
}

#[test]
fn read_single_page() {
    assert_eq!(encode_read(PageAddress::new(0x03)).as_bytes(), &[0x30, 0x03]);
}

#[test]
fn command_enum_matches_free_encoders() {
    let cases = vec![
        (
            Command::Authenticate {
                password: Password::from_bytes([9, 8, 7, 6]),
            },
            vec![0x1B, 9, 8, 7, 6],
        ),
        (
            Command::FastRead {
                start: PageAddress::new(0xF8),
                end: PageAddress::new(0xFB),
            },
            vec![0x3A, 0xF8, 0xFB],
        ),
        (
            Command::FastWrite {
                page: PageAddress::new(0xF0),
                data: PageData::from_bytes([1, 2, 3, 4]),
            },
            vec![0xA2, 0xF0, 1, 2, 3, 4],
        ),
        (Command::SectorSelect { sector: 0xFF }, vec![0x1B, 0xFF, 0xFF, 0xFF, 0xFF]),
        (Command::Read { page: PageAddress::new(3) }, vec![0x30, 0x03]),
    ];
    for (cmd, bytes) in cases {
        let frame = cmd.encode().unwrap();
        assert_eq!(frame.as_bytes(), bytes.as_slice(), "{:?}", cmd);
        assert_eq!(frame.opcode(), cmd.opcode());
    }
}

#[test]
fn expected_lengths() {
    let cmd = Command::FastRead {
        start: PageAddress::new(0x04),
        end: PageAddress::new(0x07),
    };
    assert_eq!(cmd.expected_response_len(), Some(16));
    assert_eq!(Command::SectorSelect { sector: 0xFF }.expected_response_len(), None);
}

proptest! {
    #[test]
    fn authenticate_frame_carries_any_password(pwd in any::<[u8; 4]>()) {
        let frame = encode_authenticate(Password::from_bytes(pwd));
        prop_assert_eq!(frame.len(), 5);
        prop_assert_eq!(frame.opcode(), 0x1B);
        prop_assert_eq!(frame.operands(), &pwd[..]);
    }

    #[test]
    fn fast_write_rejects_any_non_page_payload(
        page in any::<u8>(),
        payload in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assume!(payload.len() != 4);
        let res = encode_fast_write(PageAddress::new(page), &payload);
        prop_assert!(matches!(res, Err(Error::Precondition(_))));
    }

    #[test]
    fn fast_write_accepts_any_page_payload(page in any::<u8>(), data in any::<[u8; 4]>()) {
        let frame = encode_fast_write(PageAddress::new(page), &data).unwrap();
        prop_assert_eq!(frame.as_bytes(), &[0xA2, page, data[0], data[1], data[2], data[3]][..]);
    }
}
