// ntaglock/src/constants.rs
//! Common protocol constants used across the crate

/// READ: returns four consecutive pages (16 bytes)
pub const OPCODE_READ: u8 = 0x30;

/// FAST_READ: returns `4 * (end - start + 1)` bytes
pub const OPCODE_FAST_READ: u8 = 0x3A;

/// WRITE: single page, 4 bytes of payload
pub const OPCODE_WRITE: u8 = 0xA2;

/// PWD_AUTH. The extended-range sector select reuses the same opcode.
pub const OPCODE_PWD_AUTH: u8 = 0x1B;

/// Bytes per page on a Type 2 tag
pub const PAGE_SIZE: usize = 4;

/// Capability container page
pub const CC_PAGE: u8 = 0x03;

/// First user page, also used as the zero-effect write probe target
pub const SCRATCH_PAGE: u8 = 0x04;

/// Page window read by the authorization session
pub const AUTH_READ_START: u8 = 0x04;
pub const AUTH_READ_END: u8 = 0x07;

/// Extended SRAM bank (pages 0xF0..=0xFF, 64 bytes)
pub const SRAM_FIRST_PAGE: u8 = 0xF0;
pub const SRAM_LAST_PAGE: u8 = 0xFF;
pub const SRAM_PAGE_COUNT: usize = 16;

/// Sector addressed by the sector select that exposes the SRAM bank
pub const SRAM_SECTOR: u8 = 0xFF;

/// First page of the SRAM window used by the secret challenge/verify path
pub const SRAM_VERIFY_START: u8 = 0xF8;

/// Password sent by the authorization session
pub const DEFAULT_PASSWORD: [u8; 4] = [0x01, 0x02, 0x03, 0x04];

/// Retry and pacing defaults
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const INTER_ATTEMPT_DELAY_MS: u64 = 50;
pub const SETTLE_DELAY_MS: u64 = 30;

/// Haptic pulse length on a successful authorization
pub const DEFAULT_HAPTIC_MS: u64 = 300;
