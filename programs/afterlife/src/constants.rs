//! Program-wide constants.

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Basis-point denominator (100%).
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Share of the inactivity threshold after which a live owner reads as WARNING (70%).
pub const WARNING_RATIO_BPS: u16 = 7_000;

/// Shortest inactivity threshold an owner may register with.
pub const MIN_INACTIVITY_THRESHOLD: i64 = 60;

/// Longest inactivity threshold an owner may register with (10 years).
pub const MAX_INACTIVITY_THRESHOLD: i64 = 10 * 365 * SECONDS_PER_DAY;

/// Longest per-beneficiary vesting duration (50 years).
pub const MAX_VESTING_DURATION: i64 = 50 * 365 * SECONDS_PER_DAY;

/// Max guardians stored per protocol.
pub const MAX_GUARDIANS: usize = 10;

/// Max beneficiaries stored per protocol.
pub const MAX_BENEFICIARIES: usize = 20;

/// Max UTF-8 byte length of a guardian/beneficiary display name.
pub const MAX_NAME_LEN: usize = 32;

/// Platform fee taken from every claim (10%).
pub const DEFAULT_PLATFORM_FEE_BPS: u16 = 1_000;

/// Upper bound the admin may set the platform fee to.
pub const MAX_PLATFORM_FEE_BPS: u16 = 2_000;

/// Window after a death declaration during which the owner may revive.
pub const DEFAULT_REVIVE_GRACE_SECONDS: i64 = 120;

pub const MAX_REVIVE_GRACE_SECONDS: i64 = 30 * SECONDS_PER_DAY;

/// Clock-skew allowance observers add to the threshold before reporting PENDING.
pub const DEFAULT_SYNC_BUFFER_SECONDS: i64 = 15;

pub const MAX_SYNC_BUFFER_SECONDS: i64 = SECONDS_PER_DAY;
