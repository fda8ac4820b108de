use anchor_lang::prelude::*;

use crate::constants::{MAX_PLATFORM_FEE_BPS, MAX_REVIVE_GRACE_SECONDS, MAX_SYNC_BUFFER_SECONDS};
use crate::error::AfterlifeError;

/// Program-wide settings PDA, one per deployment.
#[account]
pub struct ProtocolConfig {
    /// Authority allowed to change this account.
    pub admin: Pubkey,
    /// Wallet whose token account receives platform fees.
    pub treasury: Pubkey,
    pub platform_fee_bps: u16,
    /// Capability flag for the post-death revive path.
    pub revive_enabled: bool,
    pub revive_grace_seconds: i64,
    /// Skew allowance used when reporting PENDING to observers.
    pub sync_buffer_seconds: i64,
}

/// Instruction input shared by `initialize_config` and `update_config`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigParams {
    pub treasury: Pubkey,
    pub platform_fee_bps: u16,
    pub revive_enabled: bool,
    pub revive_grace_seconds: i64,
    pub sync_buffer_seconds: i64,
}

impl ProtocolConfig {
    pub const SIZE: usize =
        32 + // admin
        32 + // treasury
        2 +  // platform_fee_bps
        1 +  // revive_enabled
        8 +  // revive_grace_seconds
        8;   // sync_buffer_seconds

    pub fn apply(&mut self, params: &ConfigParams) -> std::result::Result<(), AfterlifeError> {
        params.validate()?;
        self.treasury = params.treasury;
        self.platform_fee_bps = params.platform_fee_bps;
        self.revive_enabled = params.revive_enabled;
        self.revive_grace_seconds = params.revive_grace_seconds;
        self.sync_buffer_seconds = params.sync_buffer_seconds;
        Ok(())
    }

    /// Grace window in seconds, or `None` when revive is switched off.
    pub fn revive_window(&self) -> Option<i64> {
        self.revive_enabled.then_some(self.revive_grace_seconds)
    }
}

impl ConfigParams {
    pub fn validate(&self) -> std::result::Result<(), AfterlifeError> {
        if self.treasury == Pubkey::default() {
            return Err(AfterlifeError::InvalidPubkey);
        }
        if self.platform_fee_bps > MAX_PLATFORM_FEE_BPS {
            return Err(AfterlifeError::InvalidFee);
        }
        if self.revive_grace_seconds <= 0 || self.revive_grace_seconds > MAX_REVIVE_GRACE_SECONDS {
            return Err(AfterlifeError::InvalidConfig);
        }
        if !(0..=MAX_SYNC_BUFFER_SECONDS).contains(&self.sync_buffer_seconds) {
            return Err(AfterlifeError::InvalidConfig);
        }
        Ok(())
    }
}
