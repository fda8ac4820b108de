use anchor_lang::prelude::*;

use crate::error::AfterlifeError;
use crate::state::{ConfigParams, ProtocolConfig};

pub fn update_config(ctx: Context<UpdateConfig>, params: ConfigParams) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, AfterlifeError::UnauthorizedAdmin);

    let old_fee_bps = cfg.platform_fee_bps;
    cfg.apply(&params)?;

    emit!(ConfigUpdated {
        admin: cfg.admin,
        treasury: cfg.treasury,
        old_fee_bps,
        platform_fee_bps: cfg.platform_fee_bps,
        revive_enabled: cfg.revive_enabled,
        revive_grace_seconds: cfg.revive_grace_seconds,
        sync_buffer_seconds: cfg.sync_buffer_seconds,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(mut, seeds = [b"protocol_config"], bump)]
    pub config: Account<'info, ProtocolConfig>,

    pub admin: Signer<'info>,
}

#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub treasury: Pubkey,
    pub old_fee_bps: u16,
    pub platform_fee_bps: u16,
    pub revive_enabled: bool,
    pub revive_grace_seconds: i64,
    pub sync_buffer_seconds: i64,
}
