use anchor_lang::prelude::*;

use crate::state::{ConfigParams, ProtocolConfig};

pub fn initialize_config(ctx: Context<InitializeConfig>, params: ConfigParams) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    cfg.admin = ctx.accounts.admin.key();
    cfg.apply(&params)?;

    emit!(ConfigInitialized {
        admin: cfg.admin,
        treasury: cfg.treasury,
        platform_fee_bps: cfg.platform_fee_bps,
        revive_enabled: cfg.revive_enabled,
        revive_grace_seconds: cfg.revive_grace_seconds,
        sync_buffer_seconds: cfg.sync_buffer_seconds,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + ProtocolConfig::SIZE,
        seeds = [b"protocol_config"],
        bump
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub treasury: Pubkey,
    pub platform_fee_bps: u16,
    pub revive_enabled: bool,
    pub revive_grace_seconds: i64,
    pub sync_buffer_seconds: i64,
}
