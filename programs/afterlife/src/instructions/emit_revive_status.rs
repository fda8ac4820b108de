use anchor_lang::prelude::*;

use crate::state::{Protocol, ProtocolConfig};

pub fn emit_revive_status(ctx: Context<EmitReviveStatus>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &ctx.accounts.config;
    let protocol = &ctx.accounts.protocol;
    let status = protocol.revive_status(now, config.revive_window());

    emit!(ReviveStatusReported {
        owner: protocol.owner,
        revive_enabled: config.revive_enabled,
        can_revive: status.can_revive,
        seconds_remaining: status.seconds_remaining,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitReviveStatus<'info> {
    #[account(seeds = [b"protocol_config"], bump)]
    pub config: Account<'info, ProtocolConfig>,

    #[account(seeds = [b"protocol", protocol.owner.as_ref()], bump = protocol.bump)]
    pub protocol: Account<'info, Protocol>,
}

#[event]
pub struct ReviveStatusReported {
    pub owner: Pubkey,
    pub revive_enabled: bool,
    pub can_revive: bool,
    pub seconds_remaining: i64,
}
