use anchor_lang::prelude::*;

use crate::state::{GuardianSet, Protocol, ProtocolConfig};

pub fn revive(ctx: Context<Revive>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let grace = ctx.accounts.config.revive_window();

    let protocol = &mut ctx.accounts.protocol;
    let declared_at = protocol.death_declaration_time;
    protocol.revive(&mut ctx.accounts.guardians, &owner, now, grace)?;

    msg!("afterlife: owner {} revived", owner);
    emit!(ProtocolRevived {
        owner,
        declared_at,
        revived_at: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Revive<'info> {
    #[account(seeds = [b"protocol_config"], bump)]
    pub config: Account<'info, ProtocolConfig>,

    #[account(mut, seeds = [b"protocol", protocol.owner.as_ref()], bump = protocol.bump)]
    pub protocol: Account<'info, Protocol>,

    #[account(
        mut,
        seeds = [b"guardians", protocol.key().as_ref()],
        bump
    )]
    pub guardians: Box<Account<'info, GuardianSet>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct ProtocolRevived {
    pub owner: Pubkey,
    pub declared_at: i64,
    pub revived_at: i64,
}
