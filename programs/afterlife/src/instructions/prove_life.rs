use anchor_lang::prelude::*;

use crate::state::{GuardianSet, Protocol};

pub fn prove_life(ctx: Context<ProveLife>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    let protocol = &mut ctx.accounts.protocol;
    let voided = ctx.accounts.guardians.confirmations();
    protocol.prove_life(&mut ctx.accounts.guardians, &owner, now)?;

    emit!(LifeProven {
        owner,
        last_heartbeat: protocol.last_heartbeat,
        voided_confirmations: voided,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ProveLife<'info> {
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
pub struct LifeProven {
    pub owner: Pubkey,
    pub last_heartbeat: i64,
    pub voided_confirmations: u8,
}
