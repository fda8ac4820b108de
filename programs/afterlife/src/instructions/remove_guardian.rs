use anchor_lang::prelude::*;

use crate::state::{GuardianSet, Protocol};

pub fn remove_guardian(ctx: Context<RemoveGuardian>, wallet: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let protocol = &ctx.accounts.protocol;
    protocol.authorize_owner_edit(&owner)?;

    let guardians = &mut ctx.accounts.guardians;
    guardians.remove(&wallet, protocol.confirmation_policy.min_guardians())?;

    emit!(GuardianRemoved {
        owner,
        wallet,
        guardian_count: guardians.len() as u8,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RemoveGuardian<'info> {
    #[account(seeds = [b"protocol", protocol.owner.as_ref()], bump = protocol.bump)]
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
pub struct GuardianRemoved {
    pub owner: Pubkey,
    pub wallet: Pubkey,
    pub guardian_count: u8,
}
