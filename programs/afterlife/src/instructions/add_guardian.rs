use anchor_lang::prelude::*;

use crate::state::{GuardianSet, Protocol};

pub fn add_guardian(
    ctx: Context<AddGuardian>,
    name: String,
    wallet: Pubkey,
    is_fixed: bool,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.protocol.authorize_owner_edit(&owner)?;

    let guardians = &mut ctx.accounts.guardians;
    guardians.add(name.clone(), wallet, is_fixed)?;

    emit!(GuardianAdded {
        owner,
        wallet,
        name,
        is_fixed,
        guardian_count: guardians.len() as u8,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddGuardian<'info> {
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
pub struct GuardianAdded {
    pub owner: Pubkey,
    pub wallet: Pubkey,
    pub name: String,
    pub is_fixed: bool,
    pub guardian_count: u8,
}
