use anchor_lang::prelude::*;

use crate::state::{BeneficiaryTable, Protocol};

pub fn remove_beneficiary(ctx: Context<RemoveBeneficiary>, wallet: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    // Post-death removal would forfeit a vesting entitlement.
    ctx.accounts.protocol.authorize_owner_edit(&owner)?;

    let table = &mut ctx.accounts.beneficiaries;
    let removed = table.remove(&wallet)?;

    emit!(BeneficiaryRemoved {
        owner,
        wallet,
        released_bps: removed.allocation_bps,
        total_allocation_bps: table.total_allocation_bps,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RemoveBeneficiary<'info> {
    #[account(seeds = [b"protocol", protocol.owner.as_ref()], bump = protocol.bump)]
    pub protocol: Account<'info, Protocol>,

    #[account(
        mut,
        seeds = [b"beneficiaries", protocol.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, BeneficiaryTable>>,

    pub owner: Signer<'info>,
}

#[event]
pub struct BeneficiaryRemoved {
    pub owner: Pubkey,
    pub wallet: Pubkey,
    pub released_bps: u16,
    pub total_allocation_bps: u16,
}
