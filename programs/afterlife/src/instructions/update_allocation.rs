use anchor_lang::prelude::*;

use crate::state::{BeneficiaryTable, Protocol};

pub fn update_allocation(
    ctx: Context<UpdateAllocation>,
    wallet: Pubkey,
    allocation_bps: u16,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.protocol.authorize_owner_edit(&owner)?;

    let table = &mut ctx.accounts.beneficiaries;
    let applied_bps = table.update_allocation(&wallet, allocation_bps)?;
    if applied_bps != allocation_bps {
        msg!("afterlife: allocation clamped {} -> {}", allocation_bps, applied_bps);
    }

    emit!(AllocationUpdated {
        owner,
        wallet,
        requested_bps: allocation_bps,
        applied_bps,
        total_allocation_bps: table.total_allocation_bps,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateAllocation<'info> {
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
pub struct AllocationUpdated {
    pub owner: Pubkey,
    pub wallet: Pubkey,
    pub requested_bps: u16,
    pub applied_bps: u16,
    pub total_allocation_bps: u16,
}
