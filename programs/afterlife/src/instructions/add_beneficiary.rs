use anchor_lang::prelude::*;

use crate::state::{BeneficiaryTable, Protocol, VestingType};

pub fn add_beneficiary(
    ctx: Context<AddBeneficiary>,
    name: String,
    wallet: Pubkey,
    allocation_bps: u16,
    vesting_type: VestingType,
    vesting_duration: i64,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.protocol.authorize_owner_edit(&owner)?;

    let table = &mut ctx.accounts.beneficiaries;
    table.add(name.clone(), wallet, allocation_bps, vesting_type, vesting_duration)?;

    emit!(BeneficiaryAdded {
        owner,
        wallet,
        name,
        allocation_bps,
        vesting_type,
        vesting_duration,
        total_allocation_bps: table.total_allocation_bps,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AddBeneficiary<'info> {
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
pub struct BeneficiaryAdded {
    pub owner: Pubkey,
    pub wallet: Pubkey,
    pub name: String,
    pub allocation_bps: u16,
    pub vesting_type: VestingType,
    pub vesting_duration: i64,
    pub total_allocation_bps: u16,
}
