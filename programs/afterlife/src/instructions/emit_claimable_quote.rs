use anchor_lang::prelude::*;

use crate::state::{BeneficiaryTable, Protocol};

pub fn emit_claimable_quote(ctx: Context<EmitClaimableQuote>, wallet: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let protocol = &ctx.accounts.protocol;
    let quote = protocol.claim_quote(&ctx.accounts.beneficiaries, &wallet, now)?;

    emit!(ClaimableQuote {
        owner: protocol.owner,
        wallet,
        total_entitlement: quote.total_entitlement,
        vested: quote.vested,
        already_claimed: quote.already_claimed,
        claimable: quote.claimable,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct EmitClaimableQuote<'info> {
    #[account(seeds = [b"protocol", protocol.owner.as_ref()], bump = protocol.bump)]
    pub protocol: Account<'info, Protocol>,

    #[account(
        seeds = [b"beneficiaries", protocol.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, BeneficiaryTable>>,
}

#[event]
pub struct ClaimableQuote {
    pub owner: Pubkey,
    pub wallet: Pubkey,
    pub total_entitlement: u64,
    pub vested: u64,
    pub already_claimed: u64,
    /// Gross; the platform fee is deducted at payout.
    pub claimable: u64,
}
