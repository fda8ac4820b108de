use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MAX_BENEFICIARIES, MAX_GUARDIANS};
use crate::state::{BeneficiaryTable, GuardianSet, Protocol};

pub fn register(ctx: Context<Register>, inactivity_threshold: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let owner = ctx.accounts.owner.key();
    let mint = ctx.accounts.mint.key();
    let protocol_key = ctx.accounts.protocol.key();

    let protocol = Protocol::new(
        owner,
        mint,
        inactivity_threshold,
        now,
        ctx.bumps.protocol,
        ctx.bumps.vault,
    )?;
    ctx.accounts.protocol.set_inner(protocol);
    ctx.accounts.guardians.set_inner(GuardianSet::new(protocol_key));
    ctx.accounts
        .beneficiaries
        .set_inner(BeneficiaryTable::new(protocol_key));

    msg!("afterlife: registered owner {}", owner);
    emit!(ProtocolRegistered {
        owner,
        mint,
        inactivity_threshold,
        last_heartbeat: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Register<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + Protocol::SIZE,
        seeds = [b"protocol", owner.key().as_ref()],
        bump
    )]
    pub protocol: Account<'info, Protocol>,

    #[account(
        init,
        payer = owner,
        space = GuardianSet::space(MAX_GUARDIANS),
        seeds = [b"guardians", protocol.key().as_ref()],
        bump
    )]
    pub guardians: Box<Account<'info, GuardianSet>>,

    #[account(
        init,
        payer = owner,
        space = BeneficiaryTable::space(MAX_BENEFICIARIES),
        seeds = [b"beneficiaries", protocol.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, BeneficiaryTable>>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = protocol,
        seeds = [b"vault", protocol.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct ProtocolRegistered {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub inactivity_threshold: i64,
    pub last_heartbeat: i64,
}
