use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::AfterlifeError;
use crate::state::Protocol;
use crate::utils::token::transfer_from_vault;

pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let mint = ctx.accounts.protocol.mint;
    require_keys_eq!(ctx.accounts.owner_destination.mint, mint, AfterlifeError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.owner_destination.owner,
        owner,
        AfterlifeError::InvalidTokenAccount
    );

    let vault_balance = ctx.accounts.protocol.withdraw(&owner, amount)?;
    require!(
        ctx.accounts.vault.amount >= amount,
        AfterlifeError::InsufficientVaultBalance
    );

    let bump = ctx.accounts.protocol.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[b"protocol".as_ref(), owner.as_ref(), &[bump]]];
    transfer_from_vault(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.owner_destination.to_account_info(),
        ctx.accounts.protocol.to_account_info(),
        signer_seeds,
        amount,
    )?;

    emit!(VaultWithdrawn {
        owner,
        amount,
        vault_balance,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut, seeds = [b"protocol", protocol.owner.as_ref()], bump = protocol.bump)]
    pub protocol: Account<'info, Protocol>,

    #[account(
        mut,
        seeds = [b"vault", protocol.key().as_ref()],
        bump = protocol.vault_bump,
        constraint = vault.mint == protocol.mint @ AfterlifeError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_destination: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VaultWithdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
