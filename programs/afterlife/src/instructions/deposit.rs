use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::AfterlifeError;
use crate::state::Protocol;

pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let mint = ctx.accounts.protocol.mint;
    require_keys_eq!(ctx.accounts.owner_token_account.mint, mint, AfterlifeError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        owner,
        AfterlifeError::InvalidTokenAccount
    );

    let vault_balance = ctx.accounts.protocol.deposit(&owner, amount)?;

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(VaultDeposited {
        owner,
        amount,
        vault_balance,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct Deposit<'info> {
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
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VaultDeposited {
    pub owner: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
