use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::AfterlifeError;
use crate::state::{BeneficiaryTable, Protocol, ProtocolConfig};
use crate::utils::token::transfer_from_vault;

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let beneficiary = ctx.accounts.beneficiary.key();
    let owner = ctx.accounts.protocol.owner;
    let mint = ctx.accounts.protocol.mint;

    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.mint,
        mint,
        AfterlifeError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_token_account.owner,
        beneficiary,
        AfterlifeError::InvalidTokenAccount
    );
    require_keys_eq!(
        ctx.accounts.treasury_token_account.mint,
        mint,
        AfterlifeError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.treasury_token_account.owner,
        ctx.accounts.config.treasury,
        AfterlifeError::InvalidTokenAccount
    );

    let fee_bps = ctx.accounts.config.platform_fee_bps;
    let receipt = ctx.accounts.protocol.claim(
        &mut ctx.accounts.beneficiaries,
        &beneficiary,
        now,
        fee_bps,
    )?;
    require!(
        ctx.accounts.vault.amount >= receipt.gross,
        AfterlifeError::InsufficientVaultBalance
    );

    let bump = ctx.accounts.protocol.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[b"protocol".as_ref(), owner.as_ref(), &[bump]]];
    transfer_from_vault(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.beneficiary_token_account.to_account_info(),
        ctx.accounts.protocol.to_account_info(),
        signer_seeds,
        receipt.net,
    )?;
    transfer_from_vault(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.treasury_token_account.to_account_info(),
        ctx.accounts.protocol.to_account_info(),
        signer_seeds,
        receipt.fee,
    )?;

    let protocol = &ctx.accounts.protocol;
    emit!(ShareClaimed {
        owner,
        beneficiary,
        gross: receipt.gross,
        fee: receipt.fee,
        net: receipt.net,
        amount_claimed: receipt.amount_claimed,
        vault_balance: protocol.current_vault_balance,
    });

    if receipt.completed {
        msg!("afterlife: protocol for {} completed", owner);
        emit!(ProtocolCompleted {
            owner,
            total_claimed: protocol.total_claimed,
            residual_balance: protocol.current_vault_balance,
        });
    }
    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(seeds = [b"protocol_config"], bump)]
    pub config: Account<'info, ProtocolConfig>,

    #[account(mut, seeds = [b"protocol", protocol.owner.as_ref()], bump = protocol.bump)]
    pub protocol: Account<'info, Protocol>,

    #[account(
        mut,
        seeds = [b"beneficiaries", protocol.key().as_ref()],
        bump
    )]
    pub beneficiaries: Box<Account<'info, BeneficiaryTable>>,

    #[account(
        mut,
        seeds = [b"vault", protocol.key().as_ref()],
        bump = protocol.vault_bump,
        constraint = vault.mint == protocol.mint @ AfterlifeError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub treasury_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ShareClaimed {
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    /// Amount booked against the entitlement (fee included).
    pub gross: u64,
    pub fee: u64,
    pub net: u64,
    pub amount_claimed: u64,
    pub vault_balance: u64,
}

#[event]
pub struct ProtocolCompleted {
    pub owner: Pubkey,
    pub total_claimed: u64,
    pub residual_balance: u64,
}
