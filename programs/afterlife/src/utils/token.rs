use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

/// SPL transfer out of a protocol vault, signed by the protocol PDA.
/// Zero amounts are skipped.
pub fn transfer_from_vault<'info>(
    token_program: AccountInfo<'info>,
    vault: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    protocol: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    token::transfer(
        CpiContext::new_with_signer(
            token_program,
            Transfer {
                from: vault,
                to: destination,
                authority: protocol,
            },
            signer_seeds,
        ),
        amount,
    )
}
