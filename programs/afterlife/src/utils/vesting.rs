//! Vesting and fee arithmetic (integer only, floor rounding).
//!
//! - entitlement = snapshot * allocation_bps / 10_000
//! - LINEAR: vested = entitlement * min(elapsed, duration) / duration
//! - CLIFF:  vested = entitlement once elapsed >= duration, else 0
//! - a zero duration vests immediately for either type
//!
//! Amounts are gross; the platform fee is split off only at payout.

use crate::constants::BPS_DENOMINATOR;
use crate::error::AfterlifeError;
use crate::state::VestingType;

/// Share of `snapshot` owed to a beneficiary holding `allocation_bps`.
pub fn total_entitlement(snapshot: u64, allocation_bps: u16) -> Result<u64, AfterlifeError> {
    if allocation_bps > BPS_DENOMINATOR {
        return Err(AfterlifeError::InvalidAllocation);
    }
    let v = (snapshot as u128)
        .checked_mul(allocation_bps as u128)
        .ok_or(AfterlifeError::MathOverflow)?
        / (BPS_DENOMINATOR as u128);
    u64::try_from(v).map_err(|_| AfterlifeError::MathOverflow)
}

/// Portion of `entitlement` released after `elapsed` seconds of vesting.
pub fn vested_amount(
    entitlement: u64,
    vesting_type: VestingType,
    duration: i64,
    elapsed: i64,
) -> Result<u64, AfterlifeError> {
    if duration < 0 {
        return Err(AfterlifeError::InvalidVestingDuration);
    }
    let elapsed = elapsed.max(0);
    if elapsed >= duration {
        return Ok(entitlement);
    }
    match vesting_type {
        VestingType::Cliff => Ok(0),
        VestingType::Linear => {
            let v = (entitlement as u128)
                .checked_mul(elapsed as u128)
                .ok_or(AfterlifeError::MathOverflow)?
                / (duration as u128);
            u64::try_from(v).map_err(|_| AfterlifeError::MathOverflow)
        }
    }
}

/// Vested but not yet claimed; never negative.
pub fn claimable(vested: u64, already_claimed: u64) -> u64 {
    vested.saturating_sub(already_claimed)
}

/// Splits a gross payout into `(fee, net)`.
pub fn split_fee(gross: u64, fee_bps: u16) -> Result<(u64, u64), AfterlifeError> {
    if fee_bps > BPS_DENOMINATOR {
        return Err(AfterlifeError::InvalidFee);
    }
    let fee = (gross as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(AfterlifeError::MathOverflow)?
        / (BPS_DENOMINATOR as u128);
    let fee = u64::try_from(fee).map_err(|_| AfterlifeError::MathOverflow)?;
    let net = gross.checked_sub(fee).ok_or(AfterlifeError::MathOverflow)?;
    Ok((fee, net))
}
