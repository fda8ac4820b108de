use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MAX_BENEFICIARIES, MAX_NAME_LEN, MAX_VESTING_DURATION};
use crate::error::AfterlifeError;
use crate::utils::vesting;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VestingType {
    Linear,
    Cliff,
}

/// A single beneficiary entry stored in the beneficiary table PDA.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Beneficiary {
    pub name: String,
    pub wallet: Pubkey,
    /// Share of the vault snapshot, in basis points.
    pub allocation_bps: u16,
    pub vesting_type: VestingType,
    /// Seconds from the death declaration until fully vested.
    pub vesting_duration: i64,
    /// Cumulative gross amount paid out (fee included).
    pub amount_claimed: u64,
}

impl Beneficiary {
    pub const SIZE: usize =
        4 + MAX_NAME_LEN + // name
        32 + // wallet
        2 +  // allocation_bps
        1 +  // vesting_type
        8 +  // vesting_duration
        8;   // amount_claimed

    pub fn entitlement(&self, snapshot: u64) -> std::result::Result<u64, AfterlifeError> {
        vesting::total_entitlement(snapshot, self.allocation_bps)
    }
}

/// PDA holding one owner's beneficiaries and their allocation table.
#[account]
pub struct BeneficiaryTable {
    pub protocol: Pubkey,
    /// Sum of all `allocation_bps`; never above 10_000.
    pub total_allocation_bps: u16,
    pub beneficiaries: Vec<Beneficiary>,
}

impl BeneficiaryTable {
    pub const fn space(max: usize) -> usize {
        8 + 32 + 2 + 4 + max * Beneficiary::SIZE
    }

    pub fn new(protocol: Pubkey) -> Self {
        Self {
            protocol,
            total_allocation_bps: 0,
            beneficiaries: Vec::with_capacity(MAX_BENEFICIARIES),
        }
    }

    pub fn find(&self, wallet: &Pubkey) -> Option<&Beneficiary> {
        self.beneficiaries.iter().find(|b| b.wallet == *wallet)
    }

    pub(crate) fn find_mut(&mut self, wallet: &Pubkey) -> Option<&mut Beneficiary> {
        self.beneficiaries.iter_mut().find(|b| b.wallet == *wallet)
    }

    pub fn add(
        &mut self,
        name: String,
        wallet: Pubkey,
        allocation_bps: u16,
        vesting_type: VestingType,
        vesting_duration: i64,
    ) -> std::result::Result<(), AfterlifeError> {
        if wallet == Pubkey::default() {
            return Err(AfterlifeError::InvalidPubkey);
        }
        super::validate_name(&name)?;
        if allocation_bps == 0 || allocation_bps > BPS_DENOMINATOR {
            return Err(AfterlifeError::InvalidAllocation);
        }
        if !(0..=MAX_VESTING_DURATION).contains(&vesting_duration) {
            return Err(AfterlifeError::InvalidVestingDuration);
        }
        if self.find(&wallet).is_some() {
            return Err(AfterlifeError::AlreadyExists);
        }
        if self.beneficiaries.len() >= MAX_BENEFICIARIES {
            return Err(AfterlifeError::BeneficiaryListFull);
        }

        let total = self
            .total_allocation_bps
            .checked_add(allocation_bps)
            .ok_or(AfterlifeError::MathOverflow)?;
        if total > BPS_DENOMINATOR {
            return Err(AfterlifeError::AllocationExceeded);
        }

        self.beneficiaries.push(Beneficiary {
            name,
            wallet,
            allocation_bps,
            vesting_type,
            vesting_duration,
            amount_claimed: 0,
        });
        self.total_allocation_bps = total;
        Ok(())
    }

    pub fn remove(&mut self, wallet: &Pubkey) -> std::result::Result<Beneficiary, AfterlifeError> {
        let idx = self
            .beneficiaries
            .iter()
            .position(|b| b.wallet == *wallet)
            .ok_or(AfterlifeError::NotFound)?;
        let removed = self.beneficiaries.remove(idx);
        self.total_allocation_bps = self
            .total_allocation_bps
            .checked_sub(removed.allocation_bps)
            .ok_or(AfterlifeError::MathOverflow)?;
        Ok(removed)
    }

    /// Sets a new allocation, clamped to what the other entries leave free.
    /// Returns the applied value.
    pub fn update_allocation(
        &mut self,
        wallet: &Pubkey,
        requested_bps: u16,
    ) -> std::result::Result<u16, AfterlifeError> {
        let total = self.total_allocation_bps;
        let entry = self.find_mut(wallet).ok_or(AfterlifeError::NotFound)?;
        let others = total
            .checked_sub(entry.allocation_bps)
            .ok_or(AfterlifeError::MathOverflow)?;
        let ceiling = BPS_DENOMINATOR.saturating_sub(others);
        let applied = requested_bps.min(ceiling);
        entry.allocation_bps = applied;
        self.total_allocation_bps = others
            .checked_add(applied)
            .ok_or(AfterlifeError::MathOverflow)?;
        Ok(applied)
    }

    /// True once every entry has been paid its full entitlement of `snapshot`.
    pub fn is_fully_claimed(&self, snapshot: u64) -> std::result::Result<bool, AfterlifeError> {
        for b in self.beneficiaries.iter() {
            if b.amount_claimed < b.entitlement(snapshot)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
