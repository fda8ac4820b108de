use anchor_lang::prelude::*;

use crate::constants::{MAX_INACTIVITY_THRESHOLD, MIN_INACTIVITY_THRESHOLD};
use crate::error::AfterlifeError;
use crate::state::{BeneficiaryTable, GuardianSet};
use crate::utils::{liveness, vesting};

/// Canonical, persisted lifecycle status.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtocolStatus {
    Active,
    Executing,
    Completed,
}

/// Status as reported to callers; WARNING and PENDING are derived from the
/// heartbeat clock and never stored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtocolState {
    Active,
    Warning,
    Pending,
    Executing,
    Completed,
}

impl ProtocolState {
    /// Position in the forward lifecycle order.
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// How many guardian confirmations declare the owner dead.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmationPolicy {
    /// Any one registered guardian.
    SingleAuthority,
    /// `required` distinct guardians.
    Threshold { required: u8 },
}

impl ConfirmationPolicy {
    pub fn required(&self) -> u8 {
        match self {
            ConfirmationPolicy::SingleAuthority => 1,
            ConfirmationPolicy::Threshold { required } => *required,
        }
    }

    /// Guardians that must stay registered for the policy to remain satisfiable.
    pub fn min_guardians(&self) -> u8 {
        match self {
            ConfirmationPolicy::SingleAuthority => 0,
            ConfirmationPolicy::Threshold { required } => *required,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    Recorded { confirmations: u8, required: u8 },
    DeathDeclared { confirmations: u8 },
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimQuote {
    pub total_entitlement: u64,
    pub vested: u64,
    pub already_claimed: u64,
    pub claimable: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    pub gross: u64,
    pub fee: u64,
    pub net: u64,
    /// Beneficiary's cumulative gross after this claim.
    pub amount_claimed: u64,
    pub completed: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReviveStatus {
    pub can_revive: bool,
    pub seconds_remaining: i64,
}

/// Per-owner protocol instance PDA.
#[account]
pub struct Protocol {
    /// Owner whose liveness is monitored (PDA seed).
    pub owner: Pubkey,
    /// Token mint held by the vault.
    pub mint: Pubkey,
    pub status: ProtocolStatus,
    /// Set once by a confirmed inactivity; cleared only by revive.
    pub is_dead: bool,
    /// Unix seconds of the last proof of life.
    pub last_heartbeat: i64,
    /// Seconds of silence after which guardians may confirm.
    pub inactivity_threshold: i64,
    pub death_declaration_time: i64,
    /// Origin of every beneficiary's vesting clock.
    pub vesting_start_time: i64,
    /// Vault balance snapshotted at the death declaration.
    pub vault_balance: u64,
    /// Live vault balance (deposits minus withdrawals and gross claims).
    pub current_vault_balance: u64,
    /// Sum of gross claims paid out.
    pub total_claimed: u64,
    pub confirmation_policy: ConfirmationPolicy,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Protocol {
    pub const SIZE: usize =
        32 + // owner
        32 + // mint
        1 +  // status
        1 +  // is_dead
        8 +  // last_heartbeat
        8 +  // inactivity_threshold
        8 +  // death_declaration_time
        8 +  // vesting_start_time
        8 +  // vault_balance
        8 +  // current_vault_balance
        8 +  // total_claimed
        2 +  // confirmation_policy
        1 +  // bump
        1;   // vault_bump

    pub fn new(
        owner: Pubkey,
        mint: Pubkey,
        inactivity_threshold: i64,
        now: i64,
        bump: u8,
        vault_bump: u8,
    ) -> std::result::Result<Self, AfterlifeError> {
        validate_threshold(inactivity_threshold)?;
        Ok(Self {
            owner,
            mint,
            status: ProtocolStatus::Active,
            is_dead: false,
            last_heartbeat: now,
            inactivity_threshold,
            death_declaration_time: 0,
            vesting_start_time: 0,
            vault_balance: 0,
            current_vault_balance: 0,
            total_claimed: 0,
            confirmation_policy: ConfirmationPolicy::SingleAuthority,
            bump,
            vault_bump,
        })
    }

    pub fn ensure_owner(&self, caller: &Pubkey) -> std::result::Result<(), AfterlifeError> {
        if *caller != self.owner {
            return Err(AfterlifeError::NotOwner);
        }
        Ok(())
    }

    /// Owner-only, pre-death gate shared by registry and vault edits.
    pub fn authorize_owner_edit(&self, caller: &Pubkey) -> std::result::Result<(), AfterlifeError> {
        self.ensure_owner(caller)?;
        if self.is_dead {
            return Err(AfterlifeError::ProtocolDead);
        }
        Ok(())
    }

    pub fn derived_state(&self, now: i64, sync_buffer: i64) -> ProtocolState {
        match self.status {
            ProtocolStatus::Completed => ProtocolState::Completed,
            ProtocolStatus::Executing => ProtocolState::Executing,
            ProtocolStatus::Active => liveness::classify(
                now,
                self.last_heartbeat,
                self.inactivity_threshold,
                sync_buffer,
            ),
        }
    }

    /// Refreshes the heartbeat and voids any confirmations on record.
    pub fn prove_life(
        &mut self,
        guardians: &mut GuardianSet,
        caller: &Pubkey,
        now: i64,
    ) -> std::result::Result<(), AfterlifeError> {
        self.ensure_owner(caller)?;
        if self.is_dead {
            return Err(AfterlifeError::AlreadyDead);
        }
        self.last_heartbeat = self.last_heartbeat.max(now);
        guardians.reset_confirmations();
        Ok(())
    }

    /// Returns the previous threshold.
    pub fn update_inactivity_threshold(
        &mut self,
        caller: &Pubkey,
        seconds: i64,
    ) -> std::result::Result<i64, AfterlifeError> {
        self.authorize_owner_edit(caller)?;
        validate_threshold(seconds)?;
        let old = self.inactivity_threshold;
        self.inactivity_threshold = seconds;
        Ok(old)
    }

    pub fn set_confirmation_policy(
        &mut self,
        guardians: &GuardianSet,
        caller: &Pubkey,
        policy: ConfirmationPolicy,
    ) -> std::result::Result<(), AfterlifeError> {
        self.authorize_owner_edit(caller)?;
        if let ConfirmationPolicy::Threshold { required } = policy {
            if required == 0 || required as usize > guardians.len() {
                return Err(AfterlifeError::InvalidConfirmationPolicy);
            }
        }
        if guardians.confirmations() > 0 {
            return Err(AfterlifeError::ConfirmationInProgress);
        }
        self.confirmation_policy = policy;
        Ok(())
    }

    /// Returns the new live balance. Refused once death is declared: the
    /// snapshot is frozen and nothing could ever move the tokens out again.
    pub fn deposit(
        &mut self,
        caller: &Pubkey,
        amount: u64,
    ) -> std::result::Result<u64, AfterlifeError> {
        self.authorize_owner_edit(caller)?;
        if amount == 0 {
            return Err(AfterlifeError::InvalidAmount);
        }
        self.current_vault_balance = self
            .current_vault_balance
            .checked_add(amount)
            .ok_or(AfterlifeError::MathOverflow)?;
        Ok(self.current_vault_balance)
    }

    /// Returns the new live balance.
    pub fn withdraw(
        &mut self,
        caller: &Pubkey,
        amount: u64,
    ) -> std::result::Result<u64, AfterlifeError> {
        self.authorize_owner_edit(caller)?;
        if amount == 0 {
            return Err(AfterlifeError::InvalidAmount);
        }
        self.current_vault_balance = self
            .current_vault_balance
            .checked_sub(amount)
            .ok_or(AfterlifeError::InsufficientVaultBalance)?;
        Ok(self.current_vault_balance)
    }

    /// Records a guardian's confirmation; the one that satisfies the policy
    /// declares death, snapshots the vault and starts the vesting clock.
    pub fn confirm_inactivity(
        &mut self,
        guardians: &mut GuardianSet,
        caller: &Pubkey,
        now: i64,
    ) -> std::result::Result<ConfirmationOutcome, AfterlifeError> {
        if guardians.find(caller).is_none() {
            return Err(AfterlifeError::NotGuardian);
        }
        if self.is_dead {
            return Err(AfterlifeError::AlreadyDead);
        }
        if !liveness::is_inactive(now, self.last_heartbeat, self.inactivity_threshold) {
            return Err(AfterlifeError::OwnerActive);
        }

        let confirmations = guardians.record_confirmation(caller)?;
        let required = self.confirmation_policy.required();
        if confirmations < required {
            return Ok(ConfirmationOutcome::Recorded {
                confirmations,
                required,
            });
        }

        self.is_dead = true;
        self.death_declaration_time = now;
        self.vesting_start_time = now;
        self.vault_balance = self.current_vault_balance;
        self.status = ProtocolStatus::Executing;
        Ok(ConfirmationOutcome::DeathDeclared { confirmations })
    }

    /// Entitlement to date for `wallet`. Before death the entitlement is
    /// projected from the live balance and nothing is claimable.
    pub fn claim_quote(
        &self,
        table: &BeneficiaryTable,
        wallet: &Pubkey,
        now: i64,
    ) -> std::result::Result<ClaimQuote, AfterlifeError> {
        let b = table.find(wallet).ok_or(AfterlifeError::NotBeneficiary)?;
        if !self.is_dead {
            return Ok(ClaimQuote {
                total_entitlement: b.entitlement(self.current_vault_balance)?,
                vested: 0,
                already_claimed: b.amount_claimed,
                claimable: 0,
            });
        }

        let total_entitlement = b.entitlement(self.vault_balance)?;
        let vested = vesting::vested_amount(
            total_entitlement,
            b.vesting_type,
            b.vesting_duration,
            now.saturating_sub(self.vesting_start_time),
        )?;
        let claimable = if self.status == ProtocolStatus::Completed {
            0
        } else {
            vesting::claimable(vested, b.amount_claimed)
        };
        Ok(ClaimQuote {
            total_entitlement,
            vested,
            already_claimed: b.amount_claimed,
            claimable,
        })
    }

    /// Books the whole claimable amount (gross) against the vault.
    pub fn claim(
        &mut self,
        table: &mut BeneficiaryTable,
        caller: &Pubkey,
        now: i64,
        fee_bps: u16,
    ) -> std::result::Result<ClaimReceipt, AfterlifeError> {
        if !self.is_dead {
            return Err(AfterlifeError::ProtocolActive);
        }
        let quote = self.claim_quote(table, caller, now)?;
        if quote.claimable == 0 {
            return Err(AfterlifeError::NothingClaimable);
        }

        let gross = quote.claimable;
        if gross > self.current_vault_balance {
            return Err(AfterlifeError::InsufficientVaultBalance);
        }
        let (fee, net) = vesting::split_fee(gross, fee_bps)?;
        let amount_claimed = quote
            .already_claimed
            .checked_add(gross)
            .ok_or(AfterlifeError::MathOverflow)?;
        let total_claimed = self
            .total_claimed
            .checked_add(gross)
            .ok_or(AfterlifeError::MathOverflow)?;

        table
            .find_mut(caller)
            .ok_or(AfterlifeError::NotBeneficiary)?
            .amount_claimed = amount_claimed;
        self.current_vault_balance -= gross;
        self.total_claimed = total_claimed;

        let completed = self.refresh_completion(table)?;
        Ok(ClaimReceipt {
            gross,
            fee,
            net,
            amount_claimed,
            completed,
        })
    }

    /// Moves EXECUTING to COMPLETED once the vault is drained or every
    /// beneficiary holds its full entitlement. The share left unallocated by
    /// the table stays in the vault.
    fn refresh_completion(
        &mut self,
        table: &BeneficiaryTable,
    ) -> std::result::Result<bool, AfterlifeError> {
        if self.status != ProtocolStatus::Executing {
            return Ok(false);
        }
        if self.current_vault_balance == 0 || table.is_fully_claimed(self.vault_balance)? {
            self.status = ProtocolStatus::Completed;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn revive_status(&self, now: i64, grace: Option<i64>) -> ReviveStatus {
        match grace {
            Some(grace) if self.is_dead && self.total_claimed == 0 => {
                let remaining = self
                    .death_declaration_time
                    .saturating_add(grace)
                    .saturating_sub(now);
                ReviveStatus {
                    can_revive: remaining >= 0,
                    seconds_remaining: remaining.max(0),
                }
            }
            _ => ReviveStatus::default(),
        }
    }

    /// Reverses a death declaration inside the grace window, before any payout.
    pub fn revive(
        &mut self,
        guardians: &mut GuardianSet,
        caller: &Pubkey,
        now: i64,
        grace: Option<i64>,
    ) -> std::result::Result<(), AfterlifeError> {
        self.ensure_owner(caller)?;
        let grace = grace.ok_or(AfterlifeError::ReviveDisabled)?;
        if !self.is_dead {
            return Err(AfterlifeError::ProtocolActive);
        }
        if self.total_claimed > 0 {
            return Err(AfterlifeError::ClaimsAlreadyStarted);
        }
        if now.saturating_sub(self.death_declaration_time) > grace {
            return Err(AfterlifeError::ReviveWindowClosed);
        }

        self.is_dead = false;
        self.status = ProtocolStatus::Active;
        self.last_heartbeat = self.last_heartbeat.max(now);
        self.death_declaration_time = 0;
        self.vesting_start_time = 0;
        self.vault_balance = 0;
        guardians.reset_confirmations();
        Ok(())
    }
}

fn validate_threshold(seconds: i64) -> std::result::Result<(), AfterlifeError> {
    if !(MIN_INACTIVITY_THRESHOLD..=MAX_INACTIVITY_THRESHOLD).contains(&seconds) {
        return Err(AfterlifeError::InvalidThreshold);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        BPS_DENOMINATOR, DEFAULT_PLATFORM_FEE_BPS, DEFAULT_REVIVE_GRACE_SECONDS,
    };
    use crate::state::VestingType;

    const ONE_TOKEN: u64 = 1_000_000_000;
    const THRESHOLD: i64 = 100;
    const DEATH: i64 = THRESHOLD + 1;

    struct Fixture {
        protocol: Protocol,
        guardians: GuardianSet,
        table: BeneficiaryTable,
        owner: Pubkey,
        guardian: Pubkey,
        heir: Pubkey,
    }

    /// Owner registered at t=0 with one guardian, one 50% linear heir
    /// (1000s) and 10 tokens in the vault.
    fn fixture() -> Fixture {
        let owner = Pubkey::new_unique();
        let guardian = Pubkey::new_unique();
        let heir = Pubkey::new_unique();
        let mut protocol =
            Protocol::new(owner, Pubkey::new_unique(), THRESHOLD, 0, 255, 254).unwrap();
        let mut guardians = GuardianSet::new(Pubkey::new_unique());
        let mut table = BeneficiaryTable::new(Pubkey::new_unique());

        guardians.add("sister".into(), guardian, false).unwrap();
        table
            .add("daughter".into(), heir, 5_000, VestingType::Linear, 1_000)
            .unwrap();
        protocol.deposit(&owner, 10 * ONE_TOKEN).unwrap();

        Fixture {
            protocol,
            guardians,
            table,
            owner,
            guardian,
            heir,
        }
    }

    fn declare_dead(f: &mut Fixture) {
        let out = f
            .protocol
            .confirm_inactivity(&mut f.guardians, &f.guardian, DEATH)
            .unwrap();
        assert!(matches!(out, ConfirmationOutcome::DeathDeclared { .. }));
    }

    #[test]
    fn register_validates_threshold() {
        let owner = Pubkey::new_unique();
        assert!(matches!(
            Protocol::new(owner, Pubkey::new_unique(), MIN_INACTIVITY_THRESHOLD - 1, 0, 0, 0),
            Err(AfterlifeError::InvalidThreshold)
        ));
        let p = Protocol::new(owner, Pubkey::new_unique(), 30 * 86_400, 7, 0, 0).unwrap();
        assert_eq!(p.status, ProtocolStatus::Active);
        assert_eq!(p.last_heartbeat, 7);
        assert!(!p.is_dead);
    }

    #[test]
    fn warning_after_seventy_percent_of_threshold() {
        let mut f = fixture();
        assert_eq!(f.protocol.derived_state(0, 0), ProtocolState::Active);
        assert_eq!(f.protocol.derived_state(71, 0), ProtocolState::Warning);
        assert_eq!(f.protocol.derived_state(DEATH, 0), ProtocolState::Pending);

        f.protocol.prove_life(&mut f.guardians, &f.owner, 80).unwrap();
        assert_eq!(f.protocol.derived_state(80, 0), ProtocolState::Active);
        assert_eq!(f.protocol.last_heartbeat, 80);
    }

    #[test]
    fn prove_life_is_owner_only_and_never_moves_backwards() {
        let mut f = fixture();
        assert!(matches!(
            f.protocol.prove_life(&mut f.guardians, &f.guardian, 10),
            Err(AfterlifeError::NotOwner)
        ));
        f.protocol.prove_life(&mut f.guardians, &f.owner, 50).unwrap();
        f.protocol.prove_life(&mut f.guardians, &f.owner, 40).unwrap();
        assert_eq!(f.protocol.last_heartbeat, 50);
    }

    #[test]
    fn guardian_confirms_only_after_threshold() {
        let mut f = fixture();
        assert!(matches!(
            f.protocol.confirm_inactivity(&mut f.guardians, &f.guardian, 50),
            Err(AfterlifeError::OwnerActive)
        ));
        assert!(matches!(
            f.protocol.confirm_inactivity(&mut f.guardians, &f.guardian, THRESHOLD),
            Err(AfterlifeError::OwnerActive)
        ));
        assert!(matches!(
            f.protocol.confirm_inactivity(&mut f.guardians, &f.heir, DEATH),
            Err(AfterlifeError::NotGuardian)
        ));
        assert_eq!(f.guardians.confirmations(), 0);

        declare_dead(&mut f);
        assert!(f.protocol.is_dead);
        assert_eq!(f.protocol.status, ProtocolStatus::Executing);
        assert_eq!(f.protocol.death_declaration_time, DEATH);
        assert_eq!(f.protocol.vesting_start_time, DEATH);
        assert_eq!(f.protocol.vault_balance, 10 * ONE_TOKEN);
        assert_eq!(f.protocol.derived_state(DEATH, 0), ProtocolState::Executing);

        assert!(matches!(
            f.protocol.confirm_inactivity(&mut f.guardians, &f.guardian, DEATH + 5),
            Err(AfterlifeError::AlreadyDead)
        ));
        assert!(matches!(
            f.protocol.prove_life(&mut f.guardians, &f.owner, DEATH + 5),
            Err(AfterlifeError::AlreadyDead)
        ));
        assert!(f.protocol.is_dead);
    }

    #[test]
    fn owner_edits_are_frozen_after_death() {
        let mut f = fixture();
        declare_dead(&mut f);
        assert!(matches!(
            f.protocol.authorize_owner_edit(&f.owner),
            Err(AfterlifeError::ProtocolDead)
        ));
        assert!(matches!(
            f.protocol.withdraw(&f.owner, 1),
            Err(AfterlifeError::ProtocolDead)
        ));
        assert!(matches!(
            f.protocol.update_inactivity_threshold(&f.owner, 500),
            Err(AfterlifeError::ProtocolDead)
        ));
        assert!(matches!(
            f.protocol.set_confirmation_policy(
                &f.guardians,
                &f.owner,
                ConfirmationPolicy::SingleAuthority
            ),
            Err(AfterlifeError::ProtocolDead)
        ));
        assert!(matches!(
            f.protocol.deposit(&f.owner, ONE_TOKEN),
            Err(AfterlifeError::ProtocolDead)
        ));
        assert_eq!(f.protocol.current_vault_balance, 10 * ONE_TOKEN);
        assert_eq!(f.protocol.vault_balance, 10 * ONE_TOKEN);
    }

    #[test]
    fn vault_edits() {
        let mut f = fixture();
        assert!(matches!(f.protocol.deposit(&f.owner, 0), Err(AfterlifeError::InvalidAmount)));
        assert!(matches!(f.protocol.deposit(&f.heir, 5), Err(AfterlifeError::NotOwner)));
        assert!(matches!(
            f.protocol.withdraw(&f.owner, 10 * ONE_TOKEN + 1),
            Err(AfterlifeError::InsufficientVaultBalance)
        ));
        assert_eq!(f.protocol.withdraw(&f.owner, ONE_TOKEN).unwrap(), 9 * ONE_TOKEN);
        assert_eq!(f.protocol.update_inactivity_threshold(&f.owner, 500).unwrap(), THRESHOLD);
        assert!(matches!(
            f.protocol.update_inactivity_threshold(&f.owner, 0),
            Err(AfterlifeError::InvalidThreshold)
        ));
    }

    #[test]
    fn linear_claim_at_half_duration() {
        let mut f = fixture();
        assert!(matches!(
            f.protocol.claim(&mut f.table, &f.heir, DEATH, 0),
            Err(AfterlifeError::ProtocolActive)
        ));
        declare_dead(&mut f);

        let now = DEATH + 500;
        let quote = f.protocol.claim_quote(&f.table, &f.heir, now).unwrap();
        assert_eq!(quote.total_entitlement, 5 * ONE_TOKEN);
        assert_eq!(quote.vested, 2_500_000_000);
        assert_eq!(quote.claimable, 2_500_000_000);

        let receipt = f
            .protocol
            .claim(&mut f.table, &f.heir, now, DEFAULT_PLATFORM_FEE_BPS)
            .unwrap();
        assert_eq!(receipt.gross, 2_500_000_000);
        assert_eq!(receipt.fee, 250_000_000);
        assert_eq!(receipt.net, 2_250_000_000);
        assert!(!receipt.completed);
        assert_eq!(f.table.find(&f.heir).unwrap().amount_claimed, 2_500_000_000);
        assert_eq!(f.protocol.current_vault_balance, 7_500_000_000);
        assert_eq!(f.protocol.total_claimed, 2_500_000_000);

        // same instant: nothing left, and no double payout
        assert_eq!(f.protocol.claim_quote(&f.table, &f.heir, now).unwrap().claimable, 0);
        assert!(matches!(
            f.protocol.claim(&mut f.table, &f.heir, now, DEFAULT_PLATFORM_FEE_BPS),
            Err(AfterlifeError::NothingClaimable)
        ));
        assert_eq!(f.table.find(&f.heir).unwrap().amount_claimed, 2_500_000_000);
    }

    #[test]
    fn full_claim_completes_the_protocol() {
        let mut f = fixture();
        declare_dead(&mut f);
        f.protocol.claim(&mut f.table, &f.heir, DEATH + 300, 0).unwrap();

        let receipt = f.protocol.claim(&mut f.table, &f.heir, DEATH + 1_200, 0).unwrap();
        assert_eq!(receipt.amount_claimed, 5 * ONE_TOKEN);
        assert!(receipt.completed);
        assert_eq!(f.protocol.status, ProtocolStatus::Completed);
        assert_eq!(f.protocol.derived_state(DEATH + 1_200, 0), ProtocolState::Completed);

        assert!(matches!(
            f.protocol.claim(&mut f.table, &f.heir, DEATH + 5_000, 0),
            Err(AfterlifeError::NothingClaimable)
        ));
        // unallocated half stays in the vault
        assert_eq!(f.protocol.current_vault_balance, 5 * ONE_TOKEN);
    }

    #[test]
    fn claims_only_grow() {
        let mut f = fixture();
        declare_dead(&mut f);
        let mut prev_claimable = 0;
        for dt in [0, 1, 100, 333, 999] {
            let q = f.protocol.claim_quote(&f.table, &f.heir, DEATH + dt).unwrap();
            assert!(q.claimable >= prev_claimable);
            prev_claimable = q.claimable;
        }

        let mut prev_claimed = 0;
        for dt in [10, 10, 250, 600, 1_000, 2_000] {
            let _ = f.protocol.claim(&mut f.table, &f.heir, DEATH + dt, 0);
            let claimed = f.table.find(&f.heir).unwrap().amount_claimed;
            assert!(claimed >= prev_claimed);
            prev_claimed = claimed;
        }
        assert_eq!(prev_claimed, 5 * ONE_TOKEN);
    }

    #[test]
    fn cliff_heir_waits_for_deadline() {
        let mut f = fixture();
        let cliff = Pubkey::new_unique();
        f.table
            .add("trust".into(), cliff, 2_500, VestingType::Cliff, 600)
            .unwrap();
        declare_dead(&mut f);

        assert!(matches!(
            f.protocol.claim(&mut f.table, &cliff, DEATH + 599, 0),
            Err(AfterlifeError::NothingClaimable)
        ));
        let r = f.protocol.claim(&mut f.table, &cliff, DEATH + 600, 0).unwrap();
        assert_eq!(r.gross, 2_500_000_000);
    }

    #[test]
    fn non_beneficiary_cannot_claim() {
        let mut f = fixture();
        declare_dead(&mut f);
        assert!(matches!(
            f.protocol.claim(&mut f.table, &f.guardian, DEATH + 500, 0),
            Err(AfterlifeError::NotBeneficiary)
        ));
    }

    #[test]
    fn quote_before_death_projects_live_balance() {
        let f = fixture();
        let q = f.protocol.claim_quote(&f.table, &f.heir, 10).unwrap();
        assert_eq!(q.total_entitlement, 5 * ONE_TOKEN);
        assert_eq!(q.claimable, 0);
    }

    #[test]
    fn threshold_policy_needs_distinct_guardians() {
        let mut f = fixture();
        let second = Pubkey::new_unique();
        let third = Pubkey::new_unique();
        f.guardians.add("lawyer".into(), second, false).unwrap();
        f.guardians.add("partner".into(), third, false).unwrap();

        for required in [4, 0] {
            assert!(matches!(
                f.protocol.set_confirmation_policy(
                    &f.guardians,
                    &f.owner,
                    ConfirmationPolicy::Threshold { required }
                ),
                Err(AfterlifeError::InvalidConfirmationPolicy)
            ));
        }
        f.protocol
            .set_confirmation_policy(
                &f.guardians,
                &f.owner,
                ConfirmationPolicy::Threshold { required: 2 },
            )
            .unwrap();

        let out = f
            .protocol
            .confirm_inactivity(&mut f.guardians, &f.guardian, DEATH)
            .unwrap();
        assert_eq!(out, ConfirmationOutcome::Recorded { confirmations: 1, required: 2 });
        assert!(!f.protocol.is_dead);
        assert!(matches!(
            f.protocol.confirm_inactivity(&mut f.guardians, &f.guardian, DEATH),
            Err(AfterlifeError::AlreadyConfirmed)
        ));

        // a heartbeat voids the partial tally
        f.protocol.prove_life(&mut f.guardians, &f.owner, DEATH + 1).unwrap();
        assert_eq!(f.guardians.confirmations(), 0);

        let later = DEATH + 1 + DEATH;
        f.protocol.confirm_inactivity(&mut f.guardians, &second, later).unwrap();
        let out = f
            .protocol
            .confirm_inactivity(&mut f.guardians, &third, later)
            .unwrap();
        assert_eq!(out, ConfirmationOutcome::DeathDeclared { confirmations: 2 });
        assert!(f.protocol.is_dead);
    }

    #[test]
    fn revive_inside_grace_window() {
        let mut f = fixture();
        let grace = Some(DEFAULT_REVIVE_GRACE_SECONDS);
        assert!(matches!(
            f.protocol.revive(&mut f.guardians, &f.owner, 10, grace),
            Err(AfterlifeError::ProtocolActive)
        ));
        declare_dead(&mut f);

        let status = f.protocol.revive_status(DEATH + 20, grace);
        assert!(status.can_revive);
        assert_eq!(status.seconds_remaining, DEFAULT_REVIVE_GRACE_SECONDS - 20);
        assert!(!f.protocol.revive_status(DEATH + 20, None).can_revive);

        assert!(matches!(
            f.protocol.revive(&mut f.guardians, &f.owner, DEATH + 20, None),
            Err(AfterlifeError::ReviveDisabled)
        ));
        assert!(matches!(
            f.protocol.revive(&mut f.guardians, &f.heir, DEATH + 20, grace),
            Err(AfterlifeError::NotOwner)
        ));

        f.protocol.revive(&mut f.guardians, &f.owner, DEATH + 20, grace).unwrap();
        assert!(!f.protocol.is_dead);
        assert_eq!(f.protocol.status, ProtocolStatus::Active);
        assert_eq!(f.protocol.last_heartbeat, DEATH + 20);
        assert_eq!(f.protocol.vault_balance, 0);
        assert_eq!(f.guardians.confirmations(), 0);
        assert_eq!(f.protocol.derived_state(DEATH + 20, 0), ProtocolState::Active);
    }

    #[test]
    fn revive_window_closes() {
        let mut f = fixture();
        let grace = Some(DEFAULT_REVIVE_GRACE_SECONDS);
        declare_dead(&mut f);
        let late = DEATH + DEFAULT_REVIVE_GRACE_SECONDS + 1;
        assert!(!f.protocol.revive_status(late, grace).can_revive);
        assert!(matches!(
            f.protocol.revive(&mut f.guardians, &f.owner, late, grace),
            Err(AfterlifeError::ReviveWindowClosed)
        ));
        assert!(f.protocol.is_dead);
    }

    #[test]
    fn revive_blocked_once_paid_out() {
        let mut f = fixture();
        let grace = Some(DEFAULT_REVIVE_GRACE_SECONDS);
        declare_dead(&mut f);
        f.protocol.claim(&mut f.table, &f.heir, DEATH + 10, 0).unwrap();
        assert!(!f.protocol.revive_status(DEATH + 10, grace).can_revive);
        assert!(matches!(
            f.protocol.revive(&mut f.guardians, &f.owner, DEATH + 10, grace),
            Err(AfterlifeError::ClaimsAlreadyStarted)
        ));
    }

    #[test]
    fn allocation_total_holds_across_edits() {
        let mut f = fixture();
        let wallets: Vec<Pubkey> = (0..6).map(|_| Pubkey::new_unique()).collect();
        for (i, w) in wallets.iter().enumerate() {
            let _ = f.table.add(format!("heir-{i}"), *w, 1_700, VestingType::Linear, 60);
            assert!(f.table.total_allocation_bps <= BPS_DENOMINATOR);
        }
        for w in wallets.iter() {
            let _ = f.table.update_allocation(w, 9_000);
            let sum: u16 = f.table.beneficiaries.iter().map(|b| b.allocation_bps).sum();
            assert_eq!(sum, f.table.total_allocation_bps);
            assert!(sum <= BPS_DENOMINATOR);
        }
    }
}
