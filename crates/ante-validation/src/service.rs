//! # Ante Pipeline Orchestrator
//!
//! Application service that implements `AnteHandlerApi` by sequencing the
//! domain stages against the account-store port.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`AnteHandlerApi`)
//! - Uses the outbound port (`AccountStore`) for every ledger read/write
//! - Delegates validation rules to the domain layer
//!
//! The service is stateless between transactions apart from the mutations it
//! commits through the store: sequence increments, first-use key bindings,
//! the fee debit, and distribution credits. Mutations are written as stages
//! complete; discarding them when a later stage fails is the responsibility
//! of the caller's transactional store context.

use std::sync::Arc;

use shared_crypto::PublicKey;
use shared_types::{std_sign_bytes, Account, Address, BlockContext, CoinError, Coins, StdSignature, StdTx};
use tracing::debug;

use crate::domain::entities::AnteOutcome;
use crate::domain::errors::AnteError;
use crate::domain::fees::{calculate_tx_fee, CalculatedFee, FeeCalculatorRegistry};
use crate::domain::gas::{self, GasMeter};
use crate::domain::{distribution, sequence};
use crate::ports::inbound::AnteHandlerApi;
use crate::ports::outbound::AccountStore;

/// The pre-execution validation pipeline.
///
/// Owns a handle to the fee-calculator registry populated at startup; the
/// registry is shared with whatever construction context needs to register
/// calculators and can be cleared between test cases.
pub struct AnteService<S: AccountStore> {
    store: S,
    registry: Arc<FeeCalculatorRegistry>,
}

impl<S: AccountStore> AnteService<S> {
    /// Create a new pipeline over `store` with `registry`.
    pub fn new(store: S, registry: Arc<FeeCalculatorRegistry>) -> Self {
        Self { store, registry }
    }

    /// The underlying account store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The fee-calculator registry this pipeline consults.
    pub fn registry(&self) -> &FeeCalculatorRegistry {
        &self.registry
    }

    /// Create a fresh account for `address` with the next account number.
    pub fn create_account(&self, address: Address) -> Result<Account, AnteError> {
        let number = self.store.next_account_number()?;
        let account = Account::new(address, number);
        self.store.put_account(account.clone())?;
        Ok(account)
    }

    /// Authenticate one signer position and return the updated account.
    ///
    /// Order matters: identity claims (account number, sequence) are checked
    /// before the signature so replay is reported as `InvalidSequence` even
    /// though the stale sign-bytes would also fail verification. The key is
    /// bound to the account only after the signature verifies.
    fn authenticate_signer(
        &self,
        ctx: &BlockContext,
        tx: &StdTx,
        mut account: Account,
        signature: &StdSignature,
        meter: &mut GasMeter,
    ) -> Result<Account, AnteError> {
        let key = resolve_pub_key(&account, signature)?;

        sequence::validate_account_number(&account, signature.account_number)?;
        sequence::validate_sequence(&account, signature.sequence)?;

        meter.consume(gas::SIG_VERIFY_COST, "signature verification")?;

        let sign_bytes = std_sign_bytes(
            &ctx.chain_id,
            signature.account_number,
            signature.sequence,
            &tx.fee,
            &tx.msgs,
            &tx.memo,
        );
        key.verify(&sign_bytes, &signature.signature)
            .map_err(|_| {
                AnteError::Unauthorized(format!(
                    "signature verification failed for {}",
                    hex::encode(account.address)
                ))
            })?;

        if account.pub_key.is_none() {
            // First-use binding: the embedded key becomes the account's key.
            account.pub_key = Some(key);
        }
        sequence::bump_sequence(&mut account);
        Ok(account)
    }

    /// Debit the computed fee from the first signer's spendable balance.
    fn charge_fee(&self, payer: &Address, amount: &Coins) -> Result<(), AnteError> {
        let mut account = self
            .store
            .account(payer)?
            .ok_or(AnteError::UnknownAddress(*payer))?;
        account.debit(amount).map_err(|err| match err {
            CoinError::Insufficient {
                denom,
                required,
                available,
            } => AnteError::InsufficientFunds {
                denom,
                required,
                available,
            },
        })?;
        self.store.put_account(account)?;
        Ok(())
    }

    /// Apply the distribution plan, creating recipient accounts on first
    /// credit.
    fn credit_recipients(
        &self,
        fee: &CalculatedFee,
        ctx: &BlockContext,
    ) -> Result<(), AnteError> {
        for (address, coins) in distribution::plan_distribution(&fee.amount, fee.policy, ctx) {
            let mut account = match self.store.account(&address)? {
                Some(account) => account,
                None => self.create_account(address)?,
            };
            account.credit(&coins);
            self.store.put_account(account)?;
        }
        Ok(())
    }
}

impl<S: AccountStore> AnteHandlerApi for AnteService<S> {
    fn validate(&self, ctx: &BlockContext, tx: &StdTx) -> Result<AnteOutcome, AnteError> {
        // 1. Required signers and signature count.
        let signers = tx.required_signers();
        if tx.signatures.len() != signers.len() {
            return Err(AnteError::Unauthorized(format!(
                "expected {} signature(s), got {}",
                signers.len(),
                tx.signatures.len()
            )));
        }

        // 2. Memo cap, then size and memo gas.
        gas::check_memo(&tx.memo)?;
        let mut meter = GasMeter::new(tx.fee.gas);
        meter.consume(gas::tx_size_cost(tx), "transaction size")?;
        meter.consume(gas::memo_cost(&tx.memo), "memo")?;

        // 3. Resolve and authenticate each signer, left to right; the loop
        // stops at the first signer without an account record.
        for (i, address) in signers.iter().enumerate() {
            let account = self
                .store
                .account(address)?
                .ok_or(AnteError::UnknownAddress(*address))?;
            let account =
                self.authenticate_signer(ctx, tx, account, &tx.signatures[i], &mut meter)?;
            self.store.put_account(account)?;
        }

        // 4. Fee computation; the first required signer pays.
        let fee = calculate_tx_fee(&self.registry, tx);
        if !fee.amount.is_zero() {
            self.charge_fee(&signers[0], &fee.amount)?;
            self.credit_recipients(&fee, ctx)?;
        }

        debug!(
            chain_id = %ctx.chain_id,
            height = ctx.height,
            signers = signers.len(),
            gas_used = meter.consumed(),
            fee = %fee.amount,
            "transaction passed ante validation"
        );

        Ok(AnteOutcome {
            gas_used: meter.consumed(),
            gas_limit: meter.limit(),
            fee_charged: fee.amount,
            fee_policy: fee.policy,
        })
    }
}

/// Resolve the key to verify a signer position against.
///
/// - Stored key present: an embedded key must equal it; the stored key wins.
/// - No stored key: the signature must embed a key, and that key must derive
///   the signer's address.
fn resolve_pub_key(account: &Account, signature: &StdSignature) -> Result<PublicKey, AnteError> {
    match (&account.pub_key, &signature.pub_key) {
        (Some(stored), Some(embedded)) if stored != embedded => {
            Err(AnteError::InvalidPubKey(format!(
                "embedded key does not match the key bound to {}",
                hex::encode(account.address)
            )))
        }
        (Some(stored), _) => Ok(*stored),
        (None, Some(embedded)) => {
            if embedded.address() != account.address {
                return Err(AnteError::InvalidPubKey(format!(
                    "embedded key does not belong to signer {}",
                    hex::encode(account.address)
                )));
            }
            Ok(*embedded)
        }
        (None, None) => Err(AnteError::InvalidPubKey(format!(
            "no key bound to {} and none embedded in the signature",
            hex::encode(account.address)
        ))),
    }
}

// =============================================================================
// TESTS
// =============================================================================
