//! Shared fixtures for the integration suite: concrete message types, a
//! signing helper that produces well-formed transactions, and builders for
//! block contexts and a wired-up pipeline.

use std::sync::Arc;

use ante_validation::{AccountStore, AnteService, FeeCalculatorRegistry, InMemoryAccountStore};
use serde_json::json;
use shared_crypto::KeyPair;
use shared_types::{
    std_sign_bytes, Account, Address, BlockContext, Coin, Coins, Msg, SigningValidator, StdFee,
    StdSignature, StdTx, Validator,
};

/// A token transfer between two addresses, signed by the sender.
pub struct TransferMsg {
    pub from: Address,
    pub to: Address,
    pub amount: Coin,
}

impl TransferMsg {
    pub fn new(from: Address, to: Address, amount: Coin) -> Arc<dyn Msg> {
        Arc::new(Self { from, to, amount })
    }
}

impl Msg for TransferMsg {
    fn kind(&self) -> &'static str {
        "transfer"
    }

    fn signers(&self) -> Vec<Address> {
        vec![self.from]
    }

    fn sign_doc(&self) -> serde_json::Value {
        json!({
            "from": hex::encode(self.from),
            "to": hex::encode(self.to),
            "amount": { "denom": self.amount.denom, "amount": self.amount.amount },
        })
    }
}

/// A payload-free message, used to exercise uncovered message kinds.
pub struct PingMsg {
    pub signer: Address,
}

impl PingMsg {
    pub fn new(signer: Address) -> Arc<dyn Msg> {
        Arc::new(Self { signer })
    }
}

impl Msg for PingMsg {
    fn kind(&self) -> &'static str {
        "ping"
    }

    fn signers(&self) -> Vec<Address> {
        vec![self.signer]
    }

    fn sign_doc(&self) -> serde_json::Value {
        json!({ "signer": hex::encode(self.signer) })
    }
}

/// A pipeline wired against the in-memory store, with a handle to its
/// fee-calculator registry.
pub struct TestEnv {
    pub registry: Arc<FeeCalculatorRegistry>,
    pub service: AnteService<InMemoryAccountStore>,
}

impl TestEnv {
    pub fn new() -> Self {
        let registry = Arc::new(FeeCalculatorRegistry::new());
        let service = AnteService::new(InMemoryAccountStore::new(), Arc::clone(&registry));
        Self { registry, service }
    }

    /// Create an account for `key`'s address and fund it with `coins`.
    pub fn seed_signer(&self, key: &KeyPair, coins: Coins) -> Account {
        let mut account = self.service.create_account(key.address()).unwrap();
        account.coins = coins;
        self.service.store().put_account(account.clone()).unwrap();
        account
    }

    /// Spendable balance of `denom` at `address`; zero for absent accounts.
    pub fn balance(&self, address: &Address, denom: &str) -> u64 {
        self.service
            .store()
            .account(address)
            .unwrap()
            .map(|a| a.coins.amount_of(denom))
            .unwrap_or(0)
    }

    /// Current sequence at `address`.
    pub fn sequence(&self, address: &Address) -> u64 {
        self.service.store().account(address).unwrap().unwrap().sequence
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// The default declared fee: a generous gas budget and 150 atom offered.
pub fn default_fee() -> StdFee {
    StdFee::new(5000, Coins::one("atom", 150))
}

/// A block context with `proposer` plus the given `(address, signed)` list as
/// the block's signing validators.
pub fn block_ctx(proposer: Address, validators: &[(Address, bool)]) -> BlockContext {
    BlockContext {
        chain_id: "tollgate-test".into(),
        height: 7,
        proposer: Validator {
            address: proposer,
            power: 100,
        },
        signing_validators: validators
            .iter()
            .map(|(address, signed)| SigningValidator {
                validator: Validator {
                    address: *address,
                    power: 100,
                },
                signed_block: *signed,
            })
            .collect(),
    }
}

/// A single-validator block context where the proposer signed its own block.
pub fn solo_ctx(proposer: Address) -> BlockContext {
    block_ctx(proposer, &[(proposer, true)])
}

/// Assemble a transaction with one well-formed signature per `(key,
/// account_number, sequence)` claim, each over the canonical sign-bytes for
/// that claim.
pub fn sign_tx(
    ctx: &BlockContext,
    msgs: Vec<Arc<dyn Msg>>,
    claims: &[(&KeyPair, u64, u64)],
    fee: StdFee,
    memo: &str,
) -> StdTx {
    let signatures = claims
        .iter()
        .map(|(key, account_number, sequence)| {
            let bytes = std_sign_bytes(
                &ctx.chain_id,
                *account_number,
                *sequence,
                &fee,
                &msgs,
                memo,
            );
            StdSignature {
                pub_key: Some(key.public_key()),
                signature: key.sign(&bytes),
                account_number: *account_number,
                sequence: *sequence,
            }
        })
        .collect();
    StdTx::new(msgs, fee, signatures, memo)
}
