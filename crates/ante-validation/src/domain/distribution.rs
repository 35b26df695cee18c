//! # Fee Distribution
//!
//! Deterministic split of a collected fee among block participants, computed
//! without floating point. The full amount is always conserved: integer
//! division remainders go to the proposer on top of their even share.

use shared_types::{Address, BlockContext, Coin, Coins};

use super::fees::FeePolicy;

/// Plan the credits for a collected fee under the given policy.
///
/// - `ProposerOnly`: the entire fee, unmodified, goes to the proposer.
/// - `AllValidators`: each asset amount is divided by the number of
///   validators that signed this block; every signing validator receives the
///   even share and the proposer additionally receives the remainder.
///   Validators that did not sign are excluded. With no signing validators
///   the whole fee goes to the proposer.
///
/// Returns `(address, amount)` credit pairs in validator-set order; the
/// credits sum to exactly the input fee.
pub fn plan_distribution(
    fee: &Coins,
    policy: FeePolicy,
    ctx: &BlockContext,
) -> Vec<(Address, Coins)> {
    if fee.is_zero() {
        return Vec::new();
    }

    let proposer = ctx.proposer.address;
    match policy {
        FeePolicy::ProposerOnly => vec![(proposer, fee.clone())],
        FeePolicy::AllValidators => {
            let signed: Vec<Address> = ctx.signed_validators().map(|v| v.address).collect();
            if signed.is_empty() {
                return vec![(proposer, fee.clone())];
            }

            let mut recipients: Vec<Address> = signed.clone();
            if !recipients.contains(&proposer) {
                recipients.push(proposer);
            }

            let count = signed.len() as u64;
            let mut credits: Vec<(Address, Coins)> = recipients
                .iter()
                .map(|address| (*address, Coins::empty()))
                .collect();

            for coin in fee.iter() {
                let share = coin.amount / count;
                let remainder = coin.amount % count;

                for (address, coins) in credits.iter_mut() {
                    let mut amount = if signed.contains(address) { share } else { 0 };
                    if *address == proposer {
                        amount += remainder;
                    }
                    *coins = coins.plus(&Coins::new(vec![Coin::new(coin.denom.clone(), amount)]));
                }
            }

            credits.retain(|(_, coins)| !coins.is_zero());
            credits
        }
    }
}
