//! # Fee Calculation and Distribution Flows
//!
//! End-to-end runs exercising the calculator registry and the validator
//! payout plan: declared-fee fallback, free and fixed calculators,
//! proposer-only versus all-validator distribution, and remainder handling.

#[cfg(test)]
mod tests {
    use ante_validation::{
        fixed_fee_calculator, free_fee_calculator, AnteError, AnteHandlerApi, FeePolicy,
    };
    use shared_crypto::KeyPair;
    use shared_types::{Address, Coin, Coins};

    use crate::support::{block_ctx, default_fee, sign_tx, solo_ctx, PingMsg, TestEnv, TransferMsg};

    const PROPOSER: Address = [0x11; 20];
    const VAL_B: Address = [0x22; 20];
    const VAL_C: Address = [0x33; 20];
    const VAL_D: Address = [0x44; 20];

    fn transfer(key: &KeyPair) -> std::sync::Arc<dyn shared_types::Msg> {
        TransferMsg::new(key.address(), [0xBB; 20], Coin::new("atom", 25))
    }

    /// With no calculator registered, the declared fee is charged in full and
    /// goes to the proposer.
    #[test]
    fn test_declared_fee_fallback_pays_proposer() {
        let env = TestEnv::new();
        let key = KeyPair::generate_ed25519();
        env.seed_signer(&key, Coins::one("atom", 500));
        let ctx = solo_ctx(PROPOSER);

        let tx = sign_tx(&ctx, vec![transfer(&key)], &[(&key, 0, 0)], default_fee(), "");
        let outcome = env.service.validate(&ctx, &tx).unwrap();

        assert_eq!(outcome.fee_charged.amount_of("atom"), 150);
        assert_eq!(outcome.fee_policy, FeePolicy::ProposerOnly);
        assert_eq!(env.balance(&key.address(), "atom"), 350);
        assert_eq!(env.balance(&PROPOSER, "atom"), 150);
    }

    /// A free calculator charges nothing and credits no one.
    #[test]
    fn test_free_calculator_charges_nothing() {
        let env = TestEnv::new();
        env.registry.register("transfer", free_fee_calculator());
        let key = KeyPair::generate_ed25519();
        env.seed_signer(&key, Coins::one("atom", 500));
        let ctx = solo_ctx(PROPOSER);

        let tx = sign_tx(&ctx, vec![transfer(&key)], &[(&key, 0, 0)], default_fee(), "");
        let outcome = env.service.validate(&ctx, &tx).unwrap();

        assert!(outcome.fee_charged.is_zero());
        assert_eq!(env.balance(&key.address(), "atom"), 500);
        // No proposer account was ever created.
        assert_eq!(env.balance(&PROPOSER, "atom"), 0);
    }

    /// A fixed proposer-only calculator overrides the declared amount.
    #[test]
    fn test_fixed_fee_overrides_declared_amount() {
        let env = TestEnv::new();
        env.registry.register(
            "transfer",
            fixed_fee_calculator(Coin::new("atom", 10), FeePolicy::ProposerOnly),
        );
        let key = KeyPair::generate_ed25519();
        env.seed_signer(&key, Coins::one("atom", 500));
        let ctx = solo_ctx(PROPOSER);

        // Declared 150, calculator says 10.
        let tx = sign_tx(&ctx, vec![transfer(&key)], &[(&key, 0, 0)], default_fee(), "");
        let outcome = env.service.validate(&ctx, &tx).unwrap();

        assert_eq!(outcome.fee_charged.amount_of("atom"), 10);
        assert_eq!(env.balance(&key.address(), "atom"), 490);
        assert_eq!(env.balance(&PROPOSER, "atom"), 10);
    }

    /// An evenly divisible all-validator fee splits equally among signed
    /// validators with nothing left for the proposer bonus.
    #[test]
    fn test_all_validator_fee_splits_evenly() {
        let env = TestEnv::new();
        env.registry.register(
            "transfer",
            fixed_fee_calculator(Coin::new("atom", 20), FeePolicy::AllValidators),
        );
        let key = KeyPair::generate_ed25519();
        env.seed_signer(&key, Coins::one("atom", 500));
        let ctx = block_ctx(
            PROPOSER,
            &[(PROPOSER, true), (VAL_B, true), (VAL_C, true), (VAL_D, true)],
        );

        let tx = sign_tx(&ctx, vec![transfer(&key)], &[(&key, 0, 0)], default_fee(), "");
        let outcome = env.service.validate(&ctx, &tx).unwrap();

        assert_eq!(outcome.fee_policy, FeePolicy::AllValidators);
        assert_eq!(env.balance(&key.address(), "atom"), 480);
        for validator in [PROPOSER, VAL_B, VAL_C, VAL_D] {
            assert_eq!(env.balance(&validator, "atom"), 5);
        }
    }

    /// Integer division leaves a remainder; the proposer collects it on top
    /// of its own share.
    #[test]
    fn test_division_remainder_goes_to_proposer() {
        let env = TestEnv::new();
        env.registry.register(
            "transfer",
            fixed_fee_calculator(Coin::new("atom", 30), FeePolicy::AllValidators),
        );
        let key = KeyPair::generate_ed25519();
        env.seed_signer(&key, Coins::one("atom", 500));
        let ctx = block_ctx(
            PROPOSER,
            &[(PROPOSER, true), (VAL_B, true), (VAL_C, true), (VAL_D, true)],
        );

        let tx = sign_tx(&ctx, vec![transfer(&key)], &[(&key, 0, 0)], default_fee(), "");
        env.service.validate(&ctx, &tx).unwrap();

        // 30 / 4 = 7 each, remainder 2 to the proposer.
        assert_eq!(env.balance(&PROPOSER, "atom"), 9);
        assert_eq!(env.balance(&VAL_B, "atom"), 7);
        assert_eq!(env.balance(&VAL_C, "atom"), 7);
        assert_eq!(env.balance(&VAL_D, "atom"), 7);
    }

    /// Validators that did not sign the block are excluded from the split.
    #[test]
    fn test_absent_validators_receive_nothing() {
        let env = TestEnv::new();
        env.registry.register(
            "transfer",
            fixed_fee_calculator(Coin::new("atom", 30), FeePolicy::AllValidators),
        );
        let key = KeyPair::generate_ed25519();
        env.seed_signer(&key, Coins::one("atom", 500));
        let ctx = block_ctx(
            PROPOSER,
            &[(PROPOSER, true), (VAL_B, true), (VAL_C, false), (VAL_D, true)],
        );

        let tx = sign_tx(&ctx, vec![transfer(&key)], &[(&key, 0, 0)], default_fee(), "");
        env.service.validate(&ctx, &tx).unwrap();

        // 30 / 3 = 10 each among the signers; VAL_C sat out.
        assert_eq!(env.balance(&PROPOSER, "atom"), 10);
        assert_eq!(env.balance(&VAL_B, "atom"), 10);
        assert_eq!(env.balance(&VAL_C, "atom"), 0);
        assert_eq!(env.balance(&VAL_D, "atom"), 10);
    }

    /// Messages without a calculator contribute zero once any message in the
    /// transaction is covered; the declared fee is not charged on top.
    #[test]
    fn test_partial_coverage_charges_only_covered_messages() {
        let env = TestEnv::new();
        env.registry.register(
            "transfer",
            fixed_fee_calculator(Coin::new("atom", 10), FeePolicy::ProposerOnly),
        );
        let key = KeyPair::generate_ed25519();
        env.seed_signer(&key, Coins::one("atom", 500));
        let ctx = solo_ctx(PROPOSER);

        let msgs = vec![transfer(&key), PingMsg::new(key.address())];
        let tx = sign_tx(&ctx, msgs, &[(&key, 0, 0)], default_fee(), "");
        let outcome = env.service.validate(&ctx, &tx).unwrap();

        assert_eq!(outcome.fee_charged.amount_of("atom"), 10);
        assert_eq!(env.balance(&key.address(), "atom"), 490);
    }

    /// Per-message fixed fees accumulate across the transaction.
    #[test]
    fn test_fees_accumulate_per_message() {
        let env = TestEnv::new();
        env.registry.register(
            "transfer",
            fixed_fee_calculator(Coin::new("atom", 10), FeePolicy::ProposerOnly),
        );
        let key = KeyPair::generate_ed25519();
        env.seed_signer(&key, Coins::one("atom", 500));
        let ctx = solo_ctx(PROPOSER);

        let msgs = vec![transfer(&key), transfer(&key), transfer(&key)];
        let tx = sign_tx(&ctx, msgs, &[(&key, 0, 0)], default_fee(), "");
        let outcome = env.service.validate(&ctx, &tx).unwrap();

        assert_eq!(outcome.fee_charged.amount_of("atom"), 30);
        assert_eq!(env.balance(&PROPOSER, "atom"), 30);
    }

    /// The first required signer is the payer in a multi-signer transaction.
    #[test]
    fn test_first_signer_pays() {
        let env = TestEnv::new();
        let key1 = KeyPair::generate_ed25519();
        let key2 = KeyPair::generate_ed25519();
        env.seed_signer(&key1, Coins::one("atom", 500));
        env.seed_signer(&key2, Coins::one("atom", 500));
        let ctx = solo_ctx(PROPOSER);

        let msgs = vec![transfer(&key1), transfer(&key2)];
        let tx = sign_tx(&ctx, msgs, &[(&key1, 0, 0), (&key2, 1, 0)], default_fee(), "");
        env.service.validate(&ctx, &tx).unwrap();

        assert_eq!(env.balance(&key1.address(), "atom"), 350);
        assert_eq!(env.balance(&key2.address(), "atom"), 500);
    }

    /// Every debited coin lands with some validator.
    #[test]
    fn test_distribution_conserves_the_fee() {
        let env = TestEnv::new();
        env.registry.register(
            "transfer",
            fixed_fee_calculator(Coin::new("atom", 97), FeePolicy::AllValidators),
        );
        let key = KeyPair::generate_ed25519();
        env.seed_signer(&key, Coins::one("atom", 500));
        let ctx = block_ctx(PROPOSER, &[(PROPOSER, true), (VAL_B, true), (VAL_C, true)]);

        let tx = sign_tx(&ctx, vec![transfer(&key)], &[(&key, 0, 0)], default_fee(), "");
        env.service.validate(&ctx, &tx).unwrap();

        let debited = 500 - env.balance(&key.address(), "atom");
        let credited: u64 = [PROPOSER, VAL_B, VAL_C, VAL_D]
            .iter()
            .map(|v| env.balance(v, "atom"))
            .sum();
        assert_eq!(debited, 97);
        assert_eq!(credited, 97);
    }

    /// The payer must cover the calculated fee, not the declared one.
    #[test]
    fn test_insufficient_funds_for_calculated_fee() {
        let env = TestEnv::new();
        env.registry.register(
            "transfer",
            fixed_fee_calculator(Coin::new("atom", 300), FeePolicy::ProposerOnly),
        );
        let key = KeyPair::generate_ed25519();
        env.seed_signer(&key, Coins::one("atom", 200));
        let ctx = solo_ctx(PROPOSER);

        let tx = sign_tx(&ctx, vec![transfer(&key)], &[(&key, 0, 0)], default_fee(), "");

        assert_eq!(
            env.service.validate(&ctx, &tx),
            Err(AnteError::InsufficientFunds {
                denom: "atom".into(),
                required: 300,
                available: 200,
            })
        );
    }

    /// A validator paid in an earlier block keeps accumulating across
    /// transactions.
    #[test]
    fn test_validator_balances_accumulate() {
        let env = TestEnv::new();
        let key = KeyPair::generate_ed25519();
        env.seed_signer(&key, Coins::one("atom", 500));
        let ctx = solo_ctx(PROPOSER);

        for sequence in 0..2 {
            let tx = sign_tx(
                &ctx,
                vec![transfer(&key)],
                &[(&key, 0, sequence)],
                default_fee(),
                "",
            );
            env.service.validate(&ctx, &tx).unwrap();
        }

        assert_eq!(env.balance(&PROPOSER, "atom"), 300);
        assert_eq!(env.balance(&key.address(), "atom"), 200);
    }
}
