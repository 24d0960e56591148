use proptest::prelude::*;

use crucible_ledger::ForgeLedger;
use crucible_types::{AccountAddress, Timestamp, TokenId};

#[derive(Clone, Debug)]
enum Op {
    FreeMint { account: usize, id: u8 },
    ForgeMint { account: usize, id: u8, amount: u128 },
    ForgeBurn { account: usize, id: u8, amount: u128 },
    ForgeMintBatch { account: usize, pairs: Vec<(u8, u128)> },
    ForgeBurnBatch { account: usize, pairs: Vec<(u8, u128)> },
    AdvanceTime { secs: u64 },
}

const ACCOUNTS: usize = 4;

fn op_strategy() -> impl Strategy<Value = Op> {
    let pair = (0u8..7, 0u128..60);
    prop_oneof![
        (0usize..ACCOUNTS, 0u8..7).prop_map(|(account, id)| Op::FreeMint { account, id }),
        (0usize..ACCOUNTS, 0u8..7, 0u128..150)
            .prop_map(|(account, id, amount)| Op::ForgeMint { account, id, amount }),
        (0usize..ACCOUNTS, 0u8..7, 0u128..150)
            .prop_map(|(account, id, amount)| Op::ForgeBurn { account, id, amount }),
        (0usize..ACCOUNTS, prop::collection::vec(pair.clone(), 0..5))
            .prop_map(|(account, pairs)| Op::ForgeMintBatch { account, pairs }),
        (0usize..ACCOUNTS, prop::collection::vec(pair, 0..5))
            .prop_map(|(account, pairs)| Op::ForgeBurnBatch { account, pairs }),
        (0u64..120).prop_map(|secs| Op::AdvanceTime { secs }),
    ]
}

fn accounts() -> Vec<AccountAddress> {
    (0..ACCOUNTS)
        .map(|n| AccountAddress::new(format!("acct_{n}")))
        .collect()
}

fn wired_ledger(owner: &AccountAddress, forge: &AccountAddress) -> ForgeLedger {
    let mut ledger = ForgeLedger::new(owner.clone(), "ipfs://metadata/{id}.json");
    ledger
        .set_forging_contract(owner, Some(forge.clone()))
        .unwrap();
    ledger.drain_events();
    ledger
}

/// Full balance matrix over every account the test can touch.
fn snapshot(ledger: &ForgeLedger, accounts: &[AccountAddress]) -> Vec<u128> {
    accounts
        .iter()
        .flat_map(|a| TokenId::ALL.iter().map(move |&id| ledger.balance_of(a, id)))
        .collect()
}

proptest! {
    /// After every operation, per-id balance sums equal the recorded
    /// supply and the capped id never exceeds its limit. Failed operations
    /// leave the whole balance matrix untouched and emit nothing.
    #[test]
    fn conservation_cap_and_atomicity(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let owner = AccountAddress::new("owner");
        let forge = AccountAddress::new("forge");
        let accounts = accounts();
        let mut ledger = wired_ledger(&owner, &forge);
        let mut now = 0u64;

        for op in ops {
            let before = snapshot(&ledger, &accounts);
            let result = match &op {
                Op::FreeMint { account, id } => ledger.free_mint(
                    &accounts[*account],
                    TokenId::of(*id),
                    Timestamp::new(now),
                ),
                Op::ForgeMint { account, id, amount } => {
                    ledger.forge_mint(&forge, &accounts[*account], TokenId::of(*id), *amount)
                }
                Op::ForgeBurn { account, id, amount } => {
                    ledger.forge_burn(&forge, &accounts[*account], TokenId::of(*id), *amount)
                }
                Op::ForgeMintBatch { account, pairs } => {
                    let ids: Vec<TokenId> = pairs.iter().map(|(id, _)| TokenId::of(*id)).collect();
                    let amounts: Vec<u128> = pairs.iter().map(|(_, amount)| *amount).collect();
                    ledger.forge_mint_batch(&forge, &accounts[*account], &ids, &amounts)
                }
                Op::ForgeBurnBatch { account, pairs } => {
                    let ids: Vec<TokenId> = pairs.iter().map(|(id, _)| TokenId::of(*id)).collect();
                    let amounts: Vec<u128> = pairs.iter().map(|(_, amount)| *amount).collect();
                    ledger.forge_burn_batch(&forge, &accounts[*account], &ids, &amounts)
                }
                Op::AdvanceTime { secs } => {
                    now += secs;
                    Ok(())
                }
            };

            let events = ledger.drain_events();
            if result.is_err() {
                prop_assert_eq!(&snapshot(&ledger, &accounts), &before, "failed op mutated state: {:?}", op);
                prop_assert!(events.is_empty(), "failed op emitted events: {:?}", op);
            }

            for id in TokenId::ALL {
                let held: u128 = accounts.iter().map(|a| ledger.balance_of(a, id)).sum();
                prop_assert_eq!(held, ledger.total_supply(id), "conservation broken for id {}", id);
            }
            prop_assert!(ledger.total_supply(TokenId::of(6)) <= 100, "cap exceeded");
        }
    }

    /// Unauthorized callers can never move the privileged primitives,
    /// whatever the arguments.
    #[test]
    fn privileged_ops_reject_non_role_callers(
        caller in "[a-z]{1,12}",
        id in 0u8..7,
        amount in 0u128..1000,
    ) {
        let owner = AccountAddress::new("owner");
        let forge = AccountAddress::new("forge");
        let mut ledger = wired_ledger(&owner, &forge);
        let caller = AccountAddress::new(caller);
        prop_assume!(caller != forge);

        let target = AccountAddress::new("target");
        prop_assert!(ledger.forge_mint(&caller, &target, TokenId::of(id), amount).is_err());
        prop_assert!(ledger.forge_burn(&caller, &target, TokenId::of(id), amount).is_err());
        prop_assert_eq!(ledger.total_supply(TokenId::of(id)), 0);
    }
}
