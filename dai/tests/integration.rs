//! Integration tests for the DAI token contract using cw-multi-test.

use cosmwasm_std::{Addr, Binary, CosmosMsg, Empty, Uint256, WasmMsg};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use dai::msg::{
    AllowanceResponse, BalanceResponse, ExecuteMsg, InstantiateMsg, QueryMsg, TokenInfoResponse,
    TotalSupplyResponse, WardResponse,
};

// ============================================================================
// Test Setup
// ============================================================================

fn contract_dai() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        dai::contract::execute,
        dai::contract::instantiate,
        dai::contract::query,
    );
    Box::new(contract)
}

struct Suite {
    app: App,
    dai: Addr,
    ward: Addr,
    user1: Addr,
    user2: Addr,
    user3: Addr,
}

impl Suite {
    fn balance(&self, account: &Addr) -> Uint256 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.dai,
                &QueryMsg::BalanceOf {
                    account: account.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    fn total_supply(&self) -> Uint256 {
        let res: TotalSupplyResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.dai, &QueryMsg::TotalSupply {})
            .unwrap();
        res.total_supply
    }

    fn allowance(&self, owner: &Addr, spender: &Addr) -> Uint256 {
        let res: AllowanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                &self.dai,
                &QueryMsg::Allowance {
                    owner: owner.to_string(),
                    spender: spender.to_string(),
                },
            )
            .unwrap();
        res.allowance
    }

    fn exec(&mut self, sender: &Addr, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.dai.clone(), msg, &[])
    }

    /// user1 and user2 hold the whole supply, user3 holds nothing
    fn check_balances(&self, user1: u128, user2: u128) {
        assert_eq!(self.balance(&self.user1), Uint256::from(user1));
        assert_eq!(self.balance(&self.user2), Uint256::from(user2));
        assert_eq!(self.balance(&self.user3), Uint256::zero());
        assert_eq!(self.total_supply(), Uint256::from(user1 + user2));
    }
}

fn setup() -> Suite {
    let mut app = App::default();

    let ward = Addr::unchecked("terra1ward");
    let user1 = Addr::unchecked("terra1user1");
    let user2 = Addr::unchecked("terra1user2");
    let user3 = Addr::unchecked("terra1user3");

    let code_id = app.store_code(contract_dai());
    let dai = app
        .instantiate_contract(
            code_id,
            ward.clone(),
            &InstantiateMsg {
                ward: ward.to_string(),
            },
            &[],
            "dai",
            None,
        )
        .unwrap();

    let mut suite = Suite {
        app,
        dai,
        ward,
        user1,
        user2,
        user3,
    };

    // Initialize two users with 100 DAI
    for user in [suite.user1.clone(), suite.user2.clone()] {
        let ward = suite.ward.clone();
        suite
            .exec(
                &ward,
                &ExecuteMsg::Mint {
                    account: user.to_string(),
                    amount: Uint256::from(100u8),
                },
            )
            .unwrap();
    }

    suite
}

fn amount(value: u128) -> Uint256 {
    Uint256::from(value)
}

fn assert_error(res: anyhow::Result<AppResponse>, expected: &str) {
    let err = res.unwrap_err();
    let msg = err.root_cause().to_string();
    assert!(msg.contains(expected), "expected '{}', got '{}'", expected, msg);
}

// ============================================================================
// Reads & Metadata
// ============================================================================

#[test]
fn test_total_supply_and_balances() {
    let suite = setup();
    suite.check_balances(100, 100);
    assert_eq!(suite.total_supply(), amount(200));
}

#[test]
fn test_has_metadata() {
    let suite = setup();
    let info: TokenInfoResponse = suite
        .app
        .wrap()
        .query_wasm_smart(&suite.dai, &QueryMsg::TokenInfo {})
        .unwrap();

    assert_eq!(info.name, "Dai Stablecoin");
    assert_eq!(info.symbol, "DAI");
    assert_eq!(info.decimals, 18);
}

// ============================================================================
// Transfers
// ============================================================================

#[test]
fn test_transfer() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    let res = suite
        .exec(
            &user1,
            &ExecuteMsg::Transfer {
                recipient: user2.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    suite.check_balances(90, 110);

    let event = res
        .events
        .iter()
        .find(|e| e.ty == "wasm-Transfer")
        .expect("Transfer event");
    let attr = |key: &str| {
        event
            .attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.clone())
            .unwrap()
    };
    assert_eq!(attr("sender"), user1.to_string());
    assert_eq!(attr("recipient"), user2.to_string());
    assert_eq!(attr("value"), "10");
}

#[test]
fn test_transfer_to_yourself() {
    let mut suite = setup();
    let user1 = suite.user1.clone();

    suite
        .exec(
            &user1,
            &ExecuteMsg::Transfer {
                recipient: user1.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    suite.check_balances(100, 100);
}

#[test]
fn test_should_not_transfer_beyond_balance() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    let res = suite.exec(
        &user1,
        &ExecuteMsg::Transfer {
            recipient: user2.to_string(),
            amount: amount(101),
        },
    );
    assert_error(res, "dai/insufficient-balance");
    suite.check_balances(100, 100);
}

#[test]
fn test_amount_beyond_uint256_rejected_before_handler() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    // 2^256
    let msg = format!(
        r#"{{"transfer":{{"recipient":"{}","amount":"{}"}}}}"#,
        user2,
        "115792089237316195423570985008687907853269984665640564039457584007913129639936"
    );
    let res = suite.app.execute(
        user1,
        CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: suite.dai.to_string(),
            msg: Binary::from(msg.into_bytes()),
            funds: vec![],
        }),
    );
    assert_error(res, "Error parsing into type dai::msg::ExecuteMsg");
    suite.check_balances(100, 100);
}

#[test]
fn test_should_not_transfer_to_zero_or_dai_address() {
    let mut suite = setup();
    let user1 = suite.user1.clone();
    let dai = suite.dai.clone();

    for recipient in [String::new(), dai.to_string()] {
        let res = suite.exec(
            &user1,
            &ExecuteMsg::Transfer {
                recipient,
                amount: amount(10),
            },
        );
        assert_error(res, "dai/invalid-recipient");
    }

    suite.check_balances(100, 100);
}

#[test]
fn test_transfer_from() {
    let mut suite = setup();
    let (user1, user2, user3) = (suite.user1.clone(), suite.user2.clone(), suite.user3.clone());

    suite
        .exec(
            &user1,
            &ExecuteMsg::Approve {
                spender: user3.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();
    suite
        .exec(
            &user3,
            &ExecuteMsg::TransferFrom {
                sender: user1.to_string(),
                recipient: user2.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    suite.check_balances(90, 110);
    assert_eq!(suite.allowance(&user1, &user3), Uint256::zero());
}

#[test]
fn test_transfer_to_yourself_using_transfer_from() {
    let mut suite = setup();
    let user1 = suite.user1.clone();

    suite
        .exec(
            &user1,
            &ExecuteMsg::TransferFrom {
                sender: user1.to_string(),
                recipient: user1.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    suite.check_balances(100, 100);
}

#[test]
fn test_should_not_transfer_beyond_allowance() {
    let mut suite = setup();
    let (user1, user2, user3) = (suite.user1.clone(), suite.user2.clone(), suite.user3.clone());

    suite
        .exec(
            &user1,
            &ExecuteMsg::Approve {
                spender: user3.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    let res = suite.exec(
        &user3,
        &ExecuteMsg::TransferFrom {
            sender: user1.to_string(),
            recipient: user2.to_string(),
            amount: amount(11),
        },
    );
    assert_error(res, "dai/insufficient-allowance");
    suite.check_balances(100, 100);
    assert_eq!(suite.allowance(&user1, &user3), amount(10));
}

#[test]
fn test_transfer_from_checks_balance_after_allowance() {
    let mut suite = setup();
    let (user1, user2, user3) = (suite.user1.clone(), suite.user2.clone(), suite.user3.clone());

    suite
        .exec(
            &user1,
            &ExecuteMsg::Approve {
                spender: user3.to_string(),
                amount: amount(1_000),
            },
        )
        .unwrap();

    let res = suite.exec(
        &user3,
        &ExecuteMsg::TransferFrom {
            sender: user1.to_string(),
            recipient: user2.to_string(),
            amount: amount(101),
        },
    );
    assert_error(res, "dai/insufficient-balance");

    // The failed call left the allowance untouched
    assert_eq!(suite.allowance(&user1, &user3), amount(1_000));
    suite.check_balances(100, 100);
}

// ============================================================================
// Mint
// ============================================================================

#[test]
fn test_mint() {
    let mut suite = setup();
    let (ward, user1) = (suite.ward.clone(), suite.user1.clone());

    let res = suite
        .exec(
            &ward,
            &ExecuteMsg::Mint {
                account: user1.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    suite.check_balances(110, 100);

    let event = res
        .events
        .iter()
        .find(|e| e.ty == "wasm-Transfer")
        .expect("Transfer event");
    assert!(event
        .attributes
        .iter()
        .any(|a| a.key == "sender" && a.value == "0"));
}

#[test]
fn test_mint_requires_ward() {
    let mut suite = setup();
    let user1 = suite.user1.clone();

    let res = suite.exec(
        &user1,
        &ExecuteMsg::Mint {
            account: user1.to_string(),
            amount: amount(10),
        },
    );
    assert_error(res, "dai/not-authorized");
    suite.check_balances(100, 100);
}

#[test]
fn test_should_not_allow_minting_to_zero_or_dai_address() {
    let mut suite = setup();
    let ward = suite.ward.clone();
    let dai = suite.dai.clone();

    for account in [String::new(), dai.to_string()] {
        let res = suite.exec(
            &ward,
            &ExecuteMsg::Mint {
                account,
                amount: amount(10),
            },
        );
        assert_error(res, "dai/invalid-recipient");
    }

    suite.check_balances(100, 100);
}

#[test]
fn test_should_not_mint_beyond_max_supply() {
    let mut suite = setup();
    let (ward, user3) = (suite.ward.clone(), suite.user3.clone());

    // total supply is 200, so MAX - 199 overflows
    let res = suite.exec(
        &ward,
        &ExecuteMsg::Mint {
            account: user3.to_string(),
            amount: Uint256::MAX - amount(199),
        },
    );
    assert_error(res, "dai/uint256-overflow");
    suite.check_balances(100, 100);

    suite
        .exec(
            &ward,
            &ExecuteMsg::Mint {
                account: user3.to_string(),
                amount: Uint256::MAX - amount(200),
            },
        )
        .unwrap();
    assert_eq!(suite.total_supply(), Uint256::MAX);
}

// ============================================================================
// Burn
// ============================================================================

#[test]
fn test_burn() {
    let mut suite = setup();
    let user1 = suite.user1.clone();

    let res = suite
        .exec(
            &user1,
            &ExecuteMsg::Burn {
                account: user1.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    suite.check_balances(90, 100);

    let event = res
        .events
        .iter()
        .find(|e| e.ty == "wasm-Transfer")
        .expect("Transfer event");
    assert!(event
        .attributes
        .iter()
        .any(|a| a.key == "recipient" && a.value == "0"));
}

#[test]
fn test_should_not_burn_beyond_balance() {
    let mut suite = setup();
    let user1 = suite.user1.clone();

    let res = suite.exec(
        &user1,
        &ExecuteMsg::Burn {
            account: user1.to_string(),
            amount: amount(101),
        },
    );
    assert_error(res, "dai/insufficient-balance");
    suite.check_balances(100, 100);
}

#[test]
fn test_no_double_spend_after_burn() {
    let mut suite = setup();
    let user1 = suite.user1.clone();
    let burn = ExecuteMsg::Burn {
        account: user1.to_string(),
        amount: amount(60),
    };

    suite.exec(&user1, &burn).unwrap();
    assert_error(suite.exec(&user1, &burn), "dai/insufficient-balance");
    suite.check_balances(40, 100);
}

#[test]
fn test_should_not_burn_other() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    let res = suite.exec(
        &user2,
        &ExecuteMsg::Burn {
            account: user1.to_string(),
            amount: amount(10),
        },
    );
    assert_error(res, "dai/insufficient-allowance");
    suite.check_balances(100, 100);
}

#[test]
fn test_ward_cannot_burn_other_without_allowance() {
    let mut suite = setup();
    let (ward, user1) = (suite.ward.clone(), suite.user1.clone());

    let res = suite.exec(
        &ward,
        &ExecuteMsg::Burn {
            account: user1.to_string(),
            amount: amount(10),
        },
    );
    assert_error(res, "dai/insufficient-allowance");
    suite.check_balances(100, 100);
}

#[test]
fn test_burn_using_burn_and_allowance() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    suite
        .exec(
            &user1,
            &ExecuteMsg::Approve {
                spender: user2.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();
    suite
        .exec(
            &user2,
            &ExecuteMsg::Burn {
                account: user1.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    suite.check_balances(90, 100);
    assert_eq!(suite.allowance(&user1, &user2), Uint256::zero());
}

#[test]
fn test_should_not_burn_beyond_allowance() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    suite
        .exec(
            &user1,
            &ExecuteMsg::Approve {
                spender: user2.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    let res = suite.exec(
        &user2,
        &ExecuteMsg::Burn {
            account: user1.to_string(),
            amount: amount(11),
        },
    );
    assert_error(res, "dai/insufficient-allowance");
    suite.check_balances(100, 100);
}

// ============================================================================
// Allowances
// ============================================================================

#[test]
fn test_approve_overwrites() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    for value in [10u128, 3] {
        suite
            .exec(
                &user1,
                &ExecuteMsg::Approve {
                    spender: user2.to_string(),
                    amount: amount(value),
                },
            )
            .unwrap();
    }
    assert_eq!(suite.allowance(&user1, &user2), amount(3));
}

#[test]
fn test_approve_rejects_zero_spender() {
    let mut suite = setup();
    let user1 = suite.user1.clone();

    let res = suite.exec(
        &user1,
        &ExecuteMsg::Approve {
            spender: String::new(),
            amount: amount(10),
        },
    );
    assert_error(res, "dai/invalid-recipient");
}

#[test]
fn test_increase_allowance() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    suite
        .exec(
            &user1,
            &ExecuteMsg::Approve {
                spender: user2.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();
    suite
        .exec(
            &user1,
            &ExecuteMsg::IncreaseAllowance {
                spender: user2.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    assert_eq!(suite.allowance(&user1, &user2), amount(20));
}

#[test]
fn test_should_not_increase_allowance_beyond_max() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    suite
        .exec(
            &user1,
            &ExecuteMsg::Approve {
                spender: user2.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    let res = suite.exec(
        &user1,
        &ExecuteMsg::IncreaseAllowance {
            spender: user2.to_string(),
            amount: Uint256::MAX,
        },
    );
    assert_error(res, "dai/uint256-overflow");
    assert_eq!(suite.allowance(&user1, &user2), amount(10));
}

#[test]
fn test_decrease_allowance() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    suite
        .exec(
            &user1,
            &ExecuteMsg::Approve {
                spender: user2.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();
    suite
        .exec(
            &user1,
            &ExecuteMsg::DecreaseAllowance {
                spender: user2.to_string(),
                amount: amount(1),
            },
        )
        .unwrap();

    assert_eq!(suite.allowance(&user1, &user2), amount(9));
}

#[test]
fn test_should_not_decrease_allowance_beyond_allowance() {
    let mut suite = setup();
    let (user1, user2) = (suite.user1.clone(), suite.user2.clone());

    suite
        .exec(
            &user1,
            &ExecuteMsg::Approve {
                spender: user2.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    let res = suite.exec(
        &user1,
        &ExecuteMsg::DecreaseAllowance {
            spender: user2.to_string(),
            amount: amount(11),
        },
    );
    assert_error(res, "dai/insufficient-allowance");
}

// ============================================================================
// Unlimited Allowance
// ============================================================================

#[test]
fn test_does_not_decrease_allowance_using_transfer_from() {
    let mut suite = setup();
    let (user1, user2, user3) = (suite.user1.clone(), suite.user2.clone(), suite.user3.clone());

    suite
        .exec(
            &user1,
            &ExecuteMsg::Approve {
                spender: user3.to_string(),
                amount: Uint256::MAX,
            },
        )
        .unwrap();

    for _ in 0..3 {
        suite
            .exec(
                &user3,
                &ExecuteMsg::TransferFrom {
                    sender: user1.to_string(),
                    recipient: user2.to_string(),
                    amount: amount(10),
                },
            )
            .unwrap();
    }

    suite.check_balances(70, 130);
    assert_eq!(suite.allowance(&user1, &user3), Uint256::MAX);
}

#[test]
fn test_does_not_decrease_allowance_using_burn() {
    let mut suite = setup();
    let (user1, user3) = (suite.user1.clone(), suite.user3.clone());

    suite
        .exec(
            &user1,
            &ExecuteMsg::Approve {
                spender: user3.to_string(),
                amount: Uint256::MAX,
            },
        )
        .unwrap();
    suite
        .exec(
            &user3,
            &ExecuteMsg::Burn {
                account: user1.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    suite.check_balances(90, 100);
    assert_eq!(suite.allowance(&user1, &user3), Uint256::MAX);
}

#[test]
fn test_decreasing_unlimited_allowance_makes_it_finite() {
    let mut suite = setup();
    let (user1, user2, user3) = (suite.user1.clone(), suite.user2.clone(), suite.user3.clone());

    suite
        .exec(
            &user1,
            &ExecuteMsg::Approve {
                spender: user3.to_string(),
                amount: Uint256::MAX,
            },
        )
        .unwrap();
    suite
        .exec(
            &user1,
            &ExecuteMsg::DecreaseAllowance {
                spender: user3.to_string(),
                amount: amount(1),
            },
        )
        .unwrap();

    suite
        .exec(
            &user3,
            &ExecuteMsg::TransferFrom {
                sender: user1.to_string(),
                recipient: user2.to_string(),
                amount: amount(10),
            },
        )
        .unwrap();

    assert_eq!(
        suite.allowance(&user1, &user3),
        Uint256::MAX - amount(11)
    );
}

// ============================================================================
// Wards
// ============================================================================

#[test]
fn test_rely_and_deny() {
    let mut suite = setup();
    let (ward, user1, user2) = (suite.ward.clone(), suite.user1.clone(), suite.user2.clone());

    let is_ward = |suite: &Suite, user: &Addr| -> bool {
        let res: WardResponse = suite
            .app
            .wrap()
            .query_wasm_smart(
                &suite.dai,
                &QueryMsg::Wards {
                    user: user.to_string(),
                },
            )
            .unwrap();
        res.is_ward
    };

    assert!(is_ward(&suite, &ward));
    assert!(!is_ward(&suite, &user1));

    assert_error(
        suite.exec(
            &user1,
            &ExecuteMsg::Rely {
                usr: user1.to_string(),
            },
        ),
        "dai/not-authorized",
    );

    suite
        .exec(
            &ward,
            &ExecuteMsg::Rely {
                usr: user1.to_string(),
            },
        )
        .unwrap();
    assert!(is_ward(&suite, &user1));

    // New ward can mint and deny the old one
    suite
        .exec(
            &user1,
            &ExecuteMsg::Mint {
                account: user2.to_string(),
                amount: amount(5),
            },
        )
        .unwrap();
    suite
        .exec(
            &user1,
            &ExecuteMsg::Deny {
                usr: ward.to_string(),
            },
        )
        .unwrap();
    assert!(!is_ward(&suite, &ward));

    assert_error(
        suite.exec(
            &ward,
            &ExecuteMsg::Mint {
                account: user2.to_string(),
                amount: amount(5),
            },
        ),
        "dai/not-authorized",
    );
    suite.check_balances(100, 105);
}

// ============================================================================
// Conservation
// ============================================================================

#[test]
fn test_supply_matches_balances_after_mixed_operations() {
    let mut suite = setup();
    let (ward, user1, user2, user3) = (
        suite.ward.clone(),
        suite.user1.clone(),
        suite.user2.clone(),
        suite.user3.clone(),
    );

    suite
        .exec(
            &user1,
            &ExecuteMsg::Approve {
                spender: user3.to_string(),
                amount: amount(50),
            },
        )
        .unwrap();
    suite
        .exec(
            &user3,
            &ExecuteMsg::TransferFrom {
                sender: user1.to_string(),
                recipient: user3.to_string(),
                amount: amount(20),
            },
        )
        .unwrap();
    suite
        .exec(
            &user3,
            &ExecuteMsg::Burn {
                account: user1.to_string(),
                amount: amount(30),
            },
        )
        .unwrap();
    suite
        .exec(
            &ward,
            &ExecuteMsg::Mint {
                account: user2.to_string(),
                amount: amount(7),
            },
        )
        .unwrap();
    suite
        .exec(
            &user3,
            &ExecuteMsg::Burn {
                account: user3.to_string(),
                amount: amount(5),
            },
        )
        .unwrap();

    let sum = suite.balance(&user1) + suite.balance(&user2) + suite.balance(&user3);
    assert_eq!(suite.total_supply(), sum);
    assert_eq!(sum, amount(50 + 107 + 15));
}
