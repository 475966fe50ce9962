use serde::{Deserialize, Serialize};

use bahikhata_accounts::Account;
use bahikhata_core::{AccountId, format_rupees};
use bahikhata_orders::OrderType;

/// A proposed payment: amount in whole rupees drawn from one account.
///
/// Transient input to validation; never persisted by this slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: i64,
    pub account_id: AccountId,
}

/// Structured record of one account that cannot cover its requested amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortfallRecord {
    pub account_id: AccountId,
    pub account_name: String,
    /// Amount the payment asks for.
    pub required: i64,
    /// Balance the account actually holds.
    pub available: i64,
    /// `required - available`, always positive.
    pub shortfall: i64,
}

/// Aggregate outcome of a balance validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceCheck {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub insufficient_accounts: Vec<ShortfallRecord>,
}

impl BalanceCheck {
    /// A passing result with nothing to report.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            insufficient_accounts: Vec::new(),
        }
    }
}

/// Check every proposed payment against the account directory.
///
/// Only BUY orders are balance-checked: money leaves our accounts on a
/// purchase. SELL and MISC orders report valid unconditionally. Unknown
/// account ids and insufficient balances are reported as data; this function
/// never fails.
pub fn validate_account_balances(
    payments: &[PaymentRequest],
    accounts: &[Account],
    order_type: OrderType,
) -> BalanceCheck {
    if order_type != OrderType::Buy {
        return BalanceCheck::valid();
    }

    let mut check = BalanceCheck::valid();
    for payment in payments {
        let Some(account) = accounts.iter().find(|a| a.id == payment.account_id) else {
            check.is_valid = false;
            check.errors.push("account not found".to_string());
            continue;
        };

        if account.balance < payment.amount {
            let shortfall = payment.amount - account.balance;
            check.is_valid = false;
            check.errors.push(format!(
                "{} has insufficient balance: needs Rs. {}, available Rs. {} (short by Rs. {})",
                account.name,
                format_rupees(payment.amount),
                format_rupees(account.balance),
                format_rupees(shortfall),
            ));
            check.insufficient_accounts.push(ShortfallRecord {
                account_id: account.id,
                account_name: account.name.clone(),
                required: payment.amount,
                available: account.balance,
                shortfall,
            });
        }
    }
    check
}

/// Sum of all payment amounts targeting one account.
///
/// The same account may take several line payments within one order.
pub fn account_total_required(payments: &[PaymentRequest], account_id: AccountId) -> i64 {
    payments
        .iter()
        .filter(|p| p.account_id == account_id)
        .fold(0i64, |acc, p| acc.saturating_add(p.amount))
}

/// Quick gate: can `account` cover `amount`?
pub fn can_account_afford(account: &Account, amount: i64) -> bool {
    account.can_cover(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bahikhata_accounts::AccountKind;
    use proptest::prelude::*;

    fn account(name: &str, balance: i64) -> Account {
        Account::new(AccountId::new(), name, AccountKind::Bank, balance)
    }

    #[test]
    fn non_buy_orders_are_never_checked() {
        let accounts = vec![account("Main", 0)];
        let payments = vec![PaymentRequest {
            amount: 1_000_000,
            account_id: accounts[0].id,
        }];

        for order_type in [OrderType::Sell, OrderType::Misc] {
            let check = validate_account_balances(&payments, &accounts, order_type);
            assert!(check.is_valid);
            assert!(check.errors.is_empty());
            assert!(check.insufficient_accounts.is_empty());
        }
    }

    #[test]
    fn covered_buy_payment_passes() {
        let accounts = vec![account("Main", 5_000)];
        let payments = vec![PaymentRequest {
            amount: 5_000,
            account_id: accounts[0].id,
        }];
        let check = validate_account_balances(&payments, &accounts, OrderType::Buy);
        assert!(check.is_valid);
        assert!(check.errors.is_empty());
    }

    #[test]
    fn shortfall_is_required_minus_available() {
        let accounts = vec![account("Siddhartha Bank", 1_200)];
        let payments = vec![PaymentRequest {
            amount: 2_000,
            account_id: accounts[0].id,
        }];

        let check = validate_account_balances(&payments, &accounts, OrderType::Buy);
        assert!(!check.is_valid);
        assert_eq!(check.insufficient_accounts.len(), 1);

        let record = &check.insufficient_accounts[0];
        assert_eq!(record.account_id, accounts[0].id);
        assert_eq!(record.account_name, "Siddhartha Bank");
        assert_eq!(record.required, 2_000);
        assert_eq!(record.available, 1_200);
        assert_eq!(record.shortfall, 800);

        assert_eq!(check.errors.len(), 1);
        assert!(check.errors[0].contains("Siddhartha Bank"));
        assert!(check.errors[0].contains("800"));
    }

    #[test]
    fn unknown_account_reports_error_without_panicking() {
        let accounts = vec![account("Main", 10_000)];
        let payments = vec![PaymentRequest {
            amount: 50,
            account_id: AccountId::new(),
        }];

        let check = validate_account_balances(&payments, &accounts, OrderType::Buy);
        assert!(!check.is_valid);
        assert_eq!(check.errors, vec!["account not found".to_string()]);
        assert!(check.insufficient_accounts.is_empty());
    }

    #[test]
    fn overdrawn_account_shortfall_includes_the_negative_balance() {
        let accounts = vec![account("OD", -500)];
        let payments = vec![PaymentRequest {
            amount: 100,
            account_id: accounts[0].id,
        }];

        let check = validate_account_balances(&payments, &accounts, OrderType::Buy);
        assert_eq!(check.insufficient_accounts[0].shortfall, 600);
    }

    #[test]
    fn total_required_sums_only_matching_payments() {
        let a = AccountId::new();
        let b = AccountId::new();
        let payments = vec![
            PaymentRequest { amount: 10, account_id: a },
            PaymentRequest { amount: 5, account_id: b },
            PaymentRequest { amount: 7, account_id: a },
        ];
        assert_eq!(account_total_required(&payments, a), 17);
        assert_eq!(account_total_required(&payments, b), 5);
        assert_eq!(account_total_required(&payments, AccountId::new()), 0);
    }

    #[test]
    fn afford_gate_matches_balance_comparison() {
        let acc = account("Till", 300);
        assert!(can_account_afford(&acc, 300));
        assert!(!can_account_afford(&acc, 301));
    }

    proptest! {
        /// Property: every reported shortfall record is positive and equals
        /// required - available, and the validity flag agrees with the error
        /// lists.
        #[test]
        fn shortfall_records_are_internally_consistent(
            balances in prop::collection::vec(-10_000i64..10_000, 1..8),
            amounts in prop::collection::vec(0i64..10_000, 1..8),
        ) {
            let accounts: Vec<Account> = balances
                .iter()
                .enumerate()
                .map(|(i, b)| account(&format!("A{i}"), *b))
                .collect();
            let payments: Vec<PaymentRequest> = amounts
                .iter()
                .enumerate()
                .map(|(i, amount)| PaymentRequest {
                    amount: *amount,
                    account_id: accounts[i % accounts.len()].id,
                })
                .collect();

            let check = validate_account_balances(&payments, &accounts, OrderType::Buy);
            for record in &check.insufficient_accounts {
                prop_assert!(record.shortfall > 0);
                prop_assert_eq!(record.shortfall, record.required - record.available);
            }
            prop_assert_eq!(check.is_valid, check.errors.is_empty());
            prop_assert!(check.insufficient_accounts.len() <= check.errors.len());
        }
    }
}
