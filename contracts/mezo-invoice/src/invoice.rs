//! Invoice lifecycle: creation checks and the `Created -> Paid` transition.
//!
//! Everything here is pure over an [`Invoice`] value and the current ledger
//! timestamp. Storage, token calls and events are the contract's business.

use soroban_sdk::{Address, Env, String};

use crate::error::InvoiceError;
use crate::types::{Invoice, InvoiceStatus};

/// All-zero ed25519 account id, the Stellar counterpart of the zero address.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn null_account(env: &Env) -> Address {
    Address::from_str(env, NULL_ACCOUNT)
}

pub fn is_null_account(env: &Env, address: &Address) -> bool {
    *address == null_account(env)
}

impl Invoice {
    /// Validates the creation parameters and builds an unpaid invoice.
    ///
    /// Checks run in a fixed order: recipient, amount, due date.
    pub fn create(
        env: &Env,
        id: u64,
        recipient: Address,
        amount: i128,
        due_date: u64,
        metadata: String,
    ) -> Result<Invoice, InvoiceError> {
        if is_null_account(env, &recipient) {
            return Err(InvoiceError::InvalidRecipient);
        }

        if amount <= 0 {
            return Err(InvoiceError::InvalidAmount);
        }

        if due_date <= env.ledger().timestamp() {
            return Err(InvoiceError::InvalidDueDate);
        }

        Ok(Invoice {
            id,
            recipient,
            amount,
            due_date,
            metadata,
            is_paid: false,
            payer: None,
        })
    }

    pub fn status(&self) -> InvoiceStatus {
        if self.is_paid {
            InvoiceStatus::Paid
        } else {
            InvoiceStatus::Created
        }
    }

    /// An unpaid invoice past its due date. Not a stored state: such an
    /// invoice stays `Created` and can never be paid.
    pub fn is_expired(&self, now: u64) -> bool {
        !self.is_paid && now > self.due_date
    }

    /// State guards for payment, evaluated before any funds move.
    pub fn ensure_payable(&self, now: u64) -> Result<(), InvoiceError> {
        if self.is_paid {
            return Err(InvoiceError::AlreadyPaid);
        }

        if now > self.due_date {
            return Err(InvoiceError::Expired);
        }

        Ok(())
    }

    /// Marks the invoice paid by `payer`. Must only be called after the
    /// transfer went through.
    pub fn settle(&mut self, payer: Address) -> Result<(), InvoiceError> {
        if self.is_paid {
            return Err(InvoiceError::AlreadyPaid);
        }
        self.is_paid = true;
        self.payer = Some(payer);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::{Address as _, Ledger};

    const NOW: u64 = 1_700_000_000;

    fn env_at(now: u64) -> Env {
        let env = Env::default();
        env.ledger().set_timestamp(now);
        env
    }

    fn unpaid(env: &Env) -> Invoice {
        Invoice::create(
            env,
            1,
            Address::generate(env),
            100,
            NOW + 60,
            String::from_str(env, "ipfs://x"),
        )
        .unwrap()
    }

    #[test]
    fn create_starts_unpaid() {
        let env = env_at(NOW);
        let invoice = unpaid(&env);
        assert!(!invoice.is_paid);
        assert_eq!(invoice.payer, None);
        assert_eq!(invoice.status(), InvoiceStatus::Created);
    }

    #[test]
    fn create_checks_recipient_before_amount() {
        let env = env_at(NOW);
        let res = Invoice::create(
            &env,
            1,
            null_account(&env),
            0,
            NOW,
            String::from_str(&env, ""),
        );
        assert_eq!(res, Err(InvoiceError::InvalidRecipient));
    }

    #[test]
    fn create_rejects_due_date_equal_to_now() {
        let env = env_at(NOW);
        let res = Invoice::create(
            &env,
            1,
            Address::generate(&env),
            1,
            NOW,
            String::from_str(&env, ""),
        );
        assert_eq!(res, Err(InvoiceError::InvalidDueDate));
    }

    #[test]
    fn negative_amount_is_invalid() {
        let env = env_at(NOW);
        let res = Invoice::create(
            &env,
            1,
            Address::generate(&env),
            -5,
            NOW + 1,
            String::from_str(&env, ""),
        );
        assert_eq!(res, Err(InvoiceError::InvalidAmount));
    }

    #[test]
    fn payable_up_to_and_including_due_date() {
        let env = env_at(NOW);
        let invoice = unpaid(&env);
        assert_eq!(invoice.ensure_payable(NOW + 60), Ok(()));
        assert_eq!(invoice.ensure_payable(NOW + 61), Err(InvoiceError::Expired));
        assert!(invoice.is_expired(NOW + 61));
        assert!(!invoice.is_expired(NOW + 60));
    }

    #[test]
    fn settle_is_one_way() {
        let env = env_at(NOW);
        let mut invoice = unpaid(&env);
        let payer = Address::generate(&env);

        invoice.settle(payer.clone()).unwrap();
        assert_eq!(invoice.status(), InvoiceStatus::Paid);
        assert_eq!(invoice.payer, Some(payer.clone()));

        // * Paid wins over expired
        assert_eq!(invoice.ensure_payable(NOW + 1_000), Err(InvoiceError::AlreadyPaid));
        assert!(!invoice.is_expired(NOW + 1_000));
        assert_eq!(
            invoice.settle(Address::generate(&env)),
            Err(InvoiceError::AlreadyPaid)
        );
        assert_eq!(invoice.payer, Some(payer));
    }

    #[test]
    fn null_account_is_recognised() {
        let env = Env::default();
        assert!(is_null_account(&env, &null_account(&env)));
        assert!(!is_null_account(&env, &Address::generate(&env)));
    }
}
