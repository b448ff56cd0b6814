#![no_std]
//! # MezoInvoice
//!
//! Invoice ledger settled in MUSD. Anyone can issue an invoice to a
//! recipient; a payer settles it once, before its due date, by letting the
//! ledger pull `amount` MUSD from their account into the recipient's.
//!
//! | Module       | Responsibility                                   |
//! |--------------|--------------------------------------------------|
//! | `invoice.rs` | creation checks and the `Created -> Paid` guards |
//! | `storage.rs` | `DataKey`, load/save helpers, TTL policy         |
//! | `events.rs`  | event publishing                                 |
//! | `error.rs`   | `InvoiceError` codes and their classes           |
//! | `types.rs`   | `Invoice`, `InvoiceStatus`                       |
//!
//! The payer must `approve` this contract on the MUSD token for at least the
//! invoice amount before calling [`MezoInvoice::pay_invoice`].
use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String};

mod error;
mod events;
mod invoice;
mod storage;
mod types;

pub use error::{ErrorClass, InvoiceError};
pub use invoice::{null_account, NULL_ACCOUNT};
pub use types::{Invoice, InvoiceStatus};

use invoice::is_null_account;
use storage::{
    extend_instance, get_count, get_owner, get_token, init_count, load_invoice, next_id,
    save_invoice, set_owner, set_token,
};

#[contract]
pub struct MezoInvoice;

#[contractimpl]
impl MezoInvoice {
    pub fn __constructor(env: Env, owner: Address, token: Address) {
        if is_null_account(&env, &token) {
            panic_with_error!(&env, InvoiceError::InvalidTokenAddress);
        }
        set_owner(&env, &owner);
        set_token(&env, &token);
        init_count(&env);
        extend_instance(&env);
    }

    // * Issue an invoice. No authorisation: anyone may bill anyone.
    pub fn create_invoice(
        env: Env,
        recipient: Address,
        amount: i128,
        due_date: u64,
        metadata: String,
    ) -> Result<u64, InvoiceError> {
        extend_instance(&env);

        // * A rejected call rolls back the counter bump with everything else
        let id = next_id(&env);
        let invoice = Invoice::create(&env, id, recipient, amount, due_date, metadata)?;

        save_invoice(&env, &invoice);
        events::invoice_created(&env, id, &invoice.recipient, invoice.amount);

        Ok(id)
    }

    /// Settle invoice `invoice_id` from `payer`'s MUSD.
    ///
    /// Guards run in order: the invoice exists, is unpaid, is not past its due
    /// date, the payer holds `amount` and has approved this contract for it.
    /// Any failure, including the token transfer itself, aborts the whole
    /// invocation and the invoice stays unpaid.
    pub fn pay_invoice(env: Env, payer: Address, invoice_id: u64) -> Result<(), InvoiceError> {
        payer.require_auth();
        extend_instance(&env);

        let mut invoice = load_invoice(&env, invoice_id).map_err(|e| reject(&env, invoice_id, e))?;
        invoice
            .ensure_payable(env.ledger().timestamp())
            .map_err(|e| reject(&env, invoice_id, e))?;

        let token = TokenClient::new(&env, &get_token(&env));
        let ledger = env.current_contract_address();

        if token.balance(&payer) < invoice.amount {
            return Err(reject(&env, invoice_id, InvoiceError::InsufficientBalance));
        }
        if token.allowance(&payer, &ledger) < invoice.amount {
            return Err(reject(&env, invoice_id, InvoiceError::InsufficientAllowance));
        }

        // ! Pull MUSD from payer to recipient, with this contract as spender
        match token.try_transfer_from(&ledger, &payer, &invoice.recipient, &invoice.amount) {
            Ok(Ok(())) => {}
            _ => return Err(reject(&env, invoice_id, InvoiceError::TransferFailed)),
        }

        invoice.settle(payer.clone())?;
        save_invoice(&env, &invoice);
        events::invoice_paid(&env, invoice_id, &payer, invoice.amount);

        Ok(())
    }

    // * Get invoice details
    pub fn get_invoice(env: Env, invoice_id: u64) -> Result<Invoice, InvoiceError> {
        load_invoice(&env, invoice_id)
    }

    // * Verify payment status of an invoice
    pub fn is_paid(env: Env, invoice_id: u64) -> Result<bool, InvoiceError> {
        Ok(load_invoice(&env, invoice_id)?.is_paid)
    }

    pub fn status(env: Env, invoice_id: u64) -> Result<InvoiceStatus, InvoiceError> {
        Ok(load_invoice(&env, invoice_id)?.status())
    }

    /// True once an unpaid invoice is past its due date. It stays `Created`
    /// and can no longer be paid.
    pub fn is_expired(env: Env, invoice_id: u64) -> Result<bool, InvoiceError> {
        Ok(load_invoice(&env, invoice_id)?.is_expired(env.ledger().timestamp()))
    }

    pub fn invoice_count(env: Env) -> u64 {
        get_count(&env)
    }

    /// MUSD balance of `account`, as reported by the configured token.
    pub fn get_token_balance(env: Env, account: Address) -> i128 {
        TokenClient::new(&env, &get_token(&env)).balance(&account)
    }

    pub fn token_address(env: Env) -> Address {
        get_token(&env)
    }

    pub fn owner(env: Env) -> Address {
        get_owner(&env)
    }

    /// Point the ledger at a different MUSD contract. Owner only.
    ///
    /// Unpaid invoices are settled in whatever token is configured at payment
    /// time.
    pub fn update_token_address(
        env: Env,
        caller: Address,
        new_token: Address,
    ) -> Result<(), InvoiceError> {
        caller.require_auth();
        require_owner(&env, &caller)?;

        if is_null_account(&env, &new_token) {
            return Err(InvoiceError::InvalidTokenAddress);
        }

        set_token(&env, &new_token);
        extend_instance(&env);
        log!(&env, "token address updated", new_token);
        events::token_updated(&env, &new_token);
        Ok(())
    }

    /// Hand the owner role to `new_owner`. Both parties sign.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), InvoiceError> {
        caller.require_auth();
        require_owner(&env, &caller)?;
        new_owner.require_auth();

        set_owner(&env, &new_owner);
        extend_instance(&env);
        log!(&env, "ownership transferred", new_owner);
        events::owner_updated(&env, &new_owner);
        Ok(())
    }
}

fn require_owner(env: &Env, caller: &Address) -> Result<(), InvoiceError> {
    if *caller != get_owner(env) {
        return Err(InvoiceError::Unauthorized);
    }
    Ok(())
}

fn reject(env: &Env, invoice_id: u64, err: InvoiceError) -> InvoiceError {
    log!(env, "pay_invoice rejected", invoice_id, err.to_symbol(env));
    err
}
