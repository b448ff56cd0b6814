use soroban_sdk::{contracttype, Address, Env};

use crate::error::InvoiceError;
use crate::types::Invoice;

// Ledgers close roughly every 5 seconds.
const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const INVOICE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INVOICE_LIFETIME_THRESHOLD: u32 = INVOICE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,        // Instance: designated owner
    Token,        // Instance: MUSD token contract
    InvoiceCount, // Instance: last assigned invoice id
    Invoice(u64), // Persistent: id -> Invoice
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn get_owner(env: &Env) -> Address {
    // * Set by the constructor, always present
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic!("owner not set"))
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic!("token not set"))
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn get_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::InvoiceCount)
        .unwrap_or(0)
}

pub fn init_count(env: &Env) {
    env.storage().instance().set(&DataKey::InvoiceCount, &0u64);
}

/// Reserves the next invoice id. Ids are dense and start at 1.
pub fn next_id(env: &Env) -> u64 {
    let id = get_count(env) + 1;
    env.storage().instance().set(&DataKey::InvoiceCount, &id);
    id
}

pub fn load_invoice(env: &Env, id: u64) -> Result<Invoice, InvoiceError> {
    let key = DataKey::Invoice(id);
    let invoice: Invoice = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(InvoiceError::NotFound)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, INVOICE_LIFETIME_THRESHOLD, INVOICE_BUMP_AMOUNT);
    Ok(invoice)
}

pub fn save_invoice(env: &Env, invoice: &Invoice) {
    let key = DataKey::Invoice(invoice.id);
    env.storage().persistent().set(&key, invoice);
    env.storage()
        .persistent()
        .extend_ttl(&key, INVOICE_LIFETIME_THRESHOLD, INVOICE_BUMP_AMOUNT);
}
