use soroban_sdk::{contracttype, Address, String};

// Invoice structure
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Invoice {
    pub id: u64,                // * Sequential id, starts at 1
    pub recipient: Address,     // * Account owed the payment
    pub amount: i128,           // * Amount in token base units
    pub due_date: u64,          // * Last ledger timestamp at which payment is accepted
    pub metadata: String,       // * Opaque document reference, e.g. ipfs://...
    pub is_paid: bool,          // * Payment status
    pub payer: Option<Address>, // * Set once, when the invoice is paid
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvoiceStatus {
    Created = 0,
    Paid = 1,
}
