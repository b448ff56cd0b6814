use soroban_sdk::{contracterror, Env, Symbol};

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum InvoiceError {
    InvalidRecipient = 1,
    InvalidAmount = 2,
    InvalidDueDate = 3,
    NotFound = 4,
    AlreadyPaid = 5,
    Expired = 6,
    InsufficientBalance = 7,
    InsufficientAllowance = 8,
    TransferFailed = 9,
    Unauthorized = 10,
    InvalidTokenAddress = 11,
}

/// Broad class of an [`InvoiceError`], used when deciding whether a caller
/// can fix the problem and retry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Validation,
    NotFound,
    State,
    Resource,
    Authorization,
}

impl InvoiceError {
    pub fn class(&self) -> ErrorClass {
        match self {
            InvoiceError::InvalidRecipient
            | InvoiceError::InvalidAmount
            | InvoiceError::InvalidDueDate
            | InvoiceError::InvalidTokenAddress => ErrorClass::Validation,
            InvoiceError::NotFound => ErrorClass::NotFound,
            InvoiceError::AlreadyPaid | InvoiceError::Expired => ErrorClass::State,
            InvoiceError::InsufficientBalance
            | InvoiceError::InsufficientAllowance
            | InvoiceError::TransferFailed => ErrorClass::Resource,
            InvoiceError::Unauthorized => ErrorClass::Authorization,
        }
    }

    /// Resource errors leave nothing committed, so the same call succeeds once
    /// the payer has funds and allowance in place.
    pub fn is_retryable(&self) -> bool {
        self.class() == ErrorClass::Resource
    }

    pub fn to_symbol(&self, env: &Env) -> Symbol {
        match self {
            InvoiceError::InvalidRecipient => Symbol::new(env, "InvalidRecipient"),
            InvoiceError::InvalidAmount => Symbol::new(env, "InvalidAmount"),
            InvoiceError::InvalidDueDate => Symbol::new(env, "InvalidDueDate"),
            InvoiceError::NotFound => Symbol::new(env, "NotFound"),
            InvoiceError::AlreadyPaid => Symbol::new(env, "AlreadyPaid"),
            InvoiceError::Expired => Symbol::new(env, "Expired"),
            InvoiceError::InsufficientBalance => Symbol::new(env, "InsufficientBalance"),
            InvoiceError::InsufficientAllowance => Symbol::new(env, "InsufficientAllowance"),
            InvoiceError::TransferFailed => Symbol::new(env, "TransferFailed"),
            InvoiceError::Unauthorized => Symbol::new(env, "Unauthorized"),
            InvoiceError::InvalidTokenAddress => Symbol::new(env, "InvalidTokenAddress"),
        }
    }
}
