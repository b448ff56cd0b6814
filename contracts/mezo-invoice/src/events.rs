use soroban_sdk::{symbol_short, Address, Env};

/// `("invoice", "created")` → `(id, recipient, amount)`
pub fn invoice_created(env: &Env, id: u64, recipient: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("invoice"), symbol_short!("created")),
        (id, recipient.clone(), amount),
    );
}

/// `("invoice", "paid")` → `(id, payer, amount)`
pub fn invoice_paid(env: &Env, id: u64, payer: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("invoice"), symbol_short!("paid")),
        (id, payer.clone(), amount),
    );
}

/// `("token", "updated")` → `new_token`
pub fn token_updated(env: &Env, new_token: &Address) {
    env.events()
        .publish((symbol_short!("token"), symbol_short!("updated")), new_token.clone());
}

/// `("owner", "updated")` → `new_owner`
pub fn owner_updated(env: &Env, new_owner: &Address) {
    env.events()
        .publish((symbol_short!("owner"), symbol_short!("updated")), new_owner.clone());
}
