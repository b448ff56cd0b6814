#![cfg(test)]
extern crate std;

use crate::{MockMusd, MockMusdClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::TokenClient,
    Address, Env, String,
};

fn create_token<'a>(e: &Env, admin: &Address) -> (TokenClient<'a>, MockMusdClient<'a>) {
    let address = e.register(
        MockMusd,
        (
            admin.clone(),
            18u32,
            String::from_str(e, "Mock MUSD"),
            String::from_str(e, "MUSD"),
        ),
    );
    (TokenClient::new(e, &address), MockMusdClient::new(e, &address))
}

#[test]
fn test_metadata() {
    let e = Env::default();
    let admin = Address::generate(&e);
    let (token, _) = create_token(&e, &admin);

    assert_eq!(token.decimals(), 18);
    assert_eq!(token.name(), String::from_str(&e, "Mock MUSD"));
    assert_eq!(token.symbol(), String::from_str(&e, "MUSD"));
}

#[test]
fn test_mint_and_transfer_from() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let spender = Address::generate(&e);
    let to = Address::generate(&e);
    let (token, musd) = create_token(&e, &admin);

    musd.mint(&owner, &1000);
    assert_eq!(token.balance(&owner), 1000);

    let expiration = e.ledger().sequence() + 1000;
    token.approve(&owner, &spender, &300, &expiration);
    assert_eq!(token.allowance(&owner, &spender), 300);

    token.transfer_from(&spender, &owner, &to, &200);
    assert_eq!(token.balance(&owner), 800);
    assert_eq!(token.balance(&to), 200);
    assert_eq!(token.allowance(&owner, &spender), 100);
}

#[test]
fn test_allowance_expires() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let spender = Address::generate(&e);
    let (token, musd) = create_token(&e, &admin);

    musd.mint(&owner, &1000);
    let expiration = e.ledger().sequence() + 10;
    token.approve(&owner, &spender, &500, &expiration);

    e.ledger().with_mut(|li| li.sequence_number = expiration + 1);
    assert_eq!(token.allowance(&owner, &spender), 0);
}

#[test]
#[should_panic(expected = "insufficient allowance")]
fn test_transfer_from_without_approval() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let spender = Address::generate(&e);
    let (token, musd) = create_token(&e, &admin);

    musd.mint(&owner, &1000);
    token.transfer_from(&spender, &owner, &spender, &1);
}

#[test]
#[should_panic(expected = "insufficient balance")]
fn test_transfer_over_balance() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let (token, musd) = create_token(&e, &admin);

    musd.mint(&owner, &10);
    token.transfer(&owner, &admin, &11);
}

#[test]
fn test_burn() {
    let e = Env::default();
    e.mock_all_auths();

    let admin = Address::generate(&e);
    let owner = Address::generate(&e);
    let (token, musd) = create_token(&e, &admin);

    musd.mint(&owner, &50);
    token.burn(&owner, &20);
    assert_eq!(token.balance(&owner), 30);
}
