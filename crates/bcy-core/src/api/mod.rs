//! Endpoint methods on [`BlockCypher`](crate::client::BlockCypher), one
//! module per API family.

mod address;
mod asset;
mod blockchain;
mod hdwallet;
mod hook;
mod meta;
mod payfwd;
mod transaction;
mod wallet;
