//! Weights for pallet-pusd-token.
//!
//! Placeholder figures derived from the storage accesses of each call until the
//! benchmarks in `benchmarking.rs` are run against a reference machine.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-pusd-token.
pub trait WeightInfo {
    fn transfer() -> Weight;
    fn mint() -> Weight;
    fn redeem() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn blacklist() -> Weight;
    fn unblacklist() -> Weight;
    fn transfer_ownership() -> Weight;
}

/// Weights using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `PusdToken::IsPaused` (r:1 w:0)
    /// Storage: `PusdToken::Blacklist` (r:2 w:0)
    /// Storage: `PusdToken::Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(18_000_000, 5_158)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `PusdToken::Owner` (r:1 w:0)
    /// Storage: `PusdToken::IsPaused` (r:1 w:0)
    /// Storage: `PusdToken::Blacklist` (r:1 w:0)
    /// Storage: `PusdToken::TotalSupply` (r:1 w:1)
    /// Storage: `PusdToken::Balances` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(16_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `PusdToken::IsPaused` (r:1 w:0)
    /// Storage: `PusdToken::Blacklist` (r:1 w:0)
    /// Storage: `PusdToken::Balances` (r:1 w:1)
    /// Storage: `PusdToken::TotalSupply` (r:1 w:1)
    fn redeem() -> Weight {
        Weight::from_parts(15_000_000, 3_593)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `PusdToken::Owner` (r:1 w:0)
    /// Storage: `PusdToken::IsPaused` (r:0 w:1)
    fn pause() -> Weight {
        Weight::from_parts(8_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `PusdToken::Owner` (r:1 w:0)
    /// Storage: `PusdToken::IsPaused` (r:0 w:1)
    fn unpause() -> Weight {
        Weight::from_parts(8_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `PusdToken::Owner` (r:1 w:0)
    /// Storage: `PusdToken::Blacklist` (r:0 w:1)
    fn blacklist() -> Weight {
        Weight::from_parts(9_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `PusdToken::Owner` (r:1 w:0)
    /// Storage: `PusdToken::Blacklist` (r:0 w:1)
    fn unblacklist() -> Weight {
        Weight::from_parts(9_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `PusdToken::Owner` (r:1 w:1)
    fn transfer_ownership() -> Weight {
        Weight::from_parts(8_000_000, 1_517)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(18_000_000, 5_158)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn mint() -> Weight {
        Weight::from_parts(16_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn redeem() -> Weight {
        Weight::from_parts(15_000_000, 3_593)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn pause() -> Weight {
        Weight::from_parts(8_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn unpause() -> Weight {
        Weight::from_parts(8_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn blacklist() -> Weight {
        Weight::from_parts(9_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn unblacklist() -> Weight {
        Weight::from_parts(9_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(8_000_000, 1_517)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
