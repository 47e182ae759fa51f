//! Storage migrations for pallet-pusd-token.
//!
//! Migrations are gated on the on-chain storage version through
//! [`VersionedMigration`], so each one runs exactly once. Add them to the runtime's
//! `Executive` migration tuple, oldest first:
//!
//! ```ignore
//! pub type Migrations = (pallet_pusd_token::migrations::v1::MigrateToV1<Runtime>,);
//! ```

use frame_support::{
    migrations::VersionedMigration, pallet_prelude::*, traits::UncheckedOnRuntimeUpgrade,
};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet, LOG_TARGET};

pub mod v1 {
    use super::*;

    /// Version 1 is the first declared storage version. A chain that added the
    /// pallet from an unversioned build reports v0 with the same layout, so only the
    /// version stamp changes.
    pub struct StampVersion<T>(PhantomData<T>);

    impl<T: Config> UncheckedOnRuntimeUpgrade for StampVersion<T> {
        fn on_runtime_upgrade() -> Weight {
            log::info!(target: LOG_TARGET, "Stamping storage v1, layout unchanged");
            Weight::zero()
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            Pallet::<T>::do_try_state()?;
            Ok(crate::TotalSupply::<T>::get().encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_supply: u128 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;
            frame_support::ensure!(
                crate::TotalSupply::<T>::get() == pre_supply,
                sp_runtime::TryRuntimeError::Other("Total supply changed during migration")
            );
            Pallet::<T>::do_try_state()
        }
    }

    pub type MigrateToV1<T> = VersionedMigration<
        0,
        1,
        StampVersion<T>,
        Pallet<T>,
        <T as frame_system::Config>::DbWeight,
    >;
}
