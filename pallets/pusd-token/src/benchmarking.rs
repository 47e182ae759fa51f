//! Benchmarking setup for pallet-pusd-token

use super::*;

#[allow(unused)]
use crate::Pallet as PusdToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_std::vec;

/// Install `who` as owner and return a signed origin for it.
fn set_owner<T: Config>(who: &T::AccountId) -> RawOrigin<T::AccountId> {
    Owner::<T>::put(who);
    RawOrigin::Signed(who.clone())
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        IsPaused::<T>::put(false);
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(10_000_000));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn mint() {
        let owner: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let origin = set_owner::<T>(&owner);
        IsPaused::<T>::put(false);
        TotalSupply::<T>::put(0);
        let amount: u128 = T::MaxSupply::get().min(1_000_000);

        #[extrinsic_call]
        _(origin, recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn redeem() {
        let caller: T::AccountId = whitelisted_caller();
        let amount: u128 = 1_000_000;
        // Longest currency code the runtime accepts
        let currency: CurrencyCodeOf<T> =
            vec![b'X'; T::MaxCurrencyLength::get() as usize].try_into().expect("fits bound");

        IsPaused::<T>::put(false);
        Balances::<T>::insert(&caller, amount);
        TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount, currency);

        assert_eq!(Balances::<T>::get(&caller), 0);
    }

    #[benchmark]
    fn pause() {
        let owner: T::AccountId = whitelisted_caller();
        let origin = set_owner::<T>(&owner);

        #[extrinsic_call]
        _(origin);

        assert!(IsPaused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let owner: T::AccountId = whitelisted_caller();
        let origin = set_owner::<T>(&owner);
        IsPaused::<T>::put(true);

        #[extrinsic_call]
        _(origin);

        assert!(!IsPaused::<T>::get());
    }

    #[benchmark]
    fn blacklist() {
        let owner: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        let origin = set_owner::<T>(&owner);

        #[extrinsic_call]
        _(origin, target.clone());

        assert!(Blacklist::<T>::get(&target));
    }

    #[benchmark]
    fn unblacklist() {
        let owner: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 0);
        let origin = set_owner::<T>(&owner);
        Blacklist::<T>::insert(&target, true);

        #[extrinsic_call]
        _(origin, target.clone());

        assert!(!Blacklist::<T>::get(&target));
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("new_owner", 0, 0);
        let origin = set_owner::<T>(&owner);

        #[extrinsic_call]
        _(origin, new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    impl_benchmark_test_suite!(PusdToken, crate::mock::new_test_ext(), crate::mock::Test);
}
