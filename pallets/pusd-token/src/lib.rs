//! # PUSD Token Pallet
//!
//! A pegged stablecoin ledger administered by a single owner account.
//!
//! The owner can mint (up to [`Config::MaxSupply`]), pause and unpause all balance
//! movements, blacklist accounts and hand ownership over to another account. Any
//! holder can transfer tokens or redeem them for fiat; a redemption burns the
//! tokens and emits [`Event::Redeemed`] for the off-chain settlement desk.
//!
//! Ownership and blacklist membership are independent checks. A blacklisted owner
//! keeps every administrative power but cannot move, receive or redeem tokens until
//! it removes itself from the blacklist.
//!
//! Checks run in a fixed order so the surfaced error is predictable:
//! origin, ownership, zero-address arguments, pause, sender blacklist, recipient
//! blacklist, balance or supply cap, arithmetic overflow.

#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` and `Config::RuntimeEvent` are deprecated upstream but still
// supported; the runtime metadata keeps the getter names.
#![allow(deprecated)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod migrations;
pub mod weights;
pub use weights::WeightInfo;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::pusd-token";

/// Currency code attached to a redemption, e.g. `b"USD"`.
pub type CurrencyCodeOf<T> = BoundedVec<u8, <T as Config>::MaxCurrencyLength>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Hard cap on total supply, in smallest units.
        #[pallet::constant]
        type MaxSupply: Get<u128>;

        /// Maximum length of a redemption currency code.
        #[pallet::constant]
        type MaxCurrencyLength: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Pegged USD")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "PUSD")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// The single administrative account. `None` leaves the ledger without an admin.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Global kill switch for transfer, mint and redeem.
    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type IsPaused<T> = StorageValue<_, bool, ValueQuery>;

    /// Accounts barred from sending, receiving, being minted to, or redeeming.
    #[pallet::storage]
    #[pallet::getter(fn is_blacklisted)]
    pub type Blacklist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved between two accounts
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// New tokens created for an account
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens burned against an off-chain fiat payout in `currency`
        Redeemed { account: T::AccountId, amount: u128, currency: CurrencyCodeOf<T> },
        /// Ledger paused by the owner
        Paused { account: T::AccountId },
        /// Ledger resumed by the owner
        Unpaused { account: T::AccountId },
        Blacklisted { account: T::AccountId },
        Unblacklisted { account: T::AccountId },
        OwnershipTransferred { previous_owner: T::AccountId, new_owner: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the ledger owner.
        NotOwner,
        /// The ledger is paused.
        Paused,
        /// The sending (or redeeming) account is blacklisted.
        BlacklistedSender,
        /// The receiving account is blacklisted.
        BlacklistedRecipient,
        InsufficientBalance,
        /// Minting would push total supply above `MaxSupply`.
        SupplyCapExceeded,
        /// The zero account is not allowed here.
        InvalidAddress,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::MaxSupply::get() > 0, "MaxSupply must be non-zero");
            assert!(T::MaxCurrencyLength::get() > 0, "MaxCurrencyLength must be non-zero");
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Move `amount` from the caller to `to`.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(!Self::is_zero_account(&to), Error::<T>::InvalidAddress);
            Self::ensure_not_paused()?;
            Self::ensure_not_blacklisted(&sender, Error::<T>::BlacklistedSender)?;
            Self::ensure_not_blacklisted(&to, Error::<T>::BlacklistedRecipient)?;

            Self::move_balance(&sender, &to, amount)?;
            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }

        /// Create `amount` new tokens for `to`. Owner only.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(!Self::is_zero_account(&to), Error::<T>::InvalidAddress);
            Self::ensure_not_paused()?;
            Self::ensure_not_blacklisted(&to, Error::<T>::BlacklistedRecipient)?;

            let new_supply = TotalSupply::<T>::get()
                .checked_add(amount)
                .filter(|supply| *supply <= T::MaxSupply::get())
                .ok_or(Error::<T>::SupplyCapExceeded)?;
            let new_balance =
                Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

            TotalSupply::<T>::put(new_supply);
            Self::set_balance(&to, new_balance);
            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        /// Burn `amount` of the caller's tokens against a fiat payout in `currency`.
        ///
        /// The currency code is an opaque tag for the settlement desk; no closed set
        /// of codes is enforced on-chain.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::redeem())]
        pub fn redeem(
            origin: OriginFor<T>,
            amount: u128,
            currency: CurrencyCodeOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_not_blacklisted(&who, Error::<T>::BlacklistedSender)?;

            let new_balance =
                Balances::<T>::get(&who).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
            let new_supply =
                TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;

            Self::set_balance(&who, new_balance);
            TotalSupply::<T>::put(new_supply);
            log::debug!(target: LOG_TARGET, "redemption of {amount} requested by {who:?}");
            Self::deposit_event(Event::Redeemed { account: who, amount, currency });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = Self::ensure_owner(origin)?;
            IsPaused::<T>::put(true);
            log::info!(target: LOG_TARGET, "ledger paused by {who:?}");
            Self::deposit_event(Event::Paused { account: who });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = Self::ensure_owner(origin)?;
            IsPaused::<T>::put(false);
            log::info!(target: LOG_TARGET, "ledger unpaused by {who:?}");
            Self::deposit_event(Event::Unpaused { account: who });
            Ok(())
        }

        /// Bar `account` from ordinary token operations. Re-blacklisting is a no-op.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::blacklist())]
        pub fn blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(!Self::is_zero_account(&account), Error::<T>::InvalidAddress);
            Blacklist::<T>::insert(&account, true);
            Self::deposit_event(Event::Blacklisted { account });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::unblacklist())]
        pub fn unblacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Blacklist::<T>::remove(&account);
            Self::deposit_event(Event::Unblacklisted { account });
            Ok(())
        }

        /// Hand the owner role to `new_owner`. The caller loses all admin rights.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let previous_owner = Self::ensure_owner(origin)?;
            ensure!(!Self::is_zero_account(&new_owner), Error::<T>::InvalidAddress);
            Owner::<T>::put(&new_owner);
            log::info!(
                target: LOG_TARGET,
                "ownership transferred from {previous_owner:?} to {new_owner:?}"
            );
            Self::deposit_event(Event::OwnershipTransferred { previous_owner, new_owner });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial owner; receives the whole initial supply
        pub owner: Option<T::AccountId>,
        pub token_name: Vec<u8>,
        pub token_symbol: Vec<u8>,
        pub decimals: u8,
        /// Supply credited to `owner` at genesis, in smallest units
        pub initial_supply: u128,
        /// Accounts blacklisted from the first block
        pub blacklisted_accounts: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            assert!(
                self.initial_supply <= T::MaxSupply::get(),
                "Initial supply exceeds MaxSupply"
            );

            match self.owner {
                Some(ref owner) => {
                    assert!(!Pallet::<T>::is_zero_account(owner), "Owner cannot be the zero account");
                    Owner::<T>::put(owner);
                    if self.initial_supply > 0 {
                        Balances::<T>::insert(owner, self.initial_supply);
                    }
                    TotalSupply::<T>::put(self.initial_supply);
                }
                None => assert!(self.initial_supply == 0, "Initial supply requires an owner"),
            }

            for account in &self.blacklisted_accounts {
                assert!(
                    !Pallet::<T>::is_zero_account(account),
                    "Zero account cannot be blacklisted"
                );
                Blacklist::<T>::insert(account, true);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Supply cap, in smallest units.
    pub fn max_supply() -> u128 {
        T::MaxSupply::get()
    }

    /// The account whose encoding is all zero bytes, the ledger's null address.
    pub fn is_zero_account(who: &T::AccountId) -> bool {
        who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
    }

    /// Resolve `origin` to the current owner, or fail with `NotOwner`.
    ///
    /// Blacklist membership is deliberately not consulted here.
    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::NotOwner);
        Ok(who)
    }

    fn ensure_not_paused() -> DispatchResult {
        ensure!(!IsPaused::<T>::get(), Error::<T>::Paused);
        Ok(())
    }

    fn ensure_not_blacklisted(who: &T::AccountId, error: Error<T>) -> DispatchResult {
        ensure!(!Blacklist::<T>::get(who), error);
        Ok(())
    }

    /// Both new balances are computed before either is written.
    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let new_from =
            Balances::<T>::get(from).checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        if from == to {
            return Ok(());
        }
        let new_to = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

        Self::set_balance(from, new_from);
        Self::set_balance(to, new_to);
        Ok(())
    }

    /// Empty balances are removed rather than stored as `0`.
    fn set_balance(who: &T::AccountId, amount: u128) {
        if amount == 0 {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, amount);
        }
    }

    /// Ledger invariants: balances sum to total supply, supply stays under the cap,
    /// and the zero account is never blacklisted.
    #[cfg(any(feature = "try-runtime", test))]
    pub(crate) fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or(DispatchError::Other("Sum of balances overflows"))?;
        let supply = TotalSupply::<T>::get();

        ensure!(sum == supply, DispatchError::Other("Sum of balances differs from total supply"));
        ensure!(supply <= T::MaxSupply::get(), DispatchError::Other("Total supply above MaxSupply"));
        ensure!(
            Blacklist::<T>::iter_keys().all(|account| !Self::is_zero_account(&account)),
            DispatchError::Other("Zero account is blacklisted")
        );
        Ok(())
    }
}
