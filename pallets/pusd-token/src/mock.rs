use crate as pallet_pusd_token;
use frame_support::{derive_impl, parameter_types, traits::ConstU32, BoundedVec};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        PusdToken: pallet_pusd_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
}

/// One whole token in smallest units (6 decimals).
pub const UNIT: u128 = 1_000_000;
pub const INITIAL_SUPPLY: u128 = 1_000_000 * UNIT;

pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;
/// Encodes to all zero bytes.
pub const ZERO: u64 = 0;

parameter_types! {
    pub const MaxSupply: u128 = 100_000_000 * UNIT;
}

impl pallet_pusd_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxSupply = MaxSupply;
    type MaxCurrencyLength = ConstU32<8>;
    type WeightInfo = ();
}

pub fn default_genesis() -> pallet_pusd_token::GenesisConfig<Test> {
    pallet_pusd_token::GenesisConfig::<Test> {
        owner: Some(OWNER),
        token_name: b"Pegged USD".to_vec(),
        token_symbol: b"PUSD".to_vec(),
        decimals: 6,
        initial_supply: INITIAL_SUPPLY,
        blacklisted_accounts: vec![],
    }
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    new_test_ext_with(default_genesis())
}

pub fn new_test_ext_with(
    genesis: pallet_pusd_token::GenesisConfig<Test>,
) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    genesis.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are only recorded from block 1 onwards.
    ext.execute_with(|| System::set_block_number(1));
    ext
}

pub fn currency(code: &[u8]) -> BoundedVec<u8, ConstU32<8>> {
    code.to_vec().try_into().expect("currency code fits in 8 bytes")
}

/// Mint `amount` to `who` from the owner account.
pub fn fund(who: u64, amount: u128) {
    frame_support::assert_ok!(PusdToken::mint(RuntimeOrigin::signed(OWNER), who, amount));
}
