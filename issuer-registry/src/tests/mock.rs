// This file is part of bourse.
// Copyright (C) 2023-2026  Bourse Labs. SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate as issuer_registry;
use crate::Config;
use frame_support::{
    parameter_types,
    traits::{Everything, GenesisBuild, Nothing},
};
use frame_system as system;
use orml_tokens::AccountData;
use orml_traits::parameter_type_with_key;
use sp_core::H256;
use sp_runtime::{
    testing::Header,
    traits::{BlakeTwo256, IdentityLookup},
};

type UncheckedExtrinsic = frame_system::mocking::MockUncheckedExtrinsic<Test>;
type Block = frame_system::mocking::MockBlock<Test>;

pub type AccountId = u64;
pub type Amount = i128;
pub type AssetId = u32;
pub type Balance = u128;
pub type NamedReserveIdentifier = [u8; 8];

pub const USDT: AssetId = 0;
pub const TOKEN_ID_START: AssetId = 1_000;

// 10^6 base units per whole unit, both for tokens and for USDT.
pub const ONE: Balance = 1_000_000;

pub const OWNER: AccountId = 1;
pub const TREASURY: AccountId = 2;
pub const ALICE: AccountId = 3;
pub const BOB: AccountId = 4;

frame_support::construct_runtime!(
    pub enum Test where
     Block = Block,
     NodeBlock = Block,
     UncheckedExtrinsic = UncheckedExtrinsic,
     {
         System: frame_system,
         IssuerRegistry: issuer_registry,
         Tokens: orml_tokens,
     }
);

parameter_types! {
    pub const BlockHashCount: u64 = 250;
    pub const SS58Prefix: u8 = 63;
    pub const MaxReserves: u32 = 50;
    pub const RegistryStringLimit: u32 = 32;
    pub const SequentialIdStart: AssetId = TOKEN_ID_START;
}

parameter_type_with_key! {
    pub ExistentialDeposits: |_currency_id: AssetId| -> Balance {
        0
    };
}

impl Config for Test {
    type AssetId = AssetId;
    type Currency = Tokens;
    type Event = Event;
    type StringLimit = RegistryStringLimit;
    type SequentialIdStart = SequentialIdStart;
    type WeightInfo = ();
}

impl system::Config for Test {
    type BaseCallFilter = Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type Origin = Origin;
    type Call = Call;
    type Index = u64;
    type BlockNumber = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Header = Header;
    type Event = Event;
    type BlockHashCount = BlockHashCount;
    type DbWeight = ();
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = AccountData<u128>;
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = SS58Prefix;
    type OnSetCode = ();
    type MaxConsumers = frame_support::traits::ConstU32<16>;
}

impl orml_tokens::Config for Test {
    type Event = Event;
    type Balance = Balance;
    type Amount = Amount;
    type CurrencyId = AssetId;
    type WeightInfo = ();
    type ExistentialDeposits = ExistentialDeposits;
    type OnDust = ();
    type MaxLocks = ();
    type DustRemovalWhitelist = Nothing;
    type OnNewTokenAccount = ();
    type OnKilledTokenAccount = ();
    type ReserveIdentifier = NamedReserveIdentifier;
    type MaxReserves = MaxReserves;
}

pub struct ExtBuilder {
    endowed_accounts: Vec<(AccountId, AssetId, Balance)>,
    owner: Option<AccountId>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        Self {
            endowed_accounts: vec![],
            owner: Some(OWNER),
        }
    }
}

impl ExtBuilder {
    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::default().build_storage::<Test>().unwrap();

        issuer_registry::GenesisConfig::<Test> { owner: self.owner }
            .assimilate_storage(&mut t)
            .unwrap();

        orml_tokens::GenesisConfig::<Test> {
            balances: self.endowed_accounts,
        }
        .assimilate_storage(&mut t)
        .unwrap();

        let mut r: sp_io::TestExternalities = t.into();

        r.execute_with(|| {
            System::set_block_number(1);
        });

        r
    }
}

/// Deploy "Acme Ltd" with the given supply minted to `TREASURY` and return its issuer id.
pub fn deploy_acme(initial_supply: Balance) -> crate::IssuerId {
    IssuerRegistry::deploy_issuer(
        Origin::signed(OWNER),
        b"Acme Ltd".to_vec(),
        b"ACME".to_vec(),
        initial_supply,
        USDT,
        TREASURY,
    )
    .unwrap();
    IssuerRegistry::issuer_by_company(b"Acme Ltd".to_vec()).unwrap()
}

pub fn expect_events(e: Vec<Event>) {
    test_utils::expect_last_events::<Test>(e);
}
