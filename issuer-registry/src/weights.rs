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

#![allow(clippy::unnecessary_cast)]

use frame_support::weights::Weight;

/// Weight functions needed for pallet_issuer_registry.
pub trait WeightInfo {
    fn deploy_issuer() -> Weight;
    fn whitelist_shareholder() -> Weight;
    fn distribute_dividends() -> Weight;
    fn claim_dividend() -> Weight;
    fn cast_vote() -> Weight;
    fn set_initial_treasury_balance() -> Weight;
    fn transfer_ownership() -> Weight;
}

impl WeightInfo for () {
    fn deploy_issuer() -> Weight {
        Weight::from_ref_time(60_000_000 as u64)
    }
    fn whitelist_shareholder() -> Weight {
        Weight::from_ref_time(25_000_000 as u64)
    }
    fn distribute_dividends() -> Weight {
        Weight::from_ref_time(30_000_000 as u64)
    }
    fn claim_dividend() -> Weight {
        Weight::from_ref_time(50_000_000 as u64)
    }
    fn cast_vote() -> Weight {
        Weight::from_ref_time(30_000_000 as u64)
    }
    fn set_initial_treasury_balance() -> Weight {
        Weight::from_ref_time(35_000_000 as u64)
    }
    fn transfer_ownership() -> Weight {
        Weight::from_ref_time(20_000_000 as u64)
    }
}
