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

/// Weight functions needed for pallet_market_maker.
pub trait WeightInfo {
    fn register_provider() -> Weight;
    fn deactivate_provider() -> Weight;
    fn create_program() -> Weight;
    fn toggle_program() -> Weight;
    fn lock_collateral() -> Weight;
    fn release_collateral() -> Weight;
    fn claim_rewards() -> Weight;
    fn fund_rewards() -> Weight;
}

impl WeightInfo for () {
    fn register_provider() -> Weight {
        Weight::from_ref_time(25_000_000 as u64)
    }
    fn deactivate_provider() -> Weight {
        Weight::from_ref_time(20_000_000 as u64)
    }
    fn create_program() -> Weight {
        Weight::from_ref_time(30_000_000 as u64)
    }
    fn toggle_program() -> Weight {
        Weight::from_ref_time(20_000_000 as u64)
    }
    fn lock_collateral() -> Weight {
        Weight::from_ref_time(60_000_000 as u64)
    }
    fn release_collateral() -> Weight {
        Weight::from_ref_time(60_000_000 as u64)
    }
    fn claim_rewards() -> Weight {
        Weight::from_ref_time(90_000_000 as u64)
    }
    fn fund_rewards() -> Weight {
        Weight::from_ref_time(40_000_000 as u64)
    }
}
