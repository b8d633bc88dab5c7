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

/// Weight functions needed for pallet_order_book.
pub trait WeightInfo {
    fn submit_buy_order() -> Weight;
    fn submit_sell_order() -> Weight;
    fn cancel_order() -> Weight;
    fn cancel_expired_order() -> Weight;
    fn set_trading_fee() -> Weight;
    fn set_fee_collector() -> Weight;
}

impl WeightInfo for () {
    fn submit_buy_order() -> Weight {
        Weight::from_ref_time(120_000_000 as u64)
    }
    fn submit_sell_order() -> Weight {
        Weight::from_ref_time(120_000_000 as u64)
    }
    fn cancel_order() -> Weight {
        Weight::from_ref_time(55_000_000 as u64)
    }
    fn cancel_expired_order() -> Weight {
        Weight::from_ref_time(55_000_000 as u64)
    }
    fn set_trading_fee() -> Weight {
        Weight::from_ref_time(15_000_000 as u64)
    }
    fn set_fee_collector() -> Weight {
        Weight::from_ref_time(15_000_000 as u64)
    }
}
