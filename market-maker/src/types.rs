// This file is part of bourse.

// Copyright (C) 2023-2026  Bourse Labs.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

use bourse_traits::Balance;

/// Unix time in seconds.
pub type Moment = u64;

pub const BPS_DENOMINATOR: Balance = 10_000;

pub const SECONDS_PER_DAY: Moment = 86_400;

/// A registered liquidity provider.
#[derive(Encode, Decode, Clone, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct Provider<Moment> {
    pub registered_at: Moment,
    pub active: bool,
    /// Total rewards ever paid to the provider, across all programs.
    pub cumulative_rewards: Balance,
    /// Collateral currently locked, summed over all programs.
    pub total_locked: Balance,
}

impl<Moment> Provider<Moment> {
    pub fn new(registered_at: Moment) -> Self {
        Self {
            registered_at,
            active: true,
            cumulative_rewards: 0,
            total_locked: 0,
        }
    }
}

/// Per-token incentive program parameters.
#[derive(Encode, Decode, Clone, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct IncentiveProgram<Moment> {
    /// Widest bid/ask spread that still qualifies, in basis points of the bid.
    pub max_spread_bps: u32,
    /// Minimum remaining size of the best bid and best ask, in token base units.
    pub min_order_size: Balance,
    /// Minimum collateral lock, in settlement base units.
    pub min_lockup: Balance,
    /// Daily reward as basis points of locked collateral.
    pub daily_rate_bps: u32,
    pub end_time: Moment,
    pub active: bool,
}
