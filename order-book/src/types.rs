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

pub type OrderId = u64;

/// Unix time in seconds.
pub type Moment = u64;

/// Prices are settlement base units per 10^6 security-token base units, so
/// `cost = quantity * price / PRICE_SCALE`.
pub const PRICE_SCALE: Balance = 1_000_000;

pub const BPS_DENOMINATOR: Balance = 10_000;

/// Amounts and prices are capped to the signed 64-bit range for settlement-rail
/// interoperability.
pub const MAX_SAFE_VALUE: Balance = i64::MAX as Balance;

pub const DEFAULT_TRADING_FEE_BPS: u32 = 25;

/// Trading fee ceiling, 1%.
pub const MAX_TRADING_FEE_BPS: u32 = 100;

#[derive(Encode, Decode, Copy, Clone, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum OrderSide {
    Buy,
    Sell,
}

#[derive(Encode, Decode, Copy, Clone, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum OrderStatus {
    Open,
    Filled,
    Cancelled,
}

#[derive(Encode, Decode, Clone, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct Order<AccountId, AssetId> {
    pub maker: AccountId,
    pub security_token: AssetId,
    /// Quantity in token base units.
    pub amount: Balance,
    /// Settlement base units per 10^6 token base units.
    pub price: Balance,
    pub side: OrderSide,
    pub status: OrderStatus,
    pub created_at: Moment,
    pub filled: Balance,
}

impl<AccountId, AssetId> Order<AccountId, AssetId> {
    pub fn new(
        maker: AccountId,
        security_token: AssetId,
        amount: Balance,
        price: Balance,
        side: OrderSide,
        created_at: Moment,
    ) -> Self {
        Self {
            maker,
            security_token,
            amount,
            price,
            side,
            status: OrderStatus::Open,
            created_at,
            filled: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == OrderStatus::Open
    }

    pub fn remaining(&self) -> Balance {
        self.amount.saturating_sub(self.filled)
    }

    /// Record a fill, moving the order to `Filled` on exhaustion.
    pub fn fill(&mut self, quantity: Balance) {
        self.filled = self.filled.saturating_add(quantity);
        if self.filled == self.amount {
            self.status = OrderStatus::Filled;
        }
    }
}
