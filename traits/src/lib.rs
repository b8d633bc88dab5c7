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

#![cfg_attr(not(feature = "std"), no_std)]

/// Balance type used across the venue. Security tokens and the settlement
/// asset both use 10^6 base units per whole unit.
pub type Balance = u128;

/// Issuer directory consumed by the trading pallets.
///
/// A security token belongs to exactly one issuer; the issuer carries the
/// investor whitelist and the settlement asset its book trades against.
pub trait IssuerRegistry<AccountId, AssetId> {
    /// `true` if `security_token` is registered to an issuer.
    fn exists(security_token: AssetId) -> bool;

    /// `true` if `who` is on the whitelist of the issuer owning `security_token`.
    fn is_whitelisted(security_token: AssetId, who: &AccountId) -> bool;

    /// The settlement asset the issuer's book trades against.
    fn settlement_asset(security_token: AssetId) -> Option<AssetId>;
}

/// Read-only order book queries used by the market maker incentive pallet.
pub trait OrderBookInspect<AccountId, AssetId> {
    /// Highest open bid as `(price, remaining quantity of that order)`,
    /// `(0, 0)` if the side is empty.
    fn best_bid(security_token: AssetId) -> (Balance, Balance);

    /// Lowest open ask as `(price, remaining quantity of that order)`,
    /// `(0, 0)` if the side is empty.
    fn best_ask(security_token: AssetId) -> (Balance, Balance);

    /// `true` if `who` has an open order on the given side of the book at
    /// exactly `price`.
    fn has_active_order(who: &AccountId, security_token: AssetId, price: Balance, is_bid: bool) -> bool;
}

/// Venue-wide administrative authority.
///
/// Administrative gates across the venue are a single-owner check; the owner
/// account lives in the issuer registry and is handed around as a capability
/// through this trait.
pub trait VenueAuthority<AccountId> {
    fn is_owner(who: &AccountId) -> bool;
}
