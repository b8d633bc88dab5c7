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

pub type IssuerId = u32;

/// Per-company record created by `deploy_issuer`.
///
/// The issuer is never destroyed; its whitelist, dividend and governance books
/// live in dedicated maps keyed by [`IssuerId`].
#[derive(Encode, Decode, Clone, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct IssuerDetails<AccountId, AssetId, BoundedString> {
    pub company_name: BoundedString,
    pub token_symbol: BoundedString,
    /// The issuer's own equity token, minted to `treasury` at deployment.
    pub security_token: AssetId,
    /// Settlement asset the issuer's book trades and pays dividends in.
    pub settlement_asset: AssetId,
    pub treasury: AccountId,
}
