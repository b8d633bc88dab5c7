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
//
// # Issuer registry pallet
// ## General description
// This pallet is the factory and directory of security-token issuers. Deploying an issuer
// allocates a fresh security-token asset, mints the initial supply to the company treasury and
// auto-whitelists the treasury. The pallet also keeps the per-issuer shareholder books: the
// investor whitelist, the pull-based dividend accounting and the governance vote tallies.
//
// ## Notes
// Dividend entitlement is proportional to the holder's current token balance:
// `entitlement = total_distributed * balance / total_supply`, withdrawn amounts are recorded per
// holder and never decrease. A holder who transfers tokens away between distributions forfeits
// the untaken portion for shares no longer held. This is intentional.
//
// The pallet holds the venue-wide owner account. Every administrative call here and in the
// trading pallets (via the `VenueAuthority` trait) is gated on it.
//
// ## Dispatchable functions
// * `deploy_issuer` - register a company, create its token and mint the initial supply.
// * `whitelist_shareholder` - add or remove an investor from an issuer's whitelist.
// * `distribute_dividends` - record a dividend distribution backed by the treasury balance.
// * `claim_dividend` - pull the caller's untaken dividend entitlement.
// * `cast_vote` - assign the caller's governance vote weight.
// * `set_initial_treasury_balance` - bootstrap hook minting the first treasury balance.
// * `transfer_ownership` - hand the venue owner capability to another account.

#![cfg_attr(not(feature = "std"), no_std)]

use codec::HasCompact;
use frame_support::{pallet_prelude::*, traits::GenesisBuild};
use frame_system::{ensure_signed, pallet_prelude::OriginFor};
use orml_traits::MultiCurrency;
use sp_core::U256;
use sp_runtime::traits::{AtLeast32BitUnsigned, CheckedAdd, One, Zero};
use sp_std::vec::Vec;

use bourse_traits::{Balance, VenueAuthority};

#[cfg(test)]
mod tests;

mod types;

pub mod weights;

use weights::WeightInfo;

// Re-export pallet items so that they can be accessed from the crate namespace.
pub use pallet::*;

pub use crate::types::{IssuerDetails, IssuerId};

pub type BoundedName<T> = BoundedVec<u8, <T as Config>::StringLimit>;
pub type IssuerDetailsOf<T> =
    IssuerDetails<<T as frame_system::Config>::AccountId, <T as Config>::AssetId, BoundedName<T>>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::pallet]
    #[pallet::generate_store(pub(crate) trait Store)]
    pub struct Pallet<T>(_);

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Identifier for the class of asset.
        type AssetId: Member
            + Parameter
            + Ord
            + Default
            + Copy
            + HasCompact
            + MaybeSerializeDeserialize
            + MaxEncodedLen
            + TypeInfo
            + AtLeast32BitUnsigned;

        /// Multi currency ledger holding security tokens and the settlement asset.
        type Currency: MultiCurrency<Self::AccountId, CurrencyId = Self::AssetId, Balance = Balance>;

        type Event: From<Event<Self>> + IsType<<Self as frame_system::Config>::Event>;

        /// The maximum length of a company name or token symbol.
        #[pallet::constant]
        type StringLimit: Get<u32>;

        /// First asset id handed out to a deployed security token. Ids below the start are
        /// reserved for externally assigned assets such as the settlement asset.
        #[pallet::constant]
        type SequentialIdStart: Get<Self::AssetId>;

        /// Weight information for the extrinsics.
        type WeightInfo: WeightInfo;
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A new issuer exchange has been deployed
        ExchangeDeployed {
            owner: T::AccountId,
            issuer_id: IssuerId,
            company_name: BoundedName<T>,
        },
        /// A security token has been created and its initial supply minted
        TokenCreated {
            security_token: T::AssetId,
            name: BoundedName<T>,
            symbol: BoundedName<T>,
            initial_supply: Balance,
        },
        /// An investor's whitelist status has been set
        ShareholderWhitelisted {
            issuer_id: IssuerId,
            investor: T::AccountId,
            status: bool,
        },
        /// A dividend distribution has been recorded against the treasury
        DividendsDistributed { issuer_id: IssuerId, amount: Balance },
        /// A shareholder has pulled their dividend entitlement
        DividendClaimed {
            issuer_id: IssuerId,
            shareholder: T::AccountId,
            amount: Balance,
        },
        /// A shareholder has assigned their governance vote weight
        GovernanceVoteCasted {
            issuer_id: IssuerId,
            voter: T::AccountId,
            votes: Balance,
        },
        /// The issuer treasury has been bootstrapped with settlement funds
        TreasuryInitialized { issuer_id: IssuerId, amount: Balance },
        /// The venue owner capability has moved
        OwnershipTransferred {
            previous: T::AccountId,
            new: T::AccountId,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The caller is not the venue owner
        OwnerOnly,
        /// Company name is already registered
        DuplicateCompany,
        /// Name or symbol exceeds the length bound
        TooLong,
        /// Issuer cannot be found
        UnknownIssuer,
        /// The caller is not on the issuer's whitelist
        NotWhitelisted,
        /// The caller holds no security tokens of the issuer
        NoShares,
        /// Entitlement has already been withdrawn in full
        NothingToClaim,
        /// Amount must be positive
        NonPositive,
        /// The treasury balance does not cover the distribution
        InsufficientPool,
        /// The treasury already holds settlement funds
        AlreadyInitialized,
        /// Issuer id sequence exhausted
        IssuerIdOutOfBound,
        /// Security token id sequence exhausted
        TokenIdOutOfBound,
        /// Error with math calculations
        MathError,
    }

    /// Venue owner account. All administrative gates check against it.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Id sequencer for issuers. Ids start at 1.
    #[pallet::storage]
    #[pallet::getter(fn last_issuer_id)]
    pub type IssuerSequencer<T: Config> = StorageValue<_, IssuerId, ValueQuery>;

    /// Next security-token asset id to hand out.
    #[pallet::storage]
    #[pallet::getter(fn next_token_id)]
    pub type NextTokenId<T: Config> = StorageValue<_, T::AssetId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn issuers)]
    pub type Issuers<T: Config> = StorageMap<_, Blake2_128Concat, IssuerId, IssuerDetailsOf<T>, OptionQuery>;

    /// Company name -> issuer.
    #[pallet::storage]
    #[pallet::getter(fn company_index)]
    pub type CompanyIndex<T: Config> = StorageMap<_, Blake2_128Concat, BoundedName<T>, IssuerId, OptionQuery>;

    /// Security token -> issuer.
    #[pallet::storage]
    #[pallet::getter(fn token_index)]
    pub type TokenIndex<T: Config> = StorageMap<_, Blake2_128Concat, T::AssetId, IssuerId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn whitelist)]
    pub type Whitelist<T: Config> =
        StorageDoubleMap<_, Blake2_128Concat, IssuerId, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Settlement amount each shareholder has already withdrawn, per issuer. Non-decreasing.
    #[pallet::storage]
    #[pallet::getter(fn withdrawn_dividends)]
    pub type WithdrawnDividends<T: Config> =
        StorageDoubleMap<_, Blake2_128Concat, IssuerId, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

    /// Total settlement amount distributed by the issuer. Non-decreasing.
    #[pallet::storage]
    #[pallet::getter(fn total_dividends)]
    pub type TotalDividends<T: Config> = StorageMap<_, Blake2_128Concat, IssuerId, Balance, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn governance_votes)]
    pub type GovernanceVotes<T: Config> =
        StorageDoubleMap<_, Blake2_128Concat, IssuerId, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

    #[pallet::genesis_config]
    pub struct GenesisConfig<T: Config> {
        pub owner: Option<T::AccountId>,
    }

    #[cfg(feature = "std")]
    impl<T: Config> Default for GenesisConfig<T> {
        fn default() -> Self {
            Self { owner: None }
        }
    }

    #[pallet::genesis_build]
    impl<T: Config> GenesisBuild<T> for GenesisConfig<T> {
        fn build(&self) {
            if let Some(owner) = &self.owner {
                Owner::<T>::put(owner);
            }
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Register a company and create its security token.
        ///
        /// Allocates a fresh asset id, mints `initial_supply` to `treasury` and auto-whitelists
        /// the treasury account.
        ///
        /// Parameters:
        /// - `company_name`: unique company name, bounded by `StringLimit`
        /// - `token_symbol`: ticker symbol, bounded by `StringLimit`
        /// - `initial_supply`: security tokens minted to the treasury
        /// - `settlement_asset`: asset the issuer's book settles in
        /// - `treasury`: account receiving the minted supply and paying dividends
        ///
        /// Emits `ExchangeDeployed` and `TokenCreated` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::deploy_issuer())]
        pub fn deploy_issuer(
            origin: OriginFor<T>,
            company_name: Vec<u8>,
            token_symbol: Vec<u8>,
            initial_supply: Balance,
            settlement_asset: T::AssetId,
            treasury: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            let name = Self::to_bounded_name(company_name)?;
            let symbol = Self::to_bounded_name(token_symbol)?;

            ensure!(!initial_supply.is_zero(), Error::<T>::NonPositive);
            ensure!(!<CompanyIndex<T>>::contains_key(&name), Error::<T>::DuplicateCompany);

            let issuer_id = Self::get_next_issuer_id()?;
            let security_token = Self::get_next_token_id()?;

            T::Currency::deposit(security_token, &treasury, initial_supply)?;

            let details = IssuerDetails {
                company_name: name.clone(),
                token_symbol: symbol.clone(),
                security_token,
                settlement_asset,
                treasury: treasury.clone(),
            };

            <Issuers<T>>::insert(issuer_id, &details);
            <CompanyIndex<T>>::insert(&name, issuer_id);
            <TokenIndex<T>>::insert(security_token, issuer_id);
            <Whitelist<T>>::insert(issuer_id, &treasury, true);

            Self::deposit_event(Event::ExchangeDeployed {
                owner: who,
                issuer_id,
                company_name: name.clone(),
            });
            Self::deposit_event(Event::TokenCreated {
                security_token,
                name,
                symbol,
                initial_supply,
            });
            Ok(())
        }

        /// Set an investor's whitelist membership. Idempotent.
        ///
        /// Emits `ShareholderWhitelisted` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::whitelist_shareholder())]
        pub fn whitelist_shareholder(
            origin: OriginFor<T>,
            issuer_id: IssuerId,
            investor: T::AccountId,
            status: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            ensure!(<Issuers<T>>::contains_key(issuer_id), Error::<T>::UnknownIssuer);

            if status {
                <Whitelist<T>>::insert(issuer_id, &investor, true);
            } else {
                <Whitelist<T>>::remove(issuer_id, &investor);
            }

            Self::deposit_event(Event::ShareholderWhitelisted {
                issuer_id,
                investor,
                status,
            });
            Ok(())
        }

        /// Record a dividend distribution.
        ///
        /// No funds move here; the distribution must be covered by the treasury's settlement
        /// balance and shareholders pull their entitlement via `claim_dividend`.
        ///
        /// Emits `DividendsDistributed` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::distribute_dividends())]
        pub fn distribute_dividends(origin: OriginFor<T>, issuer_id: IssuerId, amount: Balance) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            let issuer = <Issuers<T>>::get(issuer_id).ok_or(Error::<T>::UnknownIssuer)?;

            ensure!(!amount.is_zero(), Error::<T>::NonPositive);
            ensure!(
                T::Currency::free_balance(issuer.settlement_asset, &issuer.treasury) >= amount,
                Error::<T>::InsufficientPool
            );

            <TotalDividends<T>>::try_mutate(issuer_id, |total| -> DispatchResult {
                *total = total.checked_add(amount).ok_or(Error::<T>::MathError)?;
                Ok(())
            })?;

            Self::deposit_event(Event::DividendsDistributed { issuer_id, amount });
            Ok(())
        }

        /// Pull the caller's untaken dividend entitlement.
        ///
        /// Entitlement is proportional to the caller's current holding:
        /// `total_distributed * balance / total_supply`, floored. The withdrawn amount per
        /// holder never decreases; shares transferred away before claiming forfeit the
        /// untaken portion for those shares.
        ///
        /// Emits `DividendClaimed` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::claim_dividend())]
        pub fn claim_dividend(origin: OriginFor<T>, issuer_id: IssuerId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let issuer = <Issuers<T>>::get(issuer_id).ok_or(Error::<T>::UnknownIssuer)?;

            ensure!(<Whitelist<T>>::get(issuer_id, &who), Error::<T>::NotWhitelisted);

            let balance = T::Currency::free_balance(issuer.security_token, &who);
            ensure!(!balance.is_zero(), Error::<T>::NoShares);

            let supply = T::Currency::total_issuance(issuer.security_token);
            let total = <TotalDividends<T>>::get(issuer_id);

            let entitlement_calculation = U256::from(total)
                .checked_mul(U256::from(balance))
                .and_then(|v| v.checked_div(U256::from(supply)))
                .ok_or(Error::<T>::MathError)?;
            let entitlement = Balance::try_from(entitlement_calculation).map_err(|_| Error::<T>::MathError)?;

            let withdrawn = <WithdrawnDividends<T>>::get(issuer_id, &who);
            ensure!(entitlement > withdrawn, Error::<T>::NothingToClaim);

            let delta = entitlement - withdrawn;
            <WithdrawnDividends<T>>::insert(issuer_id, &who, entitlement);
            T::Currency::transfer(issuer.settlement_asset, &issuer.treasury, &who, delta)?;

            Self::deposit_event(Event::DividendClaimed {
                issuer_id,
                shareholder: who,
                amount: delta,
            });
            Ok(())
        }

        /// Assign the caller's governance vote weight.
        ///
        /// The weight is assigned, not accumulated, and must be backed by the caller's current
        /// security-token balance.
        ///
        /// Emits `GovernanceVoteCasted` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::cast_vote())]
        pub fn cast_vote(origin: OriginFor<T>, issuer_id: IssuerId, votes: Balance) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let issuer = <Issuers<T>>::get(issuer_id).ok_or(Error::<T>::UnknownIssuer)?;

            ensure!(<Whitelist<T>>::get(issuer_id, &who), Error::<T>::NotWhitelisted);
            ensure!(
                T::Currency::free_balance(issuer.security_token, &who) >= votes,
                Error::<T>::NoShares
            );

            <GovernanceVotes<T>>::insert(issuer_id, &who, votes);

            Self::deposit_event(Event::GovernanceVoteCasted {
                issuer_id,
                voter: who,
                votes,
            });
            Ok(())
        }

        /// Bootstrap hook minting the issuer treasury's first settlement balance.
        ///
        /// Only usable while the treasury settlement balance is zero, for venues where the
        /// settlement asset is funded outside the ledger.
        ///
        /// Emits `TreasuryInitialized` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::set_initial_treasury_balance())]
        pub fn set_initial_treasury_balance(
            origin: OriginFor<T>,
            issuer_id: IssuerId,
            amount: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            let issuer = <Issuers<T>>::get(issuer_id).ok_or(Error::<T>::UnknownIssuer)?;

            ensure!(!amount.is_zero(), Error::<T>::NonPositive);
            ensure!(
                T::Currency::free_balance(issuer.settlement_asset, &issuer.treasury).is_zero(),
                Error::<T>::AlreadyInitialized
            );

            T::Currency::deposit(issuer.settlement_asset, &issuer.treasury, amount)?;

            Self::deposit_event(Event::TreasuryInitialized { issuer_id, amount });
            Ok(())
        }

        /// Hand the venue owner capability to another account.
        ///
        /// Emits `OwnershipTransferred` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            <Owner<T>>::put(&new_owner);

            Self::deposit_event(Event::OwnershipTransferred {
                previous: who,
                new: new_owner,
            });
            Ok(())
        }
    }
}

impl<T: Config> Pallet<T> {
    fn ensure_owner(who: &T::AccountId) -> DispatchResult {
        ensure!(<Owner<T>>::get().as_ref() == Some(who), Error::<T>::OwnerOnly);
        Ok(())
    }

    pub fn to_bounded_name(name: Vec<u8>) -> Result<BoundedName<T>, Error<T>> {
        name.try_into().map_err(|_| Error::<T>::TooLong)
    }

    fn get_next_issuer_id() -> Result<IssuerId, DispatchError> {
        <IssuerSequencer<T>>::try_mutate(|current_id| {
            *current_id = current_id.checked_add(1).ok_or(Error::<T>::IssuerIdOutOfBound)?;
            Ok(*current_id)
        })
    }

    fn get_next_token_id() -> Result<T::AssetId, DispatchError> {
        <NextTokenId<T>>::try_mutate(|maybe_id| {
            let id = maybe_id.unwrap_or_else(T::SequentialIdStart::get);
            let next = id.checked_add(&One::one()).ok_or(Error::<T>::TokenIdOutOfBound)?;
            *maybe_id = Some(next);
            Ok(id)
        })
    }

    /// All registered issuer ids.
    pub fn issuer_ids() -> Vec<IssuerId> {
        <Issuers<T>>::iter_keys().collect()
    }

    /// Resolve an issuer by its registered company name.
    pub fn issuer_by_company(name: Vec<u8>) -> Option<IssuerId> {
        let bounded = Self::to_bounded_name(name).ok()?;
        <CompanyIndex<T>>::get(bounded)
    }

    /// Resolve an issuer by its security token.
    pub fn issuer_by_token(security_token: T::AssetId) -> Option<IssuerId> {
        <TokenIndex<T>>::get(security_token)
    }
}

impl<T: Config> bourse_traits::IssuerRegistry<T::AccountId, T::AssetId> for Pallet<T> {
    fn exists(security_token: T::AssetId) -> bool {
        <TokenIndex<T>>::contains_key(security_token)
    }

    fn is_whitelisted(security_token: T::AssetId, who: &T::AccountId) -> bool {
        match <TokenIndex<T>>::get(security_token) {
            Some(issuer_id) => <Whitelist<T>>::get(issuer_id, who),
            None => false,
        }
    }

    fn settlement_asset(security_token: T::AssetId) -> Option<T::AssetId> {
        let issuer_id = <TokenIndex<T>>::get(security_token)?;
        <Issuers<T>>::get(issuer_id).map(|issuer| issuer.settlement_asset)
    }
}

impl<T: Config> VenueAuthority<T::AccountId> for Pallet<T> {
    fn is_owner(who: &T::AccountId) -> bool {
        <Owner<T>>::get().as_ref() == Some(who)
    }
}
