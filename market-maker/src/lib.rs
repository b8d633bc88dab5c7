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
// # Market maker pallet
// ## General description
// This pallet rewards liquidity providers for quoting tight two-sided markets in security
// tokens. The venue owner creates a per-token incentive program; providers lock settlement
// collateral and earn a daily reward proportional to their lock while they keep both the best
// bid and the best ask within the program's spread and size obligations.
//
// ## Notes
// The spread obligation is a read-only predicate over the order book: the provider must own the
// best bid and the best ask, both with at least `min_order_size` remaining, and the spread
// `(ask - bid) * 10000 / bid` must be within `max_spread_bps`. Rewards are per-claim snapshots
// of `locked * daily_rate_bps / 10000`, gated by a claim cooldown rather than streamed.
//
// Rewards are paid from the pallet account, which also escrows the collateral; the owner tops
// up the reward float with `fund_rewards`.
//
// ## Dispatchable functions
// * `register_provider` - join the provider registry.
// * `deactivate_provider` - leave the program; locked collateral stays withdrawable.
// * `create_program` - venue owner: create the incentive program for a token.
// * `toggle_program` - venue owner: pause or resume a program.
// * `lock_collateral` - lock settlement collateral towards a program.
// * `release_collateral` - withdraw collateral once the program is over.
// * `claim_rewards` - claim the current reward snapshot.
// * `fund_rewards` - venue owner: top up the reward float.

#![cfg_attr(not(feature = "std"), no_std)]

use codec::HasCompact;
use frame_support::{pallet_prelude::*, require_transactional, traits::UnixTime, PalletId};
use frame_system::{ensure_signed, pallet_prelude::OriginFor};
use orml_traits::MultiCurrency;
use sp_runtime::traits::{AccountIdConversion, Zero};

use bourse_traits::{Balance, IssuerRegistry, OrderBookInspect, VenueAuthority};

#[cfg(test)]
mod tests;

mod types;

pub mod weights;

use weights::WeightInfo;

// Re-export pallet items so that they can be accessed from the crate namespace.
pub use pallet::*;

pub use crate::types::{IncentiveProgram, Moment, Provider, BPS_DENOMINATOR, SECONDS_PER_DAY};

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
            + TypeInfo;

        /// Multi currency ledger holding the settlement asset.
        type Currency: MultiCurrency<Self::AccountId, CurrencyId = Self::AssetId, Balance = Balance>;

        /// Issuer directory used to resolve tokens and their settlement asset.
        type Issuers: IssuerRegistry<Self::AccountId, Self::AssetId>;

        /// Order book queried by the spread-obligation predicate.
        type OrderBook: OrderBookInspect<Self::AccountId, Self::AssetId>;

        /// Venue owner capability gating program administration.
        type Authority: VenueAuthority<Self::AccountId>;

        /// Wall clock for program lifetimes and claim cooldowns.
        type TimeProvider: UnixTime;

        type Event: From<Event<Self>> + IsType<<Self as frame_system::Config>::Event>;

        /// Minimum seconds between reward claims per provider and token.
        #[pallet::constant]
        type ClaimCooldown: Get<Moment>;

        /// Pallet id deriving the collateral and reward account.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Weight information for the extrinsics.
        type WeightInfo: WeightInfo;
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A liquidity provider has registered
        LiquidityProviderRegistered { provider: T::AccountId },
        /// A liquidity provider has been deactivated
        LiquidityProviderDeactivated { provider: T::AccountId },
        /// An incentive program has been created
        IncentiveProgramCreated {
            security_token: T::AssetId,
            daily_rate_bps: u32,
            end_time: Moment,
        },
        /// An incentive program has been paused or resumed
        IncentiveProgramUpdated { security_token: T::AssetId, active: bool },
        /// Collateral has been locked towards a program
        CollateralLocked {
            provider: T::AccountId,
            security_token: T::AssetId,
            amount: Balance,
        },
        /// Collateral has been released back to the provider
        CollateralReleased {
            provider: T::AccountId,
            security_token: T::AssetId,
            amount: Balance,
        },
        /// A reward snapshot has been paid out
        RewardsPaid {
            provider: T::AccountId,
            security_token: T::AssetId,
            amount: Balance,
        },
        /// The reward float has been topped up
        RewardsFunded { security_token: T::AssetId, amount: Balance },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The caller is not the venue owner
        OwnerOnly,
        /// The provider is already registered
        AlreadyRegistered,
        /// The caller is not a registered, active provider
        NotActiveProvider,
        /// The asset is not a registered security token
        UnknownToken,
        /// No incentive program exists for the token
        UnknownProgram,
        /// An incentive program already exists for the token
        ProgramAlreadyExists,
        /// The program is paused
        ProgramInactive,
        /// The program has passed its end time
        ProgramEnded,
        /// The program is still running
        ProgramStillActive,
        /// The provider has no collateral locked for the token
        NoCollateral,
        /// The lock is below the program's minimum lockup
        LockupTooSmall,
        /// The daily reward rate is outside (0, 10000] basis points
        InvalidRewardRate,
        /// Amount must be positive
        NonPositive,
        /// The current reward snapshot is zero
        NothingToClaim,
        /// The claim cooldown has not elapsed
        ClaimTooSoon,
        /// Error with math calculations
        MathError,
    }

    #[pallet::storage]
    #[pallet::getter(fn providers)]
    pub type Providers<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, Provider<Moment>, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn programs)]
    pub type Programs<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AssetId, IncentiveProgram<Moment>, OptionQuery>;

    /// Collateral locked per token and provider.
    #[pallet::storage]
    #[pallet::getter(fn locked)]
    pub type Locked<T: Config> =
        StorageDoubleMap<_, Blake2_128Concat, T::AssetId, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

    /// Rewards ever paid out per token.
    #[pallet::storage]
    #[pallet::getter(fn total_rewards)]
    pub type TotalRewards<T: Config> = StorageMap<_, Blake2_128Concat, T::AssetId, Balance, ValueQuery>;

    /// Last claim time per token and provider.
    #[pallet::storage]
    #[pallet::getter(fn last_claim)]
    pub type LastClaim<T: Config> =
        StorageDoubleMap<_, Blake2_128Concat, T::AssetId, Blake2_128Concat, T::AccountId, Moment, ValueQuery>;

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Join the provider registry.
        ///
        /// Emits `LiquidityProviderRegistered` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::register_provider())]
        pub fn register_provider(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(!<Providers<T>>::contains_key(&who), Error::<T>::AlreadyRegistered);

            <Providers<T>>::insert(&who, Provider::new(Self::now()));

            Self::deposit_event(Event::LiquidityProviderRegistered { provider: who });
            Ok(())
        }

        /// Deactivate the caller's provider record. Locked collateral stays withdrawable
        /// through `release_collateral`.
        ///
        /// Emits `LiquidityProviderDeactivated` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::deactivate_provider())]
        pub fn deactivate_provider(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            <Providers<T>>::try_mutate(&who, |maybe_provider| -> DispatchResult {
                let provider = maybe_provider.as_mut().ok_or(Error::<T>::NotActiveProvider)?;
                provider.active = false;
                Ok(())
            })?;

            Self::deposit_event(Event::LiquidityProviderDeactivated { provider: who });
            Ok(())
        }

        /// Create the incentive program for a token. Venue owner only.
        ///
        /// Parameters:
        /// - `max_spread_bps`: widest qualifying spread, in basis points of the bid
        /// - `min_order_size`: minimum best bid/ask remaining size, token base units
        /// - `min_lockup`: minimum collateral lock, settlement base units
        /// - `daily_rate_bps`: daily reward in basis points of locked collateral, in (0, 10000]
        /// - `duration_days`: program runtime from now
        ///
        /// Emits `IncentiveProgramCreated` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::create_program())]
        pub fn create_program(
            origin: OriginFor<T>,
            security_token: T::AssetId,
            max_spread_bps: u32,
            min_order_size: Balance,
            min_lockup: Balance,
            daily_rate_bps: u32,
            duration_days: u32,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(T::Authority::is_owner(&who), Error::<T>::OwnerOnly);
            ensure!(T::Issuers::exists(security_token), Error::<T>::UnknownToken);
            ensure!(
                !<Programs<T>>::contains_key(security_token),
                Error::<T>::ProgramAlreadyExists
            );
            ensure!(daily_rate_bps > 0 && duration_days > 0, Error::<T>::NonPositive);
            ensure!(
                daily_rate_bps as Balance <= BPS_DENOMINATOR,
                Error::<T>::InvalidRewardRate
            );

            let end_time = Self::now()
                .checked_add(SECONDS_PER_DAY.checked_mul(duration_days.into()).ok_or(Error::<T>::MathError)?)
                .ok_or(Error::<T>::MathError)?;

            <Programs<T>>::insert(
                security_token,
                IncentiveProgram {
                    max_spread_bps,
                    min_order_size,
                    min_lockup,
                    daily_rate_bps,
                    end_time,
                    active: true,
                },
            );

            Self::deposit_event(Event::IncentiveProgramCreated {
                security_token,
                daily_rate_bps,
                end_time,
            });
            Ok(())
        }

        /// Pause or resume a program. Venue owner only.
        ///
        /// Emits `IncentiveProgramUpdated` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::toggle_program())]
        pub fn toggle_program(origin: OriginFor<T>, security_token: T::AssetId, active: bool) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(T::Authority::is_owner(&who), Error::<T>::OwnerOnly);

            <Programs<T>>::try_mutate(security_token, |maybe_program| -> DispatchResult {
                let program = maybe_program.as_mut().ok_or(Error::<T>::UnknownProgram)?;
                program.active = active;
                Ok(())
            })?;

            Self::deposit_event(Event::IncentiveProgramUpdated { security_token, active });
            Ok(())
        }

        /// Lock settlement collateral towards a running program.
        ///
        /// Emits `CollateralLocked` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::lock_collateral())]
        pub fn lock_collateral(origin: OriginFor<T>, security_token: T::AssetId, amount: Balance) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let provider = <Providers<T>>::get(&who).ok_or(Error::<T>::NotActiveProvider)?;
            ensure!(provider.active, Error::<T>::NotActiveProvider);

            let program = <Programs<T>>::get(security_token).ok_or(Error::<T>::UnknownProgram)?;
            ensure!(program.active, Error::<T>::ProgramInactive);
            ensure!(Self::now() < program.end_time, Error::<T>::ProgramEnded);
            ensure!(amount >= program.min_lockup, Error::<T>::LockupTooSmall);

            let settlement_asset = T::Issuers::settlement_asset(security_token).ok_or(Error::<T>::UnknownToken)?;

            Self::deposit_collateral(&who, security_token, settlement_asset, amount)?;

            Self::deposit_event(Event::CollateralLocked {
                provider: who,
                security_token,
                amount,
            });
            Ok(())
        }

        /// Withdraw the caller's collateral once the program has ended or been paused.
        ///
        /// Emits `CollateralReleased` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::release_collateral())]
        pub fn release_collateral(origin: OriginFor<T>, security_token: T::AssetId) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let locked = <Locked<T>>::get(security_token, &who);
            ensure!(!locked.is_zero(), Error::<T>::NoCollateral);

            let program = <Programs<T>>::get(security_token).ok_or(Error::<T>::UnknownProgram)?;
            ensure!(
                !program.active || Self::now() >= program.end_time,
                Error::<T>::ProgramStillActive
            );

            let settlement_asset = T::Issuers::settlement_asset(security_token).ok_or(Error::<T>::UnknownToken)?;

            Self::withdraw_collateral(&who, security_token, settlement_asset, locked)?;

            Self::deposit_event(Event::CollateralReleased {
                provider: who,
                security_token,
                amount: locked,
            });
            Ok(())
        }

        /// Claim the current reward snapshot: `locked * daily_rate_bps / 10000` while the
        /// spread obligation holds, gated by `ClaimCooldown`.
        ///
        /// Emits `RewardsPaid` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::claim_rewards())]
        pub fn claim_rewards(origin: OriginFor<T>, security_token: T::AssetId) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let mut provider = <Providers<T>>::get(&who).ok_or(Error::<T>::NotActiveProvider)?;
            ensure!(provider.active, Error::<T>::NotActiveProvider);

            let program = <Programs<T>>::get(security_token).ok_or(Error::<T>::UnknownProgram)?;
            ensure!(program.active, Error::<T>::ProgramInactive);

            let now = Self::now();
            ensure!(now < program.end_time, Error::<T>::ProgramEnded);
            ensure!(!<Locked<T>>::get(security_token, &who).is_zero(), Error::<T>::NoCollateral);
            ensure!(
                now >= <LastClaim<T>>::get(security_token, &who).saturating_add(T::ClaimCooldown::get()),
                Error::<T>::ClaimTooSoon
            );

            let reward = Self::daily_reward(&who, security_token);
            ensure!(!reward.is_zero(), Error::<T>::NothingToClaim);

            provider.cumulative_rewards = provider
                .cumulative_rewards
                .checked_add(reward)
                .ok_or(Error::<T>::MathError)?;
            <Providers<T>>::insert(&who, provider);
            <TotalRewards<T>>::mutate(security_token, |total| *total = total.saturating_add(reward));
            <LastClaim<T>>::insert(security_token, &who, now);

            let settlement_asset = T::Issuers::settlement_asset(security_token).ok_or(Error::<T>::UnknownToken)?;
            T::Currency::transfer(settlement_asset, &Self::account_id(), &who, reward)?;

            Self::deposit_event(Event::RewardsPaid {
                provider: who,
                security_token,
                amount: reward,
            });
            Ok(())
        }

        /// Top up the reward float for a program. Venue owner only.
        ///
        /// Emits `RewardsFunded` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::fund_rewards())]
        pub fn fund_rewards(origin: OriginFor<T>, security_token: T::AssetId, amount: Balance) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(T::Authority::is_owner(&who), Error::<T>::OwnerOnly);
            ensure!(<Programs<T>>::contains_key(security_token), Error::<T>::UnknownProgram);
            ensure!(!amount.is_zero(), Error::<T>::NonPositive);

            let settlement_asset = T::Issuers::settlement_asset(security_token).ok_or(Error::<T>::UnknownToken)?;
            T::Currency::transfer(settlement_asset, &who, &Self::account_id(), amount)?;

            Self::deposit_event(Event::RewardsFunded { security_token, amount });
            Ok(())
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The pallet account escrowing collateral and holding the reward float.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    fn now() -> Moment {
        T::TimeProvider::now().as_secs()
    }

    #[require_transactional]
    fn deposit_collateral(
        who: &T::AccountId,
        security_token: T::AssetId,
        settlement_asset: T::AssetId,
        amount: Balance,
    ) -> DispatchResult {
        T::Currency::transfer(settlement_asset, who, &Self::account_id(), amount)?;
        <Locked<T>>::try_mutate(security_token, who, |locked| -> DispatchResult {
            *locked = locked.checked_add(amount).ok_or(Error::<T>::MathError)?;
            Ok(())
        })?;
        <Providers<T>>::try_mutate(who, |maybe_provider| -> DispatchResult {
            let provider = maybe_provider.as_mut().ok_or(Error::<T>::NotActiveProvider)?;
            provider.total_locked = provider.total_locked.checked_add(amount).ok_or(Error::<T>::MathError)?;
            Ok(())
        })
    }

    #[require_transactional]
    fn withdraw_collateral(
        who: &T::AccountId,
        security_token: T::AssetId,
        settlement_asset: T::AssetId,
        amount: Balance,
    ) -> DispatchResult {
        <Locked<T>>::remove(security_token, who);
        <Providers<T>>::try_mutate(who, |maybe_provider| -> DispatchResult {
            let provider = maybe_provider.as_mut().ok_or(Error::<T>::NotActiveProvider)?;
            provider.total_locked = provider.total_locked.checked_sub(amount).ok_or(Error::<T>::MathError)?;
            Ok(())
        })?;
        T::Currency::transfer(settlement_asset, &Self::account_id(), who, amount)
    }

    /// The spread obligation: the provider owns both the best bid and the best ask, both carry
    /// at least the program's minimum size, and the spread is within the program bound.
    pub fn meets_spread(provider: &T::AccountId, security_token: T::AssetId) -> bool {
        if !T::Issuers::exists(security_token) {
            return false;
        }
        let program = match <Programs<T>>::get(security_token) {
            Some(program) => program,
            None => return false,
        };

        let (bid_price, bid_size) = T::OrderBook::best_bid(security_token);
        let (ask_price, ask_size) = T::OrderBook::best_ask(security_token);
        if bid_price.is_zero() || ask_price.is_zero() {
            return false;
        }

        let has_bid = T::OrderBook::has_active_order(provider, security_token, bid_price, true);
        let has_ask = T::OrderBook::has_active_order(provider, security_token, ask_price, false);

        let spread_bps = ask_price.saturating_sub(bid_price).saturating_mul(BPS_DENOMINATOR) / bid_price;

        has_bid
            && has_ask
            && bid_size >= program.min_order_size
            && ask_size >= program.min_order_size
            && spread_bps <= program.max_spread_bps as Balance
    }

    /// Reward snapshot for one claim; zero while the spread obligation is unmet.
    pub fn daily_reward(provider: &T::AccountId, security_token: T::AssetId) -> Balance {
        if !Self::meets_spread(provider, security_token) {
            return 0;
        }
        let program = match <Programs<T>>::get(security_token) {
            Some(program) => program,
            None => return 0,
        };
        <Locked<T>>::get(security_token, provider).saturating_mul(program.daily_rate_bps as Balance) / BPS_DENOMINATOR
    }
}
