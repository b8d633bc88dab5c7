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
// # Order book pallet
// ## General description
// This pallet keeps a continuous double-auction book per security token and matches incoming
// orders against the opposite side. Bids are held in descending and asks in ascending price
// order; orders at equal prices keep their insertion order. Submitting escrows the full
// counter-value into the pallet account (settlement funds for a buy, tokens for a sell) and the
// matcher settles each fill out of that escrow.
//
// ## Notes
// A matched pair executes at the sell order's price, so a buyer crossing the spread pays less
// than their limit; the difference is released from escrow back to the buyer on each fill. Stale
// orders (older than `MaxOrderAge`) are cancelled and refunded by the matcher when it walks over
// them, and can be reaped by anyone via `cancel_expired_order`.
//
// A flat fee in basis points (at most `MAX_TRADING_FEE_BPS`) is carved out of the seller's
// proceeds and routed to the configured fee collector.
//
// ## Dispatchable functions
// * `submit_buy_order` - escrow settlement funds, rest a bid and run the matcher.
// * `submit_sell_order` - escrow tokens, rest an ask and run the matcher.
// * `cancel_order` - cancel an open order of the caller and refund its remainder.
// * `cancel_expired_order` - cancel any order past `MaxOrderAge` and refund its maker.
// * `set_trading_fee` - venue owner: set the fee rate in basis points.
// * `set_fee_collector` - venue owner: set the fee destination account.

#![cfg_attr(not(feature = "std"), no_std)]

use codec::HasCompact;
use frame_support::{pallet_prelude::*, require_transactional, traits::UnixTime, PalletId};
use frame_system::{ensure_signed, pallet_prelude::OriginFor};
use orml_traits::MultiCurrency;
use sp_runtime::traits::{AccountIdConversion, Zero};
use sp_std::vec::Vec;

use bourse_traits::{Balance, IssuerRegistry, OrderBookInspect, VenueAuthority};

#[cfg(test)]
mod tests;

mod types;

pub mod weights;

use weights::WeightInfo;

// Re-export pallet items so that they can be accessed from the crate namespace.
pub use pallet::*;

pub use crate::types::{
    Moment, Order, OrderId, OrderSide, OrderStatus, BPS_DENOMINATOR, DEFAULT_TRADING_FEE_BPS, MAX_SAFE_VALUE,
    MAX_TRADING_FEE_BPS, PRICE_SCALE,
};

pub type OrderOf<T> = Order<<T as frame_system::Config>::AccountId, <T as Config>::AssetId>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::pallet]
    #[pallet::generate_store(pub(crate) trait Store)]
    #[pallet::without_storage_info]
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

        /// Multi currency ledger holding security tokens and the settlement asset.
        type Currency: MultiCurrency<Self::AccountId, CurrencyId = Self::AssetId, Balance = Balance>;

        /// Issuer directory used for whitelist checks and settlement-asset resolution.
        type Issuers: IssuerRegistry<Self::AccountId, Self::AssetId>;

        /// Venue owner capability gating the fee administration calls.
        type Authority: VenueAuthority<Self::AccountId>;

        /// Wall clock used to stamp and expire orders.
        type TimeProvider: UnixTime;

        type Event: From<Event<Self>> + IsType<<Self as frame_system::Config>::Event>;

        /// Seconds after which an open order can be reaped by anyone.
        #[pallet::constant]
        type MaxOrderAge: Get<Moment>;

        /// Pallet id deriving the escrow account.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Weight information for the extrinsics.
        type WeightInfo: WeightInfo;
    }

    #[pallet::event]
    #[pallet::generate_deposit(pub(crate) fn deposit_event)]
    pub enum Event<T: Config> {
        /// An order has been accepted onto the book
        OrderCreated {
            order_id: OrderId,
            maker: T::AccountId,
            security_token: T::AssetId,
            amount: Balance,
            price: Balance,
            side: OrderSide,
        },
        /// A resting order has been (partially) filled by a taker
        OrderFilled {
            order_id: OrderId,
            maker: T::AccountId,
            taker: T::AccountId,
            amount: Balance,
            price: Balance,
        },
        /// An order has been cancelled and its remainder refunded
        OrderCancelled { order_id: OrderId },
        /// Trading fees have been routed to the collector
        FeesCollected {
            asset: T::AssetId,
            collector: T::AccountId,
            amount: Balance,
        },
        /// The trading fee rate has been updated
        TradingFeeUpdated { fee_bps: u32 },
        /// The fee collector account has been updated
        FeeCollectorUpdated { collector: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The caller is not the venue owner
        OwnerOnly,
        /// The caller is not the order maker
        NotOwner,
        /// The caller is not whitelisted with the token's issuer
        NotWhitelisted,
        /// The asset is not a registered security token
        UnknownToken,
        /// Order cannot be found
        UnknownOrder,
        /// Order is not open
        NotOpen,
        /// Order has not exceeded the maximum order age
        NotExpired,
        /// Amount and price must be positive
        InvalidAmount,
        /// Amount or price exceeds the 2^63 - 1 interoperability ceiling
        AmountTooLarge,
        /// Trading fee above `MAX_TRADING_FEE_BPS`
        FeeTooHigh,
        /// Order id sequence exhausted
        OrderIdOutOfBound,
        /// Error with math calculations
        MathError,
    }

    /// Id sequencer for orders. Ids start at 1.
    #[pallet::storage]
    #[pallet::getter(fn last_order_id)]
    pub type OrderSequencer<T: Config> = StorageValue<_, OrderId, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn orders)]
    pub type Orders<T: Config> = StorageMap<_, Blake2_128Concat, OrderId, OrderOf<T>, OptionQuery>;

    /// Bid queue per token, descending by price, insertion order within a level.
    #[pallet::storage]
    #[pallet::getter(fn bids)]
    pub type Bids<T: Config> = StorageMap<_, Blake2_128Concat, T::AssetId, Vec<OrderId>, ValueQuery>;

    /// Ask queue per token, ascending by price, insertion order within a level.
    #[pallet::storage]
    #[pallet::getter(fn asks)]
    pub type Asks<T: Config> = StorageMap<_, Blake2_128Concat, T::AssetId, Vec<OrderId>, ValueQuery>;

    /// All orders ever placed by an account, open or not.
    #[pallet::storage]
    #[pallet::getter(fn user_orders)]
    pub type UserOrders<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, Vec<OrderId>, ValueQuery>;

    #[pallet::type_value]
    pub fn DefaultTradingFee<T: Config>() -> u32 {
        DEFAULT_TRADING_FEE_BPS
    }

    /// Trading fee in basis points, taken from the seller's proceeds.
    #[pallet::storage]
    #[pallet::getter(fn trading_fee)]
    pub type TradingFee<T: Config> = StorageValue<_, u32, ValueQuery, DefaultTradingFee<T>>;

    /// Destination of trading fees. No fee is levied while unset.
    #[pallet::storage]
    #[pallet::getter(fn fee_collector)]
    pub type FeeCollector<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Submit a buy order.
        ///
        /// Escrows `amount * price / 10^6` settlement units from the caller, rests the order in
        /// the bid queue and matches it against the ask side.
        ///
        /// Parameters:
        /// - `security_token`: token to buy
        /// - `amount`: quantity in token base units
        /// - `price`: limit price in settlement base units per 10^6 token base units
        ///
        /// Emits `OrderCreated`, plus `OrderFilled` per matched pair.
        #[pallet::weight(<T as Config>::WeightInfo::submit_buy_order())]
        pub fn submit_buy_order(
            origin: OriginFor<T>,
            security_token: T::AssetId,
            amount: Balance,
            price: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_submit_order(who, security_token, amount, price, OrderSide::Buy)
        }

        /// Submit a sell order.
        ///
        /// Escrows `amount` security tokens from the caller, rests the order in the ask queue
        /// and matches it against the bid side.
        ///
        /// Emits `OrderCreated`, plus `OrderFilled` per matched pair.
        #[pallet::weight(<T as Config>::WeightInfo::submit_sell_order())]
        pub fn submit_sell_order(
            origin: OriginFor<T>,
            security_token: T::AssetId,
            amount: Balance,
            price: Balance,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_submit_order(who, security_token, amount, price, OrderSide::Sell)
        }

        /// Cancel an open order of the caller.
        ///
        /// Refunds the unfilled remainder from escrow: `remaining * price / 10^6` settlement
        /// units for a buy, `remaining` tokens for a sell.
        ///
        /// Emits `OrderCancelled` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::cancel_order())]
        pub fn cancel_order(origin: OriginFor<T>, order_id: OrderId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            <Orders<T>>::try_mutate(order_id, |maybe_order| -> DispatchResult {
                let order = maybe_order.as_mut().ok_or(Error::<T>::UnknownOrder)?;

                ensure!(order.maker == who, Error::<T>::NotOwner);
                ensure!(order.is_open(), Error::<T>::NotOpen);

                Self::do_cancel(order_id, order)
            })
        }

        /// Cancel any order older than `MaxOrderAge`, refunding its maker. Open to every caller.
        ///
        /// Emits `OrderCancelled` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::cancel_expired_order())]
        pub fn cancel_expired_order(origin: OriginFor<T>, order_id: OrderId) -> DispatchResult {
            let _ = ensure_signed(origin)?;
            <Orders<T>>::try_mutate(order_id, |maybe_order| -> DispatchResult {
                let order = maybe_order.as_mut().ok_or(Error::<T>::UnknownOrder)?;

                ensure!(order.is_open(), Error::<T>::NotOpen);
                ensure!(Self::is_expired(order, Self::now()), Error::<T>::NotExpired);

                Self::do_cancel(order_id, order)
            })
        }

        /// Set the trading fee rate. Venue owner only; capped at `MAX_TRADING_FEE_BPS`.
        ///
        /// Emits `TradingFeeUpdated` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::set_trading_fee())]
        pub fn set_trading_fee(origin: OriginFor<T>, fee_bps: u32) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(T::Authority::is_owner(&who), Error::<T>::OwnerOnly);
            ensure!(fee_bps <= MAX_TRADING_FEE_BPS, Error::<T>::FeeTooHigh);

            <TradingFee<T>>::put(fee_bps);

            Self::deposit_event(Event::TradingFeeUpdated { fee_bps });
            Ok(())
        }

        /// Set the fee collector account. Venue owner only.
        ///
        /// Emits `FeeCollectorUpdated` when successful.
        #[pallet::weight(<T as Config>::WeightInfo::set_fee_collector())]
        pub fn set_fee_collector(origin: OriginFor<T>, collector: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(T::Authority::is_owner(&who), Error::<T>::OwnerOnly);

            <FeeCollector<T>>::put(&collector);

            Self::deposit_event(Event::FeeCollectorUpdated { collector });
            Ok(())
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The escrow account holding all resting counter-value.
    pub fn escrow_account() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    fn now() -> Moment {
        T::TimeProvider::now().as_secs()
    }

    fn is_expired(order: &OrderOf<T>, now: Moment) -> bool {
        now > order.created_at.saturating_add(T::MaxOrderAge::get())
    }

    /// Settlement cost of `quantity` at `price`, floored.
    pub fn quote_cost(quantity: Balance, price: Balance) -> Result<Balance, Error<T>> {
        quantity
            .checked_mul(price)
            .map(|value| value / PRICE_SCALE)
            .ok_or(Error::<T>::MathError)
    }

    fn get_next_order_id() -> Result<OrderId, DispatchError> {
        <OrderSequencer<T>>::try_mutate(|current_id| {
            *current_id = current_id.checked_add(1).ok_or(Error::<T>::OrderIdOutOfBound)?;
            Ok(*current_id)
        })
    }

    #[require_transactional]
    fn do_submit_order(
        who: T::AccountId,
        security_token: T::AssetId,
        amount: Balance,
        price: Balance,
        side: OrderSide,
    ) -> DispatchResult {
        ensure!(!amount.is_zero() && !price.is_zero(), Error::<T>::InvalidAmount);
        ensure!(
            amount <= MAX_SAFE_VALUE && price <= MAX_SAFE_VALUE,
            Error::<T>::AmountTooLarge
        );

        let settlement_asset = T::Issuers::settlement_asset(security_token).ok_or(Error::<T>::UnknownToken)?;
        ensure!(
            T::Issuers::is_whitelisted(security_token, &who),
            Error::<T>::NotWhitelisted
        );

        let escrow = Self::escrow_account();
        match side {
            OrderSide::Buy => {
                let cost = Self::quote_cost(amount, price)?;
                T::Currency::transfer(settlement_asset, &who, &escrow, cost)?;
            }
            OrderSide::Sell => {
                T::Currency::transfer(security_token, &who, &escrow, amount)?;
            }
        }

        let order_id = Self::get_next_order_id()?;
        let order = Order::new(who.clone(), security_token, amount, price, side, Self::now());

        <Orders<T>>::insert(order_id, &order);
        <UserOrders<T>>::append(&who, order_id);
        Self::insert_into_book(security_token, order_id, price, side);

        Self::deposit_event(Event::OrderCreated {
            order_id,
            maker: who,
            security_token,
            amount,
            price,
            side,
        });

        Self::match_order(order_id)
    }

    /// Insert at the first position where the resting price is strictly worse, so equal-priced
    /// orders keep their arrival order.
    fn insert_into_book(security_token: T::AssetId, order_id: OrderId, price: Balance, side: OrderSide) {
        let mut book = match side {
            OrderSide::Buy => <Bids<T>>::get(security_token),
            OrderSide::Sell => <Asks<T>>::get(security_token),
        };

        let mut position = book.len();
        for (index, resting_id) in book.iter().enumerate() {
            if let Some(resting) = <Orders<T>>::get(resting_id) {
                let goes_before = match side {
                    OrderSide::Buy => resting.price < price,
                    OrderSide::Sell => resting.price > price,
                };
                if goes_before {
                    position = index;
                    break;
                }
            }
        }
        book.insert(position, order_id);

        match side {
            OrderSide::Buy => <Bids<T>>::insert(security_token, book),
            OrderSide::Sell => <Asks<T>>::insert(security_token, book),
        }
    }

    fn remove_from_book(security_token: T::AssetId, side: OrderSide, order_id: OrderId) {
        let mutate = |book: &mut Vec<OrderId>| book.retain(|id| *id != order_id);
        match side {
            OrderSide::Buy => <Bids<T>>::mutate(security_token, mutate),
            OrderSide::Sell => <Asks<T>>::mutate(security_token, mutate),
        }
    }

    /// Walk the opposite side in book order and fill the taker until it is exhausted or no
    /// further price cross exists. Stale counter-orders encountered on the way are cancelled
    /// and refunded.
    fn match_order(taker_id: OrderId) -> DispatchResult {
        let mut taker = <Orders<T>>::get(taker_id).ok_or(Error::<T>::UnknownOrder)?;
        let security_token = taker.security_token;
        let settlement_asset = T::Issuers::settlement_asset(security_token).ok_or(Error::<T>::UnknownToken)?;
        let now = Self::now();

        let counter_ids = match taker.side {
            OrderSide::Buy => <Asks<T>>::get(security_token),
            OrderSide::Sell => <Bids<T>>::get(security_token),
        };
        let mut consumed: Vec<OrderId> = Vec::new();

        for counter_id in counter_ids.iter() {
            if taker.remaining().is_zero() {
                break;
            }

            let mut counter = match <Orders<T>>::get(counter_id) {
                Some(order) => order,
                None => {
                    consumed.push(*counter_id);
                    continue;
                }
            };

            if !counter.is_open() {
                consumed.push(*counter_id);
                continue;
            }

            if Self::is_expired(&counter, now) {
                log::debug!(target: "order-book", "expiring stale order {} during matching", counter_id);
                Self::expire_order(settlement_asset, *counter_id, &mut counter)?;
                consumed.push(*counter_id);
                continue;
            }

            // The side list is price-ordered, so the first counter-order that fails the cross
            // check ends the walk; everything behind it is priced strictly worse.
            let crosses = match taker.side {
                OrderSide::Buy => counter.price <= taker.price,
                OrderSide::Sell => counter.price >= taker.price,
            };
            if !crosses {
                break;
            }

            // Self-trade prevention: both orders stay on the book untouched.
            if counter.maker == taker.maker {
                continue;
            }

            let quantity = taker.remaining().min(counter.remaining());
            if quantity.is_zero() {
                continue;
            }

            Self::execute_fill(settlement_asset, *counter_id, &mut counter, taker_id, &mut taker, quantity)?;

            if !counter.is_open() {
                consumed.push(*counter_id);
            }
        }

        if !consumed.is_empty() {
            let remaining_ids: Vec<OrderId> = counter_ids.into_iter().filter(|id| !consumed.contains(id)).collect();
            match taker.side {
                OrderSide::Buy => <Asks<T>>::insert(security_token, remaining_ids),
                OrderSide::Sell => <Bids<T>>::insert(security_token, remaining_ids),
            }
        }

        if !taker.is_open() {
            Self::remove_from_book(security_token, taker.side, taker_id);
        }

        Ok(())
    }

    /// Settle one matched pair out of escrow.
    ///
    /// Executes at the sell order's price. The buyer's escrow is released at the buyer's own
    /// limit price for the matched quantity; anything above the execution cost goes straight
    /// back to the buyer, keeping escrow equal to the open remainder at all times.
    #[require_transactional]
    fn execute_fill(
        settlement_asset: T::AssetId,
        resting_id: OrderId,
        resting: &mut OrderOf<T>,
        taker_id: OrderId,
        taker: &mut OrderOf<T>,
        quantity: Balance,
    ) -> DispatchResult {
        let escrow = Self::escrow_account();
        let security_token = resting.security_token;

        let (buy, sell) = match taker.side {
            OrderSide::Buy => (&mut *taker, &mut *resting),
            OrderSide::Sell => (&mut *resting, &mut *taker),
        };

        let exec_price = sell.price;
        let gross = Self::quote_cost(quantity, exec_price)?;
        let buyer_release = Self::quote_cost(quantity, buy.price)?;

        let collector = <FeeCollector<T>>::get();
        let fee = match collector {
            Some(_) => gross
                .checked_mul(<TradingFee<T>>::get() as Balance)
                .map(|value| value / BPS_DENOMINATOR)
                .ok_or(Error::<T>::MathError)?,
            None => Balance::zero(),
        };
        let seller_net = gross.checked_sub(fee).ok_or(Error::<T>::MathError)?;

        T::Currency::transfer(security_token, &escrow, &buy.maker, quantity)?;
        if !seller_net.is_zero() {
            T::Currency::transfer(settlement_asset, &escrow, &sell.maker, seller_net)?;
        }

        let buyer_surplus = buyer_release.checked_sub(gross).ok_or(Error::<T>::MathError)?;
        if !buyer_surplus.is_zero() {
            T::Currency::transfer(settlement_asset, &escrow, &buy.maker, buyer_surplus)?;
        }

        if let Some(collector) = collector {
            if !fee.is_zero() {
                T::Currency::transfer(settlement_asset, &escrow, &collector, fee)?;
                Self::deposit_event(Event::FeesCollected {
                    asset: settlement_asset,
                    collector,
                    amount: fee,
                });
            }
        }

        buy.fill(quantity);
        sell.fill(quantity);

        log::debug!(
            target: "order-book",
            "filled {} against {} for {} @ {}",
            taker_id,
            resting_id,
            quantity,
            exec_price
        );

        <Orders<T>>::insert(resting_id, &*resting);
        <Orders<T>>::insert(taker_id, &*taker);

        Self::deposit_event(Event::OrderFilled {
            order_id: resting_id,
            maker: resting.maker.clone(),
            taker: taker.maker.clone(),
            amount: quantity,
            price: exec_price,
        });
        Ok(())
    }

    /// Cancel an open order and refund its unfilled remainder. The caller is responsible for
    /// authorization checks and for persisting the record when it holds a storage reference.
    #[require_transactional]
    fn do_cancel(order_id: OrderId, order: &mut OrderOf<T>) -> DispatchResult {
        let settlement_asset = T::Issuers::settlement_asset(order.security_token).ok_or(Error::<T>::UnknownToken)?;

        order.status = OrderStatus::Cancelled;
        Self::refund_remainder(settlement_asset, order)?;
        Self::remove_from_book(order.security_token, order.side, order_id);

        Self::deposit_event(Event::OrderCancelled { order_id });
        Ok(())
    }

    /// Matcher-side cancellation of a stale counter-order.
    #[require_transactional]
    fn expire_order(settlement_asset: T::AssetId, order_id: OrderId, order: &mut OrderOf<T>) -> DispatchResult {
        order.status = OrderStatus::Cancelled;
        Self::refund_remainder(settlement_asset, order)?;
        <Orders<T>>::insert(order_id, &*order);

        Self::deposit_event(Event::OrderCancelled { order_id });
        Ok(())
    }

    fn refund_remainder(settlement_asset: T::AssetId, order: &OrderOf<T>) -> DispatchResult {
        let remaining = order.remaining();
        if remaining.is_zero() {
            return Ok(());
        }

        let escrow = Self::escrow_account();
        match order.side {
            OrderSide::Buy => {
                let refund = Self::quote_cost(remaining, order.price)?;
                if !refund.is_zero() {
                    T::Currency::transfer(settlement_asset, &escrow, &order.maker, refund)?;
                }
            }
            OrderSide::Sell => {
                T::Currency::transfer(order.security_token, &escrow, &order.maker, remaining)?;
            }
        }
        Ok(())
    }

    /// Open bids for a token, best price first.
    pub fn active_buy_orders(security_token: T::AssetId) -> Vec<(OrderId, OrderOf<T>)> {
        Self::active_orders_in(<Bids<T>>::get(security_token))
    }

    /// Open asks for a token, best price first.
    pub fn active_sell_orders(security_token: T::AssetId) -> Vec<(OrderId, OrderOf<T>)> {
        Self::active_orders_in(<Asks<T>>::get(security_token))
    }

    /// Open orders of an account across all tokens.
    pub fn user_active_orders(who: &T::AccountId) -> Vec<(OrderId, OrderOf<T>)> {
        Self::active_orders_in(<UserOrders<T>>::get(who))
    }

    fn active_orders_in(ids: Vec<OrderId>) -> Vec<(OrderId, OrderOf<T>)> {
        ids.into_iter()
            .filter_map(|id| <Orders<T>>::get(id).filter(|order| order.is_open()).map(|order| (id, order)))
            .collect()
    }

    /// Best open bid as `(price, remaining of that order)`, `(0, 0)` when the side is empty.
    /// The first order encountered at the extreme price wins.
    pub fn best_bid(security_token: T::AssetId) -> (Balance, Balance) {
        let mut best: Option<(Balance, Balance)> = None;
        for (_, order) in Self::active_buy_orders(security_token) {
            if best.map_or(true, |(price, _)| order.price > price) {
                best = Some((order.price, order.remaining()));
            }
        }
        best.unwrap_or((0, 0))
    }

    /// Best open ask as `(price, remaining of that order)`, `(0, 0)` when the side is empty.
    /// The first order encountered at the extreme price wins.
    pub fn best_ask(security_token: T::AssetId) -> (Balance, Balance) {
        let mut best: Option<(Balance, Balance)> = None;
        for (_, order) in Self::active_sell_orders(security_token) {
            if best.map_or(true, |(price, _)| order.price < price) {
                best = Some((order.price, order.remaining()));
            }
        }
        best.unwrap_or((0, 0))
    }

    /// `true` if `who` has an open order at exactly `price` on the given side.
    pub fn has_order_at(who: &T::AccountId, security_token: T::AssetId, price: Balance, is_bid: bool) -> bool {
        let orders = if is_bid {
            Self::active_buy_orders(security_token)
        } else {
            Self::active_sell_orders(security_token)
        };
        orders
            .iter()
            .any(|(_, order)| order.maker == *who && order.price == price)
    }
}

impl<T: Config> OrderBookInspect<T::AccountId, T::AssetId> for Pallet<T> {
    fn best_bid(security_token: T::AssetId) -> (Balance, Balance) {
        Self::best_bid(security_token)
    }

    fn best_ask(security_token: T::AssetId) -> (Balance, Balance) {
        Self::best_ask(security_token)
    }

    fn has_active_order(who: &T::AccountId, security_token: T::AssetId, price: Balance, is_bid: bool) -> bool {
        Self::has_order_at(who, security_token, price, is_bid)
    }
}
