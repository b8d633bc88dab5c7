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

use crate::tests::mock::*;

use crate::{Error, Event, OrderStatus};
use frame_support::{assert_noop, assert_ok};
use orml_traits::MultiCurrency;
use pretty_assertions::assert_eq;

#[test]
fn cancel_expired_order_should_work_for_any_caller() {
    ExtBuilder::default().build().execute_with(|| {
        // Arrange
        assert_ok!(OrderBook::submit_buy_order(Origin::signed(ALICE), SEC, 500_000, 1_000_000));
        set_now(NOW + MAX_ORDER_AGE + 1);

        // Act: Bob reaps Alice's stale order
        assert_ok!(OrderBook::cancel_expired_order(Origin::signed(BOB), 1));

        // Assert
        assert_eq!(OrderBook::orders(1).unwrap().status, OrderStatus::Cancelled);
        assert_eq!(Tokens::free_balance(USDT, &ALICE), 2_000_000);
        assert_eq!(Tokens::free_balance(USDT, &OrderBook::escrow_account()), 0);

        expect_events(vec![Event::OrderCancelled { order_id: 1 }.into()]);
    });
}

#[test]
fn cancel_expired_order_should_throw_error_before_the_order_ages_out() {
    ExtBuilder::default().build().execute_with(|| {
        // Arrange
        assert_ok!(OrderBook::submit_buy_order(Origin::signed(ALICE), SEC, 500_000, 1_000_000));
        set_now(NOW + MAX_ORDER_AGE);

        // Act & Assert: the age bound is strict
        assert_noop!(
            OrderBook::cancel_expired_order(Origin::signed(BOB), 1),
            Error::<Test>::NotExpired
        );
    });
}

#[test]
fn matcher_should_expire_stale_counter_orders() {
    ExtBuilder::default().build().execute_with(|| {
        // Arrange: Bob's ask goes stale on the book
        assert_ok!(OrderBook::submit_sell_order(Origin::signed(BOB), SEC, 300_000, 1_000_000));
        set_now(NOW + MAX_ORDER_AGE + 1);

        // Act: Alice's crossing bid walks over it
        assert_ok!(OrderBook::submit_buy_order(Origin::signed(ALICE), SEC, 300_000, 1_000_000));

        // Assert: no fill; Bob is cancelled and refunded, Alice rests
        assert_eq!(OrderBook::orders(1).unwrap().status, OrderStatus::Cancelled);
        assert_eq!(Tokens::free_balance(SEC, &BOB), 1_000_000);

        let alice_order = OrderBook::orders(2).unwrap();
        assert_eq!(alice_order.status, OrderStatus::Open);
        assert_eq!(alice_order.filled, 0);

        // the stale ask has been pruned from the book
        assert_eq!(OrderBook::asks(SEC), Vec::<crate::OrderId>::new());
        assert_eq!(OrderBook::bids(SEC), vec![2]);

        expect_events(vec![Event::OrderCancelled { order_id: 1 }.into()]);
    });
}

#[test]
fn matcher_should_expire_partially_filled_counter_orders_with_partial_refund() {
    ExtBuilder::default().build().execute_with(|| {
        // Arrange: Bob's ask is half filled, then goes stale
        assert_ok!(OrderBook::submit_sell_order(Origin::signed(BOB), SEC, 400_000, 1_000_000));
        assert_ok!(OrderBook::submit_buy_order(Origin::signed(ALICE), SEC, 200_000, 1_000_000));
        set_now(NOW + MAX_ORDER_AGE + 1);

        // Act
        assert_ok!(OrderBook::submit_buy_order(Origin::signed(CHARLIE), SEC, 200_000, 1_000_000));

        // Assert: only the unfilled 200,000 tokens come back
        assert_eq!(OrderBook::orders(1).unwrap().status, OrderStatus::Cancelled);
        assert_eq!(Tokens::free_balance(SEC, &BOB), 1_000_000 - 200_000);
        assert_eq!(Tokens::free_balance(SEC, &OrderBook::escrow_account()), 0);
    });
}
