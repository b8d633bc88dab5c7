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

use crate::{Error, Event};
use frame_support::{assert_noop, assert_ok};
use orml_traits::MultiCurrency;
use pretty_assertions::assert_eq;

#[test]
fn lock_collateral_should_work() {
    ExtBuilder::default().build().execute_with(|| {
        // Arrange
        create_default_program();
        assert_ok!(MarketMaker::register_provider(Origin::signed(PROVIDER)));

        // Act
        assert_ok!(MarketMaker::lock_collateral(Origin::signed(PROVIDER), SEC, 1_000_000));

        // Assert
        assert_eq!(MarketMaker::locked(SEC, PROVIDER), 1_000_000);
        assert_eq!(MarketMaker::providers(PROVIDER).unwrap().total_locked, 1_000_000);
        assert_eq!(Tokens::free_balance(USDT, &PROVIDER), 9_000_000);
        assert_eq!(Tokens::free_balance(USDT, &MarketMaker::account_id()), 1_000_000);

        expect_events(vec![Event::CollateralLocked {
            provider: PROVIDER,
            security_token: SEC,
            amount: 1_000_000,
        }
        .into()]);
    });
}

#[test]
fn lock_collateral_should_accumulate() {
    ExtBuilder::default().build().execute_with(|| {
        create_default_program();
        assert_ok!(MarketMaker::register_provider(Origin::signed(PROVIDER)));

        assert_ok!(MarketMaker::lock_collateral(Origin::signed(PROVIDER), SEC, 400_000));
        assert_ok!(MarketMaker::lock_collateral(Origin::signed(PROVIDER), SEC, 600_000));

        assert_eq!(MarketMaker::locked(SEC, PROVIDER), 1_000_000);
        assert_eq!(MarketMaker::providers(PROVIDER).unwrap().total_locked, 1_000_000);
    });
}

#[test]
fn lock_collateral_should_throw_error_when_below_the_minimum_lockup() {
    ExtBuilder::default().build().execute_with(|| {
        create_default_program();
        assert_ok!(MarketMaker::register_provider(Origin::signed(PROVIDER)));

        assert_noop!(
            MarketMaker::lock_collateral(Origin::signed(PROVIDER), SEC, 99_999),
            Error::<Test>::LockupTooSmall
        );
    });
}

#[test]
fn lock_collateral_should_throw_error_when_provider_is_not_registered() {
    ExtBuilder::default().build().execute_with(|| {
        create_default_program();

        assert_noop!(
            MarketMaker::lock_collateral(Origin::signed(PROVIDER), SEC, 1_000_000),
            Error::<Test>::NotActiveProvider
        );
    });
}

#[test]
fn lock_collateral_should_throw_error_when_program_is_paused() {
    ExtBuilder::default().build().execute_with(|| {
        create_default_program();
        assert_ok!(MarketMaker::register_provider(Origin::signed(PROVIDER)));
        assert_ok!(MarketMaker::toggle_program(Origin::signed(OWNER), SEC, false));

        assert_noop!(
            MarketMaker::lock_collateral(Origin::signed(PROVIDER), SEC, 1_000_000),
            Error::<Test>::ProgramInactive
        );
    });
}

#[test]
fn lock_collateral_should_throw_error_when_program_has_ended() {
    ExtBuilder::default().build().execute_with(|| {
        create_default_program();
        assert_ok!(MarketMaker::register_provider(Origin::signed(PROVIDER)));
        set_now(NOW + 30 * DAY);

        assert_noop!(
            MarketMaker::lock_collateral(Origin::signed(PROVIDER), SEC, 1_000_000),
            Error::<Test>::ProgramEnded
        );
    });
}

#[test]
fn release_collateral_should_throw_error_while_the_program_is_running() {
    ExtBuilder::default().build().execute_with(|| {
        // Arrange
        create_default_program();
        register_and_lock(1_000_000);

        // Act & Assert
        assert_noop!(
            MarketMaker::release_collateral(Origin::signed(PROVIDER), SEC),
            Error::<Test>::ProgramStillActive
        );
    });
}

#[test]
fn release_collateral_should_work_after_the_program_ends() {
    ExtBuilder::default().build().execute_with(|| {
        // Arrange
        create_default_program();
        register_and_lock(1_000_000);
        set_now(NOW + 30 * DAY);

        // Act
        assert_ok!(MarketMaker::release_collateral(Origin::signed(PROVIDER), SEC));

        // Assert
        assert_eq!(MarketMaker::locked(SEC, PROVIDER), 0);
        assert_eq!(MarketMaker::providers(PROVIDER).unwrap().total_locked, 0);
        assert_eq!(Tokens::free_balance(USDT, &PROVIDER), 10_000_000);
        assert_eq!(Tokens::free_balance(USDT, &MarketMaker::account_id()), 0);

        expect_events(vec![Event::CollateralReleased {
            provider: PROVIDER,
            security_token: SEC,
            amount: 1_000_000,
        }
        .into()]);
    });
}

#[test]
fn release_collateral_should_work_when_the_program_is_paused() {
    ExtBuilder::default().build().execute_with(|| {
        // Arrange
        create_default_program();
        register_and_lock(1_000_000);
        assert_ok!(MarketMaker::toggle_program(Origin::signed(OWNER), SEC, false));

        // Act
        assert_ok!(MarketMaker::release_collateral(Origin::signed(PROVIDER), SEC));

        // Assert
        assert_eq!(Tokens::free_balance(USDT, &PROVIDER), 10_000_000);
    });
}

#[test]
fn release_collateral_should_throw_error_without_collateral() {
    ExtBuilder::default().build().execute_with(|| {
        create_default_program();
        assert_ok!(MarketMaker::register_provider(Origin::signed(PROVIDER)));

        assert_noop!(
            MarketMaker::release_collateral(Origin::signed(PROVIDER), SEC),
            Error::<Test>::NoCollateral
        );
    });
}

#[test]
fn deactivated_provider_should_still_release_collateral() {
    ExtBuilder::default().build().execute_with(|| {
        // Arrange
        create_default_program();
        register_and_lock(1_000_000);
        assert_ok!(MarketMaker::deactivate_provider(Origin::signed(PROVIDER)));
        assert_ok!(MarketMaker::toggle_program(Origin::signed(OWNER), SEC, false));

        // Act & Assert
        assert_ok!(MarketMaker::release_collateral(Origin::signed(PROVIDER), SEC));
        assert_eq!(Tokens::free_balance(USDT, &PROVIDER), 10_000_000);
    });
}
