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
use pretty_assertions::assert_eq;

#[test]
fn register_provider_should_work() {
    ExtBuilder::default().build().execute_with(|| {
        // Act
        assert_ok!(MarketMaker::register_provider(Origin::signed(PROVIDER)));

        // Assert
        let provider = MarketMaker::providers(PROVIDER).unwrap();
        assert_eq!(provider.registered_at, NOW);
        assert!(provider.active);
        assert_eq!(provider.cumulative_rewards, 0);
        assert_eq!(provider.total_locked, 0);

        expect_events(vec![Event::LiquidityProviderRegistered { provider: PROVIDER }.into()]);
    });
}

#[test]
fn register_provider_should_throw_error_when_already_registered() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(MarketMaker::register_provider(Origin::signed(PROVIDER)));

        assert_noop!(
            MarketMaker::register_provider(Origin::signed(PROVIDER)),
            Error::<Test>::AlreadyRegistered
        );
    });
}

#[test]
fn deactivate_provider_should_work() {
    ExtBuilder::default().build().execute_with(|| {
        // Arrange
        assert_ok!(MarketMaker::register_provider(Origin::signed(PROVIDER)));

        // Act
        assert_ok!(MarketMaker::deactivate_provider(Origin::signed(PROVIDER)));

        // Assert
        assert!(!MarketMaker::providers(PROVIDER).unwrap().active);

        expect_events(vec![Event::LiquidityProviderDeactivated { provider: PROVIDER }.into()]);
    });
}

#[test]
fn deactivate_provider_should_throw_error_when_not_registered() {
    ExtBuilder::default().build().execute_with(|| {
        assert_noop!(
            MarketMaker::deactivate_provider(Origin::signed(PROVIDER)),
            Error::<Test>::NotActiveProvider
        );
    });
}

#[test]
fn deactivated_provider_should_not_lock_collateral() {
    ExtBuilder::default().build().execute_with(|| {
        // Arrange
        create_default_program();
        assert_ok!(MarketMaker::register_provider(Origin::signed(PROVIDER)));
        assert_ok!(MarketMaker::deactivate_provider(Origin::signed(PROVIDER)));

        // Act & Assert
        assert_noop!(
            MarketMaker::lock_collateral(Origin::signed(PROVIDER), SEC, 1_000_000),
            Error::<Test>::NotActiveProvider
        );
    });
}
