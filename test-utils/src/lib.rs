use frame_system::Config;
use pretty_assertions::assert_eq;

/// Compare the tail of the runtime event log against `expected`, in order.
///
/// Only the most recent `expected.len()` events are considered, so ledger events emitted
/// earlier in the same call (escrow moves, refunds) do not have to be spelled out.
pub fn expect_last_events<TRuntime: Config>(expected: Vec<<TRuntime as Config>::Event>) {
    let tail: Vec<<TRuntime as Config>::Event> = frame_system::Pallet::<TRuntime>::events()
        .into_iter()
        .map(|record| record.event)
        .rev()
        .take(expected.len())
        .rev()
        .collect();

    assert_eq!(tail, expected);
}

/// Assert a free balance in the mock `Tokens` ledger, keyed the way the venue keys value:
/// `(asset, account)`.
#[macro_export]
macro_rules! assert_balance {
    ($asset:expr, $who:expr, $expected:expr) => {{
        assert_eq!(
            <Tokens as orml_traits::MultiCurrency<AccountId>>::free_balance($asset, &$who),
            $expected
        );
    }};
}

/// Assert the status of an order in a `pallet_order_book` instance named `OrderBook`.
#[macro_export]
macro_rules! assert_order_status {
    ($order_id:expr, $expected_status:expr) => {{
        assert_eq!(OrderBook::orders($order_id).unwrap().status, $expected_status);
    }};
}
