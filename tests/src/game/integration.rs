#![cfg(test)]
use lotto_common::lotto::tickets::Tickets;
use lotto_common::{LottoError, TICKET_PRICE};
use lotto_core::purchase::Purchase;
use lotto_core::statistics::{self, EarningsRate};
use lotto_core::strategy::WinningStrategy;
use lotto_core::tier::Tier;
use lotto_integration_tests::{number, ticket, ticket_range};
use num_rational::Ratio;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Manual tickets that are known winners, topped up with random ones.
/// Every issued ticket must land in exactly one tier.
#[test]
fn full_round_with_manual_and_auto_tickets() {
    let purchase = Purchase::new(10_500, 3).expect("valid purchase");
    let manual = Tickets::new(vec![
        ticket_range(1, 6),
        ticket(&[1, 2, 3, 4, 5, 7]),
        ticket(&[1, 2, 3, 40, 41, 42]),
    ]);

    let tickets = purchase
        .issue(&manual, &mut StdRng::seed_from_u64(2024))
        .expect("issue tickets");
    assert_eq!(tickets.len(), 10);

    let strategy = WinningStrategy::with_bonus(ticket_range(1, 6), number(7)).expect("valid draw");
    let stats = statistics::compute_statistics(&tickets, &strategy, purchase.amount_spent())
        .expect("statistics");

    assert_eq!(stats.ticket_count(), 10);
    assert!(stats.count_for(Tier::SixMatches) >= 1);
    assert!(stats.count_for(Tier::FiveAndBonusMatches) >= 1);
    assert!(stats.count_for(Tier::ThreeMatches) >= 1);
    assert_eq!(stats.amount_spent(), 10_000);

    let expected_prize: u64 = stats
        .counts()
        .map(|(tier, count)| tier.cash_prize() * count as u64)
        .sum();
    assert_eq!(stats.total_prize(), expected_prize);
    assert_eq!(
        stats.earnings_rate(),
        EarningsRate::new(expected_prize, 10_000).expect("non-zero spend")
    );
}

#[test]
fn seeded_rounds_are_reproducible() {
    let purchase = Purchase::new(20_000, 0).expect("valid purchase");
    let first = purchase
        .issue(&Tickets::default(), &mut StdRng::seed_from_u64(99))
        .expect("issue");
    let second = purchase
        .issue(&Tickets::default(), &mut StdRng::seed_from_u64(99))
        .expect("issue");

    assert_eq!(first, second);
    assert_eq!(
        statistics::compute(&first, &ticket_range(1, 6), Some(number(7))),
        statistics::compute(&second, &ticket_range(1, 6), Some(number(7)))
    );
}

#[test]
fn two_three_match_tickets_earn_five_times_the_spend() {
    let tickets = Tickets::new(vec![ticket_range(4, 9), ticket(&[1, 2, 3, 20, 21, 22])]);

    let stats = statistics::compute(&tickets, &ticket_range(1, 6), None).expect("statistics");

    assert_eq!(stats.count_for(Tier::ThreeMatches), 2);
    assert_eq!(stats.amount_spent(), 2 * TICKET_PRICE);
    assert_eq!(stats.earnings_rate().as_ratio(), Ratio::from_integer(5));
    assert_eq!(format!("{:.1}", stats.earnings_rate()), "5.0");
}

#[test]
fn basic_strategy_never_reports_the_bonus_tier() {
    let tickets = Tickets::new(vec![ticket(&[1, 2, 3, 4, 5, 7])]);

    let stats = statistics::compute(&tickets, &ticket_range(1, 6), None).expect("statistics");

    assert_eq!(stats.count_for(Tier::FiveMatches), 1);
    assert_eq!(stats.count_for(Tier::FiveAndBonusMatches), 0);
}

#[test]
fn bonus_colliding_with_the_draw_is_rejected() {
    let tickets = Tickets::new(vec![ticket_range(1, 6)]);

    let result = statistics::compute(&tickets, &ticket_range(1, 6), Some(number(6)));

    assert_eq!(result, Err(LottoError::InvalidBonus(6)));
}

#[test]
fn nothing_spent_is_a_caller_error() {
    let strategy = WinningStrategy::basic(ticket_range(1, 6));

    let result = statistics::compute_statistics(&Tickets::new(vec![ticket_range(1, 6)]), &strategy, 0);

    assert_eq!(result, Err(LottoError::DivisionByZero));
}

#[test]
fn losing_round_reports_a_loss() {
    let tickets = Tickets::new(vec![ticket_range(10, 15), ticket_range(20, 25), ticket_range(30, 35)]);

    let stats = statistics::compute(&tickets, &ticket_range(1, 6), Some(number(7))).expect("statistics");

    assert_eq!(stats.count_for(Tier::NoPrize), 3);
    assert_eq!(stats.total_prize(), 0);
    assert!(stats.earnings_rate().is_loss());
}
