use colored::*;
use lotto_common::config::Config;
use lotto_common::lotto::ticket::Ticket;
use lotto_common::lotto::tickets::Tickets;
use lotto_core::purchase::Purchase;
use lotto_core::statistics::Statistics;
use lotto_core::strategy::WinningStrategy;

use crate::lprint;
use crate::terminal::{colors, format, print};

pub fn purchase(purchase: &Purchase, tickets: &Tickets, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    print::header("tickets", cfg.quiet);
    print::print_status(format::purchase_summary(
        purchase.manual_count(),
        purchase.auto_count(),
    ));
    for ticket in tickets {
        print::print(&ticket_line(ticket));
    }
    lprint!();
}

pub fn draw(strategy: &WinningStrategy, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::aligned_line("Winning", ticket_line(strategy.winning()));
    if let Some(bonus) = strategy.bonus() {
        print::aligned_line("Bonus", bonus.to_string().color(colors::NUMBER));
    }
    print::aligned_line("Strategy", strategy.name());
}

pub fn statistics(strategy: &WinningStrategy, stats: &Statistics, cfg: &Config) {
    if cfg.quiet < 2 {
        print::header("당첨 통계", cfg.quiet);
        for tier in strategy.prize_tiers() {
            let count = stats.count_for(tier);
            let row = format::tier_row(tier, count);
            let row = if count > 0 {
                row.color(colors::PRIZE).bold()
            } else {
                row.color(colors::TEXT_DEFAULT)
            };
            print::print_status(row.to_string());
        }
        print::fat_separator();
    }

    let rate = stats.earnings_rate();
    let line = format::earnings_line(&rate);
    if rate.is_loss() {
        print::centerln(&line.color(colors::LOSS).bold().to_string());
        if cfg.quiet < 2 {
            print::centerln("(기준이 1이기 때문에 결과적으로 손해라는 의미임)");
        }
    } else {
        print::centerln(&line.color(colors::PROFIT).bold().to_string());
    }
}

fn ticket_line(ticket: &Ticket) -> String {
    let numbers: Vec<String> = ticket
        .iter()
        .map(|number| number.to_string().color(colors::NUMBER).to_string())
        .collect();
    let sep: String = ", ".color(colors::SEPARATOR).to_string();
    format!(
        "{}{}{}",
        "[".color(colors::SEPARATOR),
        numbers.join(sep.as_str()),
        "]".color(colors::SEPARATOR)
    )
}
