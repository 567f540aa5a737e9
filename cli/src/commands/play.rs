use std::str::FromStr;

use lotto_common::config::Config;
use lotto_common::lotto::bonus::BonusNumber;
use lotto_common::lotto::number::LottoNumber;
use lotto_common::lotto::ticket::Ticket;
use lotto_common::lotto::tickets::Tickets;
use lotto_core::purchase::{Purchase, parse_amount, parse_manual_count};
use lotto_core::statistics;
use lotto_core::strategy::WinningStrategy;
use tracing::debug;

use crate::commands::ticket_rng;
use crate::terminal::input::Prompter;
use crate::terminal::report;

const AMOUNT_QUESTION: &str = "구입금액을 입력해 주세요.";
const MANUAL_COUNT_QUESTION: &str = "수동으로 구매할 로또 수를 입력해 주세요.";
const MANUAL_TICKETS_QUESTION: &str = "수동으로 구매할 번호를 입력해 주세요.";
const WINNING_QUESTION: &str = "지난 주 당첨 번호를 입력해 주세요.";
const BONUS_QUESTION: &str = "보너스 볼을 입력해 주세요.";

pub fn play(cfg: &Config) -> anyhow::Result<()> {
    let prompter = Prompter::new();

    let amount: u64 = prompter.ask(AMOUNT_QUESTION, |input| {
        let amount = parse_amount(input)?;
        Purchase::new(amount, 0)?;
        Ok(amount)
    })?;

    let purchase: Purchase = prompter.ask(MANUAL_COUNT_QUESTION, |input| {
        Purchase::new(amount, parse_manual_count(input)?)
    })?;

    let manual: Tickets = prompter
        .ask_many(MANUAL_TICKETS_QUESTION, purchase.manual_count(), Ticket::from_str)?
        .into_iter()
        .collect();

    let tickets: Tickets = purchase.issue(&manual, &mut ticket_rng(cfg.seed))?;
    report::purchase(&purchase, &tickets, cfg);

    let winning: Ticket = prompter.ask(WINNING_QUESTION, Ticket::from_str)?;
    let bonus: LottoNumber = prompter.ask(BONUS_QUESTION, |input| {
        let number = LottoNumber::from_str(input)?;
        Ok(BonusNumber::new(number, &winning)?.number())
    })?;

    let strategy = WinningStrategy::with_bonus(winning, bonus)?;
    debug!(amount, spent = purchase.amount_spent(), "scoring tickets");
    let stats = statistics::compute_statistics(&tickets, &strategy, purchase.amount_spent())?;

    report::draw(&strategy, cfg);
    report::statistics(&strategy, &stats, cfg);
    Ok(())
}
