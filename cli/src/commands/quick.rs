use lotto_common::config::Config;
use lotto_common::lotto::number::LottoNumber;
use lotto_common::lotto::ticket::Ticket;
use lotto_common::lotto::tickets::Tickets;
use lotto_core::purchase::Purchase;
use lotto_core::statistics;
use lotto_core::strategy::WinningStrategy;
use tracing::debug;

use crate::commands::ticket_rng;
use crate::terminal::report;

pub fn quick(
    amount: u64,
    winning: Ticket,
    bonus: Option<LottoNumber>,
    cfg: &Config,
) -> anyhow::Result<()> {
    // Validate the draw before spending anything.
    let strategy = WinningStrategy::from_draw(winning, bonus)?;

    let purchase = Purchase::new(amount, 0)?;
    let tickets = purchase.issue(&Tickets::default(), &mut ticket_rng(cfg.seed))?;
    debug!(tickets = tickets.len(), spent = purchase.amount_spent(), "automatic tickets bought");
    report::purchase(&purchase, &tickets, cfg);

    let stats = statistics::compute_statistics(&tickets, &strategy, purchase.amount_spent())?;

    report::draw(&strategy, cfg);
    report::statistics(&strategy, &stats, cfg);
    Ok(())
}
