use lotto_core::statistics::EarningsRate;
use lotto_core::tier::Tier;

/// `1500000` → `"1,500,000"`.
pub fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn tier_label(tier: Tier) -> String {
    let prize = with_thousands(tier.cash_prize());
    if tier.requires_bonus() {
        format!("{}개 일치, 보너스 볼 일치 ({}원)", tier.match_count(), prize)
    } else {
        format!("{}개 일치 ({}원)", tier.match_count(), prize)
    }
}

pub fn tier_row(tier: Tier, count: usize) -> String {
    format!("{} - {}개", tier_label(tier), count)
}

pub fn purchase_summary(manual: usize, auto: usize) -> String {
    format!("수동으로 {}장, 자동으로 {}개를 구매했습니다.", manual, auto)
}

pub fn earnings_line(rate: &EarningsRate) -> String {
    format!("총 수익률은 {:.1}%입니다.", rate.percent())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(999), "999");
        assert_eq!(with_thousands(5_000), "5,000");
        assert_eq!(with_thousands(50_000), "50,000");
        assert_eq!(with_thousands(2_000_000_000), "2,000,000,000");
    }

    #[test]
    fn labels_tiers() {
        assert_eq!(tier_row(Tier::ThreeMatches, 1), "3개 일치 (5,000원) - 1개");
        assert_eq!(tier_row(Tier::FourMatches, 0), "4개 일치 (50,000원) - 0개");
        assert_eq!(
            tier_label(Tier::FiveAndBonusMatches),
            "5개 일치, 보너스 볼 일치 (30,000,000원)"
        );
    }

    #[test]
    fn formats_earnings_as_percent() {
        let rate = EarningsRate::new(5_000, 8_000).unwrap();
        assert_eq!(earnings_line(&rate), "총 수익률은 62.5%입니다.");
    }

    #[test]
    fn summarises_purchase() {
        assert_eq!(purchase_summary(3, 11), "수동으로 3장, 자동으로 11개를 구매했습니다.");
    }
}
