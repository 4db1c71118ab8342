use yew::prelude::*;

/// Creator profit per replica sold, in GBP.
pub const PROFIT_PER_SALE: u64 = 50;
pub const SALES_TIERS: [u64; 3] = [100, 500, 1_000];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EarningsTier {
    pub sales: u64,
    pub profit: u64,
    /// Bar width relative to the largest tier, 0..=100.
    pub width_pct: u64,
}

pub fn earnings_tiers(profit_per_sale: u64, tiers: &[u64]) -> Vec<EarningsTier> {
    let max_sales = tiers.iter().copied().max().unwrap_or(0);
    tiers
        .iter()
        .map(|&sales| EarningsTier {
            sales,
            profit: sales * profit_per_sale,
            width_pct: if max_sales == 0 { 0 } else { sales * 100 / max_sales },
        })
        .collect()
}

/// `5000` -> `5,000`
pub fn group_thousands(value: u64) -> String {
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

pub fn format_gbp(value: u64) -> String {
    format!("£{}", group_thousands(value))
}

#[function_component(Market)]
pub fn market() -> Html {
    let tiers = earnings_tiers(PROFIT_PER_SALE, &SALES_TIERS);
    let headline = format_gbp(PROFIT_PER_SALE * 1_000);

    html! {
        <section id="market" class="section market-section">
            <div class="section-container two-columns">
                <div>
                    <h2 class="section-heading">{"Earning "}<span class="gradient-text">{"Opportunity"}</span></h2>
                    <p class="section-subheading">
                        {"With millions of creators and a vast, engaged audience on platforms like OnlyFans, the demand for personalised products has never been higher."}
                    </p>
                    <div class="market-points">
                        <div class="market-point">
                            <h3>{"Monetise Your Audience"}</h3>
                            <p>{format!("You can earn an additional {} per month by selling 1,000 units with the VLV platform.", headline)}</p>
                        </div>
                        <div class="market-point">
                            <h3>{"Loyal Fan Base"}</h3>
                            <p>{"Content creators with dedicated followers can easily convert their audience into customers for these unique, personalised products."}</p>
                        </div>
                    </div>
                </div>

                <div class="glass-panel">
                    <h3>{"Potential Monthly Profit"}</h3>
                    { for tiers.iter().map(|tier| html! {
                        <div class="earnings-tier" key={tier.sales}>
                            <div class="earnings-row">
                                <span class="earnings-sales">{format!("{} Sales", group_thousands(tier.sales))}</span>
                                <span class="earnings-profit">{format_gbp(tier.profit)}</span>
                            </div>
                            <div class="earnings-track">
                                <div class="earnings-bar" style={format!("width: {}%", tier.width_pct)}></div>
                            </div>
                        </div>
                    }) }
                    <p class="muted centered">{format!("Based on {} creator profit per sale", format_gbp(PROFIT_PER_SALE))}</p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_scale_against_the_largest() {
        let tiers = earnings_tiers(PROFIT_PER_SALE, &SALES_TIERS);
        let summary: Vec<(u64, u64, u64)> = tiers.iter().map(|t| (t.sales, t.profit, t.width_pct)).collect();
        assert_eq!(summary, vec![(100, 5_000, 10), (500, 25_000, 50), (1_000, 50_000, 100)]);
    }

    #[test]
    fn empty_tier_list_yields_nothing() {
        assert!(earnings_tiers(PROFIT_PER_SALE, &[]).is_empty());
        assert_eq!(earnings_tiers(PROFIT_PER_SALE, &[0])[0].width_pct, 0);
    }

    #[test]
    fn amounts_get_thousands_separators() {
        assert_eq!(format_gbp(50), "£50");
        assert_eq!(format_gbp(5_000), "£5,000");
        assert_eq!(format_gbp(50_000), "£50,000");
        assert_eq!(format_gbp(1_234_567), "£1,234,567");
        assert_eq!(group_thousands(0), "0");
    }
}
