use rand::seq::SliceRandom;

/// Short finance tips shown alongside the balance.
pub const FINANCE_TIPS: &[&str] = &[
    "Always set aside 10% of your income.",
    "Track your expenses, it keeps the budget honest.",
    "Avoid impulse purchases.",
    "Pay yourself first: save before you spend.",
    "Invest in your own education.",
    "Avoid consumer loans where you can.",
    "Plan large purchases in advance.",
    "Use the 50/30/20 rule: 50% needs, 30% wants, 20% savings.",
];

/// Pick one tip uniformly at random.
pub fn random_tip() -> &'static str {
    FINANCE_TIPS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FINANCE_TIPS[0])
}
