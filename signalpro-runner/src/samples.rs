//! Built-in demonstration catalog: one signal per category.
//!
//! Used by the CLI `generate` command to produce a full suite of sample
//! documents without an upstream scan engine.

use signalpro_core::domain::{
    KeyStat, Priority, SignalCategory, SignalData, StrategyInfo,
};

#[allow(clippy::too_many_arguments)]
fn signal(
    ticker: &str,
    company: &str,
    category: SignalCategory,
    priority: Priority,
    price: f64,
    change: f64,
    change_percent: f64,
    pattern: &str,
    timestamp: &str,
) -> SignalData {
    SignalData {
        ticker: ticker.into(),
        company_name: company.into(),
        category,
        priority,
        current_price: price,
        price_change: change,
        price_change_percent: change_percent,
        key_stats: vec![],
        strategy: None,
        chart_pattern: Some(pattern.into()),
        event_label: None,
        timestamp: timestamp.into(),
        notifications_enabled: true,
    }
}

fn strategy(title: &str, description: &str, link_text: &str, link_url: &str) -> StrategyInfo {
    StrategyInfo {
        title: title.into(),
        description: description.into(),
        link_text: Some(link_text.into()),
        link_url: Some(link_url.into()),
    }
}

/// All ten sample signals, one per category, in category order.
pub fn catalog() -> Vec<SignalData> {
    let mut signals = Vec::with_capacity(10);

    let mut ipo = signal(
        "CRCL",
        "Circle Internet Group",
        SignalCategory::IpoToday,
        Priority::Hot,
        69.00,
        38.00,
        122.6,
        "breakout",
        "15 min ago",
    );
    ipo.key_stats = vec![
        KeyStat::new("223%", "Day 1 High", true),
        KeyStat::new("$6.8B", "Valuation", true),
        KeyStat::new("46M", "Volume", true),
    ];
    ipo.strategy = Some(strategy(
        "Hot IPO Momentum Play",
        "Stablecoin leader 3x'd on debut. ARK bought $150M. Watch for dip to $60-65 for entry. Similar to Coinbase IPO pattern - expect volatility.",
        "IPO playbook →",
        "https://example.com/ipo-trading-strategy",
    ));
    ipo.event_label = Some("IPO $69 → peak".into());
    signals.push(ipo);

    let mut yolo = signal(
        "BTC",
        "Bitcoin 150K Moonshot",
        SignalCategory::YoloCalls,
        Priority::Normal,
        105_456.00,
        3_850.00,
        3.8,
        "momentum",
        "1 hour ago",
    );
    yolo.key_stats = vec![
        KeyStat::new("250%", "Max Gain", true),
        KeyStat::new("-100%", "Max Loss", false),
        KeyStat::new("$850", "Per Call", true),
    ];
    yolo.strategy = Some(strategy(
        "Dec 150K Call Options",
        "Kalshi shows 75% odds of 150K by Q4. Buy $130K calls for December. High risk, high reward - only risk what you can lose!",
        "View odds →",
        "https://kalshi.com/markets/kxbtcmax150",
    ));
    yolo.event_label = Some("Kalshi 75% → 150K".into());
    signals.push(yolo);

    let mut pre = signal(
        "NVDA",
        "Nvidia Pre-Market Surge",
        SignalCategory::PreMarket,
        Priority::Normal,
        1_125.50,
        55.50,
        5.2,
        "breakout",
        "Pre-market",
    );
    pre.key_stats = vec![
        KeyStat::new("+6.8%", "Pre-Mkt", true),
        KeyStat::new("2.5M", "Volume", true),
        KeyStat::new("9:28", "Entry", true),
    ];
    pre.strategy = Some(strategy(
        "Pre-Market Gap & Go",
        "TSMC production boost news. Pre-market up 6.8% on heavy volume. Buy at 9:28-9:30 for opening momentum. Set stop at pre-market low.",
        "Pre-market guide →",
        "https://example.com/premarket-trading",
    ));
    pre.event_label = Some("Taiwan news 4AM".into());
    signals.push(pre);

    let mut split = signal(
        "AMZN",
        "Amazon Split Announced",
        SignalCategory::StockSplit,
        Priority::Normal,
        3_245.00,
        245.00,
        8.2,
        "momentum",
        "2 hours ago",
    );
    split.key_stats = vec![
        KeyStat::new("20:1", "Ratio", true),
        KeyStat::new("+15%", "Avg Run", true),
        KeyStat::new("28d", "To Split", true),
    ];
    split.strategy = Some(strategy(
        "Pre-Split Momentum",
        "20:1 split announced. Historical data shows 15% avg gain from announcement to split date. Buy shares or Aug calls. Retail FOMO incoming.",
        "Split history →",
        "https://example.com/stock-split-strategy",
    ));
    signals.push(split);

    let mut spread = signal(
        "TSLA",
        "Tesla Iron Condor",
        SignalCategory::PutSpread,
        Priority::Normal,
        245.80,
        -2.85,
        -1.2,
        "volatile",
        "3 hours ago",
    );
    spread.key_stats = vec![
        KeyStat::new("$3.20", "Credit", true),
        KeyStat::new("72%", "PoP", true),
        KeyStat::new("21d", "DTE", true),
    ];
    spread.strategy = Some(strategy(
        "Sell 240/235 Put Spread",
        "Post-earnings IV crush. Sell 240/235 put spread for $3.20 credit. 72% probability of profit. Max loss $180. Range-bound expected.",
        "Spread calculator →",
        "https://example.com/credit-spreads",
    ));
    signals.push(spread);

    let mut defi = signal(
        "ETH",
        "Ethereum Staking Play",
        SignalCategory::CryptoDefi,
        Priority::Normal,
        3_856.00,
        166.00,
        4.5,
        "momentum",
        "4 hours ago",
    );
    defi.key_stats = vec![
        KeyStat::new("5.2%", "APY", true),
        KeyStat::new("$4.2K", "Target", true),
        KeyStat::new("85", "RSI", true),
    ];
    defi.strategy = Some(strategy(
        "Stake & Trade Momentum",
        "Shanghai upgrade complete. Staking APY 5.2% + price appreciation. Buy spot ETH or ETHE. DeFi TVL surging, institutions accumulating.",
        "Staking guide →",
        "https://example.com/eth-staking",
    ));
    signals.push(defi);

    let mut fda = signal(
        "SAVA",
        "Cassava Sciences",
        SignalCategory::FdaEvent,
        Priority::Normal,
        42.15,
        4.65,
        12.3,
        "volatile",
        "5 hours ago",
    );
    fda.key_stats = vec![
        KeyStat::new("+180%", "If Pass", true),
        KeyStat::new("-65%", "If Fail", false),
        KeyStat::new("220%", "IV", true),
    ];
    fda.strategy = Some(strategy(
        "Binary FDA Event - YOLO!",
        "Alzheimer's drug PDUFA date 7/28. Buy OTM calls for 10x potential. Ultra high risk - total loss possible. Size accordingly!",
        "FDA calendar →",
        "https://example.com/fda-calendar",
    ));
    fda.event_label = Some("FDA 7/28".into());
    signals.push(fda);

    let mut earnings = signal(
        "GOOGL",
        "Google Post-Earnings",
        SignalCategory::Earnings,
        Priority::Normal,
        178.25,
        13.96,
        8.5,
        "momentum",
        "After hours",
    );
    earnings.key_stats = vec![
        KeyStat::new("+11%", "AH Move", true),
        KeyStat::new("$185", "Target", true),
        KeyStat::new("5.2M", "AH Vol", true),
    ];
    earnings.strategy = Some(strategy(
        "Post-Earnings Momentum",
        "Crushed earnings, raised guidance. After-hours up 11%. Buy at open for continuation. Historical 3-day momentum after beats averages +5%.",
        "ER playbook →",
        "https://example.com/earnings-momentum",
    ));
    signals.push(earnings);

    let mut unusual = signal(
        "AMD",
        "Unusual Call Buying",
        SignalCategory::UnusualOptions,
        Priority::Watch,
        185.40,
        3.85,
        2.1,
        "momentum",
        "30 min ago",
    );
    unusual.key_stats = vec![
        KeyStat::new("$2.5M", "Premium", true),
        KeyStat::new("10x", "Avg Vol", true),
        KeyStat::new("$200", "Strike", true),
    ];
    unusual.strategy = Some(strategy(
        "Follow the Smart Money",
        "10,000 Aug $200 calls bought for $2.5M. 10x normal volume. Someone knows something. Follow with smaller position or spreads.",
        "Flow data →",
        "https://example.com/options-flow",
    ));
    signals.push(unusual);

    let mut meme = signal(
        "GME",
        "GameStop Gamma Ramp",
        SignalCategory::MemeSqueeze,
        Priority::Normal,
        45.20,
        11.78,
        35.2,
        "volatile",
        "TO THE MOON!",
    );
    meme.key_stats = vec![
        KeyStat::new("140%", "Short %", true),
        KeyStat::new("+420%", "Target", true),
        KeyStat::new("💎🙌", "Hands", true),
    ];
    meme.strategy = Some(strategy(
        "Diamond Hands Squeeze Play",
        "Short interest 140%, cost to borrow 85%. Gamma ramp building. Pure YOLO - lottery ticket only! Not investment advice. Apes together strong! 🚀",
        "Join apes →",
        "https://reddit.com/r/wallstreetbets",
    ));
    signals.push(meme);

    signals
}
