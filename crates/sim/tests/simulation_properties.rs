//! Simulation Property Tests
//!
//! Exercises the engine end to end through the public API:
//! - Price floor across long walks
//! - Series window length and FIFO eviction
//! - Bounded blotter log
//! - Headline wraparound
//! - Seeded determinism

use chrono::{TimeZone, Utc};
use sambucks_core::{MIN_PRICE, Story};
use sambucks_sim::{
    ChangeDisplay, OrderLog, RollingSeries, ScriptedRandom, SeedPayload, SeededRandom,
    SeriesWalker, Simulation, SimulationConfig,
};

fn seed() -> SeedPayload {
    SeedPayload {
        tickers: (1..=10).map(|i| format!("SAM{i:02}")).collect(),
        prices: vec![4.5, 12.0, 33.3, 80.0, 120.0, 199.9, 7.7, 64.0, 245.0, 18.2],
        volatilities: vec![0.2, 0.5, 1.0, 1.5, 2.0, 0.8, 1.2, 0.3, 1.9, 0.6],
        stories: vec![
            Story::new("SAM Index edges higher", "Traders cite strong latte demand"),
            Story::new("Robo hedger toggles on", "Latency improved to probably fine"),
            Story::new("Balance sheet very green", "Analysts upgrade outlook to moonish"),
        ],
        names: vec!["Sam A".into(), "Jamie Q".into(), "Taylor R".into()],
    }
}

fn cold_config() -> SimulationConfig {
    SimulationConfig {
        warm_up_series: false,
        ..Default::default()
    }
}

#[test]
fn test_prices_stay_above_floor() {
    let _ = env_logger::try_init();
    let mut sim = Simulation::new(seed(), cold_config(), SeededRandom::with_seed(7)).unwrap();
    for _ in 0..20_000 {
        sim.step_frame();
        assert!(sim.market().tickers().iter().all(|t| t.price >= MIN_PRICE));
    }
}

#[test]
fn test_centered_draw_keeps_sam01_at_ten() {
    let payload = SeedPayload {
        tickers: vec!["SAM01".into()],
        prices: vec![10.00],
        volatilities: vec![1.0],
        stories: seed().stories,
        names: seed().names,
    };
    let mut sim = Simulation::new(payload, cold_config(), ScriptedRandom::constant(0.5)).unwrap();

    sim.step_frame();

    assert_eq!(sim.market().price_of("SAM01"), Some(10.00));
}

#[test]
fn test_series_length_tracks_steps_until_full() {
    let mut sim = Simulation::new(seed(), cold_config(), SeededRandom::with_seed(1)).unwrap();
    let first = sim.series().first();
    assert_eq!(sim.series().len(), 1);

    for step in 1..=400usize {
        sim.step_frame();
        assert_eq!(sim.series().len(), (1 + step).min(180));
        if step < 180 {
            assert_eq!(sim.series().first(), first);
        }
    }
}

#[test]
fn test_series_singleton_seed_reaches_capacity_after_n_minus_one_steps() {
    let walker = SeriesWalker::default();
    let mut rng = SeededRandom::with_seed(21);
    let mut series = RollingSeries::from_value(180, 55.5);

    for _ in 0..179 {
        walker.step(&mut series, &mut rng);
    }

    assert_eq!(series.len(), 180);
    assert_eq!(series.first(), Some(55.5));
}

#[test]
fn test_series_appends_evict_exactly_the_oldest() {
    let walker = SeriesWalker::default();
    let mut rng = SeededRandom::with_seed(4);
    let mut series = RollingSeries::warmed(180, 30.0);

    for _ in 0..50 {
        let before = series.to_vec();
        walker.step(&mut series, &mut rng);
        let after = series.to_vec();
        assert_eq!(after.len(), 180);
        assert_eq!(&after[..179], &before[1..]);
    }
}

#[test]
fn test_order_log_at_cap_drops_tail() {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap();
    let mut sim = Simulation::new(seed(), cold_config(), SeededRandom::with_seed(12)).unwrap();
    sim.seed_orders(40, now);
    assert_eq!(sim.orders().len(), 40);
    let tail = sim.orders().oldest().cloned().unwrap();

    let fresh = sim.emit_order(now);

    assert_eq!(sim.orders().len(), 40);
    assert_eq!(sim.orders().latest(), Some(&fresh));
    assert!(sim.orders().iter().all(|o| o.seq != tail.seq));
}

#[test]
fn test_order_log_never_exceeds_cap() {
    let mut log = OrderLog::new(40);
    let now = Utc::now();
    let mut sim = Simulation::new(seed(), cold_config(), SeededRandom::with_seed(5)).unwrap();
    for _ in 0..200 {
        log.push(sim.emit_order(now));
        assert!(log.len() <= 40);
        assert!(sim.orders().len() <= 40);
    }
}

#[test]
fn test_headlines_wrap_around() {
    let mut sim = Simulation::new(seed(), cold_config(), SeededRandom::with_seed(2)).unwrap();
    let titles: Vec<String> = (0..4)
        .map(|_| sim.rotate_headline().unwrap().title.clone())
        .collect();
    assert_eq!(titles[0], "SAM Index edges higher");
    assert_eq!(titles[1], "Robo hedger toggles on");
    assert_eq!(titles[2], "Balance sheet very green");
    assert_eq!(titles[3], titles[0]);
}

#[test]
fn test_seeded_runs_are_identical() {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
    let run = || {
        let config = SimulationConfig {
            change_display: ChangeDisplay::Cosmetic,
            ..Default::default()
        };
        let mut sim = Simulation::new(seed(), config, SeededRandom::with_seed(2024)).unwrap();
        sim.seed_orders(10, now);
        for _ in 0..120 {
            sim.step_frame();
        }
        let board = sim.sample_quotes();
        (
            sim.market().prices(),
            sim.series().to_vec(),
            sim.orders().iter().cloned().collect::<Vec<_>>(),
            board,
        )
    };

    assert_eq!(run(), run());
}
