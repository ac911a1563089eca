//! Tables - row views over the quote board, order log and stories

use sambucks_core::{Side, Story};
use sambucks_ports::{Cell, Row, RowSet, TableKind, Tone};
use sambucks_sim::{Direction, OrderLog, QuoteBoard};

use crate::format;

fn direction_tone(direction: Direction) -> Tone {
    match direction {
        Direction::Up => Tone::Up,
        Direction::Down => Tone::Down,
    }
}

/// Ticker, price, change and volume per ticker
pub fn watchlist_rows(board: &QuoteBoard) -> RowSet {
    let rows = board
        .quotes
        .iter()
        .map(|q| {
            Row::new(vec![
                Cell::plain(q.symbol.as_str()),
                Cell::plain(format::price(q.price)),
                Cell::toned(
                    format::percent(q.change_pct),
                    direction_tone(Direction::from_change(q.change_pct)),
                ),
                Cell::plain(format::grouped(q.volume)),
            ])
        })
        .collect();
    RowSet::new(TableKind::Watchlist, &["Ticker", "Price", "Chg", "Vol"], rows)
}

/// One badge per ticker: symbol, then glyph and real price
pub fn ticker_strip_rows(board: &QuoteBoard) -> RowSet {
    let rows = board
        .strip
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::plain(s.symbol.as_str()),
                Cell::toned(
                    format!("{} {}", s.direction.glyph(), format::price(s.price)),
                    direction_tone(s.direction),
                ),
            ])
        })
        .collect();
    RowSet::new(TableKind::TickerStrip, &[], rows)
}

/// Order log, newest first, at most `limit` rows
pub fn blotter_rows(log: &OrderLog, limit: usize) -> RowSet {
    let rows = log
        .iter()
        .take(limit)
        .map(|o| {
            let tone = match o.side {
                Side::Buy => Tone::Up,
                Side::Sell => Tone::Down,
            };
            Row::new(vec![
                Cell::plain(format::clock_time(o.time)),
                Cell::plain(o.trader.as_str()),
                Cell::toned(o.side.as_str(), tone),
                Cell::plain(o.symbol.as_str()),
                Cell::plain(format::grouped(o.quantity)),
                Cell::plain(format::price(o.price)),
            ])
        })
        .collect();
    RowSet::new(
        TableKind::Blotter,
        &["Time", "Trader", "Side", "Sym", "Qty", "Px"],
        rows,
    )
}

/// News panel: lead story first, then the rest in order
pub fn news_rows(stories: &[Story]) -> RowSet {
    let rows = stories
        .iter()
        .map(|s| Row::new(vec![Cell::plain(s.title.as_str()), Cell::plain(s.body.as_str())]))
        .collect();
    RowSet::new(TableKind::News, &["Title", "Body"], rows)
}

/// Breaking banner with a single line of text
pub fn headline_rows(story: &Story) -> RowSet {
    RowSet::new(
        TableKind::Headline,
        &[],
        vec![Row::new(vec![Cell::plain(story.headline())])],
    )
}
