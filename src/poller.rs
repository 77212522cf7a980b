use exchange::{AdapterError, FetchRequest, QuoteSet};

use iced::Subscription;
use std::time::Duration;

/// Prices as the landing view shows them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Prices {
    #[default]
    Loading,
    Loaded(QuoteSet),
}

impl Prices {
    pub fn quotes(&self) -> Option<&QuoteSet> {
        match self {
            Prices::Loading => None,
            Prices::Loaded(quotes) => Some(quotes),
        }
    }
}

/// Sequence number of an issued fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Seq(u64);

#[derive(Debug, Clone)]
pub struct Ticket {
    pub seq: Seq,
    pub request: FetchRequest,
}

#[derive(Debug, Clone, Copy)]
pub struct Tick;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Failed,
    Ignored(Ignored),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    /// a later fetch was already applied
    Stale,
    TornDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Active,
    TornDown,
}

/// Owns the refresh cycle of the price panel.
///
/// While active it hands out one [`Ticket`] per fetch and keeps a repeating
/// timer alive through [`Poller::subscription`]. Results come back through
/// [`Poller::resolve`], which is the only place that writes [`Prices`].
/// [`Poller::teardown`] is terminal: no more tickets, no timer, and results
/// still in flight are dropped when they land.
pub struct Poller {
    request: FetchRequest,
    interval: Duration,
    lifecycle: Lifecycle,
    next_seq: u64,
    last_applied: Option<Seq>,
}

impl Poller {
    pub fn new(request: FetchRequest, interval: Duration) -> Self {
        Self {
            request,
            interval,
            lifecycle: Lifecycle::Active,
            next_seq: 0,
            last_applied: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of fetches issued so far
    pub fn issued(&self) -> u64 {
        self.next_seq
    }

    pub fn issue(&mut self) -> Option<Ticket> {
        if !self.is_active() {
            return None;
        }

        let seq = Seq(self.next_seq);
        self.next_seq += 1;

        log::debug!("Issuing price fetch #{}", seq.0);

        Some(Ticket {
            seq,
            request: self.request.clone(),
        })
    }

    pub fn resolve(
        &mut self,
        seq: Seq,
        result: Result<QuoteSet, AdapterError>,
        prices: &mut Prices,
    ) -> Outcome {
        if !self.is_active() {
            log::debug!("Dropping price fetch #{} resolved after teardown", seq.0);
            return Outcome::Ignored(Ignored::TornDown);
        }

        if self.last_applied.is_some_and(|last| seq <= last) {
            log::debug!("Dropping stale price fetch #{}", seq.0);
            return Outcome::Ignored(Ignored::Stale);
        }

        match result {
            Ok(quotes) => {
                log::info!("Applied {} quotes from fetch #{}", quotes.len(), seq.0);
                *prices = Prices::Loaded(quotes);
                self.last_applied = Some(seq);
                Outcome::Applied
            }
            Err(e) => {
                log::warn!("Failed to fetch prices (#{}): {e}", seq.0);
                Outcome::Failed
            }
        }
    }

    pub fn teardown(&mut self) {
        if self.is_active() {
            log::info!("Price poller torn down after {} fetches", self.issued());
        }
        self.lifecycle = Lifecycle::TornDown;
    }

    pub fn subscription(&self) -> Subscription<Tick> {
        if self.is_active() {
            iced::time::every(self.interval).map(|_| Tick)
        } else {
            Subscription::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exchange::{Asset, PriceQuote};

    fn quotes(btc: f64) -> QuoteSet {
        [PriceQuote {
            asset: Asset::Bitcoin,
            price: btc,
            change_24h: Some(1.0),
        }]
        .into_iter()
        .collect()
    }

    fn poller() -> Poller {
        Poller::new(FetchRequest::default(), Duration::from_secs(60))
    }

    #[test]
    fn starts_loading_and_active() {
        let poller = poller();

        assert!(poller.is_active());
        assert_eq!(poller.issued(), 0);
        assert_eq!(Prices::default(), Prices::Loading);
    }

    #[test]
    fn tickets_are_sequential() {
        let mut poller = poller();

        let first = poller.issue().unwrap();
        let second = poller.issue().unwrap();

        assert!(first.seq < second.seq);
        assert_eq!(first.request, FetchRequest::default());
        assert_eq!(poller.issued(), 2);
    }

    #[test]
    fn success_replaces_prices() {
        let mut poller = poller();
        let mut prices = Prices::Loading;

        let ticket = poller.issue().unwrap();
        let outcome = poller.resolve(ticket.seq, Ok(quotes(65000.0)), &mut prices);

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(prices, Prices::Loaded(quotes(65000.0)));
    }

    #[test]
    fn failure_keeps_previous_prices() {
        let mut poller = poller();
        let mut prices = Prices::Loading;

        let first = poller.issue().unwrap();
        poller.resolve(first.seq, Ok(quotes(65000.0)), &mut prices);

        let second = poller.issue().unwrap();
        let outcome = poller.resolve(
            second.seq,
            Err(AdapterError::FetchError("connection refused".to_string())),
            &mut prices,
        );

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(prices, Prices::Loaded(quotes(65000.0)));
    }

    #[test]
    fn failure_before_first_success_stays_loading() {
        let mut poller = poller();
        let mut prices = Prices::Loading;

        let ticket = poller.issue().unwrap();
        poller.resolve(ticket.seq, Err(AdapterError::RateLimited), &mut prices);

        assert_eq!(prices, Prices::Loading);
    }

    #[test]
    fn older_response_cannot_overwrite_newer() {
        let mut poller = poller();
        let mut prices = Prices::Loading;

        let older = poller.issue().unwrap();
        let newer = poller.issue().unwrap();

        poller.resolve(newer.seq, Ok(quotes(70000.0)), &mut prices);
        let outcome = poller.resolve(older.seq, Ok(quotes(60000.0)), &mut prices);

        assert_eq!(outcome, Outcome::Ignored(Ignored::Stale));
        assert_eq!(prices, Prices::Loaded(quotes(70000.0)));
    }

    #[test]
    fn older_success_after_newer_failure_still_applies() {
        let mut poller = poller();
        let mut prices = Prices::Loading;

        let older = poller.issue().unwrap();
        let newer = poller.issue().unwrap();

        poller.resolve(newer.seq, Err(AdapterError::Status(503)), &mut prices);
        let outcome = poller.resolve(older.seq, Ok(quotes(60000.0)), &mut prices);

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(prices, Prices::Loaded(quotes(60000.0)));
    }

    #[test]
    fn teardown_stops_tickets_and_drops_inflight() {
        let mut poller = poller();
        let mut prices = Prices::Loading;

        let applied = poller.issue().unwrap();
        poller.resolve(applied.seq, Ok(quotes(65000.0)), &mut prices);

        let inflight = poller.issue().unwrap();
        poller.teardown();

        assert!(!poller.is_active());
        assert!(poller.issue().is_none());
        assert_eq!(poller.issued(), 2);

        let outcome = poller.resolve(inflight.seq, Ok(quotes(1.0)), &mut prices);
        assert_eq!(outcome, Outcome::Ignored(Ignored::TornDown));
        assert_eq!(prices, Prices::Loaded(quotes(65000.0)));
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut poller = poller();
        poller.teardown();
        poller.teardown();

        assert!(!poller.is_active());
        assert!(poller.issue().is_none());
    }
}
