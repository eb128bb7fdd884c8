//! Event loop that drives a [`Storefront`].
//!
//! One task owns the controller and selects over three sources: UI events,
//! the next timer deadline, and fetches in flight. After every wake-up the
//! rendered page is published on a watch channel.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use storefront_data::{RatingsClient, SearchClient};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::event::Event;
use crate::page::Page;
use crate::storefront::{Completion, Effect, Storefront};

/// Everything the runtime fetches from.
pub trait StorefrontApi: SearchClient + RatingsClient {}

impl<T: SearchClient + RatingsClient> StorefrontApi for T {}

/// Handle to a running session.
pub struct SessionHandle {
    events: mpsc::Sender<Event>,
    pages: watch::Receiver<Page>,
    task: JoinHandle<Page>,
}

impl SessionHandle {
    /// Queue a UI event.
    pub async fn send(&self, event: Event) -> Result<(), SessionError> {
        self.events
            .send(event)
            .await
            .map_err(|_| SessionError::Closed)
    }

    /// Receiver that sees every published page.
    pub fn subscribe(&self) -> watch::Receiver<Page> {
        self.pages.clone()
    }

    /// The most recently published page.
    pub fn page(&self) -> Page {
        self.pages.borrow().clone()
    }

    /// Stop accepting events and wait for pending work to settle: a
    /// debounced search still fires, and every fetch in flight completes.
    /// Returns the final page.
    pub async fn finish(self) -> Result<Page, SessionError> {
        drop(self.events);
        self.task.await.map_err(|_| SessionError::Closed)
    }
}

/// Start a session on the current tokio runtime.
///
/// The initial search and the ratings load are issued immediately.
pub fn spawn<C>(client: Arc<C>, config: SessionConfig) -> SessionHandle
where
    C: StorefrontApi + 'static,
{
    let (events_tx, events_rx) = mpsc::channel(config.event_buffer.max(1));
    let storefront = Storefront::new(config);
    let (pages_tx, pages_rx) = watch::channel(storefront.render());

    let runtime = Runtime {
        storefront,
        client,
        events: events_rx,
        pages: pages_tx,
        in_flight: FuturesUnordered::new(),
        accepting: true,
    };

    SessionHandle {
        events: events_tx,
        pages: pages_rx,
        task: tokio::spawn(runtime.run()),
    }
}

enum Wake {
    Event(Option<Event>),
    Completed(Completion),
    Timer,
}

struct Runtime<C> {
    storefront: Storefront,
    client: Arc<C>,
    events: mpsc::Receiver<Event>,
    pages: watch::Sender<Page>,
    in_flight: FuturesUnordered<BoxFuture<'static, Completion>>,
    accepting: bool,
}

impl<C> Runtime<C>
where
    C: StorefrontApi + 'static,
{
    async fn run(mut self) -> Page {
        info!("session started");
        let effects = self.storefront.start();
        self.execute(effects);
        self.publish();

        while self.accepting
            || !self.in_flight.is_empty()
            || self.storefront.has_pending_search()
        {
            let deadline = self.storefront.next_deadline();
            let wake = tokio::select! {
                event = self.events.recv(), if self.accepting => Wake::Event(event),
                Some(done) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    Wake::Completed(done)
                }
                _ = sleep_until(deadline.unwrap_or_else(far_future)), if deadline.is_some() => {
                    Wake::Timer
                }
                else => break,
            };

            let now = Instant::now();
            let effects = match wake {
                Wake::Event(Some(event)) => {
                    debug!(?event, "event");
                    self.storefront.handle(event, now)
                }
                Wake::Event(None) => {
                    debug!("event channel closed, draining");
                    self.accepting = false;
                    Vec::new()
                }
                Wake::Completed(done) => self.storefront.complete(done, now),
                Wake::Timer => self.storefront.poll_timers(now),
            };
            self.execute(effects);
            self.publish();
        }

        info!(
            searches = self.storefront.issued_generation(),
            cart_items = self.storefront.cart().len(),
            "session finished"
        );
        self.storefront.render()
    }

    fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            let client = Arc::clone(&self.client);
            let fetch: BoxFuture<'static, Completion> = match effect {
                Effect::Search(ticket) => Box::pin(async move {
                    let result = client.search(&ticket.request).await;
                    Completion::Search {
                        generation: ticket.generation,
                        result,
                    }
                }),
                Effect::LoadRatings => {
                    Box::pin(async move { Completion::RatingsLoaded(client.load_ratings().await) })
                }
                Effect::SubmitRating(submission) => Box::pin(async move {
                    let result = client.submit_rating(&submission).await;
                    Completion::RatingSubmitted { submission, result }
                }),
            };
            self.in_flight.push(fetch);
        }
    }

    fn publish(&self) {
        self.pages.send_replace(self.storefront.render());
    }
}

fn far_future() -> Instant {
    Instant::now() + Duration::from_secs(86_400)
}
