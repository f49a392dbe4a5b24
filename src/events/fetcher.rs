use std::sync::mpsc::Sender;

use log::{error, info};
use reqwest::Client;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::{
    config::Config,
    events::ApplicationEvent,
    fetch::{lookup_track, search_tracks},
    track::Track,
};

pub enum FetchRequest {
    Search(String),
    Lookup(u64),
}

pub enum FetchEvent {
    Loaded(Vec<Track>),
    Failed(String),
    DetailLoaded(Box<Track>),
    DetailFailed(String),
}

/// Background worker that owns the HTTP client. Requests come in over the
/// tokio channel, results go back to the draw loop as application events.
pub struct Fetcher {
    client: Client,
    config: Config,
    event_tx: Sender<ApplicationEvent>,
    request_rx: UnboundedReceiver<FetchRequest>,
}

impl Fetcher {
    pub fn new(
        config: Config,
        event_tx: Sender<ApplicationEvent>,
        request_rx: UnboundedReceiver<FetchRequest>,
    ) {
        tokio::spawn(async move {
            Fetcher {
                client: Client::new(),
                config,
                event_tx,
                request_rx,
            }
            .run()
            .await;
        });
    }

    async fn run(mut self) {
        while let Some(request) = self.request_rx.recv().await {
            let event = match request {
                FetchRequest::Search(term) => self.search(&term).await,
                FetchRequest::Lookup(id) => self.lookup(id).await,
            };
            if self.event_tx.send(ApplicationEvent::Fetch(event)).is_err() {
                return;
            }
        }
    }

    async fn search(&self, term: &str) -> FetchEvent {
        match search_tracks(&self.client, &self.config, term).await {
            Ok(tracks) => {
                info!("catalog returned {} tracks for '{term}'", tracks.len());
                FetchEvent::Loaded(tracks)
            }
            Err(err) => {
                error!("track search for '{term}' failed: {err}");
                FetchEvent::Failed(err.to_string())
            }
        }
    }

    async fn lookup(&self, id: u64) -> FetchEvent {
        match lookup_track(&self.client, &self.config, id).await {
            Ok(Some(track)) => FetchEvent::DetailLoaded(Box::new(track)),
            Ok(None) => FetchEvent::DetailFailed(format!("track {id} is not in the catalog")),
            Err(err) => {
                error!("track lookup for {id} failed: {err}");
                FetchEvent::DetailFailed(err.to_string())
            }
        }
    }
}
