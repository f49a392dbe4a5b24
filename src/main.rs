use crate::{
    config::{Args, Config},
    events::{
        ApplicationEvent,
        fetcher::{FetchEvent, FetchRequest, Fetcher},
        keyboard::{Action, KeyboardHandler},
    },
    searchhandler::SearchHandler,
    sorting::{SortKey, SortState, sort_tracks},
    store::{Action as StoreAction, Store},
    track::Track,
    utils::selecthandler::SelectHandler,
};
use anyhow::Context;
use clap::Parser;
use log::{error, info};
use std::{
    sync::mpsc::{Receiver, Sender, channel},
    thread,
    time::Duration,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

mod config;
mod events;
mod fetch;
mod searchhandler;
mod sorting;
mod store;
mod track;
mod ui;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log4rs::init_file("log4rs.yaml", Default::default())
        .context("failed to load log4rs.yaml")?;

    info!("booting up");
    let config = Config::new(Args::parse());
    let mut app = App::new(config);
    app.run().await
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum CurrentScreen {
    TrackList(FocusedPane),
    Detail,
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum FocusedPane {
    Search,
    Results,
}

struct App {
    exit: bool,
    config: Config,
    store: Store,
    search_handler: SearchHandler,
    sort_state: SortState,
    select_handler: SelectHandler<Track>,
    current_screen: CurrentScreen,
    detail_track: Option<Track>,
    tick: u64,
    event_tx: Sender<ApplicationEvent>,
    event_rx: Receiver<ApplicationEvent>,
    fetch_tx: UnboundedSender<FetchRequest>,
    fetch_rx: Option<UnboundedReceiver<FetchRequest>>,
}

impl App {
    fn new(config: Config) -> Self {
        let (event_tx, event_rx) = channel::<ApplicationEvent>();
        let (fetch_tx, fetch_rx) = unbounded_channel::<FetchRequest>();
        App {
            exit: false,
            config,
            store: Store::new(),
            search_handler: SearchHandler::new(),
            sort_state: SortState::default(),
            select_handler: SelectHandler::new(),
            current_screen: CurrentScreen::TrackList(FocusedPane::Search),
            detail_track: None,
            tick: 0,
            event_tx,
            event_rx,
            fetch_tx,
            fetch_rx: Some(fetch_rx),
        }
    }

    async fn run(&mut self) -> anyhow::Result<()> {
        self.create_workers();
        self.load_catalog(self.config.initial_query.clone());

        let mut terminal = ratatui::init();
        let result = self.event_loop(&mut terminal);
        ratatui::restore();
        info!("shutting down");
        result
    }

    fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> anyhow::Result<()> {
        loop {
            if self.exit {
                return Ok(());
            }
            terminal.draw(|frame| ui::render(frame, self))?;
            if let Ok(event) = self.event_rx.try_recv() {
                match event {
                    ApplicationEvent::Action(action) => self.handle_action(action),
                    ApplicationEvent::Fetch(event) => self.handle_fetch_event(event),
                }
            }
            self.tick = self.tick.wrapping_add(1);
            thread::sleep(Duration::from_millis(5));
        }
    }

    fn create_workers(&mut self) {
        KeyboardHandler::new(self.event_tx.clone());
        if let Some(request_rx) = self.fetch_rx.take() {
            Fetcher::new(self.config.clone(), self.event_tx.clone(), request_rx);
        }
    }

    fn load_catalog(&mut self, term: String) {
        self.store.dispatch(StoreAction::ChangeSpinnerState);
        self.send_fetch(FetchRequest::Search(term));
    }

    fn handle_action(&mut self, action: Action) {
        if let Action::Quit = action {
            self.exit = true;
            return;
        }
        // While the spinner replaces the screen every other key is dead.
        if self.store.state().spinner {
            return;
        }
        match self.current_screen {
            CurrentScreen::TrackList(pane) => self.track_list_events(action, pane),
            CurrentScreen::Detail => self.detail_events(action),
        }
    }

    fn track_list_events(&mut self, action: Action, pane: FocusedPane) {
        match action {
            Action::SwitchWindow => {
                self.current_screen = CurrentScreen::TrackList(match pane {
                    FocusedPane::Search => FocusedPane::Results,
                    FocusedPane::Results => FocusedPane::Search,
                });
            }
            Action::MoveUp => {
                if let FocusedPane::Results = pane {
                    self.select_handler.up();
                }
            }
            Action::MoveDown => {
                if let FocusedPane::Results = pane {
                    self.select_handler.down();
                }
            }
            Action::Select => match pane {
                FocusedPane::Search => self.submit_search(),
                FocusedPane::Results => self.open_detail(),
            },
            Action::Char(char) => match pane {
                FocusedPane::Search => self.search_handler.add_char_to_query(char),
                FocusedPane::Results => self.results_command(char),
            },
            Action::Backspace => {
                if let FocusedPane::Search = pane {
                    self.search_handler.remove_last_char();
                }
            }
            Action::Esc => {
                if let FocusedPane::Search = pane {
                    self.current_screen = CurrentScreen::TrackList(FocusedPane::Results);
                }
            }
            Action::Quit => {}
        }
    }

    fn results_command(&mut self, char: char) {
        match char {
            'l' => self.toggle_sort(SortKey::Length),
            'g' => self.toggle_sort(SortKey::Genre),
            'p' => self.toggle_sort(SortKey::Price),
            'c' => self.clean_search(),
            '/' => self.current_screen = CurrentScreen::TrackList(FocusedPane::Search),
            'q' => self.exit = true,
            _ => {}
        }
    }

    fn detail_events(&mut self, action: Action) {
        match action {
            Action::Esc | Action::Backspace => {
                self.current_screen = CurrentScreen::TrackList(FocusedPane::Results);
                self.detail_track = None;
            }
            Action::Char('q') => self.exit = true,
            _ => {}
        }
    }

    fn submit_search(&mut self) {
        let Some(term) = self.search_handler.submit() else {
            return;
        };
        info!("searching the catalog for '{term}'");
        self.store
            .dispatch(StoreAction::UpdateSearchedTrack(term.clone()));
        self.store.dispatch(StoreAction::ChangeSpinnerState);
        self.send_fetch(FetchRequest::Search(term));
        self.refresh_rows();
    }

    fn clean_search(&mut self) {
        self.store.dispatch(StoreAction::CleanSearch);
        self.search_handler.clear();
        self.refresh_rows();
    }

    fn toggle_sort(&mut self, key: SortKey) {
        self.sort_state.toggle(key);
        info!("sorting the catalog by {}", key.field());
        self.refresh_rows();
    }

    fn open_detail(&mut self) {
        let Some(track) = self.select_handler.selected().cloned() else {
            return;
        };
        self.store
            .dispatch(StoreAction::UpdateTrackId(track.track_id));
        self.send_fetch(FetchRequest::Lookup(track.track_id));
        self.detail_track = Some(track);
        self.current_screen = CurrentScreen::Detail;
    }

    fn handle_fetch_event(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Loaded(tracks) => {
                self.store.dispatch(StoreAction::TracksLoaded(tracks));
                self.store.dispatch(StoreAction::ChangeSpinnerState);
                self.refresh_rows();
            }
            FetchEvent::Failed(message) => {
                self.store.dispatch(StoreAction::TracksFailed(message));
                self.store.dispatch(StoreAction::ChangeSpinnerState);
                self.refresh_rows();
            }
            FetchEvent::DetailLoaded(track) => {
                // Ignore a refresh that raced a newer selection.
                if self.store.state().track_id == Some(track.track_id) {
                    self.detail_track = Some(*track);
                }
            }
            FetchEvent::DetailFailed(message) => {
                self.store.dispatch(StoreAction::TracksFailed(message));
            }
        }
    }

    /// Rebuild the rendered rows: the searched view is shown verbatim, the
    /// full catalog gets the applied column sort.
    fn refresh_rows(&mut self) {
        let mut rows = self.store.visible_tracks().to_vec();
        if self.store.state().track_searched.is_empty() {
            if let Some((key, order)) = self.sort_state.applied() {
                sort_tracks(&mut rows, key, order);
            }
        }
        self.select_handler.set_items(rows);
    }

    fn send_fetch(&mut self, request: FetchRequest) {
        if self.fetch_tx.send(request).is_err() {
            error!("fetch worker is gone, dropping the request");
            self.store.dispatch(StoreAction::TracksFailed(String::from(
                "catalog worker is not running",
            )));
            if self.store.state().spinner {
                self.store.dispatch(StoreAction::ChangeSpinnerState);
            }
        }
    }
}
