use crate::events::{fetcher::FetchEvent, keyboard::Action};

pub mod fetcher;
pub mod keyboard;

pub enum ApplicationEvent {
    Action(Action),
    Fetch(FetchEvent),
}
