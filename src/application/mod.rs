// Application layer - page state and the ports it depends on
pub mod page_session;
pub mod token_source;
