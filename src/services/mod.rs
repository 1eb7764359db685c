pub mod analysis_session;
pub mod history_store;
