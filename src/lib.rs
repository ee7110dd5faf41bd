//! Client core for the explorer classification and search service.
//!
//! Callers dispatch [`model::ModelIntent`]s through a [`store::Store`]; the
//! [`dispatch::IntentDispatcher`] performs any remote effect and produces
//! [`model::ModelEvent`]s, which the reducers fold into a new
//! [`model::AppState`] snapshot for observers.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod logging;
pub mod model;
pub mod mvi;
pub mod storage;
pub mod store;
