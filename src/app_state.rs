use sqlx::SqlitePool;
use std::sync::Arc;

use crate::config::Config;
use crate::email::Mailer;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub env: Config,
    pub mailer: Arc<Mailer>,
}

impl AppState {
    pub fn new(db: SqlitePool, env: Config, mailer: Arc<Mailer>) -> Self {
        Self { db, env, mailer }
    }
}
