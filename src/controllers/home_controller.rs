use crate::dto::home_dto::HomeResponse;
use crate::models::menu::{MenuEntry, MenuItem};
use crate::repositories::stats_repository::StatsRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct HomeController {
    pool: PgPool,
}

impl HomeController {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn home(&self) -> Result<HomeResponse, AppError> {
        let mut conn = self.pool.acquire().await?;
        let stats = StatsRepository::home_stats(&mut conn).await?;

        Ok(HomeResponse::new(stats))
    }

    pub fn menu() -> Vec<MenuEntry> {
        MenuItem::ALL.into_iter().map(MenuEntry::from).collect()
    }
}
