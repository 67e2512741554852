use crate::dto::api_response::{ApiResponse, ListResponse, SelectOption};
use crate::dto::owner_dto::{
    CreateOwnerRequest, DUPLICATE_EMAIL, DUPLICATE_NAME, DUPLICATE_PHONE, OWNER_ADDED,
};
use crate::models::owner::Owner;
use crate::repositories::owner_repository::OwnerRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use tracing::info;

pub struct OwnerController {
    pool: PgPool,
}

impl OwnerController {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateOwnerRequest) -> Result<ApiResponse<Owner>, AppError> {
        let new_owner = request.into_new_owner()?;

        let mut tx = self.pool.begin().await?;

        // Unicidad: email, teléfono y nombre completo, en ese orden
        if OwnerRepository::email_exists(&mut tx, &new_owner.email).await? {
            return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
        }
        if OwnerRepository::phone_exists(&mut tx, &new_owner.phone).await? {
            return Err(AppError::Conflict(DUPLICATE_PHONE.to_string()));
        }
        if OwnerRepository::name_exists(&mut tx, &new_owner.first_name, &new_owner.last_name).await? {
            return Err(AppError::Conflict(DUPLICATE_NAME.to_string()));
        }

        let owner = OwnerRepository::create(&mut tx, &new_owner).await?;
        tx.commit().await?;

        info!("👥 Owner {} creado", owner.owner_id);
        Ok(ApiResponse::success_with_message(owner, OWNER_ADDED))
    }

    pub async fn list(&self) -> Result<ListResponse<Owner>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let owners = OwnerRepository::list_all(&mut conn).await?;

        Ok(ListResponse::from_records(owners, Owner::display_line))
    }

    /// Opciones del selector de propietario
    pub async fn options(&self) -> Result<Vec<SelectOption>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let owners = OwnerRepository::list_all(&mut conn).await?;

        Ok(owners
            .iter()
            .map(|owner| SelectOption {
                id: owner.owner_id,
                label: owner.full_name(),
            })
            .collect())
    }
}
