use crate::dto::address_dto::{CreateAddressRequest, ADDRESS_ADDED};
use crate::dto::api_response::{ApiResponse, ListResponse};
use crate::dto::owner_dto::OWNER_NOT_FOUND;
use crate::models::address::Address;
use crate::repositories::address_repository::AddressRepository;
use crate::repositories::owner_repository::OwnerRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use tracing::info;

pub struct AddressController {
    pool: PgPool,
}

impl AddressController {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateAddressRequest) -> Result<ApiResponse<Address>, AppError> {
        let new_address = request.into_new_address()?;

        let mut tx = self.pool.begin().await?;
        if !OwnerRepository::exists(&mut tx, new_address.owner_id).await? {
            return Err(AppError::NotFound(OWNER_NOT_FOUND.to_string()));
        }

        let address = AddressRepository::create(&mut tx, &new_address).await?;
        tx.commit().await?;

        info!("📍 Dirección {} creada para owner {}", address.address_id, address.owner_id);
        Ok(ApiResponse::success_with_message(address, ADDRESS_ADDED))
    }

    pub async fn list(&self) -> Result<ListResponse<Address>, AppError> {
        let mut conn = self.pool.acquire().await?;
        let addresses = AddressRepository::list_all(&mut conn).await?;

        Ok(ListResponse::from_records(addresses, Address::display_line))
    }
}
