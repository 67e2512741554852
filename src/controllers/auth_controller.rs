use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, SignupRequest};
use crate::models::user::UserResponse;
use crate::repositories::user_repository::{UserRepository, USERNAME_TAKEN};
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::password::PasswordScheme;
use sqlx::PgPool;
use tracing::{info, warn};

pub const INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const SIGNUP_SUCCESS: &str = "Sign up successful! You can now log in.";
pub const USER_NOT_FOUND: &str = "User not found.";

pub struct AuthController {
    pool: PgPool,
    jwt: JwtConfig,
    scheme: PasswordScheme,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt: JwtConfig, scheme: PasswordScheme) -> Self {
        Self { pool, jwt, scheme }
    }

    /// Login: un token válido equivale a la sesión iniciada
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.check_required()?;

        let mut conn = self.pool.acquire().await?;
        let user = UserRepository::find_by_username(&mut conn, &request.username)
            .await?
            .ok_or_else(|| AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;
        drop(conn);

        let valid = match self.scheme.verify(&request.password, &user.password) {
            Ok(valid) => valid,
            Err(e) => {
                // Fila guardada con otro esquema
                warn!("⚠️ No se pudo verificar la contraseña de '{}': {}", user.username, e);
                false
            }
        };
        if !valid {
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let token = generate_token(&user, &self.jwt)?;
        info!("🔐 Login exitoso para '{}'", user.username);

        Ok(LoginResponse::new(token, self.jwt.expiration, user.into()))
    }

    /// Registro: crea el usuario pero no inicia sesión
    pub async fn signup(&self, request: SignupRequest) -> Result<ApiResponse<UserResponse>, AppError> {
        request.check_required()?;

        let mut tx = self.pool.begin().await?;
        if UserRepository::username_exists(&mut tx, &request.username).await? {
            return Err(AppError::Conflict(USERNAME_TAKEN.to_string()));
        }

        let stored_password = self.scheme.hash(&request.password)?;
        let user = UserRepository::create(&mut tx, &request.username, &stored_password).await?;
        tx.commit().await?;

        info!("👤 Usuario '{}' registrado", user.username);
        Ok(ApiResponse::success_with_message(user.into(), SIGNUP_SUCCESS))
    }

    /// Usuario de la sesión actual
    pub async fn me(&self, user_id: i32) -> Result<UserResponse, AppError> {
        let mut conn = self.pool.acquire().await?;
        let user = UserRepository::find_by_id(&mut conn, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        Ok(user.into())
    }
}
