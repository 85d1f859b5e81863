pub mod api;
pub mod modules;
pub use modules::auth;
pub use modules::content;
pub use modules::profile;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginUserUseCase};

use crate::content::adapter::incoming::web::resource_routes::{
    resource_scope, ResourceApi, ResourceState,
};
use crate::content::adapter::outgoing::sea_orm_store::SeaOrmContentStore;
use crate::content::application::service::crud_service::CrudService;
use crate::content::resources::experience::{ExperienceApi, ExperienceMapper};
use crate::content::resources::project::{ProjectApi, ProjectMapper};
use crate::content::resources::reference::{ReferenceApi, ReferenceMapper};
use crate::content::resources::skill::{SkillApi, SkillMapper};
use crate::content::resources::tech_stack::{TechStackApi, TechStackMapper};

use crate::profile::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::profile::application::ports::incoming::use_cases::ProfileUseCase;
use crate::profile::application::service::profile_service::ProfileService;

use actix_cors::Cors;
use actix_web::{http, web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub profile: Arc<dyn ProfileUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env_name = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    // Browser origins allowed to call the API; non-browser clients carry no
    // Origin header and pass through untouched.
    let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000".to_string())
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Auth components
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let password_hasher = Argon2Hasher::from_env();
    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let login_user_use_case = LoginUserUseCase::new(
        user_query,
        Arc::new(password_hasher),
        Arc::new(jwt_service.clone()),
    );

    // Singleton profile
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let profile_service = ProfileService::new(profile_repo);

    // Collection resources, all driven by the one engine
    let experiences = crud_state::<ExperienceApi, ExperienceMapper>(&db_arc);
    let projects = crud_state::<ProjectApi, ProjectMapper>(&db_arc);
    let skills = crud_state::<SkillApi, SkillMapper>(&db_arc);
    let tech_stack = crud_state::<TechStackApi, TechStackMapper>(&db_arc);
    let references = crud_state::<ReferenceApi, ReferenceMapper>(&db_arc);

    let state = AppState {
        login_user_use_case: Arc::new(login_user_use_case),
        profile: Arc::new(profile_service),
    };

    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
            .supports_credentials()
            .max_age(3600);
        for origin in &cors_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(shared::api::json_config::custom_json_config())
            .wrap(cors)
            .configure(init_routes)
            .service(resource_scope::<ExperienceApi>(experiences.clone()))
            .service(resource_scope::<ProjectApi>(projects.clone()))
            .service(resource_scope::<SkillApi>(skills.clone()))
            .service(resource_scope::<TechStackApi>(tech_stack.clone()))
            .service(resource_scope::<ReferenceApi>(references.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn crud_state<A, M>(db: &Arc<DatabaseConnection>) -> ResourceState<A>
where
    A: ResourceApi,
    M: crate::content::adapter::outgoing::sea_orm_store::ContentMapper<
        View = A::View,
        CreateData = A::CreateData,
        UpdateData = A::UpdateData,
    >,
    SeaOrmContentStore<M>: crate::content::application::ports::outgoing::content_store::ContentStore<
        View = A::View,
        CreateData = A::CreateData,
        UpdateData = A::UpdateData,
    >,
{
    ResourceState::new(Arc::new(CrudService::new(
        A::RESOURCE,
        SeaOrmContentStore::<M>::new(Arc::clone(db)),
    )))
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    // Profile (singleton, id-less routes)
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::create_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::update_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::delete_profile_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
