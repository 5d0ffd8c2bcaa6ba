use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::events::handlers::list_events,
        features::events::handlers::next_event,
        features::events::handlers::get_event,
        features::events::handlers::create_event,
        features::events::handlers::replace_sessions,
        features::predictions::handlers::submit_prediction,
        features::predictions::handlers::my_prediction,
        features::predictions::handlers::event_board,
        features::predictions::handlers::user_predictions,
        features::results::handlers::record_result,
        features::results::handlers::score_events,
        features::drivers::handlers::list_drivers,
        features::drivers::handlers::list_teams,
        features::drivers::handlers::create_driver,
        features::drivers::handlers::create_team,
        features::leaderboard::handlers::get_leaderboard,
    ),
    components(
        schemas(
            storage::dto::event::CreateEventRequest,
            storage::dto::event::ReplaceSessionsRequest,
            storage::dto::event::SessionItem,
            storage::dto::event::SessionResponse,
            storage::dto::event::EventSummaryResponse,
            storage::dto::event::EventDetailResponse,
            storage::dto::prediction::SubmitPredictionRequest,
            storage::dto::prediction::PredictionResponse,
            storage::dto::result::RecordResultRequest,
            storage::dto::result::ScoreEventsRequest,
            storage::dto::driver::CreateDriverRequest,
            storage::dto::driver::CreateTeamRequest,
            storage::dto::driver::DriverResponse,
            storage::dto::driver::TeamInfo,
            storage::dto::leaderboard::LeaderboardEntry,
            storage::services::scoring::ScoringReport,
            storage::models::Team,
            storage::models::Driver,
            storage::models::Event,
            storage::models::Session,
            storage::models::SessionType,
            storage::models::Prediction,
        )
    ),
    tags(
        (name = "events", description = "Race weekends, schedules, and lock status"),
        (name = "predictions", description = "User picks and public boards"),
        (name = "results", description = "Result entry and batch scoring (admin)"),
        (name = "drivers", description = "Driver and team lookup data"),
        (name = "leaderboard", description = "Season standings"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting prediction game API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let event_routes = features::events::routes(api_keys.clone())
        .merge(features::predictions::event_routes())
        .merge(features::results::event_routes(api_keys.clone()));

    let app = Router::new()
        .nest("/api/events", event_routes)
        .nest("/api/users", features::predictions::user_routes())
        .nest("/api/results", features::results::routes(api_keys.clone()))
        .nest("/api/drivers", features::drivers::routes(api_keys.clone()))
        .nest("/api/teams", features::drivers::team_routes(api_keys))
        .nest("/api/leaderboard", features::leaderboard::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await?;

    Ok(())
}
