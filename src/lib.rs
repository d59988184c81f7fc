pub mod application;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use db::{create_pool, DbPool};

/// Concrete service wirings used by the HTTP layer.
pub type Catalog = application::CatalogService<infrastructure::DieselCatalogStore>;
pub type Checkout = application::CheckoutService<infrastructure::DieselOrderStore>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

#[derive(OpenApi)]
#[openapi(
    paths(handlers::api::storefront_get, handlers::api::storefront_post),
    components(schemas(
        handlers::api::ProductResponse,
        handlers::api::OrderResponse,
        handlers::api::CheckoutRequest,
        handlers::api::CheckoutItemRequest,
        handlers::api::CheckoutResponse,
        handlers::api::UpdateStockRequest,
    )),
    tags((name = "storefront", description = "Catalog, orders and checkout"))
)]
pub struct ApiDoc;

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) {
    let mut conn = pool
        .get()
        .expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");
}

/// Insert the demo catalog when the products table is empty.
pub fn seed_catalog(pool: &DbPool) {
    let catalog = infrastructure::DieselCatalogStore::new(pool.clone());
    match catalog.seed_demo_products() {
        Ok(0) => {}
        Ok(n) => log::info!("Seeded {} demo products", n),
        Err(e) => log::warn!("Catalog seeding failed: {}", e),
    }
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    Ok(HttpServer::new(move || {
        let catalog = web::Data::new(Catalog::new(infrastructure::DieselCatalogStore::new(
            pool.clone(),
        )));
        let checkout = web::Data::new(Checkout::new(infrastructure::DieselOrderStore::new(
            pool.clone(),
        )));

        // The storefront is served from arbitrary origins; the API accepts
        // only GET and POST.
        let cors = Cors::default()
            .allow_any_origin()
            .send_wildcard()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_header(http::header::CONTENT_TYPE);

        App::new()
            .app_data(catalog)
            .app_data(checkout)
            .wrap(cors)
            .wrap(Logger::default())
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .route("/", web::get().to(handlers::api::storefront_get))
            .route("/", web::post().to(handlers::api::storefront_post))
            .default_service(web::to(handlers::api::method_not_allowed))
    })
    .bind((host.to_string(), port))?
    .run())
}
