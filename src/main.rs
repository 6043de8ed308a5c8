use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use quiz_forge_server::{
    app_state::AppState,
    config::Config,
    graphql::create_schema,
    handlers::{get_state, graphiql, graphql, health_check},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("FATAL: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let allowed_origin = config.cors_allowed_origin.clone();

    log::info!(
        "Starting quiz server on {}:{} (model {}, {} questions per quiz)",
        bind_address.0,
        bind_address.1,
        config.model,
        config.question_count
    );
    log::info!(
        "GraphiQL playground: http://{}:{}/graphiql",
        bind_address.0,
        bind_address.1
    );

    let app_state = AppState::new(config);
    let schema = create_schema(app_state.clone());

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allow_any_method()
            .allow_any_header();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .service(graphql)
            .service(graphiql)
            .service(get_state)
            .service(health_check)
    })
    .bind(bind_address)?
    .run()
    .await
}
