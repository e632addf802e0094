#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::{routing::get, Router};
    use leptos::{config::get_configuration, logging::log};
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use signin_web::app::{shell, App};

    dotenvy::dotenv().ok();
    simple_logger::init_with_level(log::Level::Info).expect("couldn't initialize logging");

    let conf = get_configuration(None).unwrap();
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .route("/healthz", get(healthz))
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(axum::middleware::from_fn(
            signin_web::middleware::http_logging_middleware,
        ))
        .with_state(leptos_options);

    log!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(feature = "ssr")]
async fn healthz() -> &'static str {
    "OK"
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // hydration is driven by the `hydrate` entry point in lib.rs
}
