use axum::Router;
use axum_helpers::{JwtAuth, health_router, jwt_auth_middleware};
use domain_products::handlers as product_handlers;
use domain_products::{InMemoryProductRepository, ProductService};
use domain_users::auth_handlers::{self, AuthState};
use domain_users::handlers as user_handlers;
use domain_users::{InMemoryUserRepository, UserService};

/// Compose the application router.
///
/// `/register` and `/login` are open; every `/users` and `/products` route
/// sits behind the bearer token middleware, so unauthenticated requests are
/// rejected before any handler logic runs. `/health` stays open for
/// liveness probes.
pub fn routes(
    user_service: UserService<InMemoryUserRepository>,
    product_service: ProductService<InMemoryProductRepository>,
    jwt_auth: JwtAuth,
) -> Router {
    let auth_routes = auth_handlers::router(AuthState {
        service: user_service.clone(),
        jwt_auth: jwt_auth.clone(),
    });

    let protected = Router::new()
        .nest("/users", user_handlers::router(user_service))
        .nest("/products", product_handlers::router(product_service))
        .layer(axum::middleware::from_fn_with_state(
            jwt_auth,
            jwt_auth_middleware,
        ));

    Router::new()
        .merge(auth_routes)
        .merge(protected)
        .merge(health_router())
}
