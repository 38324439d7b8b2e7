mod cart;
mod categories;
mod events;
mod health;
mod locations;
mod login;
mod orders;
mod payment_methods;
mod products;
mod profile;
mod register;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use crate::{middleware::auth_middleware, AppState};

pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/register", post(register::register_user))
        .route("/login", post(login::login_user))
        .route("/products", get(products::list_products))
        .route("/products/{id}", get(products::get_product))
        .route("/api/categories", get(categories::get_all_categories))
        .route("/api/categories/{code}", get(categories::get_category))
        .route("/api/events", get(events::get_events))
        .route("/api/events/{category_code}", get(events::get_events_by_category));

    let protected = Router::new()
        .route(
            "/user",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route(
            "/user/theme",
            get(profile::get_theme).put(profile::update_theme),
        )
        .route("/user/change-password", put(profile::change_password))
        .route("/user/cart", get(cart::get_cart).post(cart::add_to_cart))
        .route("/user/cart/{product_id}", delete(cart::remove_from_cart))
        .route(
            "/user/orders",
            get(orders::get_orders).post(orders::place_order),
        )
        .route("/buy-now", post(orders::buy_now))
        .route(
            "/user/payment-method",
            put(payment_methods::add_payment_method),
        )
        .route(
            "/user/payment-methods",
            get(payment_methods::get_payment_methods),
        )
        .route("/user/location", put(locations::add_location))
        .route(
            "/user/locations",
            get(locations::get_locations).put(locations::replace_locations),
        )
        .route("/products", post(products::create_product))
        .route("/api/categories", post(categories::create_category))
        .route("/api/events/add", post(events::add_event))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    public.merge(protected).with_state(state)
}
