use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile},
        cart::{AddToCartRequest, AddToCartResponse, CartItemRequest, CartResponse},
        checkout::{CheckoutResponse, CheckoutSummary},
        products::ProductList,
    },
    models::{CartLine, CheckoutLine, Product},
    response::{ErrorDetail, MessageResponse},
    routes::{auth, cart, checkout, health, home, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        home::home,
        health::health_check,
        products::list_products,
        products::get_product,
        auth::register,
        auth::login,
        cart::add_to_cart,
        cart::get_cart,
        checkout::checkout
    ),
    components(
        schemas(
            Product,
            ProductList,
            CartLine,
            CartItemRequest,
            AddToCartRequest,
            AddToCartResponse,
            CartResponse,
            CheckoutLine,
            CheckoutSummary,
            CheckoutResponse,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            UserProfile,
            MessageResponse,
            ErrorDetail,
            health::HealthData
        )
    ),
    tags(
        (name = "Home", description = "Welcome endpoint"),
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Product catalog endpoints"),
        (name = "Auth", description = "Registration and login endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Checkout", description = "Checkout summary endpoint"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
