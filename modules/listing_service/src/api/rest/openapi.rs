//! OpenAPI document for the REST surface

use super::{dto::*, error::ErrorBody, routes};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::create_listing_handler,
        routes::get_listing_handler,
        routes::update_listing_handler,
        routes::delete_listing_handler,
        routes::list_listings_handler,
    ),
    components(schemas(
        ListingPayload,
        ListingDto,
        InsertAckDto,
        UpdateAckDto,
        DeleteAckDto,
        CreatedResponse,
        ListingResponse,
        UpdatedResponse,
        DeletedResponse,
        ListingsResponse,
        ErrorBody,
    )),
    tags((name = "listings", description = "Real-estate listing records"))
)]
pub struct ApiDoc;
