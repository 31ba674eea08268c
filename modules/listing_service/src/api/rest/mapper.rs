//! Conversions between REST DTOs and contract models

use super::dto::*;
use crate::contract::{DeleteAck, InsertAck, Listing, ListingFields, UpdateAck};
use crate::domain::FilterParams;

impl From<ListingPayload> for ListingFields {
    fn from(payload: ListingPayload) -> Self {
        Self {
            market_price: payload.market_price,
            address: payload.address,
            zip_code: payload.zip_code,
            city: payload.city,
            state: payload.state,
            beds: payload.beds,
            baths: payload.baths,
            sqft: payload.sqft,
            year_built: payload.year_built,
        }
    }
}

impl From<Listing> for ListingDto {
    fn from(listing: Listing) -> Self {
        let fields = listing.fields;
        Self {
            id: listing.id.to_string(),
            market_price: fields.market_price,
            address: fields.address,
            zip_code: fields.zip_code,
            city: fields.city,
            state: fields.state,
            beds: fields.beds,
            baths: fields.baths,
            sqft: fields.sqft,
            year_built: fields.year_built,
        }
    }
}

impl From<InsertAck> for InsertAckDto {
    fn from(ack: InsertAck) -> Self {
        Self {
            inserted_id: ack.inserted_id.to_string(),
        }
    }
}

impl From<UpdateAck> for UpdateAckDto {
    fn from(ack: UpdateAck) -> Self {
        Self {
            matched_count: ack.matched_count,
            modified_count: ack.modified_count,
        }
    }
}

impl From<DeleteAck> for DeleteAckDto {
    fn from(ack: DeleteAck) -> Self {
        Self {
            deleted_count: ack.deleted_count,
        }
    }
}

impl FromIterator<(String, String)> for ListFilterQuery {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "market_price_min" => &mut query.market_price_min,
                "market_price_max" => &mut query.market_price_max,
                "beds_min" => &mut query.beds_min,
                "beds_max" => &mut query.beds_max,
                "baths_min" => &mut query.baths_min,
                "baths_max" => &mut query.baths_max,
                "sqft_min" => &mut query.sqft_min,
                "sqft_max" => &mut query.sqft_max,
                "year_built_min" => &mut query.year_built_min,
                "year_built_max" => &mut query.year_built_max,
                "states" => &mut query.states,
                "cities" => &mut query.cities,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }
}

impl From<ListFilterQuery> for FilterParams {
    fn from(query: ListFilterQuery) -> Self {
        Self {
            market_price_min: query.market_price_min,
            market_price_max: query.market_price_max,
            beds_min: query.beds_min,
            beds_max: query.beds_max,
            baths_min: query.baths_min,
            baths_max: query.baths_max,
            sqft_min: query.sqft_min,
            sqft_max: query.sqft_max,
            year_built_min: query.year_built_min,
            year_built_max: query.year_built_max,
            states: query.states,
            cities: query.cities,
        }
    }
}
