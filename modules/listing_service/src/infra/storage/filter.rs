//! Translation of [`ListingFilter`] into a MongoDB query document

use crate::domain::filter::{ListingFilter, RangeBound};
use mongodb::bson::{doc, Document};

/// Build the query document for a filtered scan. An empty filter yields `{}`.
pub fn query_document(filter: &ListingFilter) -> Document {
    let mut query = Document::new();

    if let Some(RangeBound { min, max }) = filter.market_price {
        query.insert("market_price", doc! { "$gte": min, "$lte": max });
    }

    let counts = [
        ("beds", filter.beds),
        ("baths", filter.baths),
        ("sqft", filter.sqft),
        ("year_built", filter.year_built),
    ];
    for (field, bound) in counts {
        if let Some(RangeBound { min, max }) = bound {
            query.insert(field, doc! { "$gte": i64::from(min), "$lte": i64::from(max) });
        }
    }

    if let Some(states) = &filter.states {
        query.insert("state", doc! { "$in": states.clone() });
    }
    if let Some(cities) = &filter.cities {
        query.insert("city", doc! { "$in": cities.clone() });
    }

    query
}
