//! Document to model mappers
//!
//! Conversions between stored listing documents and contract models, plus
//! the `$set` document used by update-by-id and the decoder for list scans.

use super::entity::ListingDocument;
use crate::contract::{Listing, ListingFields, ListingScan};
use anyhow::anyhow;
use mongodb::bson::{self, doc, Document};

impl TryFrom<ListingDocument> for Listing {
    type Error = anyhow::Error;

    fn try_from(document: ListingDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| anyhow!("listing document has no _id"))?;

        Ok(Self {
            id: id.into(),
            fields: ListingFields {
                market_price: document.market_price,
                address: document.address,
                zip_code: document.zip_code,
                city: document.city,
                state: document.state,
                beds: document.beds,
                baths: document.baths,
                sqft: document.sqft,
                year_built: document.year_built,
            },
        })
    }
}

impl From<&ListingFields> for ListingDocument {
    fn from(fields: &ListingFields) -> Self {
        Self {
            id: None,
            market_price: fields.market_price,
            address: fields.address.clone(),
            zip_code: fields.zip_code.clone(),
            city: fields.city.clone(),
            state: fields.state.clone(),
            beds: fields.beds,
            baths: fields.baths,
            sqft: fields.sqft,
            year_built: fields.year_built,
        }
    }
}

/// Every mutable field, for a full-replace `$set`
pub fn set_document(fields: &ListingFields) -> Document {
    doc! {
        "market_price": fields.market_price,
        "address": fields.address.as_str(),
        "zip_code": fields.zip_code.as_str(),
        "city": fields.city.as_str(),
        "state": fields.state.as_str(),
        "beds": i64::from(fields.beds),
        "baths": i64::from(fields.baths),
        "sqft": i64::from(fields.sqft),
        "year_built": i64::from(fields.year_built),
    }
}

/// Decode scanned documents, counting the ones that are not listings.
///
/// A document without an `_id` or with a field of the wrong type or range is
/// skipped; the rest keep their scan order.
pub fn scan_documents<I>(documents: I) -> ListingScan
where
    I: IntoIterator<Item = Document>,
{
    let mut scan = ListingScan::default();
    for raw in documents {
        match decode_listing(raw) {
            Ok(listing) => scan.listings.push(listing),
            Err(e) => {
                tracing::debug!(error = %e, "Undecodable listing document");
                scan.skipped += 1;
            }
        }
    }
    scan
}

fn decode_listing(raw: Document) -> anyhow::Result<Listing> {
    let document: ListingDocument = bson::from_document(raw)?;
    Listing::try_from(document)
}
