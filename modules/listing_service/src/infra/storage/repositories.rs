//! MongoDB repository implementation

use super::entity::ListingDocument;
use super::{
    filter::query_document,
    mapper::{scan_documents, set_document},
};
use crate::contract::{DeleteAck, Listing, ListingFields, ListingId, ListingScan, UpdateAck};
use crate::domain::filter::ListingFilter;
use crate::domain::repository::ListingRepository;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

pub struct MongoListingRepository {
    collection: Collection<ListingDocument>,
}

impl MongoListingRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection(collection_name),
        }
    }

    fn id_query(id: ListingId) -> Document {
        doc! { "_id": id.as_object_id() }
    }
}

#[async_trait]
impl ListingRepository for MongoListingRepository {
    async fn insert(&self, fields: &ListingFields) -> Result<ListingId> {
        let result = self
            .collection
            .insert_one(ListingDocument::from(fields))
            .await?;

        result
            .inserted_id
            .as_object_id()
            .map(ListingId::from)
            .ok_or_else(|| anyhow!("store returned a non-ObjectId _id: {}", result.inserted_id))
    }

    async fn find_by_id(&self, id: ListingId) -> Result<Option<Listing>> {
        let found = self.collection.find_one(Self::id_query(id)).await?;
        found.map(Listing::try_from).transpose()
    }

    async fn update_by_id(&self, id: ListingId, fields: &ListingFields) -> Result<UpdateAck> {
        let result = self
            .collection
            .update_one(Self::id_query(id), doc! { "$set": set_document(fields) })
            .await?;

        Ok(UpdateAck {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_by_id(&self, id: ListingId) -> Result<DeleteAck> {
        let result = self.collection.delete_one(Self::id_query(id)).await?;
        Ok(DeleteAck {
            deleted_count: result.deleted_count,
        })
    }

    async fn find(&self, filter: &ListingFilter) -> Result<ListingScan> {
        // Scan raw documents so a single bad document is counted instead of
        // failing the cursor.
        let documents: Vec<Document> = self
            .collection
            .clone_with_type::<Document>()
            .find(query_document(filter))
            .await?
            .try_collect()
            .await
            .context("listing cursor failed")?;

        Ok(scan_documents(documents))
    }
}
