//! Listing repository: runs compiled statements and maps rows to records.
//!
//! Every public operation validates its input first, so an invalid filter
//! never reaches the store. Store failures propagate unchanged inside
//! [`RepositoryError::Store`]; lookups that match nothing return `None` or
//! an empty list.

use crate::{error::RepositoryError, sql::base::executor::StoreExecutor};
use lightbnb_model::{
    core::identifiers::UserId,
    records::{
        FromRow,
        property::{NewProperty, Property},
        reservation::Reservation,
        user::{NewUser, User},
    },
    search::{Limit, SearchFilter, SearchOptions},
};
use lightbnb_planner::{
    CompiledQuery,
    catalog::{self, PROPERTIES, RESERVATIONS, USERS},
};
use tracing::{debug, error, info};

pub struct ListingRepository<E> {
    executor: E,
}

impl<E: StoreExecutor> ListingRepository<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub async fn user_with_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let user = self
            .fetch_one::<User>(USERS, catalog::user_by_email(email))
            .await?;
        if user.is_none() {
            info!(email, "No user found with email");
        }
        Ok(user)
    }

    pub async fn user_with_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let user = self
            .fetch_one::<User>(USERS, catalog::user_by_id(id))
            .await?;
        if user.is_none() {
            info!(%id, "No user found with id");
        }
        Ok(user)
    }

    /// Stores a user whose password has already been hashed by the caller.
    pub async fn add_user(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let created = self
            .fetch_one::<User>(USERS, catalog::insert_user(user))
            .await?
            .ok_or(RepositoryError::MissingRow(USERS))?;
        info!(id = %created.id, "Added user");
        Ok(created)
    }

    /// Reservations of one guest, newest first. `limit` defaults to 10.
    pub async fn reservations_for_guest(
        &self,
        guest_id: UserId,
        limit: Option<i64>,
    ) -> Result<Vec<Reservation>, RepositoryError> {
        let limit = limit.map(Limit::new).transpose()?.unwrap_or_default();
        let reservations = self
            .fetch_all::<Reservation>(
                RESERVATIONS,
                catalog::reservations_for_guest(guest_id, limit),
            )
            .await?;
        if reservations.is_empty() {
            info!(%guest_id, "No reservations found for guest");
        }
        Ok(reservations)
    }

    /// Validates raw search options and runs the property search.
    pub async fn search_properties(
        &self,
        options: &SearchOptions,
    ) -> Result<Vec<Property>, RepositoryError> {
        let filter = options.validate()?;
        self.search_with_filter(&filter).await
    }

    pub async fn search_with_filter(
        &self,
        filter: &SearchFilter,
    ) -> Result<Vec<Property>, RepositoryError> {
        let properties = self
            .fetch_all::<Property>(PROPERTIES, catalog::search_properties(filter))
            .await?;
        debug!(found = properties.len(), "Property search finished");
        Ok(properties)
    }

    pub async fn add_property(&self, property: &NewProperty) -> Result<Property, RepositoryError> {
        let created = self
            .fetch_one::<Property>(PROPERTIES, catalog::insert_property(property))
            .await?
            .ok_or(RepositoryError::MissingRow(PROPERTIES))?;
        info!(id = %created.id, owner_id = %created.owner_id, "Added property");
        Ok(created)
    }

    async fn fetch_one<T: FromRow>(
        &self,
        entity: &'static str,
        query: CompiledQuery,
    ) -> Result<Option<T>, RepositoryError> {
        Ok(self.fetch_all(entity, query).await?.into_iter().next())
    }

    async fn fetch_all<T: FromRow>(
        &self,
        entity: &'static str,
        query: CompiledQuery,
    ) -> Result<Vec<T>, RepositoryError> {
        debug!(
            entity,
            sql = query.text(),
            params = query.parameters().len(),
            "Executing statement"
        );

        let mut rows = self
            .executor
            .query(query.text(), query.parameters())
            .await
            .map_err(|err| {
                error!(entity, %err, "Statement failed");
                err
            })?;

        rows.iter_mut()
            .map(|row| {
                entity.clone_into(&mut row.entity);
                T::from_row(row).map_err(RepositoryError::from)
            })
            .collect()
    }
}
