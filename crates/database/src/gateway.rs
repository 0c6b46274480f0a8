//! Transactional access to the datastore.
//!
//! Every write goes through a [`Session`]: referenced rows are resolved first
//! with [`Session::find_by_id`], then a single write consumes the session and
//! either commits or rolls back before its error is translated. A session
//! dropped before it is finished rolls back, so no exit path leaves a
//! transaction open.

use crate::{db::DatabaseConfig, error::ServiceError};
use log::{debug, warn};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, IntoActiveModel, PrimaryKeyTrait, TransactionTrait,
};
use serde_json::{Value, json};

/// An entity that can be looked up by its integer id
pub trait Record: EntityTrait {
    /// Name used in "not found" statements
    const LABEL: &'static str;
}

/// Resolves a row by id, or fails with `NotFound`
pub async fn find_record<E, C>(db: &C, id: i32) -> Result<E::Model, ServiceError>
where
    E: Record,
    C: ConnectionTrait,
    i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    match E::find_by_id(id).one(db).await? {
        Some(model) => Ok(model),
        None => {
            debug!("{} {id} not found", E::LABEL);
            Err(ServiceError::not_found(
                format!("{} with this id does not exist.", E::LABEL),
                json!(id),
            ))
        }
    }
}

/// Handle to the datastore, created once at startup and passed down
#[derive(Clone, Debug)]
pub struct Gateway {
    db: DatabaseConnection,
}

impl Gateway {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        crate::db::create_connection(config).await.map(Self::new)
    }

    /// The pooled connection, for reads that need no transaction
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn find_by_id<E>(&self, id: i32) -> Result<E::Model, ServiceError>
    where
        E: Record,
        i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        find_record::<E, _>(&self.db, id).await
    }

    /// Opens a transactional session
    pub async fn begin(&self) -> Result<Session, ServiceError> {
        let txn = self.db.begin().await?;
        Ok(Session { txn })
    }

    pub async fn close(self) -> Result<(), DbErr> {
        self.db.close().await
    }
}

/// One datastore transaction scoped to a single domain operation
pub struct Session {
    txn: DatabaseTransaction,
}

impl Session {
    /// The open transaction, for pre-checks that need a custom query
    pub fn connection(&self) -> &DatabaseTransaction {
        &self.txn
    }

    pub async fn find_by_id<E>(&self, id: i32) -> Result<E::Model, ServiceError>
    where
        E: Record,
        i32: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        find_record::<E, _>(&self.txn, id).await
    }

    pub async fn insert<A>(
        self,
        model: A,
        statement: &str,
        params: Value,
    ) -> Result<<A::Entity as EntityTrait>::Model, ServiceError>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        let result = model.insert(&self.txn).await;
        self.finish(result, statement, params).await
    }

    pub async fn update<A>(
        self,
        model: A,
        statement: &str,
        params: Value,
    ) -> Result<<A::Entity as EntityTrait>::Model, ServiceError>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        let result = model.update(&self.txn).await;
        self.finish(result, statement, params).await
    }

    /// Deletes the row and hands the deleted model back
    pub async fn delete<E>(
        self,
        model: E::Model,
        statement: &str,
        params: Value,
    ) -> Result<E::Model, ServiceError>
    where
        E: Record,
        E::Model: IntoActiveModel<E::ActiveModel>,
    {
        let result = E::delete(model.clone().into_active_model())
            .exec(&self.txn)
            .await
            .map(|_| model);
        self.finish(result, statement, params).await
    }

    /// Rolls back and surfaces a failure detected before writing
    pub async fn abort<T>(self, err: ServiceError) -> Result<T, ServiceError> {
        self.txn.rollback().await?;
        match &err {
            ServiceError::Conflict { statement, .. } => warn!("{statement}"),
            other => debug!("{other}"),
        }
        Err(err)
    }

    /// Ends a session that did not write anything
    pub async fn release(self) -> Result<(), ServiceError> {
        self.txn.commit().await.map_err(ServiceError::from)
    }

    async fn finish<T>(
        self,
        result: Result<T, DbErr>,
        statement: &str,
        params: Value,
    ) -> Result<T, ServiceError> {
        let err = match result {
            Ok(value) => match self.txn.commit().await {
                Ok(()) => return Ok(value),
                // A failed commit has already rolled back
                Err(err) => err,
            },
            Err(err) => {
                self.txn.rollback().await?;
                err
            }
        };

        warn!("{statement} {err}");
        Err(ServiceError::from_write(err, statement, params))
    }
}
