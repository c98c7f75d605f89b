use crate::entities::{prelude::*, subscribers};
use crate::models::subscriber::{Subscriber, SubscriberEmail};
use anyhow::{Context, Result};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, Set};

pub struct SubscriberRepository {
    conn: DatabaseConnection,
}

impl SubscriberRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts the address, or reactivates it if it is already present.
    pub async fn upsert(&self, email: &SubscriberEmail) -> Result<Subscriber> {
        let active_model = subscribers::ActiveModel {
            email: Set(email.as_ref().to_string()),
            subscribed_at: Set(crate::db::timestamp_now()),
            is_active: Set(true),
            ..Default::default()
        };

        Subscribers::insert(active_model)
            .on_conflict(
                sea_orm::sea_query::OnConflict::column(subscribers::Column::Email)
                    .update_column(subscribers::Column::IsActive)
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await
            .context("Failed to upsert subscriber")?;

        self.get_by_email(email.as_ref())
            .await?
            .ok_or_else(|| anyhow::anyhow!("Subscriber vanished after upsert: {}", email.as_ref()))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<Subscriber>> {
        let model = Subscribers::find()
            .filter(subscribers::Column::Email.eq(email))
            .one(&self.conn)
            .await
            .context("Failed to query subscriber by email")?;

        Ok(model.map(Subscriber::from))
    }

    pub async fn count_active(&self) -> Result<u64> {
        Subscribers::find()
            .filter(subscribers::Column::IsActive.eq(true))
            .count(&self.conn)
            .await
            .context("Failed to count active subscribers")
    }

    pub async fn count(&self) -> Result<u64> {
        Subscribers::find()
            .count(&self.conn)
            .await
            .context("Failed to count subscribers")
    }
}
