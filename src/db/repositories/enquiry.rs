use crate::entities::{enquiries, prelude::*};
use crate::models::enquiry::{
    Enquiry, EnquiryFilter, EnquiryStatus, NewEnquiry, StatusCount, StatusFilter,
};
use anyhow::{Context, Result};
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

const LIKE_ESCAPE: char = '\\';

/// Wraps `text` as a `LIKE` substring pattern with `%`, `_` and the escape
/// character matched literally.
fn contains_pattern(text: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped.push('%');
    LikeExpr::new(escaped).escape(LIKE_ESCAPE)
}


pub struct EnquiryRepository {
    conn: DatabaseConnection,
}

impl EnquiryRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, enquiry: &NewEnquiry) -> Result<Enquiry> {
        let active_model = enquiries::ActiveModel {
            name: Set(enquiry.name.clone()),
            email: Set(enquiry.email.clone()),
            phone: Set(enquiry.phone.clone()),
            service: Set(enquiry.service.clone()),
            message: Set(enquiry.message.clone()),
            created_at: Set(crate::db::timestamp_now()),
            status: Set(EnquiryStatus::New.as_str().to_string()),
            ..Default::default()
        };

        let model = Enquiries::insert(active_model)
            .exec_with_returning(&self.conn)
            .await
            .context("Failed to insert enquiry")?;

        Ok(Enquiry::from(model))
    }

    pub async fn get(&self, id: i32) -> Result<Option<Enquiry>> {
        let model = Enquiries::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query enquiry by ID")?;

        Ok(model.map(Enquiry::from))
    }

    /// Newest first. Search matches name, email or phone as a literal substring
    /// using the store's `LIKE` collation.
    pub async fn list(&self, filter: &EnquiryFilter) -> Result<Vec<Enquiry>> {
        let mut query = Enquiries::find()
            .order_by_desc(enquiries::Column::CreatedAt)
            .order_by_desc(enquiries::Column::Id);

        if let StatusFilter::Only(status) = &filter.status {
            query = query.filter(enquiries::Column::Status.eq(status.as_str()));
        }

        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(Expr::col(enquiries::Column::Name).like(contains_pattern(search)))
                    .add(Expr::col(enquiries::Column::Email).like(contains_pattern(search)))
                    .add(Expr::col(enquiries::Column::Phone).like(contains_pattern(search))),
            );
        }

        let rows = query
            .all(&self.conn)
            .await
            .context("Failed to list enquiries")?;

        Ok(rows.into_iter().map(Enquiry::from).collect())
    }

    pub async fn status_counts(&self) -> Result<Vec<StatusCount>> {
        let rows: Vec<(String, i64)> = Enquiries::find()
            .select_only()
            .column(enquiries::Column::Status)
            .column_as(
                Expr::col(enquiries::Column::Id).count(),
                "count",
            )
            .group_by(enquiries::Column::Status)
            .order_by_asc(enquiries::Column::Status)
            .into_tuple()
            .all(&self.conn)
            .await
            .context("Failed to count enquiries by status")?;

        Ok(rows
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect())
    }

    /// Returns false when no enquiry has the given id.
    pub async fn update_status(&self, id: i32, status: EnquiryStatus) -> Result<bool> {
        let result = Enquiries::update_many()
            .col_expr(
                enquiries::Column::Status,
                Expr::value(status.as_str()),
            )
            .filter(enquiries::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .context("Failed to update enquiry status")?;

        Ok(result.rows_affected > 0)
    }
}
