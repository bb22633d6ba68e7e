//! Generic single-record operations shared by every entity table

use sqlx::{Executor, Sqlite};

use crate::database::error::{StoreError, StoreResult};
use crate::database::table::{Entity, Index, Key, Table};

/// Insert a record, returns the engine-assigned id (the record's own `id` is ignored)
pub async fn insert<'c, X, E>(executor: X, record: &E) -> StoreResult<i64>
where
    X: Executor<'c, Database = Sqlite>,
    E: Entity,
{
    let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
    let sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders
    );

    let mut query = sqlx::query(&sql);
    for value in record.values() {
        query = value.bind_to(query);
    }

    let result = query
        .execute(executor)
        .await
        .map_err(|e| StoreError::from_write(E::TABLE, e))?;

    Ok(result.last_insert_rowid())
}

/// Get a record by id
pub async fn get<'c, X, E>(executor: X, id: i64) -> StoreResult<Option<E>>
where
    X: Executor<'c, Database = Sqlite>,
    E: Entity,
{
    let sql = format!("SELECT * FROM {} WHERE id = ?", E::TABLE);
    let row = sqlx::query(&sql).bind(id).fetch_optional(executor).await?;
    Ok(row.as_ref().map(|r| E::from_row(r)).transpose()?)
}

/// Get every record of a table in insertion order
pub async fn get_all<'c, X, E>(executor: X) -> StoreResult<Vec<E>>
where
    X: Executor<'c, Database = Sqlite>,
    E: Entity,
{
    let sql = format!("SELECT * FROM {} ORDER BY id", E::TABLE);
    let rows = sqlx::query(&sql).fetch_all(executor).await?;
    rows.iter()
        .map(|row| E::from_row(row))
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::from)
}

/// Overwrite every column of an existing record
pub async fn update<'c, X, E>(executor: X, record: &E) -> StoreResult<()>
where
    X: Executor<'c, Database = Sqlite>,
    E: Entity,
{
    let assignments = E::COLUMNS
        .iter()
        .map(|c| format!("{c} = ?"))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!("UPDATE {} SET {} WHERE id = ?", E::TABLE, assignments);

    let mut query = sqlx::query(&sql);
    for value in record.values() {
        query = value.bind_to(query);
    }

    let result = query
        .bind(record.id())
        .execute(executor)
        .await
        .map_err(|e| StoreError::from_write(E::TABLE, e))?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound {
            table: E::TABLE,
            id: record.id(),
        });
    }
    Ok(())
}

/// Delete a record by id; deleting a missing id is not an error
pub async fn delete<'c, X>(executor: X, table: Table, id: i64) -> StoreResult<()>
where
    X: Executor<'c, Database = Sqlite>,
{
    let sql = format!("DELETE FROM {} WHERE id = ?", table);
    sqlx::query(&sql).bind(id).execute(executor).await?;
    Ok(())
}

/// All records whose indexed column(s) equal `key`
pub async fn lookup<'c, X, E>(executor: X, index: Index, key: Key) -> StoreResult<Vec<E>>
where
    X: Executor<'c, Database = Sqlite>,
    E: Entity,
{
    if index.table() != E::TABLE {
        return Err(StoreError::InvalidIndex(format!(
            "{:?} belongs to {}, not {}",
            index,
            index.table(),
            E::TABLE
        )));
    }

    let columns = index.columns();
    let values = key.into_values();
    if values.len() != columns.len() {
        return Err(StoreError::InvalidIndex(format!(
            "{:?} expects {} key part(s), got {}",
            index,
            columns.len(),
            values.len()
        )));
    }

    let clause = columns
        .iter()
        .map(|c| format!("{c} = ?"))
        .collect::<Vec<_>>()
        .join(" AND ");
    let sql = format!("SELECT * FROM {} WHERE {}", E::TABLE, clause);

    let mut query = sqlx::query(&sql);
    for value in values {
        query = value.bind_to(query);
    }

    let rows = query.fetch_all(executor).await?;
    rows.iter()
        .map(|row| E::from_row(row))
        .collect::<Result<Vec<_>, _>>()
        .map_err(StoreError::from)
}

/// Number of rows in a table
pub async fn count<'c, X>(executor: X, table: Table) -> StoreResult<i64>
where
    X: Executor<'c, Database = Sqlite>,
{
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    let count: i64 = sqlx::query_scalar(&sql).fetch_one(executor).await?;
    Ok(count)
}

/// Remove every row from every table
pub async fn wipe_all(pool: &sqlx::Pool<Sqlite>) -> StoreResult<()> {
    for table in Table::ALL {
        let sql = format!("DELETE FROM {}", table);
        sqlx::query(&sql).execute(pool).await?;
    }
    tracing::info!("All tables cleared");
    Ok(())
}
