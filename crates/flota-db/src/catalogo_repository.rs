use flota_core::AppError;
use flota_core::models::Catalogo;
use sqlx::{PgPool, Pool, Postgres};

/// Which catalog table this repository targets. Marcas and tipos have
/// identical shape and lifecycle, so one repository serves both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogoKind {
    Marca,
    Tipo,
}

impl CatalogoKind {
    fn table(self) -> &'static str {
        match self {
            CatalogoKind::Marca => "marcas",
            CatalogoKind::Tipo => "tipos",
        }
    }
}

/// Repository for marca/tipo persistence in PostgreSQL.
#[derive(Clone)]
pub struct CatalogoRepository {
    pool: Pool<Postgres>,
    kind: CatalogoKind,
}

impl CatalogoRepository {
    pub fn new(pool: PgPool, kind: CatalogoKind) -> Self {
        Self { pool, kind }
    }

    /// List all entries, oldest first.
    pub async fn list(&self) -> Result<Vec<Catalogo>, AppError> {
        let sql = format!("SELECT id, nombre FROM {} ORDER BY id", self.kind.table());
        let rows = sqlx::query_as::<_, CatalogoRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Look up an entry by id.
    pub async fn get(&self, id: i32) -> Result<Option<Catalogo>, AppError> {
        let sql = format!("SELECT id, nombre FROM {} WHERE id = $1", self.kind.table());
        let row = sqlx::query_as::<_, CatalogoRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// Referential check for the vehicle validation layer.
    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)",
            self.kind.table()
        );
        let row: (bool,) = sqlx::query_as(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.0)
    }

    /// Insert a new entry.
    pub async fn create(&self, nombre: &str) -> Result<Catalogo, AppError> {
        let sql = format!(
            "INSERT INTO {} (nombre) VALUES ($1) RETURNING id, nombre",
            self.kind.table()
        );
        let row = sqlx::query_as::<_, CatalogoRow>(&sql)
            .bind(nombre)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.into())
    }

    /// Rename an entry. Returns the updated record, or None when the id
    /// does not exist.
    pub async fn update(&self, id: i32, nombre: &str) -> Result<Option<Catalogo>, AppError> {
        let sql = format!(
            "UPDATE {} SET nombre = $2 WHERE id = $1 RETURNING id, nombre",
            self.kind.table()
        );
        let row = sqlx::query_as::<_, CatalogoRow>(&sql)
            .bind(id)
            .bind(nombre)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// Delete an entry. Returns false when the id does not exist.
    ///
    /// No referential guard: deleting an entry still referenced by a
    /// vehiculo surfaces the FK constraint error from the store.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.kind.table());
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct CatalogoRow {
    id: i32,
    nombre: String,
}

impl From<CatalogoRow> for Catalogo {
    fn from(row: CatalogoRow) -> Self {
        Catalogo {
            id: row.id,
            nombre: row.nombre,
        }
    }
}
