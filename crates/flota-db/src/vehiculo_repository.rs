use flota_core::AppError;
use flota_core::models::{NewVehiculo, Vehiculo};
use flota_core::validation::VehiculoDraft;
use sqlx::{PgPool, Pool, Postgres};

/// Repository for vehicle persistence in PostgreSQL.
#[derive(Clone)]
pub struct VehiculoRepository {
    pool: Pool<Postgres>,
}

impl VehiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all vehicles, oldest first.
    pub async fn list(&self) -> Result<Vec<Vehiculo>, AppError> {
        let rows = sqlx::query_as::<_, VehiculoRow>(
            r#"
            SELECT id, modelo, anio_fabricacion, precio, marca_id, tipo_id
            FROM vehiculos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Look up a vehicle by id.
    pub async fn get(&self, id: i32) -> Result<Option<Vehiculo>, AppError> {
        let row = sqlx::query_as::<_, VehiculoRow>(
            r#"
            SELECT id, modelo, anio_fabricacion, precio, marca_id, tipo_id
            FROM vehiculos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// Insert a validated vehicle.
    pub async fn create(&self, vehiculo: &NewVehiculo) -> Result<Vehiculo, AppError> {
        let row = sqlx::query_as::<_, VehiculoRow>(
            r#"
            INSERT INTO vehiculos (modelo, anio_fabricacion, precio, marca_id, tipo_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, modelo, anio_fabricacion, precio, marca_id, tipo_id
            "#,
        )
        .bind(&vehiculo.modelo)
        .bind(vehiculo.anio_fabricacion)
        .bind(vehiculo.precio)
        .bind(vehiculo.marca_id)
        .bind(vehiculo.tipo_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.into())
    }

    /// Partial update from a validated draft: only the fields present in
    /// the draft change. Returns the updated record, or None when the id
    /// does not exist.
    pub async fn update(
        &self,
        id: i32,
        draft: &VehiculoDraft,
    ) -> Result<Option<Vehiculo>, AppError> {
        let row = sqlx::query_as::<_, VehiculoRow>(
            r#"
            UPDATE vehiculos
            SET modelo = COALESCE($2, modelo),
                anio_fabricacion = COALESCE($3, anio_fabricacion),
                precio = COALESCE($4, precio),
                marca_id = COALESCE($5, marca_id),
                tipo_id = COALESCE($6, tipo_id)
            WHERE id = $1
            RETURNING id, modelo, anio_fabricacion, precio, marca_id, tipo_id
            "#,
        )
        .bind(id)
        .bind(draft.modelo.as_deref())
        .bind(draft.anio_fabricacion)
        .bind(draft.precio)
        .bind(draft.marca_id)
        .bind(draft.tipo_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    /// Delete a vehicle. Returns false when the id does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehiculos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct VehiculoRow {
    id: i32,
    modelo: String,
    anio_fabricacion: i32,
    precio: f64,
    marca_id: i32,
    tipo_id: i32,
}

impl From<VehiculoRow> for Vehiculo {
    fn from(row: VehiculoRow) -> Self {
        Vehiculo {
            id: row.id,
            modelo: row.modelo,
            anio_fabricacion: row.anio_fabricacion,
            precio: row.precio,
            marca_id: row.marca_id,
            tipo_id: row.tipo_id,
        }
    }
}
