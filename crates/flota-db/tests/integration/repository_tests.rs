use flota_core::models::{NewUser, NewVehiculo};
use flota_core::validation::VehiculoDraft;

use crate::integration::common::setup_test_db;

#[tokio::test]
async fn user_crud_and_uniqueness_query() {
    let (db, _pool, _container) = setup_test_db().await;
    let users = db.users();

    assert!(!users.username_exists("ana").await.unwrap());

    let created = users
        .create(&NewUser {
            username: "ana".into(),
            password_hash: "$argon2id$fake".into(),
            is_admin: false,
        })
        .await
        .unwrap();
    assert_eq!(created.username, "ana");
    assert!(!created.is_admin);

    assert!(users.username_exists("ana").await.unwrap());
    // Case-sensitive check.
    assert!(!users.username_exists("Ana").await.unwrap());

    let fetched = users.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.username, "ana");

    let by_name = users.get_by_username("ana").await.unwrap().unwrap();
    assert_eq!(by_name.id, created.id);

    // Partial update: only username changes.
    assert!(
        users
            .update(created.id, Some("ana2"), None)
            .await
            .unwrap()
    );
    let fetched = users.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.username, "ana2");
    assert_eq!(fetched.password_hash, "$argon2id$fake");

    assert!(users.delete(created.id).await.unwrap());
    assert!(!users.delete(created.id).await.unwrap());
    assert!(users.get(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn update_on_missing_user_returns_false() {
    let (db, _pool, _container) = setup_test_db().await;
    assert!(!db.users().update(999, Some("x"), None).await.unwrap());
}

#[tokio::test]
async fn catalogo_repositories_target_their_own_tables() {
    let (db, _pool, _container) = setup_test_db().await;

    let marca = db.marcas().create("Toyota").await.unwrap();
    let tipo = db.tipos().create("Sedán").await.unwrap();

    assert!(db.marcas().exists(marca.id).await.unwrap());
    assert!(db.tipos().exists(tipo.id).await.unwrap());
    // Ids do not leak across tables.
    assert_eq!(db.marcas().list().await.unwrap().len(), 1);
    assert_eq!(db.tipos().list().await.unwrap().len(), 1);

    let renamed = db.marcas().update(marca.id, "Honda").await.unwrap().unwrap();
    assert_eq!(renamed.nombre, "Honda");
    assert!(db.marcas().update(999, "X").await.unwrap().is_none());

    assert!(db.marcas().delete(marca.id).await.unwrap());
    assert!(!db.marcas().delete(marca.id).await.unwrap());
    assert!(!db.marcas().exists(marca.id).await.unwrap());
}

#[tokio::test]
async fn vehiculo_crud_and_partial_update() {
    let (db, _pool, _container) = setup_test_db().await;

    let marca = db.marcas().create("Toyota").await.unwrap();
    let tipo = db.tipos().create("Sedán").await.unwrap();

    let created = db
        .vehiculos()
        .create(&NewVehiculo {
            modelo: "Corolla".into(),
            anio_fabricacion: 2030,
            precio: 25000.0,
            marca_id: marca.id,
            tipo_id: tipo.id,
        })
        .await
        .unwrap();
    assert_eq!(created.modelo, "Corolla");

    // Draft with only precio set leaves the rest untouched.
    let draft = VehiculoDraft {
        precio: Some(19999.5),
        ..Default::default()
    };
    let updated = db
        .vehiculos()
        .update(created.id, &draft)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.precio, 19999.5);
    assert_eq!(updated.modelo, "Corolla");
    assert_eq!(updated.anio_fabricacion, 2030);

    assert!(
        db.vehiculos()
            .update(999, &VehiculoDraft::default())
            .await
            .unwrap()
            .is_none()
    );

    assert!(db.vehiculos().delete(created.id).await.unwrap());
    assert!(!db.vehiculos().delete(created.id).await.unwrap());
}

#[tokio::test]
async fn deleting_referenced_marca_surfaces_store_error() {
    let (db, _pool, _container) = setup_test_db().await;

    let marca = db.marcas().create("Toyota").await.unwrap();
    let tipo = db.tipos().create("Sedán").await.unwrap();
    db.vehiculos()
        .create(&NewVehiculo {
            modelo: "Corolla".into(),
            anio_fabricacion: 2030,
            precio: 25000.0,
            marca_id: marca.id,
            tipo_id: tipo.id,
        })
        .await
        .unwrap();

    // No referential guard in the repository: the FK constraint speaks.
    assert!(db.marcas().delete(marca.id).await.is_err());
}

#[tokio::test]
async fn health_check_succeeds_on_live_database() {
    let (db, _pool, _container) = setup_test_db().await;
    db.health_check().await.unwrap();
}
