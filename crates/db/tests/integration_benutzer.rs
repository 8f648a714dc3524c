//! Integration-Tests fuer UserRepository (In-Memory SQLite)

use kassenwart_db::{
    models::NeuerBenutzer,
    DbError, SqliteDb, UserRepository,
};

async fn db() -> SqliteDb {
    SqliteDb::in_memory()
        .await
        .expect("In-Memory DB konnte nicht erstellt werden")
}

#[tokio::test]
async fn benutzer_erstellen_und_laden() {
    let db = db().await;

    let user = UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "alice",
            email: "alice@example.com",
            password_hash: "hash_alice",
        },
    )
    .await
    .expect("Benutzer erstellen fehlgeschlagen");

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");

    let geladen = UserRepository::get_by_id(&db, user.id)
        .await
        .expect("get_by_id fehlgeschlagen")
        .expect("Benutzer sollte gefunden werden");

    assert_eq!(geladen.id, user.id);
    assert_eq!(geladen.username, "alice");
    assert_eq!(geladen.password_hash, "hash_alice");
}

#[tokio::test]
async fn benutzer_nach_name_laden() {
    let db = db().await;

    UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "bob",
            email: "bob@example.com",
            password_hash: "hash_bob",
        },
    )
    .await
    .unwrap();

    let gefunden = UserRepository::get_by_name(&db, "bob")
        .await
        .unwrap()
        .expect("Benutzer 'bob' sollte gefunden werden");

    assert_eq!(gefunden.username, "bob");

    let nicht_gefunden = UserRepository::get_by_name(&db, "unbekannt").await.unwrap();
    assert!(nicht_gefunden.is_none());
}

#[tokio::test]
async fn benutzer_nach_email_laden() {
    let db = db().await;

    UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "carla",
            email: "carla@example.com",
            password_hash: "hash",
        },
    )
    .await
    .unwrap();

    let gefunden = UserRepository::get_by_email(&db, "carla@example.com")
        .await
        .unwrap()
        .expect("Benutzer sollte per E-Mail gefunden werden");
    assert_eq!(gefunden.username, "carla");

    let nicht_gefunden = UserRepository::get_by_email(&db, "niemand@example.com")
        .await
        .unwrap();
    assert!(nicht_gefunden.is_none());
}

#[tokio::test]
async fn benutzername_unique() {
    let db = db().await;

    UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "charlie",
            email: "charlie@example.com",
            password_hash: "hash1",
        },
    )
    .await
    .unwrap();

    // Gleicher Username, andere E-Mail
    let err = UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "charlie",
            email: "charlie2@example.com",
            password_hash: "hash2",
        },
    )
    .await
    .unwrap_err();

    assert!(err.ist_eindeutigkeit());
    assert!(matches!(err, DbError::Eindeutigkeit { ref spalte, .. } if spalte == "username"));

    // Kein zweiter Datensatz angelegt
    let geladen = UserRepository::get_by_name(&db, "charlie").await.unwrap().unwrap();
    assert_eq!(geladen.email, "charlie@example.com");
    let zweite = UserRepository::get_by_email(&db, "charlie2@example.com").await.unwrap();
    assert!(zweite.is_none());
}

#[tokio::test]
async fn email_unique() {
    let db = db().await;

    UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "dora",
            email: "dora@example.com",
            password_hash: "hash1",
        },
    )
    .await
    .unwrap();

    // Gleiche E-Mail, anderer Username
    let err = UserRepository::create(
        &db,
        NeuerBenutzer {
            username: "dora2",
            email: "dora@example.com",
            password_hash: "hash2",
        },
    )
    .await
    .unwrap_err();

    assert!(err.ist_eindeutigkeit());
    assert!(matches!(err, DbError::Eindeutigkeit { ref spalte, .. } if spalte == "email"));
}
