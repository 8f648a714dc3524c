//! Auth-Flow fuer Kassenwart
//!
//! Zentraler Service fuer Registrierung, Login und Token-Aufloesung.
//! Nutzt das Benutzer-Repository, das Passwort-Hashing und den TokenDienst.

use std::sync::Arc;

use kassenwart_db::{
    models::{BenutzerRecord, NeuerBenutzer},
    DbError, UserRepository,
};

use crate::{
    error::{AuthError, AuthResult},
    password::{passwort_hashen, passwort_verifizieren},
    token::{TokenDienst, TokenNutzlast},
};

/// Auth-Service – zentraler Einstiegspunkt fuer alle Authentifizierungsvorgaenge
pub struct AuthService<U: UserRepository> {
    user_repo: Arc<U>,
    token_dienst: Arc<TokenDienst>,
}

impl<U: UserRepository> AuthService<U> {
    /// Erstellt einen neuen AuthService
    pub fn neu(user_repo: Arc<U>, token_dienst: Arc<TokenDienst>) -> Self {
        Self {
            user_repo,
            token_dienst,
        }
    }

    /// Registriert einen neuen Benutzer
    ///
    /// Prueft Benutzername und E-Mail auf Eindeutigkeit, hasht das
    /// Passwort, legt den Benutzer an und stellt direkt einen Token aus.
    pub async fn registrieren(
        &self,
        username: &str,
        email: &str,
        passwort: &str,
    ) -> AuthResult<(BenutzerRecord, String)> {
        if username.trim().is_empty() || email.trim().is_empty() || passwort.is_empty() {
            return Err(AuthError::UngueltigeEingabe(
                "Benutzername, E-Mail und Passwort sind erforderlich".into(),
            ));
        }

        // Pruefen ob Username bereits vergeben
        if self.user_repo.get_by_name(username).await?.is_some() {
            return Err(AuthError::BenutzernameVergeben(username.to_string()));
        }

        // Pruefen ob E-Mail bereits registriert
        if self.user_repo.get_by_email(email).await?.is_some() {
            return Err(AuthError::EmailVergeben(email.to_string()));
        }

        let passwort_hash = passwort_hashen(passwort)?;

        // Die Eindeutigkeitspruefungen oben und der INSERT sind nicht
        // atomar; eine Verletzung beim INSERT wird daher ebenfalls als
        // Konflikt gemeldet statt als interner Fehler.
        let benutzer = match self
            .user_repo
            .create(NeuerBenutzer {
                username,
                email,
                password_hash: &passwort_hash,
            })
            .await
        {
            Ok(benutzer) => benutzer,
            Err(DbError::Eindeutigkeit { ref spalte, .. }) if spalte == "email" => {
                return Err(AuthError::EmailVergeben(email.to_string()));
            }
            Err(e) if e.ist_eindeutigkeit() => {
                return Err(AuthError::BenutzernameVergeben(username.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let token = self.token_ausstellen(&benutzer)?;

        tracing::info!(
            user_id = %benutzer.id,
            username = %benutzer.username,
            "Neuer Benutzer registriert"
        );

        Ok((benutzer, token))
    }

    /// Meldet einen Benutzer an und stellt einen neuen Token aus
    ///
    /// Unbekannter Benutzername und falsches Passwort liefern denselben
    /// Fehler, damit die Antwort nicht verraet welcher Teil falsch war.
    pub async fn anmelden(
        &self,
        username: &str,
        passwort: &str,
    ) -> AuthResult<(BenutzerRecord, String)> {
        if username.trim().is_empty() || passwort.is_empty() {
            return Err(AuthError::UngueltigeEingabe(
                "Benutzername und Passwort sind erforderlich".into(),
            ));
        }

        let benutzer = self
            .user_repo
            .get_by_name(username)
            .await?
            .ok_or(AuthError::UngueltigeAnmeldedaten)?;

        let korrekt = passwort_verifizieren(passwort, &benutzer.password_hash)?;
        if !korrekt {
            tracing::warn!(username = %username, "Fehlgeschlagener Login-Versuch");
            return Err(AuthError::UngueltigeAnmeldedaten);
        }

        let token = self.token_ausstellen(&benutzer)?;

        tracing::info!(
            user_id = %benutzer.id,
            username = %benutzer.username,
            "Benutzer angemeldet"
        );

        Ok((benutzer, token))
    }

    /// Verifiziert einen Token und loest die Identitaet auf
    ///
    /// Wird vom Auth-Gate der API benutzt: Token pruefen, dann den
    /// Benutzer zum verifizierten `id`-Claim laden.
    pub async fn token_validieren(&self, token: &str) -> AuthResult<BenutzerRecord> {
        let nutzlast = self.token_dienst.verifizieren(token)?;

        self.user_repo
            .get_by_id(nutzlast.id)
            .await?
            .ok_or_else(|| AuthError::BenutzerNichtGefunden(nutzlast.id.to_string()))
    }

    fn token_ausstellen(&self, benutzer: &BenutzerRecord) -> AuthResult<String> {
        self.token_dienst.ausstellen(&TokenNutzlast {
            id: benutzer.id,
            username: benutzer.username.clone(),
            email: benutzer.email.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use chrono::Utc;
    use uuid::Uuid;

    use kassenwart_db::DbResult;

    // Minimales In-Memory UserRepository fuer Tests
    #[derive(Default)]
    struct TestUserRepo {
        benutzer: Mutex<Vec<BenutzerRecord>>,
    }

    impl UserRepository for TestUserRepo {
        async fn create(&self, data: NeuerBenutzer<'_>) -> DbResult<BenutzerRecord> {
            let mut benutzer = self.benutzer.lock().unwrap();
            if benutzer.iter().any(|u| u.username == data.username) {
                return Err(DbError::Eindeutigkeit {
                    spalte: "username".into(),
                    wert: data.username.to_string(),
                });
            }
            if benutzer.iter().any(|u| u.email == data.email) {
                return Err(DbError::Eindeutigkeit {
                    spalte: "email".into(),
                    wert: data.email.to_string(),
                });
            }
            let now = Utc::now();
            let record = BenutzerRecord {
                id: Uuid::new_v4(),
                username: data.username.to_string(),
                email: data.email.to_string(),
                password_hash: data.password_hash.to_string(),
                created_at: now,
                updated_at: now,
            };
            benutzer.push(record.clone());
            Ok(record)
        }

        async fn get_by_id(&self, id: Uuid) -> DbResult<Option<BenutzerRecord>> {
            Ok(self.benutzer.lock().unwrap().iter().find(|u| u.id == id).cloned())
        }

        async fn get_by_name(&self, username: &str) -> DbResult<Option<BenutzerRecord>> {
            Ok(self.benutzer.lock().unwrap().iter().find(|u| u.username == username).cloned())
        }

        async fn get_by_email(&self, email: &str) -> DbResult<Option<BenutzerRecord>> {
            Ok(self.benutzer.lock().unwrap().iter().find(|u| u.email == email).cloned())
        }
    }

    fn test_service() -> AuthService<TestUserRepo> {
        let repo = Arc::new(TestUserRepo::default());
        let token_dienst = Arc::new(TokenDienst::neu("test_geheimnis", 3600));
        AuthService::neu(repo, token_dienst)
    }

    #[tokio::test]
    async fn registrieren_liefert_verifizierbaren_token() {
        let service = test_service();

        let (benutzer, token) = service
            .registrieren("testuser", "test@example.com", "sicheres_passwort!")
            .await
            .expect("Registrierung fehlgeschlagen");

        assert_eq!(benutzer.username, "testuser");
        assert_eq!(benutzer.email, "test@example.com");
        assert_ne!(benutzer.password_hash, "sicheres_passwort!");

        // Der ausgestellte Token loest auf denselben Benutzer auf
        let aufgeloest = service.token_validieren(&token).await.unwrap();
        assert_eq!(aufgeloest.id, benutzer.id);
        assert_eq!(aufgeloest.username, "testuser");
        assert_eq!(aufgeloest.email, "test@example.com");
    }

    #[tokio::test]
    async fn registrieren_mit_leeren_feldern_schlaegt_fehl() {
        let service = test_service();

        for (username, email, passwort) in [
            ("", "a@example.com", "pw"),
            ("user", "", "pw"),
            ("user", "a@example.com", ""),
        ] {
            let ergebnis = service.registrieren(username, email, passwort).await;
            assert!(matches!(ergebnis, Err(AuthError::UngueltigeEingabe(_))));
        }
    }

    #[tokio::test]
    async fn doppelter_benutzername_schlaegt_fehl() {
        let service = test_service();
        service
            .registrieren("duplikat", "erste@example.com", "passwort")
            .await
            .unwrap();

        // Gleicher Username, andere E-Mail
        let ergebnis = service
            .registrieren("duplikat", "zweite@example.com", "anderes")
            .await;
        assert!(matches!(ergebnis, Err(AuthError::BenutzernameVergeben(_))));

        // Kein zweiter Benutzer angelegt: Anmeldung funktioniert nur mit dem ersten Passwort
        let (benutzer, _) = service.anmelden("duplikat", "passwort").await.unwrap();
        assert_eq!(benutzer.email, "erste@example.com");
    }

    #[tokio::test]
    async fn doppelte_email_schlaegt_fehl() {
        let service = test_service();
        service
            .registrieren("erster", "gleich@example.com", "passwort")
            .await
            .unwrap();

        let ergebnis = service
            .registrieren("zweiter", "gleich@example.com", "passwort")
            .await;
        assert!(matches!(ergebnis, Err(AuthError::EmailVergeben(_))));
    }

    #[tokio::test]
    async fn anmelden_nach_registrierung() {
        let service = test_service();
        service
            .registrieren("loginuser", "login@example.com", "mein_passwort")
            .await
            .unwrap();

        let (benutzer, token) = service
            .anmelden("loginuser", "mein_passwort")
            .await
            .expect("Anmeldung fehlgeschlagen");

        assert_eq!(benutzer.username, "loginuser");
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn anmeldefehler_verraten_den_benutzernamen_nicht() {
        let service = test_service();
        service
            .registrieren("vorhanden", "da@example.com", "richtig")
            .await
            .unwrap();

        // Falsches Passwort fuer existierenden Benutzer
        let falsches_passwort = service.anmelden("vorhanden", "falsch").await.unwrap_err();
        // Unbekannter Benutzername
        let unbekannter_name = service.anmelden("niemand", "egal").await.unwrap_err();

        assert!(matches!(falsches_passwort, AuthError::UngueltigeAnmeldedaten));
        assert!(matches!(unbekannter_name, AuthError::UngueltigeAnmeldedaten));
        // Identische Meldung, kein Orakel fuer die Existenz des Benutzernamens
        assert_eq!(falsches_passwort.to_string(), unbekannter_name.to_string());
    }

    #[tokio::test]
    async fn token_validieren_unbekannter_benutzer() {
        let service = test_service();

        // Token fuer einen Benutzer der (nicht mehr) existiert
        let dienst = TokenDienst::neu("test_geheimnis", 3600);
        let token = dienst
            .ausstellen(&TokenNutzlast {
                id: Uuid::new_v4(),
                username: "geist".into(),
                email: "geist@example.com".into(),
            })
            .unwrap();

        let ergebnis = service.token_validieren(&token).await;
        assert!(matches!(ergebnis, Err(AuthError::BenutzerNichtGefunden(_))));
    }
}
