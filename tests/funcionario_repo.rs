//! FuncionarioRepository integration tests over an embedded store

use rh_server::db::models::{FuncionarioCreate, FuncionarioUpdate};
use rh_server::db::repository::{FuncionarioRepository, RepoError};
use rh_server::DbService;

async fn test_db() -> (tempfile::TempDir, DbService) {
    let dir = tempfile::tempdir().unwrap();
    let db = DbService::new(dir.path().to_str().unwrap(), "test", "test")
        .await
        .unwrap();
    (dir, db)
}

fn payload(numero: &str, nombres: &str, apellidos: &str) -> FuncionarioCreate {
    FuncionarioCreate {
        tipo_identificacion: Some("CC".into()),
        numero_identificacion: Some(numero.into()),
        nombres: Some(nombres.into()),
        apellidos: Some(apellidos.into()),
        estado_civil: None,
        sexo: None,
        direccion: None,
        telefono: None,
        fecha_nacimiento: None,
    }
}

#[tokio::test]
async fn create_assigns_id_and_roundtrips() {
    let (_dir, db) = test_db().await;
    let repo = FuncionarioRepository::new(db.db());

    let creado = repo.create(payload("1001", "Ana", "Ruiz")).await.unwrap();
    let id = creado.id.clone().unwrap().to_string();
    assert!(id.starts_with("funcionarios:"));

    let leido = repo.find_by_id(&id).await.unwrap();
    assert_eq!(leido.numero_identificacion, "1001");
    assert_eq!(leido.nombres, "Ana");
    assert_eq!(leido.apellidos, "Ruiz");
}

#[tokio::test]
async fn create_aggregates_validation_errors() {
    let (_dir, db) = test_db().await;
    let repo = FuncionarioRepository::new(db.db());

    let vacio = FuncionarioCreate {
        tipo_identificacion: None,
        numero_identificacion: None,
        nombres: Some("Ana".into()),
        apellidos: None,
        estado_civil: None,
        sexo: None,
        direccion: None,
        telefono: None,
        fecha_nacimiento: None,
    };

    let err = repo.create(vacio).await.unwrap_err();
    match err {
        RepoError::Validation(msg) => {
            assert!(msg.contains("Tipo de identificación"));
            assert!(msg.contains("Número de identificación"));
            assert!(msg.contains("Apellidos"));
        }
        otro => panic!("se esperaba Validation, fue {otro:?}"),
    }
}

#[tokio::test]
async fn create_rejects_invalid_birth_date() {
    let (_dir, db) = test_db().await;
    let repo = FuncionarioRepository::new(db.db());

    let mut datos = payload("1001", "Ana", "Ruiz");
    datos.fecha_nacimiento = Some("17/05/1990".into());

    let err = repo.create(datos).await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn duplicate_numero_fails_and_first_record_is_intact() {
    let (_dir, db) = test_db().await;
    let repo = FuncionarioRepository::new(db.db());

    let primero = repo.create(payload("2002", "Ana", "Ruiz")).await.unwrap();

    let err = repo
        .create(payload("2002", "Carlos", "Mera"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // The first record is still retrievable, unchanged
    let id = primero.id.clone().unwrap().to_string();
    let leido = repo.find_by_id(&id).await.unwrap();
    assert_eq!(leido.nombres, "Ana");
    assert_eq!(leido.numero_identificacion, "2002");

    let todos = repo.find_all().await.unwrap();
    assert_eq!(todos.len(), 1);
}

#[tokio::test]
async fn find_all_orders_by_apellidos_then_nombres() {
    let (_dir, db) = test_db().await;
    let repo = FuncionarioRepository::new(db.db());

    repo.create(payload("1", "Berta", "Zapata")).await.unwrap();
    repo.create(payload("2", "Carlos", "Arango")).await.unwrap();
    repo.create(payload("3", "Ana", "Arango")).await.unwrap();

    let todos = repo.find_all().await.unwrap();
    let orden: Vec<(String, String)> = todos
        .into_iter()
        .map(|f| (f.apellidos, f.nombres))
        .collect();
    assert_eq!(
        orden,
        vec![
            ("Arango".to_string(), "Ana".to_string()),
            ("Arango".to_string(), "Carlos".to_string()),
            ("Zapata".to_string(), "Berta".to_string()),
        ]
    );
}

#[tokio::test]
async fn update_merges_provided_fields_over_stored_record() {
    let (_dir, db) = test_db().await;
    let repo = FuncionarioRepository::new(db.db());

    let creado = repo.create(payload("3003", "Ana", "Ruiz")).await.unwrap();
    let id = creado.id.clone().unwrap().to_string();

    let cambios = FuncionarioUpdate {
        tipo_identificacion: None,
        numero_identificacion: None,
        nombres: None,
        apellidos: None,
        estado_civil: Some("Casada".into()),
        sexo: None,
        direccion: None,
        telefono: Some("3001234567".into()),
        fecha_nacimiento: None,
    };

    let actualizado = repo.update(&id, cambios).await.unwrap();
    assert_eq!(actualizado.telefono.as_deref(), Some("3001234567"));
    assert_eq!(actualizado.estado_civil.as_deref(), Some("Casada"));
    // Untouched fields survive the merge
    assert_eq!(actualizado.nombres, "Ana");
    assert_eq!(actualizado.numero_identificacion, "3003");
}

#[tokio::test]
async fn malformed_id_is_validation_never_database() {
    let (_dir, db) = test_db().await;
    let repo = FuncionarioRepository::new(db.db());

    for id in ["nope", "grupo_familiar:abc", ""] {
        assert!(
            matches!(repo.find_by_id(id).await.unwrap_err(), RepoError::Validation(_)),
            "find_by_id({id})"
        );
        assert!(
            matches!(repo.delete(id).await.unwrap_err(), RepoError::Validation(_)),
            "delete({id})"
        );
    }
}

#[tokio::test]
async fn missing_record_is_not_found() {
    let (_dir, db) = test_db().await;
    let repo = FuncionarioRepository::new(db.db());

    let err = repo.find_by_id("funcionarios:noexiste").await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    let cambios = FuncionarioUpdate {
        tipo_identificacion: None,
        numero_identificacion: None,
        nombres: Some("Ana".into()),
        apellidos: None,
        estado_civil: None,
        sexo: None,
        direccion: None,
        telefono: None,
        fecha_nacimiento: None,
    };
    let err = repo
        .update("funcionarios:noexiste", cambios)
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn delete_twice_second_is_not_found() {
    let (_dir, db) = test_db().await;
    let repo = FuncionarioRepository::new(db.db());

    let creado = repo.create(payload("4004", "Ana", "Ruiz")).await.unwrap();
    let id = creado.id.clone().unwrap().to_string();

    assert!(repo.delete(&id).await.unwrap());
    let err = repo.delete(&id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn deleting_funcionario_keeps_dependent_family_records() {
    let (_dir, db) = test_db().await;
    let repo = FuncionarioRepository::new(db.db());

    let creado = repo.create(payload("5005", "Ana", "Ruiz")).await.unwrap();
    let id = creado.id.clone().unwrap().to_string();
    let clave = creado.id.clone().unwrap().key().to_string();

    let familia = rh_server::db::repository::GrupoFamiliarRepository::new(db.db());
    familia
        .create(rh_server::db::models::GrupoFamiliarCreate {
            funcionario_id: Some(clave.clone()),
            nombres: Some("Luis".into()),
            apellidos: Some("Ruiz".into()),
            parentesco: Some("Hijo".into()),
            rol: None,
            fecha_nacimiento: None,
        })
        .await
        .unwrap();

    repo.delete(&id).await.unwrap();

    // No cascading delete: the family record survives
    let dependientes = familia.find_by_funcionario(&clave).await.unwrap();
    assert_eq!(dependientes.len(), 1);
}
