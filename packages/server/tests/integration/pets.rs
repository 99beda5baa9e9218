use serde_json::json;

use crate::common::{TestApp, routes};

mod pet_creation {
    use super::*;

    #[tokio::test]
    async fn omitted_status_and_priority_take_defaults() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::PETS, &json!({ "name": "Bella" })).await;

        assert_eq!(res.status, 201);
        assert!(res.body["id"].is_number());
        assert_eq!(res.body["name"], "Bella");
        assert_eq!(res.body["status"], "Available for Adoption");
        assert_eq!(res.body["priority"], "Medium");
        assert!(res.body["animal_type_id"].is_null());
        assert!(res.body["animal_type"].is_null());
    }

    #[tokio::test]
    async fn response_includes_derived_animal_type() {
        let app = TestApp::spawn().await;
        let dog = app.animal_type_id("Dog").await;

        let res = app
            .post(
                routes::PETS,
                &json!({
                    "name": "Max",
                    "status": "Adopted",
                    "animal_type_id": dog,
                    "priority": "High"
                }),
            )
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["animal_type_id"], dog);
        assert_eq!(res.body["animal_type"], "Dog");
        assert_eq!(res.body["status"], "Adopted");
        assert_eq!(res.body["priority"], "High");
    }

    #[tokio::test]
    async fn name_is_trimmed() {
        let app = TestApp::spawn().await;

        let res = app.post(routes::PETS, &json!({ "name": "  Luna  " })).await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["name"], "Luna");
    }

    #[tokio::test]
    async fn missing_name_is_rejected() {
        let app = TestApp::spawn().await;

        for body in [
            json!({ "status": "Adopted" }),
            json!({ "name": "" }),
            json!({ "name": "   " }),
            json!({ "name": null }),
        ] {
            let res = app.post(routes::PETS, &body).await;
            assert_eq!(res.status, 400, "body {body} should be rejected");
            assert_eq!(res.body["error"], "Pet name is required");
            assert_eq!(res.body["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn empty_status_and_priority_take_defaults() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::PETS,
                &json!({ "name": "Pepper", "status": "", "priority": "" }),
            )
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["status"], "Available for Adoption");
        assert_eq!(res.body["priority"], "Medium");
    }

    #[tokio::test]
    async fn unknown_status_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app
            .post(routes::PETS, &json!({ "name": "Rex", "status": "Lost" }))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert!(res.body["error"].is_string());
    }

    #[tokio::test]
    async fn malformed_json_is_a_validation_error() {
        let app = TestApp::spawn().await;

        let res = app.post_raw(routes::PETS, "{\"name\": ").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn dangling_animal_type_reads_back_as_null() {
        let app = TestApp::spawn().await;

        let res = app
            .post(routes::PETS, &json!({ "name": "Ghost", "animal_type_id": 9999 }))
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["animal_type_id"], 9999);
        assert!(res.body["animal_type"].is_null());
    }
}

mod pet_listing {
    use super::*;

    #[tokio::test]
    async fn empty_store_lists_no_pets() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::PETS).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body, json!([]));
    }

    #[tokio::test]
    async fn created_pet_round_trips_through_list() {
        let app = TestApp::spawn().await;
        let cat = app.animal_type_id("Cat").await;

        let typed = app
            .create_pet(json!({
                "name": "Charlie",
                "status": "In Care (Not Adopted)",
                "animal_type_id": cat,
                "priority": "High"
            }))
            .await;
        let untyped = app.create_pet(json!({ "name": "Zoe", "priority": "Low" })).await;

        let pet = app.listed_pet(typed).await.expect("typed pet listed");
        assert_eq!(pet["name"], "Charlie");
        assert_eq!(pet["status"], "In Care (Not Adopted)");
        assert_eq!(pet["priority"], "High");
        assert_eq!(pet["animal_type_id"], cat);
        assert_eq!(pet["animal_type"], "Cat");

        let pet = app.listed_pet(untyped).await.expect("untyped pet listed");
        assert_eq!(pet["name"], "Zoe");
        assert_eq!(pet["status"], "Available for Adoption");
        assert_eq!(pet["priority"], "Low");
        assert!(pet["animal_type"].is_null());
    }

    #[tokio::test]
    async fn list_has_every_documented_field() {
        let app = TestApp::spawn().await;
        app.create_pet(json!({ "name": "Milo" })).await;

        let res = app.get(routes::PETS).await;

        let pet = &res.body[0];
        for field in ["id", "name", "status", "animal_type_id", "animal_type", "priority"] {
            assert!(pet.get(field).is_some(), "missing field {field}");
        }
    }
}

mod pet_update {
    use common::PetStatus;
    use sea_orm::{ConnectionTrait, EntityTrait};
    use server::entity::pet;

    use super::*;

    async fn spawn_with_pet() -> (TestApp, i32, i32) {
        let app = TestApp::spawn().await;
        let dog = app.animal_type_id("Dog").await;
        let id = app
            .create_pet(json!({
                "name": "Rocky",
                "status": "Available for Adoption",
                "animal_type_id": dog,
                "priority": "Low"
            }))
            .await;
        (app, id, dog)
    }

    #[tokio::test]
    async fn status_update_leaves_other_fields_alone() {
        let (app, id, dog) = spawn_with_pet().await;

        let res = app.put(&routes::pet(id), &json!({ "status": "Adopted" })).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["message"], "Pet updated successfully");
        assert_eq!(res.body["pet"]["id"], id);
        assert_eq!(res.body["pet"]["status"], "Adopted");
        assert_eq!(res.body["pet"]["priority"], "Low");
        assert_eq!(res.body["pet"]["name"], "Rocky");
        assert_eq!(res.body["pet"]["animal_type_id"], dog);
    }

    #[tokio::test]
    async fn priority_update_leaves_other_fields_alone() {
        let (app, id, dog) = spawn_with_pet().await;

        let res = app.put(&routes::pet(id), &json!({ "priority": "High" })).await;
        assert_eq!(res.status, 200);

        let pet = app.listed_pet(id).await.unwrap();
        assert_eq!(pet["priority"], "High");
        assert_eq!(pet["status"], "Available for Adoption");
        assert_eq!(pet["name"], "Rocky");
        assert_eq!(pet["animal_type_id"], dog);
        assert_eq!(pet["animal_type"], "Dog");
    }

    #[tokio::test]
    async fn both_fields_can_change_together() {
        let (app, id, _) = spawn_with_pet().await;

        let res = app
            .put(
                &routes::pet(id),
                &json!({ "status": "In Care (Adopted)", "priority": "Medium" }),
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["pet"]["status"], "In Care (Adopted)");
        assert_eq!(res.body["pet"]["priority"], "Medium");
    }

    #[tokio::test]
    async fn other_body_fields_are_ignored() {
        let (app, id, dog) = spawn_with_pet().await;

        let res = app
            .put(
                &routes::pet(id),
                &json!({ "status": "Adopted", "name": "Renamed", "animal_type_id": null }),
            )
            .await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["pet"]["name"], "Rocky");
        assert_eq!(res.body["pet"]["animal_type_id"], dog);
    }

    #[tokio::test]
    async fn repeated_identical_update_is_idempotent() {
        let (app, id, _) = spawn_with_pet().await;

        let first = app.put(&routes::pet(id), &json!({ "status": "Adopted" })).await;
        let second = app.put(&routes::pet(id), &json!({ "status": "Adopted" })).await;

        assert_eq!(first.status, 200);
        assert_eq!(second.status, 200);
        assert_eq!(first.body["pet"], second.body["pet"]);

        let res = app.get(routes::PETS).await;
        assert_eq!(res.body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn empty_patch_is_rejected() {
        let (app, id, _) = spawn_with_pet().await;

        for body in [json!({}), json!({ "name": "Only name" }), json!({ "status": "" })] {
            let res = app.put(&routes::pet(id), &body).await;
            assert_eq!(res.status, 400, "body {body} should be rejected");
            assert_eq!(res.body["error"], "No updates provided");
        }
    }

    #[tokio::test]
    async fn unknown_pet_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.put(&routes::pet(4242), &json!({ "status": "Adopted" })).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["error"], "Pet not found");
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn failed_read_back_still_reports_success() {
        let (app, id, _) = spawn_with_pet().await;
        // The read-back joins animal_types; the update itself only touches pets.
        app.db
            .execute_unprepared("DROP TABLE animal_types")
            .await
            .unwrap();

        let res = app.put(&routes::pet(id), &json!({ "status": "Adopted" })).await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.body["message"],
            "Pet updated successfully, but unable to retrieve updated details"
        );
        assert_eq!(res.body["petId"], id);
        assert!(res.body.get("pet").is_none());

        let stored = pet::Entity::find_by_id(id).one(&app.db).await.unwrap().unwrap();
        assert_eq!(stored.status, PetStatus::Adopted);
    }

    #[tokio::test]
    async fn malformed_id_gets_a_json_error() {
        let app = TestApp::spawn().await;

        for path in ["/pets/abc", "/pets/99999999999"] {
            let res = app.put(path, &json!({ "status": "Adopted" })).await;
            assert_eq!(res.status, 400, "PUT {path}: {}", res.text);
            assert_eq!(res.body["code"], "VALIDATION_ERROR");
            assert!(res.body["error"].is_string());
        }
    }

    #[tokio::test]
    async fn existence_is_checked_before_the_patch() {
        let app = TestApp::spawn().await;

        let res = app.put(&routes::pet(4242), &json!({})).await;

        assert_eq!(res.status, 404);
    }
}

mod pet_deletion {
    use super::*;

    #[tokio::test]
    async fn delete_then_delete_again() {
        let app = TestApp::spawn().await;
        let id = app.create_pet(json!({ "name": "Duke" })).await;

        let first = app.delete(&routes::pet(id)).await;
        assert_eq!(first.status, 200);
        assert_eq!(first.body["message"], "Pet deleted successfully");
        assert_eq!(first.body["id"], id);

        let second = app.delete(&routes::pet(id)).await;
        assert_eq!(second.status, 404);
        assert_eq!(second.body["error"], "Pet not found");

        assert!(app.listed_pet(id).await.is_none());
    }

    #[tokio::test]
    async fn deleting_a_pet_keeps_its_animal_type() {
        let app = TestApp::spawn().await;
        let fish = app.animal_type_id("Fish").await;
        let id = app
            .create_pet(json!({ "name": "Nemo", "animal_type_id": fish }))
            .await;

        let res = app.delete(&routes::pet(id)).await;
        assert_eq!(res.status, 200);

        assert_eq!(app.animal_type_id("Fish").await, fish);
    }

    #[tokio::test]
    async fn malformed_id_gets_a_json_error() {
        let app = TestApp::spawn().await;

        for path in ["/pets/abc", "/pets/99999999999"] {
            let res = app.delete(path).await;
            assert_eq!(res.status, 400, "DELETE {path}: {}", res.text);
            assert_eq!(res.body["code"], "VALIDATION_ERROR");
            assert!(res.body["error"].is_string());
        }
    }

    #[tokio::test]
    async fn unknown_pet_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.delete(&routes::pet(77)).await;

        assert_eq!(res.status, 404);
    }
}
