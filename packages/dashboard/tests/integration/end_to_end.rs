use common::{NewPet, PetPatch, PetStatus, Priority};
use dashboard::form::PetDraft;
use dashboard::list_view::{FilterPatch, SortBy};
use dashboard::notification::NotificationKind;
use dashboard::{Dashboard, GatewayError, PetApi, PetChange};

use crate::common::TestServer;

#[tokio::test]
async fn gateway_passes_service_errors_through() {
    let server = TestServer::spawn().await;
    let api = server.client();

    let err = api
        .update_pet(
            404,
            &PetPatch {
                status: Some(PetStatus::Adopted),
                priority: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GatewayError::Api { status: 404, ref message } if message.as_deref() == Some("Pet not found")
    ));

    let err = api.create_animal_type("Dog").await.unwrap_err();
    assert!(matches!(err, GatewayError::Api { status: 500, .. }));
    assert_eq!(err.user_message(), "Animal type 'Dog' already exists");
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let api = dashboard::ApiClient::new("http://127.0.0.1:9");

    let err = api.list_pets().await.unwrap_err();

    assert!(matches!(err, GatewayError::Transport(_)));
}

#[tokio::test]
async fn dashboard_round_trip_against_the_service() {
    let server = TestServer::spawn().await;
    let mut dashboard = Dashboard::new(server.client());

    assert!(dashboard.load().await);
    assert!(dashboard.pets().is_empty());
    let names: Vec<&str> = dashboard.animal_types().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Bird", "Cat", "Dog", "Fish", "Rabbit"]);
    let dog = dashboard
        .animal_types()
        .iter()
        .find(|t| t.name == "Dog")
        .map(|t| t.id)
        .unwrap();

    for (name, priority) in [("Bella", Priority::Low), ("Max", Priority::Medium)] {
        assert!(
            dashboard
                .add_pet(NewPet {
                    name: name.into(),
                    status: None,
                    animal_type_id: Some(dog),
                    priority: Some(priority),
                })
                .await
        );
    }

    let mut draft = PetDraft::default();
    draft.set_name("Charlie");
    draft.set_new_animal_type("Ferret");
    draft.set_priority(Priority::High);
    assert!(dashboard.submit_draft(&mut draft).await);
    assert_eq!(dashboard.pets().len(), 3);

    dashboard.update_filter_settings(FilterPatch {
        sort_by: Some(SortBy::PriorityDesc),
        ..Default::default()
    });
    let order: Vec<String> = dashboard.visible_pets().iter().map(|p| p.name.clone()).collect();
    assert_eq!(order, vec!["Charlie", "Max", "Bella"]);
    assert_eq!(dashboard.filter_options(), vec!["Dog", "Ferret"]);

    let charlie = dashboard.visible_pets()[0].id;
    let updated = dashboard
        .update_pet(charlie, PetChange::Status(PetStatus::Adopted))
        .await
        .unwrap();
    assert_eq!(updated.animal_type.as_deref(), Some("Ferret"));
    assert_eq!(updated.priority, Priority::High);

    assert!(dashboard.delete_pet(charlie).await);
    assert_eq!(dashboard.pets().len(), 2);
    assert!(!dashboard.delete_pet(charlie).await);
    assert_eq!(dashboard.notification().kind, NotificationKind::Error);
}
