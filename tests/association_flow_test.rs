/// Feature <-> Content association flows against in-memory stores.
///
/// Covers:
/// - Idempotent linking (linking twice equals linking once)
/// - Symmetry of the two reference sets after a successful link
/// - Unlinking both sides
/// - Layer <-> Feature attach and detach
mod utils;

use utils::factories::{self, build_test_services};
use uuid::Uuid;

#[tokio::test]
async fn linking_twice_equals_linking_once() {
    let services = build_test_services();
    let user = Uuid::new_v4();

    let layer = services
        .layer_service
        .create_layer("Rivers".to_string(), None, None, user)
        .await
        .unwrap();
    let feature = services
        .feature_service
        .create_feature(&layer.id, factories::feature_payload("Spring"), user)
        .await
        .unwrap();
    let content = services
        .content_service
        .create_content(&layer.id, "Spring story".to_string(), None, None, user)
        .await
        .unwrap();

    services
        .feature_service
        .link_content(&feature.id, &content.id)
        .await
        .unwrap();
    services
        .feature_service
        .link_content(&feature.id, &content.id)
        .await
        .unwrap();

    let feature = services.feature_repo.get(&feature.id).unwrap();
    let content = services.content_repo.get(&content.id).unwrap();
    assert_eq!(feature.content_ids, vec![content.id]);
    assert_eq!(content.feature_ids, vec![feature.id]);
}

#[tokio::test]
async fn successful_link_is_symmetric() {
    let services = build_test_services();
    let user = Uuid::new_v4();

    let layer = services
        .layer_service
        .create_layer("Rivers".to_string(), None, None, user)
        .await
        .unwrap();
    let feature = services
        .feature_service
        .create_feature(&layer.id, factories::feature_payload("Bridge"), user)
        .await
        .unwrap();
    let content = services
        .content_service
        .create_content(&layer.id, "Bridge story".to_string(), None, None, user)
        .await
        .unwrap();

    services
        .feature_service
        .link_content(&feature.id, &content.id)
        .await
        .unwrap();

    let feature = services.feature_repo.get(&feature.id).unwrap();
    let content = services.content_repo.get(&content.id).unwrap();
    assert!(feature.contains_content(&content.id));
    assert!(content.contains_feature(&feature.id));
}

#[tokio::test]
async fn unlink_clears_both_sides() {
    let services = build_test_services();
    let user = Uuid::new_v4();

    let layer = services
        .layer_service
        .create_layer("Rivers".to_string(), None, None, user)
        .await
        .unwrap();
    let feature = services
        .feature_service
        .create_feature(&layer.id, factories::feature_payload("Mill"), user)
        .await
        .unwrap();
    let content = services
        .content_service
        .create_content(&layer.id, "Mill story".to_string(), None, None, user)
        .await
        .unwrap();

    services
        .feature_service
        .link_content(&feature.id, &content.id)
        .await
        .unwrap();
    services
        .feature_service
        .unlink_content(&feature.id, &content.id)
        .await
        .unwrap();

    let feature = services.feature_repo.get(&feature.id).unwrap();
    let content = services.content_repo.get(&content.id).unwrap();
    assert!(feature.content_ids.is_empty());
    assert!(content.feature_ids.is_empty());
}

#[tokio::test]
async fn attach_feature_restamps_its_owning_layer() {
    let services = build_test_services();
    let user = Uuid::new_v4();

    let first = services
        .layer_service
        .create_layer("First".to_string(), None, None, user)
        .await
        .unwrap();
    let second = services
        .layer_service
        .create_layer("Second".to_string(), None, None, user)
        .await
        .unwrap();
    let feature = services
        .feature_service
        .create_feature(&first.id, factories::feature_payload("Shared corner"), user)
        .await
        .unwrap();

    services
        .layer_service
        .attach_feature(&second.id, &feature.id)
        .await
        .unwrap();

    let feature = services.feature_repo.get(&feature.id).unwrap();
    let second = services.layer_repo.get(&second.id).unwrap();
    assert_eq!(feature.layer_id, second.id);
    assert!(second.contains_feature(&feature.id));

    // the first layer still references the feature; nothing cascades
    let first = services.layer_repo.get(&first.id).unwrap();
    assert!(first.contains_feature(&feature.id));
}

#[tokio::test]
async fn detach_feature_leaves_the_feature_row_alone() {
    let services = build_test_services();
    let user = Uuid::new_v4();

    let layer = services
        .layer_service
        .create_layer("Rivers".to_string(), None, None, user)
        .await
        .unwrap();
    let feature = services
        .feature_service
        .create_feature(&layer.id, factories::feature_payload("Dock"), user)
        .await
        .unwrap();

    services
        .layer_service
        .detach_feature(&layer.id, &feature.id)
        .await
        .unwrap();

    let layer = services.layer_repo.get(&layer.id).unwrap();
    assert!(!layer.contains_feature(&feature.id));

    // back-reference still points at the layer that dropped it
    let feature = services.feature_repo.get(&feature.id).unwrap();
    assert_eq!(feature.layer_id, layer.id);
}
