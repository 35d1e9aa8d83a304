/// Batch feature import flows against in-memory stores.
///
/// Covers:
/// - Success: layer feature count grows by the batch size, every created
///   feature stamped with creator and layer
/// - Abort: the failing item's error is the whole response; other items
///   may have persisted and are not rolled back
mod utils;

use mapcolab::shared::errors::AppError;
use utils::factories::{self, build_test_services};
use uuid::Uuid;

#[tokio::test]
async fn importing_three_items_grows_the_layer_by_three() {
    let services = build_test_services();
    let user = Uuid::new_v4();

    let layer = services
        .layer_service
        .create_layer("Murals".to_string(), None, None, user)
        .await
        .unwrap();
    let seeded = services
        .feature_service
        .create_feature(&layer.id, factories::feature_payload("Existing"), user)
        .await
        .unwrap();
    let previous_count = services
        .layer_repo
        .get(&layer.id)
        .unwrap()
        .feature_ids
        .len();

    let feature_ids = services
        .import_service
        .import_features(
            &layer.id,
            vec![
                factories::import_item("Mural: open hands"),
                factories::import_item("Mural: the river"),
                factories::import_item("Mural: harvest"),
            ],
            user,
        )
        .await
        .unwrap();

    assert_eq!(feature_ids.len(), previous_count + 3);
    assert!(feature_ids.contains(&seeded.id));

    let layer = services.layer_repo.get(&layer.id).unwrap();
    assert_eq!(layer.feature_ids, feature_ids);

    for feature_id in feature_ids.iter().filter(|id| **id != seeded.id) {
        let feature = services.feature_repo.get(feature_id).unwrap();
        assert_eq!(feature.creator_id, user);
        assert_eq!(feature.layer_id, layer.id);
    }
}

#[tokio::test]
async fn a_failing_item_aborts_with_exactly_its_error() {
    let services = build_test_services();
    let user = Uuid::new_v4();

    let layer = services
        .layer_service
        .create_layer("Murals".to_string(), None, None, user)
        .await
        .unwrap();

    let err = services
        .import_service
        .import_features(
            &layer.id,
            vec![
                factories::import_item("Mural: open hands"),
                factories::import_item(""),
                factories::import_item("Mural: harvest"),
            ],
            user,
        )
        .await
        .unwrap_err();

    match err {
        AppError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.contains_key("title"));
        }
        other => panic!("Expected the failing item's validation error, got {:?}", other),
    }

    // the layer was never saved with staged ids
    let layer = services.layer_repo.get(&layer.id).unwrap();
    assert!(layer.feature_ids.is_empty());

    // the well-formed items may or may not have persisted; both outcomes
    // are within contract, so only the bound is asserted
    assert!(services.feature_repo.len() <= 2);
}

#[tokio::test]
async fn importing_into_a_missing_layer_fails_up_front() {
    let services = build_test_services();

    let err = services
        .import_service
        .import_features(
            &Uuid::new_v4(),
            vec![factories::import_item("Orphan")],
            Uuid::new_v4(),
        )
        .await
        .unwrap_err();

    match err {
        AppError::NotFound(message) => assert_eq!(message, "Layer not found."),
        other => panic!("Expected not-found, got {:?}", other),
    }
    assert_eq!(services.feature_repo.len(), 0);
}
