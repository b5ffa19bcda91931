use std::path::Path;
use std::sync::Arc;

use oppidum_app::{
    command_handlers::{
        AddToCollectionCommandHandler, DeleteProfileCommandHandler, SaveProfileCommandHandler,
        SetCollectionTraitCommandHandler,
    },
    config::Config,
    cqrs::{
        CommandHandler, QueryHandler,
        commands::{AddToCollection, DeleteProfile, SaveProfile, SetCollectionTrait},
        queries::{GetProfile, ListProfiles},
    },
    queries_handlers::{GetProfileHandler, ListProfilesHandler},
    repository::{CollectionRepository, Repositories},
    search_service::{SearchRequest, SearchService},
};
use oppidum_game::models::catalog::Catalog;
use oppidum_store::{JsonCollectionRepository, JsonProfileRepository};
use oppidum_types::{
    buildings::{Building, SlotCategory},
    common::StatLine,
    errors::ApplicationError,
    profile::SearchProfile,
    slots::{EnabledSlots, SlotId},
    traits::{TraitEffect, TraitTable},
};

fn setup(dir: &Path) -> (Repositories, Arc<Config>) {
    let repos = Repositories {
        profiles: Arc::new(JsonProfileRepository::new(dir)),
        collection: Arc::new(JsonCollectionRepository::new(dir)),
    };
    let config = Arc::new(Config {
        data_dir: dir.to_path_buf(),
        default_max_results: 5,
        combination_ceiling: 1_000_000,
    });
    (repos, config)
}

#[tokio::test]
async fn test_profile_save_list_delete_flow() -> Result<(), ApplicationError> {
    let dir = tempfile::tempdir().expect("temp dir");
    let (repos, config) = setup(dir.path());

    let mut military = EnabledSlots::all();
    military.disable(SlotId::Plaza);

    let farming = SearchProfile::new(
        "farming push",
        EnabledSlots::all(),
        StatLine::new(100, 0, 0, 0),
        5,
    );
    let garrison = SearchProfile::new("garrison", military, StatLine::new(0, 0, 75, 0), 3);
    let farming_id = farming.id;
    let garrison_id = garrison.id;

    let save = SaveProfileCommandHandler::new();
    save.handle(SaveProfile { profile: farming }, &repos, &config).await?;
    save.handle(SaveProfile { profile: garrison }, &repos, &config).await?;

    let profiles = ListProfilesHandler::new()
        .handle(ListProfiles {}, &repos, &config)
        .await?;
    assert_eq!(profiles.len(), 2);

    let loaded = GetProfileHandler::new()
        .handle(GetProfile { id: garrison_id }, &repos, &config)
        .await?;
    assert_eq!(loaded.name, "garrison");
    assert!(!loaded.enabled.is_enabled(SlotId::Plaza));
    assert_eq!(loaded.max_results, 3);

    DeleteProfileCommandHandler::new()
        .handle(DeleteProfile { id: farming_id }, &repos, &config)
        .await?;

    let remaining = ListProfilesHandler::new()
        .handle(ListProfiles {}, &repos, &config)
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, garrison_id);
    Ok(())
}

#[tokio::test]
async fn test_collection_trait_rebinding_feeds_search() -> Result<(), ApplicationError> {
    let dir = tempfile::tempdir().expect("temp dir");
    let (repos, config) = setup(dir.path());

    let hall = Building::new(
        1,
        "Great Hall",
        SlotCategory::MainHall,
        StatLine::new(40, 0, 0, 0),
    );
    AddToCollectionCommandHandler::new()
        .handle(AddToCollection { building: hall }, &repos, &config)
        .await?;

    // Rebinding the variant is what makes the 50-agriculture target reachable.
    SetCollectionTraitCommandHandler::new()
        .handle(
            SetCollectionTrait {
                building_id: 1,
                trait_name: Some("Fertile".to_string()),
            },
            &repos,
            &config,
        )
        .await?;

    let mut trait_table = TraitTable::new();
    trait_table.insert(
        "Fertile".to_string(),
        TraitEffect::new(StatLine::new(10, 0, 0, 0)),
    );

    let owned = repos.collection.list().await?;
    let request = SearchRequest {
        candidates: Catalog::from_buildings(owned).slot_candidates(),
        enabled: EnabledSlots::all(),
        targets: StatLine::new(50, 0, 0, 0),
        trait_table,
        max_results: 5,
    };

    let results = SearchService::new().submit(request).await?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].totals, StatLine::new(50, 0, 0, 0));
    assert_eq!(results[0].threshold_counts, [2, 0, 0, 0]);
    Ok(())
}

#[tokio::test]
async fn test_profiles_survive_a_fresh_repository() -> Result<(), ApplicationError> {
    let dir = tempfile::tempdir().expect("temp dir");
    let (repos, config) = setup(dir.path());

    let profile = SearchProfile::new("keeper", EnabledSlots::all(), StatLine::default(), 5);
    let profile_id = profile.id;
    SaveProfileCommandHandler::new()
        .handle(SaveProfile { profile }, &repos, &config)
        .await?;

    // A new repository over the same directory sees the same data.
    let (fresh_repos, fresh_config) = setup(dir.path());
    let loaded = GetProfileHandler::new()
        .handle(GetProfile { id: profile_id }, &fresh_repos, &fresh_config)
        .await?;
    assert_eq!(loaded.name, "keeper");
    Ok(())
}
