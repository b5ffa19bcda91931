use std::io::Write;
use std::path::PathBuf;

use oppidum_app::search_service::{SearchRequest, SearchService};
use oppidum_store::{load_catalog_csv, load_trait_table_csv};
use oppidum_types::{
    common::StatLine,
    errors::{AppError, ApplicationError},
    slots::EnabledSlots,
    traits::TraitTable,
};

const CATALOG_CSV: &str = "\
id,name,category,position,agriculture,mining,military,commerce,trait
1,Old Hall,main hall,,20,0,0,0,
2,New Hall,main hall,,60,0,0,0,Venerable
3,Palisade,city wall,,0,0,30,0,
4,Gardens,plaza,,15,0,0,0,
5,Teahouse,market,,0,0,0,10,
6,Silk Stall,market,w1,0,0,0,25,
";

const TRAITS_CSV: &str = "\
trait,agriculture,mining,military,commerce,extra
Venerable,10,0,0,0,a storied seat of government
";

fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("create file");
    file.write_all(content.as_bytes()).expect("write file");
    path
}

#[tokio::test]
async fn test_csv_catalog_to_ranked_results() -> Result<(), ApplicationError> {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = load_catalog_csv(&write_file(&dir, "catalog.csv", CATALOG_CSV))?;
    let trait_table = load_trait_table_csv(&write_file(&dir, "traits.csv", TRAITS_CSV))?;

    let request = SearchRequest {
        candidates: catalog.slot_candidates(),
        enabled: EnabledSlots::all(),
        targets: StatLine::new(80, 0, 0, 0),
        trait_table,
        max_results: 5,
    };

    // 2 halls x 1 wall x 1 plaza x 2 west-1 stalls x 1 x 1 x 1.
    assert_eq!(SearchService::estimate(&request), 4);

    let service = SearchService::new();
    let results = service.submit(request).await?;

    // Only the New Hall combinations reach 80 agriculture: 60 base + 10
    // from the Venerable trait + 15 from the Gardens.
    assert_eq!(results.len(), 2);

    let best = &results[0];
    assert_eq!(best.totals, StatLine::new(85, 0, 30, 55));
    assert_eq!(best.score, 6);
    assert!(best.picks.iter().any(|(_, b)| b.name == "New Hall"));
    assert!(best.picks.iter().any(|(_, b)| b.name == "Silk Stall"));

    // The generic Teahouse fans out, so one building fills several market
    // slots of the same combination.
    let teahouses = best
        .picks
        .iter()
        .filter(|(_, b)| b.name == "Teahouse")
        .count();
    assert_eq!(teahouses, 3);

    assert!(
        results[0].score >= results[1].score,
        "results must be ranked by score"
    );
    Ok(())
}

#[tokio::test]
async fn test_unreachable_targets_return_empty() -> Result<(), ApplicationError> {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = load_catalog_csv(&write_file(&dir, "catalog.csv", CATALOG_CSV))?;

    let request = SearchRequest {
        candidates: catalog.slot_candidates(),
        enabled: EnabledSlots::all(),
        targets: StatLine::new(0, 1_000, 0, 0),
        trait_table: TraitTable::new(),
        max_results: 5,
    };

    let results = SearchService::new().submit(request).await?;
    assert!(results.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_empty_catalog_searches_to_empty() -> Result<(), ApplicationError> {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = load_catalog_csv(&write_file(
        &dir,
        "catalog.csv",
        "id,name,category,agriculture\n",
    ))?;

    let request = SearchRequest {
        candidates: catalog.slot_candidates(),
        enabled: EnabledSlots::all(),
        targets: StatLine::default(),
        trait_table: TraitTable::new(),
        max_results: 5,
    };

    assert_eq!(SearchService::estimate(&request), 0);
    let results = SearchService::new().submit(request).await?;
    assert!(results.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_search_results_are_reproducible() -> Result<(), ApplicationError> {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = load_catalog_csv(&write_file(&dir, "catalog.csv", CATALOG_CSV))?;
    let trait_table = load_trait_table_csv(&write_file(&dir, "traits.csv", TRAITS_CSV))?;

    let request = SearchRequest {
        candidates: catalog.slot_candidates(),
        enabled: EnabledSlots::all(),
        targets: StatLine::default(),
        trait_table,
        max_results: 4,
    };

    let service = SearchService::new();
    let first = service.submit(request.clone()).await?;
    let second = service.submit(request).await?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn test_cancelled_search_surfaces_superseded_error() -> Result<(), ApplicationError> {
    let dir = tempfile::tempdir().expect("temp dir");
    let catalog = load_catalog_csv(&write_file(&dir, "catalog.csv", CATALOG_CSV))?;

    let request = SearchRequest {
        candidates: catalog.slot_candidates(),
        enabled: EnabledSlots::all(),
        targets: StatLine::default(),
        trait_table: TraitTable::new(),
        max_results: 5,
    };

    let service = std::sync::Arc::new(SearchService::new());
    service.cancel().await; // no-op without an in-flight search

    let results = service.submit(request.clone()).await?;
    assert_eq!(results.len(), 4, "cancel without a search must not poison the service");

    // A raised flag before submission must not leak into the next search.
    let again = service.submit(request).await;
    assert!(!matches!(
        again,
        Err(ApplicationError::App(AppError::SearchSuperseded))
    ));
    Ok(())
}
