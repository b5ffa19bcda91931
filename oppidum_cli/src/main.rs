use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use oppidum_app::{
    command_handlers::{
        AddToCollectionCommandHandler, DeleteProfileCommandHandler,
        RemoveFromCollectionCommandHandler, SaveProfileCommandHandler,
        SetCollectionTraitCommandHandler,
    },
    config::Config,
    cqrs::{
        CommandHandler, QueryHandler,
        commands::{
            AddToCollection, DeleteProfile, RemoveFromCollection, SaveProfile, SetCollectionTrait,
        },
        queries::{GetCollection, GetProfile, ListProfiles},
    },
    queries_handlers::{GetCollectionHandler, GetProfileHandler, ListProfilesHandler},
    repository::{CollectionRepository, Repositories},
    search_service::{SearchRequest, SearchService},
};
use oppidum_game::{models::bonus, models::catalog::Catalog};
use oppidum_store::{
    JsonCollectionRepository, JsonProfileRepository, load_catalog_csv, load_trait_table_csv,
};
use oppidum_types::{
    common::{Stat, StatLine},
    profile::SearchProfile,
    slots::{EnabledSlots, SlotId},
    traits::TraitTable,
};

mod logs;
mod render;

#[derive(Parser, Debug)]
#[command(name = "oppidum", version, about = "Building-placement planner for slot-based city builders", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for the best building combinations
    Search(SearchArgs),
    /// Estimate how many combinations a search would enumerate
    Estimate(EstimateArgs),
    /// Manage saved search profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Manage the owned-building collection
    Collection {
        #[command(subcommand)]
        action: CollectionAction,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Path to the building catalog CSV
    #[arg(long, conflicts_with = "from_collection")]
    catalog: Option<PathBuf>,

    /// Search over the owned collection instead of a catalog file
    #[arg(long)]
    from_collection: bool,
}

#[derive(Args, Debug)]
struct TargetArgs {
    /// Minimum agriculture total
    #[arg(long, default_value_t = 0)]
    agriculture: u32,

    /// Minimum mining total
    #[arg(long, default_value_t = 0)]
    mining: u32,

    /// Minimum military total
    #[arg(long, default_value_t = 0)]
    military: u32,

    /// Minimum commerce total
    #[arg(long, default_value_t = 0)]
    commerce: u32,
}

impl TargetArgs {
    fn to_stat_line(&self) -> StatLine {
        StatLine::new(self.agriculture, self.mining, self.military, self.commerce)
    }
}

#[derive(Args, Debug)]
struct SearchArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Path to the trait table CSV
    #[arg(long)]
    traits: Option<PathBuf>,

    #[command(flatten)]
    targets: TargetArgs,

    /// Slots to exclude from the search (repeatable)
    #[arg(long = "disable", value_name = "SLOT")]
    disable: Vec<String>,

    /// How many ranked results to keep
    #[arg(long)]
    max_results: Option<usize>,

    /// Load slots, targets and result cap from a saved profile
    #[arg(long)]
    profile: Option<Uuid>,

    /// Search even past the combination ceiling
    #[arg(long)]
    force: bool,
}

#[derive(Args, Debug)]
struct EstimateArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Slots to exclude from the search (repeatable)
    #[arg(long = "disable", value_name = "SLOT")]
    disable: Vec<String>,
}

#[derive(Subcommand, Debug)]
enum ProfileAction {
    /// Save targets and slot set under a name
    Save {
        #[arg(long)]
        name: String,

        #[command(flatten)]
        targets: TargetArgs,

        /// Slots to exclude (repeatable)
        #[arg(long = "disable", value_name = "SLOT")]
        disable: Vec<String>,

        #[arg(long)]
        max_results: Option<usize>,
    },
    /// List saved profiles
    List,
    /// Delete a saved profile
    Delete { id: Uuid },
}

#[derive(Subcommand, Debug)]
enum CollectionAction {
    /// Add a building from a catalog CSV by its id
    Add {
        #[arg(long)]
        catalog: PathBuf,

        #[arg(long)]
        id: u32,
    },
    /// Remove one owned copy by building id
    Remove { id: u32 },
    /// Rebind the trait variant of an owned building (omit --trait-name to clear)
    SetTrait {
        id: u32,

        #[arg(long)]
        trait_name: Option<String>,
    },
    /// Show the owned collection
    Show {
        /// Trait table CSV used to describe trait effects
        #[arg(long)]
        traits: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    logs::setup_logging();

    let cli = Cli::parse();
    let config = Arc::new(Config::from_env());
    let repos = Repositories {
        profiles: Arc::new(JsonProfileRepository::new(&config.data_dir)),
        collection: Arc::new(JsonCollectionRepository::new(&config.data_dir)),
    };

    match cli.command {
        Commands::Search(args) => run_search(args, &repos, &config).await,
        Commands::Estimate(args) => run_estimate(args, &repos).await,
        Commands::Profile { action } => run_profile(action, &repos, &config).await,
        Commands::Collection { action } => run_collection(action, &repos, &config).await,
    }
}

async fn load_buildings(source: &SourceArgs, repos: &Repositories) -> Result<Catalog> {
    if source.from_collection {
        let buildings = repos.collection.list().await?;
        return Ok(Catalog::from_buildings(buildings));
    }

    match &source.catalog {
        Some(path) => Ok(load_catalog_csv(path)?),
        None => bail!("either --catalog or --from-collection is required"),
    }
}

fn parse_enabled(disable: &[String]) -> Result<EnabledSlots> {
    let mut enabled = EnabledSlots::all();
    for name in disable {
        enabled.disable(name.parse::<SlotId>()?);
    }
    Ok(enabled)
}

async fn run_search(args: SearchArgs, repos: &Repositories, config: &Arc<Config>) -> Result<()> {
    let catalog = load_buildings(&args.source, repos).await?;
    let trait_table = match &args.traits {
        Some(path) => load_trait_table_csv(path)?,
        None => TraitTable::new(),
    };

    let mut enabled = parse_enabled(&args.disable)?;
    let mut targets = args.targets.to_stat_line();
    let mut max_results = args.max_results.unwrap_or(config.default_max_results);

    if let Some(profile_id) = args.profile {
        let profile = GetProfileHandler::new()
            .handle(GetProfile { id: profile_id }, repos, config)
            .await?;
        tracing::info!(name = %profile.name, "searching with saved profile");
        enabled = profile.enabled;
        targets = profile.targets;
        max_results = profile.max_results;
    }

    let request = SearchRequest {
        candidates: catalog.slot_candidates(),
        enabled,
        targets,
        trait_table: trait_table.clone(),
        max_results,
    };

    let estimate = SearchService::estimate(&request);
    if estimate > config.combination_ceiling {
        if !args.force {
            bail!(
                "estimated {estimate} combinations exceeds the ceiling of {}; \
                 narrow the search or re-run with --force",
                config.combination_ceiling
            );
        }
        tracing::warn!(estimate, "searching past the combination ceiling");
    }

    let service = SearchService::new();
    let results = service.submit(request).await?;

    if results.is_empty() {
        println!("No combination meets the targets.");
        return Ok(());
    }

    for (idx, result) in results.iter().enumerate() {
        println!("{}", render::render_result(idx + 1, result, &trait_table));
    }
    Ok(())
}

async fn run_estimate(args: EstimateArgs, repos: &Repositories) -> Result<()> {
    let catalog = load_buildings(&args.source, repos).await?;
    let enabled = parse_enabled(&args.disable)?;

    let estimate =
        oppidum_game::solver::estimate_combinations(&catalog.slot_candidates(), &enabled);
    println!("{estimate}");
    Ok(())
}

async fn run_profile(
    action: ProfileAction,
    repos: &Repositories,
    config: &Arc<Config>,
) -> Result<()> {
    match action {
        ProfileAction::Save {
            name,
            targets,
            disable,
            max_results,
        } => {
            let profile = SearchProfile::new(
                name,
                parse_enabled(&disable)?,
                targets.to_stat_line(),
                max_results.unwrap_or(config.default_max_results),
            );
            let profile_id = profile.id;

            SaveProfileCommandHandler::new()
                .handle(SaveProfile { profile }, repos, config)
                .await?;
            println!("{profile_id}");
        }
        ProfileAction::List => {
            let profiles = ListProfilesHandler::new()
                .handle(ListProfiles {}, repos, config)
                .await?;
            for profile in profiles {
                println!(
                    "{}  {}  targets {}  top {}",
                    profile.id,
                    profile.name,
                    format_targets(&profile.targets),
                    profile.max_results,
                );
            }
        }
        ProfileAction::Delete { id } => {
            DeleteProfileCommandHandler::new()
                .handle(DeleteProfile { id }, repos, config)
                .await?;
        }
    }
    Ok(())
}

async fn run_collection(
    action: CollectionAction,
    repos: &Repositories,
    config: &Arc<Config>,
) -> Result<()> {
    match action {
        CollectionAction::Add { catalog, id } => {
            let catalog = load_catalog_csv(&catalog)?;
            let Some(building) = catalog.buildings().iter().find(|b| b.id == id) else {
                bail!("no building with id {id} in the catalog");
            };

            AddToCollectionCommandHandler::new()
                .handle(
                    AddToCollection {
                        building: building.clone(),
                    },
                    repos,
                    config,
                )
                .await?;
        }
        CollectionAction::Remove { id } => {
            RemoveFromCollectionCommandHandler::new()
                .handle(RemoveFromCollection { building_id: id }, repos, config)
                .await?;
        }
        CollectionAction::SetTrait { id, trait_name } => {
            SetCollectionTraitCommandHandler::new()
                .handle(
                    SetCollectionTrait {
                        building_id: id,
                        trait_name,
                    },
                    repos,
                    config,
                )
                .await?;
        }
        CollectionAction::Show { traits } => {
            let trait_table = match &traits {
                Some(path) => load_trait_table_csv(path)?,
                None => TraitTable::new(),
            };

            let buildings = GetCollectionHandler::new()
                .handle(GetCollection {}, repos, config)
                .await?;
            for building in buildings {
                let trait_desc = bonus::describe_trait(&building, &trait_table);
                if trait_desc.is_empty() {
                    println!(
                        "{:>4}  {:<20} {}",
                        building.id,
                        building.name,
                        format_targets(&building.stats),
                    );
                } else {
                    println!(
                        "{:>4}  {:<20} {}  [{}]",
                        building.id,
                        building.name,
                        format_targets(&building.stats),
                        trait_desc,
                    );
                }
            }
        }
    }
    Ok(())
}

fn format_targets(stats: &StatLine) -> String {
    Stat::ALL
        .iter()
        .map(|stat| format!("{} {}", stat.abbr(), stats.get(*stat)))
        .collect::<Vec<_>>()
        .join("  ")
}
