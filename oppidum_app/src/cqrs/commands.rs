use uuid::Uuid;

use oppidum_types::{buildings::Building, profile::SearchProfile};

use crate::cqrs::Command;

#[derive(Debug, Clone)]
pub struct SaveProfile {
    pub profile: SearchProfile,
}

impl Command for SaveProfile {}

#[derive(Debug, Clone)]
pub struct DeleteProfile {
    pub id: Uuid,
}

impl Command for DeleteProfile {}

#[derive(Debug, Clone)]
pub struct AddToCollection {
    pub building: Building,
}

impl Command for AddToCollection {}

#[derive(Debug, Clone)]
pub struct RemoveFromCollection {
    pub building_id: u32,
}

impl Command for RemoveFromCollection {}

/// Rebind the trait of an owned building to the selected variant.
#[derive(Debug, Clone)]
pub struct SetCollectionTrait {
    pub building_id: u32,
    pub trait_name: Option<String>,
}

impl Command for SetCollectionTrait {}
