use uuid::Uuid;

use oppidum_types::{buildings::Building, profile::SearchProfile};

use crate::cqrs::Query;

#[derive(Debug, Clone)]
pub struct GetProfile {
    pub id: Uuid,
}

impl Query for GetProfile {
    type Output = SearchProfile;
}

#[derive(Debug, Clone)]
pub struct ListProfiles {}

impl Query for ListProfiles {
    type Output = Vec<SearchProfile>;
}

#[derive(Debug, Clone)]
pub struct GetCollection {}

impl Query for GetCollection {
    type Output = Vec<Building>;
}
