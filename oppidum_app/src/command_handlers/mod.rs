mod add_to_collection;
mod delete_profile;
mod remove_from_collection;
mod save_profile;
mod set_collection_trait;

pub use add_to_collection::AddToCollectionCommandHandler;
pub use delete_profile::DeleteProfileCommandHandler;
pub use remove_from_collection::RemoveFromCollectionCommandHandler;
pub use save_profile::SaveProfileCommandHandler;
pub use set_collection_trait::SetCollectionTraitCommandHandler;
