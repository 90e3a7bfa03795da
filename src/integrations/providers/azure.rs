mod interface;
mod resource_catalog;
mod resource_manager;

pub use interface::AzureInterface;
