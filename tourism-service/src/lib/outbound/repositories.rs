pub mod credential;
pub mod spot;

pub use credential::InMemoryCredentialStore;
pub use spot::InMemorySpotRepository;
