mod repositories;

pub use repositories::Repositories;
