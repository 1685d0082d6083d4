mod persistence;

pub use persistence::PersistenceError;
