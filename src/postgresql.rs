mod client;

pub use client::{new_postgresql_client, PostgresDatabase};
