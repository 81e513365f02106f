mod client;

pub use client::{new_mysql_pool, MySqlDatabase, MAX_CONNECTIONS};
