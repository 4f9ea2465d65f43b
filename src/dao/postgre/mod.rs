pub use self::{
    path::get_path,
    types::{PoolOption, PoolType, QueryResult},
};

mod entity;
mod path;
mod types;
