use sqlx::{
    postgres::{PgPoolOptions, PgQueryResult},
    PgPool,
};

pub type PoolType = PgPool;
pub type PoolOption = PgPoolOptions;
pub type QueryResult = PgQueryResult;
