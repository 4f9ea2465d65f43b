pub use self::{
    chain::ChainReader, database::DatabasePool, event::Event, rpc::RpcReader,
};

mod chain;
mod database;
mod event;
mod rpc;
