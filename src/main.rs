use tracing::{error, Level};

use lending_etl::{
    configuration::{get_configuration, set_configuration, AppState, Config, State},
    dao::{MemoryStore, Store},
    error::Error,
    provider::{DatabasePool, Event, RpcReader},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level({
            #[cfg(debug_assertions)]
            {
                Level::DEBUG
            }

            #[cfg(not(debug_assertions))]
            {
                Level::INFO
            }
        })
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let (config, store) = match init().await {
        Ok((config, store)) => (config, store),
        Err(e) => return Err(Error::ConfigurationError(e.to_string())),
    };

    let chain = RpcReader::new(&config)?;
    let state = State::new(config, store, chain);
    let app_state = AppState::new(state);

    let mut event_manager = Event::new(app_state);
    event_manager.run().await?;

    Ok(())
}

async fn init() -> Result<(Config, Store), Error> {
    set_configuration()?;
    let config = get_configuration()?;

    let store = if config.use_database() {
        let database = DatabasePool::new(&config).await?;
        database.init_migrations().await?;
        Store::new(database)
    } else {
        Store::new(MemoryStore::new())
    };

    Ok((config, store))
}
