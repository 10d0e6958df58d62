#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    homework_bot::app::init_tracing();

    let config = match homework_bot::Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("cannot start: {err}");
            return Err(err);
        }
    };

    homework_bot::run(config).await
}
