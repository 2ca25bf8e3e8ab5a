use session_notifier::application::{self, ApplicationEnv};
use tokio::io::BufReader;

fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let local_offset = application::local_offset();
    let state = application::create_state(&env, local_offset);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        let input = BufReader::new(tokio::io::stdin());

        tokio::select! {
            result = application::run(&state, input) => {
                result?;
            },
            _ = application::shutdown_signal() => {},
        }

        tracing::info!("shutdown finished");

        anyhow::Ok(())
    });

    // Reading stdin blocks a runtime thread that would never finish on its own
    runtime.shutdown_background();

    result
}
