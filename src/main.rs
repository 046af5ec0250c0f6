//! DesignGen - Entry Point
//!
//! Starts the bridge service: loads configuration from the environment,
//! selects a translation strategy (generative when an API key is set,
//! rule-based otherwise), and serves the ingress and poll endpoints.

use designgen::core::config::BridgeConfig;
use designgen::server::build_app_with_state;
use designgen::server::state::AppState;
use designgen::translate::Translator;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("designgen=debug")),
        )
        .init();

    let config = BridgeConfig::from_env();

    let translator = Translator::from_config(&config);
    match &translator {
        Translator::Generative(_) => {
            tracing::info!(model = %config.model, "using generative translator");
        }
        Translator::RuleBased(_) => {
            tracing::warn!("LLM_API_KEY not set - using rule-based translator");
        }
    }

    let state = AppState::new(translator);
    let app = build_app_with_state(state);

    tracing::info!("DesignGen backend running at http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind address");

    axum::serve(listener, app).await.expect("server error");
}
