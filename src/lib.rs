// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod app;
pub mod checks;
pub mod config;
pub mod engine;
pub mod logging;
pub mod metrics;
pub mod user_config;
pub mod utils;

// Re-export commonly used types
pub use app::{format_result, is_exit_command, run_interactive, welcome_banner};
pub use checks::{run_checks, CheckCase, CHECK_CASES};
pub use config::{
    load_tag_config, parse_tag_config, validate_tag_config, ConfigError, TagConfig, TagEntry,
    CATCH_ALL_TAG, UNKNOWN_TAG,
};
pub use engine::{
    default_tags, rank_tags, score_tags, select_top_two, tokenize, TagResult, TagScore,
    TaggerEngine, TokenizedMessage,
};
pub use logging::{init_logging, parse_rotation, LogConfig, LOG_FILENAME};
pub use metrics::{generate_message_id, OperationTimer};
pub use user_config::{
    load_user_config, user_config_path, TaggerSettings, UserConfig, UserConfigError,
};
