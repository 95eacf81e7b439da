//! Console logging on stderr through `log4rs`.
//!
//! The level is read from `SIR_ROUTES_LOG` and defaults to `info`.

use {
    log::LevelFilter,
    log4rs::{
        append::console::{ConsoleAppender, Target},
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    },
    crate::error::SimError,
};

pub const LOG_LEVEL_ENV: &str = "SIR_ROUTES_LOG";

pub fn parse_level(raw: &str) -> Result<LevelFilter, SimError>
{
    raw.trim()
        .parse::<LevelFilter>()
        .map_err(|_| SimError::InvalidParameter(format!("unknown log level `{raw}`")))
}

pub fn init_logging() -> Result<(), SimError>
{
    let level = match std::env::var(LOG_LEVEL_ENV){
        Ok(raw) => parse_level(&raw)?,
        Err(_) => LevelFilter::Info
    };

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| SimError::InvalidParameter(format!("logging config: {e}")))?;

    // a logger may already be installed, keep it
    if let Err(e) = log4rs::init_config(config){
        eprintln!("logging already configured: {e}");
    }
    Ok(())
}
