use std::env;
use std::sync::LazyLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Debug = 2,
}

impl Level {
    fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" | "err" => Self::Error,
            "warn" | "warning" => Self::Warn,
            "debug" | "trace" => Self::Debug,
            _ => Self::Error,
        }
    }
}

static CHESS_LOG: LazyLock<Level> = LazyLock::new(|| {
    env::var("CHESS_LOG")
        .map(|s| Level::from_str(&s))
        .unwrap_or(Level::Error)
});

pub fn enabled(level: Level) -> bool {
    *CHESS_LOG >= level
}

macro_rules! log {
    ($level:expr, $macro:ident, $msg:expr) => {
        if enabled($level) {
            ::log::$macro!(target: "pgn_navigator", "{}", $msg.as_ref());
        }
    };
}

pub fn error(msg: impl AsRef<str>) {
    log!(Level::Error, error, msg);
}

pub fn warn(msg: impl AsRef<str>) {
    log!(Level::Warn, warn, msg);
}

pub fn debug(msg: impl AsRef<str>) {
    log!(Level::Debug, debug, msg);
}
