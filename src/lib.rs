mod config;
pub use config::Config;
pub use config::UpdatePolicy;
pub use config::INITIAL_ENTRIES;
pub use config::MAX_CAPACITY;
pub use config::MAX_INITIAL_ENTRIES;
pub use config::MIN_CAPACITY;

mod error;
pub use error::LongMapError;
pub use error::Result;

mod hash;
pub use hash::integer_hash;

mod map;
pub use map::ChainedLongMap;
pub use map::LongMap;

mod command;
pub use command::Command;

mod shell;
pub use shell::Shell;
