mod config;
mod options;

pub mod prelude {
    pub use super::{
        config::{Config, ReplConfig},
        options::Opt,
    };
}
