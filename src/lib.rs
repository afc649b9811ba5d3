pub mod cli;
pub mod comments;
pub mod config;
pub mod converter;

pub use config::Config;
pub use converter::{
    convert, convert_lenient, convert_strict, CaseConverter, ConvertError, Input, Mode, Style,
};
