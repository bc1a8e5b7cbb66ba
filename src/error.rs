use std::io;
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line {line}: unexpected line format: {text:?}")]
    Format { line: usize, text: String },
    #[error("line {line}: invalid coordinate")]
    Number {
        line: usize,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: sensor area reaches beyond ±{limit}")]
    OutOfRange { line: usize, limit: i64 },
    #[error("failed to build scan thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
