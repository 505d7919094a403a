use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content pool '{0}' is empty; generation requires at least one fragment per pool")]
    EmptyPool(&'static str),
}
