use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadToc,
    SaveFavorites(PathBuf, Vec<String>),
}
