mod locale_config;
mod storage_config;
#[allow(clippy::module_inception)]
mod config;

pub(crate) use {config::Config, locale_config::LocaleConfig, storage_config::StorageConfig};

pub(crate) const SAVE_FILE_NAME: &str = "save.json";
pub(crate) const CHAPTER_LOG_NAME: &str = "chapters.txt";
