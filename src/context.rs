use std::path::PathBuf;

use anyhow::bail;

use crate::generator::utils::{default_output_path, path_prefix};

/// Blog-wide settings taken from the environment.
#[derive(Debug, Clone)]
pub(crate) struct Site {
    pub blog_name: String,
    pub lang: String,
    pub read_more: String,
}

impl Site {
    pub fn from_env() -> Self {
        Self {
            blog_name: std::env::var("BLOG_NAME").unwrap_or("Blog".to_string()),
            lang: std::env::var("BLOG_LANG").unwrap_or("zh-CN".to_string()),
            read_more: std::env::var("BLOG_READ_MORE").unwrap_or("阅读全文 →".to_string()),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Context {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub path_prefix: String,
    pub update_index: bool,
    pub excerpt_length: usize,

    pub site: Site,
}

impl Context {
    pub fn new(
        input_path: PathBuf,
        output_path: Option<PathBuf>,
        update_index: bool,
        excerpt_length: usize,
        site: Site,
    ) -> anyhow::Result<Self> {
        if !input_path.is_file() {
            bail!("File not found: {}", input_path.display());
        }

        let output_path = output_path.unwrap_or_else(|| default_output_path(&input_path));
        let path_prefix = path_prefix(&input_path);

        Ok(Self {
            input_path,
            output_path,
            path_prefix,
            update_index,
            excerpt_length,
            site,
        })
    }
}
