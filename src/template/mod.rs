//! 配置文件模板引擎
//!
//! 基于 minijinja（Jinja2 语法），渲染上下文只有三样东西：
//!
//! - `env`：进程环境变量快照
//! - `env_to_props(env_prefix, prop_prefix, exclude=[])`
//! - `parse_log4j_loggers(overrides_str, defaults={})`
//!
//! # 模板示例
//!
//! ```text
//! broker.id={{ env['KAFKA_BROKER_ID'] }}
//! {% for name, value in env_to_props('KAFKA_', '', exclude=['KAFKA_BROKER_ID']).items() %}
//! {{ name }}={{ value }}
//! {% endfor %}
//! ```
//!
//! 模板名按搜索根目录（默认 `/`）解析，因此 `{% include "/etc/conf/base.tmpl" %}` 可直接使用绝对路径。

pub mod functions;

use crate::error::{DubError, Result};
use crate::types::EnvSnapshot;
use crate::utils::paths;
use minijinja::{Environment, Error, ErrorKind};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// 默认模板搜索根目录
pub const DEFAULT_SEARCH_ROOT: &str = "/";

/// 渲染上下文
#[derive(Serialize)]
struct RenderContext<'a> {
    env: &'a EnvSnapshot,
}

/// 模板渲染器
pub struct TemplateRenderer {
    jinja: Environment<'static>,
    snapshot: Arc<EnvSnapshot>,
}

impl TemplateRenderer {
    /// 创建渲染器，模板从文件系统根目录查找
    pub fn new(snapshot: EnvSnapshot) -> Self {
        Self::with_root(snapshot, DEFAULT_SEARCH_ROOT)
    }

    /// 创建渲染器，相对模板名相对 `root` 解析
    pub fn with_root(snapshot: EnvSnapshot, root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let snapshot = Arc::new(snapshot);

        let mut jinja = Environment::new();
        jinja.set_trim_blocks(true);
        jinja.set_unknown_method_callback(minijinja_contrib::pycompat::unknown_method_callback);
        jinja.set_loader(move |name| load_template(&root, name));
        functions::register(&mut jinja, Arc::clone(&snapshot));

        Self { jinja, snapshot }
    }

    /// 渲染指定模板，返回结果文本
    pub fn render(&self, name: &str) -> Result<String> {
        let template = self.jinja.get_template(name).map_err(|err| {
            if err.kind() == ErrorKind::TemplateNotFound {
                DubError::TemplateNotFound(PathBuf::from(name))
            } else {
                render_error(name, &err)
            }
        })?;

        let ctx = RenderContext {
            env: &self.snapshot,
        };
        template.render(&ctx).map_err(|err| render_error(name, &err))
    }

    /// 渲染模板并写入输出文件
    ///
    /// 渲染失败时不会碰输出文件；写入本身不是原子的（创建/截断后直接写）。
    pub fn fill_and_write(&self, template: &Path, output: &Path) -> Result<()> {
        let name = template.to_string_lossy();
        let rendered = self.render(&name)?;

        let write_err = |source| DubError::Write {
            path: output.to_path_buf(),
            source,
        };
        let mut file = File::create(output).map_err(write_err)?;
        file.write_all(rendered.as_bytes()).map_err(write_err)?;

        debug!(
            template = %template.display(),
            output = %output.display(),
            bytes = rendered.len(),
            "template rendered"
        );
        Ok(())
    }
}

fn load_template(root: &Path, name: &str) -> std::result::Result<Option<String>, Error> {
    let Some(path) = paths::resolve_under_root(root, name) else {
        return Ok(None);
    };

    debug!(name, path = %path.display(), "loading template");
    match std::fs::read_to_string(&path) {
        Ok(source) => Ok(Some(source)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("could not read template {}", path.display()),
        )
        .with_source(err)),
    }
}

fn render_error(name: &str, err: &Error) -> DubError {
    debug!("{}", err.display_debug_info());
    DubError::Render {
        template: name.to_string(),
        message: err.to_string(),
    }
}
