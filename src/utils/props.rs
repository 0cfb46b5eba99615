//! 环境变量 → 属性键 转换
//!
//! 两个辅助函数同时作为模板中的全局函数暴露（见 `template::functions`）：
//!
//! ```text
//! KAFKA_LOG_RETENTION_HOURS=168   --env_to_props("KAFKA_", "kafka.")-->  kafka.log.retention.hours=168
//! KAFKA_FOO__BAR=1                --env_to_props("KAFKA_", "")------->  foo_bar=1
//! "kafka=WARN,kafka.controller=DEBUG"  --parse_log_directives-->  {kafka: WARN, kafka.controller: DEBUG}
//! ```

use crate::types::{EnvSnapshot, PropertyMap};

/// 将带前缀的环境变量转换为点分属性键
///
/// 去掉 `env_prefix` 后转小写，`_` 变 `.`，再把 `..` 折回 `_`，
/// 这样源变量名里的 `__` 会在属性键中保留为一个字面量 `_`。
pub fn env_to_props<S: AsRef<str>>(
    env: &EnvSnapshot,
    env_prefix: &str,
    prop_prefix: &str,
    exclude: &[S],
) -> PropertyMap {
    env.iter()
        .filter(|(name, _)| !exclude.iter().any(|e| e.as_ref() == *name))
        .filter_map(|(name, value)| {
            let suffix = name.strip_prefix(env_prefix)?;
            Some((prop_key(prop_prefix, suffix), value.to_string()))
        })
        .collect()
}

fn prop_key(prop_prefix: &str, suffix: &str) -> String {
    let dotted = suffix.to_lowercase().replace('_', ".").replace("..", "_");
    format!("{}{}", prop_prefix, dotted)
}

/// 解析 `logger=LEVEL,logger2=LEVEL` 形式的覆盖串，合并到默认表之上
///
/// 不恰好包含一个 `=` 的片段直接忽略；重复键以最后一次为准。
/// `defaults` 不会被修改。
pub fn parse_log_directives(overrides: &str, defaults: &PropertyMap) -> PropertyMap {
    let mut directives = defaults.clone();

    for segment in overrides.split(',') {
        let tokens: Vec<&str> = segment.split('=').collect();
        if let [logger, level] = tokens.as_slice() {
            directives.insert(logger.to_string(), level.to_string());
        }
    }

    directives
}
