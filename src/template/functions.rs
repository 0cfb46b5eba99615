//! 模板全局函数
//!
//! 保持与既有 Jinja2 配置模板相同的调用方式：
//!
//! ```text
//! {% set props = env_to_props('KAFKA_', 'kafka.', exclude=['KAFKA_VERSION']) %}
//! {% set loggers = parse_log4j_loggers(env['KAFKA_LOG4J_LOGGERS'], {'kafka': 'INFO'}) %}
//! ```
//!
//! 可选参数既可以按位置传，也可以按关键字传。

use crate::types::{EnvSnapshot, PropertyMap};
use crate::utils::props;
use minijinja::value::{Kwargs, Value, ValueKind};
use minijinja::{Environment, Error, ErrorKind};
use std::sync::Arc;

/// 注册 `env_to_props` 与 `parse_log4j_loggers`
pub fn register(jinja: &mut Environment<'static>, snapshot: Arc<EnvSnapshot>) {
    jinja.add_function(
        "env_to_props",
        move |env_prefix: String,
              prop_prefix: String,
              exclude: Option<Vec<String>>,
              kwargs: Kwargs|
              -> Result<Value, Error> {
            let exclude = match exclude {
                Some(exclude) => exclude,
                None => kwargs
                    .get::<Option<Vec<String>>>("exclude")?
                    .unwrap_or_default(),
            };
            kwargs.assert_all_used()?;

            let properties =
                props::env_to_props(&snapshot, &env_prefix, &prop_prefix, exclude.as_slice());
            Ok(Value::from_serialize(&properties))
        },
    );

    jinja.add_function(
        "parse_log4j_loggers",
        |overrides: String, defaults: Option<Value>, kwargs: Kwargs| -> Result<Value, Error> {
            let defaults = match defaults {
                Some(defaults) => defaults,
                None => kwargs
                    .get::<Option<Value>>("defaults")?
                    .unwrap_or(Value::UNDEFINED),
            };
            kwargs.assert_all_used()?;

            let defaults = value_to_map(&defaults)?;
            let directives = props::parse_log_directives(&overrides, &defaults);
            Ok(Value::from_serialize(&directives))
        },
    );
}

/// 模板里的 dict 转成属性表，值统一按字符串处理
fn value_to_map(value: &Value) -> Result<PropertyMap, Error> {
    if value.is_undefined() || value.is_none() {
        return Ok(PropertyMap::new());
    }

    if value.kind() != ValueKind::Map {
        return Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("defaults must be a mapping, got {:?}", value.kind()),
        ));
    }

    let mut map = PropertyMap::new();
    for key in value.try_iter()? {
        let item = value.get_item(&key)?;
        map.insert(key.to_string(), item.to_string());
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(source: &str, pairs: &[(&str, &str)]) -> Result<String, Error> {
        let snapshot: EnvSnapshot = pairs.iter().copied().collect();
        let mut jinja = Environment::new();
        jinja.set_unknown_method_callback(minijinja_contrib::pycompat::unknown_method_callback);
        register(&mut jinja, Arc::new(snapshot));
        jinja.render_str(source, ())
    }

    #[test]
    fn test_env_to_props_positional_exclude() {
        let out = render(
            "{% for k, v in env_to_props('KAFKA_', 'kafka.', ['KAFKA_VERSION'])|dictsort %}{{ k }}={{ v }};{% endfor %}",
            &[("KAFKA_VERSION", "3"), ("KAFKA_LOG_DIRS", "/data"), ("HOME", "/root")],
        )
        .unwrap();

        assert_eq!(out, "kafka.log.dirs=/data;");
    }

    #[test]
    fn test_env_to_props_keyword_exclude() {
        let out = render(
            "{% for k, v in env_to_props('KAFKA_', '', exclude=['KAFKA_B']).items() %}{{ k }}={{ v }};{% endfor %}",
            &[("KAFKA_A", "1"), ("KAFKA_B", "2")],
        )
        .unwrap();

        assert_eq!(out, "a=1;");
    }

    #[test]
    fn test_env_to_props_rejects_unknown_keyword() {
        let result = render("{{ env_to_props('A_', '', excludes=['A_B']) }}", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_log4j_loggers_with_defaults() {
        let out = render(
            "{% for k, v in parse_log4j_loggers('kafka=DEBUG,zk=TRACE', {'kafka': 'INFO', 'state': 'WARN'})|dictsort %}{{ k }}={{ v }};{% endfor %}",
            &[],
        )
        .unwrap();

        assert_eq!(out, "kafka=DEBUG;state=WARN;zk=TRACE;");
    }

    #[test]
    fn test_parse_log4j_loggers_keyword_defaults() {
        let out = render(
            "{{ parse_log4j_loggers('bad', defaults={'root': 'INFO'})['root'] }}",
            &[],
        )
        .unwrap();

        assert_eq!(out, "INFO");
    }

    #[test]
    fn test_parse_log4j_loggers_without_defaults() {
        let out = render("{{ parse_log4j_loggers('a=1')['a'] }}", &[]).unwrap();
        assert_eq!(out, "1");
    }

    #[test]
    fn test_parse_log4j_loggers_rejects_non_mapping_defaults() {
        let result = render("{{ parse_log4j_loggers('a=1', ['x']) }}", &[]);
        assert!(result.is_err());
    }
}
