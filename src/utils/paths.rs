//! 跨平台路径处理工具 (传统原则：常识性接口设计)

use crate::types::PathMode;
use std::path::{Component, Path, PathBuf};

/// 检查路径是否具备指定权限
///
/// Unix 上使用 access(2)，以当前用户的实际权限为准（例如 root 对只读文件也可写）。
#[cfg(unix)]
pub fn check_path_for_permissions(path: &Path, mode: PathMode) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };

    let flag = match mode {
        PathMode::Writable => libc::W_OK,
        PathMode::Readable => libc::R_OK,
        PathMode::Executable => libc::X_OK,
        PathMode::Exists => libc::F_OK,
    };

    // SAFETY: c_path 是以 NUL 结尾的有效 C 字符串，调用期间一直存活
    unsafe { libc::access(c_path.as_ptr(), flag) == 0 }
}

/// 非 Unix 平台：只能根据元数据近似判断
#[cfg(not(unix))]
pub fn check_path_for_permissions(path: &Path, mode: PathMode) -> bool {
    let Ok(meta) = std::fs::metadata(path) else {
        return false;
    };

    match mode {
        PathMode::Writable => !meta.permissions().readonly(),
        PathMode::Readable | PathMode::Executable | PathMode::Exists => true,
    }
}

/// 在搜索根目录下解析模板名
///
/// 绝对路径原样使用，相对路径拼接到 `root`；包含 `..` 的名字返回 None。
pub fn resolve_under_root(root: &Path, name: &str) -> Option<PathBuf> {
    let candidate = Path::new(name);

    if candidate
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return None;
    }

    if candidate.is_absolute() {
        Some(candidate.to_path_buf())
    } else {
        Some(root.join(candidate))
    }
}

/// 将命令行给出的路径转成绝对路径（相对当前工作目录）
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_exists_on_created_and_deleted_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("present.txt");
        fs::write(&path, "x").unwrap();

        assert!(check_path_for_permissions(&path, PathMode::Exists));

        fs::remove_file(&path).unwrap();
        assert!(!check_path_for_permissions(&path, PathMode::Exists));
    }

    #[test]
    fn test_missing_path_fails_every_mode() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing");

        for mode in [
            PathMode::Writable,
            PathMode::Readable,
            PathMode::Executable,
            PathMode::Exists,
        ] {
            assert!(!check_path_for_permissions(&path, mode), "{mode}");
        }
    }

    #[test]
    fn test_temp_dir_is_readable_and_writable() {
        let temp_dir = tempfile::tempdir().unwrap();

        assert!(check_path_for_permissions(temp_dir.path(), PathMode::Readable));
        assert!(check_path_for_permissions(temp_dir.path(), PathMode::Writable));
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::tempdir().unwrap();
        let script = temp_dir.path().join("run.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();

        fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();
        assert!(!check_path_for_permissions(&script, PathMode::Executable));

        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(check_path_for_permissions(&script, PathMode::Executable));
    }

    #[test]
    fn test_resolve_under_root() {
        let root = Path::new("/etc/templates");

        assert_eq!(
            resolve_under_root(root, "kafka.properties.tmpl"),
            Some(PathBuf::from("/etc/templates/kafka.properties.tmpl"))
        );
        assert_eq!(
            resolve_under_root(root, "/opt/conf/base.tmpl"),
            Some(PathBuf::from("/opt/conf/base.tmpl"))
        );
        assert_eq!(resolve_under_root(root, "../secret"), None);
        assert_eq!(resolve_under_root(root, "/etc/../secret"), None);
    }

    #[test]
    fn test_absolutize_relative_path() {
        let abs = absolutize(Path::new("conf/app.tmpl")).unwrap();
        assert!(abs.is_absolute());
        assert!(abs.ends_with("conf/app.tmpl"));
    }
}
