use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A repository with one commit containing `README.md`.
pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    init_repo(temp_dir.path());

    std::fs::write(temp_dir.path().join("README.md"), "# Test\n").unwrap();
    git(temp_dir.path(), &["add", "."]);
    git(temp_dir.path(), &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// Numbered source lines `line 1` .. `line {count}`.
pub(crate) fn numbered_lines(count: usize) -> String {
    (1..=count).map(|i| format!("line {}\n", i)).collect()
}

/// An outer repository pinning a nested repository at `nested_name`.
///
/// The nested repository holds one commit with `file_name` containing
/// `content`; the outer repository records that commit as a gitlink.
pub(crate) fn create_repo_with_nested(nested_name: &str, file_name: &str, content: &str) -> TempDir {
    let outer = create_test_repo();
    let nested = outer.path().join(nested_name);
    std::fs::create_dir_all(&nested).unwrap();
    init_repo(&nested);

    std::fs::write(nested.join(file_name), content).unwrap();
    git(&nested, &["add", "."]);
    git(&nested, &["commit", "-m", "Initial source"]);

    let sha = git(&nested, &["rev-parse", "HEAD"]);
    let cacheinfo = format!("160000,{},{}", sha, nested_name);
    git(outer.path(), &["update-index", "--add", "--cacheinfo", &cacheinfo]);
    git(outer.path(), &["commit", "-m", "Pin nested repository"]);

    outer
}

/// Overwrite a file in a repository and commit it.
pub(crate) fn commit_file(repo_dir: &Path, file_name: &str, content: &str) {
    std::fs::write(repo_dir.join(file_name), content).unwrap();
    git(repo_dir, &["add", file_name]);
    git(repo_dir, &["commit", "-m", &format!("Update {}", file_name)]);
}

fn init_repo(path: &Path) {
    git(path, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
}

fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
