use std::process::Command;

// Embeds the short git SHA into `tracker --version` output.
fn main() {
    println!(
        "cargo:rustc-env=TRACKER_BUILD_SHA={}",
        git_short_sha().unwrap_or_else(|| "unknown".to_string())
    );
}

fn git_short_sha() -> Option<String> {
    let root = std::env::var("CARGO_MANIFEST_DIR").ok()?;
    let out = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .current_dir(root)
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let sha = String::from_utf8_lossy(&out.stdout).trim().to_string();
    if sha.is_empty() { None } else { Some(sha) }
}
