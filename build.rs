use std::env;
use std::process::Command;

fn main() -> Result<(), String> {
    let package_version = env::var("CARGO_PKG_VERSION").map_err(|e| e.to_string())?;
    let description = match Command::new("git").args(["describe", "--dirty"]).output() {
        Ok(output) if output.status.success() => {
            String::from_utf8(output.stdout).map_err(|e| e.to_string())?
        }
        // Not a git checkout (or no git at all), e.g. when building from a crates.io tarball.
        _ => package_version,
    };
    println!("cargo:rustc-env=MGRENDER_VERSION={}", description.trim());
    println!("cargo:rerun-if-changed=.git/HEAD");
    Ok(())
}
