use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    println!("cargo:rerun-if-env-changed=SKIP_TAILWINDCSS");
    println!("cargo:rerun-if-changed=templates");
    println!("cargo:rerun-if-changed=tailwind.config.js");

    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").context("OUT_DIR is not set")?);
    let output_path = out_dir.join("index.css");

    let skip = std::env::var_os("SKIP_TAILWINDCSS")
        .map(|v| !v.is_empty())
        .unwrap_or(false);
    if skip {
        return copy_base_css(&output_path);
    }

    let output = match Command::new("tailwindcss")
        .args(["-c", "tailwind.config.js", "-i", "templates/base.css", "-o"])
        .arg(&output_path)
        .output()
    {
        Ok(output) => output,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            println!("cargo:warning=tailwindcss CLI not found, serving the unprocessed base stylesheet");
            return copy_base_css(&output_path);
        }
        Err(error) => return Err(error).context("failed to run tailwindcss CLI"),
    };

    if !output.status.success() {
        println!("cargo:warning=tailwindcss stdout:");
        for line in String::from_utf8_lossy(&output.stdout).lines() {
            println!("cargo:warning={line}");
        }
        println!("cargo:warning=tailwindcss stderr:");
        for line in String::from_utf8_lossy(&output.stderr).lines() {
            println!("cargo:warning={line}");
        }
        Err(anyhow::anyhow!("tailwindcss CLI failed"))
    } else {
        Ok(())
    }
}

fn copy_base_css(output_path: &Path) -> anyhow::Result<()> {
    std::fs::copy("templates/base.css", output_path)
        .with_context(|| format!("failed to copy base stylesheet to `{}`", output_path.display()))?;
    Ok(())
}
