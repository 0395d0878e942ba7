use std::{
    env,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{anyhow, bail, Context};

// build builds the package at the given path.
// Rust builds to ELF files by default, see elf_to_bin for the flat binary.
// e.g. cargo build --manifest-path bootloader/boot-sector/Cargo.toml \
//                  --config bootloader/boot-sector/.cargo/config.toml \
//                  --release -Zunstable-options --out-dir bin
// @param out_dir: Where the ELF file is copied to.
// @param path: The path to the package.
// @param package_name: The name of the package to build.
// @return: The path to the ELF file.
pub fn build(out_dir: &Path, path: &Path, package_name: &str) -> anyhow::Result<PathBuf> {
    let cargo = env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    let mut cmd = Command::new(cargo);

    cmd.arg("build").arg("--manifest-path").arg(path.join("Cargo.toml"));

    // no_std packages carry their target and build-std setup here.
    let cargo_config_path = path.join(".cargo/config.toml");
    if cargo_config_path.exists() {
        cmd.arg("--config").arg(&cargo_config_path);
    }

    cmd.arg("--release")
        .arg("-Zunstable-options") // Needed for --out-dir
        .arg("--out-dir")
        .arg(out_dir);

    log::info!("building {}", package_name);
    let status = cmd
        .status()
        .with_context(|| format!("failed to execute cargo build on {}", package_name))?;
    if !status.success() {
        bail!("cargo build on {} exited with {}", package_name, status);
    }

    Ok(out_dir.join(package_name))
}

// elf_to_bin converts an ELF file to a binary file using llvm-objcopy.
// e.g. llvm-objcopy -I elf32-i386 -O binary boot-sector boot-sector.bin
// @param elf_path: The path to the ELF file.
// @return: The path to the binary file.
pub fn elf_to_bin(elf_path: &Path) -> anyhow::Result<PathBuf> {
    let bin_path = elf_path.with_extension("bin");

    let llvm_tools = llvm_tools::LlvmTools::new()
        .map_err(|err| anyhow!("failed to find llvm-tools: {:?}", err))?;
    let objcopy = llvm_tools
        .tool(&llvm_tools::exe("llvm-objcopy"))
        .context("failed to find llvm-objcopy")?;

    let mut cmd = Command::new(objcopy);
    cmd.arg("-I")
        .arg("elf32-i386")
        .arg("-O")
        .arg("binary")
        .arg(elf_path)
        .arg(&bin_path);

    let status = cmd.status().context("failed to execute objcopy")?;
    if !status.success() {
        bail!("objcopy on {} exited with {}", elf_path.display(), status);
    }

    Ok(bin_path)
}
