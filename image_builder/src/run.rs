use std::{path::Path, process::Command};

use anyhow::{bail, Context};

pub fn run(qemu: &str, image_path: &Path) -> anyhow::Result<()> {
    if !image_path.exists() {
        bail!("no disk image at '{}', run build first", image_path.display());
    }

    let mut cmd = Command::new(qemu);
    cmd.arg("-drive")
        .arg(format!("format=raw,file={}", image_path.display()));

    log::info!("booting {} in {}", image_path.display(), qemu);
    let status = cmd
        .status()
        .with_context(|| format!("failed to launch {}", qemu))?;
    if !status.success() {
        bail!("{} exited with {}", qemu, status);
    }

    Ok(())
}
