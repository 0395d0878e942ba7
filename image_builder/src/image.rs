use std::{fs::File, io::Seek, path::Path};

use anyhow::{bail, Context};
use mbrman::MBR;

pub const SECTOR_SIZE: u32 = 512;
/// 1 MiB, plenty for QEMU to treat the image as a hard disk.
pub const DEFAULT_DISK_SECTORS: u32 = 2048;

// build_image builds the disk image.
// Creates a disk image with the following layout:
// 0x0000 - 0x01FF: MBR (boot sector)
// 0x0200 - end:    zero padding up to `sectors` sectors
// @param boot_sector_path: The path to the flat boot sector binary.
// @param disk_image_path: Where the disk image is written.
// @param sectors: Size of the image in sectors, at least one.
pub fn build_image(
    boot_sector_path: &Path,
    disk_image_path: &Path,
    sectors: u32,
) -> anyhow::Result<()> {
    let mut boot_sector = File::open(boot_sector_path).with_context(|| {
        format!(
            "failed to open boot sector at '{}'",
            boot_sector_path.display()
        )
    })?;

    let len = boot_sector.metadata()?.len();
    if len != u64::from(SECTOR_SIZE) {
        bail!(
            "boot sector '{}' is {} bytes, expected {}",
            boot_sector_path.display(),
            len,
            SECTOR_SIZE
        );
    }

    // Rejects a missing 0xAA55 signature.
    let mut mbr = MBR::read_from(&mut boot_sector, SECTOR_SIZE)
        .with_context(|| format!("'{}' is not a valid MBR", boot_sector_path.display()))?;

    let mut disk_image = File::create(disk_image_path).with_context(|| {
        format!(
            "failed to create disk image at '{}'",
            disk_image_path.display()
        )
    })?;

    mbr.write_into(&mut disk_image)
        .context("failed to write MBR into disk image")?;
    let written = disk_image.stream_position()?;
    if written != u64::from(SECTOR_SIZE) {
        bail!("MBR took {} bytes, expected {}", written, SECTOR_SIZE);
    }

    let disk_size = u64::from(sectors.max(1)) * u64::from(SECTOR_SIZE);
    disk_image.set_len(disk_size).with_context(|| {
        format!(
            "failed to set disk image size at '{}' to {}",
            disk_image_path.display(),
            disk_size
        )
    })?;

    Ok(())
}
