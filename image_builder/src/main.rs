mod compile;
mod image;
mod run;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

const BOOT_SECTOR_DIR: &str = "bootloader/boot-sector";
const BOOT_SECTOR_PACKAGE: &str = "boot-sector";
const DISK_IMAGE_NAME: &str = "disk_image.bin";

#[derive(Args)]
struct BuildOptions {
    /// Where build artifacts and the disk image are written.
    #[arg(short = 'o', long = "out-dir", env = "OUT_DIR", default_value = "bin")]
    out_dir: PathBuf,
    /// Size of the disk image in 512 byte sectors.
    #[arg(short = 's', long = "sectors", default_value_t = image::DEFAULT_DISK_SECTORS)]
    sectors: u32,
}

#[derive(Args)]
struct RunOptions {
    #[arg(short = 'p', long = "image-path", default_value = "bin/disk_image.bin")]
    image_path: PathBuf,
    #[arg(long = "qemu", default_value = "qemu-system-i386")]
    qemu: String,
}

#[derive(Subcommand)]
enum Cmd {
    /// Build the boot sector and write a raw disk image.
    Build(BuildOptions),
    /// Boot a disk image in QEMU.
    Run(RunOptions),
}

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = try_main() {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Cmd::Build(opts) => build(opts)?,
        Cmd::Run(opts) => run::run(&opts.qemu, &opts.image_path)?,
    }

    Ok(())
}

fn build(opts: &BuildOptions) -> anyhow::Result<()> {
    let elf_path = compile::build(&opts.out_dir, Path::new(BOOT_SECTOR_DIR), BOOT_SECTOR_PACKAGE)
        .context("failed to build boot sector")?;
    let bin_path = compile::elf_to_bin(&elf_path).context("failed to convert boot sector")?;

    let image_path = opts.out_dir.join(DISK_IMAGE_NAME);
    image::build_image(&bin_path, &image_path, opts.sectors)
        .context("failed to build disk image")?;

    log::info!("disk image written to {}", image_path.display());
    Ok(())
}
