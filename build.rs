use clap::CommandFactory;
use std::fs;
use std::io;
use std::path::Path;

// Mock crate root modules that src/cli/args.rs depends on
#[allow(dead_code)]
mod annotate {
    #[derive(Debug, Clone, Copy, clap::ValueEnum)]
    pub enum OutputNaming {
        Suffix,
        Prefix,
    }
}

#[allow(dead_code)]
#[path = "src/cli/args.rs"]
mod args;

use args::Cli;

fn main() -> std::io::Result<()> {
    generate_man_pages()?;

    println!("cargo:rerun-if-changed=src/cli/args.rs");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}

fn generate_man_pages() -> std::io::Result<()> {
    let cmd = Cli::command();
    let repo_man_dir = Path::new("man").join("man1");

    match render_to_dir(&cmd, &repo_man_dir) {
        Ok(()) => Ok(()),
        Err(err) => {
            let out_dir = std::env::var("OUT_DIR").unwrap_or_else(|_| "target".to_string());
            let fallback_dir = Path::new(&out_dir).join("man1");
            println!(
                "cargo:warning=Cannot write man pages to {} ({}). Writing to {} instead.",
                repo_man_dir.display(),
                describe(&err),
                fallback_dir.display()
            );
            render_to_dir(&cmd, &fallback_dir)
        }
    }
}

fn describe(err: &io::Error) -> String {
    if err.kind() == io::ErrorKind::PermissionDenied {
        "permission denied".to_string()
    } else {
        err.to_string()
    }
}

fn render_to_dir(cmd: &clap::Command, dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;
    fs::write(dir.join(format!("{}.1", cmd.get_name())), buffer)
}
