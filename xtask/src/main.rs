//! Developer workflow commands (`cargo xtask`).
//!
//! Wraps the trunk and cargo invocations used to develop, check, and bundle the
//! browser-hosted site so the repository exposes stable entrypoints through
//! Cargo aliases.

use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode, Stdio};

const SITE_CARGO_FEATURE: &str = "csr";
const TRUNK_INSTALL_HINT: &str = "Install it with `cargo setup-web` (or `cargo install trunk`)";

fn main() -> ExitCode {
    let root = workspace_root();
    let mut args = env::args().skip(1);

    let Some(cmd) = args.next() else {
        print_usage();
        return ExitCode::from(2);
    };

    let rest: Vec<String> = args.collect();

    let result = match cmd.as_str() {
        "setup-web" => setup_web(&root),
        "dev" => dev(&root, rest),
        "build-web" => build_web(&root, rest),
        "check-web" => check_web(&root),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("unknown xtask command: {other}")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask lives under workspace root")
        .to_path_buf()
}

fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           setup-web           Install wasm target and trunk (if missing)\n\
           dev [trunk args]    Start trunk dev server in foreground (defaults to --open)\n\
           build-web [args]    Build the release web bundle with trunk\n\
           check-web           Run site compile checks (CSR native + wasm)\n"
    );
}

fn setup_web(root: &Path) -> Result<(), String> {
    run(
        root,
        "rustup",
        vec!["target", "add", "wasm32-unknown-unknown"],
    )?;

    if command_available("trunk") {
        println!("trunk already installed");
        return Ok(());
    }

    run(root, "cargo", vec!["install", "trunk"])
}

fn dev(root: &Path, args: Vec<String>) -> Result<(), String> {
    require_tool("trunk", TRUNK_INSTALL_HINT)?;

    let mut open = true;
    let mut passthrough = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--open" => open = true,
            "--no-open" => open = false,
            _ => passthrough.push(arg),
        }
    }

    let mut trunk_args = vec!["serve".to_string(), "index.html".to_string()];
    if open {
        trunk_args.push("--open".to_string());
    }
    trunk_args.extend(passthrough);

    run_trunk(site_dir(root), trunk_args)
}

fn build_web(root: &Path, args: Vec<String>) -> Result<(), String> {
    require_tool("trunk", TRUNK_INSTALL_HINT)?;

    let mut trunk_args = vec![
        "build".to_string(),
        "index.html".to_string(),
        "--release".to_string(),
        "--dist".to_string(),
        root.join("target/trunk-dist").display().to_string(),
    ];
    trunk_args.extend(args);

    run_trunk(site_dir(root), trunk_args)
}

fn check_web(root: &Path) -> Result<(), String> {
    run(
        root,
        "cargo",
        vec!["check", "-p", "site", "--features", SITE_CARGO_FEATURE],
    )?;

    if wasm_target_installed() {
        run(
            root,
            "cargo",
            vec![
                "check",
                "-p",
                "site",
                "--target",
                "wasm32-unknown-unknown",
                "--features",
                SITE_CARGO_FEATURE,
            ],
        )?;
    } else {
        eprintln!(
            "warn: wasm32-unknown-unknown target not installed; skipping wasm check (run `cargo setup-web`)"
        );
    }

    Ok(())
}

fn wasm_target_installed() -> bool {
    let Ok(output) = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
    else {
        return false;
    };

    if !output.status.success() {
        return false;
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .any(|line| line.trim() == "wasm32-unknown-unknown")
}

fn command_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

fn require_tool(program: &str, install_hint: &str) -> Result<(), String> {
    if command_available(program) {
        Ok(())
    } else {
        Err(format!("`{program}` is not available. {install_hint}"))
    }
}

fn run(root: &Path, program: &str, args: Vec<&str>) -> Result<(), String> {
    let owned: Vec<String> = args.into_iter().map(ToString::to_string).collect();
    print_command(program, &owned);
    let status = Command::new(program)
        .current_dir(root)
        .args(&owned)
        .status()
        .map_err(|err| format!("failed to start `{program}`: {err}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("`{program}` exited with status {status}"))
    }
}

fn run_trunk(cwd: PathBuf, args: Vec<String>) -> Result<(), String> {
    print_command("trunk", &args);
    let mut cmd = Command::new("trunk");
    cmd.current_dir(cwd).args(&args);

    // Some environments export NO_COLOR=1, but trunk expects "true"/"false".
    if env::var("NO_COLOR").as_deref() == Ok("1") {
        cmd.env("NO_COLOR", "true");
    }

    let status = cmd
        .status()
        .map_err(|err| format!("failed to start `trunk`: {err}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!("`trunk` exited with status {status}"))
    }
}

fn site_dir(root: &Path) -> PathBuf {
    root.join("crates/site")
}

fn print_command(program: &str, args: &[String]) {
    if args.is_empty() {
        println!("+ {program}");
        return;
    }

    println!("+ {program} {}", args.join(" "));
}
