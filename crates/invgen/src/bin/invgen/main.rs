mod cli;

fn main() {
    use clap::Parser;
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_env("INVGEN_LOG"))
        .with_writer(std::io::stderr)
        .init();

    for new_path in cli.directory.iter() {
        match new_path.canonicalize() {
            Err(e) => {
                eprintln!(
                    "Failed to resolve path for -C/--directory {}\n{}",
                    new_path.display(),
                    e
                );
                std::process::exit(1);
            }
            Ok(cwd) => {
                if let Err(err) = std::env::set_current_dir(&cwd) {
                    eprintln!("Failed to set work directory to {}\n{}", cwd.display(), err);
                    std::process::exit(1);
                }

                tracing::info!(directory=%cwd.display(), "Changed working directory");
            }
        }
    }

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Failed to resolve work directory\n{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = invgen::generate::generate(&root) {
        for error in e.chain() {
            eprintln!("{error}")
        }
        std::process::exit(1);
    }
}
