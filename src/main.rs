use anyhow::Result;
use bitread::CommitDisplayFormat;
use bitread::areas::repository::Repository;
use bitread::artifacts::core::{PagerWriter, pager_enabled};
use bitread::commands::plumbing::hash_object::hash_object;
use bitread::commands::porcelain::log::LogOptions;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bitread",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A read-only git object store reader",
    long_about = "This tool reads an existing git repository: it resolves HEAD, \
    decodes loose commit objects and walks their history. \
    It never writes to the repository.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        global = true,
        value_name = "PATH",
        help = "Run as if started in <PATH> instead of the current directory"
    )]
    directory: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "log",
        about = "Show the commit history reachable from HEAD",
        long_about = "This command lists the commits reachable from HEAD, \
        newest authored first. Merged branches are interleaved by author time \
        and every commit is shown once."
    )]
    Log {
        #[arg(long, help = "Shorthand for --format=oneline --abbrev-commit")]
        oneline: bool,
        #[arg(long = "abbrev-commit", help = "Show abbreviated commit IDs")]
        abbrev_commit: bool,
        #[arg(long, value_enum, default_value_t = CommitDisplayFormat::Medium)]
        format: CommitDisplayFormat,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of a commit object",
        long_about = "This command prints a commit object in store format. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Compute the blob ID of a file",
        long_about = "This command hashes a file as a blob object and prints its ID. \
        Nothing is written to the object database."
    )]
    HashObject {
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "show-head",
        about = "Print the commit HEAD points to",
        long_about = "This command prints the ID of the commit HEAD resolves to, \
        or nothing for a repository without commits."
    )]
    ShowHead,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let pwd = match cli.directory {
        Some(directory) => directory,
        None => std::env::current_dir()?,
    };

    match &cli.command {
        Commands::Log {
            oneline,
            abbrev_commit,
            format,
        } => {
            let repository = Repository::open(&pwd)?;
            let opts = LogOptions {
                oneline: *oneline,
                abbrev_commit: *abbrev_commit,
                format: *format,
            };

            if pager_enabled() {
                let pager = minus::Pager::new();
                let mut writer = PagerWriter::new(pager.clone());
                repository.log(&opts, &mut writer)?;
                writer.flush()?;

                minus::page_all(pager)?;
            } else {
                repository.log(&opts, &mut std::io::stdout().lock())?;
            }
        }
        Commands::CatFile { sha } => {
            let repository = Repository::open(&pwd)?;

            repository.cat_file(sha, &mut std::io::stdout().lock())?
        }
        Commands::HashObject { file } => {
            hash_object(&pwd.join(file), &mut std::io::stdout().lock())?
        }
        Commands::ShowHead => {
            let repository = Repository::open(&pwd)?;

            repository.show_head(&mut std::io::stdout().lock())?
        }
    }

    Ok(())
}
