use {
  anyhow::Context,
  clap::{Parser, Subcommand},
  hn_client::{Client, Config, StoryList},
  serde::Serialize,
  std::{backtrace::BacktraceStatus, io, process},
  tracing_subscriber::EnvFilter,
};

const DEFAULT_LOG_FILTER: &str = "warn";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

#[derive(Debug, Parser)]
#[command(version, about = "Query the Hacker News API")]
struct Arguments {
  #[arg(
    long,
    env = "HN_API_BASE_URL",
    default_value = Config::API_BASE_URL,
    help = "API base URL"
  )]
  base_url: String,
  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  #[command(about = "Print a story, comment, job, poll or poll option")]
  Item { id: u64 },
  #[command(about = "Print the current largest item id")]
  MaxItem,
  #[command(about = "Print ranked story ids from one of the story lists")]
  Stories {
    #[arg(help = "One of: top, new, ask, show, job")]
    list: StoryList,
    #[arg(long, short, default_value_t = 10)]
    number: usize,
  },
  #[command(about = "Print recently changed items and profiles")]
  Updates,
  #[command(about = "Print a user profile")]
  User { username: String },
}

impl Command {
  fn run(self, client: &Client) -> Result {
    match self {
      Self::Item { id } => print_json(
        &client
          .fetch_item(id)
          .with_context(|| format!("failed to fetch item {id}"))?,
      ),
      Self::MaxItem => print_json(
        &client
          .fetch_max_item()
          .context("failed to fetch max item id")?,
      ),
      Self::Stories { list, number } => print_json(
        &client
          .fetch_story_list(list, number)
          .with_context(|| format!("failed to load {list} stories"))?,
      ),
      Self::Updates => {
        print_json(&client.fetch_updates().context("failed to fetch updates")?)
      }
      Self::User { username } => print_json(
        &client
          .fetch_user(&username)
          .with_context(|| format!("failed to fetch user {username}"))?,
      ),
    }
  }
}

fn initialize_logging() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn print_json(value: &impl Serialize) -> Result {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

fn run() -> Result {
  let arguments = Arguments::parse();

  let client = Client::new(Config::default().with_base_url(arguments.base_url));

  arguments.command.run(&client)
}

fn main() {
  initialize_logging();

  if let Err(error) = run() {
    eprintln!("error: {error}");

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {error}");
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      eprintln!("backtrace:");
      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
