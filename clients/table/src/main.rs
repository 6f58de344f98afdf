use card_game::{
    DeckApi, DeckConfig, DrawResult, HttpDeckClient, RequestMethod, RoundReport, SafeDrawer,
    Table,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

type BoxErr = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "card-table", about = "Deal and check blackjack against a deck of cards API")]
struct Cli {
    /// Scheme and host of the deck API
    #[arg(long, env = "BASE_URL")]
    base_url: String,

    /// Accept self-signed or otherwise invalid TLS certificates
    #[arg(long, env = "ACCEPT_INVALID_CERTS", default_value_t = true, action = clap::ArgAction::Set)]
    accept_invalid_certs: bool,

    /// Reshuffles allowed for a single exhausted draw
    #[arg(long, env = "MAX_RESHUFFLES", default_value_t = card_game::config::DEFAULT_MAX_RESHUFFLES)]
    max_reshuffles: u32,

    /// Rounds to play before giving up on blackjack
    #[arg(long, env = "MAX_ROUNDS", default_value_t = card_game::config::DEFAULT_MAX_ROUNDS)]
    max_rounds: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    Get,
    Post,
}

impl From<Method> for RequestMethod {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => RequestMethod::Get,
            Method::Post => RequestMethod::Post,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Check the service answers on its root URL
    Status,

    /// Create a new unshuffled deck
    NewDeck {
        #[arg(long, value_enum, default_value = "get")]
        method: Method,

        /// Include the two jokers
        #[arg(long)]
        jokers: bool,
    },

    /// Create a new shuffled deck
    ShuffledDeck {
        #[arg(long, value_enum, default_value = "get")]
        method: Method,

        #[arg(long, default_value_t = 1)]
        deck_count: u32,
    },

    /// Reshuffle an existing deck
    Reshuffle {
        deck_id: String,

        /// Only shuffle the cards still in the deck
        #[arg(long)]
        remaining: bool,
    },

    /// Draw cards from a deck
    Draw {
        deck_id: String,

        #[arg(long, default_value_t = 2)]
        count: usize,

        /// Reshuffle and retry when the deck runs out
        #[arg(long)]
        safe: bool,
    },

    /// Deal three cards to each player into piles player1 and player2
    Deal { deck_id: String },

    /// New deck, reshuffle, one deal of three cards each, report blackjack
    FixedDeal,

    /// New deck, reshuffle, deal two cards each until a player has blackjack
    UntilBlackjack,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DeckConfig {
        base_url: cli.base_url,
        accept_invalid_certs: cli.accept_invalid_certs,
        max_reshuffles: cli.max_reshuffles,
        max_rounds: cli.max_rounds,
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start runtime: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run(cli.command, config)) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

async fn run(command: Command, config: DeckConfig) -> Result<(), BoxErr> {
    let client = HttpDeckClient::new(config.clone());
    log::debug!("Using deck API at {}", config.base_url);

    match command {
        Command::Status => {
            let status = client.status().await?;
            log::info!("{} answered with status {status}", config.base_url);
            if status != 200 {
                return Err(format!("expected status 200, got {status}").into());
            }
        }
        Command::NewDeck { method, jokers } => {
            let deck = client.create_deck(method.into(), jokers).await?;
            print_json(&deck)?;
        }
        Command::ShuffledDeck { method, deck_count } => {
            let deck = client
                .create_shuffled_deck(method.into(), deck_count)
                .await?;
            print_json(&deck)?;
        }
        Command::Reshuffle { deck_id, remaining } => {
            let deck = client.reshuffle_deck(&deck_id, remaining).await?;
            print_json(&deck)?;
        }
        Command::Draw {
            deck_id,
            count,
            safe,
        } => {
            let draw = if safe {
                SafeDrawer::new(&client, config.max_reshuffles)
                    .draw_safe(&deck_id, count)
                    .await?
            } else {
                client.draw_cards(&deck_id, count).await?
            };
            log_hand("Drew", &draw);
            print_json(&draw)?;
        }
        Command::Deal { deck_id } => {
            let table = Table::from_config(client, &config);
            let dealt = table.deal_cards_to_players(&deck_id).await?;
            print_json(&dealt.player1_pile)?;
            print_json(&dealt.player2_pile)?;
        }
        Command::FixedDeal => {
            let table = Table::from_config(client, &config);
            let deck_id = table.prepare_deck().await?;
            let report = table.play_fixed_deal(&deck_id).await?;
            log_report(&report);
        }
        Command::UntilBlackjack => {
            let table = Table::from_config(client, &config);
            let deck_id = table.prepare_deck().await?;
            let report = table.play_until_blackjack(&deck_id).await?;
            log_report(&report);
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), BoxErr> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn log_hand(label: &str, draw: &DrawResult) {
    if draw.success {
        log::info!(
            "{label} [{}], {} remaining",
            draw.hand().to_display(),
            draw.remaining.unwrap_or_default()
        );
    } else {
        log::warn!(
            "Draw failed: {}",
            draw.error.as_deref().unwrap_or("no error given")
        );
    }
}

fn log_report(report: &RoundReport) {
    log::info!("Finished after {} round(s)", report.rounds);
    log_hand("Player 1", &report.player1);
    log_hand("Player 2", &report.player2);
    println!("{}", report.holder().announcement());
}
